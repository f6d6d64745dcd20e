//! Stream a canned assistant answer into a document and print each display frame.
//!
//! Run:
//!   RUST_LOG=mdbalance=trace cargo run --example simulated_stream

use mdbalance::{
    ChunkStrategy, Options, SimulatedStream, StreamError, StreamingCursor, StreamingDocument,
};
use tracing_subscriber::EnvFilter;

const ANSWER: &str = "Sure! Here is a **minimal** example in _Rust_:\n\n\
```rust\nfn main() {\n    println!(\"hello\");\n}\n```\n\n\
Run it with `cargo run` and ~~pray~~ enjoy.\n";

fn main() -> Result<(), StreamError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut doc =
        StreamingDocument::new(Options::default()).with_display_hook(StreamingCursor::default());

    doc.start("")?;
    let chunks = SimulatedStream::new(ANSWER, ChunkStrategy::PseudoRandom { seed: 42, max_bytes: 12 });
    for (n, chunk) in chunks.enumerate() {
        let display = doc.append(&chunk)?;
        println!("--- frame {n} ---\n{display}");
    }

    let content = doc.finish()?;
    println!("--- final ---\n{content}");
    Ok(())
}
