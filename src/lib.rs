//! Keep partially streamed Markdown renderable.
//!
//! LLM output arrives in chunks, and a chunk boundary often falls inside a code fence or an
//! emphasis span. [`pending::close_open_delimiters`] appends the closers needed to render such a
//! prefix cleanly, and [`StreamingDocument`] wires it into a stream: it keeps the raw text as
//! received and rebalances a separate display string on every chunk.

pub mod error;
pub mod hook;
pub mod options;
pub mod pending;
pub mod producer;
pub mod stream;
pub mod types;

pub use error::*;
pub use hook::*;
pub use options::*;
pub use producer::*;
pub use stream::*;
pub use types::*;
