#![allow(dead_code)]

use mdbalance::{ChunkStrategy, Options, SimulatedStream, StreamingDocument};

pub fn strategies(case_name: &str, trials: u32, max_bytes: usize) -> Vec<(String, ChunkStrategy)> {
    let mut out = vec![
        ("whole".to_string(), ChunkStrategy::Whole),
        ("lines".to_string(), ChunkStrategy::Lines),
        ("chars".to_string(), ChunkStrategy::Chars),
        ("bytes3".to_string(), ChunkStrategy::Bytes(3)),
    ];
    let base = case_name
        .bytes()
        .fold(0x811c_9dc5u32, |h, b| (h ^ u32::from(b)).wrapping_mul(0x0100_0193));
    for t in 0..trials {
        out.push((
            format!("rand t={t}"),
            ChunkStrategy::PseudoRandom {
                seed: base.wrapping_add(t),
                max_bytes,
            },
        ));
    }
    out
}

/// Stream `markdown` through a fresh document and collect the display after every chunk,
/// together with the raw buffer it was computed from.
pub fn collect_displays(markdown: &str, strategy: ChunkStrategy, opts: Options) -> Vec<(String, String)> {
    let mut doc = StreamingDocument::new(opts);
    doc.start("").expect("start");
    let mut out = Vec::new();
    for chunk in SimulatedStream::new(markdown, strategy) {
        let display = doc.append(&chunk).expect("append").to_string();
        out.push((doc.raw().to_string(), display));
    }
    let final_content = doc.finish().expect("finish");
    assert_eq!(final_content, markdown);
    out
}
