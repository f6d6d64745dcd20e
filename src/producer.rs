//! A deterministic stand-in for an assistant streaming text in chunks.

/// How [`SimulatedStream`] cuts its text into chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkStrategy {
    /// The whole text as one chunk.
    Whole,
    /// One chunk per line, each keeping its trailing `\n`.
    Lines,
    /// One chunk per `char`.
    Chars,
    /// At most `n` bytes per chunk, extended to the next char boundary (`0` acts as `1`).
    Bytes(usize),
    /// Sizes drawn from an LCG in `1..=max_bytes`, extended to the next char boundary.
    PseudoRandom { seed: u32, max_bytes: usize },
}

/// Iterator over the chunks of `text`. Concatenating every chunk yields `text` exactly.
#[derive(Debug, Clone)]
pub struct SimulatedStream {
    text: String,
    pos: usize,
    strategy: ChunkStrategy,
    seed: u32,
}

impl SimulatedStream {
    pub fn new(text: impl Into<String>, strategy: ChunkStrategy) -> Self {
        let seed = match strategy {
            ChunkStrategy::PseudoRandom { seed, .. } => seed,
            _ => 0,
        };
        Self {
            text: text.into(),
            pos: 0,
            strategy,
            seed,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn ceil_char_boundary(&self, mut end: usize) -> usize {
        while end < self.text.len() && !self.text.is_char_boundary(end) {
            end += 1;
        }
        end
    }

    fn next_end(&mut self) -> usize {
        let rest = &self.text[self.pos..];
        match self.strategy {
            ChunkStrategy::Whole => self.text.len(),
            ChunkStrategy::Lines => rest
                .find('\n')
                .map(|rel| self.pos + rel + 1)
                .unwrap_or(self.text.len()),
            ChunkStrategy::Chars => rest
                .chars()
                .next()
                .map(|c| self.pos + c.len_utf8())
                .unwrap_or(self.text.len()),
            ChunkStrategy::Bytes(n) => {
                let end = (self.pos + n.max(1)).min(self.text.len());
                self.ceil_char_boundary(end)
            }
            ChunkStrategy::PseudoRandom { max_bytes, .. } => {
                self.seed = self.seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                let want = (self.seed as usize % max_bytes.max(1)) + 1;
                let end = (self.pos + want).min(self.text.len());
                self.ceil_char_boundary(end)
            }
        }
    }
}

impl Iterator for SimulatedStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.pos >= self.text.len() {
            return None;
        }
        let end = self.next_end();
        let chunk = self.text[self.pos..end].to_string();
        self.pos = end;
        Some(chunk)
    }
}
