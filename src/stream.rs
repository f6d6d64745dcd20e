use std::fmt;

use tracing::{debug, trace};

use crate::error::StreamError;
use crate::hook::{DisplayHook, StreamFrame};
use crate::options::Options;
use crate::pending::open_delimiters;

/// A document that receives Markdown as a stream of chunks.
///
/// The document keeps two strings:
///
/// - `raw`: exactly what the stream produced, in arrival order. Closers are never written here.
/// - `display`: what a renderer should show. While streaming it is the balanced form of the
///   whole `raw` buffer (recomputed on every chunk); once the stream finishes it is `raw` itself.
///
/// Edits through [`set_content`](Self::set_content) are rejected while a stream is active.
pub struct StreamingDocument {
    opts: Options,
    raw: String,
    display: String,
    streaming: bool,
    hook: Option<Box<dyn DisplayHook>>,
}

impl fmt::Debug for StreamingDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamingDocument")
            .field("opts", &self.opts)
            .field("raw", &self.raw)
            .field("display", &self.display)
            .field("streaming", &self.streaming)
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

impl Default for StreamingDocument {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl StreamingDocument {
    pub fn new(opts: Options) -> Self {
        Self {
            opts,
            raw: String::new(),
            display: String::new(),
            streaming: false,
            hook: None,
        }
    }

    /// Render the streaming display through `hook` instead of plain balancing.
    pub fn with_display_hook(mut self, hook: impl DisplayHook + 'static) -> Self {
        self.set_display_hook(hook);
        self
    }

    /// Takes effect from the next chunk.
    pub fn set_display_hook(&mut self, hook: impl DisplayHook + 'static) {
        self.hook = Some(Box::new(hook));
    }

    pub fn clear_display_hook(&mut self) {
        self.hook = None;
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Content for the editor: the display string while streaming, the raw text otherwise.
    pub fn content(&self) -> &str {
        if self.streaming {
            &self.display
        } else {
            &self.raw
        }
    }

    /// Begin a stream, seeding the raw buffer with `base`.
    pub fn start(&mut self, base: &str) -> Result<(), StreamError> {
        if self.streaming {
            debug!("rejecting start: stream already active");
            return Err(StreamError::Streaming);
        }
        self.raw.clear();
        self.raw.push_str(base);
        self.streaming = true;
        self.refresh_display();
        debug!(base_bytes = base.len(), "stream started");
        Ok(())
    }

    /// Append a chunk and return the refreshed display string.
    pub fn append(&mut self, chunk: &str) -> Result<&str, StreamError> {
        if !self.streaming {
            debug!(chunk_bytes = chunk.len(), "dropping chunk: no active stream");
            return Err(StreamError::NotStreaming);
        }
        self.raw.push_str(chunk);
        self.refresh_display();
        Ok(&self.display)
    }

    /// End the stream. The raw buffer becomes the content and synthesized closers are dropped.
    pub fn finish(&mut self) -> Result<&str, StreamError> {
        if !self.streaming {
            debug!("rejecting finish: no active stream");
            return Err(StreamError::NotStreaming);
        }
        self.streaming = false;
        self.display.clone_from(&self.raw);
        debug!(raw_bytes = self.raw.len(), "stream finished");
        Ok(&self.raw)
    }

    /// Replace the content outside of a stream (a user edit).
    pub fn set_content(&mut self, next: impl Into<String>) -> Result<(), StreamError> {
        if self.streaming {
            debug!("rejecting edit: stream active");
            return Err(StreamError::Streaming);
        }
        self.raw = next.into();
        self.display.clone_from(&self.raw);
        Ok(())
    }

    /// Start a stream from `base`, feed every chunk in order, and finish it.
    pub fn run<I, S>(&mut self, base: &str, chunks: I) -> Result<&str, StreamError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.start(base)?;
        for chunk in chunks {
            self.append(chunk.as_ref())?;
        }
        self.finish()
    }

    /// Clear all text and leave streaming. The display hook is kept.
    pub fn reset(&mut self) {
        self.raw.clear();
        self.display.clear();
        self.streaming = false;
    }

    fn refresh_display(&mut self) {
        let open = open_delimiters(&self.raw, &self.opts);
        let closers = open.closing_suffix();
        let open_inline = open.inline.len();
        trace!(
            raw_bytes = self.raw.len(),
            closer_bytes = closers.len(),
            open_fence = open.fence.is_some(),
            open_inline,
            "rebalanced pending display"
        );
        let frame = StreamFrame {
            raw: &self.raw,
            open: &open,
            closers: &closers,
        };
        self.display = match &self.hook {
            Some(hook) => hook.render(&frame),
            None => frame.balanced(),
        };
    }
}
