//! Rendering of the display string while a stream is active.

use crate::pending::OpenDelimiters;

/// One rebalanced state of a streaming document.
#[derive(Debug, Clone, Copy)]
pub struct StreamFrame<'a> {
    /// The accumulated stream text.
    pub raw: &'a str,
    /// What was still open at the end of `raw`.
    pub open: &'a OpenDelimiters,
    /// Closing tokens for `open`, in the order they are appended.
    pub closers: &'a str,
}

impl StreamFrame<'_> {
    /// `raw` followed by its closers: the default display.
    pub fn balanced(&self) -> String {
        let mut out = String::with_capacity(self.raw.len() + self.closers.len());
        out.push_str(self.raw);
        out.push_str(self.closers);
        out
    }

    pub fn in_code_fence(&self) -> bool {
        self.open.fence.is_some()
    }
}

/// Builds the display string of a streaming document from a frame.
///
/// Closures taking `&StreamFrame` implement this trait.
pub trait DisplayHook: Send + Sync {
    fn render(&self, frame: &StreamFrame<'_>) -> String;
}

impl<F> DisplayHook for F
where
    F: Fn(&StreamFrame<'_>) -> String + Send + Sync,
{
    fn render(&self, frame: &StreamFrame<'_>) -> String {
        self(frame)
    }
}

/// Shows a marker at the streaming boundary.
///
/// The marker goes after the raw text and before the synthesized closers, so it stays inside
/// whatever span or fence is still open: `**wor▍**`, not `**wor**▍`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamingCursor {
    pub marker: String,
    /// Leave open code fences untouched, so the marker never lands in copied code.
    pub skip_code_fences: bool,
}

impl StreamingCursor {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            skip_code_fences: false,
        }
    }
}

impl Default for StreamingCursor {
    fn default() -> Self {
        Self::new("▍")
    }
}

impl DisplayHook for StreamingCursor {
    fn render(&self, frame: &StreamFrame<'_>) -> String {
        if self.skip_code_fences && frame.in_code_fence() {
            return frame.balanced();
        }
        let mut out = String::with_capacity(frame.raw.len() + self.marker.len() + frame.closers.len());
        out.push_str(frame.raw);
        out.push_str(&self.marker);
        out.push_str(frame.closers);
        out
    }
}
