use crate::options::Options;
use crate::types::{EmphasisChar, Fence, FenceChar, InlineDelimiter};

/// What is still open at the end of a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenDelimiters {
    pub fence: Option<Fence>,
    /// Inline delimiters in the order they were opened.
    pub inline: Vec<InlineDelimiter>,
}

impl OpenDelimiters {
    pub fn is_balanced(&self) -> bool {
        self.fence.is_none() && self.inline.is_empty()
    }

    /// Closing tokens for everything still open: the fence first (on its own line), then the
    /// inline delimiters last-opened-first.
    pub fn closing_suffix(&self) -> String {
        let mut out = String::new();
        if let Some(fence) = self.fence {
            out.push('\n');
            out.push_str(&fence.closing_run());
        }
        for d in self.inline.iter().rev() {
            out.push_str(d.as_str());
        }
        out
    }
}

fn run_len(bytes: &[u8], start: usize, b: u8) -> usize {
    bytes[start..].iter().take_while(|&&c| c == b).count()
}

fn toggle(stack: &mut Vec<InlineDelimiter>, d: InlineDelimiter) {
    match stack.iter().rposition(|open| *open == d) {
        Some(pos) => {
            stack.remove(pos);
        }
        None => stack.push(d),
    }
}

/// Scan `text` and report the delimiters left open at its end.
///
/// Delimiters are all ASCII, so scanning UTF-8 bytes never splits a multi-byte character.
/// Empty or whitespace-only input reports nothing open.
pub fn open_delimiters(text: &str, opts: &Options) -> OpenDelimiters {
    let mut state = OpenDelimiters::default();
    if text.trim().is_empty() {
        return state;
    }

    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut i = 0usize;

    while i < len {
        let b = bytes[i];

        if opts.code_fences {
            if let Some(ch) = FenceChar::from_byte(b) {
                let count = run_len(bytes, i, b);
                if count >= 3 {
                    match state.fence {
                        None => state.fence = Some(Fence { char: ch, len: count }),
                        Some(open) if open.char == ch && open.len == count => state.fence = None,
                        // Mismatched runs are literal fence content.
                        Some(_) => {}
                    }
                    i += count;
                    continue;
                }
            }
        }

        if state.fence.is_some() {
            i += 1;
            continue;
        }

        if opts.inline_code && b == b'`' {
            let count = run_len(bytes, i, b);
            // Multi-backtick spans are not tracked.
            if count == 1 {
                toggle(&mut state.inline, InlineDelimiter::Backtick);
            }
            i += count;
            continue;
        }

        if opts.emphasis {
            if let Some(ch) = EmphasisChar::from_byte(b) {
                if bytes.get(i + 1) == Some(&b) {
                    toggle(&mut state.inline, InlineDelimiter::Strong(ch));
                    i += 2;
                } else {
                    toggle(&mut state.inline, InlineDelimiter::Emphasis(ch));
                    i += 1;
                }
                continue;
            }
        }

        if opts.strikethrough && b == b'~' && bytes.get(i + 1) == Some(&b'~') {
            toggle(&mut state.inline, InlineDelimiter::Strikethrough);
            i += 2;
            continue;
        }

        i += 1;
    }

    state
}

/// Close every markdown delimiter left open in a partially streamed string.
///
/// The input is copied unchanged and the closers are appended after it, so the result always
/// starts with `text`. Always run this over the whole accumulated buffer; closers produced for an
/// earlier prefix must not be fed back in.
///
/// ```
/// use mdbalance::pending::close_open_delimiters;
///
/// assert_eq!(close_open_delimiters("**bold and *em"), "**bold and *em***");
/// assert_eq!(close_open_delimiters("```js\nconst x = 1;"), "```js\nconst x = 1;\n```");
/// ```
pub fn close_open_delimiters(text: &str) -> String {
    close_open_delimiters_with(text, &Options::default())
}

pub fn close_open_delimiters_with(text: &str, opts: &Options) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    let suffix = open_delimiters(text, opts).closing_suffix();
    let mut out = String::with_capacity(text.len() + suffix.len());
    out.push_str(text);
    out.push_str(&suffix);
    out
}
