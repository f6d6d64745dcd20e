use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FenceChar {
    Backtick,
    Tilde,
}

impl FenceChar {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'`' => Some(Self::Backtick),
            b'~' => Some(Self::Tilde),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Backtick => '`',
            Self::Tilde => '~',
        }
    }
}

/// An open code fence: the fence character and the exact length of the opening run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fence {
    pub char: FenceChar,
    pub len: usize,
}

impl Fence {
    /// The run that closes this fence (same character, same length).
    pub fn closing_run(&self) -> String {
        std::iter::repeat(self.char.as_char()).take(self.len).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmphasisChar {
    Asterisk,
    Underscore,
}

impl EmphasisChar {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'*' => Some(Self::Asterisk),
            b'_' => Some(Self::Underscore),
            _ => None,
        }
    }
}

/// An inline token that toggles open/closed each time it is seen.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineDelimiter {
    /// `` ` ``
    Backtick,
    /// `**` or `__`
    Strong(EmphasisChar),
    /// `*` or `_`
    Emphasis(EmphasisChar),
    /// `~~`
    Strikethrough,
}

impl InlineDelimiter {
    /// The token text. Opening and closing markers are identical.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backtick => "`",
            Self::Strong(EmphasisChar::Asterisk) => "**",
            Self::Strong(EmphasisChar::Underscore) => "__",
            Self::Emphasis(EmphasisChar::Asterisk) => "*",
            Self::Emphasis(EmphasisChar::Underscore) => "_",
            Self::Strikethrough => "~~",
        }
    }
}

impl fmt::Debug for InlineDelimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InlineDelimiter({:?})", self.as_str())
    }
}

impl fmt::Display for InlineDelimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
