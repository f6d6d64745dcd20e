/// Which delimiter families the balancer recognizes.
///
/// A disabled family is treated as plain text, so its characters fall through to the next rule
/// (e.g. with `code_fences` off, a run of three backticks is scanned as inline code).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// ```` ``` ```` and `~~~` fences. Content inside an open fence is opaque.
    pub code_fences: bool,
    /// Single-backtick code spans.
    pub inline_code: bool,
    /// `*`, `_`, `**` and `__`.
    pub emphasis: bool,
    /// `~~`.
    pub strikethrough: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            code_fences: true,
            inline_code: true,
            emphasis: true,
            strikethrough: true,
        }
    }
}

impl Options {
    /// Options with every delimiter family disabled; the balancer becomes the identity.
    pub fn none() -> Self {
        Self {
            code_fences: false,
            inline_code: false,
            emphasis: false,
            strikethrough: false,
        }
    }
}
