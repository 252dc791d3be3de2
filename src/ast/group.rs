use super::{super::CharClass, Repeater};

/// One atomic matchable unit of a pattern.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Group {
    /// A literal. Empty for anchors at the pattern boundaries, which generate
    /// nothing.
    SingleChar(String),
    /// `[...]`, `\d` and friends.
    Char(CharClass),
    /// `.`
    Dot,
    /// `(...)`. `id` is the group number or name if the group captures.
    Multi {
        body: Vec<Repeater>,
        id: Option<String>,
    },
    /// `left|right`
    Or {
        left: Vec<Repeater>,
        right: Vec<Repeater>,
    },
    /// `\1` or `\k<name>`, resolved by the enumerator.
    BackReference(String),
}

impl Group {
    /// A literal group for a single character.
    #[must_use]
    pub fn single(c: char) -> Self {
        Group::SingleChar(c.to_string())
    }

    /// The zero-width group standing in for a boundary anchor.
    #[must_use]
    pub fn empty() -> Self {
        Group::SingleChar(String::new())
    }

    #[must_use]
    pub fn is_zero_width(&self) -> bool {
        matches!(self, Group::SingleChar(s) if s.is_empty())
    }

    /// Returns `true` if this is a parenthesized group that captures.
    #[must_use]
    pub fn is_capturing(&self) -> bool {
        matches!(self, Group::Multi { id: Some(_), .. })
    }
}
