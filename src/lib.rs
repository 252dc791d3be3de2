//! A regular expression parser producing trees for example string generation.
//!
//! Patterns are parsed in a single pass into a sequence of [`Repeater`]s,
//! each wrapping one [`Group`]. Constructs that cannot describe a finite set
//! of examples (lookaround, anchors away from the pattern boundaries) are
//! rejected, while matching-strategy markers such as reluctant or possessive
//! quantifiers are accepted and ignored.

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc)]

pub mod ast;
pub mod charset;
pub mod limits;
pub mod parser;

pub use self::{
    ast::{Ast, Group, Repeater},
    charset::{CharClass, ClassItem},
    limits::{Limits, ResultCountLimits},
    parser::Parser,
};

/// Parses `pattern` using the default result count limits.
pub fn parse_pattern(pattern: &str) -> Result<Ast> {
    Parser::new(pattern, Limits::default()).parse()
}

/// Parses `pattern`, carrying the given `limits` alongside the resulting tree.
pub fn parse_pattern_with(pattern: &str, limits: Limits) -> Result<Ast> {
    Parser::new(pattern, limits).parse()
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The construct is not regular, so no finite set of examples exists.
    #[error("illegal syntax at {pos}: {reason}")]
    IllegalSyntax { pos: usize, reason: Illegal },

    /// The construct could be generated, but is not implemented.
    #[error("unsupported syntax at {pos}: {feature}")]
    UnsupportedSyntax { pos: usize, feature: Unsupported },

    /// The pattern is broken.
    #[error("malformed pattern at {pos}: {reason}")]
    Malformed { pos: usize, reason: Malformed },
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::IllegalSyntax { .. } => ErrorKind::Illegal,
            Error::UnsupportedSyntax { .. } => ErrorKind::Unsupported,
            Error::Malformed { .. } => ErrorKind::Malformed,
        }
    }

    /// The character position at which the error was detected.
    #[must_use]
    pub const fn pos(&self) -> usize {
        match self {
            Error::IllegalSyntax { pos, .. }
            | Error::UnsupportedSyntax { pos, .. }
            | Error::Malformed { pos, .. } => *pos,
        }
    }
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Illegal,
    Unsupported,
    Malformed,
}

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum Illegal {
    #[error("anchors cannot be supported, as they are not regular")]
    Anchor,
    #[error("lookaheads are not regular; cannot generate examples")]
    Lookahead,
    #[error("lookbehinds are not regular; cannot generate examples")]
    Lookbehind,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Unsupported {
    #[error("POSIX bracket expressions are not yet implemented")]
    PosixBracket,
    #[error("named properties (\\p{{{0}}}) are not yet supported")]
    NamedProperty(String),
    #[error("subexpression calls (\\g) are not yet supported")]
    SubexpressionCall,
    #[error("group modifier '(?{0}' is not supported")]
    GroupModifier(char),
}

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum Malformed {
    #[error("missing ']' for character class")]
    UnterminatedClass,
    #[error("missing ')' for group")]
    UnclosedGroup,
    #[error("unmatched ')'")]
    UnmatchedParen,
    #[error("pattern ends with '\\'")]
    TrailingBackslash,
    #[error("missing '>' after group name")]
    UnterminatedGroupName,
    #[error("invalid character scalar value {0:#x}")]
    InvalidScalar(u32),
    #[error("repetition range {{{0},{1}}} has its maximum below its minimum")]
    InvertedRange(usize, usize),
    #[error("groups and alternations nest too deeply")]
    TooDeep,
}

pub type Result<T> = std::result::Result<T, Error>;
