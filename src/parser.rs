mod cursor;
mod escape;

use self::cursor::Cursor;
use super::{
    Error, Illegal, Malformed, Result, Unsupported,
    ast::{Ast, Group, Repeater},
    charset::CharClass,
    limits::{Limits, ResultCountLimits},
};

/// How deeply groups and alternations may nest before parsing gives up.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Converts a pattern string into an [`Ast`].
///
/// Parsing is a single recursive descent over the pattern characters, with no
/// separate tokenizing step.
pub struct Parser {
    cursor: Cursor,
    num_groups: usize,
    depth: usize,
    limits: ResultCountLimits,
}

/// What the group dispatcher found at the cursor.
enum Parsed {
    Group(Group),
    /// A `)` closing the enclosing group. Left for the caller to consume.
    End,
}

impl Parser {
    /// Creates a new parser for the given `pattern`. Any bound missing from
    /// `limits` is resolved to its default here, once, and handed out with
    /// the parsed tree.
    #[must_use]
    pub fn new(pattern: &str, limits: Limits) -> Self {
        Parser {
            cursor: Cursor::new(pattern),
            num_groups: 0,
            depth: 0,
            limits: limits.resolve(),
        }
    }

    /// Converts the pattern into an [`Ast`], consuming the parser.
    ///
    /// # Errors
    ///
    /// If the pattern uses a construct which is not regular, is not
    /// supported, or is malformed, an [`Error`] is returned.
    pub fn parse(mut self) -> Result<Ast> {
        let tree = self.parse_sequence()?;

        if self.cursor.tell() < self.cursor.len() {
            return Err(Error::Malformed {
                pos: self.cursor.tell(),
                reason: Malformed::UnmatchedParen,
            });
        }

        Ok(Ast::new(tree, self.num_groups, self.limits))
    }

    /// Parses repeaters until the end of input or a `)`, which is not
    /// consumed.
    fn parse_sequence(&mut self) -> Result<Vec<Repeater>> {
        let mut repeaters = Vec::new();

        while let Some(c) = self.cursor.peek() {
            let group = match self.parse_group(c, &mut repeaters)? {
                Parsed::End => break,
                // Everything before the `|` already moved into its left side.
                Parsed::Group(group @ Group::Or { .. }) => {
                    return Ok(vec![Repeater::OneTime(Box::new(group))]);
                }
                Parsed::Group(group) => group,
            };
            self.cursor.advance(1);
            match self.parse_repeater(group)? {
                // A bare boundary anchor generates nothing.
                Repeater::OneTime(group) if group.is_zero_width() => {}
                repeater => repeaters.push(repeater),
            }
        }

        Ok(repeaters)
    }

    /// Parses the group starting at the cursor, leaving the cursor on its
    /// final character.
    fn parse_group(&mut self, c: char, repeaters: &mut Vec<Repeater>) -> Result<Parsed> {
        let group = match c {
            '(' => self.parse_multi_group()?,
            ')' => return Ok(Parsed::End),
            '[' => self.parse_char_group()?,
            '.' => Group::Dot,
            '|' => self.parse_or_group(repeaters)?,
            '\\' => self.parse_after_backslash_group()?,
            '^' | 'A' => self.parse_anchor(self.cursor.is_first())?,
            '$' | 'z' | 'Z' => self.parse_anchor(self.cursor.is_last())?,
            c => Group::single(c),
        };
        Ok(Parsed::Group(group))
    }

    /// Anchors only make sense at the edges of the pattern, where they
    /// generate nothing.
    fn parse_anchor(&self, at_boundary: bool) -> Result<Group> {
        if at_boundary {
            Ok(Group::empty())
        } else {
            Err(Error::IllegalSyntax {
                pos: self.cursor.tell(),
                reason: Illegal::Anchor,
            })
        }
    }

    fn enter_recursion(&mut self) -> Result<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::Malformed {
                pos: self.cursor.tell(),
                reason: Malformed::TooDeep,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn parse_multi_group(&mut self) -> Result<Group> {
        self.enter_recursion()?;
        let start = self.cursor.tell();
        self.cursor.advance(1);
        self.num_groups += 1;

        let pos = self.cursor.tell();
        let id = match *self.cursor.rest() {
            ['?', ':', ..] => {
                self.cursor.advance(2);
                None
            }
            ['?', '=' | '!', ..] => {
                return Err(Error::IllegalSyntax {
                    pos,
                    reason: Illegal::Lookahead,
                });
            }
            ['?', '<', '=' | '!', ..] => {
                return Err(Error::IllegalSyntax {
                    pos,
                    reason: Illegal::Lookbehind,
                });
            }
            ['?', '<', ref tail @ ..] => {
                let name = match tail.iter().position(|&c| c == '>') {
                    Some(len) if len > 0 => tail[..len].iter().collect::<String>(),
                    _ => {
                        return Err(Error::Malformed {
                            pos,
                            reason: Malformed::UnterminatedGroupName,
                        });
                    }
                };
                self.cursor.advance(name.chars().count() + 3);
                Some(name)
            }
            ['?', modifier, ..] => {
                return Err(Error::UnsupportedSyntax {
                    pos,
                    feature: Unsupported::GroupModifier(modifier),
                });
            }
            ['?'] => {
                return Err(Error::Malformed {
                    pos: start,
                    reason: Malformed::UnclosedGroup,
                });
            }
            _ => Some(self.num_groups.to_string()),
        };

        let body = self.parse_sequence()?;

        if self.cursor.peek() != Some(')') {
            return Err(Error::Malformed {
                pos: start,
                reason: Malformed::UnclosedGroup,
            });
        }

        self.exit_recursion();
        Ok(Group::Multi { body, id })
    }

    fn parse_char_group(&mut self) -> Result<Group> {
        let start = self.cursor.tell();

        if starts_with_posix_class(self.cursor.rest()) {
            return Err(Error::UnsupportedSyntax {
                pos: start,
                feature: Unsupported::PosixBracket,
            });
        }

        self.cursor.advance(1);
        let mut members = Vec::new();

        // `[]]` matches "]"
        if self.cursor.peek() == Some(']') {
            members.push(']');
            self.cursor.advance(1);
        }

        loop {
            match self.cursor.peek() {
                None => {
                    return Err(Error::Malformed {
                        pos: start,
                        reason: Malformed::UnterminatedClass,
                    });
                }
                Some(']') if !self.cursor.is_escaped() => break,
                Some(c) => {
                    members.push(c);
                    self.cursor.advance(1);
                }
            }
        }

        Ok(Group::Char(CharClass::from_members(&members)))
    }

    fn parse_or_group(&mut self, left: &mut Vec<Repeater>) -> Result<Group> {
        self.enter_recursion()?;
        self.cursor.advance(1);
        let left = std::mem::take(left);
        let right = self.parse_sequence()?;
        self.exit_recursion();
        Ok(Group::Or { left, right })
    }

    /// Wraps `group` in a repeater according to the quantifier at the cursor,
    /// if any.
    fn parse_repeater(&mut self, group: Group) -> Result<Repeater> {
        let group = Box::new(group);
        let repeater = match self.cursor.peek() {
            Some('*') => {
                self.cursor.advance(1);
                self.skip_reluctant_or_possessive();
                Repeater::Star(group)
            }
            Some('+') => {
                self.cursor.advance(1);
                self.skip_reluctant_or_possessive();
                Repeater::Plus(group)
            }
            Some('?') => self.parse_question_mark_repeater(group),
            Some('{') => match self.parse_range_bounds()? {
                Some((min, has_comma, max)) => {
                    self.parse_range_repeater(group, min, has_comma, max)
                }
                None => Repeater::OneTime(group),
            },
            _ => Repeater::OneTime(group),
        };
        Ok(repeater)
    }

    fn parse_question_mark_repeater(&mut self, group: Box<Group>) -> Repeater {
        self.cursor.advance(1);
        self.skip_reluctant_or_possessive();
        Repeater::QuestionMark(group)
    }

    fn parse_range_repeater(
        &mut self,
        group: Box<Group>,
        min: Option<usize>,
        has_comma: bool,
        max: Option<usize>,
    ) -> Repeater {
        let repeater = Repeater::Range {
            group,
            min,
            has_comma,
            max,
        };

        // `x{2}?` means `(?:x{2})?`, not a reluctant `x{2}`.
        if min.is_some() && !has_comma && max.is_none() && self.cursor.peek() == Some('?') {
            let wrapped = Group::Multi {
                body: vec![repeater],
                id: None,
            };
            self.parse_question_mark_repeater(Box::new(wrapped))
        } else {
            self.skip_reluctant_or_possessive();
            repeater
        }
    }

    /// Consumes `{min}`, `{min,}`, `{,max}` or `{min,max}`. Returns `None`
    /// without consuming anything if the braces do not form a quantifier.
    ///
    /// # Errors
    ///
    /// A `{min,max}` with `max < min` would generate nothing and is rejected.
    fn parse_range_bounds(&mut self) -> Result<Option<(Option<usize>, bool, Option<usize>)>> {
        let pos = self.cursor.tell();
        let rest = self.cursor.rest();
        let ['{', ref inner @ ..] = *rest else {
            return Ok(None);
        };

        let min_len = digit_run(inner);
        let has_comma = inner.get(min_len) == Some(&',');
        let after_comma = &inner[min_len + usize::from(has_comma)..];
        let max_len = digit_run(after_comma);

        if after_comma.get(max_len) != Some(&'}') || min_len + max_len == 0 {
            return Ok(None);
        }

        let (Some(min), Some(max)) = (
            parse_number(&inner[..min_len]),
            parse_number(&after_comma[..max_len]),
        ) else {
            return Ok(None);
        };
        if let (Some(min), Some(max)) = (min, max)
            && max < min
        {
            return Err(Error::Malformed {
                pos,
                reason: Malformed::InvertedRange(min, max),
            });
        }
        let consumed = 1 + min_len + usize::from(has_comma) + max_len + 1;

        self.cursor.advance(consumed);
        Ok(Some((min, has_comma, max)))
    }

    /// Reluctant and possessive markers do not change which strings match.
    fn skip_reluctant_or_possessive(&mut self) {
        if matches!(self.cursor.peek(), Some('?' | '+')) {
            self.cursor.advance(1);
        }
    }
}

/// Returns `true` if `rest` starts with `[[:name:]`.
fn starts_with_posix_class(rest: &[char]) -> bool {
    let ['[', '[', ':', ref tail @ ..] = *rest else {
        return false;
    };
    let name_len = tail.iter().take_while(|&&c| c != ':').count();
    name_len > 0 && tail.get(name_len..name_len + 2) == Some(&[':', ']'][..])
}

fn digit_run(chars: &[char]) -> usize {
    chars.iter().take_while(|c| c.is_ascii_digit()).count()
}

/// Parses a run of ASCII digits. An empty run is `Some(None)`, an overflowing
/// one `None`.
fn parse_number(digits: &[char]) -> Option<Option<usize>> {
    if digits.is_empty() {
        return Some(None);
    }
    digits
        .iter()
        .collect::<String>()
        .parse()
        .ok()
        .map(Some)
}
