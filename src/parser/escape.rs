use super::{
    super::{Error, Illegal, Malformed, Result, Unsupported, ast::Group, charset::CharClass},
    Parser,
};

impl Parser {
    /// Parses the escape sequence starting at the `\` under the cursor,
    /// leaving the cursor on its final character.
    pub(super) fn parse_after_backslash_group(&mut self) -> Result<Group> {
        let start = self.cursor.tell();
        self.cursor.advance(1);

        if self.cursor.peek().is_none() {
            return Err(Error::Malformed {
                pos: start,
                reason: Malformed::TrailingBackslash,
            });
        }

        let pos = self.cursor.tell();
        let (group, consumed) = decode(self.cursor.rest(), pos, self.cursor.is_last())?;
        self.cursor.advance(consumed);
        Ok(group)
    }
}

/// Decodes the non-empty text following a backslash at `pos`. Returns the
/// group along with how many characters past the first one it spans.
///
/// The checks are ordered; earlier forms shadow later ones.
fn decode(rest: &[char], pos: usize, at_end: bool) -> Result<(Group, usize)> {
    let illegal_anchor = || Error::IllegalSyntax {
        pos,
        reason: Illegal::Anchor,
    };

    let digits = rest.iter().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let reference = rest[..digits].iter().collect();
        return Ok((Group::BackReference(reference), digits - 1));
    }

    if let ['k', '<', ref tail @ ..] = *rest
        && let Some(len) = delimited(tail, '>')
    {
        let name = tail[..len].iter().collect();
        return Ok((Group::BackReference(name), len + 2));
    }

    if let Some(class) = rest.first().copied().and_then(CharClass::from_shorthand) {
        return Ok((Group::Char(class), 0));
    }

    match *rest {
        ['c', c, ..] => Ok((Group::single(control_character(c)), 1)),
        ['C', '-', c, ..] => Ok((Group::single(control_character(c)), 2)),
        ['x', ref tail @ ..] if hex_run(tail, 2) > 0 => {
            let len = hex_run(tail, 2);
            Ok((Group::single(scalar(&tail[..len], pos)?), len))
        }
        ['u', ref tail @ ..] if hex_run(tail, 4) == 4 => {
            Ok((Group::single(scalar(&tail[..4], pos)?), 4))
        }
        ['u', '{', ref tail @ ..] if braced_hex_run(tail).is_some() => {
            let len = braced_hex_run(tail).unwrap_or_default();
            Ok((Group::single(scalar(&tail[..len], pos)?), len + 2))
        }
        ['p', '{', ref tail @ ..] if delimited(tail, '}').is_some() => {
            let name = tail.iter().take_while(|&&c| c != '}').collect();
            Err(Error::UnsupportedSyntax {
                pos,
                feature: Unsupported::NamedProperty(name),
            })
        }
        ['g', ..] => Err(Error::UnsupportedSyntax {
            pos,
            feature: Unsupported::SubexpressionCall,
        }),
        ['G' | 'b' | 'B', ..] => Err(illegal_anchor()),
        ['A', ..] if pos == 1 => Ok((Group::empty(), 0)),
        ['z' | 'Z', ..] if at_end => Ok((Group::empty(), 0)),
        ['A' | 'z' | 'Z', ..] => Err(illegal_anchor()),
        [c, ..] => Ok((Group::single(c), 0)),
        [] => Err(Error::Malformed {
            pos,
            reason: Malformed::TrailingBackslash,
        }),
    }
}

/// Returns the length of the non-empty run before `end`, if `end` occurs.
fn delimited(chars: &[char], end: char) -> Option<usize> {
    chars.iter().position(|&c| c == end).filter(|&len| len > 0)
}

fn hex_run(chars: &[char], limit: usize) -> usize {
    chars
        .iter()
        .take(limit)
        .take_while(|c| c.is_ascii_hexdigit())
        .count()
}

/// The length of a 1-4 digit hex run closed by `}`.
fn braced_hex_run(chars: &[char]) -> Option<usize> {
    let len = hex_run(chars, 4);
    (len > 0 && chars.get(len) == Some(&'}')).then_some(len)
}

/// `\cX` and `\C-X` select the control character sharing the low five bits
/// of `X`.
fn control_character(c: char) -> char {
    char::from_u32(u32::from(c) % 32).unwrap_or_default()
}

fn scalar(hex: &[char], pos: usize) -> Result<char> {
    let value = hex
        .iter()
        .filter_map(|c| c.to_digit(16))
        .fold(0, |acc, digit| acc * 16 + digit);
    char::from_u32(value).ok_or(Error::Malformed {
        pos,
        reason: Malformed::InvalidScalar(value),
    })
}
