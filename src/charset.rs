//! Character class types.

use std::ops::RangeInclusive;

/// One member of a character class.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClassItem {
    Char(char),
    /// An inclusive range, kept as written even when reversed.
    Range(char, char),
}

impl ClassItem {
    #[must_use]
    pub fn contains(self, c: char) -> bool {
        match self {
            ClassItem::Char(m) => m == c,
            ClassItem::Range(start, end) => (start..=end).contains(&c),
        }
    }
}

use ClassItem::{Char, Range};

/// Printable ASCII, the universe negated classes are drawn from.
pub const PRINTABLE: RangeInclusive<char> = ' '..='~';

const DIGIT: &[ClassItem] = &[Range('0', '9')];
const NON_DIGIT: &[ClassItem] = &[Range(' ', '/'), Range(':', '~')];
const WORD: &[ClassItem] = &[Range('a', 'z'), Range('A', 'Z'), Range('0', '9'), Char('_')];
const NON_WORD: &[ClassItem] = &[
    Range(' ', '/'),
    Range(':', '@'),
    Range('[', '^'),
    Char('`'),
    Range('{', '~'),
];
const SPACE: &[ClassItem] = &[
    Char(' '),
    Char('\t'),
    Char('\n'),
    Char('\r'),
    Char('\x0b'),
    Char('\x0c'),
];
const NON_SPACE: &[ClassItem] = &[Range('!', '~')];
const HEX: &[ClassItem] = &[Range('0', '9'), Range('a', 'f'), Range('A', 'F')];
const NON_HEX: &[ClassItem] = &[
    Range(' ', '/'),
    Range(':', '@'),
    Range('G', '`'),
    Range('g', '~'),
];
const TAB: &[ClassItem] = &[Char('\t')];
const NEWLINE: &[ClassItem] = &[Char('\n')];
const CARRIAGE_RETURN: &[ClassItem] = &[Char('\r')];
const FORM_FEED: &[ClassItem] = &[Char('\x0c')];
const BELL: &[ClassItem] = &[Char('\x07')];
const ESCAPE: &[ClassItem] = &[Char('\x1b')];
const VERTICAL_TAB: &[ClassItem] = &[Char('\x0b')];

/// Looks up the members of a backslash shorthand class such as `\d` or `\n`.
#[must_use]
pub const fn shorthand(key: char) -> Option<&'static [ClassItem]> {
    Some(match key {
        'd' => DIGIT,
        'D' => NON_DIGIT,
        'w' => WORD,
        'W' => NON_WORD,
        's' => SPACE,
        'S' => NON_SPACE,
        'h' => HEX,
        'H' => NON_HEX,
        't' => TAB,
        'n' => NEWLINE,
        'r' => CARRIAGE_RETURN,
        'f' => FORM_FEED,
        'a' => BELL,
        'e' => ESCAPE,
        'v' => VERTICAL_TAB,
        _ => return None,
    })
}

/// A character class. Negation and ranges are part of its content.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CharClass {
    negated: bool,
    items: Vec<ClassItem>,
}

/// A bracket member after escapes are resolved, before ranges are formed.
enum Member {
    Literal(char),
    Dash,
    Set(&'static [ClassItem]),
}

impl CharClass {
    #[must_use]
    pub fn new(items: Vec<ClassItem>, negated: bool) -> Self {
        CharClass { negated, items }
    }

    /// Builds a class from an owned copy of a shorthand table entry.
    #[must_use]
    pub fn from_shorthand(key: char) -> Option<Self> {
        shorthand(key).map(|items| CharClass::new(items.to_vec(), false))
    }

    /// Normalizes the raw content of a bracket expression, without the
    /// surrounding brackets.
    ///
    /// A leading `^` negates the class. Backslash escapes name either a
    /// shorthand class or a literal character, and an unescaped `-` between
    /// two literals forms a range. A `-` with no literal on either side is
    /// itself a member.
    #[must_use]
    pub fn from_members(members: &[char]) -> Self {
        let (negated, members) = match members.split_first() {
            Some(('^', rest)) => (true, rest),
            _ => (false, members),
        };

        let mut resolved = Vec::with_capacity(members.len());
        let mut iter = members.iter().copied();
        while let Some(c) = iter.next() {
            resolved.push(match c {
                '\\' => match iter.next() {
                    Some(key) => match shorthand(key) {
                        Some(&[Char(c)]) => Member::Literal(c),
                        Some(set) => Member::Set(set),
                        None => Member::Literal(key),
                    },
                    None => Member::Literal('\\'),
                },
                '-' => Member::Dash,
                c => Member::Literal(c),
            });
        }

        let mut items = Vec::with_capacity(resolved.len());
        let mut index = 0;
        loop {
            match resolved[index..] {
                [Member::Literal(start), Member::Dash, Member::Literal(end), ..] => {
                    items.push(Range(start, end));
                    index += 3;
                    continue;
                }
                [Member::Literal(c), ..] => items.push(Char(c)),
                [Member::Dash, ..] => items.push(Char('-')),
                [Member::Set(set), ..] => items.extend_from_slice(set),
                [] => break,
            }
            index += 1;
        }

        CharClass { negated, items }
    }

    #[inline]
    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    #[inline]
    #[must_use]
    pub fn items(&self) -> &[ClassItem] {
        &self.items
    }

    /// Returns `true` if the class matches the given character.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.items.iter().any(|item| item.contains(c)) != self.negated
    }

    /// Enumerates the characters the class can produce, in class order.
    /// Negated classes draw from [`PRINTABLE`].
    pub fn chars(&self) -> Box<dyn Iterator<Item = char> + '_> {
        if self.negated {
            Box::new(PRINTABLE.filter(|&c| self.contains(c)))
        } else {
            Box::new(self.items.iter().flat_map(|&item| match item {
                Char(c) => c..=c,
                Range(start, end) => start..=end,
            }))
        }
    }
}
