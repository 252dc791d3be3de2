use super::{super::ResultCountLimits, Group};
use std::ops::RangeInclusive;

/// A [`Group`] together with how many times it repeats.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Repeater {
    OneTime(Box<Group>),
    /// `*`
    Star(Box<Group>),
    /// `+`
    Plus(Box<Group>),
    /// `?`
    QuestionMark(Box<Group>),
    /// `{m}`, `{m,}`, `{,n}` or `{m,n}`.
    Range {
        group: Box<Group>,
        min: Option<usize>,
        has_comma: bool,
        max: Option<usize>,
    },
}

impl Repeater {
    #[must_use]
    pub fn group(&self) -> &Group {
        match self {
            Repeater::OneTime(group)
            | Repeater::Star(group)
            | Repeater::Plus(group)
            | Repeater::QuestionMark(group)
            | Repeater::Range { group, .. } => group,
        }
    }

    /// The repetition counts the enumerator should try, with open-ended
    /// quantifiers capped by `limits`.
    #[must_use]
    pub fn repetitions(&self, limits: &ResultCountLimits) -> RangeInclusive<usize> {
        let variance = limits.max_repeater_variance;
        match *self {
            Repeater::OneTime(_) => 1..=1,
            Repeater::Star(_) => 0..=variance,
            Repeater::Plus(_) => 1..=variance.saturating_add(1),
            Repeater::QuestionMark(_) => 0..=1,
            Repeater::Range {
                min,
                has_comma,
                max,
                ..
            } => {
                let min = min.unwrap_or(0);
                match max {
                    Some(max) => min..=limits.clamp_max(min, max),
                    None if has_comma => min..=min.saturating_add(variance),
                    None => min..=min,
                }
            }
        }
    }
}
