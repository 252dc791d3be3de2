pub mod group;
pub mod repeater;

pub use self::{group::Group, repeater::Repeater};
use super::limits::ResultCountLimits;

/// A parsed pattern: its top-level repeater sequence plus the bounds the
/// enumerator should apply while walking it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ast {
    tree: Vec<Repeater>,
    group_count: usize,
    limits: ResultCountLimits,
}

impl Ast {
    #[must_use]
    pub(crate) fn new(tree: Vec<Repeater>, group_count: usize, limits: ResultCountLimits) -> Self {
        Self {
            tree,
            group_count,
            limits,
        }
    }

    /// The number of parenthesized groups encountered, capturing or not.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    #[must_use]
    pub fn limits(&self) -> ResultCountLimits {
        self.limits
    }

    #[must_use]
    pub fn into_repeaters(self) -> Vec<Repeater> {
        self.tree
    }
}

impl std::ops::Deref for Ast {
    type Target = [Repeater];

    fn deref(&self) -> &Self::Target {
        &self.tree
    }
}

impl PartialEq<&[Repeater]> for Ast {
    fn eq(&self, other: &&[Repeater]) -> bool {
        self.tree == *other
    }
}

impl<const N: usize> PartialEq<[Repeater; N]> for Ast {
    fn eq(&self, other: &[Repeater; N]) -> bool {
        self.tree == *other
    }
}
