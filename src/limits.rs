//! Bounds on how many results the example enumerator explores.

/// Default number of extra repetitions tried beyond a quantifier's minimum.
pub const MAX_REPEATER_VARIANCE_DEFAULT: usize = 2;

/// Default number of results kept per group.
pub const MAX_GROUP_RESULTS_DEFAULT: usize = 5;

/// Caller-supplied bounds. Absent values fall back to the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_repeater_variance: Option<usize>,
    pub max_group_results: Option<usize>,
}

impl Limits {
    #[must_use]
    pub const fn with_max_repeater_variance(mut self, variance: usize) -> Self {
        self.max_repeater_variance = Some(variance);
        self
    }

    #[must_use]
    pub const fn with_max_group_results(mut self, results: usize) -> Self {
        self.max_group_results = Some(results);
        self
    }

    /// Fills in the defaults for any bound the caller left out.
    #[must_use]
    pub fn resolve(self) -> ResultCountLimits {
        ResultCountLimits {
            max_repeater_variance: self
                .max_repeater_variance
                .unwrap_or(MAX_REPEATER_VARIANCE_DEFAULT),
            max_group_results: self
                .max_group_results
                .unwrap_or(MAX_GROUP_RESULTS_DEFAULT),
        }
    }
}

/// Resolved bounds, handed to the enumerator alongside the parsed tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultCountLimits {
    pub max_repeater_variance: usize,
    pub max_group_results: usize,
}

impl Default for ResultCountLimits {
    fn default() -> Self {
        Limits::default().resolve()
    }
}

impl ResultCountLimits {
    /// Caps the maximum of a `{min,max}` repetition at `min` plus the allowed
    /// variance.
    #[must_use]
    pub const fn clamp_max(&self, min: usize, max: usize) -> usize {
        let cap = min.saturating_add(self.max_repeater_variance);
        if max < cap { max } else { cap }
    }

    /// Keeps at most `max_group_results` of the given results.
    #[must_use]
    pub fn limit_group_results<T>(&self, mut results: Vec<T>) -> Vec<T> {
        results.truncate(self.max_group_results);
        results
    }
}
