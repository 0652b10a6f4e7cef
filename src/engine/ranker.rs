//! Top-2 ranking of locations by distinct-unit count.

use serde::{Deserialize, Serialize};

use super::frequency::FrequencyTable;
use crate::LocationId;

/// Most frequented location of one category.
///
/// `secondary` is only set when a second location ties exactly with the
/// primary count (ex aequo). Ties beyond the second position are not
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MflResult {
    pub primary: Option<LocationId>,
    pub secondary: Option<LocationId>,
    pub primary_count: u32,
}

impl MflResult {
    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
    }

    /// Whether two locations share the top count.
    pub fn is_tied(&self) -> bool {
        self.secondary.is_some()
    }
}

/// Rank the locations of a table.
///
/// Among locations with equal counts, the one seen first in the trajectory
/// ranks first.
pub fn rank<U>(table: &FrequencyTable<U>) -> MflResult
where
    U: Copy + Eq + std::hash::Hash,
{
    rank_counts(table.counts())
}

/// Rank `(location, count)` pairs given in first-seen order.
///
/// Equivalent to a stable sort by descending count followed by a look at the
/// first two entries.
pub fn rank_counts<I>(counts: I) -> MflResult
where
    I: IntoIterator<Item = (LocationId, u32)>,
{
    let mut result = MflResult::default();

    for (location, count) in counts {
        if result.primary.is_none() || count > result.primary_count {
            result = MflResult {
                primary: Some(location),
                secondary: None,
                primary_count: count,
            };
        } else if count == result.primary_count && result.secondary.is_none() {
            result.secondary = Some(location);
        }
    }

    result
}
