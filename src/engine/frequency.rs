//! Per-location distinct-unit counting.
//!
//! A [`FrequencyTable`] counts, for one category (e.g. home window at day
//! granularity), how many distinct units each location was seen in, and how
//! many distinct units the category covers overall. Locations are kept in
//! first-seen order so that ranking ties resolve deterministically.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::{DayKey, HourKey, LocationId};

/// Distinct units seen at one location.
#[derive(Debug, Clone)]
pub struct LocationEntry<U> {
    pub location: LocationId,
    seen: HashSet<U>,
}

impl<U: Eq + Hash> LocationEntry<U> {
    fn new(location: LocationId) -> Self {
        Self {
            location,
            seen: HashSet::new(),
        }
    }

    /// Number of distinct units at this location. Always equals the size of
    /// the seen-unit set, so a repeated unit never counts twice.
    pub fn count(&self) -> u32 {
        self.seen.len() as u32
    }

    pub fn has_seen(&self, unit: &U) -> bool {
        self.seen.contains(unit)
    }
}

/// Location -> distinct-unit count for one category, plus the category's
/// location-independent coverage set.
#[derive(Debug, Clone)]
pub struct FrequencyTable<U> {
    // location -> position in `entries`
    index: HashMap<LocationId, usize>,
    entries: Vec<LocationEntry<U>>,
    coverage: HashSet<U>,
}

impl<U> Default for FrequencyTable<U> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
            coverage: HashSet::new(),
        }
    }
}

impl<U: Copy + Eq + Hash> FrequencyTable<U> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count `unit` at `location`.
    ///
    /// Returns `true` if the location had not seen this unit yet, i.e. its
    /// count went up.
    pub fn record(&mut self, location: LocationId, unit: U) -> bool {
        self.coverage.insert(unit);

        let slot = match self.index.get(&location) {
            Some(&slot) => slot,
            None => {
                self.entries.push(LocationEntry::new(location));
                let slot = self.entries.len() - 1;
                self.index.insert(location, slot);
                slot
            }
        };
        self.entries[slot].seen.insert(unit)
    }

    /// Distinct units covered by the category, whatever the location.
    pub fn coverage(&self) -> u32 {
        self.coverage.len() as u32
    }

    /// Distinct-unit count of a location, 0 if never seen.
    pub fn count(&self, location: LocationId) -> u32 {
        self.index
            .get(&location)
            .map_or(0, |&slot| self.entries[slot].count())
    }

    pub fn get(&self, location: LocationId) -> Option<&LocationEntry<U>> {
        self.index.get(&location).map(|&slot| &self.entries[slot])
    }

    /// `(location, count)` pairs in first-seen order.
    pub fn counts(&self) -> impl Iterator<Item = (LocationId, u32)> + '_ {
        self.entries.iter().map(|e| (e.location, e.count()))
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[LocationEntry<U>] {
        &self.entries
    }

    /// Number of distinct locations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Day- and hour-granularity tables of one activity window, keyed by the
/// same locations.
#[derive(Debug, Clone, Default)]
pub struct WindowTables {
    pub days: FrequencyTable<DayKey>,
    pub hours: FrequencyTable<HourKey>,
}

impl WindowTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a record classified into this window in both tables.
    pub fn record(&mut self, location: LocationId, day: DayKey, hour: HourKey) {
        self.days.record(location, day);
        self.hours.record(location, hour);
    }
}
