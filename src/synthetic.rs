//! Synthetic trajectory generator for stress testing and benchmarking.
//!
//! Generates sorted trajectory datasets where every user has a known home
//! and work location, providing ground truth for MFL extraction.
//!
//! Feature-gated behind `synthetic` — not included in production builds.
//!
//! # Example
//!
//! ```rust
//! use tracemfl::synthetic::SyntheticScenario;
//!
//! let scenario = SyntheticScenario::with_user_count(10);
//! let dataset = scenario.generate();
//! assert_eq!(dataset.metadata.users, 10);
//! ```

use crate::calendar;
use crate::{LocationId, TrajectoryRecord, YearMonth};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeSet, HashMap};

// ============================================================================
// Types
// ============================================================================

/// Scenario configuration for generating synthetic trajectories.
#[derive(Debug, Clone)]
pub struct SyntheticScenario {
    /// Number of users to generate.
    pub user_count: usize,
    /// First month of every trajectory.
    pub start: YearMonth,
    /// Number of calendar months spanned from `start`.
    pub month_count: u32,
    /// Probability that a user has no record at all in a given month.
    pub month_gap_probability: f64,
    /// Probability that a user has records on a given day.
    pub active_day_probability: f64,
    /// Records generated per active day.
    pub records_per_day: usize,
    /// Distinct locations per user (at least 2: home and work).
    pub locations_per_user: usize,
    /// Probability that a record sits at the user's home (night) or work
    /// (day) location rather than a random one of theirs.
    pub anchor_fidelity: f64,
    /// RNG seed for deterministic reproduction.
    pub seed: u64,
}

/// Metadata about a generated dataset.
#[derive(Debug, Clone)]
pub struct DatasetMetadata {
    pub users: usize,
    pub total_records: usize,
    /// Distinct months across all users.
    pub distinct_months: usize,
}

/// A complete synthetic dataset with ground truth.
pub struct SyntheticDataset {
    /// Records sorted by user then time.
    pub records: Vec<TrajectoryRecord>,
    /// Intended home location per user.
    pub home_locations: HashMap<String, LocationId>,
    /// Intended work location per user.
    pub work_locations: HashMap<String, LocationId>,
    pub metadata: DatasetMetadata,
}

// ============================================================================
// Presets
// ============================================================================

impl SyntheticScenario {
    /// 1000 users over six months, 8 records per active day.
    pub fn standard() -> Self {
        Self {
            user_count: 1000,
            start: YearMonth::new(2023, 10),
            month_count: 6,
            month_gap_probability: 0.1,
            active_day_probability: 0.6,
            records_per_day: 8,
            locations_per_user: 6,
            anchor_fidelity: 0.8,
            seed: 42,
        }
    }

    /// Standard scenario with a custom number of users.
    pub fn with_user_count(user_count: usize) -> Self {
        Self {
            user_count,
            ..Self::standard()
        }
    }

    /// Dense, gap-free trajectories: every day active, every record anchored.
    pub fn anchored(user_count: usize) -> Self {
        Self {
            user_count,
            month_gap_probability: 0.0,
            active_day_probability: 1.0,
            anchor_fidelity: 1.0,
            ..Self::standard()
        }
    }
}

// ============================================================================
// Generation
// ============================================================================

fn is_night(hour: u32) -> bool {
    hour >= 20 || hour < 8
}

impl SyntheticScenario {
    /// Generate the dataset. The same scenario always yields the same records.
    pub fn generate(&self) -> SyntheticDataset {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let gap = self.month_gap_probability.clamp(0.0, 1.0);
        let active = self.active_day_probability.clamp(0.0, 1.0);
        let fidelity = self.anchor_fidelity.clamp(0.0, 1.0);
        let locations = self.locations_per_user.max(2) as LocationId;

        let mut records = Vec::new();
        let mut home_locations = HashMap::with_capacity(self.user_count);
        let mut work_locations = HashMap::with_capacity(self.user_count);
        let mut months = BTreeSet::new();

        for user in 0..self.user_count {
            let user_id = format!("user_{:06}", user);
            let base = user as LocationId * locations;
            let home = base;
            let work = base + 1;
            home_locations.insert(user_id.clone(), home);
            work_locations.insert(user_id.clone(), work);

            let mut month = self.start;
            for _ in 0..self.month_count {
                if !rng.gen_bool(gap) {
                    let days = calendar::days_in_month(month.year, month.month).unwrap_or(28);
                    for day in 1..=days {
                        if !rng.gen_bool(active) {
                            continue;
                        }
                        let mut hours: Vec<u32> = (0..self.records_per_day)
                            .map(|_| rng.gen_range(0..24))
                            .collect();
                        hours.sort_unstable();

                        for hour in hours {
                            let anchor = if is_night(hour) { home } else { work };
                            let location = if rng.gen_bool(fidelity) {
                                anchor
                            } else {
                                base + rng.gen_range(0..locations)
                            };
                            months.insert(month);
                            records.push(TrajectoryRecord::new(
                                user_id.as_str(),
                                month.year,
                                month.month,
                                day,
                                hour,
                                location,
                            ));
                        }
                    }
                }
                month = month.next();
            }
        }

        let metadata = DatasetMetadata {
            users: self.user_count,
            total_records: records.len(),
            distinct_months: months.len(),
        };

        SyntheticDataset {
            records,
            home_locations,
            work_locations,
            metadata,
        }
    }
}

impl SyntheticDataset {
    /// Render the records as a `;`-separated input file, header included.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("ID;Year;Month;Day;Hour;Location\n");
        for r in &self.records {
            out.push_str(&format!(
                "{};{};{};{};{};{}\n",
                r.user_id, r.year, r.month, r.day, r.hour, r.location
            ));
        }
        out
    }
}

// ============================================================================
// Tests
// ============================================================================
