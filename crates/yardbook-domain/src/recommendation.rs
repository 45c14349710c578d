//! Shot recommendations - closest club/shot combinations for a target

use crate::club::Club;
use std::fmt;

/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Shot-type filter applied before ranking
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ShotTypeFilter {
    /// Every shot type is a candidate
    #[default]
    All,

    /// Only shot types with exactly this name
    Named(String),
}

impl ShotTypeFilter {
    /// The filters offered by default
    pub fn standard() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(
                ["Full", "3/4", "Hard", "1/2", "Punch"]
                    .into_iter()
                    .map(|name| Self::Named(name.to_string())),
            )
            .collect()
    }

    /// Whether a shot-type name passes this filter
    pub fn matches(&self, shot_type_name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == shot_type_name,
        }
    }

    /// Parse a filter from user input; "all" (any case) means no filtering
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Named(s.to_string())
        }
    }
}

impl std::str::FromStr for ShotTypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("Shot type filter cannot be empty".to_string());
        }
        Ok(Self::parse(s.trim()))
    }
}

impl fmt::Display for ShotTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Named(name) => write!(f, "{}", name),
        }
    }
}

/// A candidate club/shot combination and how far it misses the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotRecommendation {
    /// Club name
    pub club_name: String,

    /// Shot-type name
    pub shot_type_name: String,

    /// Carry of the combination
    pub carry_distance: u32,

    /// Absolute difference from the target
    pub distance_difference: u32,
}

/// Rank every club/shot combination against a target yardage
///
/// Candidates are ordered by absolute difference from the target. The sort
/// is stable, so ties keep club order then shot-type order. At most
/// [`MAX_RECOMMENDATIONS`] are returned; no candidates gives an empty vec.
///
/// Archived clubs and shot types are candidates too; callers pass the
/// collection they want considered.
pub fn recommend(target: u32, clubs: &[Club], filter: &ShotTypeFilter) -> Vec<ShotRecommendation> {
    let mut candidates: Vec<ShotRecommendation> = clubs
        .iter()
        .flat_map(|club| club.shot_types.iter().map(move |shot| (club, shot)))
        .filter(|(_, shot)| filter.matches(&shot.name))
        .map(|(club, shot)| ShotRecommendation {
            club_name: club.name.clone(),
            shot_type_name: shot.name.clone(),
            carry_distance: shot.carry_distance,
            distance_difference: shot.carry_distance.abs_diff(target),
        })
        .collect();

    candidates.sort_by_key(|c| c.distance_difference);
    candidates.truncate(MAX_RECOMMENDATIONS);
    candidates
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::club::FULL_SHOT_TYPE;
    use proptest::prelude::*;

    proptest! {
        /// Results are sorted by difference and never exceed the cap
        #[test]
        fn test_results_sorted_and_capped(
            target in 1u32..400,
            distances in prop::collection::vec(1u32..400, 0..20),
        ) {
            let clubs: Vec<Club> = distances
                .iter()
                .map(|d| {
                    let mut club = Club::new("Club", "", 0);
                    club.push_shot_type(FULL_SHOT_TYPE, *d);
                    club
                })
                .collect();
            let results = recommend(target, &clubs, &ShotTypeFilter::All);

            prop_assert_eq!(results.len(), distances.len().min(MAX_RECOMMENDATIONS));
            prop_assert!(results
                .windows(2)
                .all(|w| w[0].distance_difference <= w[1].distance_difference));
        }
    }
}
