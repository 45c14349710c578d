//! Golf-mode state - the on-course view of recommendations and the ladder
//!
//! Derived fields (recommendations, ladder) are recomputed explicitly by
//! every setter and by [`GolfModeState::reload`]; nothing is recomputed
//! lazily behind the caller's back.

use crate::club::{Club, FULL_SHOT_TYPE};
use crate::ladder::{SelectedClubShot, YardageLadder};
use crate::profile::DEFAULT_TOLERANCE_PERCENT;
use crate::recommendation::{recommend, ShotRecommendation, ShotTypeFilter};
use crate::{AppSettings, UserProfile};

/// Target yardage shown before the golfer enters one
pub const DEFAULT_TARGET_YARDAGE: u32 = 150;

/// State container for golf mode
#[derive(Debug, Clone)]
pub struct GolfModeState {
    target_yardage: u32,
    filter: ShotTypeFilter,
    clubs: Vec<Club>,
    primary_shot_type: String,
    tolerance_percent: u32,
    manual_selection: Option<SelectedClubShot>,
    recommendations: Vec<ShotRecommendation>,
    ladder: YardageLadder,
}

impl Default for GolfModeState {
    fn default() -> Self {
        let mut state = Self {
            target_yardage: DEFAULT_TARGET_YARDAGE,
            filter: ShotTypeFilter::All,
            clubs: Vec::new(),
            primary_shot_type: FULL_SHOT_TYPE.to_string(),
            tolerance_percent: DEFAULT_TOLERANCE_PERCENT,
            manual_selection: None,
            recommendations: Vec::new(),
            ladder: YardageLadder {
                min_yardage: 0,
                max_yardage: 0,
                groups: Vec::new(),
            },
        };
        state.recompute();
        state
    }
}

impl GolfModeState {
    /// Create an empty state at the default target
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the club set, profile and settings, then recompute
    ///
    /// Archived clubs and archived shot types are dropped. A manual selection
    /// that no longer exists in the new club set is cleared.
    pub fn reload(&mut self, clubs: &[Club], profile: &UserProfile, settings: &AppSettings) {
        self.clubs = clubs
            .iter()
            .filter(|c| !c.is_archived)
            .map(|c| {
                let mut club = c.clone();
                club.shot_types.retain(|s| !s.is_archived);
                club
            })
            .collect();
        self.primary_shot_type = profile.primary_shot_type.clone();
        self.tolerance_percent = settings.yardage_range_percentage;

        if let Some(selection) = &self.manual_selection {
            if !self.contains(selection) {
                self.manual_selection = None;
            }
        }
        self.recompute();
    }

    /// Change the target; any manual selection is dropped
    pub fn set_target_yardage(&mut self, yardage: u32) {
        self.target_yardage = yardage;
        self.manual_selection = None;
        self.recompute();
    }

    /// Change the recommendation filter
    pub fn set_filter(&mut self, filter: ShotTypeFilter) {
        self.filter = filter;
        self.recompute();
    }

    /// Pin a specific club/shot combination as the selection
    ///
    /// Returns false (and changes nothing) if the combination is not in the
    /// current club set.
    pub fn select_club_shot(&mut self, club_name: &str, shot_type_name: &str) -> bool {
        let selection = SelectedClubShot {
            club_name: club_name.to_string(),
            shot_type_name: shot_type_name.to_string(),
        };
        if !self.contains(&selection) {
            return false;
        }
        self.manual_selection = Some(selection);
        self.recompute();
        true
    }

    /// Drop the manual selection and follow the top recommendation again
    pub fn reset_to_recommendation(&mut self) {
        self.manual_selection = None;
        self.recompute();
    }

    /// The manual selection, else the top recommendation
    pub fn selection(&self) -> Option<SelectedClubShot> {
        self.manual_selection.clone().or_else(|| {
            self.recommendations.first().map(|r| SelectedClubShot {
                club_name: r.club_name.clone(),
                shot_type_name: r.shot_type_name.clone(),
            })
        })
    }

    /// True while a manual selection overrides the recommendation
    pub fn show_reset_indicator(&self) -> bool {
        self.manual_selection.is_some()
    }

    /// Current target
    pub fn target_yardage(&self) -> u32 {
        self.target_yardage
    }

    /// Current filter
    pub fn filter(&self) -> &ShotTypeFilter {
        &self.filter
    }

    /// Active clubs with their active shot types
    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    /// Current recommendations
    pub fn recommendations(&self) -> &[ShotRecommendation] {
        &self.recommendations
    }

    /// Current ladder
    pub fn ladder(&self) -> &YardageLadder {
        &self.ladder
    }

    fn contains(&self, selection: &SelectedClubShot) -> bool {
        self.clubs.iter().any(|c| {
            c.name == selection.club_name
                && c.shot_types.iter().any(|s| s.name == selection.shot_type_name)
        })
    }

    fn recompute(&mut self) {
        self.recommendations = recommend(self.target_yardage, &self.clubs, &self.filter);
        let selection = self.selection();
        self.ladder = YardageLadder::build(
            self.target_yardage,
            self.tolerance_percent,
            &self.clubs,
            selection.as_ref(),
            &self.primary_shot_type,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag() -> Vec<Club> {
        let mut seven = Club::new("7 Iron", "7I", 0);
        seven.push_shot_type(FULL_SHOT_TYPE, 165);
        seven.push_shot_type("3/4", 150);
        let mut eight = Club::new("8 Iron", "8I", 1);
        eight.push_shot_type(FULL_SHOT_TYPE, 155);
        let mut retired = Club::new("2 Iron", "2I", 2);
        retired.push_shot_type(FULL_SHOT_TYPE, 152);
        retired.is_archived = true;
        vec![seven, eight, retired]
    }

    fn loaded() -> GolfModeState {
        let mut state = GolfModeState::new();
        state.reload(&bag(), &UserProfile::default(), &AppSettings::default());
        state
    }

    #[test]
    fn test_default_state() {
        let state = GolfModeState::new();
        assert_eq!(state.target_yardage(), 150);
        assert!(state.recommendations().is_empty());
        assert!(state.selection().is_none());
    }

    #[test]
    fn test_reload_drops_archived() {
        let state = loaded();
        assert_eq!(state.clubs().len(), 2);
        assert!(state.recommendations().iter().all(|r| r.club_name != "2 Iron"));
    }

    #[test]
    fn test_selection_follows_top_recommendation() {
        let state = loaded();
        let selection = state.selection().unwrap();
        assert_eq!(selection.club_name, "7 Iron");
        assert_eq!(selection.shot_type_name, "3/4");
        assert!(!state.show_reset_indicator());

        let group = state.ladder().groups.iter().find(|g| g.carry_distance == 150).unwrap();
        assert!(group.is_any_selected());
    }

    #[test]
    fn test_manual_selection_and_reset() {
        let mut state = loaded();
        assert!(state.select_club_shot("8 Iron", FULL_SHOT_TYPE));
        assert!(state.show_reset_indicator());
        assert_eq!(state.selection().unwrap().club_name, "8 Iron");

        assert!(!state.select_club_shot("Driver", FULL_SHOT_TYPE));
        assert_eq!(state.selection().unwrap().club_name, "8 Iron");

        state.reset_to_recommendation();
        assert!(!state.show_reset_indicator());
        assert_eq!(state.selection().unwrap().club_name, "7 Iron");
    }

    #[test]
    fn test_target_change_recomputes() {
        let mut state = loaded();
        state.select_club_shot("7 Iron", FULL_SHOT_TYPE);
        state.set_target_yardage(156);

        assert!(!state.show_reset_indicator());
        assert_eq!(state.recommendations()[0].carry_distance, 155);
    }

    #[test]
    fn test_filter_recomputes() {
        let mut state = loaded();
        state.set_filter(ShotTypeFilter::Named(FULL_SHOT_TYPE.into()));
        assert_eq!(state.recommendations().len(), 2);
        assert!(state.recommendations().iter().all(|r| r.shot_type_name == FULL_SHOT_TYPE));
    }

    #[test]
    fn test_reload_clears_vanished_selection() {
        let mut state = loaded();
        state.select_club_shot("8 Iron", FULL_SHOT_TYPE);

        let remaining: Vec<Club> = bag().into_iter().filter(|c| c.name != "8 Iron").collect();
        state.reload(&remaining, &UserProfile::default(), &AppSettings::default());
        assert!(!state.show_reset_indicator());
    }
}
