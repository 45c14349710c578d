//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use yardbook_domain::clock::SECS_PER_DAY;
use yardbook_domain::resolver::resolve_display_distance;
use yardbook_domain::{
    AppSettings, Club, ComboEntry, RangeSession, RangeStats, SelectedClubShot, ShotRecommendation,
    ShotType, StoredShotType, UserProfile, YardageLadder,
};
use yardbook_janitor::JanitorMetrics;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format clubs, showing each club's distance for the primary shot type.
    pub fn format_clubs(&self, clubs: &[Club], primary_shot_type: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_clubs: Vec<serde_json::Value> = clubs
                    .iter()
                    .map(|c| {
                        json!({
                            "id": c.id.to_string(),
                            "name": c.name,
                            "nickname": c.nickname,
                            "sort_order": c.sort_order,
                            "is_archived": c.is_archived,
                            "display_distance": resolve_display_distance(c, primary_shot_type),
                            "shot_types": c
                                .shot_types
                                .iter()
                                .map(shot_type_json)
                                .collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json_clubs)?)
            }
            OutputFormat::Quiet => Ok(join_ids(clubs.iter().map(|c| c.id.to_string()))),
            OutputFormat::Table => {
                if clubs.is_empty() {
                    return Ok(self.colorize("No clubs found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Club", "Nick", "Yards", "Shot Types"]);
                for club in clubs {
                    let shots = club
                        .active_shot_types()
                        .map(|s| format!("{} {}", s.name, s.carry_distance))
                        .collect::<Vec<_>>()
                        .join(", ");
                    builder.push_record([
                        short_id(&club.id.to_string()),
                        club.name.clone(),
                        club.nickname.clone(),
                        resolve_display_distance(club, primary_shot_type).to_string(),
                        shots,
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a club's shot types, archived ones included.
    pub fn format_shot_types(&self, club: &Club, now: u64) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = json!({
                    "club_id": club.id.to_string(),
                    "club": club.name,
                    "shot_types": club.shot_types.iter().map(shot_type_json).collect::<Vec<_>>(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(join_ids(club.shot_types.iter().map(|s| s.id.to_string()))),
            OutputFormat::Table => {
                if club.shot_types.is_empty() {
                    let message = format!("{} has no shot types.", club.name);
                    return Ok(self.colorize(&message, "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Shot Type", "Carry", "Status"]);
                for shot in &club.shot_types {
                    let status = match shot.archived_at {
                        Some(at) if shot.is_archived => format!("archived {}", format_age(at, now)),
                        _ if shot.is_archived => "archived".to_string(),
                        _ => "active".to_string(),
                    };
                    builder.push_record([
                        short_id(&shot.id.to_string()),
                        shot.name.clone(),
                        shot.carry_distance.to_string(),
                        status,
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format recommendations for a target.
    pub fn format_recommendations(
        &self,
        target: u32,
        recommendations: &[ShotRecommendation],
        selection: Option<&SelectedClubShot>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = json!({
                    "target": target,
                    "selection": selection.map(selection_json),
                    "recommendations": recommendations
                        .iter()
                        .map(|r| json!({
                            "club": r.club_name,
                            "shot_type": r.shot_type_name,
                            "carry_distance": r.carry_distance,
                            "distance_difference": r.distance_difference,
                        }))
                        .collect::<Vec<_>>(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(recommendations
                .iter()
                .map(|r| format!("{}\t{}", r.club_name, r.shot_type_name))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if recommendations.is_empty() {
                    return Ok(self.colorize("No club/shot combinations match.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["", "Club", "Shot Type", "Carry", "Off"]);
                for r in recommendations {
                    let selected = selection
                        .is_some_and(|s| is_selection(s, &r.club_name, &r.shot_type_name));
                    let marker = if selected {
                        "●"
                    } else {
                        ""
                    };
                    builder.push_record([
                        marker.to_string(),
                        r.club_name.clone(),
                        r.shot_type_name.clone(),
                        r.carry_distance.to_string(),
                        signed_offset(r.carry_distance, target),
                    ]);
                }
                Ok(format!("Target: {} yds\n{}", target, render(builder)))
            }
        }
    }

    /// Format the yardage ladder.
    pub fn format_ladder(
        &self,
        target: u32,
        ladder: &YardageLadder,
        selection: Option<&SelectedClubShot>,
        pinned: bool,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = json!({
                    "target": target,
                    "min_yardage": ladder.min_yardage,
                    "max_yardage": ladder.max_yardage,
                    "selection": selection.map(selection_json),
                    "pinned": pinned,
                    "groups": ladder
                        .groups
                        .iter()
                        .map(|g| json!({
                            "carry_distance": g.carry_distance,
                            "label": g.display_label(),
                            "is_any_selected": g.is_any_selected(),
                            "is_primary_font_size": g.is_primary_font_size(),
                            "entries": g
                                .entries
                                .iter()
                                .map(|e| json!({
                                    "club": e.club_name,
                                    "nickname": e.club_nickname,
                                    "shot_type": e.shot_type_name,
                                    "yardage_position": e.yardage_position,
                                    "is_selected": e.is_selected,
                                    "is_same_club_as_selected": e.is_same_club_as_selected,
                                    "is_primary_shot_type": e.is_primary_shot_type,
                                }))
                                .collect::<Vec<_>>(),
                        }))
                        .collect::<Vec<_>>(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(ladder
                .groups
                .iter()
                .map(|g| format!("{}\t{}", g.carry_distance, g.display_label()))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let header = format!(
                    "Target: {} yds (window {}-{})",
                    target, ladder.min_yardage, ladder.max_yardage
                );
                if ladder.groups.is_empty() {
                    return Ok(format!(
                        "{}\n{}",
                        header,
                        self.colorize("No combinations inside the window.", "yellow")
                    ));
                }

                let mut builder = Builder::default();
                builder.push_record(["", "Yards", "Label", "Shot Types"]);
                for group in &ladder.groups {
                    let marker = if group.is_any_selected() {
                        "●"
                    } else if group.is_any_same_club_as_selected() {
                        "○"
                    } else {
                        ""
                    };
                    let shots = group
                        .entries
                        .iter()
                        .map(|e| format!("{} {}", e.club_name, e.shot_type_name))
                        .collect::<Vec<_>>()
                        .join(", ");
                    let label = if group.is_primary_font_size() {
                        self.colorize(&group.display_label(), "cyan")
                    } else {
                        group.display_label()
                    };
                    builder.push_record([
                        marker.to_string(),
                        group.carry_distance.to_string(),
                        label,
                        shots,
                    ]);
                }

                let mut output = format!("{}\n{}", header, render(builder));
                if pinned {
                    output.push('\n');
                    output.push_str(&self.info(
                        "Manual selection active; omit --club/--shot to follow the recommendation",
                    ));
                }
                Ok(output)
            }
        }
    }

    /// Format the club-shot picker window.
    pub fn format_combinations(&self, target: u32, combos: &[ComboEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value: Vec<serde_json::Value> = combos
                    .iter()
                    .map(|c| json!({
                        "club": c.club_name,
                        "nickname": c.club_nickname,
                        "shot_type": c.shot_type_name,
                        "carry_distance": c.carry_distance,
                    }))
                    .collect();
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(combos
                .iter()
                .map(|c| format!("{}\t{}", c.club_name, c.shot_type_name))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if combos.is_empty() {
                    return Ok(self.colorize("No club/shot combinations found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Nick", "Club", "Shot Type", "Carry", "Off"]);
                for c in combos {
                    builder.push_record([
                        c.club_nickname.clone(),
                        c.club_name.clone(),
                        c.shot_type_name.clone(),
                        c.carry_distance.to_string(),
                        signed_offset(c.carry_distance, target),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format the session history.
    pub fn format_sessions(&self, sessions: &[RangeSession], now: u64) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value: Vec<serde_json::Value> = sessions.iter().map(session_json).collect();
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(join_ids(sessions.iter().map(|s| s.id.to_string()))),
            OutputFormat::Table => {
                if sessions.is_empty() {
                    return Ok(self.colorize("No range sessions found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record([
                    "ID",
                    "Started",
                    "Club",
                    "Shot Type",
                    "Shots",
                    "Median",
                    "P75",
                    "Max",
                ]);
                for session in sessions {
                    let stats = session.stats();
                    builder.push_record([
                        short_id(&session.id.to_string()),
                        format_age(session.started_at, now),
                        session.club_name.clone(),
                        session.shot_type_name.clone(),
                        stats.count.to_string(),
                        stats.median.to_string(),
                        stats.percentile75.to_string(),
                        stats.max.to_string(),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format one session with its shots.
    pub fn format_session(&self, session: &RangeSession) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&session_json(session))?),
            OutputFormat::Quiet => Ok(join_ids(session.shots.iter().map(|s| s.id.to_string()))),
            OutputFormat::Table => {
                let header = format!(
                    "Session {} - {} / {}",
                    short_id(&session.id.to_string()),
                    session.club_name,
                    session.shot_type_name
                );
                if session.shots.is_empty() {
                    return Ok(format!(
                        "{}\n{}",
                        header,
                        self.colorize("No shots logged yet.", "yellow")
                    ));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Shot", "Yards", "Voice"]);
                for (i, shot) in session.shots.iter().enumerate() {
                    builder.push_record([
                        (i + 1).to_string(),
                        short_id(&shot.id.to_string()),
                        shot.distance.to_string(),
                        if shot.is_from_voice { "yes" } else { "" }.to_string(),
                    ]);
                }
                Ok(format!(
                    "{}\n{}\n{}",
                    header,
                    render(builder),
                    self.format_stats_line(&session.stats())
                ))
            }
        }
    }

    /// Format session statistics.
    pub fn format_stats(&self, stats: &RangeStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&stats_json(stats))?),
            OutputFormat::Quiet => Ok(stats.median.to_string()),
            OutputFormat::Table => Ok(self.format_stats_line(stats)),
        }
    }

    fn format_stats_line(&self, stats: &RangeStats) -> String {
        format!(
            "{} shots, median {} yds, p75 {} yds, max {} yds",
            stats.count, stats.median, stats.percentile75, stats.max
        )
    }

    /// Format saved session results.
    pub fn format_stored_shot_types(&self, records: &[StoredShotType], now: u64) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value: Vec<serde_json::Value> = records
                    .iter()
                    .map(|r| json!({
                        "id": r.id.to_string(),
                        "club": r.club_name,
                        "shot_type": r.shot_type_name,
                        "distance": r.distance,
                        "recorded_at": r.recorded_at,
                    }))
                    .collect();
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(join_ids(records.iter().map(|r| r.id.to_string()))),
            OutputFormat::Table => {
                if records.is_empty() {
                    return Ok(self.colorize("No saved results.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Saved", "Club", "Shot Type", "Yards"]);
                for r in records {
                    builder.push_record([
                        format_age(r.recorded_at, now),
                        r.club_name.clone(),
                        r.shot_type_name.clone(),
                        r.distance.to_string(),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format the user profile.
    pub fn format_profile(&self, profile: &UserProfile) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "id": profile.id.to_string(),
                "name": profile.name,
                "handicap": profile.handicap,
                "primary_shot_type": profile.primary_shot_type,
            }))?),
            OutputFormat::Quiet => Ok(profile.id.to_string()),
            OutputFormat::Table => {
                let name = if profile.name.is_empty() { "-" } else { profile.name.as_str() };
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["Name", name]);
                builder.push_record(["Handicap".to_string(), profile.handicap.to_string()]);
                builder.push_record(["Primary shot type", profile.primary_shot_type.as_str()]);
                Ok(render(builder))
            }
        }
    }

    /// Format the app settings.
    pub fn format_settings(&self, settings: &AppSettings) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "id": settings.id.to_string(),
                "yardage_range_percentage": settings.yardage_range_percentage,
            }))?),
            OutputFormat::Quiet => Ok(settings.yardage_range_percentage.to_string()),
            OutputFormat::Table => Ok(format!(
                "Ladder tolerance: ±{}%",
                settings.yardage_range_percentage
            )),
        }
    }

    /// Format maintenance metrics.
    pub fn format_metrics(&self, metrics: &JanitorMetrics) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "purged_shot_types": metrics.purged_shot_types,
                "nicknames_backfilled": metrics.nicknames_backfilled,
                "purge_candidates": metrics.purge_candidates,
                "sweep_count": metrics.sweep_count,
                "total_runtime_secs": metrics.total_runtime_secs,
                "last_sweep_at": metrics.last_sweep_at,
            }))?),
            OutputFormat::Quiet => Ok(metrics.purged_shot_types.to_string()),
            OutputFormat::Table => Ok(metrics.summary()),
        }
    }

    /// Format a list of names.
    pub fn format_names(&self, names: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(names)?),
            _ => Ok(names.join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn join_ids(ids: impl Iterator<Item = String>) -> String {
    ids.collect::<Vec<_>>().join("\n")
}

/// Truncate an ID for readability
fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

fn signed_offset(carry: u32, target: u32) -> String {
    let offset = i64::from(carry) - i64::from(target);
    if offset > 0 {
        format!("+{}", offset)
    } else {
        offset.to_string()
    }
}

/// Coarse age of a timestamp relative to `now`
fn format_age(at: u64, now: u64) -> String {
    match now.saturating_sub(at) / SECS_PER_DAY {
        0 => "today".to_string(),
        1 => "1 day ago".to_string(),
        days => format!("{} days ago", days),
    }
}

fn is_selection(selection: &SelectedClubShot, club_name: &str, shot_type_name: &str) -> bool {
    selection.club_name == club_name && selection.shot_type_name == shot_type_name
}

fn selection_json(selection: &SelectedClubShot) -> serde_json::Value {
    json!({
        "club": selection.club_name,
        "shot_type": selection.shot_type_name,
    })
}

fn shot_type_json(shot: &ShotType) -> serde_json::Value {
    json!({
        "id": shot.id.to_string(),
        "name": shot.name,
        "carry_distance": shot.carry_distance,
        "sort_order": shot.sort_order,
        "is_archived": shot.is_archived,
        "archived_at": shot.archived_at,
    })
}

fn stats_json(stats: &RangeStats) -> serde_json::Value {
    json!({
        "count": stats.count,
        "median": stats.median,
        "percentile75": stats.percentile75,
        "max": stats.max,
    })
}

fn session_json(session: &RangeSession) -> serde_json::Value {
    json!({
        "id": session.id.to_string(),
        "started_at": session.started_at,
        "club": session.club_name,
        "shot_type": session.shot_type_name,
        "stats": stats_json(&session.stats()),
        "shots": session
            .shots
            .iter()
            .map(|s| json!({
                "id": s.id.to_string(),
                "distance": s.distance,
                "recorded_at": s.recorded_at,
                "is_from_voice": s.is_from_voice,
            }))
            .collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven_iron() -> Club {
        let mut club = Club::new("7 Iron", "7I", 0);
        club.push_shot_type("Full", 165);
        club.push_shot_type("3/4", 150);
        club
    }

    #[test]
    fn test_clubs_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_clubs(&[seven_iron()], "Full").unwrap();
        assert!(output.contains("7 Iron"));
        assert!(output.contains("165"));
        assert!(output.contains("3/4 150"));
    }

    #[test]
    fn test_clubs_json_uses_primary_distance() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_clubs(&[seven_iron()], "3/4").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["display_distance"], 150);
        assert_eq!(value[0]["shot_types"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_clubs_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let club = seven_iron();
        let output = formatter.format_clubs(std::slice::from_ref(&club), "Full").unwrap();
        assert_eq!(output, club.id.to_string());
    }

    #[test]
    fn test_empty_clubs() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_clubs(&[], "Full").unwrap();
        assert!(output.contains("No clubs found"));
    }

    #[test]
    fn test_recommendations_mark_selection() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let recs = vec![ShotRecommendation {
            club_name: "7 Iron".to_string(),
            shot_type_name: "3/4".to_string(),
            carry_distance: 150,
            distance_difference: 2,
        }];
        let selection = SelectedClubShot {
            club_name: "7 Iron".to_string(),
            shot_type_name: "3/4".to_string(),
        };
        let output = formatter
            .format_recommendations(152, &recs, Some(&selection))
            .unwrap();
        assert!(output.contains("Target: 152 yds"));
        assert!(output.contains("●"));
        assert!(output.contains("-2"));
    }

    #[test]
    fn test_ladder_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let ladder = YardageLadder::build(150, 15, &[seven_iron()], None, "Full");
        let output = formatter.format_ladder(150, &ladder, None, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["min_yardage"], 127);
        assert_eq!(value["max_yardage"], 172);
        assert_eq!(value["groups"][0]["carry_distance"], 165);
        assert_eq!(value["groups"][0]["label"], "7I");
    }

    #[test]
    fn test_session_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut session = RangeSession::new("7 Iron", "Full", 1_000);
        session.push_shot(160, false, 1_010);
        session.push_shot(170, true, 1_020);
        let output = formatter.format_session(&session).unwrap();
        assert!(output.contains("7 Iron / Full"));
        assert!(output.contains("2 shots, median 165 yds, p75 160 yds, max 170 yds"));
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(1_000, 1_000), "today");
        assert_eq!(format_age(0, SECS_PER_DAY), "1 day ago");
        assert_eq!(format_age(0, 8 * SECS_PER_DAY), "8 days ago");
        assert_eq!(format_age(2_000, 1_000), "today");
    }

    #[test]
    fn test_signed_offset() {
        assert_eq!(signed_offset(155, 150), "+5");
        assert_eq!(signed_offset(150, 150), "0");
        assert_eq!(signed_offset(140, 150), "-10");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
