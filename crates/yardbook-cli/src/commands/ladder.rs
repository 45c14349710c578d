//! Ladder command implementation.

use super::{find_club, find_shot_type, load_golf_mode, parse_filter};
use crate::cli::LadderArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use yardbook_domain::ladder::combination_window;
use yardbook_domain::{GolfModeState, ShotTypeFilter};
use yardbook_lifecycle::ClubLifecycleManager;
use yardbook_store::SqliteStore;

/// Execute the ladder command.
pub fn execute_ladder(
    args: LadderArgs,
    store: &mut SqliteStore,
    manager: &ClubLifecycleManager,
    formatter: &Formatter,
) -> Result<()> {
    let filter = parse_filter(args.shot_type.as_deref())?;
    let mut state = load_golf_mode(store, manager, args.target, filter)?;

    if args.picker {
        let names = match state.filter() {
            ShotTypeFilter::All => None,
            ShotTypeFilter::Named(name) => Some(vec![name.clone()]),
        };
        let combos = combination_window(state.clubs(), state.target_yardage(), names.as_deref());
        println!("{}", formatter.format_combinations(state.target_yardage(), &combos)?);
        return Ok(());
    }

    if let (Some(club), Some(shot)) = (&args.club, &args.shot) {
        pin_selection(&mut state, store, club, shot)?;
    }

    let selection = state.selection();
    println!(
        "{}",
        formatter.format_ladder(
            state.target_yardage(),
            state.ladder(),
            selection.as_ref(),
            state.show_reset_indicator(),
        )?
    );
    Ok(())
}

/// Select a club/shot combination by the names the golfer typed.
fn pin_selection(
    state: &mut GolfModeState,
    store: &SqliteStore,
    club_key: &str,
    shot_key: &str,
) -> Result<()> {
    let club = find_club(store, club_key)?;
    let shot = find_shot_type(&club, shot_key)?;
    if !state.select_club_shot(&club.name, &shot.name) {
        return Err(CliError::InvalidInput(format!(
            "{} {} is not an active combination in the bag",
            club.name, shot.name
        )));
    }
    Ok(())
}
