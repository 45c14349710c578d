//! Recommend command implementation.

use super::{load_golf_mode, parse_filter};
use crate::cli::RecommendArgs;
use crate::error::Result;
use crate::output::Formatter;
use yardbook_lifecycle::ClubLifecycleManager;
use yardbook_store::SqliteStore;

/// Execute the recommend command.
pub fn execute_recommend(
    args: RecommendArgs,
    store: &mut SqliteStore,
    manager: &ClubLifecycleManager,
    formatter: &Formatter,
) -> Result<()> {
    let filter = parse_filter(args.shot_type.as_deref())?;
    let state = load_golf_mode(store, manager, args.target, filter)?;
    let selection = state.selection();

    let output = formatter.format_recommendations(
        state.target_yardage(),
        state.recommendations(),
        selection.as_ref(),
    )?;
    println!("{}", output);
    Ok(())
}
