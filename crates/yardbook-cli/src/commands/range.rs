//! Range command implementation.

use super::{find_club, find_session, find_shot, find_shot_type};
use crate::cli::{RangeAction, RangeArgs};
use crate::error::Result;
use crate::output::Formatter;
use yardbook_domain::clock::current_timestamp;
use yardbook_range::RangeService;
use yardbook_store::SqliteStore;

/// Execute the range command.
pub fn execute_range(
    args: RangeArgs,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    let range = RangeService::new();

    match args.action {
        RangeAction::Start { club, shot } => {
            let club = find_club(store, &club)?;
            let shot_type = find_shot_type(&club, &shot)?;
            let session = range.start_session(store, &club.name, &shot_type.name)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Started session {} ({} / {})",
                    session.id, session.club_name, session.shot_type_name
                ))
            );
        }
        RangeAction::Log { session, distances } => {
            let id = find_session(store, &session)?.id;
            for distance in distances {
                range.add_shot(store, id, distance, false)?;
            }
            let stats = range.session_stats(&*store, id)?;
            println!("{}", formatter.success(&formatter.format_stats(&stats)?));
        }
        RangeAction::Say { session, transcript } => {
            let id = find_session(store, &session)?.id;
            let shot = range.add_spoken_shot(store, id, &transcript)?;
            println!("{}", formatter.success(&format!("Logged {} yds", shot.distance)));
        }
        RangeAction::Remove { session, shot } => {
            let session = find_session(store, &session)?;
            let shot_id = find_shot(&session, &shot)?;
            let removed = range.delete_shot(store, session.id, shot_id)?;
            println!("{}", formatter.success(&format!("Removed {} yd shot", removed.distance)));
        }
        RangeAction::Show { session } => {
            let session = find_session(store, &session)?;
            println!("{}", formatter.format_session(&session)?);
        }
        RangeAction::End { session, save } => {
            let id = find_session(store, &session)?.id;
            let stats = range.end_session(&*store, id)?;
            println!("{}", formatter.format_stats(&stats)?);
            if save {
                let record = range.save_as_stored_shot_type(store, id)?;
                println!(
                    "{}",
                    formatter.success(&format!(
                        "Saved {} / {} at {} yds",
                        record.club_name, record.shot_type_name, record.distance
                    ))
                );
            }
        }
        RangeAction::List => {
            let sessions = range.fetch_sessions(&*store)?;
            println!("{}", formatter.format_sessions(&sessions, current_timestamp())?);
        }
        RangeAction::Delete { session } => {
            let id = find_session(store, &session)?.id;
            range.delete_session(store, id)?;
            println!("{}", formatter.success(&format!("Deleted session {}", id)));
        }
        RangeAction::Save { session } => {
            let id = find_session(store, &session)?.id;
            let record = range.save_as_stored_shot_type(store, id)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Saved {} / {} at {} yds",
                    record.club_name, record.shot_type_name, record.distance
                ))
            );
        }
        RangeAction::Saved => {
            let records = range.fetch_stored_shot_types(&*store)?;
            println!("{}", formatter.format_stored_shot_types(&records, current_timestamp())?);
        }
    }

    Ok(())
}
