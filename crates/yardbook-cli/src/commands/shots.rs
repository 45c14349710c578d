//! Shots command implementation.

use super::{find_club, find_shot_type};
use crate::cli::{ShotsAction, ShotsArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use yardbook_domain::clock::current_timestamp;
use yardbook_lifecycle::ClubLifecycleManager;
use yardbook_store::SqliteStore;

/// Execute the shots command.
pub fn execute_shots(
    args: ShotsArgs,
    store: &mut SqliteStore,
    manager: &ClubLifecycleManager,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ShotsAction::List { club } => {
            let club = find_club(store, &club)?;
            println!("{}", formatter.format_shot_types(&club, current_timestamp())?);
        }
        ShotsAction::Add { club, name, distance } => {
            let club = find_club(store, &club)?;
            let shot = manager.add_shot_type(store, club.id, &name, distance)?;
            let message = format!(
                "Added {} {} at {} yds",
                club.name, shot.name, shot.carry_distance
            );
            println!("{}", formatter.success(&message));
        }
        ShotsAction::Update {
            club,
            shot,
            name,
            distance,
        } => {
            if name.is_none() && distance.is_none() {
                return Err(CliError::InvalidInput("Pass --name and/or --distance".to_string()));
            }
            let club = find_club(store, &club)?;
            let current = find_shot_type(&club, &shot)?;
            let name = name.unwrap_or_else(|| current.name.clone());
            let distance = distance.unwrap_or(current.carry_distance);
            let updated = manager.update_shot_type(store, club.id, current.id, &name, distance)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Updated {} {} ({} yds)",
                    club.name, updated.name, updated.carry_distance
                ))
            );
        }
        ShotsAction::Archive { club, shot } => {
            let club = find_club(store, &club)?;
            let id = find_shot_type(&club, &shot)?.id;
            let archived = manager.archive_shot_type(store, club.id, id)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Archived {} {}; it will be purged after {} days",
                    club.name,
                    archived.name,
                    manager.config().archive_retention_days
                ))
            );
        }
        ShotsAction::Restore { club, shot } => {
            let club = find_club(store, &club)?;
            let id = find_shot_type(&club, &shot)?.id;
            let restored = manager.restore_shot_type(store, club.id, id)?;
            println!("{}", formatter.success(&format!("Restored {} {}", club.name, restored.name)));
        }
        ShotsAction::Delete { club, shot } => {
            let club = find_club(store, &club)?;
            let id = find_shot_type(&club, &shot)?.id;
            let deleted = manager.delete_shot_type(store, club.id, id)?;
            println!("{}", formatter.success(&format!("Deleted {} {}", club.name, deleted.name)));
        }
        ShotsAction::Names => {
            let names = manager.unique_shot_type_names(&*store)?;
            println!("{}", formatter.format_names(&names)?);
        }
    }

    Ok(())
}
