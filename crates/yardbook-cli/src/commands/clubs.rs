//! Clubs command implementation.

use super::find_club;
use crate::cli::{ClubsAction, ClubsArgs};
use crate::error::Result;
use crate::output::Formatter;
use std::io::{self, Write};
use yardbook_lifecycle::{ClubLifecycleManager, ClubUpdate, ProfileService};
use yardbook_store::SqliteStore;

/// Execute the clubs command.
pub fn execute_clubs(
    args: ClubsArgs,
    store: &mut SqliteStore,
    manager: &ClubLifecycleManager,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ClubsAction::List { archived } => {
            let clubs = if archived {
                manager.fetch_archived_clubs(&*store)?
            } else {
                manager.fetch_clubs(&*store)?
            };
            let profile = ProfileService::new().get_or_create_profile(store)?;
            println!("{}", formatter.format_clubs(&clubs, &profile.primary_shot_type)?);
        }
        ClubsAction::Add { name, distance, nickname } => {
            let club = manager.add_club(store, &name, distance, nickname.as_deref())?;
            let message = format!(
                "Added {} ({}) at {} yds: {}",
                club.name, club.nickname, distance, club.id
            );
            println!("{}", formatter.success(&message));
        }
        ClubsAction::Update { club, name, nickname } => {
            if name.is_none() && nickname.is_none() {
                println!("{}", formatter.warning("Nothing to update; pass --name or --nickname"));
                return Ok(());
            }
            let id = find_club(store, &club)?.id;
            let updated = manager.update_club(store, id, ClubUpdate { name, nickname })?;
            println!(
                "{}",
                formatter.success(&format!("Updated {} ({})", updated.name, updated.nickname))
            );
        }
        ClubsAction::Archive { club } => {
            let id = find_club(store, &club)?.id;
            let archived = manager.archive_club(store, id)?;
            println!("{}", formatter.success(&format!("Archived {}", archived.name)));
        }
        ClubsAction::Restore { club } => {
            let id = find_club(store, &club)?.id;
            let restored = manager.restore_club(store, id)?;
            println!("{}", formatter.success(&format!("Restored {}", restored.name)));
        }
        ClubsAction::Delete { club, yes } => {
            let club = find_club(store, &club)?;
            if !yes && !confirm(&format!(
                "Delete {} and its {} shot type(s) permanently?",
                club.name,
                club.shot_types.len()
            ))? {
                println!("{}", formatter.info("Operation cancelled"));
                return Ok(());
            }
            manager.delete_club(store, club.id)?;
            println!("{}", formatter.success(&format!("Deleted {}", club.name)));
        }
        ClubsAction::Reorder { clubs } => {
            let mut ids = Vec::with_capacity(clubs.len());
            for key in &clubs {
                ids.push(find_club(store, key)?.id);
            }
            let active = manager.fetch_clubs(&*store)?.len();
            let reordered = manager.reorder_clubs(store, &ids)?;
            if reordered.len() < active {
                println!(
                    "{}",
                    formatter.warning(&format!(
                        "{} of {} active clubs were not listed and keep their old position",
                        active - reordered.len(),
                        active
                    ))
                );
            }
            let names: Vec<&str> = reordered.iter().map(|c| c.name.as_str()).collect();
            println!("{}", formatter.success(&format!("New order: {}", names.join(", "))));
        }
    }

    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    Ok(response.trim().eq_ignore_ascii_case("y"))
}
