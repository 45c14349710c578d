//! Profile command implementation.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::error::Result;
use crate::output::Formatter;
use yardbook_lifecycle::{ProfileService, ProfileUpdate};
use yardbook_store::SqliteStore;

/// Execute the profile command.
pub fn execute_profile(
    args: ProfileArgs,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    let service = ProfileService::new();

    match args.action {
        ProfileAction::Show => {
            let profile = service.get_or_create_profile(store)?;
            println!("{}", formatter.format_profile(&profile)?);
        }
        ProfileAction::Set {
            name,
            handicap,
            primary,
        } => {
            let profile = service.update_profile(
                store,
                ProfileUpdate {
                    name,
                    handicap,
                    primary_shot_type: primary,
                },
            )?;
            println!("{}", formatter.success("Profile updated"));
            println!("{}", formatter.format_profile(&profile)?);
        }
    }

    Ok(())
}
