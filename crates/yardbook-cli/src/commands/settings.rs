//! Settings command implementation.

use crate::cli::{SettingsAction, SettingsArgs};
use crate::error::Result;
use crate::output::Formatter;
use yardbook_lifecycle::SettingsService;
use yardbook_store::SqliteStore;

/// Execute the settings command.
pub fn execute_settings(
    args: SettingsArgs,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    let service = SettingsService::new();

    match args.action {
        SettingsAction::Show => {
            let settings = service.get_or_create_settings(store)?;
            println!("{}", formatter.format_settings(&settings)?);
        }
        SettingsAction::Tolerance { percent } => {
            let settings = service.update_tolerance(store, percent)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Ladder tolerance set to ±{}%",
                    settings.yardage_range_percentage
                ))
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{formatter, store};
    use crate::error::CliError;
    use yardbook_domain::traits::ProfileStore;
    use yardbook_lifecycle::LifecycleError;

    fn tolerance(store: &mut SqliteStore, percent: u32) -> Result<()> {
        execute_settings(
            SettingsArgs {
                action: SettingsAction::Tolerance { percent },
            },
            store,
            &formatter(),
        )
    }

    #[test]
    fn test_show_creates_default() {
        let mut store = store();
        let args = SettingsArgs {
            action: SettingsAction::Show,
        };
        execute_settings(args, &mut store, &formatter()).unwrap();
        assert_eq!(store.load_settings().unwrap().unwrap().yardage_range_percentage, 15);
    }

    #[test]
    fn test_update_tolerance() {
        let mut store = store();
        tolerance(&mut store, 25).unwrap();
        assert_eq!(store.load_settings().unwrap().unwrap().yardage_range_percentage, 25);

        let result = tolerance(&mut store, 150);
        assert!(matches!(
            result,
            Err(CliError::Lifecycle(LifecycleError::InvalidTolerance(150)))
        ));
        assert_eq!(store.load_settings().unwrap().unwrap().yardage_range_percentage, 25);
    }
}
