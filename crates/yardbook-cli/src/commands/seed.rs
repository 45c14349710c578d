//! Seed command implementation.

use crate::cli::SeedArgs;
use crate::error::Result;
use crate::output::Formatter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use yardbook_lifecycle::{ClubLifecycleManager, DEFAULT_CLUBS};
use yardbook_store::SqliteStore;

/// Execute the seed command.
pub fn execute_seed(
    args: SeedArgs,
    store: &mut SqliteStore,
    manager: &ClubLifecycleManager,
    formatter: &Formatter,
) -> Result<()> {
    let seeded = match args.seed {
        Some(seed) => manager.load_default_seed(store, &mut StdRng::seed_from_u64(seed))?,
        None => manager.load_default_seed(store, &mut rand::thread_rng())?,
    };

    if seeded {
        println!(
            "{}",
            formatter.success(&format!("Loaded {} default clubs", DEFAULT_CLUBS.len()))
        );
    } else {
        println!("{}", formatter.info("The book already has clubs; nothing seeded"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{formatter, small_bag, store};

    #[test]
    fn test_seed_empty_book() {
        let mut store = store();
        let manager = ClubLifecycleManager::default_config();

        execute_seed(SeedArgs { seed: Some(7) }, &mut store, &manager, &formatter()).unwrap();
        let clubs = manager.fetch_clubs(&store).unwrap();
        assert_eq!(clubs.len(), DEFAULT_CLUBS.len());
        assert_eq!(clubs[0].name, "Driver");
    }

    #[test]
    fn test_seed_skips_existing_bag() {
        let mut store = store();
        let manager = small_bag(&mut store);

        execute_seed(SeedArgs { seed: None }, &mut store, &manager, &formatter()).unwrap();
        assert_eq!(manager.fetch_clubs(&store).unwrap().len(), 2);
    }
}
