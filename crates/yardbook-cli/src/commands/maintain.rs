//! Maintain command implementation.

use crate::cli::MaintainArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use yardbook_janitor::{Janitor, JanitorConfig, JanitorWorker};
use yardbook_lifecycle::ClubLifecycleManager;
use yardbook_store::SqliteStore;

/// Execute the maintain command.
///
/// Takes the store by value because `--watch` and `--cycles` hand it to the
/// background worker.
pub async fn execute_maintain(
    args: MaintainArgs,
    mut store: SqliteStore,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let janitor_config = JanitorConfig {
        dry_run: config.janitor.dry_run || args.dry_run,
        ..config.janitor.clone()
    };
    let manager = ClubLifecycleManager::new(config.lifecycle.clone());

    if janitor_config.dry_run {
        println!("{}", formatter.info("Dry run: nothing will be deleted"));
    }

    if args.watch || args.cycles.is_some() {
        let mut worker = JanitorWorker::new(janitor_config, manager);
        match args.cycles {
            Some(cycles) => worker.run_cycles(store, cycles).await?,
            None => {
                println!("{}", formatter.info("Maintenance running; press Ctrl+C to stop"));
                worker.run(store).await?;
            }
        }
        println!("{}", formatter.format_metrics(worker.metrics())?);
        return Ok(());
    }

    let mut janitor = Janitor::new(janitor_config, manager);
    let metrics = janitor.sweep(&mut store)?;
    println!("{}", formatter.format_metrics(&metrics)?);
    Ok(())
}
