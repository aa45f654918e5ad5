use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cache::ProjectCache;
use crate::core::timer::TimerLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::format_seconds;

/// Pause a running project's timer.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pause { project } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut cache = ProjectCache::new();

        let outcome = TimerLogic::pause(&mut pool, &mut cache, project)?;

        success(format!(
            "⏸️  Paused '{}' at {}.",
            outcome.project.name,
            format_seconds(outcome.elapsed_seconds)
        ));
    }

    Ok(())
}
