use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cache::ProjectCache;
use crate::core::timer::TimerLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::format_seconds;

/// Stop a project's timer and close its working block.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stop { project } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut cache = ProjectCache::new();

        let outcome = TimerLogic::stop(&mut pool, &mut cache, project)?;

        success(format!(
            "⏹️  Stopped '{}': block {} closed at {}.",
            outcome.project.name,
            outcome.block_id,
            format_seconds(outcome.total_seconds)
        ));
    }

    Ok(())
}
