use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cache::ProjectCache;
use crate::core::timer::TimerLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Start (or resume) a project's timer.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { project } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut cache = ProjectCache::new();

        let outcome = TimerLogic::start(&mut pool, &mut cache, project)?;

        if outcome.new_block {
            success(format!(
                "▶️  Started '{}' (new block {}).",
                outcome.project.name, outcome.block_id
            ));
        } else {
            success(format!(
                "▶️  Resumed '{}' (block {}).",
                outcome.project.name, outcome.block_id
            ));
        }
    }

    Ok(())
}
