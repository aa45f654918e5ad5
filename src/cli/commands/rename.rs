use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Rename an existing project.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rename { project, name } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let found = queries::select_project(&pool.conn, project)?;
        queries::update_project_name(&pool.conn, found.id, name)?;

        ttlog(
            &pool.conn,
            "rename",
            name,
            &format!("Renamed project {} ('{}' → '{}')", found.id, found.name, name),
        )?;

        success(format!("Renamed '{}' to '{}'.", found.name, name));
    }

    Ok(())
}
