use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::Utc;

/// Create a new project.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let project = queries::insert_project(&pool.conn, name, Utc::now())?;

        ttlog(
            &pool.conn,
            "add",
            &project.name,
            &format!("Created project {}", project.id),
        )?;

        success(format!(
            "Created project '{}' (id {}).",
            project.name, project.id
        ));
    }

    Ok(())
}
