use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timer::TimerLogic;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::formatting::bold;
use crate::utils::table::Table;
use crate::utils::time::format_seconds;
use chrono::Utc;

/// List all projects with their reconciled totals.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let snapshots = queries::load_projects_with_times(&pool.conn)?;

        if snapshots.is_empty() {
            warning("No projects yet. Create one with 'ticktrack add <name>'.");
            return Ok(());
        }

        let now = Utc::now();

        let mut table = Table::new(vec![
            "ID".into(),
            "Project".into(),
            "Total".into(),
            "Current".into(),
            "State".into(),
            "Blocks".into(),
        ]);

        for snapshot in &snapshots {
            let view = TimerLogic::view(snapshot, now);

            let state = if view.running {
                "▶ running"
            } else if view.active {
                "⏸ paused"
            } else {
                "–"
            };

            table.add_row(vec![
                view.id.to_string(),
                view.name.clone(),
                format_seconds(view.total_seconds),
                format_seconds(view.current_cs / 100),
                state.to_string(),
                snapshot.closed_blocks.len().to_string(),
            ]);
        }

        println!("{}\n", bold("📋 Projects:"));
        print!("{}", table.render());
    }

    Ok(())
}
