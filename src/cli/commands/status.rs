use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cache::ProjectCache;
use crate::core::timer::{StatusView, TimerLogic};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::colors::{RESET, color_for_state, colorize_optional};
use crate::utils::time::{format_centis, format_seconds};
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { project } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut cache = ProjectCache::new();

        match project {
            //
            // Single project
            //
            Some(selector) => {
                let view = TimerLogic::status(&mut pool, &mut cache, selector)?;
                print_view(&view, cfg);
            }

            //
            // All projects
            //
            None => {
                let snapshots = queries::load_projects_with_times(&pool.conn)?;

                if snapshots.is_empty() {
                    warning("No projects yet. Create one with 'ticktrack add <name>'.");
                    return Ok(());
                }

                let now = Utc::now();
                for snapshot in &snapshots {
                    print_view(&TimerLogic::view(snapshot, now), cfg);
                }
            }
        }
    }

    Ok(())
}

fn print_view(view: &StatusView, cfg: &Config) {
    let state = if view.running {
        "running"
    } else if view.active {
        "paused"
    } else {
        "idle"
    };
    let color = color_for_state(view.active, view.running);

    let current = if cfg.show_centiseconds {
        format_centis(view.current_cs)
    } else {
        format_seconds(view.current_cs / 100)
    };

    println!("⏱  {} (id {})", view.name, view.id);
    println!("   state:   {}{}{}", color, state, RESET);
    println!("   current: {}", current);
    println!(
        "   total:   {}",
        colorize_optional(&format_seconds(view.total_seconds))
    );
    println!();
}
