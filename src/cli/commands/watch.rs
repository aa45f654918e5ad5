use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cache::ProjectCache;
use crate::core::stopwatch::{DisplayClock, TICK_MS};
use crate::core::timer::TimerLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_state};
use crate::utils::time::{format_centis, format_seconds};
use std::io::Write;
use std::time::{Duration, Instant};

/// Live ticking stopwatch display.
///
/// The authoritative elapsed value is read once; after that the display
/// clock free-runs on its tick interval without touching the database.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { project, seconds } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut cache = ProjectCache::new();

        let view = TimerLogic::status(&mut pool, &mut cache, project)?;
        let clock = DisplayClock::sync(view.current_cs, view.running);

        let state = if view.running {
            "running"
        } else if view.active {
            "paused"
        } else {
            "idle"
        };
        let color = color_for_state(view.active, view.running);

        let tick = Duration::from_millis(if cfg.tick_interval_ms > 0 {
            cfg.tick_interval_ms
        } else {
            TICK_MS
        });
        let deadline = seconds.map(|s| Instant::now() + Duration::from_secs(s));

        let mut stdout = std::io::stdout();

        loop {
            let readout = if cfg.show_centiseconds {
                format_centis(clock.current_cs())
            } else {
                format_seconds(clock.current_cs() / 100)
            };

            print!(
                "\r⏱  {}  {}  {}{}{} ",
                view.name, readout, color, state, RESET
            );
            stdout.flush().ok();

            if let Some(d) = deadline
                && Instant::now() >= d
            {
                break;
            }

            std::thread::sleep(tick);
        }

        println!();
    }

    Ok(())
}
