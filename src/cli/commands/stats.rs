use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::{DailyBreakdown, aggregate};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::date::{current_month_bounds, period_bounds};
use crate::utils::formatting::{bold, secs2readable};
use crate::utils::table::Table;
use crate::utils::time::format_seconds;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

/// Colors cycled over the project series, one per chart bar.
const PALETTE: [Colour; 6] = [
    Colour::Green,
    Colour::Blue,
    Colour::Yellow,
    Colour::Purple,
    Colour::Cyan,
    Colour::Red,
];

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { period, chart } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let bounds = match period {
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(period_bounds(p)?),
            None => Some(current_month_bounds()?),
        };

        let blocks = queries::load_all_closed_blocks(&pool.conn)?;
        let breakdown = aggregate(&blocks, bounds);

        if breakdown.is_empty() {
            warning("No closed blocks for the selected period.");
            return Ok(());
        }

        print_table(&breakdown);

        if *chart {
            println!();
            print_chart(&breakdown, cfg.chart_width);
        }
    }

    Ok(())
}

/// Date × project table of working time, one row per day.
fn print_table(breakdown: &DailyBreakdown) {
    let mut headers = vec!["Date".to_string()];
    headers.extend(breakdown.projects.iter().cloned());
    headers.push("Total".to_string());

    let mut table = Table::new(headers);

    for date in &breakdown.dates {
        let mut row = vec![date.format("%Y-%m-%d").to_string()];
        let mut day_total = 0;

        for project in &breakdown.projects {
            let secs = breakdown.seconds_for(*date, project);
            day_total += secs;

            row.push(if secs > 0 {
                format_seconds(secs)
            } else {
                "-".to_string()
            });
        }

        row.push(format_seconds(day_total));
        table.add_row(row);
    }

    println!("{}\n", bold("📊 Working time per day and project:"));
    print!("{}", table.render());
}

/// Horizontal bar chart of per-project totals.
fn print_chart(breakdown: &DailyBreakdown, chart_width: usize) {
    let max_total = breakdown.totals.values().copied().max().unwrap_or(0);
    if max_total == 0 {
        return;
    }

    let label_w = breakdown
        .projects
        .iter()
        .map(|p| UnicodeWidthStr::width(p.as_str()))
        .max()
        .unwrap_or(0);

    let width = chart_width.max(10);

    for (idx, project) in breakdown.projects.iter().enumerate() {
        let total = breakdown.totals.get(project).copied().unwrap_or(0);
        let len = ((total * width as i64) / max_total).max(1) as usize;

        let color = PALETTE[idx % PALETTE.len()];
        let bar = color.paint("█".repeat(len)).to_string();

        let pad = " ".repeat(label_w.saturating_sub(UnicodeWidthStr::width(project.as_str())));

        println!("{}{}  {} {}", project, pad, bar, secs2readable(total, false));
    }
}
