use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::BlockExport;
use crate::ui::messages::warning;
use crate::utils::date::period_bounds;
use crate::utils::formatting::secs2readable;
use crate::utils::path::is_absolute;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use chrono::{Local, NaiveDate};
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the closed working blocks.
    ///
    /// - `format`: "csv" | "json" | "xlsx"
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or expressions like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(period_bounds(r)?),
        };

        let blocks = load_blocks(pool, date_bounds)?;

        if blocks.is_empty() {
            warning("⚠️  No closed blocks found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&blocks, path)?,
            ExportFormat::Json => export_json(&blocks, path)?,
            ExportFormat::Xlsx => export_xlsx(&blocks, path)?,
        }

        ttlog(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} blocks as {}", blocks.len(), format.as_str()),
        )?;

        Ok(())
    }
}

/// Load the closed blocks within the bounds as flat export rows.
fn load_blocks(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<BlockExport>> {
    let rows = queries::load_all_closed_blocks(&pool.conn)?;

    let mut out = Vec::new();
    for (project, block) in rows {
        let date = block.created_at.with_timezone(&Local).date_naive();

        if let Some((from, to)) = bounds
            && (date < from || date > to)
        {
            continue;
        }

        out.push(BlockExport {
            id: block.id,
            project,
            date: date.format("%Y-%m-%d").to_string(),
            seconds: block.seconds,
            duration: secs2readable(block.seconds, true),
        });
    }

    Ok(out)
}
