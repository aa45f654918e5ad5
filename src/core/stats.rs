use crate::models::project_times::ClosedBlock;
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

/// Working time aggregated per day and per project, from closed blocks.
/// A block contributes its stored duration to the local date it was
/// created on; intra-block day spans are not split.
#[derive(Debug, Default)]
pub struct DailyBreakdown {
    pub dates: Vec<NaiveDate>,
    pub projects: Vec<String>,
    pub cells: BTreeMap<(NaiveDate, String), i64>,
    pub totals: BTreeMap<String, i64>,
}

impl DailyBreakdown {
    pub fn seconds_for(&self, date: NaiveDate, project: &str) -> i64 {
        self.cells
            .get(&(date, project.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

pub fn aggregate(
    blocks: &[(String, ClosedBlock)],
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> DailyBreakdown {
    let mut cells: BTreeMap<(NaiveDate, String), i64> = BTreeMap::new();
    let mut totals: BTreeMap<String, i64> = BTreeMap::new();

    for (project, block) in blocks {
        let date = block.created_at.with_timezone(&Local).date_naive();

        if let Some((from, to)) = bounds
            && (date < from || date > to)
        {
            continue;
        }

        *cells.entry((date, project.clone())).or_insert(0) += block.seconds;
        *totals.entry(project.clone()).or_insert(0) += block.seconds;
    }

    let mut dates: Vec<NaiveDate> = cells.keys().map(|(d, _)| *d).collect();
    dates.sort();
    dates.dedup();

    let projects: Vec<String> = totals.keys().cloned().collect();

    DailyBreakdown {
        dates,
        projects,
        cells,
        totals,
    }
}
