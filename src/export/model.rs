use serde::Serialize;

/// Flat row for exporting closed working blocks.
#[derive(Serialize, Clone, Debug)]
pub struct BlockExport {
    pub id: i64,
    pub project: String,
    pub date: String,
    pub seconds: i64,
    pub duration: String,
}

/// Header for CSV / JSON / XLSX.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["id", "project", "date", "seconds", "duration"]
}

pub(crate) fn block_to_row(b: &BlockExport) -> Vec<String> {
    vec![
        b.id.to_string(),
        b.project.clone(),
        b.date.clone(),
        b.seconds.to_string(),
        b.duration.clone(),
    ]
}
