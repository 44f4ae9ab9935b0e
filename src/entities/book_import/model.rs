use serde::Serialize;

/// Raw field tuple read from one CSV data row, before validation.
#[derive(Debug, Clone)]
pub struct ImportRow {
    pub id: String,
    pub title: String,
    pub author: String,
    pub published_year: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRowFailure {
    pub cell_number: usize,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportCsvResult {
    pub success: bool,
    pub added_count: usize,
    pub failed_rows: Vec<ImportRowFailure>,
}
