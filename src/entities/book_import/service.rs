use crate::db::DbPool;
use crate::entities::error::ApiError;

use super::model::{ImportCsvResult, ImportRowFailure};
use super::parser::{parse_rows, rows_to_new_books};

/// Validates and inserts every data row in input order. Rows are handled
/// strictly one after another; a failed row is recorded and never aborts
/// the rest of the batch.
pub fn import_books_csv(raw_text: &str, pool: &DbPool) -> Result<ImportCsvResult, ApiError> {
    let rows = parse_rows(raw_text)?;

    let mut added_count = 0;
    let mut failed_rows = Vec::new();

    for (cell_number, outcome) in rows_to_new_books(rows) {
        let book = match outcome {
            Ok(book) => book,
            Err(reason) => {
                failed_rows.push(ImportRowFailure {
                    cell_number,
                    error: reason,
                });
                continue;
            }
        };
        match book.create(pool) {
            Ok(_) => added_count += 1,
            Err(_) => failed_rows.push(ImportRowFailure {
                cell_number,
                error: "Database save error".to_string(),
            }),
        }
    }

    tracing::info!(
        "CSV import finished: {} added, {} failed",
        added_count,
        failed_rows.len()
    );

    Ok(ImportCsvResult {
        success: true,
        added_count,
        failed_rows,
    })
}
