use regex::Regex;
use uuid::Uuid;

use crate::entities::book::Book;
use crate::entities::error::{ApiError, ErrorType};

use super::model::ImportRow;

fn year_format_regex() -> Regex {
    Regex::new(r"(?i)^\s*(\d{1,4})\s*(BC|BCE|AD|CE)?\s*$").expect("valid regex")
}

fn uuid_v4_regex() -> Regex {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("valid regex")
}

/// Reads the uploaded text as header-keyed CSV. Any record the reader cannot
/// interpret (ragged row, broken quoting) fails the whole parse.
pub fn parse_rows(raw_text: &str) -> Result<Vec<ImportRow>, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(raw_text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|err| {
            ApiError::new(400, ErrorType::RequestError, format!("CSV parse error: {}", err))
        })?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| {
            ApiError::new(400, ErrorType::RequestError, format!("CSV parse error: {}", err))
        })?;
        let field = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .and_then(|index| record.get(index))
                .unwrap_or_default()
                .to_string()
        };
        rows.push(ImportRow {
            id: field("id"),
            title: field("title"),
            author: field("author"),
            published_year: field("publishedYear"),
        });
    }
    Ok(rows)
}

/// Checks one row in order: field presence, year format, identifier format.
/// The first failed check names the row's failure reason.
pub fn validate_row(row: &ImportRow) -> Result<Book, String> {
    if row.id.is_empty()
        || row.title.is_empty()
        || row.author.is_empty()
        || row.published_year.is_empty()
    {
        return Err("Missing field(s)".to_string());
    }

    // The whole field must parse as an integer, so an era-suffixed year
    // such as "450 BC" fails the numeric check even though the pattern
    // names the suffix.
    let year = match row.published_year.trim().parse::<i32>() {
        Ok(value) if year_format_regex().is_match(&row.published_year) => value,
        _ => return Err("Invalid year format".to_string()),
    };

    if !uuid_v4_regex().is_match(&row.id) {
        return Err("Invalid UUID".to_string());
    }
    let id = Uuid::parse_str(&row.id).map_err(|_| "Invalid UUID".to_string())?;

    Ok(Book::new(
        Some(id),
        row.title.clone(),
        row.author.clone(),
        year,
    ))
}

/// Pairs each row outcome with its reported position: the header is row 1
/// and the counter increments before each data row, so the first data row
/// reports as 2.
pub fn rows_to_new_books(rows: Vec<ImportRow>) -> Vec<(usize, Result<Book, String>)> {
    rows.into_iter()
        .enumerate()
        .map(|(row_index, row)| (row_index + 2, validate_row(&row)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_ID: &str = "6f1c6e44-90bb-4cf5-a34b-9a984e2700b1";

    fn valid_row() -> ImportRow {
        ImportRow {
            id: VALID_ID.to_string(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            published_year: "1965".to_string(),
        }
    }

    #[test]
    fn accepts_a_well_formed_row() {
        let book = validate_row(&valid_row()).unwrap();
        assert_eq!(book.id, Uuid::parse_str(VALID_ID).unwrap());
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.published_year, 1965);
    }

    #[test]
    fn rejects_a_row_with_an_empty_field() {
        for missing in ["id", "title", "author", "publishedYear"] {
            let mut row = valid_row();
            match missing {
                "id" => row.id = String::new(),
                "title" => row.title = String::new(),
                "author" => row.author = String::new(),
                _ => row.published_year = String::new(),
            }
            assert_eq!(validate_row(&row), Err("Missing field(s)".to_string()));
        }
    }

    #[test]
    fn rejects_a_non_numeric_year() {
        let mut row = valid_row();
        row.published_year = "abcd".to_string();
        assert_eq!(validate_row(&row), Err("Invalid year format".to_string()));
    }

    #[test]
    fn rejects_an_era_suffixed_year() {
        let mut row = valid_row();
        row.published_year = "450 BC".to_string();
        assert_eq!(validate_row(&row), Err("Invalid year format".to_string()));
    }

    #[test]
    fn rejects_a_five_digit_year() {
        let mut row = valid_row();
        row.published_year = "12345".to_string();
        assert_eq!(validate_row(&row), Err("Invalid year format".to_string()));
    }

    #[test]
    fn accepts_a_year_with_surrounding_whitespace() {
        let mut row = valid_row();
        row.published_year = " 1965 ".to_string();
        let book = validate_row(&row).unwrap();
        assert_eq!(book.published_year, 1965);
    }

    #[test]
    fn rejects_a_malformed_identifier() {
        let mut row = valid_row();
        row.id = "not-a-uuid".to_string();
        assert_eq!(validate_row(&row), Err("Invalid UUID".to_string()));
    }

    #[test]
    fn rejects_a_non_v4_identifier() {
        let mut row = valid_row();
        // version nibble is 1, not 4
        row.id = "6f1c6e44-90bb-1cf5-a34b-9a984e2700b1".to_string();
        assert_eq!(validate_row(&row), Err("Invalid UUID".to_string()));

        // variant nibble outside {8, 9, a, b}
        row.id = "6f1c6e44-90bb-4cf5-c34b-9a984e2700b1".to_string();
        assert_eq!(validate_row(&row), Err("Invalid UUID".to_string()));
    }

    #[test]
    fn accepts_an_uppercase_identifier() {
        let mut row = valid_row();
        row.id = VALID_ID.to_uppercase();
        assert!(validate_row(&row).is_ok());
    }

    #[test]
    fn checks_fields_in_order() {
        let mut row = valid_row();
        row.id = "not-a-uuid".to_string();
        row.published_year = "abcd".to_string();
        assert_eq!(validate_row(&row), Err("Invalid year format".to_string()));
    }

    #[test]
    fn parses_rows_by_header_name() {
        let text = "id,title,author,publishedYear\nA,Dune,Frank Herbert,1965\nB,Hyperion,Dan Simmons,1989\n";
        let rows = parse_rows(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "A");
        assert_eq!(rows[0].published_year, "1965");
        assert_eq!(rows[1].title, "Hyperion");
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let text = "id,title,author,publishedYear\n A , Dune , Frank Herbert , 1965 \n";
        let rows = parse_rows(text).unwrap();
        assert_eq!(rows[0].id, "A");
        assert_eq!(rows[0].title, "Dune");
        assert_eq!(rows[0].published_year, "1965");
    }

    #[test]
    fn reorders_columns_by_header() {
        let text = "title,publishedYear,id,author\nDune,1965,A,Frank Herbert\n";
        let rows = parse_rows(text).unwrap();
        assert_eq!(rows[0].id, "A");
        assert_eq!(rows[0].author, "Frank Herbert");
    }

    #[test]
    fn fails_the_whole_parse_on_a_ragged_row() {
        let text = "id,title,author,publishedYear\nA,Dune,Frank Herbert,1965\nB,Hyperion\n";
        let error = parse_rows(text).unwrap_err();
        assert_eq!(error.status_code, 400);
    }

    #[test]
    fn a_missing_column_reads_as_an_empty_field() {
        let text = "id,title,author\nA,Dune,Frank Herbert\n";
        let rows = parse_rows(text).unwrap();
        assert_eq!(rows[0].published_year, "");
        assert_eq!(
            validate_row(&rows[0]),
            Err("Missing field(s)".to_string())
        );
    }

    #[test]
    fn numbers_data_rows_from_two() {
        let rows = vec![valid_row(), valid_row(), valid_row()];
        let outcomes = rows_to_new_books(rows);
        let positions = outcomes
            .iter()
            .map(|(cell_number, _)| *cell_number)
            .collect::<Vec<_>>();
        assert_eq!(positions, vec![2, 3, 4]);
    }

    #[test]
    fn a_failure_in_the_second_data_row_reports_position_three() {
        let mut second = valid_row();
        second.published_year = "abcd".to_string();
        let outcomes = rows_to_new_books(vec![valid_row(), second, valid_row()]);
        assert!(outcomes[0].1.is_ok());
        assert_eq!(outcomes[1].0, 3);
        assert_eq!(outcomes[1].1, Err("Invalid year format".to_string()));
        assert!(outcomes[2].1.is_ok());
    }
}
