//! Recruiter list loading.
//!
//! The list is a CSV file with a header row naming at least `name`, `email`,
//! `company` and `position`. Any failure here is fatal to the run.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::RecruiterRecord;

pub const REQUIRED_COLUMNS: [&str; 4] = ["name", "email", "company", "position"];

/// Load every recruiter from the CSV file at `path`, in file order.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<RecruiterRecord>> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::InputNotFound(path.to_path_buf()),
        _ => AppError::from(e),
    })?;

    let records = read_records(file)?;
    tracing::info!(count = records.len(), path = %path.display(), "Loaded recruiter list");
    Ok(records)
}

/// Parse recruiters from any CSV source.
pub fn read_records<R: Read>(source: R) -> Result<Vec<RecruiterRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AppError::MissingColumn(column.to_string()));
        }
    }

    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<RecruiterRecord>, csv::Error>>()?;

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn record(name: &str, email: &str, company: &str, position: &str) -> RecruiterRecord {
        RecruiterRecord {
            name: name.to_string(),
            email: email.to_string(),
            company: company.to_string(),
            position: position.to_string(),
        }
    }

    #[test]
    fn test_reads_rows_in_order() {
        let csv = "name,email,company,position\n\
                   Alice, alice@acme.com ,Acme,Backend Engineer\n\
                   Bob,bob@globex.com,Globex,Data Analyst\n";

        let records = read_records(csv.as_bytes()).expect("Should parse");

        assert_eq!(
            records,
            vec![
                record("Alice", "alice@acme.com", "Acme", "Backend Engineer"),
                record("Bob", "bob@globex.com", "Globex", "Data Analyst"),
            ]
        );
    }

    #[test]
    fn test_extra_columns_and_reordering() {
        let csv = "position,notes,email,name,company\n\
                   SRE,met at meetup,carol@initech.com,Carol,Initech\n";

        let records = read_records(csv.as_bytes()).expect("Should parse");
        assert_eq!(records, vec![record("Carol", "carol@initech.com", "Initech", "SRE")]);
    }

    #[test]
    fn test_header_only_is_empty() {
        let records = read_records("name,email,company,position\n".as_bytes()).expect("Should parse");
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv = "name,email,company\nAlice,alice@acme.com,Acme\n";

        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::MissingColumn(ref c) if c == "position"));
    }

    #[test]
    fn test_short_row_is_fatal() {
        let csv = "name,email,company,position\nAlice,alice@acme.com\n";

        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::Csv(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.csv");

        let err = load_records(&path).unwrap_err();
        assert!(matches!(err, AppError::InputNotFound(ref p) if *p == path));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "name,email,company,position").unwrap();
        writeln!(file, "Dana,dana@hooli.com,Hooli,Platform Engineer").unwrap();

        let records = load_records(file.path()).expect("Should load");
        assert_eq!(records, vec![record("Dana", "dana@hooli.com", "Hooli", "Platform Engineer")]);
    }
}
