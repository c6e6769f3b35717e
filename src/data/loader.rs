use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Observation, ObservationTable, Schema};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("opening {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reading delimited text: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: column '{column}' holds a value of the wrong type")]
    Type {
        line: u64,
        column: String,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How to interpret the headerless input: column names and field separator.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub schema: Schema,
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            schema: Schema::default(),
            delimiter: b',',
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the monthly sunspot file at `path`.
pub fn load_file(path: &Path, options: &LoadOptions) -> Result<ObservationTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = load_reader(file, options)?;
    log::info!(
        "Loaded {} observations from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Parse a headerless delimited stream, one observation per line.
///
/// Every line must carry exactly as many fields as the schema names and each
/// field must parse as the column's type; the first offending line aborts the
/// load. Padding around fields is ignored and blank lines are skipped.
pub fn load_reader<R: Read>(source: R, options: &LoadOptions) -> Result<ObservationTable, LoadError> {
    let schema = &options.schema;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(options.delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(row_no as u64 + 1);

        if record.len() != schema.width() {
            return Err(LoadError::FieldCount {
                line,
                expected: schema.width(),
                found: record.len(),
            });
        }

        let observation: Observation =
            record
                .deserialize(None)
                .map_err(|source| LoadError::Type {
                    line,
                    column: offending_column(&source, schema),
                    source,
                })?;
        rows.push(observation);
    }

    log::debug!("Parsed {} rows with columns {:?}", rows.len(), schema.names().collect::<Vec<_>>());
    Ok(ObservationTable::new(schema.clone(), rows))
}

fn offending_column(err: &csv::Error, schema: &Schema) -> String {
    match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err
            .field()
            .and_then(|i| schema.name_at(i as usize))
            .unwrap_or("<unknown>")
            .to_string(),
        _ => "<unknown>".to_string(),
    }
}
