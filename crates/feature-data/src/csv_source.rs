//! CSV panel source.

use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

use feature_core::error::DataError;
use feature_core::traits::PanelSource;
use feature_core::types::PanelRow;
use tracing::info;

use crate::clean::clean_records;

/// Columns every input file must carry.
pub(crate) const REQUIRED_COLUMNS: [&str; 7] = [
    "Ticker", "DTYYYYMMDD", "Open", "High", "Low", "Close", "Volume",
];

/// One raw CSV record, prior to cleaning.
///
/// Identity fields and numerics stay optional so the cleaning pass can
/// drop or impute them; the date stays a string until cleaning parses it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Ticker")]
    pub ticker: Option<String>,
    #[serde(rename = "DTYYYYMMDD")]
    pub date: Option<String>,
    #[serde(rename = "Open")]
    pub open: Option<f64>,
    #[serde(rename = "High")]
    pub high: Option<f64>,
    #[serde(rename = "Low")]
    pub low: Option<f64>,
    #[serde(rename = "Close")]
    pub close: Option<f64>,
    #[serde(rename = "Volume")]
    pub volume: Option<f64>,
    /// Source file, carried for error reporting.
    #[serde(skip)]
    pub file: String,
}

/// Strip the `<...>` wrappers and stray whitespace raw exchange exports
/// put around column names.
fn normalize_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .map(|h| h.replace(['<', '>'], "").trim().to_string())
        .collect()
}

/// Read raw records from one CSV reader, failing on a missing column.
fn read_records<R: std::io::Read>(reader: R, file: &str) -> Result<Vec<RawRecord>, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = normalize_headers(
        reader
            .headers()
            .map_err(|e| DataError::ParseError(format!("{file}: {e}")))?,
    );
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataError::MissingColumn {
                file: file.to_string(),
                column: column.to_string(),
            });
        }
    }
    reader.set_headers(headers);

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let mut record: RawRecord =
            result.map_err(|e| DataError::ParseError(format!("{file}: {e}")))?;
        record.file = file.to_string();
        records.push(record);
    }

    Ok(records)
}

/// CSV panel source: a directory of per-ticker daily files.
pub struct CsvPanelSource {
    dir: PathBuf,
}

impl CsvPanelSource {
    /// Create a new CSV panel source over a directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, DataError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(DataError::NoFiles(dir.display().to_string()));
        }
        Ok(Self { dir })
    }

    /// Load the raw records from every CSV file in the directory.
    pub fn load_raw(&self) -> Result<Vec<RawRecord>, DataError> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(&self.dir)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "csv"))
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(DataError::NoFiles(self.dir.display().to_string()));
        }

        let mut records = Vec::new();
        for path in &files {
            let count = self.load_file(path, &mut records)?;
            info!(file = %path.display(), rows = count, "loaded file");
        }

        if records.is_empty() {
            return Err(DataError::EmptyPanel);
        }

        info!(files = files.len(), rows = records.len(), "combined panel");
        Ok(records)
    }

    fn load_file(&self, path: &Path, records: &mut Vec<RawRecord>) -> Result<usize, DataError> {
        let file = File::open(path)?;
        let loaded = read_records(file, &path.display().to_string())?;
        let count = loaded.len();
        records.extend(loaded);
        Ok(count)
    }
}

#[async_trait]
impl PanelSource for CsvPanelSource {
    async fn load(&self) -> Result<Vec<PanelRow>, DataError> {
        let raw = self.load_raw()?;
        let (rows, _report) = clean_records(raw)?;
        Ok(rows)
    }

    fn name(&self) -> &str {
        "csv"
    }
}
