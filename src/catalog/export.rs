use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use std::fmt;
use std::fs;
use tracing::{info, warn};

use super::Catalog;

pub const CATALOG_VERSION_COLUMN: &str = "Catalog Version";
pub const CATALOG_DATE_COLUMN: &str = "Catalog Date";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One row per vulnerability, plus the catalog version and date columns.
    Csv,
    /// The whole catalog, verbatim.
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("csv") {
            Some(ExportFormat::Csv)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(ExportFormat::Json)
        } else {
            None
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    pub path: Utf8PathBuf,
    pub format: ExportFormat,
}

impl ExportTarget {
    /// Pick the format from the path suffix. Unknown or missing suffixes fall
    /// back to CSV and get `.csv` appended.
    pub fn from_path(path: impl Into<Utf8PathBuf>) -> Self {
        let path = path.into();

        if let Some(format) = path.extension().and_then(ExportFormat::from_extension) {
            return Self { path, format };
        }

        warn!("Invalid filetype for {}. Defaulting to CSV", path);
        Self {
            path: Utf8PathBuf::from(format!("{}.{}", path, ExportFormat::Csv.extension())),
            format: ExportFormat::Csv,
        }
    }
}

pub fn write_catalog(catalog: &Catalog, target: &ExportTarget) -> crate::Result<()> {
    info!("Exporting CISA Catalog to: {} ({})", target.path, target.format);

    match target.format {
        ExportFormat::Csv => write_csv(catalog, &target.path),
        ExportFormat::Json => write_json(catalog, &target.path),
    }
}

fn write_csv(catalog: &Catalog, dest: &Utf8Path) -> crate::Result<()> {
    let content = render_csv(catalog)?;
    fs::write(dest, content)?;

    info!("Wrote {} rows to {}", catalog.vulnerabilities.len(), dest);
    Ok(())
}

fn write_json(catalog: &Catalog, dest: &Utf8Path) -> crate::Result<()> {
    let content = serde_json::to_string(catalog)?;
    fs::write(dest, content)?;

    Ok(())
}

/// Flatten the vulnerability list into CSV. Columns are the record keys in
/// first-seen order followed by the two catalog columns.
pub fn render_csv(catalog: &Catalog) -> crate::Result<Vec<u8>> {
    let mut columns: Vec<&str> = Vec::new();
    for record in &catalog.vulnerabilities {
        for key in record.keys() {
            let key = key.as_str();
            if key == CATALOG_VERSION_COLUMN || key == CATALOG_DATE_COLUMN {
                continue;
            }
            if !columns.contains(&key) {
                columns.push(key);
            }
        }
    }

    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(
        columns
            .iter()
            .copied()
            .chain([CATALOG_VERSION_COLUMN, CATALOG_DATE_COLUMN]),
    )?;

    for record in &catalog.vulnerabilities {
        let mut row: Vec<String> = columns
            .iter()
            .map(|column| record.get(*column).map(cell).unwrap_or_default())
            .collect();
        row.push(catalog.catalog_version.clone());
        row.push(catalog.date_released.clone());
        writer.write_record(&row)?;
    }

    writer
        .into_inner()
        .map_err(|e| crate::CisaVulnError::Io(e.into_error()))
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
