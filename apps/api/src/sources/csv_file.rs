use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::warn;

use crate::models::internship::InternshipRow;
use crate::sources::CatalogSource;

/// Catalog read from a CSV with headers `id,sector,skills,education,location`.
/// Extra columns are ignored; empty cells become absent values.
pub struct CsvCatalog {
    path: PathBuf,
}

impl CsvCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for CsvCatalog {
    async fn load(&self) -> Result<Vec<InternshipRow>> {
        read_csv(&self.path)
    }

    fn describe(&self) -> String {
        format!("csv file {}", self.path.display())
    }
}

pub fn read_csv(path: &Path) -> Result<Vec<InternshipRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("cannot open catalog csv {}", path.display()))?;

    let mut rows = Vec::new();
    for (line, record) in reader.deserialize::<InternshipRow>().enumerate() {
        let row = record.with_context(|| format!("bad catalog record at row {}", line + 1))?;
        rows.push(InternshipRow {
            id: row.id,
            sector: non_blank(row.sector),
            skills: non_blank(row.skills),
            education: non_blank(row.education),
            location: non_blank(row.location),
        });
    }

    if rows.is_empty() {
        warn!("Catalog csv {} has no rows", path.display());
    }
    Ok(rows)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_rows_and_blank_cells() {
        let file = write_csv(
            "id,sector,skills,education,location,stipend\n\
             1,Technology,\"Python; SQL\",B.Tech,Pune,10000\n\
             2,Finance,Excel,,  ,5000\n",
        );
        let rows = read_csv(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].skills.as_deref(), Some("Python; SQL"));
        assert_eq!(rows[1].education, None);
        assert_eq!(rows[1].location, None);
    }

    #[test]
    fn test_bad_id_is_error() {
        let file = write_csv("id,sector,skills,education,location\nabc,Tech,Rust,BE,Pune\n");
        assert!(read_csv(file.path()).is_err());
    }

    #[tokio::test]
    async fn test_csv_catalog_source_loads() {
        let file = write_csv("id,sector,skills,education,location\n3,Tech,Rust,BE,Pune\n");
        let source = CsvCatalog::new(file.path());
        let rows = source.load().await.unwrap();
        assert_eq!(rows[0].id, 3);
        assert!(source.describe().starts_with("csv file"));
    }
}
