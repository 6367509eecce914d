use crate::models::internship::InternshipRow;
use crate::recommend::normalize::{normalize_field, normalize_skills};
use crate::recommend::similarity::SparseVector;

/// A catalog row plus the attributes derived from it once at load time.
#[derive(Debug, Clone)]
pub struct IndexedEntry {
    /// Position in the catalog; also the row/column of the similarity matrix.
    pub index: usize,
    pub row: InternshipRow,
    pub skills_processed: String,
    pub sector_key: Option<String>,
    pub education_key: Option<String>,
    pub location_key: Option<String>,
    pub vector: SparseVector,
}

impl IndexedEntry {
    /// Normalizes the row's fields. The vector is attached after fitting.
    pub fn new(index: usize, row: InternshipRow) -> Self {
        Self {
            index,
            skills_processed: normalize_skills(row.skills.as_deref()),
            sector_key: normalize_field(row.sector.as_deref()),
            education_key: normalize_field(row.education.as_deref()),
            location_key: normalize_field(row.location.as_deref()),
            row,
            vector: SparseVector::default(),
        }
    }
}
