use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One catalog row. Loaded once at startup and never mutated.
///
/// Every text column is optional: blank or missing cells are treated as
/// absent by the scorer rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct InternshipRow {
    pub id: i64,
    pub sector: Option<String>,
    pub skills: Option<String>,
    pub education: Option<String>,
    pub location: Option<String>,
}
