//! Where the internship catalog comes from. Read once at startup.

pub mod csv_file;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::internship::InternshipRow;

pub use self::csv_file::CsvCatalog;

/// A catalog backend. The returned order is the catalog order used for
/// tie-breaking, so implementations must be deterministic.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<InternshipRow>>;

    fn describe(&self) -> String;
}

pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogSource for PgCatalog {
    async fn load(&self) -> Result<Vec<InternshipRow>> {
        let rows = sqlx::query_as::<_, InternshipRow>(
            "SELECT id, sector, skills, education, location FROM internships ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    fn describe(&self) -> String {
        "postgres table 'internships'".to_string()
    }
}

/// Replaces the `internships` table contents with `rows` in one transaction.
pub async fn replace_catalog(pool: &PgPool, rows: &[InternshipRow]) -> Result<u64> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM internships").execute(&mut *tx).await?;

    let mut inserted = 0;
    for row in rows {
        inserted += sqlx::query(
            r#"
            INSERT INTO internships (id, sector, skills, education, location)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(row.id)
        .bind(&row.sector)
        .bind(&row.skills)
        .bind(&row.education)
        .bind(&row.location)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}
