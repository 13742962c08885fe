//! PostgreSQL implementation of the stats repository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::{CountryCount, StatsRepository};
use crate::error::AppError;

/// Row shape for the country aggregation query.
///
/// `country` stays nullable here; rows written before the `"Unknown"`
/// defaulting was introduced may carry NULL.
#[derive(sqlx::FromRow)]
struct CountryRow {
    country: Option<String>,
    count: i64,
}

/// PostgreSQL repository for the click log and counters.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn record_click(&self, click: &ClickEvent) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO clicks (slug, country, user_agent, referrer)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&click.slug)
        .bind(&click.country)
        .bind(click.user_agent.as_deref())
        .bind(click.referrer.as_deref())
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn increment_click_count(&self, slug: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE urls SET click_count = click_count + 1 WHERE slug = $1")
            .bind(slug)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn top_countries(&self, slug: &str, limit: i64) -> Result<Vec<CountryCount>, AppError> {
        let rows = sqlx::query_as::<_, CountryRow>(
            r#"
            SELECT country, COUNT(*) AS count
            FROM clicks
            WHERE slug = $1
            GROUP BY country
            ORDER BY count DESC
            LIMIT $2
            "#,
        )
        .bind(slug)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| CountryCount {
                country: row.country.unwrap_or_else(|| "Unknown".to_string()),
                count: row.count,
            })
            .collect())
    }
}
