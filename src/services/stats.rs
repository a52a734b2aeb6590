//! Dashboard statistics service

use serde::Serialize;
use sqlx::Row;
use utoipa::ToSchema;

use crate::{error::AppResult, repository::Repository};

/// Count of assets in one status
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// Dashboard aggregate
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_assets: i64,
    pub pending_requests: i64,
    pub assets_by_status: Vec<StatusCount>,
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Compute the dashboard aggregate from a single snapshot. The three
    /// counts run inside one REPEATABLE READ transaction so a concurrent
    /// write cannot make them disagree with each other.
    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let mut tx = self.repository.pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        let total_assets: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM assets")
            .fetch_one(&mut *tx)
            .await?;

        let pending_requests: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM requests WHERE status = 'Pending'")
                .fetch_one(&mut *tx)
                .await?;

        let assets_by_status = sqlx::query(
            "SELECT status, COUNT(*) AS count FROM assets GROUP BY status ORDER BY status",
        )
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .map(|row| StatusCount {
            status: row.get("status"),
            count: row.get("count"),
        })
        .collect();

        tx.commit().await?;

        Ok(StatsResponse {
            total_assets,
            pending_requests,
            assets_by_status,
        })
    }
}
