//! HTTP client for the Cost Planner API
//!
//! One endpoint: `GET {base}/api/v1/cost-plans` returning a JSON array of
//! plan summaries. No auth, no retry, no timeout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

/// Message shown when a fetch dies without reporting why.
pub const FALLBACK_ERROR: &str = "An error occurred";

/// A cost plan summary as served by the API. Read-only on this side;
/// plans are created and edited through the API itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostPlan {
    pub id: String,
    pub name: String,
    /// Free-form on this side; the server enumerates draft/active/etc.
    /// but nothing here depends on the set.
    pub status: String,
    pub total_budget: f64,
    pub total_estimated_cost: f64,
    pub total_actual_cost: f64,
    pub remaining_budget: f64,
    /// Received but not rendered
    pub created_at: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Server answered, but not with a 2xx. The body is ignored.
    #[error("Failed to fetch plans")]
    BadStatus(reqwest::StatusCode),

    /// The request itself failed: connect, read, or JSON decode.
    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

/// Fetch the full plan collection. Called exactly once per process run.
pub async fn fetch_plans(config: &Config) -> Result<Vec<CostPlan>, ApiError> {
    let url = config.plans_url();
    tracing::debug!("GET {}", url);

    let response = reqwest::get(&url).await?;

    if !response.status().is_success() {
        return Err(ApiError::BadStatus(response.status()));
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_deserialization() {
        let json = r#"{
            "id": "3f2c9a10-6a54-4cfa-9be4-214b6fd2fbc1",
            "name": "Spring Wedding",
            "status": "active",
            "total_budget": 20000.0,
            "total_estimated_cost": 18500.5,
            "total_actual_cost": 12000.0,
            "remaining_budget": 8000.0,
            "created_at": "2025-06-01T12:00:00"
        }"#;

        let plan: CostPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.name, "Spring Wedding");
        assert_eq!(plan.status, "active");
        assert_eq!(plan.total_estimated_cost, 18500.5);
    }

    #[test]
    fn test_collection_deserialization_preserves_order() {
        let json = r#"[
            {"id": "a", "name": "First", "status": "draft",
             "total_budget": 1.0, "total_estimated_cost": 0.0,
             "total_actual_cost": 0.0, "remaining_budget": 1.0,
             "created_at": "2025-01-01T00:00:00"},
            {"id": "b", "name": "Second", "status": "active",
             "total_budget": 2.0, "total_estimated_cost": 0.0,
             "total_actual_cost": 0.0, "remaining_budget": 2.0,
             "created_at": "2025-01-02T00:00:00"}
        ]"#;

        let plans: Vec<CostPlan> = serde_json::from_str(json).unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].id, "a");
        assert_eq!(plans[1].id, "b");
    }

    #[test]
    fn test_empty_collection_deserialization() {
        let plans: Vec<CostPlan> = serde_json::from_str("[]").unwrap();
        assert!(plans.is_empty());
    }

    #[test]
    fn test_bad_status_message_is_fixed() {
        let err = ApiError::BadStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to fetch plans");

        let err = ApiError::BadStatus(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Failed to fetch plans");
    }
}
