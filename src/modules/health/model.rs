use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub sessions: SessionStatsResponse,
}

/// Session bookkeeping at the time of the check, this request's session included.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionStatsResponse {
    pub acquired: u64,
    pub released: u64,
    pub in_use: u64,
    pub pool_size: u32,
    pub idle_connections: usize,
}
