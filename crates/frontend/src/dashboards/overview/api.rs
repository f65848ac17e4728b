use contracts::dashboards::stats::DashboardStats;

use crate::shared::http::{ApiClient, ApiError, HttpTransport};

/// Release and job counters, global and for the signed-in user.
pub async fn get_stats<T: HttpTransport>(client: &ApiClient<T>) -> Result<DashboardStats, ApiError> {
    client.get("/dashboard/stats").await
}
