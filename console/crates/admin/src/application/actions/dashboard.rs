//! Dashboard Actions

use shared::action::error::ActionResult;

use crate::application::actions::reshape;
use crate::domain::api::UpstreamApi;
use crate::domain::entity::{DashboardStatistics, RecentCoinPurchase, RecentPurchase};

/// Default number of rows for the dashboard activity tables
pub const DEFAULT_RECENT_LIMIT: u32 = 10;

pub async fn statistics<A: UpstreamApi + Sync>(
    api: &A,
    cookies: Option<&str>,
) -> ActionResult<DashboardStatistics> {
    reshape(api.dashboard_statistics(cookies).await)
}

pub async fn recent_purchases<A: UpstreamApi + Sync>(
    api: &A,
    limit: u32,
    cookies: Option<&str>,
) -> ActionResult<Vec<RecentPurchase>> {
    reshape(api.recent_purchases(limit, cookies).await)
}

pub async fn recent_coin_purchases<A: UpstreamApi + Sync>(
    api: &A,
    limit: u32,
    cookies: Option<&str>,
) -> ActionResult<Vec<RecentCoinPurchase>> {
    reshape(api.recent_coin_purchases(limit, cookies).await)
}
