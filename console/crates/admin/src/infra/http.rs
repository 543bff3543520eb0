//! HTTP Upstream Implementation
//!
//! Maps every [`UpstreamApi`] operation onto the backend's REST surface via
//! the envelope-normalizing client.

use serde_json::json;
use upstream::client::{HeaderBag, UpstreamClient, UpstreamRequest};
use upstream::envelope::ApiResult;

use crate::domain::api::{Credentials, UpstreamApi};
use crate::domain::entity::{
    Ack, Announcement, AnnouncementPatch, AssignmentReceipt, AuthSession, ChapterContent,
    ChapterSummary, CreatedTranslator, DashboardStatistics, NewAnnouncement, RecentCoinPurchase,
    RecentPurchase, SeriesAssignment, SeriesFilter, SeriesPage, Translator, User,
};

/// Backend REST adapter
#[derive(Debug, Clone)]
pub struct HttpUpstreamApi {
    client: UpstreamClient,
}

impl HttpUpstreamApi {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &UpstreamClient {
        &self.client
    }
}

impl UpstreamApi for HttpUpstreamApi {
    async fn login(&self, credentials: &Credentials) -> (ApiResult<AuthSession>, HeaderBag) {
        self.client
            .execute_with_headers(UpstreamRequest::post("/account/admin/login").json(json!({
                "email": credentials.email,
                "password": credentials.password,
            })))
            .await
    }

    async fn logout(&self, cookies: Option<&str>) -> ApiResult<Ack> {
        self.client
            .execute(UpstreamRequest::post("/account/logout").cookie_header(cookies))
            .await
    }

    async fn current_user(&self, cookies: Option<&str>) -> ApiResult<User> {
        self.client
            .execute(UpstreamRequest::get("/account/me").cookie_header(cookies))
            .await
    }

    async fn check_profile(&self, token: &str) -> ApiResult<User> {
        self.client
            .execute(UpstreamRequest::get("/account/me").bearer(token))
            .await
    }

    async fn translators(&self, cookies: Option<&str>) -> ApiResult<Vec<Translator>> {
        self.client
            .execute(UpstreamRequest::get("/admin/translators").cookie_header(cookies))
            .await
    }

    async fn create_translator(
        &self,
        username: &str,
        email: &str,
        cookies: Option<&str>,
    ) -> ApiResult<CreatedTranslator> {
        self.client
            .execute(
                UpstreamRequest::post("/admin/create-translator")
                    .json(json!({"username": username, "email": email}))
                    .cookie_header(cookies),
            )
            .await
    }

    async fn toggle_translator_status(&self, id: &str, cookies: Option<&str>) -> ApiResult<Ack> {
        self.client
            .execute(
                UpstreamRequest::patch(format!("/admin/translators/{id}/toggle-status"))
                    .cookie_header(cookies),
            )
            .await
    }

    async fn delete_translator(&self, id: &str, cookies: Option<&str>) -> ApiResult<Ack> {
        self.client
            .execute(
                UpstreamRequest::delete(format!("/admin/translators/{id}")).cookie_header(cookies),
            )
            .await
    }

    async fn series(&self, filter: &SeriesFilter, cookies: Option<&str>) -> ApiResult<SeriesPage> {
        let mut request = UpstreamRequest::get("/admin/series").cookie_header(cookies);

        if let Some(page) = filter.page {
            request = request.query("page", page.to_string());
        }
        if let Some(limit) = filter.limit {
            request = request.query("limit", limit.to_string());
        }
        if let Some(search) = &filter.search {
            request = request.query("search", search.as_str());
        }
        if !filter.status.is_empty() {
            let joined = filter
                .status
                .iter()
                .map(|status| status.as_str())
                .collect::<Vec<_>>()
                .join(",");
            request = request.query("status", joined);
        }
        if let Some(translator) = &filter.translator {
            request = request.query("translator", translator.as_str());
        }

        self.client.execute(request).await
    }

    async fn delete_series(&self, id: &str, cookies: Option<&str>) -> ApiResult<Ack> {
        self.client
            .execute(UpstreamRequest::delete(format!("/admin/series/{id}")).cookie_header(cookies))
            .await
    }

    async fn series_chapters(
        &self,
        series_id: &str,
        cookies: Option<&str>,
    ) -> ApiResult<Vec<ChapterSummary>> {
        self.client
            .execute(
                UpstreamRequest::get(format!("/admin/series/{series_id}/chapters"))
                    .cookie_header(cookies),
            )
            .await
    }

    async fn chapter_content(
        &self,
        chapter_id: &str,
        cookies: Option<&str>,
    ) -> ApiResult<ChapterContent> {
        self.client
            .execute(
                UpstreamRequest::get(format!("/admin/chapters/{chapter_id}"))
                    .cookie_header(cookies),
            )
            .await
    }

    async fn toggle_chapter_premium(
        &self,
        chapter_id: &str,
        cookies: Option<&str>,
    ) -> ApiResult<Ack> {
        self.client
            .execute(
                UpstreamRequest::patch(format!("/admin/chapters/{chapter_id}/toggle-premium"))
                    .cookie_header(cookies),
            )
            .await
    }

    async fn delete_chapter(&self, chapter_id: &str, cookies: Option<&str>) -> ApiResult<Ack> {
        self.client
            .execute(
                UpstreamRequest::delete(format!("/admin/chapters/{chapter_id}"))
                    .cookie_header(cookies),
            )
            .await
    }

    async fn assign_series(
        &self,
        assignment: &SeriesAssignment,
        cookies: Option<&str>,
    ) -> ApiResult<AssignmentReceipt> {
        let body = serde_json::to_value(assignment).unwrap_or_else(|_| json!({}));
        self.client
            .execute(
                UpstreamRequest::post("/admin/assign-series")
                    .json(body)
                    .cookie_header(cookies),
            )
            .await
    }

    async fn announcements(&self, cookies: Option<&str>) -> ApiResult<Vec<Announcement>> {
        self.client
            .execute(UpstreamRequest::get("/announcement").cookie_header(cookies))
            .await
    }

    async fn create_announcement(
        &self,
        announcement: &NewAnnouncement,
        cookies: Option<&str>,
    ) -> ApiResult<Announcement> {
        let body = serde_json::to_value(announcement).unwrap_or_else(|_| json!({}));
        self.client
            .execute(
                UpstreamRequest::post("/announcement")
                    .json(body)
                    .cookie_header(cookies),
            )
            .await
    }

    async fn update_announcement(
        &self,
        id: &str,
        patch: &AnnouncementPatch,
        cookies: Option<&str>,
    ) -> ApiResult<Announcement> {
        let body = serde_json::to_value(patch).unwrap_or_else(|_| json!({}));
        self.client
            .execute(
                UpstreamRequest::patch(format!("/announcement/{id}"))
                    .json(body)
                    .cookie_header(cookies),
            )
            .await
    }

    async fn toggle_announcement_active(&self, id: &str, cookies: Option<&str>) -> ApiResult<Ack> {
        self.client
            .execute(
                UpstreamRequest::patch(format!("/announcement/{id}/toggle-active"))
                    .cookie_header(cookies),
            )
            .await
    }

    async fn delete_announcement(&self, id: &str, cookies: Option<&str>) -> ApiResult<Ack> {
        self.client
            .execute(UpstreamRequest::delete(format!("/announcement/{id}")).cookie_header(cookies))
            .await
    }

    async fn dashboard_statistics(&self, cookies: Option<&str>) -> ApiResult<DashboardStatistics> {
        self.client
            .execute(UpstreamRequest::get("/admin/statistics").cookie_header(cookies))
            .await
    }

    async fn recent_purchases(
        &self,
        limit: u32,
        cookies: Option<&str>,
    ) -> ApiResult<Vec<RecentPurchase>> {
        self.client
            .execute(
                UpstreamRequest::get("/admin/recent-purchases")
                    .query("limit", limit.to_string())
                    .cookie_header(cookies),
            )
            .await
    }

    async fn recent_coin_purchases(
        &self,
        limit: u32,
        cookies: Option<&str>,
    ) -> ApiResult<Vec<RecentCoinPurchase>> {
        self.client
            .execute(
                UpstreamRequest::get("/admin/recent-coin-purchases")
                    .query("limit", limit.to_string())
                    .cookie_header(cookies),
            )
            .await
    }

    async fn categories(&self, cookies: Option<&str>) -> ApiResult<Vec<String>> {
        self.client
            .execute(UpstreamRequest::get("/category").cookie_header(cookies))
            .await
    }
}
