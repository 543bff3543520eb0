//! Upstream API Trait
//!
//! Every backend endpoint the console consumes, as one typed operation.
//! The HTTP implementation lives in the infrastructure layer; tests use
//! in-memory stubs.
//!
//! Session forwarding: operations take the caller's cookie header verbatim.
//! The one exception is [`check_profile`](UpstreamApi::check_profile), which
//! the route guard calls with the bare token as a bearer credential.

use upstream::client::HeaderBag;
use upstream::envelope::ApiResult;

use crate::domain::entity::{
    Ack, Announcement, AnnouncementPatch, AssignmentReceipt, AuthSession, ChapterContent,
    ChapterSummary, CreatedTranslator, DashboardStatistics, NewAnnouncement, RecentCoinPurchase,
    RecentPurchase, SeriesAssignment, SeriesFilter, SeriesPage, Translator, User,
};

/// Credentials submitted at login
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[trait_variant::make(UpstreamApi: Send)]
pub trait LocalUpstreamApi {
    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// Login; headers are returned so the session cookie can be relayed
    async fn login(&self, credentials: &Credentials) -> (ApiResult<AuthSession>, HeaderBag);

    /// Invalidate the session server-side
    async fn logout(&self, cookies: Option<&str>) -> ApiResult<Ack>;

    /// Current user for the forwarded cookie header
    async fn current_user(&self, cookies: Option<&str>) -> ApiResult<User>;

    /// Profile check with the token as a bearer credential (route guard)
    async fn check_profile(&self, token: &str) -> ApiResult<User>;

    // ------------------------------------------------------------------
    // Translators
    // ------------------------------------------------------------------

    async fn translators(&self, cookies: Option<&str>) -> ApiResult<Vec<Translator>>;

    async fn create_translator(
        &self,
        username: &str,
        email: &str,
        cookies: Option<&str>,
    ) -> ApiResult<CreatedTranslator>;

    /// Flip active/suspended; calling twice restores the original state
    async fn toggle_translator_status(&self, id: &str, cookies: Option<&str>) -> ApiResult<Ack>;

    async fn delete_translator(&self, id: &str, cookies: Option<&str>) -> ApiResult<Ack>;

    // ------------------------------------------------------------------
    // Series / Chapters
    // ------------------------------------------------------------------

    async fn series(&self, filter: &SeriesFilter, cookies: Option<&str>) -> ApiResult<SeriesPage>;

    async fn delete_series(&self, id: &str, cookies: Option<&str>) -> ApiResult<Ack>;

    async fn series_chapters(
        &self,
        series_id: &str,
        cookies: Option<&str>,
    ) -> ApiResult<Vec<ChapterSummary>>;

    async fn chapter_content(
        &self,
        chapter_id: &str,
        cookies: Option<&str>,
    ) -> ApiResult<ChapterContent>;

    async fn toggle_chapter_premium(
        &self,
        chapter_id: &str,
        cookies: Option<&str>,
    ) -> ApiResult<Ack>;

    async fn delete_chapter(&self, chapter_id: &str, cookies: Option<&str>) -> ApiResult<Ack>;

    async fn assign_series(
        &self,
        assignment: &SeriesAssignment,
        cookies: Option<&str>,
    ) -> ApiResult<AssignmentReceipt>;

    // ------------------------------------------------------------------
    // Announcements
    // ------------------------------------------------------------------

    async fn announcements(&self, cookies: Option<&str>) -> ApiResult<Vec<Announcement>>;

    async fn create_announcement(
        &self,
        announcement: &NewAnnouncement,
        cookies: Option<&str>,
    ) -> ApiResult<Announcement>;

    async fn update_announcement(
        &self,
        id: &str,
        patch: &AnnouncementPatch,
        cookies: Option<&str>,
    ) -> ApiResult<Announcement>;

    async fn toggle_announcement_active(&self, id: &str, cookies: Option<&str>) -> ApiResult<Ack>;

    async fn delete_announcement(&self, id: &str, cookies: Option<&str>) -> ApiResult<Ack>;

    // ------------------------------------------------------------------
    // Dashboard / Categories
    // ------------------------------------------------------------------

    async fn dashboard_statistics(&self, cookies: Option<&str>) -> ApiResult<DashboardStatistics>;

    async fn recent_purchases(
        &self,
        limit: u32,
        cookies: Option<&str>,
    ) -> ApiResult<Vec<RecentPurchase>>;

    async fn recent_coin_purchases(
        &self,
        limit: u32,
        cookies: Option<&str>,
    ) -> ApiResult<Vec<RecentCoinPurchase>>;

    async fn categories(&self, cookies: Option<&str>) -> ApiResult<Vec<String>>;
}
