//! Backend Records
//!
//! Typed per-endpoint schemas, validated at the boundary by serde. The
//! backend owns the invariants; this layer only refuses shapes it cannot
//! explain instead of trusting loose payloads.

use serde::{Deserialize, Serialize};

// ============================================================================
// Session / User
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Translator,
    Reader,
}

/// Authenticated user record, held only in memory for the page load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

/// Login payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user: User,
}

// ============================================================================
// Translators
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslatorStatus {
    Active,
    Suspended,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translator {
    pub id: String,
    pub username: String,
    pub email: String,
    pub status: TranslatorStatus,
    pub assigned_series: u32,
    pub chapters_translated: u32,
    pub joined_date: String,
}

/// Freshly created translator; includes the generated initial password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTranslator {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Series / Chapters
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesStatus {
    Ongoing,
    Completed,
}

impl SeriesStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesStatus::Ongoing => "ongoing",
            SeriesStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovelSeries {
    pub id: String,
    pub title: String,
    pub cover: String,
    pub total_chapters: u32,
    pub status: SeriesStatus,
    pub translator: Option<String>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

/// One page of the series listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPage {
    pub data: Vec<NovelSeries>,
    pub pagination: Pagination,
}

/// Listing filters forwarded to the backend as query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesFilter {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub status: Vec<SeriesStatus>,
    pub translator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSummary {
    pub id: String,
    pub title: String,
    pub chapter_number: u32,
    pub is_premium: bool,
    pub price_in_coins: u32,
    pub publish_date: String,
    pub read_count: u64,
}

/// Full chapter, premium content included (admin view)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterContent {
    pub id: String,
    pub title: String,
    pub chapter_number: u32,
    pub content: String,
    pub is_premium: bool,
    pub price_in_coins: u32,
    pub publish_date: String,
    pub read_count: u64,
    pub language: Option<String>,
    pub notes: Option<String>,
}

// ============================================================================
// Announcements
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementKind {
    Info,
    Warning,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: AnnouncementKind,
    pub is_active: bool,
    pub start_date: String,
    pub end_date: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: AnnouncementKind,
    pub is_active: bool,
    pub start_date: String,
    pub end_date: Option<String>,
}

/// Partial update; only present fields are sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AnnouncementKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Option<String>>,
}

// ============================================================================
// Assignments / Acknowledgements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesAssignment {
    pub translator_id: String,
    pub series_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_rating: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentReceipt {
    pub message: String,
    pub assignment_id: String,
}

/// Plain acknowledgement for toggles and deletes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ack {
    pub message: String,
}

// ============================================================================
// Dashboard
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatistics {
    pub total_novels: u64,
    pub total_chapters: u64,
    pub total_translators: u64,
    pub total_users: u64,
    pub coins_purchased_this_month: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPurchase {
    pub id: String,
    pub novel: String,
    pub chapter: String,
    pub purchased_by: String,
    pub coins_spent: u64,
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentCoinPurchase {
    pub id: String,
    pub user: String,
    pub package_name: String,
    pub coins_amount: u64,
    pub amount_paid: String,
    pub date: String,
    pub status: PurchaseStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_wire_shape() {
        let user: User = serde_json::from_value(json!({
            "id": "u1",
            "username": "admin",
            "email": "admin@example.com",
            "role": "admin"
        }))
        .unwrap();

        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn test_translator_camel_case_fields() {
        let translator: Translator = serde_json::from_value(json!({
            "id": "t1",
            "username": "mira",
            "email": "mira@example.com",
            "status": "suspended",
            "assignedSeries": 3,
            "chaptersTranslated": 120,
            "joinedDate": "2024-05-01"
        }))
        .unwrap();

        assert_eq!(translator.status, TranslatorStatus::Suspended);
        assert_eq!(translator.assigned_series, 3);
    }

    #[test]
    fn test_announcement_type_field_renamed() {
        let announcement: Announcement = serde_json::from_value(json!({
            "id": "a1",
            "title": "Maintenance",
            "content": "Down at midnight",
            "type": "warning",
            "isActive": true,
            "startDate": "2025-01-01",
            "endDate": null
        }))
        .unwrap();

        assert_eq!(announcement.kind, AnnouncementKind::Warning);
        assert!(announcement.end_date.is_none());

        let out = serde_json::to_value(&announcement).unwrap();
        assert_eq!(out["type"], "warning");
    }

    #[test]
    fn test_announcement_patch_skips_absent_fields() {
        let patch = AnnouncementPatch {
            is_active: Some(false),
            ..Default::default()
        };
        let out = serde_json::to_value(&patch).unwrap();

        assert_eq!(out, json!({"isActive": false}));
    }

    #[test]
    fn test_series_page_nested_pagination() {
        let page: SeriesPage = serde_json::from_value(json!({
            "data": [],
            "pagination": {"total": 42, "page": 2, "limit": 20, "totalPages": 3}
        }))
        .unwrap();

        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        // Backend sends a translator without a status: the boundary refuses it.
        let result: Result<Translator, _> = serde_json::from_value(json!({
            "id": "t1",
            "username": "mira",
            "email": "mira@example.com"
        }));

        assert!(result.is_err());
    }
}
