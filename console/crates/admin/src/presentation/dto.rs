//! API DTOs (Data Transfer Objects)

use serde::Deserialize;

use crate::domain::api::Credentials;
use crate::domain::entity::{SeriesAssignment, SeriesFilter, SeriesStatus};

// ============================================================================
// Session
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<LoginRequest> for Credentials {
    fn from(req: LoginRequest) -> Self {
        Credentials {
            email: req.email,
            password: req.password,
        }
    }
}

// ============================================================================
// Translators
// ============================================================================

/// Create translator request; the backend generates the password
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTranslatorRequest {
    pub username: String,
    pub email: String,
}

// ============================================================================
// Series
// ============================================================================

/// Series listing query
///
/// `status` is a comma-separated list; unrecognized values are dropped
/// rather than rejected, matching the backend's own filter handling.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub translator: Option<String>,
}

impl SeriesQuery {
    pub fn into_filter(self) -> SeriesFilter {
        let status = self
            .status
            .as_deref()
            .map(parse_status_list)
            .unwrap_or_default();

        SeriesFilter {
            page: self.page,
            limit: self.limit,
            search: self.search.filter(|s| !s.trim().is_empty()),
            status,
            translator: self.translator.filter(|t| !t.trim().is_empty()),
        }
    }
}

fn parse_status_list(raw: &str) -> Vec<SeriesStatus> {
    raw.split(',')
        .filter_map(|value| match value.trim() {
            "ongoing" => Some(SeriesStatus::Ongoing),
            "completed" => Some(SeriesStatus::Completed),
            _ => None,
        })
        .collect()
}

/// Assign a series to a translator
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignSeriesRequest {
    pub translator_id: String,
    pub series_name: String,
    pub admin_rating: Option<u8>,
}

impl From<AssignSeriesRequest> for SeriesAssignment {
    fn from(req: AssignSeriesRequest) -> Self {
        SeriesAssignment {
            translator_id: req.translator_id,
            series_name: req.series_name,
            admin_rating: req.admin_rating,
        }
    }
}

// ============================================================================
// Dashboard
// ============================================================================

/// Row limit for the recent-activity feeds
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitQuery {
    pub limit: Option<u32>,
}
