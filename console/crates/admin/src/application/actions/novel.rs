//! Novel Series / Chapter Actions

use shared::action::error::ActionResult;

use crate::application::actions::reshape;
use crate::domain::api::UpstreamApi;
use crate::domain::entity::{
    Ack, AssignmentReceipt, ChapterContent, ChapterSummary, SeriesAssignment, SeriesFilter,
    SeriesPage,
};

pub async fn series_page<A: UpstreamApi + Sync>(
    api: &A,
    filter: &SeriesFilter,
    cookies: Option<&str>,
) -> ActionResult<SeriesPage> {
    reshape(api.series(filter, cookies).await)
}

pub async fn delete_series<A: UpstreamApi + Sync>(
    api: &A,
    id: &str,
    cookies: Option<&str>,
) -> ActionResult<Ack> {
    reshape(api.delete_series(id, cookies).await)
}

pub async fn series_chapters<A: UpstreamApi + Sync>(
    api: &A,
    series_id: &str,
    cookies: Option<&str>,
) -> ActionResult<Vec<ChapterSummary>> {
    reshape(api.series_chapters(series_id, cookies).await)
}

pub async fn chapter_content<A: UpstreamApi + Sync>(
    api: &A,
    chapter_id: &str,
    cookies: Option<&str>,
) -> ActionResult<ChapterContent> {
    reshape(api.chapter_content(chapter_id, cookies).await)
}

pub async fn toggle_chapter_premium<A: UpstreamApi + Sync>(
    api: &A,
    chapter_id: &str,
    cookies: Option<&str>,
) -> ActionResult<Ack> {
    reshape(api.toggle_chapter_premium(chapter_id, cookies).await)
}

pub async fn delete_chapter<A: UpstreamApi + Sync>(
    api: &A,
    chapter_id: &str,
    cookies: Option<&str>,
) -> ActionResult<Ack> {
    reshape(api.delete_chapter(chapter_id, cookies).await)
}

pub async fn assign_series<A: UpstreamApi + Sync>(
    api: &A,
    assignment: &SeriesAssignment,
    cookies: Option<&str>,
) -> ActionResult<AssignmentReceipt> {
    reshape(api.assign_series(assignment, cookies).await)
}
