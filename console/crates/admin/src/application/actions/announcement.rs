//! Announcement Actions

use shared::action::error::ActionResult;

use crate::application::actions::reshape;
use crate::domain::api::UpstreamApi;
use crate::domain::entity::{Ack, Announcement, AnnouncementPatch, NewAnnouncement};

pub async fn all_announcements<A: UpstreamApi + Sync>(
    api: &A,
    cookies: Option<&str>,
) -> ActionResult<Vec<Announcement>> {
    reshape(api.announcements(cookies).await)
}

pub async fn create_announcement<A: UpstreamApi + Sync>(
    api: &A,
    announcement: &NewAnnouncement,
    cookies: Option<&str>,
) -> ActionResult<Announcement> {
    reshape(api.create_announcement(announcement, cookies).await)
}

pub async fn update_announcement<A: UpstreamApi + Sync>(
    api: &A,
    id: &str,
    patch: &AnnouncementPatch,
    cookies: Option<&str>,
) -> ActionResult<Announcement> {
    reshape(api.update_announcement(id, patch, cookies).await)
}

pub async fn toggle_announcement_active<A: UpstreamApi + Sync>(
    api: &A,
    id: &str,
    cookies: Option<&str>,
) -> ActionResult<Ack> {
    reshape(api.toggle_announcement_active(id, cookies).await)
}

pub async fn delete_announcement<A: UpstreamApi + Sync>(
    api: &A,
    id: &str,
    cookies: Option<&str>,
) -> ActionResult<Ack> {
    reshape(api.delete_announcement(id, cookies).await)
}
