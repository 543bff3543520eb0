//! Translator Actions

use shared::action::error::ActionResult;

use crate::application::actions::reshape;
use crate::domain::api::UpstreamApi;
use crate::domain::entity::{Ack, CreatedTranslator, Translator};

pub async fn all_translators<A: UpstreamApi + Sync>(
    api: &A,
    cookies: Option<&str>,
) -> ActionResult<Vec<Translator>> {
    reshape(api.translators(cookies).await)
}

/// Create a translator account; the backend generates and returns the
/// initial password
pub async fn create_translator<A: UpstreamApi + Sync>(
    api: &A,
    username: &str,
    email: &str,
    cookies: Option<&str>,
) -> ActionResult<CreatedTranslator> {
    reshape(api.create_translator(username, email, cookies).await)
}

pub async fn toggle_translator_status<A: UpstreamApi + Sync>(
    api: &A,
    id: &str,
    cookies: Option<&str>,
) -> ActionResult<Ack> {
    reshape(api.toggle_translator_status(id, cookies).await)
}

pub async fn delete_translator<A: UpstreamApi + Sync>(
    api: &A,
    id: &str,
    cookies: Option<&str>,
) -> ActionResult<Ack> {
    reshape(api.delete_translator(id, cookies).await)
}
