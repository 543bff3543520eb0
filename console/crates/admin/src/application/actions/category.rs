//! Category Actions

use shared::action::error::ActionResult;

use crate::application::actions::reshape;
use crate::domain::api::UpstreamApi;

pub async fn all_categories<A: UpstreamApi + Sync>(
    api: &A,
    cookies: Option<&str>,
) -> ActionResult<Vec<String>> {
    reshape(api.categories(cookies).await)
}
