//! Public Search

use super::client::Call;
use super::endpoints;
use crate::error::ApiResult;
use crate::models::Consultancy;

/// Verified consultancies offering a course matching `query`, optionally
/// restricted to one country. Either filter may be empty.
pub async fn search_consultancies(query: &str, country: &str) -> ApiResult<Vec<Consultancy>> {
    Call::get(endpoints::SEARCH)
        .query("query", query)
        .query("country", country)
        .send_json()
        .await
}
