//! HTTP API Client
//!
//! Fetches the grouped monthly fatalities from the REST API.

use gloo_net::http::Request;

use crate::error::FetchError;
use crate::model::Record;

/// Fetch all grouped fatalities records.
///
/// Issues a single `GET` with no body, headers or query parameters. There is
/// no retry; any failure is returned to the caller.
pub async fn fetch_grouped_fatalities(url: &str) -> Result<Vec<Record>, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let records: Vec<Record> = response.json().await?;

    Ok(records)
}
