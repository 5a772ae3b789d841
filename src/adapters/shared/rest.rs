//! JSON GET helper shared by the REST venue adapters

use serde::de::DeserializeOwned;

use crate::adapters::errors::{ExchangeError, ExchangeResult};

/// GET `url` with `query` and decode the JSON body into `T`
///
/// Status mapping:
/// - 2xx → decoded body (decode failure → `InvalidResponse`)
/// - 400 / 404 with a `symbol` context → `MarketUnavailable`
/// - anything else → `ConnectionFailed` with status and a body excerpt
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    venue: &str,
    url: &str,
    query: &[(&str, String)],
    symbol: Option<&str>,
) -> ExchangeResult<T> {
    let response = client.get(url).query(query).send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        if let Some(symbol) = symbol {
            if status.as_u16() == 400 || status.as_u16() == 404 {
                tracing::debug!(
                    venue = %venue,
                    symbol = %symbol,
                    status = status.as_u16(),
                    "Venue rejected market"
                );
                return Err(ExchangeError::MarketUnavailable {
                    venue: venue.to_string(),
                    symbol: symbol.to_string(),
                });
            }
        }
        let excerpt: String = body.chars().take(120).collect();
        return Err(ExchangeError::ConnectionFailed(format!(
            "{} returned HTTP {}: {}",
            venue, status, excerpt
        )));
    }

    let text = response.text().await?;
    serde_json::from_str::<T>(&text).map_err(|e| {
        let excerpt: String = text.chars().take(120).collect();
        ExchangeError::InvalidResponse(format!("{} decode error: {}. Body: {}", venue, e, excerpt))
    })
}
