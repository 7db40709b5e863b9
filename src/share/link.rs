use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::engine::types::{OptionLeg, PriceRange, Strategy, MAX_LEGS};

/// Token format version. Bump when the payload changes shape and keep the
/// old decoder around so previously shared links stay readable.
const SHARE_VERSION_PREFIX: &str = "v1.";

const SHARE_QUERY_KEY: &str = "s";

/// What a share token carries. The chart window is display state and is
/// re-derived from the underlying price on decode.
#[derive(Serialize, Deserialize)]
struct SharePayload {
    name: String,
    underlying_price: f64,
    legs: Vec<OptionLeg>,
}

impl From<&Strategy> for SharePayload {
    fn from(strategy: &Strategy) -> Self {
        Self {
            name: strategy.name.clone(),
            underlying_price: strategy.underlying_price,
            legs: strategy.legs.clone(),
        }
    }
}

/// Deterministic, URL-safe token for the strategy.
pub fn encode_share_token(strategy: &Strategy) -> String {
    // Serializing a plain struct with string keys cannot fail.
    let json = serde_json::to_vec(&SharePayload::from(strategy)).unwrap_or_default();
    format!("{SHARE_VERSION_PREFIX}{}", URL_SAFE_NO_PAD.encode(json))
}

/// Inverse of `encode_share_token`. Malformed or unsupported tokens come
/// back as `None` so a corrupted link degrades to an empty strategy instead
/// of failing the page.
pub fn decode_share_token(token: &str) -> Option<Strategy> {
    let Some(encoded) = token.strip_prefix(SHARE_VERSION_PREFIX) else {
        tracing::debug!("share token has no supported version prefix");
        return None;
    };
    let json = match URL_SAFE_NO_PAD.decode(encoded) {
        Ok(json) => json,
        Err(err) => {
            tracing::debug!(%err, "share token is not valid base64");
            return None;
        }
    };
    let payload: SharePayload = match serde_json::from_slice(&json) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::debug!(%err, "share token payload is not valid");
            return None;
        }
    };
    if payload.legs.len() > MAX_LEGS {
        tracing::debug!(legs = payload.legs.len(), "share token exceeds leg limit");
        return None;
    }
    Some(Strategy {
        name: payload.name,
        underlying_price: payload.underlying_price,
        price_range: PriceRange::auto(payload.underlying_price),
        legs: payload.legs,
    })
}

/// Full shareable link: `<base_url>?s=<token>`.
pub fn share_link(base_url: &str, strategy: &Strategy) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!(
        "{base_url}{separator}{SHARE_QUERY_KEY}={}",
        encode_share_token(strategy)
    )
}

/// Restores a strategy from a URL query component (with or without the
/// leading `?`). Unrelated parameters are ignored.
pub fn strategy_from_query(query: &str) -> Option<Strategy> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == SHARE_QUERY_KEY)
        .and_then(|(_, token)| decode_share_token(token))
}
