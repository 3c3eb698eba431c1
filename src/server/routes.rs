// file: src/server/routes.rs
// description: axum router and the /search handler
// reference: https://docs.rs/axum

use crate::models::ResultSet;
use crate::search::Corpus;
use crate::utils::Validator;
use axum::extract::{RawQuery, State};
use axum::routing::get;
use axum::{Json, Router};
use percent_encoding::percent_decode_str;
use tracing::debug;

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    corpus: Corpus,
}

impl AppState {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", get(search))
        .with_state(state)
}

/// First value of `q` in the raw query string.
///
/// Empty when `q` is absent, or when its value is not valid percent-encoded
/// UTF-8; an undecodable query is never searched for.
pub fn query_param(raw_query: Option<&str>) -> String {
    let Some(raw_query) = raw_query else {
        return String::new();
    };

    for pair in raw_query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode_component(key).as_deref() != Some("q") {
            continue;
        }

        return decode_component(value).unwrap_or_else(|| {
            debug!("Ignoring undecodable q parameter: {:?}", value);
            String::new()
        });
    }

    String::new()
}

/// `application/x-www-form-urlencoded` component decoding without lossy fallback.
fn decode_component(component: &str) -> Option<String> {
    let spaced = component.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

pub async fn search(State(state): State<AppState>, RawQuery(raw_query): RawQuery) -> Json<ResultSet> {
    let q = query_param(raw_query.as_deref());
    let results = state.corpus().search(&q);

    debug!(
        "search q={:?} matched {}",
        Validator::truncate_text(&q, 64),
        results.len()
    );

    Json(results)
}
