use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use thiserror::Error;

use crate::models::review::{parse_reviews, Review};

#[cfg(feature = "ssr")]
use actix_web::{web, HttpResponse};
#[cfg(feature = "ssr")]
use crate::db::Database;
#[cfg(feature = "ssr")]
use std::sync::Arc;
#[cfg(feature = "ssr")]
use tokio::sync::Mutex;

/// Fixed collection endpoint. No query parameters, no request body.
pub const REVIEWS_ENDPOINT: &str = "/api/reviews";

/// Bound on how long a single load may stay in flight.
const FETCH_TIMEOUT_MS: u32 = 10_000;

/// Failure kinds for one review load. The fetch is all-or-nothing, so
/// there are no partial-failure variants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Malformed(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
}

/// Fetches the review collection once, preserving server-given order.
/// No caching and no automatic retry; callers decide what to do with a
/// `LoadError`.
pub async fn fetch_reviews() -> Result<Vec<Review>, LoadError> {
    log!("[LOAD] GET {}", REVIEWS_ENDPOINT);

    let request = Request::get(REVIEWS_ENDPOINT).send();
    let timeout = TimeoutFuture::new(FETCH_TIMEOUT_MS);
    futures::pin_mut!(request);
    futures::pin_mut!(timeout);

    let response = match future::select(request, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| LoadError::Network(e.to_string()))?,
        Either::Right(_) => {
            log!("[LOAD] Request timed out after {} ms", FETCH_TIMEOUT_MS);
            return Err(LoadError::Timeout(FETCH_TIMEOUT_MS));
        }
    };

    if !response.ok() {
        log!("[LOAD] Server responded with status {}", response.status());
        return Err(LoadError::Status(response.status()));
    }

    // Parse to raw JSON first so one malformed record is quarantined
    // instead of failing the whole collection.
    let body: Vec<serde_json::Value> = response
        .json()
        .await
        .map_err(|e| LoadError::Malformed(e.to_string()))?;

    let reviews = parse_reviews(body);
    log!("[LOAD] Received {} reviews", reviews.len());
    Ok(reviews)
}

#[cfg(feature = "ssr")]
pub async fn get_reviews(db: web::Data<Arc<Mutex<Database>>>) -> HttpResponse {
    log!("[SERVER] Received request for reviews");

    let db = db.lock().await;
    match db.get_reviews().await {
        Ok(reviews) => {
            log!("[SERVER] Returning {} reviews", reviews.len());
            HttpResponse::Ok().json(reviews)
        }
        Err(err) => {
            log!("[SERVER ERROR] Failed to fetch reviews: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch reviews")
        }
    }
}
