use axum::{
	Json, Router,
	extract::{Query, Request, State},
	http::{HeaderValue, header},
	middleware::{self, Next},
	response::Response,
	routing::get,
};
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use kata_service::SearchItem;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/search", get(search))
		.layer(middleware::from_fn(security_headers))
		.with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthBody {
	status: &'static str,
	timestamp: String,
	version: &'static str,
}

/// Process liveness only; reports OK regardless of corpus content.
async fn health() -> Json<HealthBody> {
	let timestamp = OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default();

	Json(HealthBody { status: "OK", timestamp, version: kata_cli::VERSION })
}

#[derive(Debug, Deserialize)]
struct SearchParams {
	#[serde(default)]
	question: String,
}

/// The response is a bare JSON array; an empty array is the no-match signal.
/// A missing or too-short `question` also yields the empty array, never an
/// HTTP error.
async fn search(
	State(state): State<AppState>,
	Query(params): Query<SearchParams>,
) -> Json<Vec<SearchItem>> {
	Json(state.service.search(&params.question))
}

async fn security_headers(req: Request, next: Next) -> Response {
	let mut response = next.run(req).await;
	let headers = response.headers_mut();

	headers.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
	headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

	response
}
