use tracing::debug;

use kata_domain::{matcher, normalize, rank, Problem, QueryRejection};

use crate::SearchService;

/// One result on the wire. `body` serializes as `question_body`, the field
/// name the search client renders.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SearchItem {
	pub title: String,
	pub url: String,
	#[serde(rename = "question_body")]
	pub body: String,
}
impl SearchItem {
	fn project(record: &Problem) -> Self {
		Self { title: record.title.clone(), url: record.url.clone(), body: record.body.clone() }
	}
}

impl SearchService {
	/// Runs one query through normalize → match → rank and projects the
	/// ordered records to their public fields.
	///
	/// A query below the minimum length degrades to an empty result set
	/// instead of an error, so the caller never special-cases rejection.
	/// Read-only against the corpus; identical calls return identical
	/// orderings.
	pub fn search(&self, raw_query: &str) -> Vec<SearchItem> {
		let query = match normalize::normalize(raw_query, self.min_query_chars) {
			Ok(query) => query,
			Err(QueryRejection::TooShort) => {
				debug!("Rejected query below minimum length.");

				return Vec::new();
			},
		};
		let hits = matcher::scan(self.store.corpus(), &query);

		rank(hits).into_iter().map(SearchItem::project).collect()
	}
}
