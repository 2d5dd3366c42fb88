use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub corpus: CorpusSource,
	#[serde(default)]
	pub search: Search,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct CorpusSource {
	/// Path to the JSON array of problem records loaded at startup.
	pub path: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Search {
	/// Queries shorter than this (after trimming) return no results.
	pub min_query_chars: u32,
}
impl Default for Search {
	fn default() -> Self {
		Self { min_query_chars: 2 }
	}
}
