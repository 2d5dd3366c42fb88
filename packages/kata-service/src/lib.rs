mod error;
pub mod search;
pub mod store;

pub use error::{Error, Result};
pub use search::SearchItem;
pub use store::CorpusStore;

use kata_config::Config;

/// The public search entry point: holds the loaded corpus and the query
/// policy, and serves any number of concurrent read-only searches.
#[derive(Clone, Debug)]
pub struct SearchService {
	store: CorpusStore,
	min_query_chars: usize,
}
impl SearchService {
	pub fn new(cfg: &Config, store: CorpusStore) -> Self {
		Self { store, min_query_chars: cfg.search.min_query_chars as usize }
	}

	pub fn corpus_len(&self) -> usize {
		self.store.corpus().len()
	}
}
