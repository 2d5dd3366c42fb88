use std::{path::Path, sync::Arc};

use kata_service::{CorpusStore, SearchService};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<SearchService>,
}
impl AppState {
	pub fn new(config: kata_config::Config) -> color_eyre::Result<Self> {
		let store = CorpusStore::load(Path::new(&config.corpus.path))?;
		let service = SearchService::new(&config, store);

		Ok(Self { service: Arc::new(service) })
	}
}
