use std::{fs, path::Path};

use tracing::warn;

use kata_domain::{Corpus, Problem};

use crate::{Error, Result};

/// Owns the immutable corpus for the process lifetime.
///
/// Loaded exactly once at startup and injected into [`SearchService`]; there
/// is no ambient global and no post-load write path, so concurrent readers
/// need no synchronization.
///
/// [`SearchService`]: crate::SearchService
#[derive(Clone, Debug)]
pub struct CorpusStore {
	corpus: Corpus,
}
impl CorpusStore {
	/// Reads a JSON array of problem records from `path`.
	///
	/// Records whose title flattens to empty text (the source data's null/zero
	/// sentinel) violate the corpus invariant and are dropped here, with a
	/// count in the log. Zero surviving records is a load failure.
	pub fn load(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path)
			.map_err(|err| Error::ReadCorpus { path: path.to_path_buf(), source: err })?;
		let records: Vec<Problem> = serde_json::from_str(&raw)
			.map_err(|err| Error::ParseCorpus { path: path.to_path_buf(), source: err })?;
		let total = records.len();
		let records =
			records.into_iter().filter(|record| !record.title.is_empty()).collect::<Vec<_>>();
		let dropped = total - records.len();

		if dropped > 0 {
			warn!(%dropped, path = %path.display(), "Dropped records with empty titles.");
		}
		if records.is_empty() {
			return Err(Error::EmptyCorpus { path: path.to_path_buf() });
		}

		Ok(Self { corpus: Corpus::new(records) })
	}

	pub fn corpus(&self) -> &Corpus {
		&self.corpus
	}
}
