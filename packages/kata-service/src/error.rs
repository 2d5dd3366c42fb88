pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Corpus-load failures. All of these are fatal at startup; the process must
/// not begin serving without a corpus.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read corpus file at {path:?}.")]
	ReadCorpus { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse corpus file at {path:?}.")]
	ParseCorpus { path: std::path::PathBuf, source: serde_json::Error },
	#[error("Corpus at {path:?} contains no usable records.")]
	EmptyCorpus { path: std::path::PathBuf },
}
