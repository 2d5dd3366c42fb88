use unicode_normalization::UnicodeNormalization;

/// Default minimum query length, matching the search client's gate.
pub const MIN_QUERY_CHARS: usize = 2;

/// A query after trimming, case-folding, and whitespace collapsing.
///
/// Matching only ever runs against this form, so two raw queries that
/// normalize identically are indistinguishable downstream.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NormalizedQuery(String);
impl NormalizedQuery {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum QueryRejection {
	#[error("Query is shorter than the minimum length after trimming.")]
	TooShort,
}

/// Canonicalizes raw query text.
///
/// Steps, in order: trim, length gate against `min_chars`, NFKC + lowercase
/// case-fold, collapse internal whitespace runs to single spaces. Same input
/// always yields the same output.
pub fn normalize(raw: &str, min_chars: usize) -> Result<NormalizedQuery, QueryRejection> {
	let trimmed = raw.trim();

	if trimmed.chars().count() < min_chars {
		return Err(QueryRejection::TooShort);
	}

	let folded = casefold(trimmed);
	let collapsed = folded.split_whitespace().collect::<Vec<_>>().join(" ");

	Ok(NormalizedQuery(collapsed))
}

/// The single case-fold used for both queries and record fields.
pub fn casefold(text: &str) -> String {
	text.nfkc().flat_map(char::to_lowercase).collect()
}
