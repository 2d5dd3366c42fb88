use crate::{
	corpus::{Corpus, Problem},
	normalize::{casefold, NormalizedQuery},
};

pub const TITLE_SCORE: u8 = 2;
pub const BODY_SCORE: u8 = 1;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchField {
	Title,
	Body,
}

/// A record that contains the query, with the field that matched and its
/// relevance weight. Borrows from the corpus; lives for one request only.
#[derive(Clone, Copy, Debug)]
pub struct MatchHit<'a> {
	pub record: &'a Problem,
	pub score: u8,
	pub field: MatchField,
}

/// Scans the corpus in insertion order, yielding a hit per matching record.
///
/// Containment is case-insensitive substring only: the title is checked
/// first and dominates, the body is the fallback. Records with an empty
/// title violate the corpus invariant and are dropped rather than surfaced
/// as false matches.
pub fn scan<'a>(
	corpus: &'a Corpus,
	query: &'a NormalizedQuery,
) -> impl Iterator<Item = MatchHit<'a>> {
	corpus.records().iter().filter_map(move |record| {
		if record.title.is_empty() {
			return None;
		}

		let needle = query.as_str();

		if casefold(&record.title).contains(needle) {
			Some(MatchHit { record, score: TITLE_SCORE, field: MatchField::Title })
		} else if casefold(&record.body).contains(needle) {
			Some(MatchHit { record, score: BODY_SCORE, field: MatchField::Body })
		} else {
			None
		}
	})
}
