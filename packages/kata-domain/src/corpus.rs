use serde::{Deserialize, Deserializer, Serialize};

/// One searchable programming-problem record.
///
/// Upstream corpora overload absent fields with `null` or the number `0`;
/// deserialization flattens every non-string value to the empty string so the
/// rest of the engine only ever sees text.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Problem {
	#[serde(default, deserialize_with = "lenient_text")]
	pub title: String,
	#[serde(default, deserialize_with = "lenient_text")]
	pub url: String,
	#[serde(default, alias = "question_body", deserialize_with = "lenient_text")]
	pub body: String,
}

/// The fixed, ordered record set every query is matched against.
///
/// Built once at startup and never mutated; insertion order is the ranking
/// tie-break, so it is preserved as-is.
#[derive(Clone, Debug)]
pub struct Corpus {
	records: Vec<Problem>,
}
impl Corpus {
	pub fn new(records: Vec<Problem>) -> Self {
		Self { records }
	}

	pub fn records(&self) -> &[Problem] {
		&self.records
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Lenient {
		Text(String),
		Other(serde::de::IgnoredAny),
	}

	Ok(match Lenient::deserialize(deserializer)? {
		Lenient::Text(text) => text,
		Lenient::Other(_) => String::new(),
	})
}
