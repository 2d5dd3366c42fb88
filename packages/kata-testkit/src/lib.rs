mod error;

pub use error::{Error, Result};

use std::{
	env, fs,
	path::{Path, PathBuf},
};

use serde_json::{json, Value};
use uuid::Uuid;

/// A corpus file written to the system temp directory under a unique name.
///
/// Call [`cleanup`](Self::cleanup) at the end of the test; `Drop` removes the
/// file best-effort if the test bails early.
pub struct TempCorpus {
	path: PathBuf,
	cleaned: bool,
}
impl TempCorpus {
	pub fn new(records: &[Value]) -> Result<Self> {
		let path = env::temp_dir().join(format!("kata_test_{}.json", Uuid::new_v4().simple()));
		let body = serde_json::to_string_pretty(&Value::Array(records.to_vec()))?;

		fs::write(&path, body)?;

		Ok(Self { path, cleaned: false })
	}

	/// The canonical fixture set used across crates.
	pub fn sample() -> Result<Self> {
		Self::new(&sample_records())
	}

	/// Writes arbitrary bytes instead of a JSON array, for malformed-corpus
	/// tests.
	pub fn raw(bytes: &[u8]) -> Result<Self> {
		let path = env::temp_dir().join(format!("kata_test_{}.json", Uuid::new_v4().simple()));

		fs::write(&path, bytes)?;

		Ok(Self { path, cleaned: false })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn cleanup(mut self) -> Result<()> {
		self.cleanup_inner()
	}

	fn cleanup_inner(&mut self) -> Result<()> {
		if self.cleaned {
			return Ok(());
		}

		fs::remove_file(&self.path)?;

		self.cleaned = true;

		Ok(())
	}
}
impl Drop for TempCorpus {
	fn drop(&mut self) {
		let _ = self.cleanup_inner();
	}
}

pub fn sample_records() -> Vec<Value> {
	vec![
		json!({
			"title": "Two Sum",
			"url": "https://leetcode.com/problems/two-sum/",
			"question_body": "Given an array of integers, return indices of the two numbers that add up to a target. Array hashing."
		}),
		json!({
			"title": "Merge Intervals",
			"url": "https://leetcode.com/problems/merge-intervals/",
			"question_body": "Given a collection of intervals, merge all overlapping intervals. Sorting, two pointers."
		}),
		json!({
			"title": "Valid Parentheses",
			"url": "https://leetcode.com/problems/valid-parentheses/",
			"question_body": "Given a string containing brackets, determine if the input string is valid. Stack."
		}),
		json!({
			"title": "Binary Search",
			"url": "https://leetcode.com/problems/binary-search/",
			"question_body": "Search a sorted array of integers for a target value in logarithmic time."
		}),
		json!({
			"title": "Longest Substring Without Repeating Characters",
			"url": "https://leetcode.com/problems/longest-substring-without-repeating-characters/",
			"question_body": "Given a string, find the length of the longest substring without repeating characters. Sliding window."
		}),
	]
}
