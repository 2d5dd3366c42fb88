use serde_json::json;

use kata_config::{Config, CorpusSource, Search, Service};
use kata_service::{CorpusStore, Error, SearchService};
use kata_testkit::TempCorpus;

fn test_config() -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		corpus: CorpusSource { path: "unused".to_string() },
		search: Search { min_query_chars: 2 },
	}
}

fn service_for(corpus: &TempCorpus) -> SearchService {
	let store = CorpusStore::load(corpus.path()).expect("Fixture corpus must load.");

	SearchService::new(&test_config(), store)
}

#[test]
fn loads_sample_corpus() {
	let corpus = TempCorpus::sample().expect("Fixture corpus must be written.");
	let service = service_for(&corpus);

	assert_eq!(service.corpus_len(), kata_testkit::sample_records().len());

	corpus.cleanup().expect("Fixture corpus must clean up.");
}

#[test]
fn load_fails_on_missing_file() {
	let result = CorpusStore::load(std::path::Path::new("/nonexistent/problems.json"));

	assert!(matches!(result, Err(Error::ReadCorpus { .. })));
}

#[test]
fn load_fails_on_malformed_json() {
	let corpus = TempCorpus::raw(b"{ not json").expect("Fixture file must be written.");

	assert!(matches!(CorpusStore::load(corpus.path()), Err(Error::ParseCorpus { .. })));
}

#[test]
fn load_fails_when_no_record_survives() {
	// Titles that are null or numeric zero flatten to empty text and drop.
	let corpus = TempCorpus::new(&[
		json!({ "title": 0, "url": "https://example.com", "question_body": "x" }),
		json!({ "title": null, "url": "", "question_body": "y" }),
	])
	.expect("Fixture corpus must be written.");

	assert!(matches!(CorpusStore::load(corpus.path()), Err(Error::EmptyCorpus { .. })));
}

#[test]
fn load_drops_sentinel_titles_but_keeps_the_rest() {
	let corpus = TempCorpus::new(&[
		json!({ "title": 0, "url": "", "question_body": "orphan" }),
		json!({ "title": "Two Sum", "url": "", "question_body": "array hashing" }),
	])
	.expect("Fixture corpus must be written.");
	let store = CorpusStore::load(corpus.path()).expect("Corpus with one valid record must load.");

	assert_eq!(store.corpus().len(), 1);
	assert_eq!(store.corpus().records()[0].title, "Two Sum");
}

#[test]
fn search_ranks_title_hits_above_body_hits() {
	let corpus = TempCorpus::sample().expect("Fixture corpus must be written.");
	let service = service_for(&corpus);
	let items = service.search("two");

	// "Two Sum" matches in the title, "Merge Intervals" only in the body.
	assert_eq!(items[0].title, "Two Sum");
	assert!(items.iter().any(|item| item.title == "Merge Intervals"));

	let two_sum = items.iter().position(|item| item.title == "Two Sum");
	let merge = items.iter().position(|item| item.title == "Merge Intervals");

	assert!(two_sum < merge);
}

#[test]
fn search_projects_wire_field_names() {
	let corpus = TempCorpus::sample().expect("Fixture corpus must be written.");
	let service = service_for(&corpus);
	let items = service.search("binary search");
	let wire = serde_json::to_value(&items).expect("Items must serialize.");

	assert_eq!(wire[0]["title"], "Binary Search");
	assert!(wire[0]["question_body"].as_str().is_some());
	assert!(wire[0].get("body").is_none());
}

#[test]
fn search_returns_empty_for_short_queries() {
	let corpus = TempCorpus::sample().expect("Fixture corpus must be written.");
	let service = service_for(&corpus);

	assert!(service.search("a").is_empty());
	assert!(service.search("   ").is_empty());
	assert!(service.search("").is_empty());
}

#[test]
fn search_returns_empty_when_nothing_matches() {
	let corpus = TempCorpus::sample().expect("Fixture corpus must be written.");
	let service = service_for(&corpus);

	assert!(service.search("zz").is_empty());
}

#[test]
fn search_is_idempotent() {
	let corpus = TempCorpus::sample().expect("Fixture corpus must be written.");
	let service = service_for(&corpus);

	assert_eq!(service.search("string"), service.search("string"));
}

#[test]
fn search_never_emits_empty_titles() {
	let corpus = TempCorpus::sample().expect("Fixture corpus must be written.");
	let service = service_for(&corpus);

	for item in service.search("the") {
		assert!(!item.title.is_empty());
	}
}
