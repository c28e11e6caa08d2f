//! Bookmark document enrichment
//!
//! Walks the `bookmarks` array of an export document in order, overlays
//! `customAnalysis.sentiment` and `customAnalysis.sentimentScore` onto each
//! entry, and writes the run's [`Tally`] to `metadata.sentimentAnalysis`.
//! Every other field is left as it was. Object key order is preserved:
//! overwritten keys keep their position and new keys are appended.

use serde_json::{json, Map, Value};

use crate::error::{EnrichError, Result};
use crate::scorer::{Sentiment, SentimentScorer};
use crate::tally::Tally;

pub const BOOKMARKS_KEY: &str = "bookmarks";
pub const TEXT_KEY: &str = "text";
pub const CUSTOM_ANALYSIS_KEY: &str = "customAnalysis";
pub const SENTIMENT_KEY: &str = "sentiment";
pub const SENTIMENT_SCORE_KEY: &str = "sentimentScore";
pub const METADATA_KEY: &str = "metadata";
pub const SENTIMENT_ANALYSIS_KEY: &str = "sentimentAnalysis";

/// An enriched document and the label counts it was built with
#[derive(Debug, Clone, PartialEq)]
pub struct Enriched {
    pub document: Value,
    pub tally: Tally,
}

/// Enrich a whole export document
///
/// A missing `bookmarks` key is treated as an empty array. The first
/// structural problem aborts the run.
pub fn enrich_document(document: Value, scorer: &SentimentScorer<'_>) -> Result<Enriched> {
    let Value::Object(mut root) = document else {
        return Err(EnrichError::NotAnObject);
    };

    // Take the array in place; Map::remove would reorder keys
    let bookmarks = match root.get_mut(BOOKMARKS_KEY) {
        None => Vec::new(),
        Some(Value::Array(items)) => std::mem::take(items),
        Some(_) => return Err(EnrichError::BookmarksNotArray),
    };

    let mut tally = Tally::default();
    let mut enriched = Vec::with_capacity(bookmarks.len());
    for (index, bookmark) in bookmarks.into_iter().enumerate() {
        let (bookmark, sentiment) = enrich_bookmark(index, bookmark, scorer)?;
        tally.record(sentiment.label);
        enriched.push(bookmark);
    }

    root.insert(BOOKMARKS_KEY.to_string(), Value::Array(enriched));

    let metadata = root
        .entry(METADATA_KEY)
        .or_insert_with(|| Value::Object(Map::new()));
    let Value::Object(metadata) = metadata else {
        return Err(EnrichError::MetadataNotObject);
    };
    metadata.insert(SENTIMENT_ANALYSIS_KEY.to_string(), json!(tally));

    log::debug!(
        "Enriched {} bookmarks: {} positive, {} negative, {} neutral",
        tally.total(),
        tally.positive,
        tally.negative,
        tally.neutral
    );

    Ok(Enriched {
        document: Value::Object(root),
        tally,
    })
}

/// Score one bookmark and merge the result into its `customAnalysis`
pub fn enrich_bookmark(
    index: usize,
    bookmark: Value,
    scorer: &SentimentScorer<'_>,
) -> Result<(Value, Sentiment)> {
    let Value::Object(mut fields) = bookmark else {
        return Err(EnrichError::BookmarkNotObject { index });
    };

    let sentiment = match fields.get(TEXT_KEY) {
        None | Some(Value::Null) => Sentiment::NEUTRAL,
        Some(Value::String(text)) => scorer.score(text),
        Some(_) => return Err(EnrichError::TextNotString { index }),
    };

    let analysis = fields
        .entry(CUSTOM_ANALYSIS_KEY)
        .or_insert_with(|| Value::Object(Map::new()));
    let Value::Object(analysis) = analysis else {
        return Err(EnrichError::CustomAnalysisNotObject { index });
    };
    analysis.insert(SENTIMENT_KEY.to_string(), json!(sentiment.label));
    analysis.insert(SENTIMENT_SCORE_KEY.to_string(), json!(sentiment.score));

    Ok((Value::Object(fields), sentiment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enrich(document: Value) -> Result<Enriched> {
        enrich_document(document, &SentimentScorer::embedded())
    }

    fn keys(value: &Value) -> Vec<&str> {
        value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_single_positive_bookmark() {
        let result = enrich(json!({
            "bookmarks": [{"text": "This is a great and helpful tool"}]
        }))
        .unwrap();

        let analysis = &result.document["bookmarks"][0]["customAnalysis"];
        assert_eq!(analysis["sentiment"], "positive");
        assert_eq!(analysis["sentimentScore"].as_f64(), Some(1.0));
        assert_eq!(result.tally.positive, 1);
    }

    #[test]
    fn test_empty_bookmarks() {
        let result = enrich(json!({"bookmarks": []})).unwrap();

        assert_eq!(result.document["bookmarks"], json!([]));
        assert_eq!(
            result.document["metadata"]["sentimentAnalysis"],
            json!({"positive": 0, "negative": 0, "neutral": 0})
        );
    }

    #[test]
    fn test_missing_bookmarks_key() {
        let result = enrich(json!({"source": "export"})).unwrap();

        assert_eq!(keys(&result.document), vec!["source", "bookmarks", "metadata"]);
        assert_eq!(result.document["bookmarks"], json!([]));
        assert_eq!(result.tally, Tally::default());
    }

    #[test]
    fn test_existing_custom_analysis_is_merged() {
        let result = enrich(json!({
            "bookmarks": [{
                "id": "1",
                "customAnalysis": {"topic": "rust", "sentiment": "stale"},
                "text": "awful"
            }]
        }))
        .unwrap();

        let bookmark = &result.document["bookmarks"][0];
        assert_eq!(keys(bookmark), vec!["id", "customAnalysis", "text"]);

        let analysis = &bookmark["customAnalysis"];
        assert_eq!(keys(analysis), vec!["topic", "sentiment", "sentimentScore"]);
        assert_eq!(analysis["topic"], "rust");
        assert_eq!(analysis["sentiment"], "negative");
    }

    #[test]
    fn test_custom_analysis_appended_when_absent() {
        let result = enrich(json!({
            "bookmarks": [{"text": "fine", "author": "a"}]
        }))
        .unwrap();

        assert_eq!(
            keys(&result.document["bookmarks"][0]),
            vec!["text", "author", "customAnalysis"]
        );
    }

    #[test]
    fn test_missing_and_null_text_are_neutral() {
        let result = enrich(json!({
            "bookmarks": [{"id": 1}, {"id": 2, "text": null}]
        }))
        .unwrap();

        for bookmark in result.document["bookmarks"].as_array().unwrap() {
            assert_eq!(bookmark["customAnalysis"]["sentiment"], "neutral");
            assert_eq!(bookmark["customAnalysis"]["sentimentScore"].as_f64(), Some(0.0));
        }
        assert_eq!(result.tally.neutral, 2);
    }

    #[test]
    fn test_metadata_is_extended() {
        let result = enrich(json!({
            "metadata": {"exportedAt": "2024-01-01", "sentimentAnalysis": "old"},
            "bookmarks": [{"text": "bad"}, {"text": "great"}, {"text": "meh"}]
        }))
        .unwrap();

        let metadata = &result.document["metadata"];
        assert_eq!(keys(metadata), vec!["exportedAt", "sentimentAnalysis"]);
        assert_eq!(
            metadata["sentimentAnalysis"],
            json!({"positive": 1, "negative": 1, "neutral": 1})
        );
        // Root key order survives the bookmarks swap
        assert_eq!(keys(&result.document), vec!["metadata", "bookmarks"]);
    }

    #[test]
    fn test_order_and_tally_total() {
        let texts = ["good", "bad", "nothing", "great great", "bug"];
        let bookmarks: Vec<Value> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| json!({"id": i, "text": text}))
            .collect();

        let result = enrich(json!({"bookmarks": bookmarks})).unwrap();
        let output = result.document["bookmarks"].as_array().unwrap();

        assert_eq!(output.len(), texts.len());
        for (i, bookmark) in output.iter().enumerate() {
            assert_eq!(bookmark["id"], i);
            assert_eq!(bookmark["text"], texts[i]);
        }
        assert_eq!(result.tally.total(), texts.len());
        assert_eq!(result.tally.positive, 2);
        assert_eq!(result.tally.negative, 2);
        assert_eq!(result.tally.neutral, 1);
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(enrich(json!([])), Err(EnrichError::NotAnObject));
        assert_eq!(
            enrich(json!({"bookmarks": {"text": "x"}})),
            Err(EnrichError::BookmarksNotArray)
        );
        assert_eq!(
            enrich(json!({"bookmarks": null})),
            Err(EnrichError::BookmarksNotArray)
        );
        assert_eq!(
            enrich(json!({"bookmarks": [{"text": "ok"}, "oops"]})),
            Err(EnrichError::BookmarkNotObject { index: 1 })
        );
        assert_eq!(
            enrich(json!({"bookmarks": [{"text": 42}]})),
            Err(EnrichError::TextNotString { index: 0 })
        );
        assert_eq!(
            enrich(json!({"bookmarks": [{"text": "a", "customAnalysis": [1]}]})),
            Err(EnrichError::CustomAnalysisNotObject { index: 0 })
        );
        assert_eq!(
            enrich(json!({"bookmarks": [], "metadata": 7})),
            Err(EnrichError::MetadataNotObject)
        );
    }

    #[test]
    fn test_unrelated_fields_preserved() {
        let input = json!({
            "version": 2,
            "bookmarks": [{
                "text": "great",
                "tags": ["a", "b"],
                "nested": {"deep": {"value": 1.5}},
                "flag": false
            }]
        });

        let result = enrich(input.clone()).unwrap();
        let original = &input["bookmarks"][0];
        let enriched = &result.document["bookmarks"][0];

        assert_eq!(result.document["version"], input["version"]);
        for key in ["text", "tags", "nested", "flag"] {
            assert_eq!(enriched[key], original[key]);
        }
    }
}
