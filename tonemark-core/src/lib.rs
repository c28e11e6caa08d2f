//! Lexicon-based sentiment scoring for bookmark exports
//!
//! The crate is split into a pure scoring layer and a thin document layer:
//! - **Lexicon**: positive and negative word sets loaded from TOML
//! - **Scorer**: text to `(label, score)`, with no side effects
//! - **Enrichment**: annotates every bookmark of a JSON export and tallies
//!   the labels
//!
//! # Example
//!
//! ```rust
//! use tonemark_core::{score, Label};
//!
//! let sentiment = score("This is a great and helpful tool");
//! assert_eq!(sentiment.label, Label::Positive);
//! assert_eq!(sentiment.score.as_f64(), 1.0);
//! ```

pub mod enrich;
pub mod error;
pub mod lexicon;
pub mod scorer;
pub mod tally;

pub use enrich::{enrich_bookmark, enrich_document, Enriched};
pub use error::{EnrichError, LexiconError};
pub use lexicon::{Lexicon, LexiconConfig, Polarity, DEFAULT_LEXICON_TOML};
pub use scorer::{Label, Score, Sentiment, SentimentScorer};
pub use tally::Tally;

/// Score text with the embedded default lexicon
pub fn score(text: &str) -> Sentiment {
    SentimentScorer::embedded().score(text)
}
