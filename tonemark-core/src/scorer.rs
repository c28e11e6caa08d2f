//! Lexicon-based sentiment scoring
//!
//! Text is lowercased and split into tokens (maximal runs of letters, digits
//! and underscores). Each token that matches the lexicon counts once per
//! occurrence. With `p` positive and `n` negative hits the score is
//! `(p - n) / (p + n)` rounded to two decimals, half to even, and the label
//! is derived from the rounded score.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::lexicon::{Lexicon, Polarity};

/// Rounded scores strictly above this many hundredths are positive
const POSITIVE_THRESHOLD: i32 = 20;
/// Rounded scores strictly below this many hundredths are negative
const NEGATIVE_THRESHOLD: i32 = -20;

/// Sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

impl Label {
    /// Label for an already-rounded score; the thresholds themselves are neutral
    pub fn from_score(score: Score) -> Self {
        match score.hundredths() {
            h if h > POSITIVE_THRESHOLD => Label::Positive,
            h if h < NEGATIVE_THRESHOLD => Label::Negative,
            _ => Label::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "positive",
            Label::Negative => "negative",
            Label::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment score in [-1.0, 1.0] with two decimal places
///
/// Held as integer hundredths so rounding and threshold comparisons are exact.
/// Serializes as a JSON float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(i32);

impl Score {
    pub const ZERO: Score = Score(0);

    /// Score for `positive` and `negative` hit counts
    ///
    /// Computes `100 * (p - n) / (p + n)` rounded half to even, so
    /// `p = 9, n = 7` (0.125) becomes 0.12.
    pub fn from_counts(positive: usize, negative: usize) -> Self {
        let total = positive as i64 + negative as i64;
        if total == 0 {
            return Score::ZERO;
        }

        let numerator = 100 * (positive as i64 - negative as i64);
        let mut quotient = numerator.div_euclid(total);
        let twice_remainder = 2 * numerator.rem_euclid(total);

        if twice_remainder > total || (twice_remainder == total && quotient % 2 != 0) {
            quotient += 1;
        }

        // |quotient| <= 100
        Score(quotient as i32)
    }

    pub fn hundredths(self) -> i32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.as_f64())
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Label and score for one piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentiment {
    pub label: Label,
    pub score: Score,
}

impl Sentiment {
    pub const NEUTRAL: Sentiment = Sentiment {
        label: Label::Neutral,
        score: Score::ZERO,
    };
}

/// Scores text against a borrowed lexicon
#[derive(Debug, Clone, Copy)]
pub struct SentimentScorer<'l> {
    lexicon: &'l Lexicon,
}

impl<'l> SentimentScorer<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &'l Lexicon {
        self.lexicon
    }

    /// Score `text`; never fails
    pub fn score(&self, text: &str) -> Sentiment {
        let normalized = text.to_lowercase();
        let (mut positive, mut negative) = (0usize, 0usize);

        for token in tokens(&normalized) {
            match self.lexicon.polarity(token) {
                Some(Polarity::Positive) => positive += 1,
                Some(Polarity::Negative) => negative += 1,
                None => {}
            }
        }

        log::trace!("positive={positive} negative={negative}");

        if positive + negative == 0 {
            return Sentiment::NEUTRAL;
        }

        let score = Score::from_counts(positive, negative);
        Sentiment {
            label: Label::from_score(score),
            score,
        }
    }
}

impl SentimentScorer<'static> {
    /// Scorer backed by the embedded default lexicon
    pub fn embedded() -> Self {
        Self::new(Lexicon::embedded())
    }
}

/// Split text into word tokens
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
}

/// Letters, digits and underscore; everything else separates tokens
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
