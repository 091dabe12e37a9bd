use once_cell::sync::Lazy;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::text::normalize;
use crate::{ScoredComment, Sentiment};

// Lexicon load is the expensive part; one analyzer serves the whole process
// and is only ever read after initialization.
static VADER: Lazy<SentimentIntensityAnalyzer<'static>> =
    Lazy::new(|| SentimentIntensityAnalyzer::new());

pub fn compound_score(text: &str) -> f64 {
    let scores = VADER.polarity_scores(text);
    scores.get("compound").copied().unwrap_or(0.0)
}

pub fn score_comment(text: &str) -> ScoredComment {
    let compound = compound_score(text);
    ScoredComment {
        text: text.to_string(),
        clean_text: normalize(text),
        compound_score: compound,
        sentiment: Sentiment::from_score(compound),
    }
}

pub fn score_comments(comments: &[String]) -> Vec<ScoredComment> {
    comments.iter().map(|text| score_comment(text)).collect()
}
