use serde::Serialize;
use std::cmp::Ordering;

use crate::text::{word_frequencies, WordFrequency};
use crate::{ScoredComment, Sentiment};

pub const TOP_OPINION_COUNT: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct LabelStats {
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentBreakdown {
    #[serde(rename = "Positive")]
    pub positive: LabelStats,
    #[serde(rename = "Neutral")]
    pub neutral: LabelStats,
    #[serde(rename = "Negative")]
    pub negative: LabelStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopOpinions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightReport {
    pub total_comments: u64,
    pub sentiment_breakdown: SentimentBreakdown,
    pub overall_sentiment: Sentiment,
    pub overall_score: f64,
    pub top_opinions: TopOpinions,
    pub word_frequencies: Vec<WordFrequency>,
}

pub fn generate_insights(
    comments: &[ScoredComment],
    keyword: Option<&str>,
    top_words: usize,
) -> Result<InsightReport, String> {
    if comments.is_empty() {
        return Err("cannot build insights from an empty comment set".to_string());
    }

    let total = comments.len() as u64;
    let breakdown = SentimentBreakdown {
        positive: label_stats(comments, Sentiment::Positive, total),
        neutral: label_stats(comments, Sentiment::Neutral, total),
        negative: label_stats(comments, Sentiment::Negative, total),
    };

    let mean_score = comments
        .iter()
        .map(|comment| comment.compound_score)
        .sum::<f64>()
        / total as f64;

    let clean_corpus: Vec<String> = comments
        .iter()
        .map(|comment| comment.clean_text.clone())
        .collect();

    Ok(InsightReport {
        total_comments: total,
        sentiment_breakdown: breakdown,
        overall_sentiment: Sentiment::from_score(mean_score),
        overall_score: round3(mean_score),
        top_opinions: top_opinions(comments, keyword),
        word_frequencies: word_frequencies(&clean_corpus, top_words),
    })
}

fn label_stats(comments: &[ScoredComment], label: Sentiment, total: u64) -> LabelStats {
    let count = comments
        .iter()
        .filter(|comment| comment.sentiment == label)
        .count() as u64;
    LabelStats {
        count,
        percentage: round2(count as f64 / total as f64 * 100.0),
    }
}

fn top_opinions(comments: &[ScoredComment], keyword: Option<&str>) -> TopOpinions {
    if let Some(keyword) = keyword.filter(|value| !value.trim().is_empty()) {
        let needle = keyword.to_lowercase();
        let matched: Vec<&ScoredComment> = comments
            .iter()
            .filter(|comment| comment.text.to_lowercase().contains(&needle))
            .collect();

        if !matched.is_empty() {
            return TopOpinions {
                focus: Some(keyword.to_string()),
                message: None,
                positive: highest(&matched, TOP_OPINION_COUNT),
                negative: lowest(&matched, TOP_OPINION_COUNT),
            };
        }

        let all: Vec<&ScoredComment> = comments.iter().collect();
        return TopOpinions {
            focus: None,
            message: Some(format!(
                "No comments found containing the keyword: '{}'. Showing general opinions.",
                keyword
            )),
            positive: highest(&all, TOP_OPINION_COUNT),
            negative: lowest(&all, TOP_OPINION_COUNT),
        };
    }

    let all: Vec<&ScoredComment> = comments.iter().collect();
    TopOpinions {
        focus: Some("General".to_string()),
        message: None,
        positive: highest(&all, TOP_OPINION_COUNT),
        negative: lowest(&all, TOP_OPINION_COUNT),
    }
}

fn highest(comments: &[&ScoredComment], limit: usize) -> Vec<String> {
    let mut sorted = comments.to_vec();
    sorted.sort_by(|a, b| {
        b.compound_score
            .partial_cmp(&a.compound_score)
            .unwrap_or(Ordering::Equal)
    });
    sorted
        .into_iter()
        .take(limit)
        .map(|comment| comment.text.clone())
        .collect()
}

fn lowest(comments: &[&ScoredComment], limit: usize) -> Vec<String> {
    let mut sorted = comments.to_vec();
    sorted.sort_by(|a, b| {
        a.compound_score
            .partial_cmp(&b.compound_score)
            .unwrap_or(Ordering::Equal)
    });
    sorted
        .into_iter()
        .take(limit)
        .map(|comment| comment.text.clone())
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
