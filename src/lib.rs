pub mod config;
pub mod insights;
pub mod sentiment;
pub mod text;

use serde::{Deserialize, Serialize};

pub const POSITIVE_THRESHOLD: f64 = 0.05;
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn from_score(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredComment {
    pub text: String,
    pub clean_text: String,
    pub compound_score: f64,
    pub sentiment: Sentiment,
}

pub fn extract_video_id(url: &str) -> Option<String> {
    for marker in ["?v=", "&v="] {
        if let Some(pos) = url.find(marker) {
            let start = pos + marker.len();
            let end = url[start..]
                .find('&')
                .map(|offset| start + offset)
                .unwrap_or(url.len());
            let id = &url[start..end];
            if !id.is_empty() {
                return Some(decode_id(id));
            }
        }
    }

    if let Some(pos) = url.find("youtu.be/") {
        let start = pos + "youtu.be/".len();
        let end = url[start..]
            .find(|c: char| c == '/' || c == '?' || c == '&')
            .map(|offset| start + offset)
            .unwrap_or(url.len());
        let id = &url[start..end];
        if !id.is_empty() {
            return Some(decode_id(id));
        }
    }

    None
}

fn decode_id(value: &str) -> String {
    if value.contains('%') {
        match urlencoding::decode(value) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => value.to_string(),
        }
    } else {
        value.to_string()
    }
}
