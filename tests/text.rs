use commentscope::extract_video_id;
use commentscope::text::{normalize, word_frequencies};

#[test]
fn normalize_lowercases_and_drops_punctuation() {
    let cleaned = normalize("Amazing VIDEO quality!!!");
    assert_eq!(cleaned, "amazing video quality");
}

#[test]
fn normalize_strips_url_tokens() {
    let cleaned = normalize("Watch here https://example.com/watch and www.example.com please");
    assert!(!cleaned.contains("http"));
    assert!(!cleaned.contains("www"));
    assert!(!cleaned.contains("example"));
}

#[test]
fn normalize_drops_stop_words_and_short_tokens() {
    let cleaned = normalize("I think it is a great camera");
    assert!(!cleaned.split_whitespace().any(|word| word == "i"));
    assert!(!cleaned.split_whitespace().any(|word| word == "it"));
    assert!(!cleaned.split_whitespace().any(|word| word == "is"));
    assert!(cleaned.contains("great"));
    assert!(cleaned.contains("camera"));
}

#[test]
fn normalize_drops_digits_and_emoji() {
    let cleaned = normalize("12345 🎉🎉 crisp footage 4k60");
    assert_eq!(cleaned, "crisp footage");
}

#[test]
fn normalize_can_empty_out_entirely() {
    assert_eq!(normalize("I a 123 !!! https://x.co"), "");
    assert_eq!(normalize(""), "");
}

#[test]
fn word_frequencies_counts_across_corpus() {
    let corpus = vec![
        "camera camera lens".to_string(),
        "camera lens".to_string(),
        "tripod".to_string(),
    ];
    let frequencies = word_frequencies(&corpus, 50);

    assert_eq!(frequencies[0].text, "camera");
    assert_eq!(frequencies[0].value, 3);
    assert_eq!(frequencies[1].text, "lens");
    assert_eq!(frequencies[1].value, 2);
    assert_eq!(frequencies[2].text, "tripod");
    assert_eq!(frequencies[2].value, 1);
}

#[test]
fn word_frequencies_respects_cap() {
    let corpus = vec!["alpha beta gamma delta epsilon".to_string()];
    let frequencies = word_frequencies(&corpus, 2);
    assert_eq!(frequencies.len(), 2);
}

#[test]
fn word_frequencies_breaks_ties_lexically() {
    let corpus = vec!["zebra apple".to_string()];
    let frequencies = word_frequencies(&corpus, 50);
    assert_eq!(frequencies[0].text, "apple");
    assert_eq!(frequencies[1].text, "zebra");
}

#[test]
fn word_frequencies_empty_corpus_yields_empty_list() {
    assert!(word_frequencies(&[], 50).is_empty());
    assert!(word_frequencies(&[String::new(), String::new()], 50).is_empty());
}

#[test]
fn extracts_id_from_watch_url() {
    let id = extract_video_id("https://youtube.com/watch?v=abc123");
    assert_eq!(id.as_deref(), Some("abc123"));
}

#[test]
fn extracts_id_from_watch_url_with_extra_params() {
    let id = extract_video_id("https://www.youtube.com/watch?v=abc123&t=30s");
    assert_eq!(id.as_deref(), Some("abc123"));

    let id = extract_video_id("https://www.youtube.com/watch?feature=share&v=abc123");
    assert_eq!(id.as_deref(), Some("abc123"));
}

#[test]
fn extracts_id_from_short_url() {
    let id = extract_video_id("https://youtu.be/abc123");
    assert_eq!(id.as_deref(), Some("abc123"));

    let id = extract_video_id("https://youtu.be/abc123?si=xyz");
    assert_eq!(id.as_deref(), Some("abc123"));
}

#[test]
fn unrecognized_url_yields_none() {
    assert!(extract_video_id("https://example.com/video/42").is_none());
    assert!(extract_video_id("not a url").is_none());
    assert!(extract_video_id("https://youtube.com/watch?v=").is_none());
}
