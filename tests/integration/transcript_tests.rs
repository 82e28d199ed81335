//! Watch-page transcript provider against a mock site

use crate::common::fast_fetcher;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yt_harvest::transcript::{fetch_caption, TranscriptProvider, WatchPageTranscripts};

fn watch_page(base_url: &str) -> String {
    format!(
        r#"<html><head><title>Video</title></head><body>
<script>var ytInitialPlayerResponse = {{"captions":{{"playerCaptionsTracklistRenderer":{{"captionTracks":[
{{"baseUrl":"{base}/api/timedtext?v=vid1&lang=en&kind=asr","name":{{"simpleText":"English (auto-generated)"}},"languageCode":"en","kind":"asr"}},
{{"baseUrl":"{base}/api/timedtext?v=vid1&lang=fr","name":{{"simpleText":"French"}},"languageCode":"fr"}}
]}}}}}};</script>
</body></html>"#,
        base = base_url
    )
}

const TIMED_TEXT: &str = r#"<?xml version="1.0" encoding="utf-8" ?><transcript>
<text start="0.0" dur="1.5">Hello</text>
<text start="1.5" dur="2.0">generated   world</text>
</transcript>"#;

#[tokio::test]
async fn test_generated_track_in_preferred_language_wins() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/watch"))
        .and(query_param("v", "vid1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(watch_page(&mock_server.uri())))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/timedtext"))
        .and(query_param("lang", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TIMED_TEXT))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = WatchPageTranscripts::new(fast_fetcher(), &mock_server.uri());
    let caption = fetch_caption(&provider, "vid1", &["en".to_string()])
        .await
        .expect("A caption should be found");

    assert_eq!(caption.language_code, "en");
    assert_eq!(caption.language_name, "English (auto-generated)");
    assert_eq!(caption.text, "Hello generated world");
}

#[tokio::test]
async fn test_falls_back_to_manual_track_in_other_language() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/watch"))
        .respond_with(ResponseTemplate::new(200).set_body_string(watch_page(&mock_server.uri())))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/timedtext"))
        .and(query_param("lang", "fr"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<transcript><text start="0" dur="1">Bonjour</text></transcript>"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = WatchPageTranscripts::new(fast_fetcher(), &mock_server.uri());
    let caption = fetch_caption(&provider, "vid1", &["de".to_string()])
        .await
        .unwrap();

    assert_eq!(caption.language_code, "fr");
    assert_eq!(caption.text, "Bonjour");
}

#[tokio::test]
async fn test_missing_tracks_yield_no_caption() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/watch"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>no player</body></html>"))
        .mount(&mock_server)
        .await;

    let provider = WatchPageTranscripts::new(fast_fetcher(), &mock_server.uri());
    assert!(provider.list_tracks("vid1").await.is_err());
    assert!(fetch_caption(&provider, "vid1", &["en".to_string()]).await.is_none());
}

#[tokio::test]
async fn test_watch_page_error_yields_no_caption() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/watch"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = WatchPageTranscripts::new(fast_fetcher(), &mock_server.uri());
    assert!(fetch_caption(&provider, "vid1", &["en".to_string()]).await.is_none());
}
