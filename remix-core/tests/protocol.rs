// tests/protocol.rs
//
// Wire-format checks for the two service responses. Deserialization is
// strict: a body missing an expected field is rejected whole.

use remix_core::types::RemixResponse;
use remix_core::{ApiClient, StemLane, TrackAnalysis};

#[test]
fn remix_response_binds_each_lane_to_its_url() {
    let body = r#"{"stems":{"vocals":"a","drums":"b","bass":"c","other":"d"}}"#;
    let parsed: RemixResponse = serde_json::from_str(body).expect("valid remix body");

    let stems = parsed.stems;
    assert_eq!(stems.url(StemLane::Vocals), "a");
    assert_eq!(stems.url(StemLane::Drums), "b");
    assert_eq!(stems.url(StemLane::Bass), "c");
    assert_eq!(stems.url(StemLane::Other), "d");
}

#[test]
fn lane_labels_are_stable() {
    let labels: Vec<&str> = StemLane::ALL.iter().map(|l| l.label()).collect();
    assert_eq!(labels, ["Vocals", "Drums", "Bass", "Other"]);
}

#[test]
fn analysis_fields_parse_verbatim() {
    let body =
        r#"{"filename":"x.mp3","bpm":128,"spectral_centroid":4200,"mood":"energetic"}"#;
    let report: TrackAnalysis = serde_json::from_str(body).expect("valid analysis body");

    assert_eq!(report.filename, "x.mp3");
    assert_eq!(report.bpm, 128.0);
    assert_eq!(report.spectral_centroid, 4200.0);
    assert_eq!(report.mood, "energetic");
}

#[test]
fn missing_stem_key_rejects_the_whole_response() {
    let body = r#"{"stems":{"vocals":"a","drums":"b","bass":"c"}}"#;
    assert!(serde_json::from_str::<RemixResponse>(body).is_err());
}

#[test]
fn missing_analysis_field_rejects_the_whole_response() {
    let body = r#"{"filename":"x.mp3","bpm":128,"mood":"energetic"}"#;
    assert!(serde_json::from_str::<TrackAnalysis>(body).is_err());
}

#[test]
fn relative_stem_urls_resolve_against_the_base() {
    let client = ApiClient::new("http://localhost:8000/");
    assert_eq!(client.base_url(), "http://localhost:8000");

    assert_eq!(
        client.absolute("/stems/vocals.wav"),
        "http://localhost:8000/stems/vocals.wav"
    );
    assert_eq!(
        client.absolute("stems/vocals.wav"),
        "http://localhost:8000/stems/vocals.wav"
    );
    assert_eq!(
        client.absolute("http://cdn.example/v.wav"),
        "http://cdn.example/v.wav"
    );
}
