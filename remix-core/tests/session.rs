// tests/session.rs

use remix_core::{ActiveResult, StemSet, TrackAnalysis, UploadSession};

fn sample_stems() -> StemSet {
    StemSet {
        vocals: "/stems/vocals.wav".into(),
        drums: "/stems/drums.wav".into(),
        bass: "/stems/bass.wav".into(),
        other: "/stems/other.wav".into(),
    }
}

#[test]
fn submit_without_file_is_a_no_op() {
    let mut session = UploadSession::new();

    assert!(session.begin_submit().is_none());
    assert!(!session.is_busy(), "busy must stay false with no file");
    assert!(session.result().is_none());
}

#[test]
fn submit_while_busy_is_refused() {
    let mut session = UploadSession::new();
    session.select_file("song.mp3", vec![1, 2, 3]);

    let first = session.begin_submit();
    assert!(first.is_some());
    assert!(session.is_busy());

    // Second trigger while in flight must not hand out the file again.
    assert!(session.begin_submit().is_none());
    assert!(session.is_busy());
}

#[test]
fn success_stores_the_result_and_clears_busy() {
    let mut session = UploadSession::new();
    session.select_file("song.mp3", vec![0; 16]);
    session.begin_submit().unwrap();

    session.finish_success(ActiveResult::Separation(sample_stems()));

    assert!(!session.is_busy());
    assert_eq!(
        session.result(),
        Some(&ActiveResult::Separation(sample_stems()))
    );
}

#[test]
fn failure_clears_busy_and_preserves_prior_result() {
    let mut session = UploadSession::new();
    session.select_file("song.mp3", vec![0; 16]);

    session.begin_submit().unwrap();
    session.finish_success(ActiveResult::Separation(sample_stems()));

    // A later request fails: the earlier result must survive untouched.
    session.begin_submit().unwrap();
    session.finish_failure();

    assert!(!session.is_busy());
    assert_eq!(
        session.result(),
        Some(&ActiveResult::Separation(sample_stems()))
    );
}

#[test]
fn new_success_overwrites_the_previous_result() {
    let mut session = UploadSession::new();
    session.select_file("song.mp3", vec![0; 16]);

    session.begin_submit().unwrap();
    session.finish_success(ActiveResult::Separation(sample_stems()));

    let report = TrackAnalysis {
        filename: "song.mp3".into(),
        bpm: 128.0,
        spectral_centroid: 4200.0,
        mood: "energetic".into(),
    };
    session.begin_submit().unwrap();
    session.finish_success(ActiveResult::Analysis(report.clone()));

    assert_eq!(session.result(), Some(&ActiveResult::Analysis(report)));
}

#[test]
fn selecting_a_new_file_replaces_the_old_one() {
    let mut session = UploadSession::new();
    session.select_file("first.mp3", vec![1]);
    session.select_file("second.mp3", vec![2]);

    let selected = session.selected().expect("a file is selected");
    assert_eq!(selected.name, "second.mp3");
    assert_eq!(*selected.data, vec![2]);
}

#[test]
fn can_submit_tracks_selection_and_busy() {
    let mut session = UploadSession::new();
    assert!(!session.can_submit());

    session.select_file("song.mp3", vec![0; 4]);
    assert!(session.can_submit());

    session.begin_submit().unwrap();
    assert!(!session.can_submit());

    session.finish_failure();
    assert!(session.can_submit());
}
