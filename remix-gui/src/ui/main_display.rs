//! # Main Display Module
//!
//! This module contains the main display components and layout logic for
//! the remix client. Everything here is a pure function of the session
//! snapshot and the per-widget playback state.

use iced::widget::{button, column, container, horizontal_space, row, text, Space};
use iced::{Alignment, Color, Element, Length};
use remix_core::{ActiveResult, StemLane, TrackAnalysis, UploadSession};

use super::stem_player::StemPlayer;
use crate::{Job, Message};

/// Creates the complete main application view.
pub fn create_main_view(
    session: &UploadSession,
    pending: Option<Job>,
    error: Option<&str>,
    preview: &StemPlayer,
    stem_lanes: Option<&[StemPlayer]>,
) -> Element<'static, Message> {
    let title = text("Remix Engine").size(28);
    let subtitle =
        text("Upload a song to separate stems or analyze its tempo and mood.").size(14);

    let mut content = column![
        title,
        subtitle,
        Space::with_height(10),
        create_upload_panel(session, pending),
    ]
    .spacing(10)
    .max_width(900.0);

    if let Some(message) = error {
        content = content.push(create_error_banner(message));
    }

    if session.selected().is_some() {
        content = content.push(create_preview_panel(preview));
    }

    match session.result() {
        Some(ActiveResult::Separation(_)) => {
            if let Some(lanes) = stem_lanes {
                content = content.push(create_stems_panel(lanes));
            }
        }
        Some(ActiveResult::Analysis(report)) => {
            content = content.push(create_analysis_panel(report));
        }
        None => {}
    }

    container(content.padding(20))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

/// Creates the upload row: file picker, selected filename, submit triggers.
///
/// Both triggers are disabled while no file is selected or a request is in
/// flight; the in-flight trigger shows a progress caption.
fn create_upload_panel(
    session: &UploadSession,
    pending: Option<Job>,
) -> Element<'static, Message> {
    let pick_button = button(text("Choose File").size(14))
        .padding([6, 10])
        .on_press(Message::PickFile);

    let file_label = session
        .selected()
        .map(|f| f.name.clone())
        .unwrap_or_else(|| "No file selected".to_string());

    let remix_caption = if pending == Some(Job::Separate) {
        "Separating stems..."
    } else {
        "Separate Stems"
    };
    let mut remix_button = button(text(remix_caption).size(14)).padding([6, 10]);
    if session.can_submit() {
        remix_button = remix_button.on_press(Message::SubmitRemix);
    }

    let analyze_caption = if pending == Some(Job::Analyze) {
        "Analyzing track..."
    } else {
        "Analyze Track"
    };
    let mut analyze_button = button(text(analyze_caption).size(14)).padding([6, 10]);
    if session.can_submit() {
        analyze_button = analyze_button.on_press(Message::SubmitAnalyze);
    }

    row![
        pick_button,
        text(file_label).size(14),
        horizontal_space(),
        remix_button,
        Space::with_width(5),
        analyze_button,
    ]
    .align_y(Alignment::Center)
    .spacing(10)
    .into()
}

/// Creates the dismissible error banner.
fn create_error_banner(message: &str) -> Element<'static, Message> {
    let banner = row![
        text(message.to_string()).size(14),
        horizontal_space(),
        button(text("Dismiss").size(12))
            .padding([4, 10])
            .on_press(Message::DismissError),
    ]
    .align_y(Alignment::Center)
    .spacing(10)
    .padding(10);

    container(banner)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(iced::Background::Color(Color::from_rgb(0.45, 0.12, 0.12))),
            text_color: Some(Color::WHITE),
            ..container::Style::default()
        })
        .into()
}

/// Creates the preview panel for the currently selected file.
fn create_preview_panel(preview: &StemPlayer) -> Element<'static, Message> {
    column![
        text("Preview").size(18),
        Space::with_height(5),
        preview.view(Message::TogglePreviewPlay, Message::TogglePreviewMute),
    ]
    .spacing(5)
    .into()
}

/// Creates the separation result panel: one lane per stem, in display
/// order, each bound to its own playback handle.
fn create_stems_panel(lanes: &[StemPlayer]) -> Element<'static, Message> {
    let lane_rows = StemLane::ALL.iter().copied().zip(lanes).fold(
        column![].spacing(10),
        |col, (lane, player)| {
            col.push(player.view(
                Message::ToggleStemPlay(lane),
                Message::ToggleStemMute(lane),
            ))
        },
    );

    column![text("Your Stems").size(18), Space::with_height(5), lane_rows]
        .spacing(5)
        .into()
}

/// Creates the analysis result panel. Fields render verbatim; the numbers
/// are not reformatted.
fn create_analysis_panel(report: &TrackAnalysis) -> Element<'static, Message> {
    let fields = column![
        make_field_row("File", report.filename.clone()),
        make_field_row("BPM", format!("{}", report.bpm)),
        make_field_row("Spectral centroid", format!("{}", report.spectral_centroid)),
        make_field_row("Mood", report.mood.clone()),
    ]
    .spacing(8)
    .padding(10);

    column![text("Track Analysis").size(18), Space::with_height(5), fields]
        .spacing(5)
        .into()
}

fn make_field_row(label: &'static str, value: String) -> Element<'static, Message> {
    row![
        text(label).size(14).width(Length::Fixed(160.0)),
        text(value).size(14),
    ]
    .spacing(10)
    .into()
}
