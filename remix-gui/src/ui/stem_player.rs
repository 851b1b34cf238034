//! # Stem Player Widget
//!
//! One playback lane: a label, a fixed display color, and an exclusively
//! owned [`Player`] handle. Lanes never share a player and never touch
//! each other's play/mute state.

use iced::widget::{button, column, container, horizontal_space, row, text, Space};
use iced::{Alignment, Color, Element, Length};
use remix_core::playback::Player;
use remix_core::StemLane;

use super::waveform::Waveform;

/// Waveform color for the upload preview lane (indigo).
pub fn preview_color() -> Color {
    Color::from_rgb8(0x4F, 0x46, 0xE5)
}

/// Fixed display color per stem label.
pub fn lane_color(lane: StemLane) -> Color {
    match lane {
        StemLane::Vocals => Color::from_rgb8(0xEC, 0x48, 0x99), // pink
        StemLane::Drums => Color::from_rgb8(0xF5, 0x9E, 0x0B),  // amber
        StemLane::Bass => Color::from_rgb8(0x8B, 0x5C, 0xF6),   // violet
        StemLane::Other => Color::from_rgb8(0x10, 0xB9, 0x81),  // green
    }
}

/// Audio binding state of one lane.
#[derive(Debug)]
enum LaneAudio {
    /// No source bound yet.
    Empty,
    /// The stem's audio is still downloading.
    Loading,
    /// Bound and playable.
    Ready(Player),
    /// Download or decode failed; other lanes are unaffected.
    Failed(String),
}

/// One waveform + playback lane.
#[derive(Debug)]
pub struct StemPlayer {
    label: &'static str,
    color: Color,
    audio: LaneAudio,
}

impl StemPlayer {
    pub fn new(label: &'static str, color: Color) -> Self {
        Self {
            label,
            color,
            audio: LaneAudio::Empty,
        }
    }

    pub fn for_lane(lane: StemLane) -> Self {
        Self::new(lane.label(), lane_color(lane))
    }

    pub fn mark_loading(&mut self) {
        self.audio = LaneAudio::Loading;
    }

    pub fn mark_failed(&mut self, reason: String) {
        self.audio = LaneAudio::Failed(reason);
    }

    /// Binds the lane to a new audio source.
    ///
    /// The previous player is released before its replacement is built, so
    /// the lane never holds two live players at once; on decode failure it
    /// holds none. Play/mute state resets to defaults on rebind.
    pub fn attach(&mut self, bytes: Vec<u8>) {
        self.audio = LaneAudio::Empty;
        self.audio = match Player::load(bytes) {
            Ok(player) => LaneAudio::Ready(player),
            Err(e) => {
                log::error!("{}: failed to bind audio: {}", self.label, e);
                LaneAudio::Failed(e.to_string())
            }
        };
    }

    /// Toggles this lane's play/pause state only.
    pub fn toggle_play(&mut self) {
        if let LaneAudio::Ready(player) = &mut self.audio {
            player.toggle_play();
        }
    }

    /// Toggles this lane's mute flag only.
    pub fn toggle_mute(&mut self) {
        if let LaneAudio::Ready(player) = &mut self.audio {
            player.toggle_mute();
        }
    }

    /// Renders the lane: header with label and mute button, waveform strip,
    /// play/pause control.
    pub fn view(
        &self,
        on_play: crate::Message,
        on_mute: crate::Message,
    ) -> Element<'static, crate::Message> {
        let mut header = row![text(self.label).size(16), horizontal_space()]
            .align_y(Alignment::Center)
            .spacing(10);

        let body: Element<'static, crate::Message> = match &self.audio {
            LaneAudio::Empty => dim_note("No audio loaded"),
            LaneAudio::Loading => dim_note("Loading stem audio..."),
            LaneAudio::Failed(reason) => {
                let note = text(format!("Unavailable: {reason}"))
                    .size(12)
                    .color(Color::from_rgb(0.9, 0.4, 0.4));
                note.into()
            }
            LaneAudio::Ready(player) => {
                header = header.push(make_mute_button(player.is_muted(), on_mute));

                let play_label = if player.is_playing() { "Pause" } else { "Play" };
                let play_button = button(text(play_label).size(12))
                    .padding([4, 10])
                    .on_press(on_play);

                column![
                    Waveform::new(player.peaks().to_vec(), self.color, player.progress())
                        .view(),
                    Space::with_height(5),
                    play_button,
                ]
                .into()
            }
        };

        container(
            column![header, Space::with_height(5), body]
                .spacing(5)
                .padding(10),
        )
        .width(Length::Fill)
        .into()
    }
}

fn dim_note(note: &'static str) -> Element<'static, crate::Message> {
    text(note)
        .size(12)
        .color(Color::from_rgb(0.6, 0.6, 0.6))
        .into()
}

/// Mute button showing the current state: green "Active", red "Muted".
fn make_mute_button(
    muted: bool,
    on_mute: crate::Message,
) -> Element<'static, crate::Message> {
    let (label, color) = if muted {
        ("Muted", Color::from_rgb(0.94, 0.27, 0.27))
    } else {
        ("Active", Color::from_rgb(0.06, 0.73, 0.51))
    };

    button(text(label).size(12))
        .padding([4, 10])
        .style(move |_theme, _status| {
            use iced::widget::button;
            button::Style {
                background: Some(iced::Background::Color(color)),
                text_color: Color::WHITE,
                ..button::Style::default()
            }
        })
        .on_press(on_mute)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Undecodable on purpose: no container format starts like this.
    fn garbage_bytes() -> Vec<u8> {
        vec![0x00, 0x01, 0x02, 0x03, 0x00, 0x01, 0x02, 0x03]
    }

    #[test]
    fn undecodable_bytes_leave_the_lane_without_a_player() {
        let mut lane = StemPlayer::for_lane(StemLane::Vocals);
        lane.mark_loading();

        lane.attach(garbage_bytes());

        // Decode failed, so the lane must hold no player at all.
        assert!(matches!(lane.audio, LaneAudio::Failed(_)));
    }

    #[test]
    fn rebind_discards_the_previous_binding() {
        let mut lane = StemPlayer::for_lane(StemLane::Drums);
        lane.mark_failed("stale download".into());

        lane.attach(garbage_bytes());

        // The old binding is gone; whatever state remains came from the
        // new attach, never from before it.
        match &lane.audio {
            LaneAudio::Failed(reason) => assert_ne!(reason, "stale download"),
            other => panic!("expected a fresh failed binding, got {other:?}"),
        }
    }

    #[test]
    fn lanes_are_built_with_their_own_label_and_color() {
        let lanes: Vec<StemPlayer> = StemLane::ALL.iter().map(|&l| StemPlayer::for_lane(l)).collect();
        let labels: Vec<&str> = lanes.iter().map(|l| l.label).collect();
        assert_eq!(labels, ["Vocals", "Drums", "Bass", "Other"]);
        assert_ne!(lanes[0].color, lanes[1].color);
    }
}
