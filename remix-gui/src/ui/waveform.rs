//! # Waveform Widget
//!
//! Canvas rendering of one audio source's min/max peak columns in the
//! lane's display color, with a playhead line at the current position.

use iced::widget::canvas::{self, Geometry, Path, Stroke};
use iced::widget::container;
use iced::{mouse, Color, Element, Point, Rectangle, Renderer, Theme};

/// Drawing height of the waveform strip.
const WAVEFORM_HEIGHT: f32 = 60.0;

/// Vertical headroom so full-scale peaks stay inside the strip.
const AMPLITUDE_SCALE: f32 = 0.9;

/// Waveform strip for one audio source.
pub struct Waveform {
    /// One (min, max) pair per column, both in -1.0..=1.0
    peaks: Vec<(f32, f32)>,
    color: Color,
    /// Playhead position, 0.0..=1.0
    progress: f32,
}

impl Waveform {
    pub fn new(peaks: Vec<(f32, f32)>, color: Color, progress: f32) -> Self {
        Self {
            peaks,
            color,
            progress,
        }
    }

    pub fn view(self) -> Element<'static, crate::Message> {
        container(
            canvas::Canvas::new(self)
                .width(iced::Length::Fill)
                .height(iced::Length::Fixed(WAVEFORM_HEIGHT)),
        )
        .into()
    }
}

impl<Message> canvas::Program<Message> for Waveform {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        if !bounds.width.is_finite() || !bounds.height.is_finite() || self.peaks.is_empty() {
            return vec![frame.into_geometry()];
        }

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::from_rgb(0.10, 0.10, 0.12));

        let center_y = bounds.height / 2.0;
        let column_width = (bounds.width / self.peaks.len() as f32).max(1.0);

        for (i, &(min, max)) in self.peaks.iter().enumerate() {
            let x = i as f32 * column_width;
            if x >= bounds.width {
                break;
            }

            let y_top = center_y - max.clamp(-1.0, 1.0) * center_y * AMPLITUDE_SCALE;
            let y_bottom = center_y - min.clamp(-1.0, 1.0) * center_y * AMPLITUDE_SCALE;

            if y_top.is_finite() && y_bottom.is_finite() {
                // Keep at least one pixel of ink for near-silent columns.
                let y_bottom = y_bottom.max(y_top + 1.0);
                frame.stroke(
                    &Path::line(Point::new(x, y_top), Point::new(x, y_bottom)),
                    Stroke::default()
                        .with_color(self.color)
                        .with_width(column_width.min(2.0)),
                );
            }
        }

        let playhead_x = self.progress.clamp(0.0, 1.0) * bounds.width;
        frame.stroke(
            &Path::line(
                Point::new(playhead_x, 0.0),
                Point::new(playhead_x, bounds.height),
            ),
            Stroke::default()
                .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.8))
                .with_width(1.0),
        );

        vec![frame.into_geometry()]
    }
}
