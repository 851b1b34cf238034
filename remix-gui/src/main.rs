//! # Remix - Stem Separation & Track Analysis GUI
//!
//! This module contains the main GUI application for the remix client.
//! The user picks an audio file, uploads it to the separation or analysis
//! service, and plays the returned stems with per-lane waveform widgets.
//!
//! ## Architecture
//! - **Main Thread**: Iced GUI application with dark theme
//! - **Worker Threads**: One short-lived thread per network call
//! - **Communication**: Crossbeam channel for thread-safe result delivery
//! - **Updates**: Timer subscription drains worker events and refreshes
//!   playhead positions

mod ui;

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use iced::{self, Element, Subscription, Theme};
use remix_core::{
    ActiveResult, ApiClient, RemixError, StemLane, StemSet, TrackAnalysis, UploadSession,
};
use ui::main_display::create_main_view;
use ui::stem_player::{self, StemPlayer};

/// How often the GUI drains the worker event channel and refreshes
/// playhead positions.
const TICK_INTERVAL_MS: u64 = 100;

/// Main entry point for the remix client.
///
/// Initializes logging and the Iced application with dark theme and the
/// periodic update subscription.
pub fn main() -> iced::Result {
    env_logger::init();
    log::info!("starting remix client");
    let result = iced::application("Remix", RemixApp::update, RemixApp::view)
        .subscription(RemixApp::subscription)
        .theme(RemixApp::theme)
        .run();
    log::info!("remix client finished: {result:?}");
    result
}

/// Application message types for the Iced GUI framework.
#[derive(Debug, Clone)]
pub enum Message {
    // Upload controls
    PickFile,      // Open the native file dialog
    SubmitRemix,   // POST the selected file to /remix
    SubmitAnalyze, // POST the selected file to /analyze
    DismissError,  // Close the error banner

    // Per-widget playback controls
    TogglePreviewPlay,
    TogglePreviewMute,
    ToggleStemPlay(StemLane),
    ToggleStemMute(StemLane),

    // Continuous update message
    Tick, // Timer tick for channel draining and playhead refresh
}

/// Which request is currently in flight, for button captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    Separate,
    Analyze,
}

/// Outcome of one worker thread, delivered over the event channel.
#[derive(Debug)]
enum WorkerEvent {
    RemixFinished(Result<StemSet, RemixError>),
    AnalyzeFinished(Result<TrackAnalysis, RemixError>),
    StemFetched(StemLane, Result<Vec<u8>, RemixError>),
}

/// Main application state for the remix client.
///
/// The session is the single source of truth for upload state; the view is
/// a pure function of it plus the per-widget playback handles.
struct RemixApp {
    session: UploadSession,
    client: Arc<ApiClient>,

    // Worker thread communication
    events_rx: Receiver<WorkerEvent>,
    events_tx: Sender<WorkerEvent>,
    pending: Option<Job>,

    // Playback widgets: one preview, four lanes when a separation is active
    preview: StemPlayer,
    stem_lanes: Option<Vec<StemPlayer>>,

    // Error banner text, if any
    error: Option<String>,
}

impl Default for RemixApp {
    fn default() -> Self {
        let (events_tx, events_rx) = crossbeam_channel::unbounded();
        let client = ApiClient::from_env();
        log::info!("using service base {}", client.base_url());
        Self {
            session: UploadSession::new(),
            client: Arc::new(client),
            events_rx,
            events_tx,
            pending: None,
            preview: StemPlayer::new("Preview", stem_player::preview_color()),
            stem_lanes: None,
            error: None,
        }
    }
}

impl RemixApp {
    /// Handles application state updates based on incoming messages.
    fn update(&mut self, message: Message) {
        match message {
            Message::PickFile => self.pick_file(),
            Message::SubmitRemix => self.submit(Job::Separate),
            Message::SubmitAnalyze => self.submit(Job::Analyze),
            Message::DismissError => {
                self.error = None;
            }
            Message::TogglePreviewPlay => self.preview.toggle_play(),
            Message::TogglePreviewMute => self.preview.toggle_mute(),
            Message::ToggleStemPlay(lane) => {
                if let Some(player) = self.lane_mut(lane) {
                    player.toggle_play();
                }
            }
            Message::ToggleStemMute(lane) => {
                if let Some(player) = self.lane_mut(lane) {
                    player.toggle_mute();
                }
            }
            Message::Tick => {
                // Collect first so event handling may borrow self mutably.
                let events: Vec<WorkerEvent> = self.events_rx.try_iter().collect();
                for event in events {
                    self.process_worker_event(event);
                }
            }
        }
    }

    /// Opens the native file dialog and rebinds the session + preview to
    /// the chosen file.
    fn pick_file(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Audio", &["mp3", "wav", "flac", "ogg", "m4a"])
            .add_filter("All files", &["*"])
            .pick_file();

        let Some(path) = picked else { return };
        match std::fs::read(&path) {
            Ok(bytes) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "upload".to_string());
                log::info!("selected {} ({} bytes)", name, bytes.len());
                let file = self.session.select_file(name, bytes);
                // Rebind the preview widget to the new source; the old
                // player is released inside attach before the new one is
                // created.
                self.preview.attach(file.data.as_ref().clone());
            }
            Err(e) => {
                log::error!("failed to read {}: {}", path.display(), e);
                self.error = Some(format!("Could not read file: {e}"));
            }
        }
    }

    /// Claims the session and spawns one worker thread for the request.
    /// A no-op when nothing is selected or a request is already in flight.
    fn submit(&mut self, job: Job) {
        let Some(file) = self.session.begin_submit() else {
            return;
        };
        self.pending = Some(job);
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        thread::spawn(move || {
            // If the app has exited, the send fails and the outcome is
            // discarded (the request is never cancelled mid-flight).
            let _ = match job {
                Job::Separate => tx.send(WorkerEvent::RemixFinished(client.separate(&file))),
                Job::Analyze => tx.send(WorkerEvent::AnalyzeFinished(client.analyze(&file))),
            };
        });
    }

    /// Processes a single worker outcome on the GUI thread.
    fn process_worker_event(&mut self, event: WorkerEvent) {
        match event {
            WorkerEvent::RemixFinished(Ok(stems)) => {
                log::info!("separation finished");
                self.pending = None;
                self.session
                    .finish_success(ActiveResult::Separation(stems.clone()));
                self.spawn_stem_fetches(stems);
            }
            WorkerEvent::RemixFinished(Err(e)) => {
                log::error!("separation failed: {e}");
                self.pending = None;
                self.session.finish_failure();
                self.error = Some(format!("Stem separation failed: {e}"));
            }
            WorkerEvent::AnalyzeFinished(Ok(report)) => {
                log::info!("analysis finished for {}", report.filename);
                self.pending = None;
                self.session
                    .finish_success(ActiveResult::Analysis(report));
                // Only one result is active at a time; drop any stem lanes.
                self.stem_lanes = None;
            }
            WorkerEvent::AnalyzeFinished(Err(e)) => {
                log::error!("analysis failed: {e}");
                self.pending = None;
                self.session.finish_failure();
                self.error = Some(format!("Track analysis failed: {e}"));
            }
            WorkerEvent::StemFetched(lane, Ok(bytes)) => {
                if let Some(player) = self.lane_mut(lane) {
                    player.attach(bytes);
                }
            }
            WorkerEvent::StemFetched(lane, Err(e)) => {
                // One bad stem degrades only its own lane.
                log::error!("fetch of {} stem failed: {e}", lane.label());
                if let Some(player) = self.lane_mut(lane) {
                    player.mark_failed(e.to_string());
                }
            }
        }
    }

    /// Builds the four lane widgets and spawns one worker that downloads
    /// each stem's audio in display order.
    fn spawn_stem_fetches(&mut self, stems: StemSet) {
        self.stem_lanes = Some(
            StemLane::ALL
                .iter()
                .map(|&lane| {
                    let mut player = StemPlayer::for_lane(lane);
                    player.mark_loading();
                    player
                })
                .collect(),
        );

        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        thread::spawn(move || {
            for lane in StemLane::ALL {
                let outcome = client.fetch_audio(stems.url(lane));
                if tx.send(WorkerEvent::StemFetched(lane, outcome)).is_err() {
                    break;
                }
            }
        });
    }

    fn lane_mut(&mut self, lane: StemLane) -> Option<&mut StemPlayer> {
        self.stem_lanes.as_mut()?.get_mut(lane.index())
    }

    /// Renders the main application interface.
    ///
    /// Delegates all UI rendering to the main_display module, keeping this
    /// function focused on application logic only.
    fn view(&self) -> Element<'_, Message> {
        create_main_view(
            &self.session,
            self.pending,
            self.error.as_deref(),
            &self.preview,
            self.stem_lanes.as_deref(),
        )
    }

    /// Creates a subscription for continuous application updates.
    fn subscription(&self) -> Subscription<Message> {
        iced::time::every(std::time::Duration::from_millis(TICK_INTERVAL_MS))
            .map(|_| Message::Tick)
    }

    /// Returns the application theme.
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
