// remix-core/src/lib.rs

//! The core logic for the remix client.
//! This crate owns the upload session state, the HTTP client for the
//! separation and analysis services, and the playback handles that the
//! waveform widgets wrap. It is completely headless
//! and contains no GUI code.

pub mod client;
pub mod error;
pub mod peaks;
pub mod playback;
pub mod session;
pub mod types;

pub use client::ApiClient;
pub use error::{RemixError, Result};
pub use session::{SelectedFile, UploadSession};
pub use types::{ActiveResult, StemLane, StemSet, TrackAnalysis};
