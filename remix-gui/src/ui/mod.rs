//! # UI Module
//!
//! This module contains all UI components for the remix client.

pub mod main_display;
pub mod stem_player;
pub mod waveform;
