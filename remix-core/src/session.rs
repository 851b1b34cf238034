//! Upload session state.
//!
//! The session is the single source of truth the GUI renders from. All
//! mutation goes through explicit transition functions, so the invariants
//! (one request in flight, failure leaves the previous result untouched)
//! live here and not in button wiring.

use std::sync::Arc;

use crate::types::ActiveResult;

/// The file the user picked, with its payload shared so worker threads
/// can upload it without copying.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: String,
    pub data: Arc<Vec<u8>>,
}

/// State of one upload/analysis session.
#[derive(Debug, Default)]
pub struct UploadSession {
    selected: Option<SelectedFile>,
    busy: bool,
    result: Option<ActiveResult>,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selected file. The caller rebinds any preview widget;
    /// the previous payload is released when its last `Arc` drops.
    pub fn select_file(&mut self, name: impl Into<String>, data: Vec<u8>) -> SelectedFile {
        let file = SelectedFile {
            name: name.into(),
            data: Arc::new(data),
        };
        self.selected = Some(file.clone());
        file
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether the submit triggers should be enabled.
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.busy
    }

    /// Claims the session for one request. Returns the file to upload, or
    /// `None` when nothing is selected or a request is already in flight.
    /// The busy flag is mutual exclusion, not a queue: a second trigger
    /// while busy is simply refused.
    pub fn begin_submit(&mut self) -> Option<SelectedFile> {
        if self.busy {
            return None;
        }
        let file = self.selected.clone()?;
        self.busy = true;
        Some(file)
    }

    /// Records a successful response, replacing any prior result.
    pub fn finish_success(&mut self, result: ActiveResult) {
        self.busy = false;
        self.result = Some(result);
    }

    /// Clears the busy flag after a failed request. Any prior result is
    /// left untouched.
    pub fn finish_failure(&mut self) {
        self.busy = false;
    }

    pub fn result(&self) -> Option<&ActiveResult> {
        self.result.as_ref()
    }
}
