use serde::Deserialize;

/// Identity of one separated lane, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StemLane {
    Vocals,
    Drums,
    Bass,
    Other,
}

impl StemLane {
    /// All lanes in the order the result view renders them.
    pub const ALL: [StemLane; 4] = [
        StemLane::Vocals,
        StemLane::Drums,
        StemLane::Bass,
        StemLane::Other,
    ];

    /// Position of the lane in [`StemLane::ALL`].
    pub fn index(self) -> usize {
        match self {
            StemLane::Vocals => 0,
            StemLane::Drums => 1,
            StemLane::Bass => 2,
            StemLane::Other => 3,
        }
    }

    /// Display label for the lane.
    pub fn label(self) -> &'static str {
        match self {
            StemLane::Vocals => "Vocals",
            StemLane::Drums => "Drums",
            StemLane::Bass => "Bass",
            StemLane::Other => "Other",
        }
    }
}

/// The four stem URLs returned by the separation service.
/// Immutable once received; a later success replaces the whole set.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StemSet {
    pub vocals: String,
    pub drums: String,
    pub bass: String,
    pub other: String,
}

impl StemSet {
    /// URL of one lane's audio.
    pub fn url(&self, lane: StemLane) -> &str {
        match lane {
            StemLane::Vocals => &self.vocals,
            StemLane::Drums => &self.drums,
            StemLane::Bass => &self.bass,
            StemLane::Other => &self.other,
        }
    }
}

/// Envelope of the `/remix` response body.
#[derive(Debug, Deserialize)]
pub struct RemixResponse {
    pub stems: StemSet,
}

/// Tempo/mood report returned by the analysis service.
/// All fields render verbatim; the numbers are not reformatted.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TrackAnalysis {
    pub filename: String,
    pub bpm: f64,
    pub spectral_centroid: f64,
    pub mood: String,
}

/// The one result a session may hold at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveResult {
    Separation(StemSet),
    Analysis(TrackAnalysis),
}
