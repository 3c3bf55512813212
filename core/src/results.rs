//! Full-replace reducer for the displayed recognition result.

use crate::canvas::encode;
use crate::protocol::{RecognizeResponse, Score};
use crate::RecognizeResult;

/// Shown for prediction and confidence when there is nothing to display.
pub const PLACEHOLDER: &str = "—";

const STATUS_WAITING: &str = "Waiting for input...";
const STATUS_SENDING: &str = "Sending to model...";
const STATUS_DONE: &str = "Recognition complete.";
const STATUS_CLEARED: &str = "Canvas cleared.";

/// The displayed result state. [`ResultPanel::finish`] and
/// [`ResultPanel::reset`] replace every field together, so no stale field
/// can survive a later outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub prediction: String,
    pub confidence: String,
    pub scores: Vec<Score>,
    /// Decode-verified PNG bytes of the service's normalized input, when the
    /// response carried a usable preview.
    pub preview_png: Option<Vec<u8>>,
    pub status: String,
    /// True while a recognition request is outstanding; gates the trigger.
    pub busy: bool,
}

impl ResultPanel {
    pub fn new() -> Self {
        Self {
            prediction: PLACEHOLDER.into(),
            confidence: PLACEHOLDER.into(),
            scores: Vec::new(),
            preview_png: None,
            status: STATUS_WAITING.into(),
            busy: false,
        }
    }

    /// Marks one recognition request as outstanding.
    pub fn begin_request(&mut self) {
        self.busy = true;
        self.status = STATUS_SENDING.into();
    }

    /// Applies the outcome of a finished request. All fields are replaced
    /// and `busy` is cleared on every branch, so the trigger can never stay
    /// disabled after a failure.
    pub fn finish(&mut self, outcome: RecognizeResult<RecognizeResponse>) {
        match outcome {
            Ok(response) => {
                self.confidence = response
                    .top_confidence()
                    .map(format_confidence)
                    .unwrap_or_else(|| PLACEHOLDER.into());
                self.preview_png = response
                    .normalized_image_base64
                    .as_deref()
                    .and_then(encode::decode_image_data_uri);
                self.prediction = response.prediction;
                self.scores = response.top_scores;
                self.status = STATUS_DONE.into();
            }
            Err(err) => {
                self.prediction = PLACEHOLDER.into();
                self.confidence = PLACEHOLDER.into();
                self.scores = Vec::new();
                self.preview_png = None;
                self.status = format!("Failed to recognize: {err}");
            }
        }
        self.busy = false;
    }

    /// Returns the panel to its placeholder values after the surface was
    /// cleared. An outstanding request keeps the trigger gated until its
    /// outcome arrives, so `busy` survives the reset.
    pub fn reset(&mut self) {
        *self = Self {
            status: STATUS_CLEARED.into(),
            busy: self.busy,
            ..Self::new()
        };
    }
}

impl Default for ResultPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a probability as a percentage with one decimal, e.g. `92.0%`.
pub fn format_confidence(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// One score-list line, e.g. `7 • 92.0%`.
pub fn format_score(score: &Score) -> String {
    format!("{} • {}", score.label, format_confidence(score.probability))
}
