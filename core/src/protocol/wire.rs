use serde::{Deserialize, Serialize};

/// Request body for `POST /api/recognize`.
#[derive(Debug, Clone, Serialize)]
pub struct RecognizeRequest {
    #[serde(rename = "imageBase64")]
    pub image_base64: String,
}

/// One labelled probability. The sequence order is owned by the service
/// (descending probability) and is never re-sorted client side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub label: String,
    pub probability: f64,
}

/// Response body of the recognition endpoint.
///
/// `topScores` and `normalizedImageBase64` are the service's optional
/// fields; a missing list means no scores and a missing preview means no
/// preview. Any other shape violation fails the typed parse and surfaces as
/// a transport error.
#[derive(Debug, Clone, Deserialize)]
pub struct RecognizeResponse {
    pub prediction: String,
    #[serde(default, rename = "topScores")]
    pub top_scores: Vec<Score>,
    #[serde(default, rename = "normalizedImageBase64")]
    pub normalized_image_base64: Option<String>,
}

impl RecognizeResponse {
    /// Probability of the service's best score, when any scores came back.
    pub fn top_confidence(&self) -> Option<f64> {
        self.top_scores.first().map(|score| score.probability)
    }
}
