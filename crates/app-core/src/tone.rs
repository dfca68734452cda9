//! Data model for the remote sentiment service response.
//!
//! The service returns a JSON document with a list of detected tones; only
//! `tone_id` and `score` matter here. Identifiers outside the closed
//! [`EmotionId`] set are preserved in [`ToneScore`] and skipped later by the
//! generator rather than rejected at parse time.

use serde::Deserialize;

#[derive(thiserror::Error, Debug)]
pub enum ToneError {
    #[error("malformed tone response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One detected tone: a service-assigned identifier and an intensity in [0, 1].
#[derive(Clone, Debug, Deserialize)]
pub struct ToneScore {
    pub tone_id: String,
    pub score: f32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DocumentTone {
    pub tones: Vec<ToneScore>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ToneResponse {
    pub document_tone: DocumentTone,
}

impl ToneResponse {
    pub fn parse(body: &str) -> Result<Self, ToneError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn into_scores(self) -> Vec<ToneScore> {
        self.document_tone.tones
    }
}

/// The closed set of emotions the visualizer knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EmotionId {
    Anger,
    Fear,
    Joy,
    Sadness,
    Analytical,
    Confident,
    Tentative,
}

impl EmotionId {
    pub const ALL: [EmotionId; 7] = [
        EmotionId::Anger,
        EmotionId::Fear,
        EmotionId::Joy,
        EmotionId::Sadness,
        EmotionId::Analytical,
        EmotionId::Confident,
        EmotionId::Tentative,
    ];

    /// Resolve a service `tone_id`; unknown identifiers map to `None`.
    pub fn from_tone_id(id: &str) -> Option<EmotionId> {
        match id {
            "anger" => Some(EmotionId::Anger),
            "fear" => Some(EmotionId::Fear),
            "joy" => Some(EmotionId::Joy),
            "sadness" => Some(EmotionId::Sadness),
            "analytical" => Some(EmotionId::Analytical),
            "confident" => Some(EmotionId::Confident),
            "tentative" => Some(EmotionId::Tentative),
            _ => None,
        }
    }

    /// Human-readable label for the result panel.
    pub fn label(self) -> &'static str {
        match self {
            EmotionId::Anger => "anger",
            EmotionId::Fear => "fear",
            EmotionId::Joy => "joy",
            EmotionId::Sadness => "sadness",
            EmotionId::Analytical => "analytical",
            EmotionId::Confident => "confident",
            EmotionId::Tentative => "tentative",
        }
    }
}
