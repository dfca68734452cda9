// Host-side tests for tone response parsing.

use app_core::{EmotionId, ToneResponse};

const SAMPLE: &str = r#"{
  "document_tone": {
    "tones": [
      { "tone_id": "joy", "score": 0.62 },
      { "tone_id": "tentative", "score": 0.91 },
      { "tone_id": "identity_hate", "score": 0.13 }
    ]
  }
}"#;

#[test]
fn parses_tones_in_document_order() {
    let scores = ToneResponse::parse(SAMPLE).unwrap().into_scores();
    assert_eq!(scores.len(), 3);
    assert_eq!(scores[0].tone_id, "joy");
    assert!((scores[0].score - 0.62).abs() < 1e-6);
    assert_eq!(scores[1].tone_id, "tentative");
    // Unknown ids survive parsing; the generator skips them later
    assert_eq!(scores[2].tone_id, "identity_hate");
}

#[test]
fn extra_fields_are_ignored() {
    let body = r#"{
      "document_tone": { "tones": [ { "tone_id": "anger", "score": 0.5, "tone_name": "Anger" } ] },
      "sentences_tone": []
    }"#;
    let scores = ToneResponse::parse(body).unwrap().into_scores();
    assert_eq!(scores.len(), 1);
}

#[test]
fn empty_tone_list_is_valid() {
    let scores = ToneResponse::parse(r#"{ "document_tone": { "tones": [] } }"#)
        .unwrap()
        .into_scores();
    assert!(scores.is_empty());
}

#[test]
fn malformed_body_is_an_error() {
    assert!(ToneResponse::parse("<html>busy</html>").is_err());
    assert!(ToneResponse::parse("{}").is_err());
    assert!(ToneResponse::parse(r#"{ "document_tone": {} }"#).is_err());
}

#[test]
fn emotion_ids_resolve_from_service_identifiers() {
    for emotion in EmotionId::ALL {
        assert_eq!(EmotionId::from_tone_id(emotion.label()), Some(emotion));
    }
    assert_eq!(EmotionId::from_tone_id("Joy"), None, "ids are lowercase");
    assert_eq!(EmotionId::from_tone_id("serenity"), None);
}
