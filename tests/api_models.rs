use ivan::api::{chunk_text, collect_parts, fold_parts, GenerateResponse, Part};
use serde_json::json;

#[test]
fn test_stream_chunk_text_extraction() {
    let chunk: GenerateResponse = serde_json::from_value(json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": "Hel" }]
            }
        }]
    }))
    .unwrap();

    assert_eq!(chunk_text(&chunk), "Hel");
}

#[test]
fn test_text_parts_concatenate_in_order() {
    let response: GenerateResponse = serde_json::from_value(json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": "של" }, { "text": "ום" }]
            }
        }]
    }))
    .unwrap();

    assert_eq!(chunk_text(&response), "שלום");
}

#[test]
fn test_inline_data_folds_to_data_uri() {
    let response: GenerateResponse = serde_json::from_value(json!({
        "candidates": [{
            "content": {
                "parts": [
                    { "inlineData": { "mimeType": "image/png", "data": "QUJD" } },
                    { "text": "הנה" }
                ]
            }
        }]
    }))
    .unwrap();

    let folded = fold_parts(&collect_parts(&response));
    assert_eq!(folded.text, "הנה");
    assert_eq!(
        folded.image_url.as_deref(),
        Some("data:image/png;base64,QUJD")
    );
}

#[test]
fn test_fold_without_parts_is_empty() {
    let folded = fold_parts(&[]);
    assert!(folded.text.is_empty());
    assert!(folded.image_url.is_none());
}

#[test]
fn test_missing_candidates_yield_no_parts() {
    let response: GenerateResponse = serde_json::from_value(json!({})).unwrap();
    assert!(collect_parts(&response).is_empty());

    let empty: GenerateResponse =
        serde_json::from_value(json!({ "candidates": [] })).unwrap();
    assert!(collect_parts(&empty).is_empty());
}

#[test]
fn test_candidate_without_content_is_skipped() {
    let response: GenerateResponse = serde_json::from_value(json!({
        "candidates": [
            {},
            { "content": { "parts": [{ "text": "בסדר" }] } }
        ]
    }))
    .unwrap();

    assert_eq!(chunk_text(&response), "בסדר");
}

#[test]
fn test_part_roundtrip_keeps_variant() {
    let inline: Part = serde_json::from_value(json!({
        "inlineData": { "mimeType": "image/png", "data": "QUJD" }
    }))
    .unwrap();
    assert!(matches!(inline, Part::Inline { .. }));

    let text: Part = serde_json::from_value(json!({ "text": "שלום" })).unwrap();
    assert!(matches!(text, Part::Text { .. }));
}
