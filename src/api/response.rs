use crate::api::models::{GenerateResponse, Part};

/// Folded image-path reply: text parts concatenated in order, plus the
/// image (if any) as a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedReply {
    pub text: String,
    pub image_url: Option<String>,
}

/// Fold a part sequence. Text parts concatenate in order; the last inline
/// image wins.
pub fn fold_parts(parts: &[Part]) -> FoldedReply {
    let mut text = String::new();
    let mut image_url = None;

    for part in parts {
        match part {
            Part::Inline { inline_data } => {
                image_url = Some(format!(
                    "data:{};base64,{}",
                    inline_data.mime_type, inline_data.data
                ));
            }
            Part::Text { text: fragment } => text.push_str(fragment),
        }
    }

    FoldedReply { text, image_url }
}

/// All parts across candidates, response order preserved.
pub fn collect_parts(response: &GenerateResponse) -> Vec<Part> {
    response
        .candidates
        .iter()
        .flatten()
        .filter_map(|candidate| candidate.content.as_ref())
        .flat_map(|content| content.parts.iter().cloned())
        .collect()
}

/// Concatenated text fragments carried by one streaming chunk.
pub fn chunk_text(chunk: &GenerateResponse) -> String {
    collect_parts(chunk)
        .iter()
        .filter_map(|part| match part {
            Part::Text { text } => Some(text.as_str()),
            Part::Inline { .. } => None,
        })
        .collect()
}
