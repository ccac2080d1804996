//! Image-intent detection: a prompt that asks for a picture is routed to
//! image generation even on a conversational tier.

pub const IMAGE_KEYWORDS: &[&str] = &[
    "תמונה",
    "תצייר",
    "תייצר תמונה",
    "צייר",
    "תמונה אמיתית",
    "צור",
    "image",
    "generate image",
    "picture",
    "draw",
    "visualize",
];

pub fn is_image_request(text: &str) -> bool {
    let lower_text = text.to_lowercase();

    IMAGE_KEYWORDS
        .iter()
        .any(|&keyword| lower_text.contains(keyword))
}
