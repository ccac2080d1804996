//! Fixed prompt and reply text. The persona always answers in Hebrew, so
//! the user-facing strings live here in Hebrew as well.

/// Persona and tone directive sent as the system instruction on every
/// conversational request.
pub const PERSONA_INSTRUCTION: &str = "אתה אייבן, עוזר אישי בעברית. ענה תמיד בעברית טבעית ומרגיעה. אל תשתמש ביותר מדי עיצוב טקסט, שמור על תשובות ברורות וקצרות אלא אם התבקשת אחרת.";

/// Appended to the system instruction on the plus tier.
pub const PLUS_INSTRUCTION_SUFFIX: &str = " תן תשובות מפורטות, חכמות ומאוזנות יותר ממצב רגיל.";

/// Thinking budget passed on tiers with the thinking flag.
pub const THINKING_BUDGET: u32 = 1024;

/// Image model used when the request text triggers the image path but the
/// creator tier is not selected.
pub const FALLBACK_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Reply text when an image came back with no accompanying text.
pub const IMAGE_REPLY_TEXT: &str = "הנה התמונה שיצרתי עבורך:";

/// Reply text when the image call produced neither text nor image.
pub const IMAGE_FAILURE_TEXT: &str = "לא הצלחתי ליצור תמונה.";

/// Prefix for the bot message content on any failed turn.
pub const ERROR_PREFIX: &str = "אירעה שגיאה: ";

pub fn error_reply(description: &str) -> String {
    format!("{}{}", ERROR_PREFIX, description)
}
