/// One entry in the fixed model menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelTier {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub model_key: &'static str,
    pub icon: &'static str,
    pub thinking: bool,
}

pub const MODEL_TIERS: &[ModelTier] = &[
    ModelTier {
        id: "fast",
        name: "מהיר",
        description: "ברירת מחדל ותגובה מיידית",
        model_key: "gemini-3-flash-preview",
        icon: "⚡",
        thinking: false,
    },
    ModelTier {
        id: "plus",
        name: "פלוס",
        description: "שיפור ביכולות ואיזון מושלם",
        model_key: "gemini-3-flash-preview",
        icon: "✨",
        thinking: false,
    },
    ModelTier {
        id: "pro",
        name: "פרו",
        description: "ביצועים גבוהים למשימות מורכבות",
        model_key: "gemini-3-pro-preview",
        icon: "💎",
        thinking: false,
    },
    ModelTier {
        id: "smart",
        name: "חכם",
        description: "הכי טוב - יכולות חשיבה מעמיקות",
        model_key: "gemini-3-pro-preview",
        icon: "🧠",
        thinking: true,
    },
    ModelTier {
        id: "creator",
        name: "יוצר",
        description: "יצירת תמונות, וידאו, קוד ותוכן יצירתי",
        model_key: "gemini-3-pro-image-preview",
        icon: "🎨",
        thinking: false,
    },
];

pub fn tier_by_id(id: &str) -> Option<&'static ModelTier> {
    MODEL_TIERS.iter().find(|t| t.id == id)
}

/// The tier selected at startup.
pub fn default_tier() -> &'static ModelTier {
    &MODEL_TIERS[0]
}
