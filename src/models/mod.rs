mod session;
mod tier;

pub use session::{
    new_id, truncate_title, BotPatch, Message, MessageStatus, Role, Session, TITLE_MAX_CHARS,
};
pub use tier::{default_tier, tier_by_id, ModelTier, MODEL_TIERS};
