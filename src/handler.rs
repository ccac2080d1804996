use crate::api::models::ChatConfig;
use crate::api::response::fold_parts;
use crate::api::Backend;
use crate::error::Result;
use crate::intent::is_image_request;
use crate::models::{BotPatch, Message, MessageStatus, ModelTier};
use crate::prompts;
use crate::session::SessionHistory;
use crate::ui::output;
use colored::*;

/// Execute exactly one request/response cycle: ensure a target session,
/// append the user turn with its bot placeholder, then resolve the
/// placeholder through either the image path or the streaming text path.
///
/// Returns the id of the session the turn landed in (created lazily when
/// `session_id` is `None`). Failures never propagate: they terminate the
/// bot message with an error status and leave the rest of the session
/// untouched. Callers must not start another turn before this one
/// resolves.
pub async fn run_turn<B: Backend>(
    backend: &B,
    history: &mut SessionHistory,
    session_id: Option<String>,
    tier: &ModelTier,
    text: &str,
    verbose: bool,
) -> String {
    let text = text.trim();

    let session_id = match session_id {
        Some(id) => id,
        None => history.create_session(text),
    };

    // Optimistic update: the user turn and the streaming placeholder are
    // visible before the backend is contacted.
    let user = Message::user(text);
    let bot = Message::bot_placeholder();
    let bot_id = bot.id.clone();
    history.append_turn(&session_id, user, bot);

    let result = if tier.id == "creator" || is_image_request(text) {
        run_image_turn(backend, history, &session_id, &bot_id, tier, text, verbose).await
    } else {
        run_text_turn(backend, history, &session_id, &bot_id, tier, text, verbose).await
    };

    if let Err(e) = result {
        let reply = prompts::error_reply(&e.to_string());
        history.update_bot_message(&session_id, &bot_id, BotPatch::error(reply.clone()));
        output::print_turn_error(&reply);
    }

    session_id
}

/// Single non-streaming call; the whole reply lands in one terminal patch.
async fn run_image_turn<B: Backend>(
    backend: &B,
    history: &mut SessionHistory,
    session_id: &str,
    bot_id: &str,
    tier: &ModelTier,
    text: &str,
    verbose: bool,
) -> Result<()> {
    let image_model = if tier.id == "creator" {
        tier.model_key
    } else {
        prompts::FALLBACK_IMAGE_MODEL
    };

    if verbose {
        eprintln!(
            "{}",
            format!("[ivan] Image path via model: {}", image_model).dimmed()
        );
    }

    let parts = backend.generate_once(image_model, text).await?;
    let folded = fold_parts(&parts);

    let reply_text = if !folded.text.is_empty() {
        folded.text.clone()
    } else if folded.image_url.is_some() {
        prompts::IMAGE_REPLY_TEXT.to_string()
    } else {
        prompts::IMAGE_FAILURE_TEXT.to_string()
    };

    history.update_bot_message(
        session_id,
        bot_id,
        BotPatch::complete(reply_text.clone(), folded.image_url.clone()),
    );
    output::print_image_reply(&reply_text, folded.image_url.as_deref());

    Ok(())
}

/// Streaming call; the bot message is rewritten with the running buffer
/// on every fragment, then closed out with a status-only patch.
async fn run_text_turn<B: Backend>(
    backend: &B,
    history: &mut SessionHistory,
    session_id: &str,
    bot_id: &str,
    tier: &ModelTier,
    text: &str,
    verbose: bool,
) -> Result<()> {
    let mut system_instruction = prompts::PERSONA_INSTRUCTION.to_string();
    if tier.id == "plus" {
        system_instruction.push_str(prompts::PLUS_INSTRUCTION_SUFFIX);
    }

    let config = ChatConfig {
        system_instruction,
        thinking_budget: tier.thinking.then_some(prompts::THINKING_BUDGET),
    };

    if verbose {
        eprintln!(
            "{}",
            format!("[ivan] Using model: {}", tier.model_key).dimmed()
        );
        if config.thinking_budget.is_some() {
            eprintln!("{}", "[ivan] Thinking: enabled".dimmed());
        }
    }

    let mut buffer = String::new();
    let mut on_fragment = |fragment: &str| {
        buffer.push_str(fragment);
        history.update_bot_message(session_id, bot_id, BotPatch::content(buffer.clone()));
        output::print_fragment(fragment);
    };

    backend
        .stream_reply(tier.model_key, &config, text, &mut on_fragment)
        .await?;
    drop(on_fragment);

    history.update_bot_message(session_id, bot_id, BotPatch::status(MessageStatus::Complete));
    output::end_stream();

    Ok(())
}
