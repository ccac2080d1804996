use ivan::api::{Backend, ChatConfig, InlineData, Part};
use ivan::error::{IvanError, Result};
use ivan::handler::run_turn;
use ivan::models::{tier_by_id, MessageStatus, Role};
use ivan::prompts::{ERROR_PREFIX, IMAGE_FAILURE_TEXT, IMAGE_REPLY_TEXT};
use ivan::session::{FilesystemSessionStore, SessionHistory};
use std::cell::RefCell;
use tempfile::TempDir;

enum Script {
    Stream(Vec<&'static str>),
    StreamThenFail(Vec<&'static str>),
    Image(Vec<Part>),
}

struct FakeBackend {
    script: Script,
    calls: RefCell<Vec<String>>,
}

impl FakeBackend {
    fn new(script: Script) -> Self {
        Self {
            script,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Backend for FakeBackend {
    async fn generate_once(&self, model: &str, _prompt: &str) -> Result<Vec<Part>> {
        self.calls.borrow_mut().push(format!("image:{}", model));
        match &self.script {
            Script::Image(parts) => Ok(parts.clone()),
            _ => Err(IvanError::EmptyResponse),
        }
    }

    async fn stream_reply(
        &self,
        model: &str,
        _config: &ChatConfig,
        _message: &str,
        on_fragment: &mut dyn FnMut(&str),
    ) -> Result<String> {
        self.calls.borrow_mut().push(format!("text:{}", model));
        match &self.script {
            Script::Stream(fragments) => {
                let mut full = String::new();
                for fragment in fragments {
                    full.push_str(fragment);
                    on_fragment(fragment);
                }
                Ok(full)
            }
            Script::StreamThenFail(fragments) => {
                for fragment in fragments {
                    on_fragment(fragment);
                }
                Err(IvanError::Other("connection reset".to_string()))
            }
            Script::Image(_) => Err(IvanError::EmptyResponse),
        }
    }
}

fn new_history(dir: &TempDir) -> SessionHistory {
    SessionHistory::load(
        Box::new(FilesystemSessionStore::with_dir(dir.path())),
        false,
    )
}

#[tokio::test]
async fn test_streaming_turn_creates_session_and_completes() {
    let dir = TempDir::new().unwrap();
    let mut history = new_history(&dir);
    let backend = FakeBackend::new(Script::Stream(vec!["של", "ום עולם"]));
    let tier = tier_by_id("fast").unwrap();

    let session_id = run_turn(&backend, &mut history, None, tier, "שלום", false).await;

    let session = history.session(&session_id).unwrap();
    assert_eq!(session.title, "שלום");
    assert_eq!(session.messages.len(), 2);
    assert_eq!(session.messages[0].role, Role::User);
    assert_eq!(session.messages[0].content, "שלום");
    assert_eq!(session.messages[1].role, Role::Bot);
    assert_eq!(session.messages[1].content, "שלום עולם");
    assert_eq!(session.messages[1].status, Some(MessageStatus::Complete));
    assert_eq!(*backend.calls.borrow(), ["text:gemini-3-flash-preview"]);
}

#[tokio::test]
async fn test_image_intent_routes_image_path_on_any_tier() {
    let dir = TempDir::new().unwrap();
    let mut history = new_history(&dir);
    let backend = FakeBackend::new(Script::Image(vec![Part::Inline {
        inline_data: InlineData {
            mime_type: "image/png".to_string(),
            data: "QUJD".to_string(),
        },
    }]));
    let tier = tier_by_id("fast").unwrap();

    let session_id = run_turn(&backend, &mut history, None, tier, "תצייר חתום", false).await;

    let message = &history.session(&session_id).unwrap().messages[1];
    assert_eq!(message.content, IMAGE_REPLY_TEXT);
    assert_eq!(
        message.image_url.as_deref(),
        Some("data:image/png;base64,QUJD")
    );
    assert_eq!(message.status, Some(MessageStatus::Complete));
    assert_eq!(*backend.calls.borrow(), ["image:gemini-2.5-flash-image"]);
}

#[tokio::test]
async fn test_creator_tier_uses_its_own_image_model() {
    let dir = TempDir::new().unwrap();
    let mut history = new_history(&dir);
    let backend = FakeBackend::new(Script::Image(vec![Part::Text {
        text: "הנה סקיצה".to_string(),
    }]));
    let tier = tier_by_id("creator").unwrap();

    let session_id = run_turn(&backend, &mut history, None, tier, "נוף הרים", false).await;

    let message = &history.session(&session_id).unwrap().messages[1];
    assert_eq!(message.content, "הנה סקיצה");
    assert!(message.image_url.is_none());
    assert_eq!(*backend.calls.borrow(), ["image:gemini-3-pro-image-preview"]);
}

#[tokio::test]
async fn test_image_turn_without_parts_falls_back() {
    let dir = TempDir::new().unwrap();
    let mut history = new_history(&dir);
    let backend = FakeBackend::new(Script::Image(vec![]));
    let tier = tier_by_id("creator").unwrap();

    let session_id = run_turn(&backend, &mut history, None, tier, "נוף", false).await;

    let message = &history.session(&session_id).unwrap().messages[1];
    assert_eq!(message.content, IMAGE_FAILURE_TEXT);
    assert!(message.image_url.is_none());
    assert_eq!(message.status, Some(MessageStatus::Complete));
}

#[tokio::test]
async fn test_mid_stream_failure_marks_error() {
    let dir = TempDir::new().unwrap();
    let mut history = new_history(&dir);
    let backend = FakeBackend::new(Script::StreamThenFail(vec!["Hel"]));
    let tier = tier_by_id("fast").unwrap();

    let session_id = run_turn(&backend, &mut history, None, tier, "hello", false).await;

    let session = history.session(&session_id).unwrap();
    assert_eq!(session.messages[0].content, "hello");
    assert_eq!(session.messages[1].status, Some(MessageStatus::Error));
    assert!(session.messages[1].content.starts_with(ERROR_PREFIX));
    assert!(session.messages[1].content.contains("connection reset"));
}

#[tokio::test]
async fn test_second_turn_appends_to_same_session() {
    let dir = TempDir::new().unwrap();
    let mut history = new_history(&dir);
    let backend = FakeBackend::new(Script::Stream(vec!["בסדר"]));
    let tier = tier_by_id("fast").unwrap();

    let session_id = run_turn(&backend, &mut history, None, tier, "ראשון", false).await;
    run_turn(
        &backend,
        &mut history,
        Some(session_id.clone()),
        tier,
        "שני",
        false,
    )
    .await;

    let session = history.session(&session_id).unwrap();
    assert_eq!(history.sessions().len(), 1);
    assert_eq!(session.messages.len(), 4);
    assert_eq!(session.messages[2].content, "שני");
}

#[tokio::test]
async fn test_input_is_trimmed_before_titling() {
    let dir = TempDir::new().unwrap();
    let mut history = new_history(&dir);
    let backend = FakeBackend::new(Script::Stream(vec!["היי"]));
    let tier = tier_by_id("fast").unwrap();

    let session_id = run_turn(&backend, &mut history, None, tier, "  שלום  ", false).await;

    let session = history.session(&session_id).unwrap();
    assert_eq!(session.title, "שלום");
    assert_eq!(session.messages[0].content, "שלום");
}
