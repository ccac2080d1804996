//! Interaction state. All UI-facing state lives in one immutable struct;
//! every user action is a pure transition returning the next state plus
//! at most one effect for the driver to execute.

use crate::models::{default_tier, tier_by_id};

/// Mutually-exclusive panels; opening one closes the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Sessions,
    Models,
    Connections,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

/// Mock sign-in: a single fixed profile, no real identity flow.
pub fn mock_login() -> UserProfile {
    UserProfile {
        name: "יובל".to_string(),
        email: "yuval@gmail.com".to_string(),
    }
}

/// One integration row in the connections panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub id: &'static str,
    pub name: &'static str,
}

pub const CONNECTIONS: &[Connection] = &[
    Connection { id: "gmail", name: "Gmail" },
    Connection { id: "drive", name: "Google Drive" },
    Connection { id: "calendar", name: "יומן גוגל" },
    Connection { id: "photos", name: "גוגל תמונות" },
    Connection { id: "tasks", name: "תזכורות גוגל" },
    Connection { id: "home", name: "בית חכם" },
    Connection { id: "docs", name: "Google Docs" },
    Connection { id: "sheets", name: "Google Sheets" },
    Connection { id: "slides", name: "Google Slides" },
    Connection { id: "maps", name: "גוגל מפות" },
    Connection { id: "meet", name: "Google Meet" },
    Connection { id: "youtube", name: "YouTube" },
];

pub fn connection_by_id(id: &str) -> Option<&'static Connection> {
    CONNECTIONS.iter().find(|c| c.id == id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetInput(String),
    SubmitInput,
    NewChat,
    SelectSession(String),
    SelectModel(String),
    SetSearch(String),
    ToggleMenu(Menu),
    CloseMenus,
    RequestLogin,
    Login,
    /// A dispatched turn resolved (successfully or not) in this session.
    TurnFinished(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand the text to the response handler.
    Dispatch(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub current_session_id: Option<String>,
    pub active_tier_id: &'static str,
    pub input: String,
    pub open_menu: Option<Menu>,
    pub search_query: String,
    pub user: Option<UserProfile>,
    pub show_login_prompt: bool,
    /// One request in flight at a time; send is refused while set.
    pub busy: bool,
}

impl AppState {
    pub fn new(active_tier_id: &'static str) -> Self {
        Self {
            current_session_id: None,
            active_tier_id,
            input: String::new(),
            open_menu: None,
            search_query: String::new(),
            user: None,
            show_login_prompt: false,
            busy: false,
        }
    }

    /// Pure transition. The returned effect, if any, is executed by the
    /// driver; this layer never touches the store or the network.
    pub fn apply(&self, action: Action) -> (AppState, Option<Effect>) {
        let mut next = self.clone();

        match action {
            Action::SetInput(text) => {
                next.input = text;
            }
            Action::SubmitInput => {
                let trimmed = next.input.trim().to_string();
                if trimmed.is_empty() || next.busy {
                    return (next, None);
                }
                next.input.clear();
                next.open_menu = None;
                next.busy = true;
                return (next, Some(Effect::Dispatch(trimmed)));
            }
            Action::NewChat => {
                next.current_session_id = None;
                next.open_menu = None;
                next.input.clear();
            }
            Action::SelectSession(id) => {
                next.current_session_id = Some(id);
                next.open_menu = None;
            }
            Action::SelectModel(id) => {
                if let Some(tier) = tier_by_id(&id) {
                    next.active_tier_id = tier.id;
                }
                next.open_menu = None;
            }
            Action::SetSearch(query) => {
                next.search_query = query;
            }
            Action::ToggleMenu(menu) => {
                next.open_menu = if next.open_menu == Some(menu) {
                    None
                } else {
                    Some(menu)
                };
                next.show_login_prompt = false;
            }
            Action::CloseMenus => {
                next.open_menu = None;
                next.show_login_prompt = false;
            }
            Action::RequestLogin => {
                if next.user.is_none() {
                    next.show_login_prompt = true;
                }
            }
            Action::Login => {
                next.user = Some(mock_login());
                next.show_login_prompt = false;
                next.open_menu = None;
            }
            Action::TurnFinished(session_id) => {
                next.current_session_id = Some(session_id);
                next.busy = false;
            }
        }

        (next, None)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(default_tier().id)
    }
}
