use crate::app::{UserProfile, CONNECTIONS};
use crate::models::{MessageStatus, Role, Session, MODEL_TIERS};
use colored::*;
use std::io::{self, Write};

const BOT_LABEL: &str = "אייבן";
const USER_LABEL: &str = "אתה";

pub fn print_greeting(user: Option<&UserProfile>) {
    match user {
        Some(user) => println!("{}", format!("שלום {},", user.name).bold()),
        None => println!("{}", BOT_LABEL.bold()),
    }
    println!("{}", "איך אוכל לעזור?".dimmed());
    println!("{}", "פקודות: /help".dimmed());
}

pub fn print_bot_prefix() {
    print!("{} ", format!("{} ›", BOT_LABEL).cyan().bold());
    let _ = io::stdout().flush();
}

pub fn print_fragment(fragment: &str) {
    print!("{}", fragment);
    let _ = io::stdout().flush();
}

pub fn end_stream() {
    println!();
}

pub fn print_image_reply(text: &str, image_url: Option<&str>) {
    println!("{}", text);
    if let Some(url) = image_url {
        let preview: String = url.chars().take(48).collect();
        println!("{}", format!("[תמונה] {}…", preview).dimmed());
    }
}

pub fn print_turn_error(reply: &str) {
    println!("{}", reply.red());
}

pub fn print_sessions(sessions: &[&Session], current_id: Option<&str>) {
    if sessions.is_empty() {
        println!("{}", "אין שיחות שמורות.".dimmed());
        return;
    }

    println!("{}", "היסטוריית שיחות".bold());
    for (index, session) in sessions.iter().enumerate() {
        let marker = if current_id == Some(session.id.as_str()) {
            "●"
        } else {
            " "
        };
        let title = if session.title.is_empty() {
            "שיחה ללא כותרת"
        } else {
            &session.title
        };
        println!(
            "{} {} {}",
            marker.cyan(),
            format!("[{}] {}", index + 1, title),
            session
                .timestamp
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .dimmed()
        );
    }
}

pub fn print_transcript(session: &Session) {
    println!("{}", session.title.bold());
    for message in &session.messages {
        match message.role {
            Role::User => {
                println!("{} {}", format!("{} ›", USER_LABEL).green().bold(), message.content);
            }
            Role::Bot => {
                let prefix = format!("{} ›", BOT_LABEL).cyan().bold();
                match message.status {
                    Some(MessageStatus::Error) => {
                        println!("{} {}", prefix, message.content.red());
                    }
                    Some(MessageStatus::Streaming) => {
                        println!("{} {}", prefix, format!("{}…", message.content).dimmed());
                    }
                    _ => println!("{} {}", prefix, message.content),
                }
                if let Some(url) = &message.image_url {
                    let preview: String = url.chars().take(48).collect();
                    println!("{}", format!("[תמונה] {}…", preview).dimmed());
                }
            }
        }
    }
}

pub fn print_model_menu(active_tier_id: &str) {
    println!("{}", "בחר מודל".bold());
    for tier in MODEL_TIERS {
        let marker = if tier.id == active_tier_id { "●" } else { " " };
        println!(
            "{} {} {} {}",
            marker.cyan(),
            tier.icon,
            format!("{} ({})", tier.name, tier.id).bold(),
            tier.description.dimmed()
        );
    }
}

pub fn print_connections(user: Option<&UserProfile>) {
    println!("{}", "חיבורים".bold());
    for connection in CONNECTIONS {
        let status = if user.is_some() {
            "מחובר".green()
        } else {
            format!("/connect {}", connection.id).dimmed()
        };
        println!("  {} {}", connection.name, status);
    }
}

pub fn print_login_prompt() {
    println!("{}", "נדרשת התחברות".bold());
    println!("{}", "כדי להשתמש בשירות זה עליך להיכנס דרך גוגל: /login".dimmed());
}

pub fn print_logged_in(user: &UserProfile) {
    println!("{}", format!("מחובר: {} <{}>", user.name, user.email).green());
}

pub fn print_help() {
    println!("{}", "פקודות:".bold());
    println!("{}", "  /new              שיחה חדשה".dimmed());
    println!("{}", "  /sessions         היסטוריית שיחות".dimmed());
    println!("{}", "  /search <טקסט>    חיפוש בהיסטוריה".dimmed());
    println!("{}", "  /chat <מספר>      מעבר לשיחה מהרשימה".dimmed());
    println!("{}", "  /model [מזהה]     בחירת מודל".dimmed());
    println!("{}", "  /connections      חיבורים".dimmed());
    println!("{}", "  /connect <מזהה>   חיבור שירות".dimmed());
    println!("{}", "  /login            התחברות".dimmed());
    println!("{}", "  /quit             יציאה".dimmed());
}
