use clap::Parser;
use colored::*;
use std::io::{self, BufRead, Write};
use std::process;

use ivan::api::GeminiClient;
use ivan::app::{connection_by_id, Action, AppState, Effect, Menu};
use ivan::cli::Args;
use ivan::config::Config;
use ivan::handler::run_turn;
use ivan::models::{tier_by_id, Session};
use ivan::session::{FilesystemSessionStore, SessionHistory};
use ivan::ui::output;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let mut history = SessionHistory::load(
        Box::new(FilesystemSessionStore::new()),
        config.verbose,
    );

    // Listing modes read the store and exit without touching the backend.
    if args.list_sessions {
        let sessions: Vec<&Session> = history.sessions().iter().collect();
        output::print_sessions(&sessions, None);
        return Ok(());
    }
    if let Some(query) = &args.search {
        let matches = history.search(query);
        output::print_sessions(&matches, None);
        return Ok(());
    }

    let backend = match GeminiClient::new(
        &config.api_key,
        &config.api_endpoint,
        config.stream_timeout,
        config.verbose,
    ) {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    // One-shot mode: a single turn against the most recent session (or a
    // fresh one with -n), then exit.
    if !args.message.is_empty() {
        let message = args.message.join(" ");
        let session_id = if args.new_conversation {
            None
        } else {
            history.sessions().first().map(|s| s.id.clone())
        };

        output::print_bot_prefix();
        run_turn(
            &backend,
            &mut history,
            session_id,
            config.default_tier,
            &message,
            config.verbose,
        )
        .await;
        return Ok(());
    }

    // Interactive loop.
    let mut state = AppState::new(config.default_tier.id);
    output::print_greeting(state.user.as_ref());

    loop {
        print!("{} ", "›".dimmed());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "/quit" || line == "/exit" {
            break;
        }

        state = handle_line(line, state, &mut history, &backend, &config).await;
    }

    Ok(())
}

async fn handle_line(
    line: &str,
    state: AppState,
    history: &mut SessionHistory,
    backend: &GeminiClient,
    config: &Config,
) -> AppState {
    let (command, rest) = match line.strip_prefix('/') {
        Some(command_line) => {
            let mut split = command_line.splitn(2, char::is_whitespace);
            (
                split.next().unwrap_or(""),
                split.next().unwrap_or("").trim(),
            )
        }
        None => return send_message(line, state, history, backend, config).await,
    };

    match command {
        "help" => {
            output::print_help();
            state
        }
        "new" => {
            let (next, _) = state.apply(Action::NewChat);
            output::print_greeting(next.user.as_ref());
            next
        }
        "sessions" => {
            let (next, _) = state.apply(Action::ToggleMenu(Menu::Sessions));
            let sessions: Vec<&Session> = history.sessions().iter().collect();
            output::print_sessions(&sessions, next.current_session_id.as_deref());
            next
        }
        "search" => {
            let (next, _) = state.apply(Action::SetSearch(rest.to_string()));
            let matches = history.search(rest);
            output::print_sessions(&matches, next.current_session_id.as_deref());
            next
        }
        "chat" => {
            let visible = visible_sessions(&state, history);
            let selected = rest
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| visible.get(index))
                .map(|session| session.id.clone());

            match selected {
                Some(id) => {
                    let (next, _) = state.apply(Action::SelectSession(id.clone()));
                    if let Some(session) = history.session(&id) {
                        output::print_transcript(session);
                    }
                    next
                }
                None => {
                    println!("{}", "שיחה לא נמצאה.".red());
                    state
                }
            }
        }
        "model" => {
            if rest.is_empty() {
                let (next, _) = state.apply(Action::ToggleMenu(Menu::Models));
                output::print_model_menu(next.active_tier_id);
                next
            } else {
                match tier_by_id(rest) {
                    Some(tier) => {
                        let (next, _) = state.apply(Action::SelectModel(rest.to_string()));
                        println!("{}", format!("נבחר מודל: {} {}", tier.icon, tier.name).green());
                        next
                    }
                    None => {
                        println!("{}", format!("מודל לא מוכר: {}", rest).red());
                        state
                    }
                }
            }
        }
        "connections" => {
            let (next, _) = state.apply(Action::ToggleMenu(Menu::Connections));
            output::print_connections(next.user.as_ref());
            next
        }
        "connect" => match connection_by_id(rest) {
            Some(connection) => {
                if state.user.is_some() {
                    println!("{}", format!("{} מחובר", connection.name).green());
                    state
                } else {
                    let (next, _) = state.apply(Action::RequestLogin);
                    output::print_login_prompt();
                    next
                }
            }
            None => {
                println!("{}", format!("שירות לא מוכר: {}", rest).red());
                state
            }
        },
        "login" => {
            let (next, _) = state.apply(Action::Login);
            if let Some(user) = next.user.as_ref() {
                output::print_logged_in(user);
            }
            next
        }
        _ => {
            println!("{}", format!("פקודה לא מוכרת: /{}", command).red());
            state
        }
    }
}

async fn send_message(
    line: &str,
    state: AppState,
    history: &mut SessionHistory,
    backend: &GeminiClient,
    config: &Config,
) -> AppState {
    let (next, _) = state.apply(Action::SetInput(line.to_string()));
    let (next, effect) = next.apply(Action::SubmitInput);

    let Some(Effect::Dispatch(text)) = effect else {
        return next;
    };

    let tier = tier_by_id(next.active_tier_id).unwrap_or(config.default_tier);

    output::print_bot_prefix();
    let session_id = run_turn(
        backend,
        history,
        next.current_session_id.clone(),
        tier,
        &text,
        config.verbose,
    )
    .await;

    let (next, _) = next.apply(Action::TurnFinished(session_id));
    next
}

/// The session list as currently displayed: filtered by the active search
/// query when one is set.
fn visible_sessions<'a>(state: &AppState, history: &'a SessionHistory) -> Vec<&'a Session> {
    if state.search_query.is_empty() {
        history.sessions().iter().collect()
    } else {
        history.search(&state.search_query)
    }
}
