//! Terminal chat with a project's assistant.
//!
//! DESIGN
//! ======
//! Uses the same `ChatSession` and stream driver as the browser. Reply text
//! is printed as it arrives; Ctrl-C during a reply stops that reply (the
//! partial text stays in the history), Ctrl-C at the prompt leaves.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use wire::{SourceRef, StreamEvent};
use workflow::chat::{ChatSession, Outcome, StopHandle, drive, stop_pair};

use crate::api::ApiClient;
use crate::{CliError, Lang};

/// Replacement text for a failed reply.
pub fn failure_text(lang: Lang) -> &'static str {
    match lang {
        Lang::De => "Entschuldigung, bei der Antwort ist ein Fehler aufgetreten. Bitte versuche es erneut.",
        Lang::En => "Sorry, something went wrong while answering. Please try again.",
    }
}

fn stopped_text(lang: Lang) -> &'static str {
    match lang {
        Lang::De => "[abgebrochen]",
        Lang::En => "[stopped]",
    }
}

/// Numbered source list printed under a finished reply.
pub fn format_sources(sources: &[SourceRef]) -> Vec<String> {
    sources
        .iter()
        .enumerate()
        .map(|(i, source)| match &source.url {
            Some(url) => format!("  [{}] {} <{url}>", i + 1, source.title),
            None => format!("  [{}] {}", i + 1, source.title),
        })
        .collect()
}

/// Send one message, or read messages from stdin until EOF or Ctrl-C.
pub async fn run(api: &ApiClient, project_id: &str, message: Option<String>, lang: Lang) -> Result<(), CliError> {
    let mut session = ChatSession::new();
    if let Some(message) = message {
        return match turn(api, project_id, &mut session, &message, lang).await {
            Outcome::Failed(reason) => Err(CliError::ChatFailed(reason)),
            Outcome::Completed | Outcome::Aborted => Ok(()),
        };
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            println!();
            return Ok(());
        };
        if line.trim().is_empty() {
            continue;
        }
        turn(api, project_id, &mut session, &line, lang).await;
    }
}

async fn turn(api: &ApiClient, project_id: &str, session: &mut ChatSession, text: &str, lang: Lang) -> Outcome {
    let Some(turn) = session.begin(text) else {
        return Outcome::Completed;
    };
    tracing::debug!(history = turn.request.conversation_history.len(), "sending chat turn");

    let (handle, signal) = stop_pair();
    let watcher = tokio::spawn(stop_on_ctrl_c(handle));

    let mut sources = Vec::new();
    let mut stdout = std::io::stdout();
    let outcome = drive(api.open_chat(project_id, &turn.request), signal, |event| {
        match &event {
            StreamEvent::Content(delta) => {
                let _ = write!(stdout, "{delta}");
                let _ = stdout.flush();
            }
            StreamEvent::Sources(list) => sources.clone_from(list),
            _ => {}
        }
        session.apply(&turn.assistant_id, &event);
    })
    .await;
    watcher.abort();

    session.settle(&turn.assistant_id, &outcome, failure_text(lang));
    match &outcome {
        Outcome::Completed => {
            println!();
            for line in format_sources(&sources) {
                println!("{line}");
            }
        }
        Outcome::Aborted => println!("\n{}", stopped_text(lang)),
        Outcome::Failed(reason) => {
            tracing::warn!(%reason, "chat turn failed");
            println!("\n{}", failure_text(lang));
        }
    }
    outcome
}

async fn stop_on_ctrl_c(mut handle: StopHandle) {
    if tokio::signal::ctrl_c().await.is_ok() {
        handle.stop();
    }
}
