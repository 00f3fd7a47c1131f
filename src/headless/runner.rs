//! Headless mode runner - the page event loop over stdin/stdout
//!
//! A blocking thread reads stdin and forwards parsed lines; the loop feeds
//! them, plus signal-driven messages from the engine's own channel, through
//! the session and writes the resulting events to stdout.

use std::path::Path;

use tokio::sync::mpsc;

use aboutpages_app::config::load_config;
use aboutpages_app::{Bootstrap, StartupOptions};
use aboutpages_core::prelude::*;

use super::input::{parse_line, Input};
use super::session::HeadlessSession;
use super::HeadlessEvent;

/// Where the page's startup data comes from
#[derive(Debug, Default)]
pub struct HeadlessOptions<'a> {
    pub config_path: Option<&'a Path>,
    pub bootstrap_path: Option<&'a Path>,
    pub startup: StartupOptions,
}

/// Run the page in headless mode until `quit`, EOF or a termination signal
pub async fn run_headless(options: HeadlessOptions<'_>) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("about-pages starting in HEADLESS mode");
    info!("Page: {}", options.startup.page);
    info!("═══════════════════════════════════════════════════════");

    let config = load_config(options.config_path);
    let bootstrap = match options.bootstrap_path {
        Some(path) => Bootstrap::load(path).context("Failed to load bootstrap snapshot")?,
        None => Bootstrap::default(),
    };

    let mut session = HeadlessSession::new(config, bootstrap, options.startup);
    session.engine().spawn_signal_handler();

    let (input_tx, input_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(input_tx);
    });

    emit_all(session.start());

    let result = headless_event_loop(&mut session, input_rx).await;

    session.shutdown();
    info!("about-pages headless mode exiting");
    result
}

/// Main headless event loop
async fn headless_event_loop(
    session: &mut HeadlessSession,
    mut input_rx: mpsc::UnboundedReceiver<Input>,
) -> Result<()> {
    loop {
        if session.should_quit() {
            info!("Quit requested");
            break;
        }

        tokio::select! {
            input = input_rx.recv() => match input {
                Some(Input::Message(msg)) => emit_all(session.handle(msg)),
                Some(Input::Rejected(reason)) => HeadlessEvent::error(reason, false).emit(),
                Some(Input::Quit) => {
                    info!("Stdin: quit requested");
                    break;
                }
                None => {
                    info!("Stdin closed");
                    break;
                }
            },
            Some(msg) = session.engine_mut().msg_rx.recv() => {
                emit_all(session.handle(msg));
            }
        }
    }

    Ok(())
}

fn emit_all(events: Vec<HeadlessEvent>) {
    for event in events {
        event.emit();
    }
}

/// Read stdin line by line and forward parsed input (blocking version)
fn spawn_stdin_reader_blocking(input_tx: mpsc::UnboundedSender<Input>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        let Some(input) = parse_line(&line) else {
            continue;
        };
        let quit = input == Input::Quit;
        if input_tx.send(input).is_err() || quit {
            break;
        }
    }

    info!("Stdin reader exiting");
}
