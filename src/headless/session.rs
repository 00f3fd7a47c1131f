//! A headless page session: the engine plus the output it produces

use aboutpages_app::{Bootstrap, Engine, EngineEvent, Message, PageConfig, StartupOptions};
use aboutpages_core::prelude::*;
use aboutpages_core::UpstreamCommand;
use tokio::sync::{broadcast, mpsc};

use super::HeadlessEvent;

/// Drives an [`Engine`] and turns its side effects into [`HeadlessEvent`]s
pub struct HeadlessSession {
    engine: Engine,
    command_rx: mpsc::UnboundedReceiver<UpstreamCommand>,
    events: broadcast::Receiver<EngineEvent>,
}

impl HeadlessSession {
    pub fn new(config: PageConfig, bootstrap: Bootstrap, options: StartupOptions) -> Self {
        let (engine, command_rx) = Engine::new(config, bootstrap, options);
        let events = engine.subscribe();
        Self {
            engine,
            command_rx,
            events,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Output for the initial page: the first render plus any startup commands
    pub fn start(&mut self) -> Vec<HeadlessEvent> {
        self.engine.render_if_changed();
        self.collect()
    }

    /// Process one message and collect everything it produced
    pub fn handle(&mut self, msg: Message) -> Vec<HeadlessEvent> {
        self.engine.process_message(msg);
        self.collect()
    }

    pub fn should_quit(&self) -> bool {
        self.engine.should_quit()
    }

    pub fn shutdown(&mut self) {
        self.engine.shutdown();
    }

    /// Drain outbound commands first, then renders
    fn collect(&mut self) -> Vec<HeadlessEvent> {
        let mut out = Vec::new();

        while let Ok(command) = self.command_rx.try_recv() {
            debug!("Upstream command: {}", command.verb());
            out.push(HeadlessEvent::command(command));
        }

        loop {
            match self.events.try_recv() {
                Ok(EngineEvent::Rendered { revision, view }) => {
                    out.push(HeadlessEvent::render(revision, view));
                }
                Ok(EngineEvent::Shutdown) => {}
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    warn!("Skipped {} stale renders", skipped);
                }
                Err(_) => break,
            }
        }

        out
    }
}
