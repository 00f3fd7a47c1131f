//! Engine - owns the page state and the channels around it
//!
//! Inbound: a bounded message channel fed by the transport (push events and
//! user actions) and the signal handler. Outbound: the fire-and-forget
//! command channel and a broadcast of rendered views.

use aboutpages_core::prelude::*;
use aboutpages_core::UpstreamCommand;
use tokio::sync::{broadcast, mpsc};

use crate::bootstrap::Bootstrap;
use crate::channel::CommandSender;
use crate::config::PageConfig;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::{AppState, Page, StartupOptions};
use crate::view::{self, PageView};

/// Capacity of the inbound message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Capacity of the render broadcast
const EVENT_CHANNEL_CAPACITY: usize = 64;

pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the inbound message channel.
    /// Clone this to give to input sources.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the inbound message channel
    pub msg_rx: mpsc::Receiver<Message>,

    /// Outbound commands to the browser process
    commands: CommandSender,

    /// Revision of the last emitted render
    rendered_revision: Option<u64>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create the engine and its channels.
    ///
    /// Returns the receiver the transport drains for outbound commands. A
    /// preferences page asks whether flash is installed straight away.
    pub fn new(
        config: PageConfig,
        bootstrap: Bootstrap,
        options: StartupOptions,
    ) -> (Self, mpsc::UnboundedReceiver<UpstreamCommand>) {
        let state = AppState::new(config, bootstrap, options);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        let (commands, command_rx) = CommandSender::channel();
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        info!("Opening {} page", state.page);
        if state.page == Page::Preferences {
            commands.dispatch(vec![UpstreamCommand::CheckFlashInstalled]);
        }

        let engine = Self {
            state,
            msg_tx,
            msg_rx,
            commands,
            rendered_revision: None,
            event_tx,
        };
        (engine, command_rx)
    }

    /// Spawn the OS signal handler. Requires a tokio runtime.
    pub fn spawn_signal_handler(&self) {
        signals::spawn_signal_handler(self.msg_tx.clone());
    }

    /// Subscribe to rendered views and shutdown notices
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Run one message through update() and emit a render if anything changed
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.commands);
        self.render_if_changed();
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Current view, computed from state
    pub fn view(&self) -> PageView {
        view::render(&self.state)
    }

    /// Emit a render unless this revision was already emitted.
    /// Returns whether a render went out.
    pub fn render_if_changed(&mut self) -> bool {
        let revision = self.state.revision();
        if self.rendered_revision == Some(revision) {
            return false;
        }
        self.rendered_revision = Some(revision);
        self.emit(EngineEvent::Rendered {
            revision,
            view: Box::new(self.view()),
        });
        true
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn shutdown(&mut self) {
        info!("Page engine shutting down");
        self.emit(EngineEvent::Shutdown);
    }

    /// send() fails only when nobody is subscribed, which is fine
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
