//! Command system for TEA pattern
//!
//! Commands represent side effects requested by `update`. The executor runs
//! them off the update loop and feeds results back as messages.

use crate::feed::FeedFetcher;
use crate::tea::message::{FeedMessage, Message, ToastLevel, UIMessage};
use tokio::sync::mpsc;

/// Command that can be executed to perform side effects
#[derive(Debug)]
pub enum Command {
    /// No operation - used when no side effects are needed
    None,

    /// Send a message back to the update loop
    SendMessage(Message),

    /// Run one fan-out fetch of the whole feed
    FetchFeed,

    /// Open a URL in the system browser
    OpenUrl(String),
}

/// Command executor that processes commands asynchronously
pub struct CommandExecutor {
    message_sender: mpsc::UnboundedSender<Message>,
    fetcher: FeedFetcher,
}

impl CommandExecutor {
    /// Create a new command executor
    pub fn new(message_sender: mpsc::UnboundedSender<Message>, fetcher: FeedFetcher) -> Self {
        Self {
            message_sender,
            fetcher,
        }
    }

    /// Execute a command
    pub fn execute(&self, command: Command) {
        match command {
            Command::None => {}
            Command::SendMessage(message) => self.send(message),
            Command::FetchFeed => self.spawn_fetch(),
            Command::OpenUrl(url) => self.open_url(&url),
        }
    }

    /// Fetch in the background; the result comes back as a single message
    fn spawn_fetch(&self) {
        let fetcher = self.fetcher.clone();
        let sender = self.message_sender.clone();

        tokio::spawn(async move {
            let message = match fetcher.fetch_all().await {
                Ok(snapshot) => FeedMessage::Loaded(Box::new(snapshot)),
                Err(error) => FeedMessage::Failed(error),
            };
            if let Err(e) = sender.send(Message::Feed(message)) {
                tracing::error!("Failed to deliver fetch result: {}", e);
            }
        });
    }

    fn open_url(&self, url: &str) {
        tracing::debug!("Opening {}", url);
        if let Err(e) = webbrowser::open(url) {
            tracing::warn!("Failed to open {}: {}", url, e);
            self.send(Message::UI(UIMessage::ShowToast(
                format!("Could not open browser: {}", e),
                ToastLevel::Warning,
            )));
        }
    }

    fn send(&self, message: Message) {
        if let Err(e) = self.message_sender.send(message) {
            tracing::error!("Failed to send message: {}", e);
        }
    }
}

/// Helper functions for creating common commands
impl Command {
    /// Create a no-op command
    pub fn none() -> Self {
        Command::None
    }

    /// Create a command to send a message
    pub fn message(msg: Message) -> Self {
        Command::SendMessage(msg)
    }

    /// Create a toast command
    pub fn toast(message: impl Into<String>, level: ToastLevel) -> Self {
        Command::SendMessage(Message::UI(UIMessage::ShowToast(message.into(), level)))
    }
}
