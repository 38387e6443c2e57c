//! The Elm Architecture (TEA) pattern implementation for StellarFeed
//!
//! The model is owned by the event loop, changed only by `update`, and side
//! effects such as the feed fetch are described as commands.

pub mod command;
pub mod message;
pub mod model;
pub mod update;

pub use command::{Command, CommandExecutor};
pub use message::Message;
pub use model::Model;
pub use update::update;

/// Result of processing a TEA update cycle
pub struct UpdateResult<M> {
    pub model: M,
    pub commands: Vec<Command>,
}

impl<M> UpdateResult<M> {
    pub fn new(model: M, commands: Vec<Command>) -> Self {
        Self { model, commands }
    }

    pub fn just_model(model: M) -> Self {
        Self {
            model,
            commands: Vec::new(),
        }
    }

    pub fn with_command(model: M, command: Command) -> Self {
        Self {
            model,
            commands: vec![command],
        }
    }
}
