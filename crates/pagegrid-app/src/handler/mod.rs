//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per UI mode
//! - `cards`: Card add/remove/edit handlers
//! - `layout`: Grid move/resize/reconcile/view-mode handlers
//! - `stickers`: Sticker palette and manipulation handlers
//! - `style`: Page styling handlers
//! - `username`: Debounced availability handlers
//! - `persistence`: Document save/load handlers

pub(crate) mod cards;
pub(crate) mod keys;
pub(crate) mod layout;
pub(crate) mod persistence;
pub(crate) mod stickers;
pub(crate) mod style;
pub(crate) mod update;
pub(crate) mod username;


use std::path::PathBuf;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

// Re-export functions used by internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Schedule a debounced username availability check.
    ///
    /// The spawned task sleeps the quiet window, asks the directory, and
    /// reports back with `Message::UsernameChecked` carrying the same
    /// token. A result whose token is no longer current is discarded by
    /// the handler, which is what makes "last request wins" structural.
    CheckUsername {
        token: u64,
        username: String,
        debounce_ms: u64,
    },

    /// Write the exported document to disk in the background
    SaveDocument { path: PathBuf, json: String },

    /// Read a document file in the background
    LoadDocument { path: PathBuf },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
