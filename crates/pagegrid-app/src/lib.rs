//! pagegrid-app - Application state and orchestration for the page editor
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a pure `update` function over [`state::EditorState`], a
//! [`message::Message`] enum covering every editing operation, and an
//! [`actions::handle_action`] dispatcher that runs the side effects
//! (debounced availability checks, document IO) in background tasks.

pub mod actions;
pub mod availability;
pub mod config;
pub mod dispatch;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod persist;
pub mod state;

// Re-export primary types
pub use actions::handle_action;
pub use availability::{AccountSession, StaticDirectory, StaticSession, UsernameDirectory};
pub use config::Settings;
pub use dispatch::{all_block_views, block_view, BlockKind, BlockView};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AvailabilityDisplay, EditorState, UiMode, ViewMode};
