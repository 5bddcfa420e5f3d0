//! Custom widget components

mod canvas;
mod confirm_dialog;
mod header;
mod picker;
mod status_bar;
mod username_prompt;

pub use canvas::GridCanvas;
pub use confirm_dialog::ConfirmDialog;
pub use header::PageHeader;
pub use picker::Picker;
pub use status_bar::StatusBar;
pub use username_prompt::UsernamePrompt;
