//! Main TUI event loop
//!
//! Drives the TEA cycle: poll a terminal event, fold it through the pure
//! update function, hand resulting actions to the background spawner, and
//! redraw. Messages from background tasks come back over the channel and
//! take the same path.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use pagegrid_app::availability::{StaticDirectory, StaticSession, UsernameDirectory};
use pagegrid_app::config::Settings;
use pagegrid_app::state::Profile;
use pagegrid_app::{handle_action, update, EditorState, Message};
use pagegrid_core::prelude::*;

use crate::event::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use crate::{event, render, terminal};

/// Run the editor until the user quits.
pub async fn run(settings: Settings, document: Option<PathBuf>) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();
    let result = run_loop(&mut term, settings, document).await;
    ratatui::restore();
    result
}

async fn run_loop(
    term: &mut ratatui::DefaultTerminal,
    settings: Settings,
    document: Option<PathBuf>,
) -> Result<()> {
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(128);
    let directory = Arc::new(StaticDirectory::with_reserved_names());
    let session = StaticSession::from_environment();
    let mut state = EditorState::new(settings);
    state.profile = Profile::from_session(&session);

    let size = term.size().map_err(|e| Error::TerminalInit(e.to_string()))?;
    process(
        &mut state,
        Message::ViewportResized {
            width: size.width as u32 * CELL_WIDTH_PX,
            height: size.height as u32 * CELL_HEIGHT_PX,
        },
        &msg_tx,
        &directory,
    );

    if let Some(path) = document {
        info!("opening document {}", path.display());
        process(&mut state, Message::LoadRequested { path }, &msg_tx, &directory);
    }

    loop {
        term.draw(|frame| render::view(frame, &state))?;

        if state.should_quit() {
            break;
        }

        if let Some(message) = event::poll()? {
            process(&mut state, message, &msg_tx, &directory);
        }
        // Drain background task results without blocking the frame
        while let Ok(message) = msg_rx.try_recv() {
            process(&mut state, message, &msg_tx, &directory);
        }
    }

    Ok(())
}

/// Fold one message (and its follow-ups) through the update function,
/// dispatching any produced actions to background tasks.
pub fn process<D>(
    state: &mut EditorState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    directory: &Arc<D>,
) where
    D: UsernameDirectory + Send + Sync + 'static,
{
    let mut next = Some(message);
    while let Some(message) = next.take() {
        let result = update(state, message);
        next = result.message;
        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), directory.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagegrid_app::state::UiMode;
    use pagegrid_app::InputKey;

    #[tokio::test]
    async fn test_picker_confirm_follow_up_adds_a_card() {
        let (msg_tx, _msg_rx) = mpsc::channel(8);
        let directory = Arc::new(StaticDirectory::default());
        let mut state = EditorState::default();

        process(&mut state, Message::Key(InputKey::Char('a')), &msg_tx, &directory);
        assert_eq!(state.ui_mode, UiMode::WidgetPicker);

        process(&mut state, Message::Key(InputKey::Enter), &msg_tx, &directory);
        assert_eq!(state.ui_mode, UiMode::Canvas);
        assert_eq!(state.cards.len(), 1);
        assert!(state.selected.is_some());
    }

    #[tokio::test]
    async fn test_username_keystroke_spawns_check_and_result_round_trips() {
        let (msg_tx, mut msg_rx) = mpsc::channel(8);
        let directory = Arc::new(StaticDirectory::with_reserved_names());
        let mut state = EditorState::new(Settings {
            debounce_ms: 0,
            ..Settings::default()
        });
        state.ui_mode = UiMode::Username;

        process(
            &mut state,
            Message::UsernameInput {
                text: "admin".to_string(),
            },
            &msg_tx,
            &directory,
        );

        let reply = msg_rx.recv().await.expect("check result");
        process(&mut state, reply, &msg_tx, &directory);
        assert_eq!(
            state.username.display,
            pagegrid_app::AvailabilityDisplay::Taken
        );
    }
}
