//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! The update function stays pure; everything that sleeps, touches the
//! filesystem, or talks to the directory runs here in a spawned task and
//! reports back by sending a [`Message`] into the event loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::warn;

use crate::availability::UsernameDirectory;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::persist;

/// Execute an action by spawning a background task.
pub fn handle_action<D>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, directory: Arc<D>)
where
    D: UsernameDirectory + Send + Sync + 'static,
{
    match action {
        UpdateAction::CheckUsername {
            token,
            username,
            debounce_ms,
        } => {
            // The quiet window lives inside the task. A newer keystroke does
            // not cancel this sleep; it bumps the state token, so whatever
            // this task reports back is discarded as stale by the handler.
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(debounce_ms)).await;
                let exists = match directory.exists(&username).await {
                    Ok(exists) => Some(exists),
                    Err(e) => {
                        warn!("availability check for '{username}' failed: {e}");
                        None
                    }
                };
                let _ = msg_tx
                    .send(Message::UsernameChecked {
                        token,
                        username,
                        exists,
                    })
                    .await;
            });
        }

        UpdateAction::SaveDocument { path, json } => {
            tokio::spawn(async move {
                let result = persist::save_document(&path, &json)
                    .map(|()| path)
                    .map_err(|e| e.to_string());
                let _ = msg_tx.send(Message::SaveCompleted { result }).await;
            });
        }

        UpdateAction::LoadDocument { path } => {
            tokio::spawn(async move {
                let result = persist::load_document(&path).map_err(|e| e.to_string());
                let _ = msg_tx.send(Message::LoadCompleted { path, result }).await;
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::update;
    use crate::state::{AvailabilityDisplay, EditorState};
    use pagegrid_core::Result;

    /// Directory stub with a per-name artificial latency.
    struct SlowDirectory {
        entries: Vec<(&'static str, u64, bool)>,
    }

    impl crate::availability::UsernameDirectory for SlowDirectory {
        async fn exists(&self, username: &str) -> Result<bool> {
            for (name, delay_ms, exists) in &self.entries {
                if *name == username {
                    tokio::time::sleep(Duration::from_millis(*delay_ms)).await;
                    return Ok(*exists);
                }
            }
            Ok(false)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_latest_keystroke_wins_even_when_older_check_finishes_last() {
        // "mar" answers slowly and says taken; "maria" answers fast and says
        // free. The user typed "maria" last, so the display must end up
        // Available no matter which response lands first.
        let directory = Arc::new(SlowDirectory {
            entries: vec![("mar", 900, true), ("maria", 5, false)],
        });
        let (msg_tx, mut msg_rx) = mpsc::channel(8);

        let mut state = EditorState::default();
        let first = update(
            &mut state,
            Message::UsernameInput {
                text: "mar".to_string(),
            },
        );
        handle_action(first.action.unwrap(), msg_tx.clone(), directory.clone());

        let second = update(
            &mut state,
            Message::UsernameInput {
                text: "maria".to_string(),
            },
        );
        handle_action(second.action.unwrap(), msg_tx.clone(), directory.clone());
        drop(msg_tx);

        while let Some(msg) = msg_rx.recv().await {
            update(&mut state, msg);
        }

        assert_eq!(state.username.display, AvailabilityDisplay::Available);
    }

    #[tokio::test(start_paused = true)]
    async fn test_directory_error_reports_exists_none() {
        struct FailingDirectory;
        impl crate::availability::UsernameDirectory for FailingDirectory {
            async fn exists(&self, _username: &str) -> Result<bool> {
                Err(pagegrid_core::Error::directory("directory offline"))
            }
        }

        let (msg_tx, mut msg_rx) = mpsc::channel(1);
        handle_action(
            UpdateAction::CheckUsername {
                token: 1,
                username: "maria".to_string(),
                debounce_ms: 400,
            },
            msg_tx,
            Arc::new(FailingDirectory),
        );

        let msg = msg_rx.recv().await.expect("message");
        assert!(matches!(
            msg,
            Message::UsernameChecked { exists: None, .. }
        ));
    }

    #[tokio::test]
    async fn test_save_action_writes_file_and_reports_back() {
        struct NoDirectory;
        impl crate::availability::UsernameDirectory for NoDirectory {
            async fn exists(&self, _username: &str) -> Result<bool> {
                Ok(false)
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        let (msg_tx, mut msg_rx) = mpsc::channel(1);

        handle_action(
            UpdateAction::SaveDocument {
                path: path.clone(),
                json: "{}".to_string(),
            },
            msg_tx,
            Arc::new(NoDirectory),
        );

        let msg = msg_rx.recv().await.expect("message");
        assert!(matches!(msg, Message::SaveCompleted { result: Ok(p) } if p == path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }
}
