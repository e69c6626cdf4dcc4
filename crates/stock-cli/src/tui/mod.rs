//! Interactive terminal UI over the query controller.

pub mod app;
pub mod view;

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use stock_db::ItemStore;
use stock_state::QueryController;
use tokio::sync::mpsc;

use app::{Action, App};

/// Run the terminal UI until the user quits.
pub async fn run<S: ItemStore>(
    controller: &QueryController<S>,
    date_format: &str,
) -> anyhow::Result<()> {
    let mut app = App::new(date_format);
    if let Err(error) = controller.refresh().await {
        tracing::warn!(%error, "initial load failed");
        app.status = Some(error.to_string());
    }
    app.set_items(controller.visible_items());

    enable_raw_mode()?;
    let _restore = TerminalGuard::new(io::stdout());
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    event_loop(&mut terminal, &mut app, controller).await
}

/// Puts the terminal back into cooked mode on the main screen when dropped,
/// whichever way the UI exits.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    const fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(error) = disable_raw_mode() {
            tracing::warn!(%error, "failed to leave raw mode");
        }
        if let Err(error) = execute!(self.out, LeaveAlternateScreen, Show) {
            tracing::warn!(%error, "failed to restore terminal screen");
        }
    }
}

async fn event_loop<B: Backend, S: ItemStore>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    controller: &QueryController<S>,
) -> anyhow::Result<()> {
    let mut items = controller.subscribe_items();
    let mut input = spawn_input_reader();

    loop {
        terminal.draw(|frame| view::render(app, frame))?;

        tokio::select! {
            changed = items.changed() => {
                if changed.is_err() {
                    return Ok(());
                }
                let latest = items.borrow_and_update().clone();
                app.set_items(latest);
            }
            event = input.recv() => {
                let Some(event) = event else {
                    return Ok(());
                };
                let Event::Key(key) = event? else {
                    continue;
                };
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.handle_key(key.code, key.modifiers) {
                    Action::None => {}
                    Action::Quit => return Ok(()),
                    action => perform(controller, app, action).await,
                }
            }
        }
    }
}

/// Carry out an intent and reflect the result in `app`.
async fn perform<S: ItemStore>(controller: &QueryController<S>, app: &mut App, action: Action) {
    let outcome = match &action {
        Action::Search(text) => controller.set_search_text(text.as_str()).await,
        Action::Update(item) => controller.request_update(item).await,
        Action::Delete(item) => controller.request_delete(item).await,
        Action::None | Action::Quit => Ok(()),
    };
    if let Err(error) = &outcome {
        tracing::warn!(?action, %error, "intent failed");
    }
    app.finish(&action, outcome.map_err(|error| error.to_string()));
    app.set_items(controller.visible_items());
}

/// Forward terminal events from a blocking reader thread.
fn spawn_input_reader() -> mpsc::UnboundedReceiver<io::Result<Event>> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        loop {
            let event = event::read();
            let failed = event.is_err();
            if tx.send(event).is_err() || failed {
                break;
            }
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::shared::testing::{hammer, nail, workshop};

    #[test]
    fn guard_restores_screen_and_cursor_on_drop() {
        let mut out = Vec::new();
        {
            let _restore = TerminalGuard::new(&mut out);
        }
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "leaves alternate screen: {written:?}");
        assert!(written.contains("\x1b[?25h"), "shows cursor: {written:?}");
    }

    #[tokio::test]
    async fn search_action_narrows_the_list() {
        let ctx = workshop().await;
        let mut app = App::default();

        perform(&ctx.controller, &mut app, Action::Search("nail".into())).await;

        assert_eq!(app.items, vec![nail()]);
        assert!(app.status.is_none());
    }

    #[tokio::test]
    async fn update_action_shows_new_amount() {
        let ctx = workshop().await;
        let mut app = App::default();
        ctx.controller.refresh().await.unwrap();

        perform(
            &ctx.controller,
            &mut app,
            Action::Update(hammer().with_amount(9)),
        )
        .await;

        assert_eq!(app.items[0].amount, 9);
        assert_eq!(app.status.as_deref(), Some("Hammer: amount set to 9"));
    }

    #[tokio::test]
    async fn delete_action_removes_row() {
        let ctx = workshop().await;
        let mut app = App::default();
        ctx.controller.refresh().await.unwrap();

        perform(&ctx.controller, &mut app, Action::Delete(hammer())).await;

        assert_eq!(app.items, vec![nail()]);
        assert_eq!(app.status.as_deref(), Some("Deleted Hammer"));
    }
}
