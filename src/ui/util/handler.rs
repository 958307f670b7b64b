use ratatui::layout::Rect;

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::{AppMessage, InputHandler},
        state::Phase,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_terminal_event(app, evt, tui)?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_app_event(app, evt);
        }

        Ok(())
    }

    fn handle_terminal_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Init | TerminalEvent::Tick | TerminalEvent::Resize(..) => {}
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => {
                if let Some(msg) = InputHandler::handle_key(key) {
                    Self::apply(app, msg);
                }
            }
            TerminalEvent::Mouse(mouse) => {
                let size = tui.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                if let Some(msg) = InputHandler::handle_mouse(mouse, area) {
                    Self::apply(app, msg);
                }
            }
        }

        Ok(())
    }

    pub fn handle_app_event(app: &mut App, evt: Event) {
        match evt {
            Event::LibraryLoaded(mut library) => {
                // Show a doha right away rather than waiting for input.
                library.pick_random(&mut rand::rng());
                app.state.phase = Phase::Ready(library);
                app.state.start_highlight();
            }
            Event::LoadFailed(_) => {
                app.state.phase = Phase::Failed;
            }
        }
    }

    pub fn apply(app: &mut App, msg: AppMessage) {
        match msg {
            AppMessage::Quit => app.should_quit = true,
            AppMessage::NextDoha => Self::next_doha(app),
        }
    }

    /// No-op outside `Ready`; a trigger during `Loading` or `Failed`
    /// changes nothing on screen.
    fn next_doha(app: &mut App) {
        if let Some(library) = app.state.library_mut() {
            if library.pick_random(&mut rand::rng()).is_some() {
                app.state.start_highlight();
            }
        }
    }
}
