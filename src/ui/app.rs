use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::{error, info};

use crate::{config::Config, event::events::Event, library};

use super::{state::UiState, tui, util::handler::EventHandler};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub config: Config,
    pub state: UiState,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        Self {
            event_rx,
            event_tx,
            config,
            state: UiState::default(),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        self.spawn_loader();
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    /// The load runs off the UI loop and reports back over the channel.
    /// Inside the task each file is still awaited one at a time.
    fn spawn_loader(&self) {
        let event_tx = self.event_tx.clone();
        let poems_dir = self.config.poems_dir.clone();
        info!("loading dohas from {}", poems_dir.display());
        tokio::spawn(async move {
            match library::loader::load(&poems_dir).await {
                Ok(library) => {
                    let _ = event_tx.send_async(Event::LibraryLoaded(library)).await;
                }
                Err(err) => {
                    error!("doha load failed: {err}");
                    let _ = event_tx.send_async(Event::LoadFailed(err.to_string())).await;
                }
            }
        });
    }

    fn ui(&self, frame: &mut Frame) {
        if self.has_focus {
            frame.render_widget(self, frame.area());
        }
    }
}
