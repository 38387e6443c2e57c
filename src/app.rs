use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

use crate::config::StellarConfig;
use crate::events::EventHandler;
use crate::feed::{FeedFetcher, HttpFeedSource};
use crate::tea::message::SystemMessage;
use crate::tea::{update, CommandExecutor, Message, Model};
use crate::theme::Theme;
use crate::ui;

/// Build the HTTP-backed fetcher described by a config
pub fn build_fetcher(config: &StellarConfig) -> Result<FeedFetcher> {
    let source = HttpFeedSource::new(&config.base_url)
        .with_context(|| format!("Invalid base URL '{}'", config.base_url))?;

    Ok(FeedFetcher::new(Arc::new(source))
        .with_timeout(config.request_timeout())
        .with_retry(config.retry.clone()))
}

/// Terminal application: owns the model and drives the update loop
pub struct App {
    config: StellarConfig,
    theme: Theme,
    event_handler: EventHandler,
}

impl App {
    pub fn new(config: StellarConfig) -> Self {
        Self {
            config,
            theme: Theme::detect(),
            event_handler: EventHandler::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Check if we're running in a proper terminal
        if !io::stdout().is_tty() {
            return Err(anyhow::anyhow!(
                "StellarFeed requires a proper terminal (TTY) to run. Use `stellarfeed fetch` for headless output."
            ));
        }

        let fetcher = build_fetcher(&self.config)?;

        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

        let result = self.run_loop(&mut terminal, fetcher).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        fetcher: FeedFetcher,
    ) -> Result<()> {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let executor = CommandExecutor::new(sender, fetcher);

        let start_route = self.config.start_route();
        let tick_rate = self.config.tick_rate();
        tracing::info!("Starting on {} with tick rate {:?}", start_route, tick_rate);

        let mut model = Model::new(start_route);
        let size = terminal.size()?;
        model = dispatch(
            model,
            Message::System(SystemMessage::Resize(size.width, size.height)),
            &executor,
        );
        model = dispatch(
            model,
            Message::System(SystemMessage::Initialize(start_route)),
            &executor,
        );

        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::render(frame, &model, &self.theme))?;

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if let Some(message) = self.event_handler.handle_key_event(key, &model) {
                            model = dispatch(model, message, &executor);
                        }
                    }
                    Event::Resize(width, height) => {
                        model = dispatch(
                            model,
                            Message::System(SystemMessage::Resize(width, height)),
                            &executor,
                        );
                    }
                    _ => {}
                }
            }

            // Results from background commands
            while let Ok(message) = receiver.try_recv() {
                model = dispatch(model, message, &executor);
            }

            if last_tick.elapsed() >= tick_rate {
                model = dispatch(model, Message::System(SystemMessage::Tick), &executor);
                last_tick = Instant::now();
            }

            if model.app_state.should_quit {
                tracing::info!("Quit requested");
                break;
            }
        }

        Ok(())
    }
}

/// Run one update cycle and hand its commands to the executor
fn dispatch(model: Model, message: Message, executor: &CommandExecutor) -> Model {
    let result = update(model, message);
    for command in result.commands {
        executor.execute(command);
    }
    result.model
}
