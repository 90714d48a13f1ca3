use std::{
    io,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use sqlx::{Pool, Sqlite};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

use crate::{
    app::{
        converter::Converter,
        ui,
        utils::{accepts_amount_char, cycle_code},
    },
    db::{self, CREDENTIAL_KEY},
    services::RefreshOutcome,
};

/// Upper bound on how long the loop waits for input, so finished refreshes
/// get applied promptly.
const IDLE_POLL: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, EnumIter, Eq, PartialEq)]
pub enum Field {
    ApiKey,
    Amount,
    Source,
    Target,
}

pub struct App {
    converter: Converter,
    connection: Pool<Sqlite>,
    focus: Field,
    key_input: String,
    show_key: bool,
    updates_tx: UnboundedSender<RefreshOutcome>,
    updates_rx: UnboundedReceiver<RefreshOutcome>,
}

impl App {
    pub fn new(converter: Converter, connection: Pool<Sqlite>) -> Self {
        let key_input = converter.repository().credential().expose().to_string();
        let focus = if key_input.is_empty() {
            Field::ApiKey
        } else {
            Field::Amount
        };
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();

        Self {
            converter,
            connection,
            focus,
            key_input,
            show_key: false,
            updates_tx,
            updates_rx,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        self.converter.shutdown();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            while let Ok(outcome) = self.updates_rx.try_recv() {
                self.converter.apply_refresh(outcome, Instant::now());
            }
            self.spawn_refresh();

            terminal.draw(|frame| {
                ui::render(
                    frame,
                    &self.converter,
                    self.focus,
                    &self.key_input,
                    self.show_key,
                )
            })?;

            let timeout = self
                .converter
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(Instant::now()))
                .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && !self.handle_key(key).await? {
                        return Ok(());
                    }
                }
            }

            self.converter.tick(Instant::now());
        }
    }

    fn spawn_refresh(&mut self) {
        if let Some(ticket) = self.converter.take_refresh() {
            let updates_tx = self.updates_tx.clone();
            tokio::spawn(async move {
                let outcome = ticket.fetch().await;
                // The receiver only goes away on shutdown.
                let _ = updates_tx.send(outcome);
            });
        }
    }

    /// Returns `false` when the user asked to quit.
    async fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        let now = Instant::now();

        match key.code {
            KeyCode::Esc => return Ok(false),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(false);
            }
            KeyCode::Tab => self.move_focus(true).await,
            KeyCode::BackTab => self.move_focus(false).await,
            KeyCode::F(2) => self.show_key = !self.show_key,
            KeyCode::F(3) => self.converter.swap(now),
            KeyCode::F(5) => {
                self.commit_key().await;
                self.converter.request_refresh();
            }
            KeyCode::Enter => {
                self.commit_key().await;
                let _ = self.converter.convert_now();
            }
            _ => self.edit_focused(key.code, now),
        }

        Ok(true)
    }

    fn edit_focused(&mut self, code: KeyCode, now: Instant) {
        match (self.focus, code) {
            (Field::ApiKey, KeyCode::Char(c)) => self.key_input.push(c),
            (Field::ApiKey, KeyCode::Backspace) => {
                self.key_input.pop();
            }
            (Field::Amount, KeyCode::Char(c)) => {
                if accepts_amount_char(self.converter.amount_input(), c) {
                    let mut amount = self.converter.amount_input().to_string();
                    amount.push(c);
                    self.converter.set_amount(&amount, now);
                }
            }
            (Field::Amount, KeyCode::Backspace) => {
                let mut amount = self.converter.amount_input().to_string();
                amount.pop();
                self.converter.set_amount(&amount, now);
            }
            (Field::Source | Field::Target, KeyCode::Up | KeyCode::Down) => {
                let forward = code == KeyCode::Down;
                let options = self.converter.repository().currencies().options();
                if self.focus == Field::Source {
                    if let Some(next) = cycle_code(&options, self.converter.source(), forward) {
                        self.converter.set_source(next, now);
                    }
                } else if let Some(next) = cycle_code(&options, self.converter.target(), forward)
                {
                    self.converter.set_target(next, now);
                }
            }
            _ => {}
        }
    }

    async fn move_focus(&mut self, forward: bool) {
        if self.focus == Field::ApiKey {
            self.commit_key().await;
        }

        let fields: Vec<Field> = Field::iter().collect();
        let i = fields
            .iter()
            .position(|field| *field == self.focus)
            .unwrap_or(0);
        let next = if forward {
            (i + 1) % fields.len()
        } else {
            (i + fields.len() - 1) % fields.len()
        };
        self.focus = fields[next];
    }

    /// Hands the edited key to the converter and persists it when it changed.
    async fn commit_key(&mut self) {
        if !self.converter.set_credential(&self.key_input) {
            return;
        }

        let credential = self.converter.repository().credential();
        let saved = if credential.is_blank() {
            db::delete_setting(&self.connection, CREDENTIAL_KEY).await
        } else {
            db::save_setting(&self.connection, CREDENTIAL_KEY, credential.expose()).await
        };

        match saved {
            Ok(()) => info!("API key saved"),
            Err(err) => warn!("Failed to persist API key: {:#}", err),
        }
    }
}
