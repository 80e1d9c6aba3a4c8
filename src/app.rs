use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use anyhow::{Context, Result};
use ratatui::Frame;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use throbber_widgets_tui::ThrobberState;

use crate::lookup::{self, LookupClient, LookupCommand, LookupRecord, LookupResponse};
use crate::theme::Theme;
use crate::ui;
use crate::ui::input::IdentifierInput;

/// Runtime options for the interactive app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the lookup service.
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Title shown next to the input prompt.
    pub title: Option<String>,
    /// Identifier submitted immediately on startup.
    pub initial_identifier: Option<String>,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3000".to_string(),
            timeout: Duration::from_secs(10),
            title: None,
            initial_identifier: None,
            theme: Theme::default(),
        }
    }
}

/// Discrete state of the lookup controller.
///
/// The enum carries the record and the error message in their respective
/// variants, so a result and an error can never coexist; entering `Loading`
/// drops whichever one was held.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LookupPhase {
    #[default]
    Idle,
    Loading,
    Success(LookupRecord),
    Failed(String),
}

/// What the session produced, reported after the terminal is restored.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    /// The identifier most recently submitted, empty if none was.
    pub identifier: String,
    /// The record held when the session ended, if the last lookup succeeded.
    pub record: Option<LookupRecord>,
}

/// Construct an [`App`] for the provided config and run it to completion.
pub fn run(config: AppConfig) -> Result<LookupOutcome> {
    let mut app = App::new(config)?;
    app.run()
}

impl Drop for App<'_> {
    fn drop(&mut self) {
        let _ = self.lookup_tx.send(LookupCommand::Shutdown);
    }
}

pub struct App<'a> {
    pub phase: LookupPhase,
    pub input: IdentifierInput<'a>,
    pub theme: Theme,
    pub(crate) title: Option<String>,
    pub(crate) throbber_state: ThrobberState,
    lookup_tx: Sender<LookupCommand>,
    lookup_rx: Receiver<LookupResponse>,
    latest_request_id: Arc<AtomicU64>,
    next_request_id: u64,
    pending_request_id: Option<u64>,
    last_submitted: String,
}

impl App<'_> {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = LookupClient::new(config.endpoint.as_str(), config.timeout)
            .with_context(|| format!("failed to build lookup client for {}", config.endpoint))?;
        let (lookup_tx, lookup_rx, latest_request_id) = lookup::spawn(client);

        let initial = config.initial_identifier.unwrap_or_default();
        let mut app = Self {
            phase: LookupPhase::Idle,
            input: IdentifierInput::new(initial),
            theme: config.theme,
            title: config.title,
            throbber_state: ThrobberState::default(),
            lookup_tx,
            lookup_rx,
            latest_request_id,
            next_request_id: 0,
            pending_request_id: None,
            last_submitted: String::new(),
        };
        if !app.input.text().trim().is_empty() {
            app.submit_lookup();
        }
        Ok(app)
    }

    /// Run the interactive application. This is a method so callers can
    /// customize `App` fields before launching.
    pub fn run(&mut self) -> Result<LookupOutcome> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let outcome = loop {
            self.pump_lookup_responses();
            self.throbber_state.calc_next();
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            break self.outcome();
                        }
                    }
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        };

        ratatui::restore();
        Ok(outcome)
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        ui::draw(frame, self);
    }

    /// Handle one key press. Returns `true` when the app should exit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return true;
            }
            KeyCode::Enter => {
                self.submit_lookup();
            }
            _ => {
                self.input.input(key);
            }
        }
        false
    }

    /// Submit the current input as a lookup.
    ///
    /// No-ops while a request is in flight (the submit control is disabled)
    /// and when the trimmed input is empty. Otherwise clears any held result
    /// or error, enters `Loading`, and sends exactly one fetch command.
    pub fn submit_lookup(&mut self) {
        if matches!(self.phase, LookupPhase::Loading) {
            return;
        }
        let identifier = self.input.text().trim().to_string();
        if identifier.is_empty() {
            return;
        }

        self.next_request_id = self.next_request_id.saturating_add(1);
        let id = self.next_request_id;
        self.pending_request_id = Some(id);
        self.latest_request_id.store(id, AtomicOrdering::Release);
        self.phase = LookupPhase::Loading;
        self.last_submitted = identifier.clone();

        tracing::info!(request_id = id, %identifier, "submitting lookup");
        let _ = self.lookup_tx.send(LookupCommand::Fetch { id, identifier });
    }

    pub(crate) fn pump_lookup_responses(&mut self) {
        loop {
            match self.lookup_rx.try_recv() {
                Ok(response) => self.handle_lookup_response(response),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
    }

    fn handle_lookup_response(&mut self, response: LookupResponse) {
        if Some(response.id) != self.pending_request_id {
            tracing::debug!(request_id = response.id, "discarding stale lookup response");
            return;
        }
        self.pending_request_id = None;

        self.phase = match response.result {
            Ok(record) => LookupPhase::Success(record),
            Err(err) => LookupPhase::Failed(err.to_string()),
        };
    }

    fn outcome(&self) -> LookupOutcome {
        let record = match &self.phase {
            LookupPhase::Success(record) => Some(record.clone()),
            _ => None,
        };
        LookupOutcome {
            identifier: self.last_submitted.clone(),
            record,
        }
    }
}
