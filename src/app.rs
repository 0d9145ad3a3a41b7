use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::api::{self, CostPlan, FALLBACK_ERROR};
use crate::config::Config;

/// Result of the one-shot plan fetch, with the error already reduced to
/// its display message.
pub type FetchOutcome = Result<Vec<CostPlan>, String>;

/// Render mode for the body. Exactly one is active at a time: loading
/// wins until the fetch settles, then error, then empty vs. list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error(String),
    Empty,
    Plans,
}

pub struct App {
    pub config: Config,

    // Fetch state
    pub loading: bool,
    pub error: Option<String>,
    pub plans: Vec<CostPlan>,

    // Card list cursor (drives the scroll window)
    pub selected: usize,

    rx: mpsc::Receiver<FetchOutcome>,
}

impl App {
    /// Create the app and fire the single plan fetch in the background.
    /// The result comes back through `tick`.
    pub fn new(config: Config) -> Self {
        let (tx, rx) = mpsc::channel(1);

        let fetch_config = config.clone();
        tokio::spawn(async move {
            let outcome = api::fetch_plans(&fetch_config)
                .await
                .map_err(|e| e.to_string());
            // Receiver is gone if the UI quit before the request settled;
            // the late result is simply discarded.
            let _ = tx.send(outcome).await;
        });

        Self::with_receiver(config, rx)
    }

    fn with_receiver(config: Config, rx: mpsc::Receiver<FetchOutcome>) -> Self {
        Self {
            config,
            loading: true,
            error: None,
            plans: Vec::new(),
            selected: 0,
            rx,
        }
    }

    /// Derive the render mode from the fetch state.
    pub fn view_state(&self) -> ViewState {
        if self.loading {
            ViewState::Loading
        } else if let Some(msg) = &self.error {
            ViewState::Error(msg.clone())
        } else if self.plans.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Plans
        }
    }

    /// Poll the fetch channel. Called from the event loop between draws.
    pub fn tick(&mut self) {
        if !self.loading {
            return;
        }

        match self.rx.try_recv() {
            Ok(outcome) => self.settle(outcome),
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                // Fetch task died without reporting. Nothing better to show.
                self.settle(Err(FALLBACK_ERROR.to_string()));
            }
        }
    }

    /// Apply the fetch result. Success replaces the collection wholesale
    /// and clears any error; failure keeps the prior collection. Both
    /// paths drop the loading flag, exactly once.
    pub fn settle(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(plans) => {
                self.plans = plans;
                self.error = None;
            }
            Err(message) => {
                tracing::warn!("Plan fetch failed: {}", message);
                self.error = Some(message);
            }
        }
        self.loading = false;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.plans.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.selected = 0;
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = self.plans.len().saturating_sub(1);
            }
            KeyCode::Char('d') => {
                open::that(self.config.docs_url())?;
            }
            _ => {}
        }
        Ok(())
    }
}
