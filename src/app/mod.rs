//! Application state and key dispatch.
//!
//! `App` owns which screen is active and, while the Stats screen is
//! open, the stats view-model. The UI reads state through
//! [`App::stats_state`] and never mutates it directly.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::watch;

use crate::config::RepoConfig;
use crate::github::StatsFetcher;
use crate::traits::HttpClient;
use crate::view_state::{FetchState, StatsViewModel};

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Stats,
}

/// Top-level application state.
pub struct App {
    pub screen: Screen,
    pub config: RepoConfig,
    pub spinner_frame: usize,
    pub should_quit: bool,
    client: Arc<dyn HttpClient>,
    stats: Option<StatsViewModel>,
    stats_rx: Option<watch::Receiver<FetchState>>,
}

impl App {
    pub fn new(config: RepoConfig, client: Arc<dyn HttpClient>) -> Self {
        Self {
            screen: Screen::Home,
            config,
            spinner_frame: 0,
            should_quit: false,
            client,
            stats: None,
            stats_rx: None,
        }
    }

    /// Open the Stats screen, creating a fresh view-model.
    ///
    /// The view-model starts fetching immediately.
    pub fn open_stats(&mut self) {
        let fetcher = StatsFetcher::new(Arc::clone(&self.client), &self.config);
        let vm = StatsViewModel::new(fetcher);
        self.stats_rx = Some(vm.subscribe());
        self.stats = Some(vm);
        self.screen = Screen::Stats;
    }

    /// Leave the Stats screen. Dropping the view-model tears it down, so
    /// an in-flight fetch can no longer mutate or notify.
    pub fn close_stats(&mut self) {
        self.stats = None;
        self.stats_rx = None;
        self.screen = Screen::Home;
    }

    /// Current fetch state, if the Stats screen is open.
    pub fn stats_state(&self) -> Option<FetchState> {
        self.stats_rx.as_ref().map(|rx| rx.borrow().clone())
    }

    /// Ask the view-model for a new fetch (no-op while one is in flight).
    pub fn retry_stats(&self) {
        if let Some(vm) = &self.stats {
            vm.retry();
        }
    }

    /// Advance cosmetic animation state.
    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Dispatch a key event for the active screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Home => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('s') | KeyCode::Enter => self.open_stats(),
                _ => {}
            },
            Screen::Stats => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('r') => self.retry_stats(),
                KeyCode::Esc | KeyCode::Char('b') => self.close_stats(),
                _ => {}
            },
        }
    }
}
