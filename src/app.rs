// src/app.rs

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ScrollbarState;
use tracing::{info, warn};
use url::Url;

use crate::core::error::ScanError;
use crate::core::export::export_report;
use crate::core::models::SecurityReport;
use crate::core::scanner::parse_target;

pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// How long a notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Lifecycle of the single analysis slot.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisState {
    Idle,
    Pending,
    Succeeded(Box<SecurityReport>),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
}

/// A transient message shown on top of the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub shown_at: Instant,
}

pub struct App {
    pub should_quit: bool,
    pub state: AnalysisState,
    pub input: String,
    pub notice: Option<Notice>,
    pub scroll_offset: usize,
    pub report_scroll_state: ScrollbarState,
    pub spinner_frame: usize,
    pub export_dir: PathBuf,
}

impl App {
    pub fn new(export_dir: PathBuf) -> Self {
        Self {
            should_quit: false,
            state: AnalysisState::Idle,
            input: String::new(),
            notice: None,
            scroll_offset: 0,
            report_scroll_state: ScrollbarState::default(),
            spinner_frame: 0,
            export_dir,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, AnalysisState::Pending)
    }

    /// The input field is editable unless a report is shown or one is on its way.
    pub fn accepts_input(&self) -> bool {
        matches!(self.state, AnalysisState::Idle | AnalysisState::Failed(_))
    }

    pub fn report(&self) -> Option<&SecurityReport> {
        match &self.state {
            AnalysisState::Succeeded(report) => Some(report),
            _ => None,
        }
    }

    /// Routes a key press. Returns the URL to analyze when a submission was accepted.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Url> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }
        if key.code == KeyCode::Esc {
            self.notice = None;
            return None;
        }

        match self.state {
            AnalysisState::Idle | AnalysisState::Failed(_) => match key.code {
                KeyCode::Char('q') if self.input.is_empty() => self.quit(),
                KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                    self.input.push(c)
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Enter => return self.submit(),
                _ => {}
            },
            AnalysisState::Pending => {
                if key.code == KeyCode::Char('q') {
                    self.quit();
                }
            }
            AnalysisState::Succeeded(_) => match key.code {
                KeyCode::Char('q') => self.quit(),
                KeyCode::Char('n') => self.reset(),
                KeyCode::Char('e') => self.export(),
                KeyCode::Up => self.scroll_up(),
                KeyCode::Down => self.scroll_down(),
                _ => {}
            },
        }
        None
    }

    /// Validates the input and, if it is a usable URL, moves to `Pending`.
    ///
    /// Invalid input leaves the state untouched and raises a single notice.
    pub fn submit(&mut self) -> Option<Url> {
        if self.is_pending() {
            return None;
        }
        match parse_target(&self.input) {
            Ok(url) => {
                info!(target = %url, "Analysis submitted.");
                self.notice = None;
                self.state = AnalysisState::Pending;
                self.reset_scroll();
                Some(url)
            }
            Err(e) => {
                warn!(input = %self.input, error = %e, "Rejected input.");
                self.notify(NoticeKind::Error, e.to_string());
                None
            }
        }
    }

    /// Stores the outcome of the analysis task, replacing whatever was there.
    pub fn complete(&mut self, result: Result<SecurityReport, ScanError>) {
        match result {
            Ok(report) => {
                self.state = AnalysisState::Succeeded(Box::new(report));
            }
            Err(e) => {
                let message = e.to_string();
                self.notify(NoticeKind::Error, message.clone());
                self.state = AnalysisState::Failed(message);
            }
        }
        self.reset_scroll();
    }

    pub fn export(&mut self) {
        let Some(report) = self.report() else {
            return;
        };
        match export_report(report, &self.export_dir) {
            Ok(path) => self.notify(NoticeKind::Info, format!("Report saved to {}", path.display())),
            Err(e) => self.notify(NoticeKind::Error, e.to_string()),
        }
    }

    pub fn notify(&mut self, kind: NoticeKind, message: String) {
        self.notice = Some(Notice {
            kind,
            message,
            shown_at: Instant::now(),
        });
    }

    /// Advances the spinner and expires stale notices.
    pub fn on_tick(&mut self, now: Instant) {
        if self.is_pending() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
        if self
            .notice
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= NOTICE_TTL)
        {
            self.notice = None;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
        self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
    }

    fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
        self.report_scroll_state = ScrollbarState::default();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn reset(&mut self) {
        self.state = AnalysisState::Idle;
        self.input = String::new();
        self.notice = None;
        self.spinner_frame = 0;
        self.reset_scroll();
    }
}
