use std::collections::VecDeque;

use crate::chart::StrikeZoneChart;

/// One scheduled game, sourced verbatim from the schedule response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub id: String,
    pub scheduled: String,
    pub home: String,
    pub away: String,
    pub venue: String,
}

impl GameSummary {
    pub fn matchup(&self) -> String {
        format!("{} vs {}", self.away, self.home)
    }

    /// YYYY-MM-DD prefix of the scheduled timestamp.
    pub fn game_date(&self) -> &str {
        let end = self
            .scheduled
            .char_indices()
            .nth(10)
            .map(|(idx, _)| idx)
            .unwrap_or(self.scheduled.len());
        &self.scheduled[..end]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameTab {
    pub title: String,
    pub chart: StrikeZoneChart,
}

/// Deferred UI update queued by the worker thread and applied exactly once by
/// the drain loop, in enqueue order.
#[derive(Debug, Clone, PartialEq)]
pub enum UiTask {
    ShowDialog { kind: DialogKind, text: String },
    AddTab { title: String, chart: StrikeZoneChart },
    Log(String),
    FinishLoad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Year,
    Month,
    Day,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: LoadPhase,
    pub year_input: String,
    pub month_input: String,
    pub day_input: String,
    pub focus: InputField,
    pub tabs: Vec<GameTab>,
    pub selected_tab: usize,
    pub dialogs: VecDeque<Dialog>,
    pub logs: VecDeque<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Idle,
            year_input: String::new(),
            month_input: String::new(),
            day_input: String::new(),
            focus: InputField::Year,
            tabs: Vec::new(),
            selected_tab: 0,
            dialogs: VecDeque::new(),
            logs: VecDeque::new(),
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    /// Idle -> Loading; returns false (and starts nothing) while a run is
    /// already in progress.
    pub fn begin_load(&mut self) -> bool {
        if self.phase == LoadPhase::Loading {
            return false;
        }
        self.phase = LoadPhase::Loading;
        true
    }

    pub fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            InputField::Year => &mut self.year_input,
            InputField::Month => &mut self.month_input,
            InputField::Day => &mut self.day_input,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            InputField::Year => InputField::Month,
            InputField::Month => InputField::Day,
            InputField::Day => InputField::Year,
        };
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            InputField::Year => InputField::Day,
            InputField::Month => InputField::Year,
            InputField::Day => InputField::Month,
        };
    }

    pub fn select_next_tab(&mut self) {
        if self.tabs.is_empty() {
            return;
        }
        self.selected_tab = (self.selected_tab + 1) % self.tabs.len();
    }

    pub fn select_prev_tab(&mut self) {
        if self.tabs.is_empty() {
            return;
        }
        self.selected_tab = self
            .selected_tab
            .checked_sub(1)
            .unwrap_or(self.tabs.len() - 1);
    }

    pub fn active_dialog(&self) -> Option<&Dialog> {
        self.dialogs.front()
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialogs.pop_front();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Execute one queued task on the UI thread.
pub fn apply_task(state: &mut AppState, task: UiTask) {
    match task {
        UiTask::ShowDialog { kind, text } => {
            let prefix = match kind {
                DialogKind::Info => "[INFO]",
                DialogKind::Error => "[WARN]",
            };
            state.push_log(format!("{prefix} {text}"));
            state.dialogs.push_back(Dialog { kind, text });
        }
        UiTask::AddTab { title, chart } => {
            state.push_log(format!("[INFO] Added tab: {title}"));
            state.tabs.push(GameTab { title, chart });
            state.selected_tab = state.tabs.len() - 1;
        }
        UiTask::Log(msg) => state.push_log(msg),
        UiTask::FinishLoad => {
            state.phase = LoadPhase::Idle;
            state.push_log("[INFO] Load finished");
        }
    }
}
