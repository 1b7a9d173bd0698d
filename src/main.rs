use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use chrono::{Datelike, Local};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::canvas::{Canvas, Points, Rectangle};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Tabs, Wrap};

use first_pitch::chart::{ChartBody, StrikeZoneChart, ZONE_BOTTOM, ZONE_HEIGHT, ZONE_LEFT, ZONE_WIDTH};
use first_pitch::state::{AppState, DialogKind, InputField, LoadPhase, UiTask, apply_task};
use first_pitch::worker::{LoadRequest, spawn_loader};

const API_KEY_ENV: &str = "SPORTRADAR_API_KEY";

struct App {
    state: AppState,
    should_quit: bool,
    api_key: String,
    task_tx: mpsc::Sender<UiTask>,
    tick: u64,
}

impl App {
    fn new(api_key: String, task_tx: mpsc::Sender<UiTask>) -> Self {
        let mut state = AppState::new();
        let today = Local::now().date_naive();
        state.year_input = today.year().to_string();
        state.month_input = format!("{:02}", today.month());
        state.day_input = format!("{:02}", today.day());
        if api_key.is_empty() {
            state.push_log(format!("[WARN] {API_KEY_ENV} is not set; requests will fail"));
        }
        Self {
            state,
            should_quit: false,
            api_key,
            task_tx,
            tick: 0,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.active_dialog().is_some() {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.state.dismiss_dialog(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.state.cycle_focus(),
            KeyCode::BackTab => self.state.cycle_focus_back(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let max_len = match self.state.focus {
                    InputField::Year => 4,
                    InputField::Month | InputField::Day => 2,
                };
                let field = self.state.focused_input_mut();
                if field.len() < max_len {
                    field.push(c);
                }
            }
            KeyCode::Backspace => {
                self.state.focused_input_mut().pop();
            }
            KeyCode::Enter => self.start_load(),
            KeyCode::Left => self.state.select_prev_tab(),
            KeyCode::Right => self.state.select_next_tab(),
            _ => {}
        }
    }

    fn start_load(&mut self) {
        // No second worker while one is running.
        if !self.state.begin_load() {
            return;
        }
        let request = LoadRequest {
            api_key: self.api_key.clone(),
            year: self.state.year_input.clone(),
            month: self.state.month_input.clone(),
            day: self.state.day_input.clone(),
        };
        self.state.push_log(format!(
            "[INFO] Loading games for {}-{}-{}",
            request.year, request.month, request.day
        ));
        spawn_loader(self.task_tx.clone(), request);
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (task_tx, task_rx) = mpsc::channel();
    let mut app = App::new(api_key, task_tx);
    let res = run_app(&mut terminal, &mut app, task_rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    task_rx: mpsc::Receiver<UiTask>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        // At most one queued task per tick, applied on the UI thread.
        if last_tick.elapsed() >= tick_rate {
            if let Ok(task) = task_rx.try_recv() {
                apply_task(&mut app.state, task);
            }
            app.tick = app.tick.wrapping_add(1);
            last_tick = Instant::now();
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_header(frame, chunks[0], app);
    render_games(frame, chunks[1], &app.state);
    render_console(frame, chunks[2], &app.state);

    let footer = Paragraph::new(footer_text(&app.state)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[3]);

    if let Some(dialog) = app.state.active_dialog() {
        render_dialog(frame, frame.size(), dialog.kind, &dialog.text);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(area);

    let title = Paragraph::new("FIRST PITCH | MLB Game Data Viewer")
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, rows[0]);

    let form = Paragraph::new(form_line(&app.state));
    frame.render_widget(form, rows[1]);

    match app.state.phase {
        LoadPhase::Loading => {
            // Indeterminate bar: the ratio just cycles while the worker runs.
            let ratio = f64::from((app.tick % 20) as u32) / 20.0;
            let gauge = Gauge::default()
                .block(Block::default().borders(Borders::BOTTOM))
                .gauge_style(Style::default().fg(Color::Yellow))
                .label("Loading game data...")
                .ratio(ratio);
            frame.render_widget(gauge, rows[2]);
        }
        LoadPhase::Idle => {
            let hint = Paragraph::new("Ready")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::BOTTOM));
            frame.render_widget(hint, rows[2]);
        }
    }
}

fn form_line(state: &AppState) -> Line<'_> {
    let field = |label: &'static str, value: &str, focused: bool| {
        let style = if focused {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };
        vec![
            Span::raw(label),
            Span::styled(format!(" {value} "), style),
            Span::raw("  "),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(field("Year:", &state.year_input, state.focus == InputField::Year));
    spans.extend(field("Month:", &state.month_input, state.focus == InputField::Month));
    spans.extend(field("Day:", &state.day_input, state.focus == InputField::Day));
    let load_style = match state.phase {
        LoadPhase::Idle => Style::default().fg(Color::Green),
        LoadPhase::Loading => Style::default().fg(Color::DarkGray),
    };
    spans.push(Span::styled("[ Load Game Data (Enter) ]", load_style));
    Line::from(spans)
}

fn footer_text(state: &AppState) -> String {
    if state.active_dialog().is_some() {
        return "Enter/Esc Dismiss | q Quit".to_string();
    }
    "Tab Field | 0-9 Edit | Enter Load | \u{2190}/\u{2192} Game Tab | q Quit".to_string()
}

fn render_games(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.tabs.is_empty() {
        let empty = Paragraph::new("No games loaded yet")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let titles: Vec<Line> = state
        .tabs
        .iter()
        .map(|tab| Line::from(tab.title.as_str()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(state.selected_tab)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, sections[0]);

    if let Some(tab) = state.tabs.get(state.selected_tab) {
        render_chart(frame, sections[1], &tab.chart);
    }
}

fn render_chart(frame: &mut Frame, area: Rect, chart: &StrikeZoneChart) {
    match &chart.body {
        ChartBody::Error { label } => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Percentage(45),
                    Constraint::Length(1),
                    Constraint::Percentage(45),
                ])
                .split(area);
            let placeholder = Paragraph::new(*label)
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            frame.render_widget(placeholder, rows[1]);
        }
        ChartBody::Pitch {
            point,
            header,
            footer,
        } => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(1),
                    Constraint::Length(2),
                ])
                .split(area);

            let context = Paragraph::new(header.as_str())
                .style(Style::default().fg(Color::Green))
                .alignment(Alignment::Center);
            frame.render_widget(context, rows[0]);

            let pitch_point = *point;
            let canvas = Canvas::default()
                .block(Block::default().title("Strike Zone").borders(Borders::ALL))
                .marker(ratatui::symbols::Marker::Braille)
                .x_bounds([0.0, 1.0])
                .y_bounds([0.0, 1.0])
                .paint(move |ctx| {
                    ctx.draw(&Rectangle {
                        x: ZONE_LEFT,
                        y: ZONE_BOTTOM,
                        width: ZONE_WIDTH,
                        height: ZONE_HEIGHT,
                        color: Color::Red,
                    });
                    ctx.draw(&Points {
                        coords: &[pitch_point],
                        color: Color::Red,
                    });
                });
            frame.render_widget(canvas, rows[1]);

            let details = Paragraph::new(footer.as_str())
                .style(Style::default().fg(Color::Blue))
                .alignment(Alignment::Center);
            frame.render_widget(details, rows[2]);
        }
    }
}

fn render_console(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = if state.logs.is_empty() {
        "No log entries yet".to_string()
    } else {
        let keep = area.height.saturating_sub(2) as usize;
        state
            .logs
            .iter()
            .rev()
            .take(keep.max(1))
            .cloned()
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect::<Vec<_>>()
            .join("\n")
    };
    let console = Paragraph::new(text).block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, area);
}

fn render_dialog(frame: &mut Frame, area: Rect, kind: DialogKind, text: &str) {
    let popup_area = centered_rect(50, 30, area);
    frame.render_widget(Clear, popup_area);

    let (title, border_style) = match kind {
        DialogKind::Info => ("Info", Style::default().fg(Color::White)),
        DialogKind::Error => ("Error", Style::default().fg(Color::Red)),
    };
    let body = format!("{text}\n\nPress Enter to dismiss");
    let dialog = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(dialog, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
