//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle: input and timer messages go through
//! [`App::update`], the single place where state changes.

use chrono::{DateTime, Utc};
use prodx_config::Config;
use prodx_protocol::{Countdown, Message, TaskId, TaskIntent, TaskStore};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::{
    AppState, Focus,
    event::{event_to_message, form_event_to_message, poll_event},
    form_state::FormState,
    layout::{
        HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATS_HEIGHT,
        STATUS_BAR_HEIGHT, TOOLBAR_HEIGHT,
    },
    terminal::AppTerminal,
    ticker::CountdownTicker,
    widgets::{
        grid::{card_areas, card_at, column_count, render_empty_hint, render_grid, visible_rows},
        render_form, render_help_overlay, render_stats, render_status_bar, render_toolbar,
        toolbar::add_button_area,
    },
};

/// The main application struct.
///
/// Owns the dashboard state, the creation form, and the per-card countdown
/// timers along with the channel they report on.
#[derive(Debug)]
pub struct App {
    state: AppState,
    form: Option<FormState>,
    should_quit: bool,
    /// Last known terminal area.
    last_area: Rect,
    /// Whether the header was shown in the last render.
    header_visible: bool,
    /// Toolbar area from the last render, used for click hit-testing.
    toolbar_area: Rect,
    /// Cards displayed in the last render with their areas.
    cards: Vec<(usize, Rect)>,
    config: Config,
    ticker: CountdownTicker,
    tx: UnboundedSender<Message>,
    rx: UnboundedReceiver<Message>,
}

impl App {
    /// Creates a new application over the given store with default
    /// configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use prodx_protocol::TaskStore;
    /// use prodx_tui::App;
    ///
    /// let app = App::new(TaskStore::new());
    /// assert!(!app.is_form_open());
    /// ```
    #[must_use]
    pub fn new(store: TaskStore) -> Self {
        Self::with_config(store, Config::default())
    }

    /// Creates a new application with the given store and configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use prodx_config::Config;
    /// use prodx_protocol::TaskStore;
    /// use prodx_tui::App;
    ///
    /// let app = App::with_config(TaskStore::new(), Config::default());
    /// assert_eq!(app.active_timers(), 0);
    /// ```
    #[must_use]
    pub fn with_config(store: TaskStore, config: Config) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let ticker = CountdownTicker::new(
            tx.clone(),
            config.countdown.tick_interval(),
            config.countdown.reference_window(),
        );
        Self {
            state: AppState::new(store),
            form: None,
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
            toolbar_area: Rect::default(),
            cards: Vec::new(),
            config,
            ticker,
            tx,
            rx,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the open creation form, if any.
    #[must_use]
    pub fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    /// Returns whether the creation form is open.
    #[must_use]
    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    /// Returns whether a quit was requested.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the number of running card timers.
    #[must_use]
    pub fn active_timers(&self) -> usize {
        self.ticker.active()
    }

    /// Returns a sender that feeds messages into [`App::drain_messages`].
    #[must_use]
    pub fn sender(&self) -> UnboundedSender<Message> {
        self.tx.clone()
    }

    /// Updates the application state based on a message.
    ///
    /// Timer ticks are always recorded. While the form is open it receives
    /// all other messages; while help is visible most messages only dismiss it.
    pub fn update(&mut self, msg: Message) {
        if let Message::Tick { id, countdown } = msg {
            self.state.record_countdown(id, countdown);
            return;
        }

        if msg.is_terminating() {
            self.should_quit = true;
            return;
        }

        if self.form.is_some() {
            self.update_form(msg);
            return;
        }

        // When help is visible, most keys should dismiss it
        if self.state.help_visible {
            match msg {
                Message::ToggleHelp | Message::Escape => self.state.toggle_help(),
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        match msg {
            Message::Escape => self.state.clear_selection(),
            Message::NavigateLeft => self.state.navigate_left(),
            Message::NavigateRight => self.state.navigate_right(),
            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::ToggleHelp => self.state.toggle_help(),
            Message::OpenForm => self.open_form(),
            Message::CycleStatus => {
                if let Some(id) = self.state.selected_id() {
                    self.state.apply(TaskIntent::CycleStatus { id });
                }
            }
            Message::DeleteSelected => {
                if let Some(id) = self.state.selected_id() {
                    self.state.apply(TaskIntent::Delete { id });
                    info!(task_id = %id, "task deleted");
                }
            }
            Message::ClickAt { column, row } => self.handle_click(column, row),
            _ => {}
        }
    }

    fn update_form(&mut self, msg: Message) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        match msg {
            Message::CloseForm | Message::Escape => self.close_form(),
            Message::FormNextField => form.next_field(),
            Message::FormPrevField => form.prev_field(),
            Message::FormInput { ch } => form.input_char(ch),
            Message::FormBackspace => form.backspace(),
            Message::FormClearField => form.clear_field(),
            Message::FormCursorLeft => form.cursor_left(),
            Message::FormCursorRight => form.cursor_right(),
            Message::FormSubmit => match form.submit() {
                Ok(draft) => {
                    self.close_form();
                    let title = draft.title.clone();
                    if let Some(id) = self.state.apply(TaskIntent::Create(draft)) {
                        info!(task_id = %id, %title, "task created");
                    }
                }
                Err(err) => debug!(error = %err, "task form rejected"),
            },
            _ => {}
        }
    }

    fn open_form(&mut self) {
        self.form = Some(FormState::new(Utc::now()));
        self.state.focus = Focus::Form;
    }

    fn close_form(&mut self) {
        self.form = None;
        self.state.focus = Focus::Dashboard;
    }

    /// Handles a mouse click at the given coordinates.
    ///
    /// The toolbar button opens the form; a card click selects the card.
    fn handle_click(&mut self, column: u16, row: u16) {
        if add_button_area(self.toolbar_area).contains((column, row).into()) {
            self.open_form();
        } else if let Some(index) = card_at(&self.cards, column, row) {
            self.state.select(index);
        }
    }

    /// Returns the cards displayed by the last render with their deadlines.
    #[must_use]
    pub fn displayed_cards(&self) -> Vec<(TaskId, DateTime<Utc>)> {
        let tasks = self.state.store.tasks();
        self.cards
            .iter()
            .filter_map(|(index, _)| tasks.get(*index))
            .map(|task| (task.id, task.deadline))
            .collect()
    }

    /// Starts timers for newly displayed cards and stops the rest.
    ///
    /// Must be called from within a tokio runtime.
    pub fn sync_timers(&mut self) {
        let displayed = self.displayed_cards();
        self.ticker.reconcile(&displayed);
    }

    /// Applies every message waiting on the channel. Returns how many were
    /// applied.
    pub fn drain_messages(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.rx.try_recv() {
            self.update(msg);
            applied += 1;
        }
        applied
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - Below minimum dimensions, shows a "terminal too small" message.
    /// - Below `MIN_HEIGHT_WITH_HEADER`, hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.cards.clear();
            self.state.retain_countdowns(&[]);
            self.toolbar_area = Rect::default();
            self.render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let content_area = if show_header {
            let [header_area, content_area] =
                Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                    .areas(area);
            self.render_header(frame, header_area);
            content_area
        } else {
            area
        };

        let [stats_area, toolbar_area, grid_area, status_area] = Layout::vertical([
            Constraint::Length(STATS_HEIGHT),
            Constraint::Length(TOOLBAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(content_area);
        self.toolbar_area = toolbar_area;

        self.layout_cards(grid_area);

        let buf = frame.buffer_mut();
        render_stats(&self.state.store.stats(), stats_area, buf);
        render_toolbar(self.state.store.len(), toolbar_area, buf);

        if self.state.store.is_empty() {
            render_empty_hint(grid_area, buf);
        } else {
            let now = Utc::now();
            let window = self.config.countdown.reference_window();
            let state = &self.state;
            render_grid(
                state.store.tasks(),
                &self.cards,
                state.selected,
                |task| {
                    state
                        .countdown(task.id)
                        .copied()
                        .unwrap_or_else(|| Countdown::with_window(task.deadline, now, window))
                },
                self.config.countdown.warning_threshold,
                buf,
            );
        }

        render_status_bar(
            self.state.focus,
            self.state.selected.is_some(),
            status_area,
            buf,
        );

        if let Some(form) = &self.form {
            render_form(form, area, buf);
        }

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Fits the grid to `area`, keeps the selection in view, records which
    /// cards are displayed, and forgets countdowns of hidden cards.
    fn layout_cards(&mut self, area: Rect) {
        let columns = column_count(area.width);
        self.state.columns = columns;
        self.state.scroll_to_selection(visible_rows(area.height));
        self.cards = card_areas(
            area,
            self.state.store.len(),
            columns,
            self.state.scroll_row,
        );

        let displayed: Vec<TaskId> = self
            .displayed_cards()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        self.state.retain_countdowns(&displayed);
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// Each iteration draws, reconciles the card timers with what is on
    /// screen, handles at most one input event, then applies pending timer
    /// ticks. All timers are stopped before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use prodx_protocol::TaskStore;
    /// use prodx_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(TaskStore::new());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        info!(tasks = self.state.store.len(), "dashboard started");

        loop {
            terminal.draw(|frame| self.view(frame))?;
            self.sync_timers();

            if let Some(event) = poll_event()? {
                let msg = if self.form.is_some() {
                    form_event_to_message(&event)
                } else {
                    event_to_message(&event)
                };
                if let Some(msg) = msg {
                    self.update(msg);
                }
            }

            self.drain_messages();

            if self.should_quit {
                break;
            }
        }

        self.ticker.stop_all();
        info!("dashboard stopped");
        Ok(())
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "ProdX",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(
                "Your Personal Productivity Tracker",
                Style::default().fg(Color::White),
            ),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }
}
