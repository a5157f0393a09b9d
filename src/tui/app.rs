use std::io;
use std::path::PathBuf;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::{ConfigError, load_config};
use crate::io::logging::{LogError, init_logging};
use crate::model::{Config, Filter, Task, TaskId, TodoState};
use crate::ops::{Action, Store};

use super::input;
use super::render;
use super::theme::Theme;

/// Which region of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The "add new" input
    Draft,
    /// The task rows
    List,
    /// The text field of the row in edit mode
    Edit,
}

/// Error type for running the TUI
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Log(#[from] LogError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// What the command line asked for
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    /// Overrides `ui.filter`
    pub filter: Option<Filter>,
    /// Tasks added at startup
    pub seed: Vec<String>,
}

/// Main application state: the store plus terminal-only interaction state
pub struct App {
    pub store: Store,
    pub focus: Focus,
    /// Row cursor, an index into the visible tasks
    pub cursor: usize,
    /// Byte offset of the caret in the draft text
    pub draft_cursor: usize,
    /// Byte offset of the caret in the edit session text
    pub edit_cursor: usize,
    pub theme: Theme,
    pub title: String,
    pub show_key_hints: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            store: Store::new(TodoState::with_filter(config.ui.filter)),
            focus: Focus::Draft,
            cursor: 0,
            draft_cursor: 0,
            edit_cursor: 0,
            theme: Theme::from_config(&config.ui),
            title: config.ui.title.clone(),
            show_key_hints: config.ui.show_key_hints,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &TodoState {
        self.store.state()
    }

    /// Add each entry as a task, the same way typing it and pressing Enter would
    pub fn seed_tasks<I, S>(&mut self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for text in texts {
            self.store.dispatch(Action::SetDraft(text.into()));
            self.store.dispatch(Action::AddTask);
        }
        self.store.dispatch(Action::SetDraft(String::new()));
        self.draft_cursor = 0;
        if !self.state().tasks.is_empty() {
            self.focus = Focus::List;
        }
    }

    /// Dispatch an action and keep the terminal state consistent with the result
    pub fn dispatch(&mut self, action: Action) -> bool {
        let changed = self.store.dispatch(action);
        self.sync_after_dispatch();
        changed
    }

    fn sync_after_dispatch(&mut self) {
        let draft_len = self.state().draft_text.len();
        let edit_len = self.state().editing.as_ref().map(|s| s.text.len());
        self.draft_cursor = self.draft_cursor.min(draft_len);
        match edit_len {
            Some(len) => self.edit_cursor = self.edit_cursor.min(len),
            None => {
                self.edit_cursor = 0;
                if self.focus == Focus::Edit {
                    self.set_focus(Focus::List);
                }
            }
        }
        self.clamp_cursor();
    }

    /// Keep the row cursor inside the visible list
    pub fn clamp_cursor(&mut self) {
        let len = self.state().visible_tasks().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            tracing::trace!(from = ?self.focus, to = ?focus, "focus");
            self.focus = focus;
        }
    }

    /// The visible task under the row cursor
    pub fn cursor_task(&self) -> Option<&Task> {
        self.state().visible_tasks().get(self.cursor).copied()
    }

    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.cursor_task().map(|t| t.id)
    }

    /// Move the row cursor by `delta`, clamped to the visible list
    pub fn move_cursor(&mut self, delta: i32) {
        let len = self.state().visible_tasks().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = self.cursor as i64 + delta as i64;
        self.cursor = next.clamp(0, len as i64 - 1) as usize;
    }
}

/// Run the TUI application
pub fn run(opts: RunOptions) -> Result<(), AppError> {
    let config = load_config(opts.config_path.as_deref())?;
    let log_file = opts.log_file.as_deref().or(config.log.file.as_deref());
    init_logging(log_file, config.log.level.as_deref())?;

    let mut app = App::new(&config);
    if let Some(filter) = opts.filter {
        app.dispatch(Action::SetFilter(filter));
    }
    app.seed_tasks(opts.seed);
    app.store.subscribe(|state, revision| {
        tracing::trace!(
            revision,
            tasks = state.tasks.len(),
            filter = ?state.filter,
            "state changed"
        );
    });
    tracing::info!(tasks = app.state().tasks.len(), "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    tracing::info!(
        tasks = app.state().tasks.len(),
        remaining = app.state().remaining_count(),
        "exiting"
    );
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), AppError> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
            Event::Paste(text) => input::handle_paste(app, &text),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
