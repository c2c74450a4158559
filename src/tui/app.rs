use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::backend::FileBackend;
use crate::io::config_io;
use crate::model::{PlanKind, PlannerConfig};
use crate::ops::progress::ProgressStore;
use crate::ops::session::{Session, ViewSelection};
use crate::render::EntryCard;
use crate::util::EthiopicDate;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Notes editor popup is open
    Notes,
    Search,
}

/// Per-view cursor and scroll state
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub cursor: usize,
    pub scroll_offset: usize,
}

/// Main application state
pub struct App {
    pub session: Session<FileBackend>,
    pub config: PlannerConfig,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    pub show_help: bool,
    /// Per-view cursor/scroll, keyed by view_key()
    pub view_states: HashMap<String, ViewState>,
    /// Entry the details popup is open for
    pub details_id: Option<String>,
    /// Notes editor buffer (target lives in the session)
    pub notes_buffer: String,
    /// Search mode: query being typed
    pub search_input: String,
    /// Last executed search pattern
    pub last_search: Option<String>,
}

impl App {
    pub fn new(session: Session<FileBackend>, config: PlannerConfig) -> Self {
        let theme = Theme::from_config(&config.ui);
        App {
            session,
            config,
            theme,
            mode: Mode::Navigate,
            should_quit: false,
            show_help: false,
            view_states: HashMap::new(),
            details_id: None,
            notes_buffer: String::new(),
            search_input: String::new(),
            last_search: None,
        }
    }

    /// Stable key for the current view's cursor state
    pub fn view_key(&self) -> String {
        match self.session.view() {
            ViewSelection::Calendar(index) => format!("calendar:{}", index),
            ViewSelection::Chronological => "chronological".to_string(),
            ViewSelection::Nt90 => "nt90".to_string(),
        }
    }

    pub fn view_state(&mut self) -> &mut ViewState {
        let key = self.view_key();
        self.view_states.entry(key).or_default()
    }

    /// Cards for the current view (recomputed; the store is the only state)
    pub fn cards(&self) -> Vec<EntryCard> {
        self.session.cards()
    }

    /// Identifier under the cursor, if any
    pub fn selected_id(&self) -> Option<String> {
        let cards = self.cards();
        let key = self.view_key();
        let cursor = self.view_states.get(&key).map_or(0, |s| s.cursor);
        cards.get(cursor).map(|c| c.id.clone())
    }

    /// Keep the cursor inside the current card list.
    pub fn clamp_cursor(&mut self) {
        let len = self.cards().len();
        let state = self.view_state();
        if len == 0 {
            state.cursor = 0;
        } else if state.cursor >= len {
            state.cursor = len - 1;
        }
    }

    /// Jump to today's reading in the calendar view.
    pub fn jump_to_today(&mut self) {
        let today = EthiopicDate::today();
        self.session.select_month(today.month_index());
        let day_index = (today.day as usize).saturating_sub(1);
        let len = self.cards().len();
        let state = self.view_state();
        // Pagume 6 has no entry; land on the last card instead
        state.cursor = if len == 0 {
            0
        } else {
            day_index.min(len - 1)
        };
        state.scroll_offset = 0;
    }

    /// Active search regex for highlighting and match jumps.
    /// Falls back to a literal match when the pattern is not valid regex.
    pub fn active_search_re(&self) -> Option<Regex> {
        let pattern = match self.mode {
            Mode::Search if !self.search_input.is_empty() => &self.search_input,
            Mode::Navigate => self.last_search.as_deref()?,
            _ => return None,
        };
        Regex::new(&format!("(?i){}", pattern))
            .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
            .ok()
    }
}

/// Run the TUI application
pub fn run(dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let start = match dir {
        Some(d) => Path::new(d).to_path_buf(),
        None => std::env::current_dir()?,
    };
    let lectio_dir = config_io::discover_dir(&start)?;
    let config = config_io::load_config(&lectio_dir)?;

    let store = ProgressStore::load(FileBackend::new(lectio_dir));
    let initial_plan =
        PlanKind::parse_name(&config.planner.default_plan).unwrap_or(PlanKind::Calendar);
    let session = Session::new(store, initial_plan);

    let mut app = App::new(session, config);
    if initial_plan == PlanKind::Calendar && app.config.planner.follow_today {
        app.jump_to_today();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
