// ===== benchdash/src/tui/app.rs =====
//
// Interactive dashboard application: owns the selection state, the RNG,
// and the benchmark results memoized on the (sku, build) pair. The run
// loop is the usual crossterm lifecycle: raw mode + alternate screen,
// poll/read, draw, restore on exit.

use crate::catalog;
use crate::error::DashResult;
use crate::state::{DashEvent, DashState, ViewMode};
use crate::synth::scores::{self, GameResult};
use crate::tui::view;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Table,
}

/// One visible line of the sidebar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    Program(&'static str),
    Sku(&'static str),
    BuildHeader,
    Build(&'static str),
}

pub struct App {
    pub state: DashState,
    pub rng: fastrand::Rng,
    pub results: Vec<GameResult>,
    results_key: Option<(String, String)>,
    pub focus: Focus,
    pub sidebar_cursor: usize,
    pub table_cursor: usize,
    pub running: bool,
    tick: Duration,
}

impl App {
    pub fn new(seed: Option<u64>, tick: Duration) -> Self {
        let rng = match seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };
        Self {
            state: DashState::default(),
            rng,
            results: Vec::new(),
            results_key: None,
            focus: Focus::Sidebar,
            sidebar_cursor: 0,
            table_cursor: 0,
            running: true,
            tick,
        }
    }

    /// The sidebar flattened to its visible rows: every program, SKUs
    /// under expanded programs, and the build list once a SKU is chosen.
    pub fn sidebar_rows(&self) -> Vec<SidebarRow> {
        let mut rows = Vec::new();
        for p in catalog::PROGRAMS {
            rows.push(SidebarRow::Program(p.name));
            if self.state.expanded_programs.contains(p.name) {
                for sku in p.skus {
                    rows.push(SidebarRow::Sku(sku));
                }
            }
        }
        if self.state.sku.is_some() {
            rows.push(SidebarRow::BuildHeader);
            for b in catalog::BUILDS {
                rows.push(SidebarRow::Build(b));
            }
        }
        rows
    }

    /// Route an event through the reducer, then refresh anything derived
    /// from the selection.
    pub fn dispatch(&mut self, event: DashEvent) {
        self.state.apply(event);
        self.refresh_results();
        let rows = self.sidebar_rows().len();
        self.sidebar_cursor = self.sidebar_cursor.min(rows.saturating_sub(1));
        self.table_cursor = self.table_cursor.min(self.results.len().saturating_sub(1));
        if self.state.view_mode() != ViewMode::Results {
            self.focus = Focus::Sidebar;
        }
    }

    /// Reroll the benchmark table only when the (sku, build) pair
    /// actually changed; toggling a row expansion must not reroll.
    fn refresh_results(&mut self) {
        let key = self.state.results_key();
        if key == self.results_key {
            return;
        }
        self.results = match key {
            Some(_) => {
                debug!(?key, "regenerating benchmark results");
                scores::generate(&mut self.rng)
            }
            None => Vec::new(),
        };
        self.results_key = key;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::Enter => self.activate(),
            KeyCode::Char(' ') => self.toggle_under_cursor(),
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar if self.state.view_mode() == ViewMode::Results => Focus::Table,
            Focus::Sidebar => Focus::Sidebar,
            Focus::Table => Focus::Sidebar,
        };
    }

    fn move_cursor(&mut self, step: isize) {
        match self.focus {
            Focus::Sidebar => {
                let len = self.sidebar_rows().len();
                self.sidebar_cursor = step_index(self.sidebar_cursor, step, len);
            }
            Focus::Table => {
                self.table_cursor = step_index(self.table_cursor, step, self.results.len());
            }
        }
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Sidebar => {
                let rows = self.sidebar_rows();
                match rows.get(self.sidebar_cursor) {
                    Some(SidebarRow::Program(name)) => {
                        self.dispatch(DashEvent::SelectProgram(name.to_string()));
                    }
                    Some(SidebarRow::Sku(name)) => {
                        self.dispatch(DashEvent::SelectSku(name.to_string()));
                    }
                    Some(SidebarRow::Build(label)) => {
                        self.dispatch(DashEvent::SelectBuild(label.to_string()));
                        self.focus = Focus::Table;
                        self.table_cursor = 0;
                    }
                    Some(SidebarRow::BuildHeader) | None => {}
                }
            }
            Focus::Table => {
                if let Some(result) = self.results.get(self.table_cursor) {
                    self.dispatch(DashEvent::ToggleGame(result.game.to_string()));
                }
            }
        }
    }

    /// Space collapses/expands the program under the cursor without
    /// changing the selection (Enter always selects-and-expands).
    fn toggle_under_cursor(&mut self) {
        if self.focus != Focus::Sidebar {
            return;
        }
        let rows = self.sidebar_rows();
        if let Some(SidebarRow::Program(name)) = rows.get(self.sidebar_cursor) {
            self.dispatch(DashEvent::ToggleProgram(name.to_string()));
        }
    }

    pub fn run(&mut self) -> DashResult<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        while self.running {
            terminal.draw(|f| view::draw(f, self))?;
            if event::poll(self.tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}

fn step_index(current: usize, step: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let last = len - 1;
    if step < 0 {
        current.saturating_sub(step.unsigned_abs())
    } else {
        (current + step as usize).min(last)
    }
}
