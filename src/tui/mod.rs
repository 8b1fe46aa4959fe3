//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, [`AppState`], event handling,
//! and all UI widgets using Ratatui. The display area is always in a
//! determinate state: loading placeholder, failure message, empty-state
//! line, not-found message, card grid, or detail layout.

pub mod brand_filter;
pub mod component;
pub mod product_detail;
pub mod product_grid;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::api::loader::{FetchMessage, FetchPayload, FetchState};
use crate::config::Config;
use crate::constants::{
    APP_BINARY_NAME, APP_NAME, EXPORT_FILE, MSG_DETAIL_FAILED, MSG_FEATURED_MISSING,
    MSG_LOADING, MSG_LOAD_FAILED,
};
use crate::export::{render_detail_page, render_listing_page, render_message_page};
use crate::models::Product;
use crate::routing::Route;
use crate::services::{distinct_brands, ListState, SortMode};

pub use brand_filter::{BrandFilter, BrandFilterEvent};
pub use component::Component;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Cards per grid row; selection movement steps by this much vertically.
const GRID_COLUMNS: usize = 2;

/// What the display area currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Display {
    /// The initial fetch has not resolved yet.
    Loading,
    /// The fetch failed; the Danish failure line is shown.
    Failed,
    /// The homepage found no featured perfume.
    NotFound,
    /// A card grid (list views and the homepage's repeated cards).
    List,
    /// The detail layout for one product.
    Detail(Product),
}

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The card grid.
    Grid,
    /// The brand filter panel.
    Filter,
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    /// The resolved route; fixed for the lifetime of the run.
    pub route: Route,
    /// Application configuration.
    pub config: Config,
    /// Current UI theme.
    pub theme: Theme,
    /// Full and filtered item sets.
    pub list: ListState,
    /// Ordering applied on every redraw.
    pub sort_mode: SortMode,
    /// Brand filter panel.
    pub filter: BrandFilter,
    /// Background fetch tracking.
    pub fetch: FetchState,
    /// What the display area shows.
    pub display: Display,
    /// Which pane has keyboard focus.
    pub focus: Focus,
    /// Selected card index within the visible products.
    pub selected: usize,
    /// Status bar message.
    pub status_message: String,
    /// Whether the application should exit.
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state for `route` with an already-started fetch.
    #[must_use]
    pub fn new(route: Route, config: Config, fetch: FetchState) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);

        Self {
            route,
            config,
            theme,
            list: ListState::new(),
            sort_mode: SortMode::Unsorted,
            filter: BrandFilter::new(),
            fetch,
            display: Display::Loading,
            focus: Focus::Grid,
            selected: 0,
            status_message: MSG_LOADING.to_string(),
            should_quit: false,
        }
    }

    /// The items the grid draws right now: current subset, freshly sorted.
    #[must_use]
    pub fn visible_products(&self) -> Vec<Product> {
        self.list.sorted(self.sort_mode)
    }

    /// Drains the fetch channel and applies a terminal message, if any.
    pub fn absorb_fetch(&mut self) {
        if let Some(message) = self.fetch.poll() {
            self.apply_fetch_message(message);
        }
    }

    /// Applies a fetch result to the display state.
    pub fn apply_fetch_message(&mut self, message: FetchMessage) {
        match message {
            FetchMessage::Loaded(FetchPayload::Listing(products)) => {
                self.list.load(products);
                self.filter.rebuild(distinct_brands(self.list.all()));
                self.display = Display::List;
                self.selected = 0;
                self.status_message = format!("{} produkter hentet", self.list.all().len());
            }
            FetchMessage::Loaded(FetchPayload::Detail(product)) => {
                self.status_message = product.title.clone();
                self.display = Display::Detail(product);
            }
            FetchMessage::Loaded(FetchPayload::Featured(Some(product))) => {
                // Deliberate promotional display: the same product, four
                // times.
                self.list.load(vec![product; 4]);
                self.display = Display::List;
                self.selected = 0;
                self.status_message = format!("Velkommen til {APP_NAME}");
            }
            FetchMessage::Loaded(FetchPayload::Featured(None)) => {
                self.display = Display::NotFound;
                self.status_message = MSG_FEATURED_MISSING.to_string();
            }
            FetchMessage::Failed(_) => {
                self.display = Display::Failed;
                self.status_message = self.failure_message().to_string();
            }
        }
    }

    /// The Danish failure line for this route.
    #[must_use]
    pub const fn failure_message(&self) -> &'static str {
        match self.route {
            Route::Detail(_) => MSG_DETAIL_FAILED,
            Route::Home | Route::List(_) => MSG_LOAD_FAILED,
        }
    }

    /// Renders the current display as a standalone HTML page.
    #[must_use]
    pub fn export_html(&self) -> String {
        match &self.display {
            Display::Loading => render_message_page(MSG_LOADING),
            Display::Failed => render_message_page(self.failure_message()),
            Display::NotFound => render_message_page(MSG_FEATURED_MISSING),
            Display::List => {
                render_listing_page(&self.visible_products(), self.route.shows_price())
            }
            Display::Detail(product) => render_detail_page(product),
        }
    }

    /// Writes the current display to [`EXPORT_FILE`] and reports the
    /// outcome in the status bar.
    pub fn export_to_file(&mut self) {
        match std::fs::write(EXPORT_FILE, self.export_html()) {
            Ok(()) => {
                self.status_message = format!("Skrevet til {EXPORT_FILE}");
            }
            Err(err) => {
                tracing::error!(%err, "export failed");
                self.status_message = format!("Eksport fejlede: {err}");
            }
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.visible_products().len();
        if count == 0 {
            return;
        }
        let current = self.selected.min(count - 1) as isize;
        let moved = (current + delta).clamp(0, count as isize - 1);
        self.selected = moved as usize;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply any fetch result that arrived since the last tick.
        state.absorb_fetch();

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar with nav tabs
            Constraint::Min(5),    // Display area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);
}

/// Render the title bar: app name, current mode, and the nav tabs with
/// the active one marked.
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let active = state.route.active_view();

    let mut spans = vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("· ", Style::default().fg(theme.text_muted)),
        Span::styled(route_title(&state.route), Style::default().fg(theme.text)),
        Span::raw("   "),
    ];

    for (i, (label, value)) in [("Alle", "all"), ("Parfume", "perfume"), ("Makeup", "makeup")]
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(theme.text_muted)));
        }
        let style = if active == Some(value) {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        spans.push(Span::styled(label.to_string(), style));
    }

    let widget = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::BOTTOM))
        .style(Style::default().bg(theme.background));
    f.render_widget(widget, area);
}

/// Danish heading for the current mode.
fn route_title(route: &Route) -> String {
    match route {
        Route::Home => "Forside".to_string(),
        Route::List(scope) => match scope.view_value() {
            "perfume" => "Parfume".to_string(),
            "makeup" => "Makeup".to_string(),
            _ => "Alle produkter".to_string(),
        },
        Route::Detail(id) => format!("Produkt {id}"),
    }
}

/// Render the display area for the current state.
fn render_content(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let area = pad(area);

    match &state.display {
        Display::Loading => {
            product_grid::render_notice(f, area, MSG_LOADING, theme.text_muted);
        }
        Display::Failed => {
            product_grid::render_notice(f, area, state.failure_message(), theme.error);
        }
        Display::NotFound => {
            product_grid::render_notice(f, area, MSG_FEATURED_MISSING, theme.text);
        }
        Display::Detail(product) => {
            product_detail::render_detail(f, area, product, theme);
        }
        Display::List => render_list(f, area, state),
    }
}

/// Render a list view: sort toolbar, optional filter panel, card grid.
fn render_list(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let products = state.visible_products();

    if !state.route.shows_toolbar() {
        // Homepage: no toolbar, no filter panel, no prices.
        product_grid::render_grid(f, area, &products, false, state.selected, theme);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let toolbar = Paragraph::new(Line::from(vec![
        Span::styled("Sortér: ", Style::default().fg(theme.text_secondary)),
        Span::styled(
            state.sort_mode.label(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(toolbar, rows[0]);

    if state.filter.has_entries() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(20)])
            .split(rows[1]);
        state.filter.render(f, columns[0], theme);
        product_grid::render_grid(
            f,
            columns[1],
            &products,
            state.route.shows_price(),
            state.selected,
            theme,
        );
    } else {
        product_grid::render_grid(
            f,
            rows[1],
            &products,
            state.route.shows_price(),
            state.selected,
            theme,
        );
    }
}

/// Shrinks an area by a one-cell margin.
fn pad(area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0)])
        .margin(1)
        .split(area)[0]
}

/// Handle a key event; returns `Ok(true)` when the app should exit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match state.focus {
        Focus::Filter => handle_filter_key(state, key),
        Focus::Grid => handle_grid_key(state, key),
    }
}

fn handle_filter_key(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if let Some(event) = state.filter.handle_input(key) {
        match event {
            BrandFilterEvent::Applied(selected) => {
                state.list.apply_filter(&selected);
                state.selected = 0;
                state.status_message = if selected.is_empty() {
                    "Ingen mærker valgt; viser alle".to_string()
                } else {
                    format!("{} mærker valgt", selected.len())
                };
            }
            BrandFilterEvent::Cleared => {
                state.list.clear_filter();
                state.selected = 0;
                state.status_message = "Filter ryddet".to_string();
            }
            BrandFilterEvent::Dismissed => {
                state.focus = Focus::Grid;
            }
        }
    }
    Ok(false)
}

fn handle_grid_key(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_quit = true;
            return Ok(true);
        }
        KeyCode::Char('e') => state.export_to_file(),
        KeyCode::Char('s') if state.route.shows_toolbar() => {
            state.sort_mode = state.sort_mode.cycled();
            state.status_message = format!("Sortering: {}", state.sort_mode.label());
        }
        KeyCode::Char('f') | KeyCode::Tab
            if state.route.shows_toolbar()
                && state.display == Display::List
                && state.filter.has_entries() =>
        {
            state.focus = Focus::Filter;
        }
        KeyCode::Left | KeyCode::Char('h') => state.move_selection(-1),
        KeyCode::Right | KeyCode::Char('l') => state.move_selection(1),
        KeyCode::Up | KeyCode::Char('k') => state.move_selection(-(GRID_COLUMNS as isize)),
        KeyCode::Down | KeyCode::Char('j') => state.move_selection(GRID_COLUMNS as isize),
        KeyCode::Enter => {
            if let Some(product) = state.visible_products().get(state.selected) {
                state.status_message =
                    format!("Åbn med: {APP_BINARY_NAME} \"{}\"", product.link_query());
            }
        }
        _ => {}
    }
    Ok(false)
}
