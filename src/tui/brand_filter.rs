//! Brand filter panel: checkbox-driven subset selection over the full
//! fetched item set.
//!
//! One checkbox per distinct brand, plus Apply and Clear controls. The
//! panel is built from the item set after every load; its one-time setup
//! (initial focus) is guarded by an explicit `initialized` flag so
//! rebuilding the brand list never re-runs it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::component::Component;
use super::theme::Theme;

/// One selectable brand row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandEntry {
    /// Brand name, exactly as it appears on the products.
    pub name: String,
    /// Whether the checkbox is ticked.
    pub checked: bool,
}

/// State for the brand filter panel.
#[derive(Debug, Clone, Default)]
pub struct BrandFilterState {
    /// Checkbox rows, in display order.
    entries: Vec<BrandEntry>,
    /// Focused row: entry index, or the Apply/Clear controls after them.
    focus: usize,
    /// One-time setup guard; set by the first build and never again.
    initialized: bool,
}

impl BrandFilterState {
    /// Focus index of the Apply control.
    fn apply_index(&self) -> usize {
        self.entries.len()
    }

    /// Focus index of the Clear control.
    fn clear_index(&self) -> usize {
        self.entries.len() + 1
    }

    /// Rebuilds the checkbox rows for `brands`.
    ///
    /// Check state is preserved for brands that are still present. The
    /// first build also performs the one-time setup (cursor to the top);
    /// later rebuilds leave the cursor where it can stay valid.
    pub fn rebuild(&mut self, brands: Vec<String>) {
        let previous = std::mem::take(&mut self.entries);
        self.entries = brands
            .into_iter()
            .map(|name| {
                let checked = previous
                    .iter()
                    .any(|entry| entry.checked && entry.name == name);
                BrandEntry { name, checked }
            })
            .collect();

        if self.initialized {
            self.focus = self.focus.min(self.clear_index());
        } else {
            self.focus = 0;
            self.initialized = true;
        }
    }

    /// Whether the one-time setup has run.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The checkbox rows.
    #[must_use]
    pub fn entries(&self) -> &[BrandEntry] {
        &self.entries
    }

    /// Names of the currently ticked brands, in display order.
    #[must_use]
    pub fn selected(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.checked)
            .map(|entry| entry.name.clone())
            .collect()
    }

    /// Unticks every checkbox.
    pub fn clear_all(&mut self) {
        for entry in &mut self.entries {
            entry.checked = false;
        }
    }

    /// Toggles the focused checkbox; no-op on the control rows.
    pub fn toggle_focused(&mut self) {
        if let Some(entry) = self.entries.get_mut(self.focus) {
            entry.checked = !entry.checked;
        }
    }

    /// Moves focus one row up, wrapping.
    pub fn focus_up(&mut self) {
        if self.focus == 0 {
            self.focus = self.clear_index();
        } else {
            self.focus -= 1;
        }
    }

    /// Moves focus one row down, wrapping.
    pub fn focus_down(&mut self) {
        if self.focus >= self.clear_index() {
            self.focus = 0;
        } else {
            self.focus += 1;
        }
    }
}

/// Events emitted by the brand filter panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandFilterEvent {
    /// Apply the given brand selection (empty means no filtering).
    Applied(Vec<String>),
    /// All checkboxes were reset; show the full set again.
    Cleared,
    /// The user left the panel without applying.
    Dismissed,
}

/// Brand filter panel component.
#[derive(Debug, Clone, Default)]
pub struct BrandFilter {
    state: BrandFilterState,
}

impl BrandFilter {
    /// Creates an empty panel; [`BrandFilter::rebuild`] fills it after a
    /// load.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the checkbox rows from the distinct brand names.
    pub fn rebuild(&mut self, brands: Vec<String>) {
        self.state.rebuild(brands);
    }

    /// Whether the panel has any brands to offer.
    #[must_use]
    pub fn has_entries(&self) -> bool {
        !self.state.entries().is_empty()
    }

    /// Read access to the panel state (used by tests and rendering).
    #[must_use]
    pub const fn state(&self) -> &BrandFilterState {
        &self.state
    }
}

impl Component for BrandFilter {
    type Event = BrandFilterEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => Some(BrandFilterEvent::Dismissed),
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.focus_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.focus_down();
                None
            }
            KeyCode::Char(' ') => {
                self.state.toggle_focused();
                None
            }
            KeyCode::Char('a') => Some(BrandFilterEvent::Applied(self.state.selected())),
            KeyCode::Char('c') => {
                self.state.clear_all();
                Some(BrandFilterEvent::Cleared)
            }
            KeyCode::Enter => {
                if self.state.focus == self.state.apply_index() {
                    Some(BrandFilterEvent::Applied(self.state.selected()))
                } else if self.state.focus == self.state.clear_index() {
                    self.state.clear_all();
                    Some(BrandFilterEvent::Cleared)
                } else {
                    self.state.toggle_focused();
                    None
                }
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Mærker ")
            .style(Style::default().fg(theme.primary).bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines = Vec::new();
        for (i, entry) in self.state.entries().iter().enumerate() {
            let checkbox = if entry.checked { "[x]" } else { "[ ]" };
            let style = row_style(theme, self.state.focus == i, entry.checked);
            lines.push(Line::styled(format!(" {checkbox} {}", entry.name), style));
        }

        lines.push(Line::raw(""));
        lines.push(Line::styled(
            " [ Anvend ]",
            button_style(theme, self.state.focus == self.state.apply_index()),
        ));
        lines.push(Line::styled(
            " [ Ryd ]",
            button_style(theme, self.state.focus == self.state.clear_index()),
        ));

        f.render_widget(Paragraph::new(lines), inner);
    }
}

fn row_style(theme: &Theme, focused: bool, checked: bool) -> Style {
    if focused {
        Style::default()
            .fg(theme.background)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else if checked {
        Style::default().fg(theme.success)
    } else {
        Style::default().fg(theme.text)
    }
}

fn button_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(theme.background)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent)
    }
}
