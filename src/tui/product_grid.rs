//! Product card grid for list views and the homepage.
//!
//! Renders the visible (filtered, freshly sorted) items as a two-column
//! grid of cards, scrolled so the selected card stays on screen. An empty
//! item set renders the Danish empty-state line instead of a bare grid.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::constants::MSG_EMPTY;
use crate::models::Product;
use crate::services::format_price;

use super::theme::Theme;

/// Cards per grid row.
const GRID_COLUMNS: usize = 2;

/// Terminal rows per card, borders included.
const CARD_HEIGHT: u16 = 5;

/// Renders the card grid, or the empty-state message.
pub fn render_grid(
    f: &mut Frame,
    area: Rect,
    products: &[Product],
    show_price: bool,
    selected: usize,
    theme: &Theme,
) {
    if products.is_empty() {
        render_notice(f, area, MSG_EMPTY, theme.text);
        return;
    }

    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let total_rows = products.len().div_ceil(GRID_COLUMNS);
    let selected_row = selected.min(products.len().saturating_sub(1)) / GRID_COLUMNS;

    // Scroll so the selected row is always within the viewport.
    let first_row = selected_row
        .saturating_sub(visible_rows.saturating_sub(1))
        .min(total_rows.saturating_sub(visible_rows));

    let row_constraints: Vec<Constraint> = (0..visible_rows)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (slot, row_area) in row_areas.iter().enumerate() {
        let row = first_row + slot;
        if row >= total_rows {
            break;
        }

        let column_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);

        for (column, column_area) in column_areas.iter().enumerate() {
            let index = row * GRID_COLUMNS + column;
            if let Some(product) = products.get(index) {
                render_card(f, *column_area, product, show_price, index == selected, theme);
            }
        }
    }
}

/// Renders a single product card.
fn render_card(
    f: &mut Frame,
    area: Rect,
    product: &Product,
    show_price: bool,
    selected: bool,
    theme: &Theme,
) {
    let border_style = if selected {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_muted)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::styled(
            product.display_brand().to_string(),
            Style::default().fg(theme.text_secondary),
        ),
        Line::styled(
            product.title.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ];
    if show_price {
        lines.push(Line::styled(
            format_price(product.price),
            Style::default().fg(theme.accent),
        ));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Renders a display-area notice (loading, empty, failure, not-found).
pub fn render_notice(f: &mut Frame, area: Rect, text: &str, color: ratatui::style::Color) {
    let notice = Paragraph::new(Line::styled(text.to_string(), Style::default().fg(color)))
        .wrap(Wrap { trim: false });
    f.render_widget(notice, area);
}
