//! Single-product detail view.
//!
//! One structured layout: back hint, brand, title, formatted price, the
//! inert add-to-cart control, description, and the image URL (terminals
//! don't render the image itself).

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::constants::{LABEL_ADD_TO_CART, LABEL_BACK};
use crate::models::Product;
use crate::services::format_price;

use super::theme::Theme;

/// Renders the detail layout for `product`.
pub fn render_detail(f: &mut Frame, area: Rect, product: &Product, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // back hint
            Constraint::Length(1), // brand
            Constraint::Length(1), // title
            Constraint::Length(1), // price
            Constraint::Length(1), // spacer
            Constraint::Length(1), // add-to-cart control
            Constraint::Length(1), // spacer
            Constraint::Min(1),    // description + image URL
        ])
        .split(inner);

    let back = Paragraph::new(Line::styled(
        format!("{LABEL_BACK} (?view=all)"),
        Style::default().fg(theme.text_muted),
    ));
    f.render_widget(back, chunks[0]);

    let brand = Paragraph::new(Line::styled(
        product.display_brand().to_string(),
        Style::default().fg(theme.text_secondary),
    ));
    f.render_widget(brand, chunks[1]);

    let title = Paragraph::new(Line::styled(
        product.title.clone(),
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(title, chunks[2]);

    let price = Paragraph::new(Line::styled(
        format_price(product.price),
        Style::default().fg(theme.accent),
    ));
    f.render_widget(price, chunks[3]);

    // The cart is a display element only; there is no cart system.
    let add = Paragraph::new(Line::styled(
        format!("[ {LABEL_ADD_TO_CART} ]"),
        Style::default()
            .fg(theme.background)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(add, chunks[5]);

    render_body(f, chunks[7], product, theme);
}

fn render_body(f: &mut Frame, area: Rect, product: &Product, theme: &Theme) {
    let mut lines = vec![Line::styled(
        product.description.clone(),
        Style::default().fg(theme.text),
    )];

    let image = product.image_url();
    if !image.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("Billede: {image}"),
            Style::default().fg(theme.text_muted),
        ));
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(body, area);
}
