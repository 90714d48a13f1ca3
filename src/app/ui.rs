use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    app::{Field, converter::Converter, utils::format_result},
    models::CurrencyCode,
};

const PLACEHOLDER: &str = "Enter your API key and press Enter to see results";
const HELP: &str =
    "Tab: next field  Enter: convert  ↑/↓: pick currency  F2: show/hide key  F3: swap  F5: refresh  Esc: quit";

pub fn render(
    frame: &mut Frame,
    converter: &Converter,
    focus: Field,
    key_input: &str,
    show_key: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new("Currency Converter · fixer.io, EUR base")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let key_text = if show_key {
        key_input.to_string()
    } else {
        "•".repeat(key_input.chars().count())
    };
    let key_text = if key_text.is_empty() && focus != Field::ApiKey {
        String::from("Enter your free API key")
    } else {
        key_text
    };
    render_input(frame, chunks[1], "fixer.io API Key", &key_text, focus == Field::ApiKey);
    render_input(
        frame,
        chunks[2],
        "Amount",
        converter.amount_input(),
        focus == Field::Amount,
    );

    let selectors = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(10),
            Constraint::Percentage(45),
        ])
        .split(chunks[3]);

    render_input(
        frame,
        selectors[0],
        "From",
        &currency_label(converter, converter.source()),
        focus == Field::Source,
    );
    let swap = Paragraph::new("⇄  F3")
        .style(Style::default().fg(Color::Magenta))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(swap, selectors[1]);
    render_input(
        frame,
        selectors[2],
        "To",
        &currency_label(converter, converter.target()),
        focus == Field::Target,
    );

    render_result(frame, chunks[4], converter);
    render_status(frame, chunks[5], converter);

    let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[6]);
}

fn render_input(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let input = Paragraph::new(value.to_string()).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area);
}

fn currency_label(converter: &Converter, code: &CurrencyCode) -> String {
    let options = converter.repository().currencies().options();
    match options.iter().find(|(option, _)| option == code) {
        Some((_, name)) => format!("{} - {}", code, name),
        None => code.to_string(),
    }
}

fn render_result(frame: &mut Frame, area: Rect, converter: &Converter) {
    let (lines, color) = if let Some(err) = converter.error() {
        (vec![Line::from(err.to_string())], Color::Red)
    } else if converter.is_loading() && converter.result().is_none() {
        (vec![Line::from("Converting...")], Color::Yellow)
    } else if let Some(result) = converter.result() {
        (
            format_result(result).into_iter().map(Line::from).collect(),
            Color::Green,
        )
    } else {
        (vec![Line::from(PLACEHOLDER)], Color::Gray)
    };

    let result = Paragraph::new(lines)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Result").borders(Borders::ALL));
    frame.render_widget(result, area);
}

fn render_status(frame: &mut Frame, area: Rect, converter: &Converter) {
    let repository = converter.repository();
    let mut status = match repository.last_updated() {
        Some(updated) => format!("Rates updated: {}", updated.format("%H:%M:%S")),
        None => String::from("Rates not loaded yet"),
    };

    if !repository.currencies().is_empty() {
        status.push_str(&format!(
            " · {} currencies available",
            repository.currencies().len()
        ));
    }
    if converter.is_loading() {
        status.push_str(" · refreshing...");
    }

    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}
