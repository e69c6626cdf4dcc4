//! Rendering for the terminal UI.

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use stock_core::entities::Item;
use stock_core::time::format_date_in;

use crate::tui::app::{App, Dialog, Mode};

const HINTS: &str = "/ search  j/k move  e edit  +/- adjust  d delete  q quit";

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // Item list
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

    render_search_bar(app, frame, chunks[0]);
    render_items(app, frame, chunks[1]);
    render_status_line(app, frame, chunks[2]);

    match &app.dialog {
        Some(Dialog::ConfirmDelete { item, yes_selected }) => {
            render_confirm_delete(item, *yes_selected, frame);
        }
        Some(Dialog::EditAmount { item, amount }) => render_edit_amount(item, *amount, frame),
        None => {}
    }
}

fn render_search_bar(app: &App, frame: &mut Frame, area: Rect) {
    let active = app.mode == Mode::Search && app.dialog.is_none();
    let border = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = if app.search.is_empty() && !active {
        Line::from(Span::styled(
            "Search by name",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.search.as_str())
    };

    let bar = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title("Search"),
    );
    frame.render_widget(bar, area);

    if active {
        let typed = u16::try_from(app.search.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(typed);
        frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_items(app: &App, frame: &mut Frame, area: Rect) {
    let title = format!("Items ({})", app.items.len());
    let block = Block::default().borders(Borders::ALL).title(title);

    if app.items.is_empty() {
        let empty = Paragraph::new("No items")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<ListItem> = app
        .items
        .iter()
        .map(|item| ListItem::new(item_line(item, &app.date_format)))
        .collect();
    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn item_line<'a>(item: &'a Item, date_format: &str) -> Line<'a> {
    let mut spans = vec![Span::styled(
        item.name.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for tag in item.tag_labels() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {tag} "),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
    }

    let amount_style = if item.amount == 0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };
    spans.push(Span::raw("  "));
    spans.push(Span::styled(format!("qty {}", item.amount), amount_style));
    spans.push(Span::styled(
        format!("  {}", format_date_in(item.time, &Local, date_format)),
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}

fn render_status_line(app: &App, frame: &mut Frame, area: Rect) {
    let line = app.status.as_deref().map_or_else(
        || Span::styled(HINTS, Style::default().fg(Color::DarkGray)),
        |status| Span::styled(status, Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(Paragraph::new(Line::from(line)), area);
}

fn render_confirm_delete(item: &Item, yes_selected: bool, frame: &mut Frame) {
    let area = centered_rect(50, 30, frame.area());
    let selected = Style::default()
        .bg(Color::Red)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let (yes, no) = if yes_selected {
        (selected, Style::default())
    } else {
        (Style::default(), selected)
    };

    let text = vec![
        Line::from(format!("Delete '{}'?", item.name)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ Yes ]", yes),
            Span::raw("  "),
            Span::styled("[ No ]", no),
        ]),
    ];
    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Delete item"));
    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

fn render_edit_amount(item: &Item, amount: u32, frame: &mut Frame) {
    let area = centered_rect(50, 30, frame.area());
    let text = vec![
        Line::from(item.name.as_str()),
        Line::from(vec![
            Span::raw("Amount: < "),
            Span::styled(
                amount.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" >"),
        ]),
        Line::from(Span::styled(
            "+/- adjust  Enter save  Esc cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Edit amount"));
    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
