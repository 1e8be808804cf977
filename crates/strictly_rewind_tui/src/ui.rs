//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_rewind::view::{highlighted_cells, order_toggle_label, status_line};
use strictly_rewind::{Player, Square};

use crate::app::App;

const HELP: &str =
    "arrows move  enter play  1-9 play cells 1-9  j/k select  g jump  s sort  r restart  q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(8),    // Board + moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_moves(frame, body[1], app);
    draw_status(frame, chunks[2], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let board = state.current_board();
    let winning = highlighted_cells(state);
    let side = board.side();

    let mut lines = Vec::with_capacity(side * 2);
    for (row, squares) in board.squares().chunks(side).enumerate() {
        if row > 0 {
            let rule = vec!["───"; side].join("┼");
            lines.push(Line::from(Span::styled(rule, Style::default().fg(Color::DarkGray))));
        }
        let mut spans = Vec::with_capacity(side * 2);
        for (col, square) in squares.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let cell = row * side + col;
            spans.push(cell_span(*square, cell == app.cursor(), winning.contains(&cell)));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Board"));
    frame.render_widget(paragraph, area);
}

fn cell_span(square: Square, is_cursor: bool, is_winning: bool) -> Span<'static> {
    let (symbol, base_style) = match square {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if is_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if is_winning {
        base_style.bg(Color::Yellow)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .moves()
        .into_iter()
        .enumerate()
        .map(|(row, entry)| {
            let marker = if row == app.selected() { "> " } else { "  " };
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{}{}", marker, entry.label), style))
        })
        .collect();

    let title = format!("Moves ({})", order_toggle_label(app.state()));
    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = match app.message() {
        Some(message) => format!("{} | {}", status_line(app.state()), message),
        None => status_line(app.state()),
    };

    let paragraph = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
