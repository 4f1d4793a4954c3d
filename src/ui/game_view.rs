use crate::game::{DropColor, Game, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::board_lines;

fn drop_color(color: DropColor) -> Color {
    match color {
        DropColor::Red => Color::Red,
        DropColor::Yellow => Color::Yellow,
        DropColor::Unset => Color::Gray,
    }
}

fn player_span(player: &Player) -> Span<'static> {
    Span::styled(
        player.to_string(),
        Style::default()
            .fg(drop_color(player.color()))
            .add_modifier(Modifier::BOLD),
    )
}

pub fn render(frame: &mut Frame, game: &Game, selected_column: usize, message: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(4), // Status
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game, selected_column, chunks[1]);
    render_status(frame, game, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, game: &Game, area: Rect) {
    let line = if let Some(winner) = game.winner() {
        Line::from(vec![player_span(winner), Span::raw(" wins!")])
    } else if game.is_over() {
        Line::from("Draw, the board is full")
    } else {
        Line::from(vec![Span::raw("Turn: "), player_span(game.current_player())])
    };

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Drop Four"));
    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game: &Game, selected_column: usize, area: Rect) {
    let highlight = game
        .status()
        .and_then(|status| status.winning_slots())
        .unwrap_or(&[]);
    let selected = (!game.is_over() && game.current_player().is_human()).then_some(selected_column);

    let widget = Paragraph::new(board_lines(game.board(), selected, highlight))
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, game: &Game, area: Rect) {
    let [first, second] = game.players();
    let elapsed = game
        .statistic()
        .map_or_else(|| "00:00:00".to_string(), |s| s.formatted_duration());
    let (turns, remaining) = game
        .status()
        .map_or((0, 0), |s| (s.turns_completed(), s.turns_remaining()));

    let lines = vec![
        Line::from(vec![
            player_span(first),
            Span::raw(format!(" {} drops left   ", first.drops_left())),
            player_span(second),
            Span::raw(format!(" {} drops left", second.drops_left())),
        ]),
        Line::from(format!(
            "Turn {turns}  |  {remaining} slots open  |  {elapsed}"
        )),
    ];

    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter or A-G: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
