use crate::game::{column_key, Board, DropColor, Position, COLUMNS, ROWS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn drop_style(color: DropColor) -> (&'static str, Color) {
    match color {
        DropColor::Unset => (" . ", Color::DarkGray),
        DropColor::Red => (" \u{25cf} ", Color::Red),
        DropColor::Yellow => (" \u{25cf} ", Color::Yellow),
    }
}

/// Board lines, top row first, framed, with column letters above and a
/// selection marker below. Slots in `highlight` are drawn reversed.
pub fn board_lines(board: &Board, selected: Option<usize>, highlight: &[Position]) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(ROWS + 4);

    let mut letters = vec![Span::raw("   ")];
    for id in 1..=COLUMNS {
        let label = format!(" {} ", column_key(id).unwrap_or('?'));
        if selected == Some(id) {
            letters.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            letters.push(Span::raw(label));
        }
    }
    letters.push(Span::raw("  "));
    lines.push(Line::from(letters));

    lines.push(Line::from("  ╔══════════════════════╗"));
    for row in (1..=ROWS).rev() {
        let mut spans = vec![Span::raw("  ║")];
        for position in (1..=COLUMNS).filter_map(|column| Position::new(column, row)) {
            let (symbol, color) = drop_style(board.slot(position).color());
            let mut style = Style::default().fg(color);
            if highlight.contains(&position) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            spans.push(Span::styled(symbol, style));
        }
        spans.push(Span::raw(" ║"));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from("  ╚══════════════════════╝"));

    if let Some(selected) = selected {
        let mut marker = vec![Span::raw("   ")];
        for id in 1..=COLUMNS {
            if id == selected {
                marker.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                marker.push(Span::raw("   "));
            }
        }
        marker.push(Span::raw("  "));
        lines.push(Line::from(marker));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_board_lines_layout() {
        let mut board = Board::new();
        board.insert('A', DropColor::Red).unwrap();

        let lines = board_lines(&board, Some(4), &[]);
        assert_eq!(lines.len(), ROWS + 4);
        assert_eq!(text(&lines[0]).trim(), "A  B  C  D  E  F  G");
        // Bottom board row sits just above the lower frame.
        let bottom = text(&lines[ROWS + 1]);
        assert!(bottom.starts_with("  ║ \u{25cf} "));
        assert!(text(&lines[ROWS + 3]).contains('▲'));
    }

    #[test]
    fn test_highlighted_slots_are_reversed() {
        let mut board = Board::new();
        board.insert('B', DropColor::Yellow).unwrap();
        let b1 = Position::new(2, 1).unwrap();

        let lines = board_lines(&board, None, &[b1]);
        assert_eq!(lines.len(), ROWS + 3);
        let bottom = &lines[ROWS + 1];
        // Frame span, then A1, then B1.
        assert!(bottom.spans[2].style.add_modifier.contains(Modifier::REVERSED));
        assert!(!bottom.spans[1].style.add_modifier.contains(Modifier::REVERSED));
    }
}
