use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::screen::Mirror;
use crate::game::{Cell, DiscColor};

pub fn to_color(color: DiscColor) -> Color {
    match color {
        DiscColor::Red => Color::Red,
        DiscColor::Green => Color::Green,
        DiscColor::Yellow => Color::Yellow,
        DiscColor::Blue => Color::Blue,
        DiscColor::Magenta => Color::Magenta,
        DiscColor::Cyan => Color::Cyan,
        DiscColor::White => Color::White,
    }
}

/// Build the board lines: column numbers, a marker over the selected column,
/// then one line per row. With grid lines every cell is boxed, otherwise
/// cells are padded to three characters. Every line has the same width so
/// centered rendering keeps the columns aligned.
pub fn board_lines(mirror: &Mirror) -> Vec<Line<'static>> {
    let cols = mirror.cols();
    let boxed = mirror.grid_lines();
    let mut lines = vec![
        column_numbers(cols, mirror.highlighted(), boxed),
        column_marker(cols, mirror.highlighted(), boxed),
    ];

    if boxed {
        lines.push(Line::from(border('┌', '┬', '┐', cols)));
    }
    for row in 0..mirror.rows() {
        if boxed && row > 0 {
            lines.push(Line::from(border('├', '┼', '┤', cols)));
        }

        let mut spans = Vec::new();
        if boxed {
            spans.push(Span::raw("│"));
        }
        for col in 0..cols {
            let cell = mirror.cell(row, col).unwrap_or(Cell::Empty);
            spans.push(cell_span(cell, mirror.color(row, col), boxed));
            if boxed {
                spans.push(Span::raw("│"));
            }
        }
        lines.push(Line::from(spans));
    }
    if boxed {
        lines.push(Line::from(border('└', '┴', '┘', cols)));
    }

    lines
}

fn column_numbers(cols: usize, highlighted: usize, boxed: bool) -> Line<'static> {
    selector_line(cols, boxed, |col| {
        let label = format!(" {} ", col + 1);
        if col == highlighted {
            Span::styled(label, highlight_style().add_modifier(Modifier::UNDERLINED))
        } else {
            Span::raw(label)
        }
    })
}

fn column_marker(cols: usize, highlighted: usize, boxed: bool) -> Line<'static> {
    selector_line(cols, boxed, |col| {
        if col == highlighted {
            Span::styled(" ▼ ", highlight_style())
        } else {
            Span::raw("   ")
        }
    })
}

/// One three-character span per column, spaced to line up with the board.
fn selector_line(cols: usize, boxed: bool, span: impl Fn(usize) -> Span<'static>) -> Line<'static> {
    let mut spans = Vec::new();
    if boxed {
        spans.push(Span::raw(" "));
    }
    for col in 0..cols {
        spans.push(span(col));
        if boxed {
            spans.push(Span::raw(" "));
        }
    }
    Line::from(spans)
}

fn highlight_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

fn border(left: char, mid: char, right: char, cols: usize) -> String {
    let mut line = String::new();
    line.push(left);
    for col in 0..cols {
        if col > 0 {
            line.push(mid);
        }
        line.push_str("───");
    }
    line.push(right);
    line
}

fn cell_span(cell: Cell, color: Option<DiscColor>, boxed: bool) -> Span<'static> {
    match cell {
        Cell::Empty if boxed => Span::raw("   "),
        Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        _ => {
            let fg = color.map_or(Color::White, to_color);
            Span::styled(
                format!(" {} ", cell.symbol()),
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            )
        }
    }
}
