use crate::app::App;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};
use tile_compositor::braille::BrailleCanvas;
use tile_compositor::map::{Rgba, Variant};

/// Render the UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Split into map area and status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Map
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_map(frame, app, chunks[0]);
    render_status_bar(frame, app, chunks[1]);
}

#[inline]
fn term_color(c: Rgba) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

fn render_map(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.paths.len() {
        1 => format!(" {} ", app.paths[0].display()),
        n => format!(" {n} files "),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(MapWidget { canvas: &app.canvas }, inner);
}

/// Braille canvas with its cell colors and label overlay
struct MapWidget<'a> {
    canvas: &'a BrailleCanvas,
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (row_idx, row_str) in self.canvas.rows().enumerate() {
            if row_idx >= area.height as usize {
                break;
            }
            let y = area.y + row_idx as u16;

            for (col_idx, ch) in row_str.chars().enumerate() {
                if col_idx >= area.width as usize {
                    break;
                }
                // Skip empty braille characters (U+2800)
                if ch == '\u{2800}' {
                    continue;
                }
                let x = area.x + col_idx as u16;
                let color = self
                    .canvas
                    .cell_color(col_idx, row_idx)
                    .map(term_color)
                    .unwrap_or(Color::White);
                buf[(x, y)].set_char(ch).set_fg(color);
            }
        }

        // Labels sit on a light plate so dark label colors stay readable
        for label in self.canvas.labels() {
            if label.row >= area.height || label.col >= area.width {
                continue;
            }
            let mut style = Style::default().fg(term_color(label.color)).bg(Color::Gray);
            if label.bold {
                style = style.add_modifier(Modifier::BOLD);
            }

            let x = area.x + label.col;
            let y = area.y + label.row;
            let max_len = area.width.saturating_sub(label.col) as usize;
            for (i, ch) in label.text.chars().take(max_len.min(24)).enumerate() {
                buf[(x + i as u16, y)].set_char(ch).set_style(style);
            }
        }
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} shapes ", app.summary.total()),
        Style::default().fg(Color::Yellow),
    )];

    for variant in Variant::ALL {
        spans.push(Span::styled(
            format!("{}:", variant.name()),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(
            format!("{} ", app.summary.count(variant)),
            Style::default().fg(Color::Cyan),
        ));
    }

    let labels = app.config.show_labels;
    spans.push(Span::styled(
        if labels { "[L]abels " } else { "[l]abels " },
        Style::default().fg(if labels { Color::Green } else { Color::DarkGray }),
    ));
    spans.push(Span::styled(
        "| l:labels r:reload q:quit",
        Style::default().fg(Color::DarkGray),
    ));
    if let Some(error) = &app.load_error {
        spans.push(Span::styled(
            format!(" | reload failed: {error}"),
            Style::default().fg(Color::Red),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}
