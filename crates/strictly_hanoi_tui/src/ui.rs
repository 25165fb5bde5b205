//! Stateless UI rendering for the puzzle.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use strictly_hanoi::{Board, PegId, SessionStatus};

use crate::app::App;

const DISK_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Green,
    Color::Blue,
    Color::Magenta,
    Color::Red,
    Color::LightBlue,
];

/// Draws the whole screen and returns the area the board occupies.
pub fn draw(frame: &mut Frame, app: &App) -> Rect {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Hanoi")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board_area = match app.frame().board() {
        Some(board) => {
            let (width, height) = board.layout().canvas_size();
            let board_area = center_rect(
                chunks[1],
                u16::try_from(width).unwrap_or(u16::MAX),
                u16::try_from(height).unwrap_or(u16::MAX),
            );
            frame.render_widget(BoardWidget { board }, board_area);
            board_area
        }
        None => chunks[1],
    };

    frame.render_widget(status_line(app), chunks[2]);

    let help = Paragraph::new(
        "click a disk, then a peg  |  1/2/3 pick a peg  |  +/- disks  |  r reset  |  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    board_area
}

fn status_line(app: &App) -> Paragraph<'static> {
    let session = app.session();
    let mut spans = vec![Span::raw(format!(
        "Moves: {}  |  Time: {}  |  Disks: {}  |  Optimal: {}",
        app.frame().move_count(),
        app.elapsed(),
        session.num_disks(),
        session.optimal_moves(),
    ))];
    if session.status() == SessionStatus::Completed {
        spans.push(Span::styled(
            "  |  Done!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }
    Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

/// Pegs and disks drawn at one cell per layout unit.
struct BoardWidget<'a> {
    board: &'a Board,
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.board.layout();
        let metrics = layout.metrics();
        let shaft = Style::default().fg(Color::DarkGray);

        let base_y = layout.peg_top() + layout.peg_height();
        let (width, _) = layout.canvas_size();
        for x in metrics.margin_left..width - metrics.margin_right {
            put(buf, area, x, base_y, "─", shaft);
        }

        for peg in PegId::ALL {
            let x = layout.peg_x(peg);
            for y in layout.peg_top()..base_y {
                put(buf, area, x, y, "│", shaft);
            }
            put(buf, area, x, base_y, "┴", shaft);

            for (pos, disk) in self.board.peg(peg).disks().iter().enumerate() {
                let rect = layout.disk_rect(peg, pos, disk.id());
                let style = if disk.is_selected() {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    let color = DISK_COLORS[usize::from(disk.id() - 1) % DISK_COLORS.len()];
                    Style::default().fg(color)
                };
                let symbol = if disk.is_selected() { "▓" } else { "█" };
                for x in rect.x0..=rect.x1 {
                    put(buf, area, x, rect.y, symbol, style);
                }
            }
        }
    }
}

/// Writes one cell in board coordinates, clipped to `area`.
fn put(buf: &mut Buffer, area: Rect, x: i32, y: i32, symbol: &str, style: Style) {
    let (Ok(dx), Ok(dy)) = (u16::try_from(x), u16::try_from(y)) else {
        return;
    };
    if dx >= area.width || dy >= area.height {
        return;
    }
    if let Some(cell) = buf.cell_mut((area.x + dx, area.y + dy)) {
        cell.set_symbol(symbol).set_style(style);
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
