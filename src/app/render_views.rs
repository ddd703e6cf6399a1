use ratatui::prelude::{Line, Span};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::constants::{GRID, LEVEL_COLORS, TILE};

use super::App;

impl App {
    pub(super) fn draw_frame(&mut self, f: &mut Frame) {
        let size = f.size();

        let chart_width = (GRID.width * TILE.width + 2) as u16;
        let chart_height = (GRID.height + 2) as u16;
        let chart_area = Rect::new(0, 0, chart_width.min(size.width), chart_height.min(size.height));

        let tiles: Vec<Line> = self
            .session
            .grid()
            .rows()
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|&level| Span::raw(TILE.glyph).fg(level_color(level)))
                        .collect::<Vec<Span>>(),
                )
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(
                Line::from(Span::styled(
                    "hatch",
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Left),
            )
            .title(
                Line::from("[S]ave  [L]oad  [C]lear  [Q]uit").alignment(Alignment::Right),
            );
        f.render_widget(Paragraph::new(tiles).block(block), chart_area);

        if size.height > chart_height {
            let footer = self
                .status
                .clone()
                .unwrap_or_else(|| self.session.path().display().to_string());
            let footer_area = Rect::new(0, chart_height, size.width, 1);
            f.render_widget(
                Paragraph::new(footer).style(Style::default().fg(Color::DarkGray)),
                footer_area,
            );
        }

        if self.in_confirm_modal() {
            self.render_confirm_modal(f, size);
        }
    }

    fn render_confirm_modal(&self, f: &mut Frame, terminal_size: Rect) {
        let modal_rect = self.modal_rect(terminal_size);

        let lines = vec![
            Line::from(Span::styled(
                "Clear existing grid?",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("Current data will be overwritten."),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Y]es", Style::default().fg(Color::Green)),
                Span::raw("      "),
                Span::styled("[N]o", Style::default().fg(Color::Red)),
            ]),
        ];

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("load chart")
                .title_alignment(Alignment::Center),
        );

        f.render_widget(Clear, modal_rect);
        f.render_widget(paragraph, modal_rect);
    }
}

fn level_color(level: u8) -> Color {
    LEVEL_COLORS[(level as usize).min(LEVEL_COLORS.len() - 1)]
}
