use crate::app::{QuitChoice, QuitPrompt};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Centered Yes/No dialog shown while quitting is being confirmed.
pub fn draw_quit_popup(frame: &mut Frame, area: Rect, prompt: &QuitPrompt) {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Fill(1),
        ])
        .split(area);

    let popup_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(vertical_chunks[1])[1];

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Quit ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let mut options = Vec::with_capacity(QuitChoice::ALL.len() * 2);
    for choice in QuitChoice::ALL {
        let style = if choice == prompt.selected() {
            Style::new().add_modifier(Modifier::REVERSED)
        } else {
            Style::new()
        };
        options.push(Span::styled(format!(" {} ", choice.label()), style));
        options.push(Span::raw("  "));
    }

    let text = Paragraph::new(vec![Line::from("Really quit?"), Line::from(options)])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(text, popup_area);
}
