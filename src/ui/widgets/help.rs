use crate::ui::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render_help_popup(f: &mut Frame, palette: &Palette, area: Rect) {
    // Calculate popup size (70% width, 80% height)
    let popup_width = (area.width as f32 * 0.7) as u16;
    let popup_height = (area.height as f32 * 0.8) as u16;

    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    let heading = Style::default()
        .add_modifier(Modifier::BOLD)
        .fg(palette.accent);

    let help_text = vec![
        Line::from(vec![Span::styled("CONTROLS", heading)]),
        Line::from(""),
        Line::from("  Tab / Shift-Tab    Move focus between controls"),
        Line::from("  Enter              Convert (in the temperature field)"),
        Line::from("  Enter / Space      Activate focused button"),
        Line::from("  ← / →  ↑ / ↓       Change focused unit"),
        Line::from("  Ctrl-u             Clear temperature"),
        Line::from("  Esc                Dismiss notification (in the field)"),
        Line::from(""),
        Line::from(vec![Span::styled("SHORTCUTS", heading)]),
        Line::from(""),
        Line::from("  Ctrl-s             Swap units"),
        Line::from("  Ctrl-t             Toggle light/dark theme"),
        Line::from("  c / s / t          Convert / swap / theme (outside the field)"),
        Line::from(""),
        Line::from(vec![Span::styled("APPLICATION", heading)]),
        Line::from(""),
        Line::from("  ? / F1             Toggle this help"),
        Line::from("  q / Esc            Quit (outside the field)"),
        Line::from("  Ctrl-c / Ctrl-q    Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(palette.muted),
        )]),
    ];

    f.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(help_text)
        .style(Style::default().fg(palette.foreground).bg(palette.background))
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.focus)),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}
