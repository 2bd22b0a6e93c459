use crate::toast::{Toast, ToastPhase};
use crate::ui::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the toast in the bottom-right corner of `area`
pub fn render_toast(f: &mut Frame, toast: &Toast, palette: &Palette, area: Rect) {
    let text_width = toast.message.chars().count() as u16 + 4;
    let popup_width = (text_width + 2).min(area.width);
    let popup_height = 3.min(area.height);

    let popup_area = Rect {
        x: area.x + area.width.saturating_sub(popup_width + 1),
        y: area.y + area.height.saturating_sub(popup_height + 1),
        width: popup_width,
        height: popup_height,
    };

    let color = palette.toast_color(toast.level);
    let mut style = Style::default().fg(color).bg(palette.background);
    if toast.phase == ToastPhase::Hiding {
        style = style.add_modifier(Modifier::DIM);
    }

    let line = Line::from(vec![
        Span::styled(format!("{} ", toast.level.icon()), style.add_modifier(Modifier::BOLD)),
        Span::styled(toast.message.as_str(), style),
    ]);

    // Clear the area behind the toast
    f.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(line)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style),
        );

    f.render_widget(paragraph, popup_area);
}
