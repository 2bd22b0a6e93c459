use crate::app::{AppState, Display};
use crate::types::{Button, Focus, UiMode, Unit};
use crate::ui::theme::Palette;
use crate::ui::widgets::{help::render_help_popup, toast::render_toast};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(f: &mut Frame, app: &AppState) {
    let palette = Palette::for_mode(app.dark_mode());

    // Paint the whole screen with the theme background
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Titlebar
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Temperature input
            Constraint::Length(3), // Unit selectors
            Constraint::Length(3), // Buttons
            Constraint::Length(4), // Results
            Constraint::Min(0),    // Filler
            Constraint::Length(1), // Statusbar
        ])
        .split(f.area());

    render_titlebar(f, app, &palette, chunks[0]);
    render_input(f, app, &palette, chunks[2]);
    render_unit_row(f, app, &palette, chunks[3]);
    render_button_row(f, app, &palette, chunks[4]);
    render_results(f, app, &palette, chunks[5]);
    render_statusbar(f, &palette, chunks[7]);

    // Toasts overlay the bottom of the form when the filler is too short
    if let Some(toast) = app.toasts.current() {
        let above_statusbar = Rect {
            height: chunks[7].y.saturating_sub(f.area().y),
            ..f.area()
        };
        render_toast(f, toast, &palette, above_statusbar);
    }

    if app.ui_mode == UiMode::Help {
        render_help_popup(f, &palette, f.area());
    }
}

fn control_block<'a>(title: &'a str, focused: bool, palette: &Palette) -> Block<'a> {
    let border_color = if focused { palette.focus } else { palette.border };
    let mut border_style = Style::default().fg(border_color);
    if focused {
        border_style = border_style.add_modifier(Modifier::BOLD);
    }

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn render_titlebar(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let mode = if app.dark_mode() { "dark" } else { "light" };
    let title = Line::from(vec![
        Span::styled(
            "Temperature Converter",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ({} mode)", mode), Style::default().fg(palette.muted)),
    ]);

    f.render_widget(Paragraph::new(title).alignment(Alignment::Center), area);
}

fn render_input(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let focused = app.focus == Focus::Input;
    let mut block = control_block(" Temperature ", focused, palette);
    if app.input_error {
        block = block.border_style(Style::default().fg(palette.error).add_modifier(Modifier::BOLD));
    }

    let inner = block.inner(area);
    let text = if app.input.is_empty() && !focused {
        Span::styled("Enter a temperature", Style::default().fg(palette.muted))
    } else {
        Span::styled(app.input.as_str(), Style::default().fg(palette.foreground))
    };

    f.render_widget(Paragraph::new(Line::from(text)).block(block), area);

    if focused && app.ui_mode == UiMode::Normal {
        let cursor_x = inner.x + (app.input_cursor as u16).min(inner.width.saturating_sub(1));
        f.set_cursor_position((cursor_x, inner.y));
    }
}

/// Selector label that fits `width` cells: full, name only, or symbol only
fn unit_label(unit: Unit, width: u16) -> String {
    let full = unit.to_string();
    let arrows = 4;
    if full.chars().count() + arrows <= width as usize {
        full
    } else if unit.name().len() + arrows <= width as usize {
        unit.name().to_string()
    } else {
        unit.symbol().to_string()
    }
}

fn unit_selector_line(unit: Unit, focused: bool, palette: &Palette, width: u16) -> Line<'static> {
    let arrow_style = if focused {
        Style::default().fg(palette.focus)
    } else {
        Style::default().fg(palette.muted)
    };

    Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(unit_label(unit, width), Style::default().fg(palette.foreground)),
        Span::styled(" ▶", arrow_style),
    ])
}

fn render_unit_row(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // From
            Constraint::Percentage(20), // Swap
            Constraint::Percentage(40), // To
        ])
        .split(area);

    let from_focused = app.focus == Focus::FromUnit;
    let from_block = control_block(" From ", from_focused, palette);
    let from_width = from_block.inner(chunks[0]).width;
    let from = Paragraph::new(unit_selector_line(app.from_unit, from_focused, palette, from_width))
        .alignment(Alignment::Center)
        .block(from_block);
    f.render_widget(from, chunks[0]);

    render_button(f, app, palette, Button::Swap, "⇄ Swap", chunks[1]);

    let to_focused = app.focus == Focus::ToUnit;
    let to_block = control_block(" To ", to_focused, palette);
    let to_width = to_block.inner(chunks[2]).width;
    let to = Paragraph::new(unit_selector_line(app.to_unit, to_focused, palette, to_width))
        .alignment(Alignment::Center)
        .block(to_block);
    f.render_widget(to, chunks[2]);
}

fn render_button_row(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Label names the theme the button switches to
    let theme_label = if app.dark_mode() {
        "☀ Light Mode"
    } else {
        "☾ Dark Mode"
    };

    render_button(f, app, palette, Button::Convert, "Convert", chunks[0]);
    render_button(f, app, palette, Button::Theme, theme_label, chunks[1]);
}

fn render_button(
    f: &mut Frame,
    app: &AppState,
    palette: &Palette,
    button: Button,
    label: &str,
    area: Rect,
) {
    let focused = app.focus == Focus::Button(button);
    let mut style = Style::default().fg(palette.foreground);
    if app.is_pressed(button) {
        style = style.bg(palette.pressed).add_modifier(Modifier::BOLD);
    }

    let paragraph = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(control_block("", focused, palette));
    f.render_widget(paragraph, area);
}

fn render_results(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let empty = app.display == Display::Empty;
    let (result_style, formula_style) = if empty {
        (
            Style::default().fg(palette.muted),
            Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
        )
    } else {
        (
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            Style::default().fg(palette.foreground),
        )
    };

    let lines = vec![
        Line::from(Span::styled(app.result_text(), result_style)),
        Line::from(Span::styled(app.formula_text(), formula_style)),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Result ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(paragraph, area);
}

fn render_statusbar(f: &mut Frame, palette: &Palette, area: Rect) {
    let status = Paragraph::new("Tab focus | Enter convert | Ctrl-s swap | Ctrl-t theme | ? help")
        .style(Style::default().fg(palette.muted).bg(palette.pressed));

    f.render_widget(status, area);
}
