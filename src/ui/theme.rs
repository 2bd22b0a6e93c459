//! Dark and light color palettes

use crate::toast::ToastLevel;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub focus: Color,
    pub pressed: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
}

impl Palette {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }

    pub fn dark() -> Self {
        Palette {
            background: Color::Rgb(24, 26, 33),
            foreground: Color::Rgb(230, 232, 238),
            muted: Color::Rgb(120, 126, 140),
            accent: Color::Rgb(255, 153, 85),
            border: Color::Rgb(70, 74, 88),
            focus: Color::Rgb(110, 170, 255),
            pressed: Color::Rgb(60, 64, 80),
            error: Color::Rgb(240, 90, 90),
            success: Color::Rgb(90, 200, 120),
            warning: Color::Rgb(240, 190, 80),
        }
    }

    pub fn light() -> Self {
        Palette {
            background: Color::Rgb(246, 247, 250),
            foreground: Color::Rgb(30, 32, 40),
            muted: Color::Rgb(125, 130, 145),
            accent: Color::Rgb(215, 95, 20),
            border: Color::Rgb(190, 195, 210),
            focus: Color::Rgb(40, 100, 220),
            pressed: Color::Rgb(215, 220, 232),
            error: Color::Rgb(200, 40, 40),
            success: Color::Rgb(30, 140, 70),
            warning: Color::Rgb(180, 120, 0),
        }
    }

    pub fn toast_color(&self, level: ToastLevel) -> Color {
        match level {
            ToastLevel::Success => self.success,
            ToastLevel::Warning => self.warning,
            ToastLevel::Error => self.error,
        }
    }
}
