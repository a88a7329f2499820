// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_label: Color,
    pub wick: Color,
    pub candle_up: Color,
    pub candle_down: Color,
}

impl Theme {
    /// Green/red candles on white, light grey gridlines, black wicks and labels.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            grid: Color::from_rgb(0xE0, 0xE0, 0xE0),
            axis_label: Color::BLACK,
            wick: Color::BLACK,
            candle_up: Color::from_rgb(0, 128, 0),
            candle_down: Color::from_rgb(255, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            grid: Color::from_argb(255, 40, 40, 45),
            axis_label: Color::from_argb(255, 235, 235, 245),
            wick: Color::from_argb(255, 150, 150, 160),
            candle_up: Color::from_argb(255, 40, 200, 120),
            candle_down: Color::from_argb(255, 220, 80, 80),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_label: Color::from_argb(255, 0xff, 0xff, 0xff),
            wick: Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            candle_up: Color::from_argb(255, 0x00, 0xff, 0x00),
            candle_down: Color::from_argb(255, 0xff, 0x00, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
