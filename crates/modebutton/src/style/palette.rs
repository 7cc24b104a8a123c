//! Built-in color palettes and the palette-backed style provider.

use modebutton_render::Color;

use super::{BoxStyle, LineStyle, StyleMetrics, StyleProvider, VisualState};
use crate::config::ThemeMode;

/// The color roles a mode button draws with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Selected segment fill.
    pub primary: Color,
    /// Selected segment shade edge.
    pub primary_dark: Color,
    /// Text on a selected segment.
    pub on_primary: Color,

    /// Window background, also used as the highlight edge.
    pub background: Color,
    /// Frame fill.
    pub surface: Color,
    /// Hovered segment fill.
    pub surface_variant: Color,

    /// Segment text.
    pub text_primary: Color,

    /// Frame shade edge.
    pub border: Color,
    /// Separator line.
    pub divider: Color,
}

impl ColorPalette {
    /// Light palette.
    pub fn light() -> Self {
        Self {
            primary: Color::from_rgb8(0x00, 0x7A, 0xFF),
            primary_dark: Color::from_rgb8(0x00, 0x56, 0xB3),
            on_primary: Color::WHITE,

            background: Color::WHITE,
            surface: Color::from_rgb8(0xF8, 0xF9, 0xFA),
            surface_variant: Color::from_rgb8(0xE9, 0xEC, 0xEF),

            text_primary: Color::from_rgb8(0x21, 0x25, 0x29),

            border: Color::from_rgb8(0xDE, 0xE2, 0xE6),
            divider: Color::from_rgb8(0xCE, 0xD4, 0xDA),
        }
    }

    /// Dark palette.
    pub fn dark() -> Self {
        Self {
            primary: Color::from_rgb8(0x0A, 0x84, 0xFF),
            primary_dark: Color::from_rgb8(0x00, 0x56, 0xB3),
            on_primary: Color::WHITE,

            background: Color::from_rgb8(0x1C, 0x1C, 0x1E),
            surface: Color::from_rgb8(0x2C, 0x2C, 0x2E),
            surface_variant: Color::from_rgb8(0x3A, 0x3A, 0x3C),

            text_primary: Color::WHITE,

            border: Color::from_rgb8(0x38, 0x38, 0x3A),
            divider: Color::from_rgb8(0x54, 0x54, 0x56),
        }
    }

    /// High-contrast palette.
    pub fn high_contrast() -> Self {
        Self {
            primary: Color::from_rgb8(0x00, 0x00, 0xFF),
            primary_dark: Color::from_rgb8(0x00, 0x00, 0xCC),
            on_primary: Color::WHITE,

            background: Color::WHITE,
            surface: Color::WHITE,
            surface_variant: Color::from_rgb8(0xF0, 0xF0, 0xF0),

            text_primary: Color::BLACK,

            border: Color::BLACK,
            divider: Color::BLACK,
        }
    }

    /// Palette for a configured theme.
    pub fn for_theme(theme: ThemeMode) -> Self {
        match theme {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::HighContrast => Self::high_contrast(),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}

/// A [`StyleProvider`] that maps visual states onto a [`ColorPalette`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaletteStyle {
    palette: ColorPalette,
    metrics: StyleMetrics,
}

impl PaletteStyle {
    /// Create a style from a palette with default metrics.
    pub fn new(palette: ColorPalette) -> Self {
        Self {
            palette,
            metrics: StyleMetrics::default(),
        }
    }

    /// Override the inner border width.
    pub fn with_inner_border(mut self, inner_border: i32) -> Self {
        self.metrics.inner_border = inner_border;
        self
    }

    /// The palette in use.
    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }
}

impl StyleProvider for PaletteStyle {
    fn box_style(&self, state: VisualState) -> BoxStyle {
        let p = &self.palette;
        match state {
            VisualState::Normal => BoxStyle {
                background: p.surface,
                light: p.background,
                dark: p.border,
            },
            VisualState::Prelight => BoxStyle {
                background: p.surface_variant,
                light: p.background,
                dark: p.border,
            },
            VisualState::Selected => BoxStyle {
                background: p.primary,
                light: p.background,
                dark: p.primary_dark,
            },
        }
    }

    fn line_style(&self, _state: VisualState) -> LineStyle {
        LineStyle {
            dark: self.palette.divider,
            light: self.palette.background,
            width: 1.0,
        }
    }

    fn text_color(&self, state: VisualState) -> Color {
        match state {
            VisualState::Selected => self.palette.on_primary,
            VisualState::Normal | VisualState::Prelight => self.palette.text_primary,
        }
    }

    fn metrics(&self) -> StyleMetrics {
        self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_are_distinguishable() {
        let style = PaletteStyle::default();
        let normal = style.box_style(VisualState::Normal);
        let prelight = style.box_style(VisualState::Prelight);
        let selected = style.box_style(VisualState::Selected);

        assert_ne!(normal.background, prelight.background);
        assert_ne!(normal.background, selected.background);
        assert_ne!(style.text_color(VisualState::Normal), style.text_color(VisualState::Selected));
    }

    #[test]
    fn test_for_theme() {
        assert_eq!(ColorPalette::for_theme(ThemeMode::Dark), ColorPalette::dark());
        assert_eq!(
            ColorPalette::for_theme(ThemeMode::HighContrast).border,
            Color::BLACK
        );
    }

    #[test]
    fn test_inner_border_override() {
        let style = PaletteStyle::new(ColorPalette::light()).with_inner_border(3);
        assert_eq!(style.metrics().inner_border, 3);
        assert_eq!(PaletteStyle::default().metrics().inner_border, 1);
    }
}
