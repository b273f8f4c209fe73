//! Design tokens shared by every component.

use serde::{Deserialize, Serialize};

use super::ThemeMode;
use super::color::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    // Core colors
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub primary: Color,
    pub on_primary: Color,

    // Text
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Market movement for dashboard widgets
    pub market_up: Color,
    pub market_down: Color,
}

/// Spacing scale in density-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingTokens {
    pub xxs: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f32,
    pub line_height: f32,
    pub weight: u16,
}

impl TextStyle {
    const fn new(size: f32, line_height: f32, weight: u16) -> Self {
        Self {
            size,
            line_height,
            weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypographyTokens {
    pub font_family: String,
    pub mono_family: String,
    pub heading: TextStyle,
    pub title: TextStyle,
    pub body: TextStyle,
    pub label: TextStyle,
    pub caption: TextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusTokens {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub pill: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub color: Color,
    /// Android-style elevation equivalent
    pub elevation: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowTokens {
    pub sm: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
}

/// Every token for one theme mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignTokens {
    pub mode: ThemeMode,
    pub colors: ColorTokens,
    pub spacing: SpacingTokens,
    pub typography: TypographyTokens,
    pub radius: RadiusTokens,
    pub shadows: ShadowTokens,
}

impl DesignTokens {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            colors: ColorTokens {
                background: Color::oklch(0.98, 0.005, 280.0),
                surface: Color::oklch(1.0, 0.0, 0.0),
                border: Color::oklch(0.88, 0.01, 280.0),
                primary: Color::oklch(0.55, 0.18, 280.0),
                on_primary: Color::oklch(1.0, 0.0, 0.0),
                text: Color::oklch(0.2, 0.01, 280.0),
                text_secondary: Color::oklch(0.4, 0.02, 280.0),
                text_muted: Color::oklch(0.55, 0.02, 280.0),
                text_disabled: Color::oklch(0.75, 0.01, 280.0),
                success: Color::oklch(0.6, 0.15, 145.0),
                warning: Color::oklch(0.7, 0.15, 85.0),
                error: Color::oklch(0.58, 0.2, 25.0),
                info: Color::oklch(0.6, 0.12, 240.0),
                market_up: Color::oklch(0.62, 0.17, 150.0),
                market_down: Color::oklch(0.6, 0.2, 25.0),
            },
            spacing: SPACING,
            typography: typography(),
            radius: RADIUS,
            shadows: shadows(Color::oklcha(0.2, 0.02, 280.0, 0.12)),
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            colors: ColorTokens {
                background: Color::oklch(0.15, 0.01, 280.0),
                surface: Color::oklch(0.2, 0.015, 280.0),
                border: Color::oklch(0.3, 0.02, 280.0),
                primary: Color::oklch(0.65, 0.17, 280.0),
                on_primary: Color::oklch(0.15, 0.01, 280.0),
                text: Color::oklch(0.93, 0.0, 0.0),
                text_secondary: Color::oklch(0.75, 0.02, 280.0),
                text_muted: Color::oklch(0.55, 0.02, 280.0),
                text_disabled: Color::oklch(0.38, 0.01, 280.0),
                success: Color::oklch(0.7, 0.15, 145.0),
                warning: Color::oklch(0.75, 0.15, 85.0),
                error: Color::oklch(0.65, 0.2, 25.0),
                info: Color::oklch(0.7, 0.12, 240.0),
                market_up: Color::oklch(0.72, 0.17, 150.0),
                market_down: Color::oklch(0.66, 0.2, 25.0),
            },
            spacing: SPACING,
            typography: typography(),
            radius: RADIUS,
            shadows: shadows(Color::oklcha(0.0, 0.0, 0.0, 0.4)),
        }
    }

    /// Resolve a color token by name.
    pub fn color(&self, name: &str) -> Option<Color> {
        let c = &self.colors;
        let color = match name {
            "background" | "bg" => c.background,
            "surface" => c.surface,
            "border" => c.border,
            "primary" => c.primary,
            "on_primary" => c.on_primary,
            "text" | "fg" => c.text,
            "text_secondary" => c.text_secondary,
            "text_muted" | "muted" => c.text_muted,
            "text_disabled" => c.text_disabled,
            "success" => c.success,
            "warning" => c.warning,
            "error" => c.error,
            "info" => c.info,
            "market_up" => c.market_up,
            "market_down" => c.market_down,
            _ => return None,
        };
        Some(color)
    }
}

const SPACING: SpacingTokens = SpacingTokens {
    xxs: 2.0,
    xs: 4.0,
    sm: 8.0,
    md: 12.0,
    lg: 16.0,
    xl: 24.0,
    xxl: 32.0,
};

const RADIUS: RadiusTokens = RadiusTokens {
    sm: 4.0,
    md: 8.0,
    lg: 16.0,
    pill: 999.0,
};

fn typography() -> TypographyTokens {
    TypographyTokens {
        font_family: "Inter".to_string(),
        mono_family: "JetBrains Mono".to_string(),
        heading: TextStyle::new(24.0, 32.0, 700),
        title: TextStyle::new(18.0, 24.0, 600),
        body: TextStyle::new(14.0, 20.0, 400),
        label: TextStyle::new(12.0, 16.0, 500),
        caption: TextStyle::new(11.0, 14.0, 400),
    }
}

fn shadows(color: Color) -> ShadowTokens {
    let shadow = |offset_y: f32, blur: f32, elevation: f32| Shadow {
        offset_x: 0.0,
        offset_y,
        blur,
        color,
        elevation,
    };
    ShadowTokens {
        sm: shadow(1.0, 2.0, 1.0),
        md: shadow(2.0, 6.0, 3.0),
        lg: shadow(8.0, 16.0, 8.0),
    }
}
