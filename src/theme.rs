/// Visual theme presets
///
/// Every variant shares the same layout and behavior; only the colors change.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Red on near-black
    #[default]
    Crimson,
    Ember,
    Volt,
    Ocean,
    Mono,
    Gold,
}

/// Colors used by the views
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scheme {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    /// Text drawn on top of the accent color
    pub on_accent: Color,
}

const ZINC_950: Color = Color { r: 0.035, g: 0.035, b: 0.043, a: 1.0 };
const ZINC_900: Color = Color { r: 0.094, g: 0.094, b: 0.106, a: 1.0 };
const ZINC_800: Color = Color { r: 0.153, g: 0.153, b: 0.165, a: 1.0 };
const ZINC_100: Color = Color { r: 0.957, g: 0.957, b: 0.961, a: 1.0 };
const ZINC_400: Color = Color { r: 0.631, g: 0.631, b: 0.667, a: 1.0 };

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Crimson => "Crimson",
            Variant::Ember => "Ember",
            Variant::Volt => "Volt",
            Variant::Ocean => "Ocean",
            Variant::Mono => "Mono",
            Variant::Gold => "Gold",
        }
    }

    pub fn scheme(self) -> Scheme {
        let (accent, on_accent) = match self {
            Variant::Crimson => (Color::from_rgb8(220, 38, 38), Color::WHITE),
            Variant::Ember => (Color::from_rgb8(234, 88, 12), Color::WHITE),
            Variant::Volt => (Color::from_rgb8(163, 230, 53), Color::BLACK),
            Variant::Ocean => (Color::from_rgb8(14, 165, 233), Color::WHITE),
            Variant::Mono => (Color::WHITE, Color::BLACK),
            Variant::Gold => (Color::from_rgb8(234, 179, 8), Color::BLACK),
        };

        Scheme {
            background: ZINC_950,
            surface: ZINC_900,
            border: ZINC_800,
            text: ZINC_100,
            muted: ZINC_400,
            accent,
            on_accent,
        }
    }

    /// The iced theme for this variant
    pub fn theme(self) -> Theme {
        let scheme = self.scheme();
        Theme::custom(
            self.name().to_string(),
            iced::theme::Palette {
                background: scheme.background,
                text: scheme.text,
                primary: scheme.accent,
                success: Color::from_rgb8(34, 197, 94),
                danger: Color::from_rgb8(239, 68, 68),
            },
        )
    }
}

/// Plain filled panel
pub fn panel(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        ..container::Style::default()
    }
}

/// Panel with a hairline border
pub fn bordered_panel(scheme: Scheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(scheme.surface)),
        border: Border {
            color: scheme.border,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}

/// Navbar background: transparent at the top of the page, solid once scrolled
pub fn navbar(scheme: Scheme, scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| {
        if scrolled {
            container::Style {
                background: Some(Background::Color(Color { a: 0.95, ..scheme.background })),
                border: Border {
                    color: scheme.border,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..container::Style::default()
            }
        } else {
            container::Style::default()
        }
    }
}

/// Dimmed full-screen backdrop behind the lightbox and splash
pub fn backdrop() -> impl Fn(&Theme) -> container::Style {
    panel(Color::from_rgba(0.0, 0.0, 0.0, 0.95))
}

/// Category filter chip
pub fn chip(scheme: Scheme, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let (background, text_color) = if active {
            (scheme.accent, scheme.on_accent)
        } else if status == button::Status::Hovered {
            (scheme.surface, scheme.text)
        } else {
            (scheme.surface, scheme.muted)
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            ..button::Style::default()
        }
    }
}

/// Solid call-to-action button
pub fn accent_button(scheme: Scheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Color {
                a: 0.85,
                ..scheme.accent
            },
            button::Status::Disabled => Color { a: 0.6, ..scheme.accent },
            button::Status::Active => scheme.accent,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: scheme.on_accent,
            ..button::Style::default()
        }
    }
}

/// Borderless text-only button (nav links, close icon)
pub fn link_button(scheme: Scheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => scheme.text,
            _ => scheme.muted,
        },
        ..button::Style::default()
    }
}

/// Gallery tile: no chrome of its own
pub fn tile_button(scheme: Scheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| button::Style {
        background: Some(Background::Color(scheme.surface)),
        text_color: scheme.text,
        border: Border {
            color: if status == button::Status::Hovered {
                scheme.accent
            } else {
                scheme.surface
            },
            width: 1.0,
            radius: 0.0.into(),
        },
        ..button::Style::default()
    }
}
