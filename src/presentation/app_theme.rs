use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::{ResultCardStyle, ThemeMode};

pub const MUTED_TEXT_COLOR: Color = Color::from_rgb(0.55, 0.55, 0.6);
pub const ERROR_TEXT_COLOR: Color = Color::from_rgb(0.94, 0.27, 0.27);
pub const ONLINE_COLOR: Color = Color::from_rgb(0.2, 0.8, 0.4);
pub const CHECKING_COLOR: Color = Color::from_rgb(1.0, 0.8, 0.2);

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.07, 0.08, 0.1),
                text: Color::from_rgb(0.95, 0.95, 0.95),
                primary: Color::from_rgb(0.23, 0.51, 0.96),
                success: Color::from_rgb(0.2, 0.8, 0.4),
                danger: ERROR_TEXT_COLOR,
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.97, 0.97, 0.98),
                text: Color::from_rgb(0.1, 0.1, 0.12),
                primary: Color::from_rgb(0.23, 0.51, 0.96),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.86, 0.15, 0.15),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn filled_button(base: Color, hovered: Color, pressed: Color, status: button::Status) -> button::Style {
    let (background, text_color, snap) = match status {
        button::Status::Active => (base, Color::WHITE, false),
        button::Status::Hovered => (hovered, Color::WHITE, false),
        button::Status::Pressed => (pressed, Color::WHITE, true),
        button::Status::Disabled => (
            Color::from_rgb(0.3, 0.3, 0.3),
            Color::from_rgb(0.55, 0.55, 0.55),
            false,
        ),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

/// Blue submit button that darkens on hover and press.
pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button(
        Color::from_rgb(0.23, 0.51, 0.96),
        Color::from_rgb(0.15, 0.39, 0.92),
        Color::from_rgb(0.11, 0.31, 0.85),
        status,
    )
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button(
        Color::from_rgb(0.25, 0.25, 0.28),
        Color::from_rgb(0.35, 0.35, 0.38),
        Color::from_rgb(0.2, 0.2, 0.22),
        status,
    )
}

pub fn danger_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button(
        Color::from_rgb(0.8, 0.25, 0.25),
        Color::from_rgb(0.9, 0.35, 0.35),
        Color::from_rgb(0.7, 0.2, 0.2),
        status,
    )
}

/// The dark header strip above the search area.
pub fn header_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.12, 0.16, 0.22))),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

pub fn page_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();
    container::Style {
        background: Some(Background::Color(palette.background)),
        text_color: Some(palette.text),
        ..Default::default()
    }
}

pub fn card_style(card_style: ResultCardStyle) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.palette();
        match card_style {
            ResultCardStyle::Minimal => container::Style {
                border: Border {
                    color: Color { a: 0.25, ..palette.text },
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            },
            ResultCardStyle::Framed => container::Style {
                background: Some(Background::Color(Color { a: 0.04, ..palette.text })),
                border: Border {
                    color: Color { a: 0.15, ..palette.text },
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                    offset: iced::Vector::new(0.0, 2.0),
                    blur_radius: 8.0,
                },
                ..Default::default()
            },
        }
    }
}

pub fn image_placeholder_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.15))),
        text_color: Some(MUTED_TEXT_COLOR),
        border: Border {
            color: Color::from_rgba(0.5, 0.5, 0.5, 0.3),
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

pub fn section_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.2, 0.2, 0.2, 0.3))),
        border: Border {
            color: Color::from_rgba(0.4, 0.4, 0.4, 0.3),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn muted_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(MUTED_TEXT_COLOR),
    }
}

pub fn error_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ERROR_TEXT_COLOR),
    }
}
