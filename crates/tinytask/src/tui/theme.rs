use ratatui::style::{Color, Modifier, Style};
use tinytask_app::Appearance;
use tinytask_core::{PaletteColor, TaskColor};

/// Styles for one appearance.
#[derive(Debug, Clone, Copy)]
pub(super) struct Theme {
    /// Screen background and default text.
    pub(super) base: Style,
    /// Placeholder and secondary text.
    pub(super) muted: Style,
    pub(super) border: Style,
    /// Border of the focused block.
    pub(super) focused_border: Style,
    /// Focused field in the edit popup.
    pub(super) selected: Style,
    /// Selected task row. Leaves the swatch fill untouched.
    pub(super) highlight: Style,
}

impl Theme {
    pub(super) const fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self {
                base: Style::new().fg(Color::Rgb(0x20, 0x20, 0x20)).bg(Color::Rgb(0xfa, 0xfa, 0xfa)),
                muted: Style::new().fg(Color::Rgb(0x80, 0x80, 0x80)),
                border: Style::new().fg(Color::Rgb(0xb0, 0xb0, 0xb0)),
                focused_border: Style::new().fg(Color::Rgb(0x1e, 0x88, 0xe5)),
                selected: Style::new()
                    .bg(Color::Rgb(0xe0, 0xe0, 0xe0))
                    .add_modifier(Modifier::BOLD),
                highlight: Style::new().add_modifier(Modifier::BOLD.union(Modifier::UNDERLINED)),
            },
            Appearance::Dark => Self {
                base: Style::new().fg(Color::Rgb(0xe6, 0xe6, 0xe6)).bg(Color::Rgb(0x12, 0x12, 0x12)),
                muted: Style::new().fg(Color::Rgb(0x8a, 0x8a, 0x8a)),
                border: Style::new().fg(Color::Rgb(0x44, 0x44, 0x44)),
                focused_border: Style::new().fg(Color::Rgb(0x64, 0xb5, 0xf6)),
                selected: Style::new()
                    .bg(Color::Rgb(0x30, 0x30, 0x30))
                    .add_modifier(Modifier::BOLD),
                highlight: Style::new().add_modifier(Modifier::BOLD.union(Modifier::UNDERLINED)),
            },
        }
    }

    pub(super) const fn border_for(&self, focused: bool) -> Style {
        if focused { self.focused_border } else { self.border }
    }
}

pub(super) const fn to_color(color: TaskColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

/// Black or white, whichever reads better on `background`.
pub(super) fn contrast_text(background: TaskColor) -> Color {
    let (r, g, b) = background.rgb();
    let luminance = (299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)) / 1000;
    if luminance > 150 { Color::Black } else { Color::White }
}

/// Fill used for a task row. Important tasks are drawn red.
pub(super) fn swatch_style(color: TaskColor, is_important: bool) -> Style {
    let fill = if is_important {
        TaskColor::Palette(PaletteColor::Red)
    } else {
        color
    };
    Style::new().fg(contrast_text(fill)).bg(to_color(fill))
}
