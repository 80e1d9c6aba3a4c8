use ratatui::style::{Color, Modifier, Style};

/// Style bundle consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Prompt label to the left of the input line.
    pub prompt: Style,
    /// Submit hint while the app is ready for a new lookup.
    pub control: Style,
    /// Submit hint and spinner while a lookup is in flight.
    pub busy: Style,
    /// Error banner text and border.
    pub error: Style,
    /// Result card border and title.
    pub card: Style,
    /// Field labels inside the result card.
    pub label: Style,
    /// Field values inside the result card.
    pub value: Style,
}

pub const SLATE: Theme = Theme {
    prompt: Style::new().fg(Color::LightCyan),
    control: Style::new()
        .fg(Color::Rgb(96, 165, 250))
        .add_modifier(Modifier::BOLD),
    busy: Style::new().fg(Color::DarkGray),
    error: Style::new().fg(Color::Rgb(252, 165, 165)),
    card: Style::new().fg(Color::Rgb(148, 163, 184)),
    label: Style::new().fg(Color::DarkGray),
    value: Style::new().fg(Color::Rgb(226, 232, 240)),
};

pub const LIGHT: Theme = Theme {
    prompt: Style::new().fg(Color::Blue),
    control: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
    busy: Style::new().fg(Color::Gray),
    error: Style::new().fg(Color::Red),
    card: Style::new().fg(Color::Gray),
    label: Style::new().fg(Color::Gray),
    value: Style::new().fg(Color::Black),
};

/// Return the default theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
    SLATE
}

/// Names of the built-in themes, in presentation order.
#[must_use]
pub fn names() -> Vec<&'static str> {
    vec!["slate", "light"]
}

/// Look up a built-in theme by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    match name {
        "slate" => Some(SLATE),
        "light" => Some(LIGHT),
        _ => None,
    }
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in names() {
            assert!(by_name(name).is_some(), "theme {name} should resolve");
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(by_name("nonexistent").is_none());
    }
}
