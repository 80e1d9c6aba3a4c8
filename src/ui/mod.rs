//! Rendering for the lookup screen.
//!
//! Everything here is a pure projection of the current [`App`] state onto a
//! frame: the input row, the submit hint, and either the error banner or the
//! result card depending on the phase.

mod card;
pub mod input;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::Throbber;

use crate::app::{App, LookupPhase};

const DEFAULT_TITLE: &str = "ID Lookup";
const SUBMIT_LABEL: &str = "Search ⏎";
const BUSY_LABEL: &str = "Searching...";

pub(crate) fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area().inner(Margin {
        vertical: 0,
        horizontal: 1,
    });

    // Input row, submit hint, body below.
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    render_input_row(frame, app, layout[0]);
    render_submit_hint(frame, app, layout[1]);
    render_body(frame, app, layout[2]);
}

fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let title = app.title.as_deref().unwrap_or(DEFAULT_TITLE);
    let prompt_text = format!("{title} > ");
    let prompt_width = prompt_text.chars().count() as u16;

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(prompt_width), Constraint::Min(1)])
        .split(area);

    let prompt = Paragraph::new(prompt_text).style(app.theme.prompt);
    frame.render_widget(prompt, horizontal[0]);
    app.input.render(frame, horizontal[1]);
}

/// Render the submit control: the ready label, or the busy label with a
/// spinner while a lookup is in flight.
fn render_submit_hint(frame: &mut Frame, app: &App, area: Rect) {
    if matches!(app.phase, LookupPhase::Loading) {
        let spinner = Throbber::default()
            .style(app.theme.busy)
            .throbber_style(app.theme.busy);
        let line = Line::from(vec![
            spinner.to_symbol_span(&app.throbber_state),
            Span::styled(BUSY_LABEL, app.theme.busy),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    } else {
        let hint = Paragraph::new(SUBMIT_LABEL).style(app.theme.control);
        frame.render_widget(hint, area);
    }
}

fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    match &app.phase {
        LookupPhase::Success(record) => card::render_card(frame, area, record, &app.theme),
        LookupPhase::Failed(message) => card::render_error(frame, area, message, &app.theme),
        // Neither banner nor card while idle or loading.
        LookupPhase::Idle | LookupPhase::Loading => {}
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use super::*;
    use crate::app::AppConfig;
    use crate::lookup::{LookupRecord, NO_BIO_FALLBACK};

    fn buffer_to_string(buf: &Buffer) -> String {
        let mut lines = Vec::new();
        for y in 0..buf.area.height {
            let mut line = String::new();
            for x in 0..buf.area.width {
                line.push_str(buf[(x, y)].symbol());
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    fn render_to_string(app: &mut App<'_>) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| draw(frame, app))
            .expect("draw frame");
        buffer_to_string(terminal.backend().buffer())
    }

    fn test_app() -> App<'static> {
        App::new(AppConfig::default()).expect("app builds")
    }

    fn sample_record() -> LookupRecord {
        LookupRecord {
            id: Some("123".to_string()),
            username: Some("alice".to_string()),
            created_timestamp: Some(1_609_459_200_000),
            bio: Some(String::new()),
            email: Some("a@x.com".to_string()),
            pronouns: Some("she/her".to_string()),
            ..LookupRecord::default()
        }
    }

    #[test]
    fn idle_shows_neither_banner_nor_card() {
        let mut app = test_app();
        let screen = render_to_string(&mut app);

        assert!(screen.contains(SUBMIT_LABEL));
        assert!(!screen.contains(BUSY_LABEL));
        assert!(!screen.contains("Lookup failed"));
    }

    #[test]
    fn loading_shows_the_busy_label() {
        let mut app = test_app();
        app.phase = LookupPhase::Loading;
        let screen = render_to_string(&mut app);

        assert!(screen.contains(BUSY_LABEL));
        assert!(!screen.contains(SUBMIT_LABEL));
    }

    #[test]
    fn failure_renders_the_error_banner_without_a_card() {
        let mut app = test_app();
        app.phase = LookupPhase::Failed("lookup returned HTTP 404".to_string());
        let screen = render_to_string(&mut app);

        assert!(screen.contains("Lookup failed"));
        assert!(screen.contains("lookup returned HTTP 404"));
        assert!(!screen.contains("Pronouns"));
    }

    #[test]
    fn success_renders_every_display_field() {
        let record = sample_record();
        let join_date = record.join_date().expect("date formats");

        let mut app = test_app();
        app.phase = LookupPhase::Success(record);
        let screen = render_to_string(&mut app);

        assert!(screen.contains("alice"));
        assert!(screen.contains("123"));
        assert!(screen.contains(&join_date));
        assert!(screen.contains("a@x.com"));
        assert!(screen.contains("she/her"));
    }

    #[test]
    fn empty_bio_falls_back_to_the_literal() {
        let mut app = test_app();
        app.phase = LookupPhase::Success(sample_record());
        let screen = render_to_string(&mut app);

        assert!(screen.contains(NO_BIO_FALLBACK));
    }

    #[test]
    fn missing_optional_fields_render_placeholders() {
        let mut app = test_app();
        app.phase = LookupPhase::Success(LookupRecord::default());
        let screen = render_to_string(&mut app);

        assert!(screen.contains(NO_BIO_FALLBACK));
        assert!(screen.contains("—"));
    }

    #[test]
    fn custom_title_appears_in_the_prompt() {
        let config = AppConfig {
            title: Some("Member lookup".to_string()),
            ..AppConfig::default()
        };
        let mut app = App::new(config).expect("app builds");
        let screen = render_to_string(&mut app);

        assert!(screen.contains("Member lookup >"));
    }
}
