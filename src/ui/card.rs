use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::lookup::LookupRecord;
use crate::theme::Theme;

const MISSING_FIELD: &str = "—";

/// Render the error banner for a failed lookup.
pub(crate) fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let banner_area = Rect {
        height: area.height.min(4),
        ..area
    };
    let block = Block::bordered()
        .border_style(theme.error)
        .title("Lookup failed");
    let banner = Paragraph::new(message.to_string())
        .style(theme.error)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(banner, banner_area);
}

/// Render the result card for a fetched record.
///
/// Only the display set is shown: identifier, username, join date, bio,
/// email, pronouns. The rest of the record is fetched but never rendered.
pub(crate) fn render_card(frame: &mut Frame, area: Rect, record: &LookupRecord, theme: &Theme) {
    let username = record.username.as_deref().unwrap_or(MISSING_FIELD);
    let join_date = record.join_date();

    let rows = [
        ("ID", record.id.as_deref().unwrap_or(MISSING_FIELD)),
        ("Join Date", join_date.as_deref().unwrap_or(MISSING_FIELD)),
        ("Bio", record.bio_or_fallback()),
        ("Email", record.email.as_deref().unwrap_or(MISSING_FIELD)),
        (
            "Pronouns",
            record.pronouns.as_deref().unwrap_or(MISSING_FIELD),
        ),
    ];

    let lines: Vec<Line> = rows
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:>9}  "), theme.label),
                Span::styled((*value).to_string(), theme.value),
            ])
        })
        .collect();

    let card_area = Rect {
        height: area.height.min(lines.len() as u16 + 2),
        ..area
    };
    let block = Block::bordered()
        .border_style(theme.card)
        .title(Span::styled(username.to_string(), theme.value));
    let card = Paragraph::new(lines).block(block);
    frame.render_widget(card, card_area);
}
