use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::action::Action;

pub const ALERT_FG: Color = Color::Rgb(239, 68, 68);
const ALERT_BG: Color = Color::Rgb(45, 20, 20);

/// Red alert region for the current lookup error
pub struct ErrorAlert;

pub struct ErrorAlertProps<'a> {
    pub message: &'a str,
}

/// Border plus one line of text.
const MIN_ROWS: u16 = 3;

fn alert_paragraph(message: &str) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ALERT_FG))
        .style(Style::default().bg(ALERT_BG));

    Paragraph::new(message.to_string())
        .style(Style::default().fg(ALERT_FG))
        .wrap(Wrap { trim: true })
        .block(block)
}

impl ErrorAlert {
    /// Rows needed to show `message` word-wrapped inside the border at `width` columns
    pub fn height_for(message: &str, width: u16) -> u16 {
        let rows = alert_paragraph(message).line_count(width);
        u16::try_from(rows).unwrap_or(u16::MAX).max(MIN_ROWS)
    }
}

impl Component<Action> for ErrorAlert {
    type Props<'a> = ErrorAlertProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        frame.render_widget(alert_paragraph(props.message), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    #[test]
    fn test_height_grows_with_message() {
        assert_eq!(ErrorAlert::height_for("short", 40), 3);
        assert_eq!(ErrorAlert::height_for(&"x".repeat(50), 24), 5);
        assert_eq!(ErrorAlert::height_for("", 40), 3);
    }

    #[test]
    fn test_height_follows_word_wrap() {
        // 31 chars fit in three 12-column rows, but no two words share a row
        let message = "aaaaaaa bbbbbbb ccccccc ddddddd";
        assert_eq!(ErrorAlert::height_for(message, 14), 6);

        let mut render = RenderHarness::new(14, ErrorAlert::height_for(message, 14));
        let mut alert = ErrorAlert;
        let output = render.render_to_string_plain(|frame| {
            alert.render(frame, frame.area(), ErrorAlertProps { message });
        });

        assert!(output.contains("ddddddd"), "Last line should be visible:\n{output}");
    }

    #[test]
    fn test_render_message() {
        let mut render = RenderHarness::new(40, 3);
        let mut alert = ErrorAlert;

        let output = render.render_to_string_plain(|frame| {
            alert.render(
                frame,
                frame.area(),
                ErrorAlertProps {
                    message: "not found",
                },
            );
        });

        assert!(output.contains("not found"));
    }
}
