use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, StatusBar, StatusBarHint, StatusBarProps, StatusBarSection,
    StatusBarStyle, TextInput, TextInputProps, TextInputStyle,
};

use super::{Component, ErrorAlert, ErrorAlertProps, RecordCard, RecordCardProps};
use crate::action::Action;
use crate::state::AppState;

pub const TITLE: &str = "Weather Data Lookup";
pub const DESCRIPTION: &str = "Enter a weather ID to retrieve stored weather data";
pub const PLACEHOLDER: &str = "e.g., sample-weather-123";
pub const SUBMIT_LABEL: &str = "Lookup";
pub const BUSY_LABEL: &str = "Loading...";

const INPUT_BG: Color = Color::Rgb(50, 50, 60);
const BUTTON_WIDTH: u16 = 14;

/// Props for LookupPanel - read-only view of state
pub struct LookupPanelProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The weather lookup panel: query input, submit control, alert and result
pub struct LookupPanel {
    input: TextInput,
}

impl Default for LookupPanel {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl LookupPanel {
    pub fn new() -> Self {
        Self::default()
    }
}

fn input_style() -> TextInputStyle {
    TextInputStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::all(1),
            bg: Some(INPUT_BG),
            fg: None,
        },
        placeholder_style: None,
        cursor_style: None,
    }
}

impl Component<Action> for LookupPanel {
    type Props<'a> = LookupPanelProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![Action::Quit];
            }
            // The submit control is disabled while a lookup is outstanding
            KeyCode::Enter if props.state.is_loading() => return Vec::new(),
            KeyCode::Enter => return vec![Action::LookupSubmit],
            _ => {}
        }

        // All other keys edit the query
        let input_props = TextInputProps {
            value: &props.state.query,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: input_style(),
            on_change: Action::QueryChange,
            on_submit: |_| Action::LookupSubmit,
            on_cursor_move: Some(|_| Action::Render),
        };

        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let alert_rows = state
            .error()
            .map(|message| ErrorAlert::height_for(message, area.width))
            .unwrap_or(0);
        let record_rows = state.record().map(RecordCard::height_for).unwrap_or(0);

        let chunks = Layout::vertical([
            Constraint::Length(1),           // Title
            Constraint::Length(1),           // Description
            Constraint::Length(1),           // Spacer
            Constraint::Length(1),           // Label
            Constraint::Length(3),           // Input + submit
            Constraint::Length(1),           // Spacer
            Constraint::Length(alert_rows),  // Alert
            Constraint::Length(record_rows), // Record
            Constraint::Min(0),              // Filler
            Constraint::Length(1),           // Help bar
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(TITLE).bold().fg(Color::Cyan)),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                DESCRIPTION,
                Style::default().fg(Color::DarkGray),
            ))),
            chunks[1],
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Weather ID",
                Style::default().add_modifier(Modifier::BOLD),
            ))),
            chunks[3],
        );

        let row = Layout::horizontal([Constraint::Min(1), Constraint::Length(BUTTON_WIDTH)])
            .spacing(1)
            .split(chunks[4]);
        let input_props = TextInputProps {
            value: &state.query,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused,
            style: input_style(),
            on_change: Action::QueryChange,
            on_submit: |_| Action::LookupSubmit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, row[0], input_props);
        render_submit(frame, row[1], state.is_loading());

        if let Some(message) = state.error() {
            let mut alert = ErrorAlert;
            alert.render(frame, chunks[6], ErrorAlertProps { message });
        }

        if let Some(record) = state.record() {
            let mut card = RecordCard;
            card.render(frame, chunks[7], RecordCardProps { record });
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[9],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "lookup"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

fn render_submit(frame: &mut Frame, area: Rect, is_loading: bool) {
    let (label, style) = if is_loading {
        (BUSY_LABEL, Style::default().fg(Color::DarkGray))
    } else {
        (
            SUBMIT_LABEL,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style);
    frame.render_widget(
        Paragraph::new(Span::styled(label, style))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use tui_dispatch::DataResource;
    use tui_dispatch::testing::*;

    fn enter() -> EventKind {
        EventKind::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
    }

    fn actions_for(state: &AppState, event: &EventKind, is_focused: bool) -> Vec<Action> {
        let mut component = LookupPanel::new();
        component
            .handle_event(event, LookupPanelProps { state, is_focused })
            .into_iter()
            .collect()
    }

    #[test]
    fn test_enter_submits() {
        let state = AppState::new("abc");

        let actions = actions_for(&state, &enter(), true);
        actions.assert_count(1);
        actions.assert_first(Action::LookupSubmit);
    }

    #[test]
    fn test_enter_ignored_while_loading() {
        let state = AppState {
            query: "abc".into(),
            lookup: DataResource::Loading,
        };

        actions_for(&state, &enter(), true).assert_empty();
    }

    #[test]
    fn test_escape_and_ctrl_c_quit() {
        let state = AppState::default();

        let esc = EventKind::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        actions_for(&state, &esc, true).assert_first(Action::Quit);

        let ctrl_c = EventKind::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        actions_for(&state, &ctrl_c, true).assert_first(Action::Quit);
    }

    #[test]
    fn test_unfocused_ignores() {
        let state = AppState::new("abc");

        actions_for(&state, &enter(), false).assert_empty();
    }

    #[test]
    fn test_render_busy_label_while_loading() {
        let mut render = RenderHarness::new(60, 24);
        let mut component = LookupPanel::new();
        let state = AppState {
            query: "abc".into(),
            lookup: DataResource::Loading,
        };

        let output = render.render_to_string_plain(|frame| {
            let props = LookupPanelProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains(BUSY_LABEL));
    }

    #[test]
    fn test_help_bar_stays_below_record() {
        use crate::state::{PlaceInfo, WeatherPayload, WeatherRecord};

        let record = WeatherRecord {
            id: "abc".into(),
            date: "2024-01-05".into(),
            location: "Quito".into(),
            notes: "Long notes".into(),
            weather_data: WeatherPayload {
                location: PlaceInfo {
                    name: "Quito".into(),
                    country: "Ecuador".into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            created_at: "2024-01-05".into(),
        };
        // Header rows + card + help bar, nothing to spare
        let height = 9 + RecordCard::height_for(&record);
        let state = AppState {
            query: "abc".into(),
            lookup: DataResource::Loaded(record),
        };

        let mut render = RenderHarness::new(60, height);
        let mut component = LookupPanel::new();
        let output = render.render_to_string_plain(|frame| {
            let props = LookupPanelProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("Quito, Ecuador"));
        assert!(output.contains("Created: January 5, 2024"));
        assert!(output.contains("quit"), "Help bar should be visible:\n{output}");
    }
}
