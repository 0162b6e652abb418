use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::action::Action;
use crate::format::{format_date, format_reading};
use crate::state::{CurrentConditions, WeatherRecord};

/// Structured summary of a retrieved weather record
pub struct RecordCard;

pub struct RecordCardProps<'a> {
    pub record: &'a WeatherRecord,
}

const MUTED: Color = Color::Gray;
const INSET_BORDER: Color = Color::Rgb(70, 70, 80);

/// Header, requested-for line, spacer.
const HEADER_ROWS: u16 = 3;
/// Three rows of two readings, value + label each.
const GRID_ROWS: u16 = 6;
/// Bordered weather/visibility block.
const CONDITIONS_ROWS: u16 = 4;
const NOTES_ROWS: u16 = 3;

/// A labeled metric reading in the grid
struct Reading {
    value: String,
    label: &'static str,
    accent: Color,
}

fn readings(current: &CurrentConditions) -> [Reading; 6] {
    [
        Reading {
            value: format!("{}°C", format_reading(current.temperature)),
            label: "Temperature",
            accent: Color::Blue,
        },
        Reading {
            value: format!("{}°C", format_reading(current.feelslike)),
            label: "Feels like",
            accent: Color::Rgb(249, 115, 22),
        },
        Reading {
            value: format!("{} km/h", format_reading(current.wind_speed)),
            label: "Wind speed",
            accent: Color::Green,
        },
        Reading {
            value: format!("{}%", format_reading(current.humidity)),
            label: "Humidity",
            accent: Color::Magenta,
        },
        Reading {
            value: format!("{} hPa", format_reading(current.pressure)),
            label: "Pressure",
            accent: Color::Red,
        },
        Reading {
            value: format_reading(current.uv_index),
            label: "UV Index",
            accent: Color::Yellow,
        },
    ]
}

impl RecordCard {
    /// Rows the card wants for `record`
    pub fn height_for(record: &WeatherRecord) -> u16 {
        let notes = if record.notes.is_empty() { 0 } else { NOTES_ROWS };
        HEADER_ROWS + notes + GRID_ROWS + CONDITIONS_ROWS + 1
    }
}

impl Component<Action> for RecordCard {
    type Props<'a> = RecordCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let record = props.record;
        let notes_rows = if record.notes.is_empty() { 0 } else { NOTES_ROWS };

        let chunks = Layout::vertical([
            Constraint::Length(1),               // Place
            Constraint::Length(1),               // Requested for
            Constraint::Length(1),               // Spacer
            Constraint::Length(notes_rows),      // Notes
            Constraint::Length(GRID_ROWS),       // Readings
            Constraint::Length(CONDITIONS_ROWS), // Weather + visibility
            Constraint::Length(1),               // Created
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(record.place_title()).bold()),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("Requested for: {}", format_date(&record.date)),
                Style::default().fg(MUTED),
            ))),
            chunks[1],
        );

        if notes_rows > 0 {
            let notes = Line::from(vec![
                Span::styled("Notes:", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!(" {}", record.notes)),
            ]);
            frame.render_widget(
                Paragraph::new(notes)
                    .wrap(Wrap { trim: true })
                    .block(inset_block()),
                chunks[3],
            );
        }

        render_grid(frame, chunks[4], &record.weather_data.current);

        let current = &record.weather_data.current;
        let conditions = vec![
            Line::from(vec![
                Span::styled("Weather:", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!(" {}", record.descriptions())),
            ]),
            Line::from(vec![
                Span::styled("Visibility:", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!(" {} km", format_reading(current.visibility))),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(conditions).block(inset_block()),
            chunks[5],
        );

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("Created: {}", format_date(&record.created_at)),
                Style::default().fg(MUTED),
            ))),
            chunks[6],
        );
    }
}

fn inset_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(INSET_BORDER))
}

fn render_grid(frame: &mut Frame, area: Rect, current: &CurrentConditions) {
    let rows = Layout::vertical([Constraint::Length(2); 3]).split(area);
    let readings = readings(current);

    for (row, pair) in rows.iter().zip(readings.chunks(2)) {
        let cells = Layout::horizontal([Constraint::Percentage(50); 2]).split(*row);
        for (cell, reading) in cells.iter().zip(pair) {
            let lines = vec![
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(reading.accent)),
                    Span::styled(
                        reading.value.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", reading.label),
                    Style::default().fg(MUTED),
                )),
            ];
            frame.render_widget(Paragraph::new(lines), *cell);
        }
    }
}
