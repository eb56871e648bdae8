//! Welcome page text.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const HEADING: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

const SDG_11: &str = "Sustainable Development Goal 11 aims to make cities inclusive, safe, \
resilient and sustainable. A critical part of that goal is improving road safety and \
reducing accidents in urban areas.";

const CRISIS: &[&str] = &[
    "Approximately 1.3 million people die each year from road traffic crashes",
    "Road traffic injuries are the leading cause of death for children and young adults aged 5-29",
    "Over 90% of road fatalities occur in low- and middle-income countries",
    "Traffic crashes cost most countries 3% of their gross domestic product",
];

const CAUSES: &[&str] = &[
    "Speeding and reckless driving",
    "Poor road infrastructure",
    "Distracted driving (mobile phone use)",
    "Driving under the influence of alcohol/drugs",
    "Poor weather conditions",
    "Vehicle malfunctions",
    "Inadequate lighting",
];

const HELPS: &[&str] = &[
    "Help drivers make safer decisions",
    "Enable city planners to identify dangerous areas",
    "Support policymakers in implementing targeted safety measures",
    "Potentially save lives by preventing accidents before they happen",
];

pub(super) fn draw(frame: &mut ratatui::Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let mut left = vec![
        Line::from(Span::styled("Addressing SDG 11: Sustainable Cities and Communities", HEADING)),
        Line::from(SDG_11),
        Line::default(),
        Line::from(Span::styled("The Global Road Safety Crisis", HEADING)),
    ];
    left.extend(bullets(CRISIS));
    left.push(Line::default());
    left.push(Line::from(Span::styled("Common Causes of Road Accidents", HEADING)));
    left.extend(bullets(CAUSES));

    let mut right = vec![
        Line::from(Span::styled("How This System Helps", HEADING)),
        Line::from(
            "A trained model weighs time, location, vehicle, road, light and weather \
             conditions to estimate accident risk. Predicting high-risk scenarios can:",
        ),
        Line::default(),
    ];
    right.extend(bullets(HELPS));
    right.push(Line::default());
    right.push(Line::from(Span::styled(
        "👉 Press Tab to try the prediction form",
        Style::default().fg(Color::Yellow),
    )));

    frame.render_widget(
        Paragraph::new(Text::from(left))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("🚗 Road Accident Prediction System").borders(Borders::ALL)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Text::from(right))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("About").borders(Borders::ALL)),
        chunks[1],
    );
}

fn bullets(items: &'static [&'static str]) -> impl Iterator<Item = Line<'static>> {
    items.iter().map(|s| Line::from(format!("- {s}")))
}
