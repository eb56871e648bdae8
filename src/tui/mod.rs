//! Ratatui-based terminal UI.
//!
//! Two pages, switched with Tab:
//!
//! - Welcome: what the tool is for
//! - Accident Prediction: the closed-choice form, a Predict action and the
//!   result panel (risk band, percentage gauge, safety recommendations)
//!
//! A failed prediction is shown inline in the result panel; the form stays
//! usable so the user can change inputs and try again.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Terminal,
};

use crate::app::pipeline::{Prediction, Predictor};
use crate::config::AppConfig;
use crate::domain::{Field, FormInput};
use crate::error::{AppError, PredictError};
use crate::report::{RiskLevel, format_percent};

mod welcome;

const ACCENT: Color = Color::Red;

/// Start the TUI.
pub fn run(predictor: Predictor, config: &AppConfig) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::io(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(predictor, config);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::io(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::io(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Welcome,
    Prediction,
}

/// One selectable row of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Hour,
    Minute,
    Field(Field),
    Predict,
}

const ROWS: [Row; 12] = [
    Row::Hour,
    Row::Minute,
    Row::Field(Field::DayOfWeek),
    Row::Field(Field::AreaAccident),
    Row::Field(Field::LaneOrMedians),
    Row::Field(Field::TypeOfVehicle),
    Row::Field(Field::RoadSurfaceType),
    Row::Field(Field::RoadSurfaceConditions),
    Row::Field(Field::LightConditions),
    Row::Field(Field::WeatherConditions),
    Row::Field(Field::SexOfDriver),
    Row::Predict,
];

struct App {
    predictor: Predictor,
    model_label: String,
    page: Page,
    form: FormInput,
    selected: usize,
    outcome: Option<Result<Prediction, PredictError>>,
    status: String,
}

impl App {
    fn new(predictor: Predictor, config: &AppConfig) -> Self {
        let model_label = format!(
            "{} ({}, {} features)",
            config.model_path.display(),
            predictor.artifact().classifier().kind(),
            predictor.artifact().feature_names().len()
        );
        Self {
            predictor,
            model_label,
            page: Page::Welcome,
            form: FormInput::default(),
            selected: 0,
            outcome: None,
            status: "Tab to open the prediction form.".to_string(),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::io(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::io(format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::io(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.page = match self.page {
                    Page::Welcome => Page::Prediction,
                    Page::Prediction => Page::Welcome,
                };
                self.status = match self.page {
                    Page::Welcome => "Tab to open the prediction form.".to_string(),
                    Page::Prediction => "Fill in the details below to assess accident risk probability.".to_string(),
                };
                return false;
            }
            _ => {}
        }

        if self.page != Page::Prediction {
            return false;
        }

        match code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected + 1 < ROWS.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Left => self.adjust(-1),
            KeyCode::Right => self.adjust(1),
            KeyCode::Enter => {
                if ROWS[self.selected] == Row::Predict {
                    self.predict();
                }
            }
            KeyCode::Char('p') => self.predict(),
            KeyCode::Char('r') => {
                self.form = FormInput::default();
                self.outcome = None;
                self.status = "Form reset.".to_string();
            }
            _ => {}
        }
        false
    }

    fn adjust(&mut self, delta: i32) {
        let form = &mut self.form;
        match ROWS[self.selected] {
            Row::Hour => form.time = Some(form.time.unwrap_or_default().cycle_hour(delta)),
            Row::Minute => form.time = Some(form.time.unwrap_or_default().cycle_minute(delta)),
            Row::Field(field) => match field {
                Field::Time => {}
                Field::DayOfWeek => form.day_of_week = form.day_of_week.map(|v| v.cycle(delta)),
                Field::AreaAccident => form.area_accident = form.area_accident.map(|v| v.cycle(delta)),
                Field::TypeOfVehicle => {
                    form.type_of_vehicle = form.type_of_vehicle.map(|v| v.cycle(delta))
                }
                Field::LaneOrMedians => {
                    form.lane_or_medians = form.lane_or_medians.map(|v| v.cycle(delta))
                }
                Field::RoadSurfaceType => {
                    form.road_surface_type = form.road_surface_type.map(|v| v.cycle(delta))
                }
                Field::RoadSurfaceConditions => {
                    form.road_surface_conditions =
                        form.road_surface_conditions.map(|v| v.cycle(delta))
                }
                Field::LightConditions => {
                    form.light_conditions = form.light_conditions.map(|v| v.cycle(delta))
                }
                Field::WeatherConditions => {
                    form.weather_conditions = form.weather_conditions.map(|v| v.cycle(delta))
                }
                Field::SexOfDriver => form.sex_of_driver = form.sex_of_driver.map(|v| v.cycle(delta)),
            },
            Row::Predict => {}
        }
    }

    fn predict(&mut self) {
        let outcome = self.predictor.predict(&self.form);
        self.status = match &outcome {
            Ok(p) => format!("{} {}", p.risk_level.badge(), p.title),
            Err(_) => "Prediction failed; adjust the inputs and try again.".to_string(),
        };
        self.outcome = Some(outcome);
    }

    fn row_label(&self, row: Row) -> (String, String) {
        let form = &self.form;
        let time = form.time.unwrap_or_default();
        let value = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
        match row {
            Row::Hour => ("Hour".to_string(), format!("{:02}", time.hour())),
            Row::Minute => ("Minute".to_string(), format!("{:02}", time.minute())),
            Row::Predict => (String::new(), "🔮 Predict Accident Risk".to_string()),
            Row::Field(field) => {
                let v = match field {
                    Field::Time => form.time.map(|t| t.to_string()),
                    Field::DayOfWeek => form.day_of_week.map(|v| v.to_string()),
                    Field::AreaAccident => form.area_accident.map(|v| v.to_string()),
                    Field::TypeOfVehicle => form.type_of_vehicle.map(|v| v.to_string()),
                    Field::LaneOrMedians => form.lane_or_medians.map(|v| v.to_string()),
                    Field::RoadSurfaceType => form.road_surface_type.map(|v| v.to_string()),
                    Field::RoadSurfaceConditions => {
                        form.road_surface_conditions.map(|v| v.to_string())
                    }
                    Field::LightConditions => form.light_conditions.map(|v| v.to_string()),
                    Field::WeatherConditions => form.weather_conditions.map(|v| v.to_string()),
                    Field::SexOfDriver => form.sex_of_driver.map(|v| v.to_string()),
                };
                (field.title().to_string(), value(v))
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        match self.page {
            Page::Welcome => welcome::draw(frame, chunks[1]),
            Page::Prediction => self.draw_prediction_page(frame, chunks[1]),
        }
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let tab = |page: Page, name: &'static str| {
            if self.page == page {
                Span::styled(
                    format!(" {name} "),
                    Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!(" {name} "), Style::default().fg(Color::Gray))
            }
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("🚗 Road Accident Prediction System", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
                Span::raw("   "),
                tab(Page::Welcome, "Welcome"),
                Span::raw(" "),
                tab(Page::Prediction, "Accident Prediction"),
            ]),
            Line::from(Span::styled(
                format!("model: {}", self.model_label),
                Style::default().fg(Color::Gray),
            )),
        ];

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_prediction_page(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        self.draw_form(frame, chunks[0]);
        self.draw_result(frame, chunks[1]);
    }

    fn draw_form(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let title_width = ROWS
            .iter()
            .map(|r| self.row_label(*r).0.chars().count())
            .max()
            .unwrap_or(0);

        let items: Vec<ListItem> = ROWS
            .iter()
            .map(|row| {
                let (title, value) = self.row_label(*row);
                if *row == Row::Predict {
                    return ListItem::new(Line::from(Span::styled(
                        value,
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    )));
                }
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{title:<title_width$}  "), Style::default().fg(Color::Gray)),
                    Span::raw("‹ "),
                    Span::raw(value),
                    Span::raw(" ›"),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title("📋 Form Input").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_result(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Prediction Results").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let prediction = match &self.outcome {
            None => {
                let msg = Paragraph::new("Select the conditions, then press Enter on Predict (or p).")
                    .style(Style::default().fg(Color::Gray))
                    .wrap(Wrap { trim: true });
                frame.render_widget(msg, inner);
                return;
            }
            Some(Err(err)) => {
                let msg = Paragraph::new(format!("An error occurred during prediction: {err}"))
                    .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .wrap(Wrap { trim: true });
                frame.render_widget(msg, inner);
                return;
            }
            Some(Ok(p)) => p,
        };

        let color = level_color(prediction.risk_level);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let title = Paragraph::new(format!("{} {}", prediction.risk_level.badge(), prediction.title))
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
        frame.render_widget(title, chunks[0]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
            .ratio(prediction.probability.clamp(0.0, 1.0))
            .label(format_percent(prediction.probability));
        frame.render_widget(gauge, chunks[1]);

        let caption = Paragraph::new("probability of accident").alignment(Alignment::Center);
        frame.render_widget(caption, chunks[2]);

        let mut lines = vec![Line::from(Span::styled(
            "Safety Recommendations",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))];
        lines.extend(prediction.advice.iter().map(|a| Line::from(format!("- {a}"))));
        let advice = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
        frame.render_widget(advice, chunks[4]);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = match self.page {
            Page::Welcome => "Tab page  q quit",
            Page::Prediction => "Tab page  ↑/↓ select  ←/→ change  Enter/p predict  r reset  q quit",
        };
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn level_color(level: RiskLevel) -> Color {
    level.color_hex().parse().unwrap_or(Color::White)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DayOfWeek, TimeOfDay, WeatherConditions};
    use crate::preprocess::feature_names;
    use crate::testing::{FixedClassifier, artifact_with};
    use ratatui::backend::TestBackend;

    fn app_with(p_accident: f64) -> App {
        let config = AppConfig {
            model_path: "models/test.json".into(),
            log_level: "info".to_string(),
            log_file: None,
        };
        App::new(
            Predictor::new(artifact_with(FixedClassifier::new(p_accident), feature_names())),
            &config,
        )
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn form_keys_are_ignored_on_the_welcome_page() {
        let mut app = app_with(0.5);
        assert!(!app.handle_key(KeyCode::Char('p')));
        assert!(app.outcome.is_none());
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.page, Page::Prediction);
    }

    #[test]
    fn arrows_cycle_the_selected_widget() {
        let mut app = app_with(0.5);
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.form.day_of_week, Some(DayOfWeek::Sun));

        for _ in 0..7 {
            app.handle_key(KeyCode::Down);
        }
        app.handle_key(KeyCode::Right);
        assert_eq!(app.form.weather_conditions, Some(WeatherConditions::Raining));

        app.selected = 0;
        app.handle_key(KeyCode::Left);
        assert_eq!(app.form.time, TimeOfDay::new(7, 30));
    }

    #[test]
    fn enter_on_predict_row_shows_high_risk() {
        let mut app = app_with(0.85);
        app.handle_key(KeyCode::Tab);
        app.selected = ROWS.len() - 1;
        app.handle_key(KeyCode::Enter);

        let p = app.outcome.clone().unwrap().unwrap();
        assert_eq!(p.risk_level, RiskLevel::High);

        let text = screen(&mut app);
        assert!(text.contains("High Risk"));
        assert!(text.contains("85.00%"));
        assert!(text.contains("Reduce speed significantly"));
    }

    #[test]
    fn prediction_failure_is_shown_inline() {
        let config = AppConfig {
            model_path: "m.json".into(),
            log_level: "info".to_string(),
            log_file: None,
        };
        let mut app = App::new(
            Predictor::new(artifact_with(FixedClassifier::failing(), feature_names())),
            &config,
        );
        app.handle_key(KeyCode::Tab);
        assert!(!app.handle_key(KeyCode::Char('p')));
        assert!(matches!(app.outcome, Some(Err(PredictError::Inference(_)))));

        let text = screen(&mut app);
        assert!(text.contains("An error occurred during prediction"));

        // Retrying after a failure still works.
        app.handle_key(KeyCode::Char('r'));
        assert!(app.outcome.is_none());
    }

    #[test]
    fn welcome_page_is_the_landing_page() {
        let mut app = app_with(0.1);
        let text = screen(&mut app);
        assert!(text.contains("Sustainable Cities and Communities"));
        assert!(text.contains("Welcome"));
    }

    #[test]
    fn quit_keys_exit() {
        let mut app = app_with(0.1);
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.handle_key(KeyCode::Esc));
    }

    #[test]
    fn level_colors_parse() {
        assert_eq!(level_color(RiskLevel::High), Color::Rgb(255, 0, 0));
        assert_eq!(level_color(RiskLevel::Moderate), Color::Rgb(255, 165, 0));
    }
}
