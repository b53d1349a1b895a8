use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::info;
use std::io;
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};

use crate::clock::{TimeSource, DEFAULT_REFRESH};
use crate::icon::SizeTier;
use crate::screen::Screen;
use crate::source::DataState;
use crate::weather::{CurrentConditions, HourlyPoint, WeatherReport};

const MISSING: &str = "--";

const HOURLY_CARD_WIDTH: u16 = 10;

pub fn run_app<B: Backend, C: TimeSource>(
    terminal: &mut Terminal<B>,
    screen: &mut Screen<C>,
) -> io::Result<()> {
    let mut session = screen.activate();
    loop {
        terminal.draw(|f| ui(f, &*session))?;

        let timeout = session.clock.until_next_tick().unwrap_or(DEFAULT_REFRESH);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            info!("quit requested");
                            return Ok(());
                        }
                        KeyCode::Left | KeyCode::Char('h') => session.scroll_hourly_left(),
                        KeyCode::Right | KeyCode::Char('l') => session.scroll_hourly_right(),
                        KeyCode::Home => session.reset_hourly_scroll(),
                        _ => {}
                    }
                }
            }
        }

        session.clock.poll();
    }
}

/// Rows needed for the daily table, borders included.
fn daily_height(days: usize) -> u16 {
    u16::try_from(days).unwrap_or(u16::MAX).saturating_add(2)
}

fn degrees(value: i32) -> String {
    format!("{value}°")
}

fn panel(title: &str) -> Block {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(Color::Yellow),
        ))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(BorderType::Rounded)
}

fn display_headline<'a>(location: Option<String>, clock: &'a str) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            location.unwrap_or_else(|| MISSING.to_string()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(clock, Style::default().fg(Color::LightBlue))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .border_type(BorderType::Rounded),
    )
}

fn display_current_conditions(f: &mut Frame, current: &CurrentConditions, area: Rect) {
    let block = panel("Current Conditions");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let summary = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(15), Constraint::Min(0)])
        .split(halves[0]);

    let icon = current.icon(SizeTier::Large);
    let art: Vec<Line> = icon
        .lines()
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(icon.fg()))))
        .collect();
    f.render_widget(Paragraph::new(art), summary[0]);

    let text = vec![
        Line::from(Span::styled(
            degrees(current.temperature),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            current.condition.as_str(),
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from(current.description.as_str()),
        Line::from(""),
        Line::from(vec![
            Span::raw("H: "),
            Span::styled(
                degrees(current.high),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  L: "),
            Span::styled(
                degrees(current.low),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(text), summary[1]);

    display_metrics(f, current, halves[1]);
}

/// Humidity, wind, pressure and visibility in a 2x2 grid.
fn display_metrics(f: &mut Frame, current: &CurrentConditions, area: Rect) {
    let metrics = [
        ("Humidity", format!("{}%", current.humidity), Color::Blue),
        ("Wind", current.wind_speed.clone(), Color::Green),
        ("Pressure", current.pressure.clone(), Color::Magenta),
        ("Visibility", current.visibility.clone(), Color::LightYellow),
    ];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (row_idx, pair) in metrics.chunks(2).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row_idx]);
        for (col_idx, (label, value, color)) in pair.iter().enumerate() {
            let metric = Paragraph::new(vec![
                Line::from(Span::styled(*label, Style::default().fg(*color))),
                Line::from(Span::styled(
                    value.as_str(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
            ]);
            f.render_widget(metric, cols[col_idx]);
        }
    }
}

fn display_hourly_card(hour: &HourlyPoint) -> Paragraph {
    let icon = hour.icon(SizeTier::Medium);
    Paragraph::new(vec![
        Line::from(Span::styled(
            hour.time.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(icon.symbol(), Style::default().fg(icon.fg()))),
        Line::from(Span::styled(
            degrees(hour.temperature),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
}

fn display_hourly(f: &mut Frame, hourly: &[HourlyPoint], offset: usize, area: Rect) {
    let block = panel("Hourly Forecast");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let visible = usize::from((inner.width / HOURLY_CARD_WIDTH).max(1));
    let offset = offset.min(hourly.len().saturating_sub(1));
    let shown: Vec<&HourlyPoint> = hourly.iter().skip(offset).take(visible).collect();

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Length(HOURLY_CARD_WIDTH); shown.len()])
        .split(inner);

    for (hour, card) in shown.into_iter().zip(cards.iter()) {
        f.render_widget(display_hourly_card(hour), *card);
    }

    let more_left = offset > 0;
    let more_right = offset + visible < hourly.len();
    if more_left || more_right {
        let hint = format!(
            " {} {} ",
            if more_left { "◀" } else { " " },
            if more_right { "▶" } else { " " }
        );
        let hint_area = Rect {
            x: area.x + area.width.saturating_sub(7),
            y: area.y,
            width: 7.min(area.width),
            height: 1,
        };
        f.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::Yellow))),
            hint_area,
        );
    }
}

fn display_daily(report: &WeatherReport) -> Table {
    let rows: Vec<Row> = report
        .daily_rows()
        .into_iter()
        .map(|row| {
            let style = if row.is_today {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let day = row.forecast;
            Row::new(vec![
                Cell::from(format!(" {}", day.name)),
                Cell::from(Span::styled(
                    row.icon.symbol(),
                    Style::default().fg(row.icon.fg()),
                )),
                Cell::from(day.description.clone()).style(Style::default().fg(Color::Gray)),
                Cell::from(day.precipitation.clone()).style(Style::default().fg(Color::Blue)),
                Cell::from(degrees(day.high)).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(degrees(day.low)).style(Style::default().fg(Color::DarkGray)),
            ])
            .style(style)
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Min(16),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(5),
        ],
    )
    .block(panel("7-Day Forecast"))
}

fn display_unavailable(reason: &str) -> Paragraph {
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            " Weather data unavailable",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(" {reason}")),
    ])
    .block(panel("Weather"))
}

fn display_footer(last_updated: &str) -> Paragraph {
    let last_updated = if last_updated.is_empty() {
        MISSING
    } else {
        last_updated
    };
    Paragraph::new(vec![
        Line::from(format!(
            "Weather data updated every hour • Last updated: {last_updated}"
        )),
        Line::from("Weather information for demonstration purposes"),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray))
}

fn ui<C: TimeSource>(f: &mut Frame, screen: &Screen<C>) {
    let vert_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.area());

    let report = screen.data.report();
    let headline = display_headline(
        report.map(|r| r.location.display_name()),
        screen.clock.text(),
    );
    f.render_widget(headline, vert_layout[0]);
    f.render_widget(display_footer(screen.clock.last_updated()), vert_layout[2]);

    let report = match &screen.data {
        DataState::Loaded(report) => report,
        DataState::Unavailable { reason } => {
            f.render_widget(display_unavailable(reason), vert_layout[1]);
            return;
        }
    };

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(6),
            Constraint::Min(daily_height(report.daily.len())),
        ])
        .split(vert_layout[1]);

    display_current_conditions(f, &report.current, body[0]);
    display_hourly(f, &report.hourly, screen.hourly_offset(), body[1]);
    f.render_widget(display_daily(report), body[2]);
}
