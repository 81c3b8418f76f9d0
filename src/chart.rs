//! Terminal chart of a smoothed series.

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    widgets::{Axis, Block, Chart, Dataset, GraphType},
};
use sketchbook_smoothing::SmoothedSeries;
use tracing::{debug, instrument};

/// Title drawn on the chart border.
pub const CHART_TITLE: &str = " Moving average with confidence band (q to quit) ";

/// Renders samples, moving average and confidence band into `area`.
pub fn render_chart(f: &mut Frame, area: Rect, series: &SmoothedSeries) {
    let points = series.points();
    let smoothed = series.smoothed_points();
    let lower = series.lower_points();
    let upper = series.upper_points();
    let band_style = Style::default().fg(Color::Yellow);
    let band_name = format!("{:.0}% band", series.interval().level() * 100.0);

    let datasets = vec![
        Dataset::default()
            .name("samples")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::DarkGray))
            .data(&points),
        Dataset::default()
            .name(band_name)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(band_style)
            .data(&upper),
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(band_style)
            .data(&lower),
        Dataset::default()
            .name(format!("moving average ({})", series.window()))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .data(&smoothed),
    ];

    let (x_min, x_max) = padded(series.x_bounds(), 0.0);
    let (y_min, y_max) = padded(series.y_bounds(), 0.05);

    let chart = Chart::new(datasets)
        .block(Block::bordered().title(CHART_TITLE))
        .x_axis(
            Axis::default()
                .title("x")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_min, x_max])
                .labels(axis_labels(x_min, x_max)),
        )
        .y_axis(
            Axis::default()
                .title("y")
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(axis_labels(y_min, y_max)),
        );

    f.render_widget(chart, area);
}

/// Shows the chart full-screen until `q` or `Esc` is pressed.
///
/// The terminal is restored even when drawing fails.
#[instrument(skip(series))]
pub fn show_chart(series: &SmoothedSeries) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = run(&mut terminal, series);
    ratatui::restore();
    result
}

fn run(terminal: &mut DefaultTerminal, series: &SmoothedSeries) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            render_chart(f, area, series);
        })?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            {
                debug!("Chart closed");
                return Ok(());
            }
        }
    }
}

/// Widens `(min, max)` by `margin` of its span; a flat range gets one unit.
fn padded((min, max): (f64, f64), margin: f64) -> (f64, f64) {
    let span = max - min;
    if !span.is_finite() || span <= f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }
    (min - span * margin, max + span * margin)
}

fn axis_labels(min: f64, max: f64) -> Vec<String> {
    let mid = (min + max) / 2.0;
    vec![
        format!("{:.1}", min),
        format!("{:.1}", mid),
        format!("{:.1}", max),
    ]
}
