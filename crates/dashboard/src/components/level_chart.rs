//! Tank level history chart using `leptos-chartistry` with SVG rendering.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos_chartistry::*;
use tankview_domain::reading::HistoryPoint;
use tankview_domain::time;

/// A single data point of the level series.
#[derive(Clone)]
struct ChartPoint {
    timestamp: DateTime<Utc>,
    level: f64,
}

/// Map chronological history points onto chart points, dropping entries
/// whose timestamp cannot be represented.
fn chart_points(history: &[HistoryPoint]) -> Vec<ChartPoint> {
    history
        .iter()
        .filter_map(|point| {
            let timestamp = time::from_epoch_millis(point.timestamp)?;
            Some(ChartPoint {
                timestamp,
                level: point.level,
            })
        })
        .collect()
}

/// Build timestamp tick labels (extracted to avoid turbofish inside `view!` macro).
fn timestamp_ticks() -> TickLabels<DateTime<Utc>> {
    TickLabels::timestamps()
}

/// Level history line chart.
///
/// Takes the history already reversed to chronological order and renders a
/// single line series with the value axis fixed to 0–100. The whole chart
/// is rebuilt when a new reading arrives; there is no incremental update.
#[component]
pub fn LevelChart(points: Vec<HistoryPoint>) -> impl IntoView {
    let data = chart_points(&points);
    let data = Signal::derive(move || data.clone());
    let series = Series::new(|p: &ChartPoint| p.timestamp)
        .line(Line::new(|p: &ChartPoint| p.level).with_name("Level %"))
        .with_y_range(0.0, 100.0);
    let inner = vec![
        AxisMarker::left_edge().into_inner(),
        AxisMarker::bottom_edge().into_inner(),
        XGridLine::default().into_inner(),
        YGridLine::default().into_inner(),
        XGuideLine::over_data().into_inner(),
        YGuideLine::over_mouse().into_inner(),
    ];
    view! {
        <div class="level-chart">
            <h3>"Level History"</h3>
            <Chart
                aspect_ratio=AspectRatio::from_env_width_apply_ratio(3.0)
                left=TickLabels::aligned_floats()
                bottom=timestamp_ticks()
                inner=inner
                tooltip=Tooltip::left_cursor()
                series=series
                data=data
            />
        </div>
    }
}
