//! SVG time-series charts for cloud metrics.
//!
//! Path geometry is computed by pure functions so the scaling logic tests
//! without a browser; the component only assembles the SVG.

use leptos::prelude::*;

use crate::api::MetricPoint;

/// Which statistic of a CloudWatch datapoint a series plots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatKind {
	/// Period average.
	Average,
	/// Period maximum.
	Maximum,
	/// Period minimum.
	Minimum,
}

impl StatKind {
	/// Legend label.
	pub fn label(self) -> &'static str {
		match self {
			StatKind::Average => "Average",
			StatKind::Maximum => "Maximum",
			StatKind::Minimum => "Minimum",
		}
	}

	/// Line color.
	pub fn stroke(self) -> &'static str {
		match self {
			StatKind::Average => "hsl(205, 70%, 55%)",
			StatKind::Maximum => "hsl(0, 60%, 60%)",
			StatKind::Minimum => "hsl(145, 45%, 55%)",
		}
	}

	/// Area fill under the line.
	pub fn fill(self) -> &'static str {
		match self {
			StatKind::Average => "hsla(205, 70%, 55%, 0.18)",
			StatKind::Maximum => "hsla(0, 60%, 60%, 0.12)",
			StatKind::Minimum => "hsla(145, 45%, 55%, 0.12)",
		}
	}

	/// Extract this statistic from a datapoint; missing values drop out of
	/// the series.
	pub fn sample(self, point: &MetricPoint) -> Option<f64> {
		match self {
			StatKind::Average => point.average,
			StatKind::Maximum => point.maximum,
			StatKind::Minimum => point.minimum,
		}
	}
}

/// Drawable chart area in SVG user units.
#[derive(Clone, Copy, Debug)]
pub struct ChartFrame {
	/// Total width.
	pub width: f64,
	/// Total height.
	pub height: f64,
	/// Inset on every side for labels.
	pub padding: f64,
}

impl Default for ChartFrame {
	fn default() -> Self {
		Self {
			width: 640.0,
			height: 260.0,
			padding: 24.0,
		}
	}
}

impl ChartFrame {
	fn x(&self, index: usize, len: usize) -> f64 {
		let inner = self.width - 2.0 * self.padding;
		if len <= 1 {
			return self.padding + inner / 2.0;
		}
		self.padding + inner * index as f64 / (len - 1) as f64
	}

	fn y(&self, value: f64, min: f64, max: f64) -> f64 {
		let inner = self.height - 2.0 * self.padding;
		let span = max - min;
		let t = if span.abs() < f64::EPSILON {
			0.5
		} else {
			(value - min) / span
		};
		self.height - self.padding - inner * t
	}
}

/// Minimum and maximum across all series, with a 0..1 fallback for empty or
/// flat input so the frame never divides by zero.
pub fn value_range(series: &[Vec<f64>]) -> (f64, f64) {
	let mut min = f64::INFINITY;
	let mut max = f64::NEG_INFINITY;
	for values in series {
		for &v in values {
			min = min.min(v);
			max = max.max(v);
		}
	}
	if min > max {
		return (0.0, 1.0);
	}
	(min, max)
}

/// SVG path for the series line: `M x0 y0 L x1 y1 ...`. Empty for an empty
/// series.
pub fn line_path(frame: &ChartFrame, values: &[f64], min: f64, max: f64) -> String {
	let mut path = String::new();
	for (i, &v) in values.iter().enumerate() {
		let op = if i == 0 { 'M' } else { 'L' };
		let (x, y) = (frame.x(i, values.len()), frame.y(v, min, max));
		path.push_str(&format!("{op}{x:.1} {y:.1} "));
	}
	path.trim_end().to_string()
}

/// SVG path for the filled area under the series: the line plus a drop to the
/// baseline and a close.
pub fn area_path(frame: &ChartFrame, values: &[f64], min: f64, max: f64) -> String {
	if values.is_empty() {
		return String::new();
	}
	let line = line_path(frame, values, min, max);
	let baseline = frame.height - frame.padding;
	let last_x = frame.x(values.len() - 1, values.len());
	let first_x = frame.x(0, values.len());
	format!("{line} L{last_x:.1} {baseline:.1} L{first_x:.1} {baseline:.1} Z")
}

/// One area chart plotting the requested statistics of a metric series.
#[component]
pub fn MetricChart(
	/// Card title.
	#[prop(into)]
	title: String,
	/// Datapoints to plot.
	#[prop(into)]
	points: Signal<Vec<MetricPoint>>,
	/// Statistics drawn as separate series.
	stats: &'static [StatKind],
) -> impl IntoView {
	let frame = ChartFrame::default();

	let chart = move || {
		let points = points.get();
		let series: Vec<(StatKind, Vec<f64>)> = stats
			.iter()
			.map(|&stat| {
				(
					stat,
					points.iter().filter_map(|p| stat.sample(p)).collect::<Vec<_>>(),
				)
			})
			.collect();
		let (min, max) = value_range(&series.iter().map(|(_, v)| v.clone()).collect::<Vec<_>>());

		let paths = series
			.iter()
			.map(|(stat, values)| {
				view! {
					<path d={area_path(&frame, values, min, max)} fill=stat.fill() stroke="none" />
					<path
						d={line_path(&frame, values, min, max)}
						fill="none"
						stroke=stat.stroke()
						stroke-width="1.5"
					/>
				}
			})
			.collect_view();

		let first_ts = points.first().map(|p| p.timestamp.clone()).unwrap_or_default();
		let last_ts = points.last().map(|p| p.timestamp.clone()).unwrap_or_default();

		view! {
			<svg
				viewBox=format!("0 0 {} {}", frame.width, frame.height)
				preserveAspectRatio="none"
				class="metric-chart"
			>
				{paths}
				<text x=frame.padding y={frame.padding - 8.0} class="chart-bound">
					{format!("{max:.1}")}
				</text>
				<text x=frame.padding y={frame.height - 6.0} class="chart-bound">
					{format!("{min:.1}")}
				</text>
				<text x={frame.width / 2.0 - 60.0} y={frame.height - 6.0} class="chart-time">
					{first_ts}
				</text>
				<text x={frame.width - frame.padding - 120.0} y={frame.height - 6.0} class="chart-time">
					{last_ts}
				</text>
			</svg>
		}
	};

	view! {
		<section class="card chart-card">
			<h3>{title}</h3>
			<div class="chart-legend">
				{stats
					.iter()
					.map(|stat| {
						view! {
							<span class="legend-entry">
								<span class="legend-swatch" style=format!("background: {}", stat.stroke())></span>
								{stat.label()}
							</span>
						}
					})
					.collect_view()}
			</div>
			{chart}
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn frame() -> ChartFrame {
		ChartFrame {
			width: 100.0,
			height: 60.0,
			padding: 10.0,
		}
	}

	#[test]
	fn line_path_spans_the_padded_frame() {
		let path = line_path(&frame(), &[0.0, 5.0, 10.0], 0.0, 10.0);
		// First point bottom-left, last point top-right.
		assert_eq!(path, "M10.0 50.0 L50.0 30.0 L90.0 10.0");
	}

	#[test]
	fn flat_series_sits_mid_frame() {
		let path = line_path(&frame(), &[3.0, 3.0], 3.0, 3.0);
		assert_eq!(path, "M10.0 30.0 L90.0 30.0");
	}

	#[test]
	fn area_path_closes_on_the_baseline() {
		let path = area_path(&frame(), &[0.0, 10.0], 0.0, 10.0);
		assert!(path.starts_with("M10.0 50.0 L90.0 10.0"));
		assert!(path.ends_with("L90.0 50.0 L10.0 50.0 Z"));
	}

	#[test]
	fn empty_series_yields_empty_paths() {
		assert_eq!(line_path(&frame(), &[], 0.0, 1.0), "");
		assert_eq!(area_path(&frame(), &[], 0.0, 1.0), "");
	}

	#[test]
	fn value_range_falls_back_for_empty_input() {
		assert_eq!(value_range(&[]), (0.0, 1.0));
		assert_eq!(value_range(&[vec![], vec![]]), (0.0, 1.0));
		assert_eq!(value_range(&[vec![2.0, 8.0], vec![-1.0]]), (-1.0, 8.0));
	}

	#[test]
	fn sample_selects_the_matching_statistic() {
		let point = MetricPoint {
			timestamp: "2025-01-01T00:00:00Z".into(),
			average: Some(5.0),
			maximum: Some(9.0),
			minimum: None,
		};
		assert_eq!(StatKind::Average.sample(&point), Some(5.0));
		assert_eq!(StatKind::Maximum.sample(&point), Some(9.0));
		assert_eq!(StatKind::Minimum.sample(&point), None);
	}
}
