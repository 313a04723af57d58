use dioxus::prelude::*;

use gitpulse_core::TimeseriesPoint;

/// Lines drawn by the chart, with their stroke colors.
const SERIES: [(&str, &str); 3] = [
    ("Commits", "#667eea"),
    ("Pull Requests", "#48bb78"),
    ("Deploys", "#ed8936"),
];

const CHART_WIDTH: f64 = 720.0;
const CHART_HEIGHT: f64 = 320.0;
const PADDING: f64 = 50.0;

/// SVG line chart of commits, pull requests and deploys over calendar days.
/// Points with an empty normalized date are omitted.
#[component]
pub fn TimeseriesChart(points: Vec<TimeseriesPoint>) -> Element {
    let points: Vec<TimeseriesPoint> = points
        .into_iter()
        .filter(|p| !p.date.is_empty())
        .collect();
    if points.is_empty() {
        return rsx! {
            p { class: "no-data", "No time-series data" }
        };
    }

    let series: [Vec<f64>; 3] = [
        points.iter().map(|p| p.activity.commits as f64).collect(),
        points.iter().map(|p| p.activity.prs as f64).collect(),
        points.iter().map(|p| p.activity.deploys as f64).collect(),
    ];
    let max_value = series
        .iter()
        .flatten()
        .copied()
        .fold(0.0f64, f64::max);
    let n = points.len();

    // First, middle and last dates label the x axis.
    let mut label_indices = vec![0];
    if n > 2 {
        label_indices.push(n / 2);
    }
    if n > 1 {
        label_indices.push(n - 1);
    }
    let date_labels: Vec<(f64, String)> = label_indices
        .into_iter()
        .map(|i| (point_x(i, n), points[i].date.clone()))
        .collect();

    rsx! {
        div { class: "chart-container",
            svg {
                class: "chart",
                view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                "preserveAspectRatio": "xMidYMid meet",

                // Grid lines and y-axis labels
                for i in 0..5 {
                    line {
                        x1: "{PADDING}",
                        y1: "{grid_y(i)}",
                        x2: "{CHART_WIDTH - PADDING}",
                        y2: "{grid_y(i)}",
                        class: "grid-line"
                    }
                }
                for i in 0..5 {
                    text {
                        x: "{PADDING - 8.0}",
                        y: "{grid_y(i)}",
                        class: "axis-label",
                        "text-anchor": "end",
                        "{axis_value(max_value, i)}"
                    }
                }

                // X-axis date labels
                for (x, date) in date_labels {
                    text {
                        x: "{x}",
                        y: "{CHART_HEIGHT - PADDING + 18.0}",
                        class: "axis-label",
                        "text-anchor": "middle",
                        "{date}"
                    }
                }

                // One line per metric
                for (idx, values) in series.iter().enumerate() {
                    {
                        let (name, color) = SERIES[idx];
                        let path = line_path(values, max_value);
                        let dots: Vec<(f64, f64)> = values
                            .iter()
                            .enumerate()
                            .map(|(i, value)| (point_x(i, n), point_y(*value, max_value)))
                            .collect();
                        rsx! {
                            path {
                                key: "{name}-line",
                                d: "{path}",
                                fill: "none",
                                stroke: "{color}",
                                "stroke-width": "2"
                            }
                            for (i, (cx, cy)) in dots.into_iter().enumerate() {
                                circle {
                                    key: "{name}-point-{i}",
                                    cx: "{cx}",
                                    cy: "{cy}",
                                    r: "3",
                                    fill: "{color}"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "chart-legend",
                for (name, color) in SERIES {
                    div { class: "legend-item",
                        span {
                            class: "legend-color",
                            style: "background-color: {color}"
                        }
                        span { class: "legend-label", "{name}" }
                    }
                }
            }
        }
    }
}

fn grid_y(i: usize) -> f64 {
    PADDING + (CHART_HEIGHT - 2.0 * PADDING) * (i as f64 / 4.0)
}

fn point_x(i: usize, n: usize) -> f64 {
    PADDING + (CHART_WIDTH - 2.0 * PADDING) * (i as f64 / (n - 1).max(1) as f64)
}

fn point_y(value: f64, max_value: f64) -> f64 {
    PADDING + (CHART_HEIGHT - 2.0 * PADDING) * (1.0 - value / max_value.max(1.0))
}

fn line_path(values: &[f64], max_value: f64) -> String {
    let mut path = String::new();
    let n = values.len();
    for (i, value) in values.iter().enumerate() {
        let x = point_x(i, n);
        let y = point_y(*value, max_value);
        if i == 0 {
            path.push_str(&format!("M {:.1} {:.1}", x, y));
        } else {
            path.push_str(&format!(" L {:.1} {:.1}", x, y));
        }
    }
    path
}

fn axis_value(max_value: f64, i: usize) -> String {
    format!("{:.0}", max_value * (1.0 - i as f64 / 4.0))
}
