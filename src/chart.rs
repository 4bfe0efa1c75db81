//! Static SVG area chart for the growth series.
//!
//! The chart is drawn at build time, so the published page needs no charting
//! library. Both series share one vertical scale running from zero to the
//! largest value in either series; the y axis itself is not drawn.
//!
//! Curves use monotone cubic interpolation (the Fritsch–Carlson tangents,
//! as in d3's `curveMonotoneX`): every Bézier segment stays between the
//! values of its two endpoints, so a rising month never dips and the area
//! fill never pokes below the baseline.

use crate::config::ChartConfig;
use crate::content::{GrowthPoint, series_peak};
use maud::{Markup, html};

const PAD_TOP: f64 = 48.0;
const PAD_BOTTOM: f64 = 32.0;
const PAD_X: f64 = 24.0;

/// One plotted series.
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub gradient_id: &'static str,
    pub value: fn(&GrowthPoint) -> f64,
}

fn organic(p: &GrowthPoint) -> f64 {
    p.organic
}

fn paid(p: &GrowthPoint) -> f64 {
    p.paid
}

pub static SERIES: [Series; 2] = [
    Series {
        name: "Organic Growth",
        color: "#8b5cf6",
        gradient_id: "colorOrganic",
        value: organic,
    },
    Series {
        name: "Paid Traffic",
        color: "#d946ef",
        gradient_id: "colorPaid",
        value: paid,
    },
];

/// Point in SVG user space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pt {
    pub x: f64,
    pub y: f64,
}

/// Cubic Bézier segment ending at `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub c1: Pt,
    pub c2: Pt,
    pub to: Pt,
}

/// Pixel geometry derived from the configured viewBox.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            width: f64::from(config.width),
            height: f64::from(config.height),
        }
    }

    pub fn baseline(&self) -> f64 {
        (self.height - PAD_BOTTOM).max(0.0)
    }

    pub fn top(&self) -> f64 {
        PAD_TOP.min(self.baseline())
    }

    /// X positions spread evenly across the plot; a lone point is centred.
    pub fn xs(&self, count: usize) -> Vec<f64> {
        let left = PAD_X.min(self.width / 2.0);
        let span = (self.width - 2.0 * left).max(0.0);
        match count {
            0 => Vec::new(),
            1 => vec![self.width / 2.0],
            n => (0..n)
                .map(|i| left + span * i as f64 / (n - 1) as f64)
                .collect(),
        }
    }

    /// Map a value onto the y axis, `peak` landing on the plot top.
    pub fn y(&self, value: f64, peak: f64) -> f64 {
        if peak <= 0.0 {
            return self.baseline();
        }
        let ratio = (value / peak).clamp(0.0, 1.0);
        self.baseline() - ratio * (self.baseline() - self.top())
    }
}

/// Tangent at an interior point from the slopes on either side.
fn interior_tangent(s0: f64, s1: f64, h0: f64, h1: f64) -> f64 {
    if s0 * s1 <= 0.0 {
        return 0.0;
    }
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let sign = s0.signum() + s1.signum();
    sign * s0.abs().min(s1.abs()).min(0.5 * p.abs())
}

/// Tangent at an end point, from the neighbouring tangent `t`.
fn end_tangent(slope: f64, t: f64) -> f64 {
    (3.0 * slope - t) / 2.0
}

/// Monotone cubic segments through `points`, which must be sorted by x.
///
/// Fewer than two points produce no segments.
pub fn monotone_segments(points: &[Pt]) -> Vec<Segment> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let h: Vec<f64> = points.windows(2).map(|w| w[1].x - w[0].x).collect();
    let slopes: Vec<f64> = points
        .windows(2)
        .zip(&h)
        .map(|(w, &dx)| if dx == 0.0 { 0.0 } else { (w[1].y - w[0].y) / dx })
        .collect();

    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = interior_tangent(slopes[i - 1], slopes[i], h[i - 1], h[i]);
    }
    if n == 2 {
        tangents[0] = slopes[0];
        tangents[1] = slopes[0];
    } else {
        tangents[0] = end_tangent(slopes[0], tangents[1]);
        tangents[n - 1] = end_tangent(slopes[n - 2], tangents[n - 2]);
    }

    points
        .windows(2)
        .enumerate()
        .map(|(i, w)| {
            let (a, b) = (w[0], w[1]);
            let dx = (b.x - a.x) / 3.0;
            Segment {
                c1: Pt {
                    x: a.x + dx,
                    y: a.y + dx * tangents[i],
                },
                c2: Pt {
                    x: b.x - dx,
                    y: b.y - dx * tangents[i + 1],
                },
                to: b,
            }
        })
        .collect()
}

fn fmt(v: f64) -> String {
    format!("{v:.1}")
}

/// SVG path data for the curve through `points`.
pub fn line_path(points: &[Pt]) -> Option<String> {
    let first = points.first()?;
    let segments = monotone_segments(points);
    if segments.is_empty() {
        return None;
    }
    let mut d = format!("M{},{}", fmt(first.x), fmt(first.y));
    for s in &segments {
        d.push_str(&format!(
            " C{},{} {},{} {},{}",
            fmt(s.c1.x),
            fmt(s.c1.y),
            fmt(s.c2.x),
            fmt(s.c2.y),
            fmt(s.to.x),
            fmt(s.to.y)
        ));
    }
    Some(d)
}

/// The curve closed down to `baseline`, for the gradient fill.
pub fn area_path(points: &[Pt], baseline: f64) -> Option<String> {
    let line = line_path(points)?;
    let (first, last) = (points.first()?, points.last()?);
    Some(format!(
        "{line} L{},{} L{},{} Z",
        fmt(last.x),
        fmt(baseline),
        fmt(first.x),
        fmt(baseline)
    ))
}

/// Project one series into SVG space.
pub fn plot(series: &Series, data: &[GrowthPoint], frame: &Frame, peak: f64) -> Vec<Pt> {
    frame
        .xs(data.len())
        .into_iter()
        .zip(data)
        .map(|(x, p)| Pt {
            x,
            y: frame.y((series.value)(p), peak),
        })
        .collect()
}

/// Render the growth chart. An empty series renders the frame and legend
/// with no curves.
pub fn render_growth_chart(data: &[GrowthPoint], config: &ChartConfig) -> Markup {
    let frame = Frame::new(config);
    let peak = series_peak(data);
    let xs = frame.xs(data.len());
    let label_y = fmt(frame.height - PAD_BOTTOM / 3.0);

    html! {
        svg.growth-chart viewBox=(format!("0 0 {} {}", config.width, config.height))
            role="img" aria-label="Organic growth versus paid traffic by month"
            xmlns="http://www.w3.org/2000/svg" {
            defs {
                @for series in &SERIES {
                    linearGradient id=(series.gradient_id) x1="0" y1="0" x2="0" y2="1" {
                        stop offset="5%" stop-color=(series.color) stop-opacity="0.8" {}
                        stop offset="95%" stop-color=(series.color) stop-opacity="0" {}
                    }
                }
            }
            g.chart-legend {
                @for (i, series) in SERIES.iter().enumerate() {
                    @let x = frame.width / 2.0 - 110.0 + 120.0 * i as f64;
                    rect x=(fmt(x)) y="12" width="12" height="12" rx="3" fill=(series.color) {}
                    text x=(fmt(x + 18.0)) y="22" { (series.name) }
                }
            }
            @for series in &SERIES {
                @let points = plot(series, data, &frame, peak);
                @if let (Some(area), Some(line)) = (area_path(&points, frame.baseline()), line_path(&points)) {
                    g.chart-series data-series=(series.name) {
                        path d=(area) fill={ "url(#" (series.gradient_id) ")" } stroke="none" {}
                        path d=(line) fill="none" stroke=(series.color) stroke-width="4"
                            stroke-linecap="round" stroke-linejoin="round" {}
                    }
                }
            }
            g.chart-axis {
                @for (x, point) in xs.iter().zip(data) {
                    text x=(fmt(*x)) y=(label_y) text-anchor="middle" { (point.label) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::GROWTH_DATA;

    fn pts(values: &[(f64, f64)]) -> Vec<Pt> {
        values.iter().map(|&(x, y)| Pt { x, y }).collect()
    }

    fn between(v: f64, a: f64, b: f64) -> bool {
        let eps = 1e-9;
        v >= a.min(b) - eps && v <= a.max(b) + eps
    }

    #[test]
    fn segments_need_two_points() {
        assert!(monotone_segments(&[]).is_empty());
        assert!(monotone_segments(&pts(&[(0.0, 1.0)])).is_empty());
        assert_eq!(monotone_segments(&pts(&[(0.0, 1.0), (3.0, 4.0)])).len(), 1);
    }

    #[test]
    fn two_points_make_straight_line() {
        let segs = monotone_segments(&pts(&[(0.0, 0.0), (3.0, 3.0)]));
        assert_eq!(segs[0].c1, Pt { x: 1.0, y: 1.0 });
        assert_eq!(segs[0].c2, Pt { x: 2.0, y: 2.0 });
    }

    #[test]
    fn control_points_stay_within_segment_range() {
        let input = pts(&[
            (0.0, 300.0),
            (10.0, 250.0),
            (20.0, 260.0),
            (30.0, 100.0),
            (40.0, 100.0),
            (50.0, 40.0),
        ]);
        for (seg, w) in monotone_segments(&input).iter().zip(input.windows(2)) {
            assert!(between(seg.c1.y, w[0].y, w[1].y), "{seg:?}");
            assert!(between(seg.c2.y, w[0].y, w[1].y), "{seg:?}");
        }
    }

    #[test]
    fn local_extremum_gets_flat_tangent() {
        let segs = monotone_segments(&pts(&[(0.0, 0.0), (1.0, 5.0), (2.0, 0.0)]));
        // Tangent at the peak is zero: both control points level with it.
        assert_eq!(segs[0].c2.y, 5.0);
        assert_eq!(segs[1].c1.y, 5.0);
    }

    #[test]
    fn frame_maps_peak_to_top_and_zero_to_baseline() {
        let frame = Frame::new(&ChartConfig::default());
        assert_eq!(frame.y(9200.0, 9200.0), frame.top());
        assert_eq!(frame.y(0.0, 9200.0), frame.baseline());
        assert_eq!(frame.y(5.0, 0.0), frame.baseline());
    }

    #[test]
    fn frame_spreads_x_positions() {
        let frame = Frame::new(&ChartConfig::default());
        let xs = frame.xs(6);
        assert_eq!(xs.len(), 6);
        assert_eq!(xs[0], PAD_X);
        assert_eq!(xs[5], 640.0 - PAD_X);
        assert_eq!(frame.xs(1), vec![320.0]);
        assert!(frame.xs(0).is_empty());
    }

    #[test]
    fn area_path_closes_on_baseline() {
        let d = area_path(&pts(&[(0.0, 10.0), (10.0, 5.0)]), 20.0).unwrap();
        assert!(d.starts_with("M0.0,10.0 C"));
        assert!(d.ends_with("L10.0,20.0 L0.0,20.0 Z"));
    }

    #[test]
    fn render_builtin_chart() {
        let svg = render_growth_chart(GROWTH_DATA, &ChartConfig::default()).into_string();
        assert!(svg.contains(r#"viewBox="0 0 640 360""#));
        assert!(svg.contains(r#"id="colorOrganic""#));
        assert!(svg.contains(r#"id="colorPaid""#));
        assert!(svg.contains("url(#colorOrganic)"));
        assert_eq!(svg.matches("class=\"chart-series\"").count(), 2);
        for label in ["Month 1", "Month 6"] {
            assert!(svg.contains(label));
        }
        assert!(svg.contains("Organic Growth"));
        assert!(svg.contains("Paid Traffic"));
    }

    #[test]
    fn render_empty_chart() {
        let svg = render_growth_chart(&[], &ChartConfig::default()).into_string();
        assert!(svg.contains("<svg"));
        assert!(!svg.contains("chart-series"));
        assert!(!svg.contains("text-anchor"));
    }

    #[test]
    fn render_single_point_chart() {
        let data = [GROWTH_DATA[0]];
        let svg = render_growth_chart(&data, &ChartConfig::default()).into_string();
        assert!(!svg.contains("chart-series"));
        assert!(svg.contains("Month 1"));
    }

    #[test]
    fn tiny_frame_does_not_panic() {
        let config = ChartConfig {
            width: 1,
            height: 1,
        };
        let svg = render_growth_chart(GROWTH_DATA, &config).into_string();
        assert!(svg.contains("<svg"));
    }
}
