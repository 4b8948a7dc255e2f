//! Maps series of values onto integer pixel coordinates of a fixed plot area.
//!
//! The plot origin is top-left: higher values map to smaller `y`. Samples are spread
//! evenly over the plot width regardless of their timestamps.

use crate::charts::bounds::ChartBounds;

pub const PLOT_WIDTH: f64 = 300.0;
pub const PLOT_HEIGHT: f64 = 100.0;
/// Left margin reserved for the axis labels.
pub const PLOT_ORIGIN_X: f64 = 40.0;
pub const PLOT_ORIGIN_Y: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Position and size of the plotting region inside the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            origin_x: PLOT_ORIGIN_X,
            origin_y: PLOT_ORIGIN_Y,
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
        }
    }
}

/// Coordinates of one chart: a center line and a closed min/max band polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub bounds: ChartBounds,
    pub line: Vec<Point>,
    pub band: Vec<Point>,
    /// `y` of the upper and lower bound labels.
    pub upper_label_y: i32,
    pub lower_label_y: i32,
}

impl ChartGeometry {
    /// The center line in SVG `points` attribute form.
    pub fn line_points(&self) -> String {
        svg_points(&self.line)
    }

    /// The band polygon in SVG `points` attribute form.
    pub fn band_points(&self) -> String {
        svg_points(&self.band)
    }
}

/// Formats points as `"x1,y1 x2,y2 ..."`.
pub fn svg_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Linear mapping from (sample index, value) to pixel coordinates.
#[derive(Debug, Clone, Copy)]
pub struct ChartMapper {
    area: PlotArea,
    bounds: ChartBounds,
    x_step: f64,
    y_scale: f64,
}

impl ChartMapper {
    /// Creates a mapper for `sample_count` evenly spaced samples.
    ///
    /// With a single sample the spacing degenerates to the full plot width.
    pub fn new(area: PlotArea, bounds: ChartBounds, sample_count: usize) -> Self {
        let intervals = sample_count.saturating_sub(1).max(1);
        Self {
            area,
            bounds,
            x_step: area.width / intervals as f64,
            y_scale: area.height / bounds.span(),
        }
    }

    pub fn x(&self, index: usize) -> i32 {
        (self.area.origin_x + index as f64 * self.x_step).round() as i32
    }

    pub fn y(&self, value: f64) -> i32 {
        (self.area.origin_y + (f64::from(self.bounds.upper) - value) * self.y_scale).round() as i32
    }

    pub fn point(&self, index: usize, value: f64) -> Point {
        Point {
            x: self.x(index),
            y: self.y(value),
        }
    }

    /// One point per value, left to right.
    pub fn line(&self, values: &[f64]) -> Vec<Point> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| self.point(i, *v))
            .collect()
    }

    /// A closed polygon: maxima left to right, then minima right to left.
    pub fn band(&self, maxima: &[f64], minima: &[f64]) -> Vec<Point> {
        let forward = maxima.iter().enumerate().map(|(i, v)| self.point(i, *v));
        let backward = minima
            .iter()
            .enumerate()
            .rev()
            .map(|(i, v)| self.point(i, *v));
        forward.chain(backward).collect()
    }

    pub fn geometry(&self, line: &[f64], maxima: &[f64], minima: &[f64]) -> ChartGeometry {
        ChartGeometry {
            bounds: self.bounds,
            line: self.line(line),
            band: self.band(maxima, minima),
            upper_label_y: self.y(f64::from(self.bounds.upper)),
            lower_label_y: self.y(f64::from(self.bounds.lower)),
        }
    }
}
