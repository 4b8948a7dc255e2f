use ordered_float::OrderedFloat;

/// Integer value range of a chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartBounds {
    pub lower: i32,
    pub upper: i32,
}

impl ChartBounds {
    pub fn new(lower: i32, upper: i32) -> Self {
        Self { lower, upper }
    }

    /// Bounds from `floor(min)` to `ceil(max)` of a value range.
    pub fn enclosing(min: f64, max: f64) -> Self {
        Self {
            lower: min.floor() as i32,
            upper: max.ceil() as i32,
        }
    }

    /// Bounds enclosing the lowest of `minima` and the highest of `maxima`.
    ///
    /// Returns `None` when either input is empty.
    pub fn from_extremes<L, U>(minima: L, maxima: U) -> Option<Self>
    where
        L: IntoIterator<Item = f64>,
        U: IntoIterator<Item = f64>,
    {
        let min = minima.into_iter().map(OrderedFloat).min()?.into_inner();
        let max = maxima.into_iter().map(OrderedFloat).max()?.into_inner();
        Some(Self::enclosing(min, max))
    }

    /// Width of the range. A degenerate range counts as 1 so it can always be divided by.
    pub fn span(&self) -> f64 {
        if self.upper > self.lower {
            f64::from(self.upper - self.lower)
        } else {
            1.0
        }
    }
}
