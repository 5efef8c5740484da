#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{LinearScale, Point};

/// Pixel position of one plottable point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Index into the source slice.
    pub index: usize,
    pub cx: f64,
    pub cy: f64,
}

/// Projects every plottable point into pixel space, preserving input order.
///
/// Points with non-finite coordinates are skipped.
#[must_use]
pub fn project_points(
    points: &[Point],
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> Vec<ProjectedPoint> {
    #[cfg(feature = "parallel-projection")]
    {
        points
            .par_iter()
            .enumerate()
            .filter_map(|(index, point)| project_single_point(index, point, x_scale, y_scale))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points
            .iter()
            .enumerate()
            .filter_map(|(index, point)| project_single_point(index, point, x_scale, y_scale))
            .collect()
    }
}

fn project_single_point(
    index: usize,
    point: &Point,
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> Option<ProjectedPoint> {
    if !point.is_plottable() {
        return None;
    }
    let cx = x_scale.map(point.x_value);
    let cy = y_scale.map(point.y_value);
    (cx.is_finite() && cy.is_finite()).then_some(ProjectedPoint { index, cx, cy })
}
