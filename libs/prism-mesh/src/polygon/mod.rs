//! # Polygon
//!
//! Validated 2D boundary used as the extrusion profile.
//!
//! A `Polygon` is an ordered list of at least three finite points, implicitly
//! closed (the last point connects back to the first). Construction checks
//! only the cheap invariants; [`Polygon::validate`] runs the full degenerate
//! edge and self-intersection checks before meshing.

use crate::error::{MeshError, MeshResult};
use crate::predicates::{self, segments_intersect, sign};
use config::constants::MIN_POLYGON_POINTS;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Orientation of a closed boundary in a y-up frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winding {
    /// Positive signed area
    CounterClockwise,
    /// Negative signed area
    Clockwise,
    /// Zero signed area (collinear or cancelling boundary)
    Degenerate,
}

/// A simple closed polygon boundary.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use prism_mesh::polygon::{Polygon, Winding};
///
/// let triangle = Polygon::new(vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(0.0, 1.0),
/// ]).unwrap();
/// assert_eq!(triangle.len(), 3);
/// assert_eq!(triangle.winding(), Winding::CounterClockwise);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DVec2>", into = "Vec<DVec2>")]
pub struct Polygon {
    points: Vec<DVec2>,
}

impl Polygon {
    /// Creates a polygon from boundary points.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidPolygon`] for fewer than three points or
    /// for any non-finite coordinate.
    pub fn new(points: Vec<DVec2>) -> MeshResult<Self> {
        if points.len() < MIN_POLYGON_POINTS {
            return Err(MeshError::invalid_polygon(format!(
                "polygon needs at least {MIN_POLYGON_POINTS} points, got {}",
                points.len()
            )));
        }

        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(MeshError::invalid_polygon(format!(
                "point {index} has a non-finite coordinate: {}",
                points[index]
            )));
        }

        Ok(Self { points })
    }

    /// Creates a polygon from a flat `[x0, y0, x1, y1, ...]` coordinate list.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism_mesh::polygon::Polygon;
    ///
    /// let square = Polygon::from_flat(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(square.len(), 4);
    /// ```
    pub fn from_flat(coords: &[f64]) -> MeshResult<Self> {
        if coords.len() % 2 != 0 {
            return Err(MeshError::invalid_polygon(format!(
                "flat coordinate list has odd length {}",
                coords.len()
            )));
        }

        let points = coords
            .chunks_exact(2)
            .map(|xy| DVec2::new(xy[0], xy[1]))
            .collect();
        Self::new(points)
    }

    /// Creates an axis-aligned rectangle with counter-clockwise winding.
    ///
    /// # Arguments
    ///
    /// * `size` - Width and height
    /// * `center` - If true, center at origin
    pub fn square(size: DVec2, center: bool) -> Self {
        let (x, y) = if center {
            (-size.x / 2.0, -size.y / 2.0)
        } else {
            (0.0, 0.0)
        };

        Self {
            points: vec![
                DVec2::new(x, y),
                DVec2::new(x + size.x, y),
                DVec2::new(x + size.x, y + size.y),
                DVec2::new(x, y + size.y),
            ],
        }
    }

    /// Creates a regular polygon centered at the origin, counter-clockwise,
    /// with its first point at `(radius, 0)`.
    ///
    /// `sides` is clamped to at least 3.
    pub fn regular(radius: f64, sides: u32) -> Self {
        let sides = sides.max(MIN_POLYGON_POINTS as u32);
        let step = std::f64::consts::TAU / sides as f64;

        let points = (0..sides)
            .map(|i| {
                let (sin, cos) = (i as f64 * step).sin_cos();
                DVec2::new(radius * cos, radius * sin)
            })
            .collect();

        Self { points }
    }

    /// Number of boundary points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a constructed polygon has at least three points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Boundary points in order.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Boundary point at `index`.
    #[inline]
    pub fn point(&self, index: usize) -> DVec2 {
        self.points[index]
    }

    /// Signed shoelace area; positive for counter-clockwise boundaries.
    pub fn signed_area(&self) -> f64 {
        predicates::signed_area(&self.points)
    }

    /// Unsigned enclosed area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Orientation of the boundary.
    pub fn winding(&self) -> Winding {
        let area = self.signed_area();
        if area > 0.0 {
            Winding::CounterClockwise
        } else if area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }

    /// Arithmetic mean of the boundary points.
    pub fn centroid(&self) -> DVec2 {
        predicates::centroid(&self.points)
    }

    /// Returns the same boundary traversed in the opposite direction.
    ///
    /// Useful for turning clockwise input into the counter-clockwise form the
    /// triangulator expects. The first point stays first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use prism_mesh::polygon::{Polygon, Winding};
    ///
    /// let cw = Polygon::new(vec![DVec2::ZERO, DVec2::Y, DVec2::ONE, DVec2::X]).unwrap();
    /// assert_eq!(cw.winding(), Winding::Clockwise);
    /// assert_eq!(cw.reversed().winding(), Winding::CounterClockwise);
    /// ```
    pub fn reversed(&self) -> Self {
        let mut points = Vec::with_capacity(self.points.len());
        points.push(self.points[0]);
        points.extend(self.points[1..].iter().rev());
        Self { points }
    }

    /// Iterates over boundary edges as `(index, start, end)`, including the
    /// closing edge from the last point back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (usize, DVec2, DVec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (i, self.points[i], self.points[(i + 1) % n]))
    }

    /// Runs every precondition check needed before meshing.
    ///
    /// Degenerate edges are checked first because zero-length edges make the
    /// intersection test meaningless.
    ///
    /// # Errors
    ///
    /// - [`MeshError::DegenerateGeometry`] for an edge not longer than `tolerance`
    /// - [`MeshError::InvalidPolygon`] for a self-intersecting boundary
    pub fn validate(&self, tolerance: f64) -> MeshResult<()> {
        self.check_edges(tolerance)?;
        self.check_simple()
    }

    /// Rejects zero-length edges, including a closing point that repeats the
    /// first point.
    pub fn check_edges(&self, tolerance: f64) -> MeshResult<()> {
        for (index, start, end) in self.edges() {
            if start.distance(end) <= tolerance {
                return Err(MeshError::degenerate(
                    format!(
                        "zero-length edge between points {index} and {}",
                        (index + 1) % self.len()
                    ),
                    index,
                ));
            }
        }
        Ok(())
    }

    /// Rejects boundaries whose edges cross, touch or fold back on themselves.
    ///
    /// Non-adjacent edges must not share any point. Adjacent edges share their
    /// common vertex and are only rejected when they overlap collinearly
    /// (a spike). Collinear points along a straight run are allowed.
    ///
    /// Cost is O(n²) in the number of points.
    pub fn check_simple(&self) -> MeshResult<()> {
        let n = self.len();
        let p = &self.points;

        for i in 0..n {
            let (a, b, c) = (p[i], p[(i + 1) % n], p[(i + 2) % n]);
            if sign(a, b, c) == 0.0 && (a - b).dot(c - b) > 0.0 {
                return Err(MeshError::invalid_polygon(format!(
                    "boundary folds back on itself at point {}",
                    (i + 1) % n
                )));
            }

            // Skip the two edges adjacent to edge i
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                if segments_intersect(a, b, p[j], p[(j + 1) % n]) {
                    return Err(MeshError::invalid_polygon(format!(
                        "edges {i} and {j} intersect"
                    )));
                }
            }
        }

        Ok(())
    }
}

impl TryFrom<Vec<DVec2>> for Polygon {
    type Error = MeshError;

    fn try_from(points: Vec<DVec2>) -> MeshResult<Self> {
        Self::new(points)
    }
}

impl From<Polygon> for Vec<DVec2> {
    fn from(polygon: Polygon) -> Self {
        polygon.points
    }
}
