//! Vertex index layout of a prism.

use serde::{Deserialize, Serialize};

/// Maps boundary positions onto prism vertex indices.
///
/// For a polygon with `n` points the vertex buffer is laid out as:
///
/// ```text
/// [0, n)      bottom boundary, polygon order
/// [n, 2n)     top boundary, same order
/// 2n          bottom centroid
/// 2n + 1      top centroid
/// ```
///
/// Indices are `u32` to match GPU index buffers; callers keep `n` within
/// [`config::constants::MAX_POLYGON_POINTS`].
///
/// # Example
///
/// ```rust
/// use prism_mesh::mesh::PrismLayout;
///
/// let layout = PrismLayout::new(4);
/// assert_eq!(layout.top(1), 5);
/// assert_eq!(layout.bottom_centroid(), 8);
/// assert_eq!(layout.vertex_count(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrismLayout {
    point_count: usize,
}

impl PrismLayout {
    /// Creates the layout for a polygon with `point_count` boundary points.
    pub fn new(point_count: usize) -> Self {
        Self { point_count }
    }

    /// Number of boundary points per layer.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Total number of vertices, centroids included.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        2 * self.point_count + 2
    }

    /// Bottom-layer vertex for boundary point `i`.
    #[inline]
    pub fn bottom(&self, i: usize) -> u32 {
        i as u32
    }

    /// Top-layer vertex for boundary point `i`.
    #[inline]
    pub fn top(&self, i: usize) -> u32 {
        (i + self.point_count) as u32
    }

    /// Bottom centroid vertex.
    #[inline]
    pub fn bottom_centroid(&self) -> u32 {
        (2 * self.point_count) as u32
    }

    /// Top centroid vertex.
    #[inline]
    pub fn top_centroid(&self) -> u32 {
        (2 * self.point_count + 1) as u32
    }

    /// Resolves a layer-local cap index (where `n` means the centroid) on
    /// the bottom layer.
    pub fn bottom_cap(&self, local: usize) -> u32 {
        if local == self.point_count {
            self.bottom_centroid()
        } else {
            self.bottom(local)
        }
    }

    /// Resolves a layer-local cap index on the top layer.
    pub fn top_cap(&self, local: usize) -> u32 {
        if local == self.point_count {
            self.top_centroid()
        } else {
            self.top(local)
        }
    }

    /// Number of side-wall triangles: two per boundary edge.
    #[inline]
    pub fn side_triangle_count(&self) -> usize {
        2 * self.point_count
    }

    /// Index of the boundary point following `i`, wrapping to 0.
    #[inline]
    pub fn next(&self, i: usize) -> usize {
        (i + 1) % self.point_count
    }
}
