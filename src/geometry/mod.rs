//! Coordinate spaces, point ordering and conversions.
//!
//! World space is where outlines are sampled and assembled; pixel space is
//! the canvas of the rasterizer. Both are phantom units on [`euclid`] types.

use {
  crate::error::{Error, Result},
  euclid::{Point2D, Size2D, Vector2D as V2},
  itertools::Itertools,
  num_traits::NumCast,
};

pub mod bezier;
pub use bezier::CubicBezier;
#[cfg(test)] mod tests;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// Normalized coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct WorldSpace;

pub type Point = Point2D<f32, WorldSpace>;

/// Mean of a point set. The origin for an empty set.
pub fn centroid(points: &[Point]) -> Point {
  let sum = points.iter()
    .fold(V2::zero(), |acc, p| acc + p.to_vector());
  (sum / points.len().max(1) as f32).to_point()
}

/// Sort points counter-clockwise around their centroid.
///
/// The polar angle is taken as `atan2(offset.x, offset.y)`, the swapped
/// argument order of the original generator. The resulting cyclic order is
/// rotated relative to the textbook convention but consistent across the
/// whole pipeline, so it is kept. The sort is stable: equal angles keep
/// input order.
pub fn ccw_sort(points: &[Point]) -> Vec<Point> {
  let c = centroid(points);
  let mut sorted = points.to_vec();
  sorted.sort_by(|a, b| {
    let [a, b] = [a, b].map(|p| {
      let d = *p - c;
      d.x.atan2(d.y)
    });
    a.total_cmp(&b)
  });
  sorted
}

/// Flatten a point list into `[x0, y0, x1, y1, …]`.
pub fn points_to_flat(points: &[Point]) -> Vec<f32> {
  points.iter()
    .flat_map(|p| [p.x, p.y])
    .collect()
}

/// Inverse of [`points_to_flat`]. Odd-length input is rejected.
pub fn points_from_flat(flat: &[f32]) -> Result<Vec<Point>> {
  if flat.len() % 2 != 0 {
    return Err(Error::InvalidParameter {
      reason: "flat point array must have even length"
    });
  }
  Ok(flat.iter().cloned()
    .tuples()
    .map(|(x, y)| Point::new(x, y))
    .collect())
}

/// Map a point of the unit square onto a canvas of the given resolution.
pub fn to_pixel_space<T: NumCast + Copy>(
  point: Point2D<T, WorldSpace>,
  resolution: Size2D<u32, PixelSpace>
) -> Point2D<f32, PixelSpace> {
  point.to_f32().to_vector()
    .component_mul(resolution.to_f32().to_vector().cast_unit())
    .cast_unit()
    .to_point()
}
