//! Conversion of a closed outline into a binary mask.

use {
  crate::{
    error::{Error, Result},
    geometry::{to_pixel_space, PixelSpace, Point},
    shape::Shape
  },
  euclid::{Point2D, Size2D, Vector2D as V2},
  image::GrayImage,
};

mod fill;

pub const DEFAULT_SAMPLES_PER_EDGE: usize = 100;

/// Rasterize `shape` into a zeroed `height × width` mask, writing 255
/// over the outline's interior.
///
/// Every segment is evaluated at `samples_per_edge` uniform parameters;
/// the combined cloud is shifted to the origin and each axis is stretched
/// independently to span the full canvas (aspect ratio is *not*
/// preserved, matching the original rasterizer), then the rounded polygon
/// is filled with even-odd scanlines.
pub fn rasterize(shape: &Shape, width: u32, height: u32, samples_per_edge: usize) -> Result<GrayImage> {
  if width == 0 || height == 0 {
    return Err(Error::InvalidParameter { reason: "image dimensions must be positive" });
  }
  if samples_per_edge < 2 {
    return Err(Error::InvalidParameter { reason: "samples_per_edge must be at least 2" });
  }

  let cloud = sample_cloud(shape, samples_per_edge);
  let polygon = normalize(cloud, Size2D::new(width, height))?;

  let mut image = GrayImage::new(width, height);
  fill::fill_polygon(&mut image, &polygon);
  Ok(image)
}

/// All segment samples, in segment order, as one flat cloud of size
/// `num_segments × samples_per_edge`.
fn sample_cloud(shape: &Shape, samples_per_edge: usize) -> Vec<Point> {
  shape.segments().iter()
    .flat_map(|segment| segment.sample(samples_per_edge))
    .collect()
}

fn normalize(
  cloud: Vec<Point>,
  resolution: Size2D<u32, PixelSpace>
) -> Result<Vec<Point2D<f32, PixelSpace>>> {
  let min = cloud.iter()
    .fold(V2::splat(f32::MAX), |acc, p| acc.min(p.to_vector()));
  let max = cloud.iter()
    .fold(V2::splat(f32::MIN), |acc, p| acc.max(p.to_vector()));
  let extent = max - min;
  if !(extent.x > 0.0 && extent.x.is_finite()) {
    return Err(Error::DegenerateShape { axis: 'x' });
  }
  if !(extent.y > 0.0 && extent.y.is_finite()) {
    return Err(Error::DegenerateShape { axis: 'y' });
  }
  Ok(cloud.into_iter()
    .map(|p| to_pixel_space(
      (p.to_vector() - min).component_div(extent).to_point(),
      resolution))
    .collect())
}
