use {
  crate::geometry::PixelSpace,
  euclid::Point2D,
  image::{GrayImage, Luma},
  itertools::Itertools,
};

/// Even-odd scanline fill of a closed polygon.
///
/// Vertices are rounded to integer pixel coordinates first, matching the
/// original rasterizer. Crossings are tested against pixel centers
/// (`y + 0.5`) with half-open edge intervals, so a vertex shared by two
/// edges is counted once; coordinates at or beyond the canvas edge are
/// clipped by the span loop.
pub(super) fn fill_polygon(image: &mut GrayImage, polygon: &[Point2D<f32, PixelSpace>]) {
  let vertices = polygon.iter()
    .map(|p| p.round())
    .collect::<Vec<_>>();
  let (width, height) = image.dimensions();

  let mut crossings = vec![];
  for y in 0..height {
    let scan_y = y as f32 + 0.5;

    crossings.clear();
    for (a, b) in vertices.iter().circular_tuple_windows() {
      if (a.y <= scan_y) != (b.y <= scan_y) {
        let t = (scan_y - a.y) / (b.y - a.y);
        crossings.push(a.x + t * (b.x - a.x));
      }
    }
    crossings.sort_by(|a: &f32, b| a.total_cmp(b));

    for (x0, x1) in crossings.iter().tuples() {
      // pixels whose center falls in [x0, x1)
      let start = ((x0 - 0.5).ceil().max(0.0)) as u32;
      let end = ((x1 - 0.5).ceil().max(0.0) as u32).min(width);
      for x in start..end {
        image.put_pixel(x, y, Luma([255u8]));
      }
    }
  }
}
