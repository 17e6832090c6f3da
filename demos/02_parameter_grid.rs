/// A gallery of the parameter space: for each point count, a grid of
/// masks over (roundness, edginess). Cells are generated in parallel;
/// each cell owns its seeded generator.

use {
  random_shapes::{sampler::PointSampler, shape::Shape, raster},
  anyhow::Result,
  image::GrayImage,
  rand::SeedableRng,
  rayon::prelude::*,
};

const N_VALS: [usize; 4] = [3, 4, 7, 20];
const R_VALS: [f32; 5] = [0.05, 0.1, 0.2, 0.5, 0.8];
const EDGY_VALS: [f32; 7] = [0.0, 0.1, 0.2, 0.5, 1.0, 5.0, 10.0];
const CELL: u32 = 100;
const MARGIN: u32 = 5;

// profile: 210ms, 140 cells
fn main() -> Result<()> {
  let path = "grid.png";

  let cells = N_VALS.iter().enumerate()
    .flat_map(|(k, &n)| R_VALS.iter().enumerate()
      .flat_map(move |(i, &roundness)| EDGY_VALS.iter().enumerate()
        .map(move |(j, &edginess)| (k, i, j, n, roundness, edginess))))
    .collect::<Vec<_>>()
    .into_par_iter()
    .map(|(k, i, j, n, roundness, edginess)| {
      let seed = (k * R_VALS.len() * EDGY_VALS.len() + i * EDGY_VALS.len() + j) as u64;
      let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);
      let shape = Shape::random(
        &mut rng,
        &PointSampler { n, ..Default::default() },
        edginess, roundness)?;
      let mask = raster::rasterize(&shape, CELL - 2 * MARGIN, CELL - 2 * MARGIN, 20)?;
      Ok((k, i, j, mask))
    })
    .collect::<Result<Vec<_>>>()?;

  let mut montage = GrayImage::new(
    N_VALS.len() as u32 * EDGY_VALS.len() as u32 * CELL,
    R_VALS.len() as u32 * CELL);
  for (k, i, j, mask) in cells {
    let x0 = (k * EDGY_VALS.len() + j) as u32 * CELL + MARGIN;
    let y0 = i as u32 * CELL + MARGIN;
    for (x, y, pixel) in mask.enumerate_pixels() {
      montage.put_pixel(x0 + x, y0 + y, *pixel);
    }
  }

  montage.save(path)?;
  open::that(path)?;
  Ok(())
}
