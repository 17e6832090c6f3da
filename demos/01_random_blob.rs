/// Generate one random outline and rasterize it into a binary mask.

use {
  random_shapes::{sampler::PointSampler, shape::Shape, raster},
  anyhow::Result,
  rand::SeedableRng,
};

// profile: 14ms, n = 10, 1000x1000
fn main() -> Result<()> {
  let path = "out.png";
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);

  let shape = Shape::random(
    &mut rng,
    &PointSampler { n: 10, ..Default::default() },
    0.2,  // edginess
    0.05  // roundness
  )?;
  let mask = raster::rasterize(&shape, 1000, 1000, raster::DEFAULT_SAMPLES_PER_EDGE)?;

  mask.save(path)?;
  open::that(path)?;
  Ok(())
}
