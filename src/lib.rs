//! Procedural generator of random smooth closed 2-D outlines.
//!
//! The pipeline: sample `n` points in a square ([`sampler::PointSampler`]),
//! order them counter-clockwise around their centroid
//! ([`geometry::ccw_sort`]), estimate a tangent angle at every point
//! ([`shape::estimate_angles`]), connect consecutive points with cubic
//! Bezier segments ([`shape::Shape`]), and rasterize the closed outline
//! into a binary mask ([`raster::rasterize`]).
//!
//! Two parameters steer the look of an outline: `edginess` (how sharply
//! tangents follow the raw point-to-point edges) and `roundness` (how far
//! the Bezier control points are pulled out along the tangents).
//!
//! All randomness flows through an explicit [`rand::Rng`] handle, so a
//! fixed seed reproduces a shape exactly, and independent generators may
//! run on independent threads without coordination.
//!
//! # Basic usage
//! ```
//! use {
//!   random_shapes::{sampler::PointSampler, shape::Shape, raster},
//!   rand::SeedableRng
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! let shape = Shape::random(
//!   &mut rng,
//!   &PointSampler { n: 10, ..Default::default() },
//!   0.2,  // edginess
//!   0.05  // roundness
//! )?;
//! let mask = raster::rasterize(&shape, 1000, 1000, raster::DEFAULT_SAMPLES_PER_EDGE)?;
//! assert_eq!(mask.dimensions(), (1000, 1000));
//! assert!(mask.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod geometry;
pub mod sampler;
pub mod shape;
pub mod raster;
