use {
  super::*,
  crate::error::Error,
  anyhow::Result,
};

fn square() -> Vec<Point> {
  vec![
    Point::new(0.0, 0.0),
    Point::new(1.0, 0.0),
    Point::new(1.0, 1.0),
    Point::new(0.0, 1.0),
  ]
}

#[test] fn centroid_of_square() {
  assert_eq!(centroid(&square()), Point::new(0.5, 0.5));
}

#[test] fn ccw_sort_is_permutation() {
  let points = square();
  let sorted = ccw_sort(&points);
  assert_eq!(sorted.len(), points.len());
  for p in &points {
    assert!(sorted.contains(p));
  }
}

#[test] fn ccw_sort_idempotent_up_to_rotation() {
  let sorted = ccw_sort(&square());
  let again = ccw_sort(&sorted);
  // same cyclic order: find the rotation, then compare element-wise
  let offset = sorted.iter()
    .position(|p| *p == again[0])
    .unwrap();
  for (i, p) in again.iter().enumerate() {
    assert_eq!(*p, sorted[(offset + i) % sorted.len()]);
  }
}

#[test] fn ccw_sort_tie_stability() {
  // both points sit at the same polar angle from the centroid of the
  // set; the stable sort must keep their input order
  let points = vec![
    Point::new(2.0, 0.0),
    Point::new(3.0, 0.0),
    Point::new(-2.0, 1.0),
    Point::new(-3.0, -1.0),
  ];
  let sorted = ccw_sort(&points);
  let near = sorted.iter().position(|p| p.x == 2.0).unwrap();
  let far = sorted.iter().position(|p| p.x == 3.0).unwrap();
  assert!(near < far);
}

#[test] fn flat_round_trip() -> Result<()> {
  let points = square();
  let flat = points_to_flat(&points);
  assert_eq!(flat, vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
  assert_eq!(points_from_flat(&flat)?, points);
  Ok(())
}

#[test] fn flat_odd_length_rejected() {
  assert!(matches!(
    points_from_flat(&[1.0, 2.0, 3.0]),
    Err(Error::InvalidParameter { .. })));
}

#[test] fn bezier_endpoints() {
  let curve = CubicBezier::new(
    Point::new(0.0, 0.0),
    Point::new(0.0, 1.0),
    Point::new(1.0, 1.0),
    Point::new(1.0, 0.0),
  );
  assert_eq!(curve.eval(0.0), curve.start());
  assert_eq!(curve.eval(1.0), curve.end());
}

#[test] fn bezier_degenerate_chord() {
  // control points on the chord collapse the curve onto the line from p0 to p3
  let curve = CubicBezier::new(
    Point::new(0.0, 0.0),
    Point::new(0.0, 0.0),
    Point::new(2.0, 2.0),
    Point::new(2.0, 2.0),
  );
  let mid = curve.eval(0.5);
  assert!((mid.x - mid.y).abs() < 1e-6);
}

#[test] fn bezier_sample_includes_endpoints() {
  let curve = CubicBezier::new(
    Point::new(0.0, 0.0),
    Point::new(0.5, 1.0),
    Point::new(1.5, -1.0),
    Point::new(2.0, 0.0),
  );
  let samples = curve.sample(17).collect::<Vec<_>>();
  assert_eq!(samples.len(), 17);
  assert_eq!(samples[0], curve.start());
  assert_eq!(*samples.last().unwrap(), curve.end());
}

#[test] fn bezier_samples_within_control_hull() {
  let curve = CubicBezier::new(
    Point::new(0.0, 0.0),
    Point::new(0.5, 2.0),
    Point::new(1.5, -2.0),
    Point::new(2.0, 0.0),
  );
  let hull = curve.bounding_box().inflate(1e-5, 1e-5);
  assert!(curve.sample(100).all(|p| hull.contains(p)));
}
