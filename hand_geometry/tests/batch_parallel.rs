use hand_geometry::batch::{batch_distances, batch_distances_into, par_batch_distances};
use hand_geometry::geometry::{GeometryError, Point3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn cloud(n: usize, seed: u64) -> Vec<Point3> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point3::new(rng.gen(), rng.gen(), rng.gen()))
        .collect()
}

#[test]
fn three_four_five_pairs() {
    let a = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)];
    let b = vec![Point3::new(3.0, 4.0, 0.0), Point3::new(1.0, 1.0, 1.0)];
    assert_eq!(batch_distances(&a, &b).unwrap(), vec![5.0, 0.0]);
}

#[test]
fn parallel_matches_sequential_bitwise() {
    let a = cloud(10_000, 7);
    let b = cloud(10_000, 8);
    let seq = batch_distances(&a, &b).unwrap();
    let par = par_batch_distances(&a, &b).unwrap();
    let mut buf = vec![0.0; a.len()];
    batch_distances_into(&a, &b, &mut buf).unwrap();
    assert_eq!(seq.len(), par.len());
    for ((s, p), o) in seq.iter().zip(&par).zip(&buf) {
        assert_eq!(s.to_bits(), p.to_bits());
        assert_eq!(s.to_bits(), o.to_bits());
    }
}

#[test]
fn mismatch_rejected_before_work() {
    let a = cloud(3, 1);
    let b = cloud(4, 2);
    let mut out = vec![-1.0; 3];
    assert_eq!(
        batch_distances_into(&a, &b, &mut out),
        Err(GeometryError::LengthMismatch { left: 3, right: 4 })
    );
    assert!(out.iter().all(|&d| d == -1.0));
}
