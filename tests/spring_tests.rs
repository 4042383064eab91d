use approx::assert_relative_eq;
use clothy::{Spring, SpringKind, Vec3};

fn spring(rest: f64, stiffness: f64) -> Spring<f64> {
    Spring::new(SpringKind::Structural, 0, 1, rest, stiffness, 0.0)
}

#[test]
fn corrections_are_antiparallel_and_sum_to_full_correction() {
    let cases = [
        (Vec3::new(0.0, 0.0, 0.0), Vec3::new(3.0, 4.0, 0.0), 1.0, 1.0, 1.0),
        (Vec3::new(1.0, -2.0, 0.5), Vec3::new(0.2, 0.1, -0.3), 1.0, 4.0, 0.8),
        (Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.1, 0.0, 0.0), 0.5, 2.0, 0.3),
    ];
    let rest = 2.0;
    for (a, b, inv_a, inv_b, stiffness) in cases {
        let s = spring(rest, stiffness);
        let (da, db) = s.correction(a, b, inv_a, inv_b).unwrap();

        // Antiparallel: cross product vanishes, dot product non-positive.
        assert_relative_eq!(da.cross(db).length(), 0.0, epsilon = 1e-12);
        assert!(da.dot(db) <= 0.0);

        let d = a.distance(b);
        let full = stiffness * (d - rest).abs();
        assert_relative_eq!(da.length() + db.length(), full, epsilon = 1e-12);

        // Split follows relative inverse mass.
        let w = inv_a + inv_b;
        assert_relative_eq!(da.length(), full * inv_a / w, epsilon = 1e-12);
        assert_relative_eq!(db.length(), full * inv_b / w, epsilon = 1e-12);
    }
}

#[test]
fn full_stiffness_restores_rest_length_in_one_step() {
    let s = spring(1.0, 1.0);
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(0.0, 0.0, 3.0);
    let (da, db) = s.correction(a, b, 1.0, 3.0).unwrap();
    assert_relative_eq!((a + da).distance(b + db), 1.0, epsilon = 1e-12);
}

#[test]
fn at_rest_is_idempotent() {
    let s = spring(0.25, 1.0);
    let a = Vec3::new(0.1, 0.2, 0.3);
    let b = a + Vec3::new(0.0, 0.25, 0.0);
    let (da, db) = s.correction(a, b, 1.0, 1.0).unwrap();
    assert_relative_eq!(da.length(), 0.0, epsilon = 1e-15);
    assert_relative_eq!(db.length(), 0.0, epsilon = 1e-15);
}

#[test]
fn compressed_spring_pushes_apart() {
    let s = spring(1.0, 1.0);
    let (da, db) = s.correction(Vec3::zero(), Vec3::new(0.5, 0.0, 0.0), 1.0, 1.0).unwrap();
    assert!(da.x < 0.0 && db.x > 0.0);
}

#[test]
fn coincident_points_yield_no_correction() {
    let s = spring(1.0, 1.0);
    let p = Vec3::new(0.3, 0.3, 0.3);
    assert!(s.correction(p, p, 1.0, 1.0).is_none());
}
