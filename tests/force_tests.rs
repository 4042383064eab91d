use clothy::{Cloth, ClothConfig, IntegrationMode, NoOpStepObserver, SphereDirection};

fn kinetic_energy(cloth: &Cloth<f32>) -> f32 {
    cloth
        .points()
        .iter()
        .map(|p| 0.5 * p.mass * p.velocity.length_sq())
        .sum()
}

#[test]
fn default_force_cloth_settles() {
    let config = ClothConfig::<f32>::new()
        .with_mode(IntegrationMode::ForceEuler)
        .with_collision(false);
    assert_eq!(config.resolution, 32);
    let mut cloth = Cloth::new(config).unwrap();

    let mut early_peak = 0.0f32;
    let mut late_peak = 0.0f32;
    let mut late_strain = 0.0f32;
    for frame in 0..900 {
        cloth.step(0.016, SphereDirection::Stationary, &mut NoOpStepObserver);
        let ke = kinetic_energy(&cloth);
        assert!(ke.is_finite(), "energy blew up at frame {}", frame);
        if frame < 300 {
            early_peak = early_peak.max(ke);
        } else if frame >= 600 {
            late_peak = late_peak.max(ke);
            late_strain = late_strain.max(cloth.max_strain());
        }
    }

    assert!(early_peak > 1.0, "cloth should fall from rest, peak {}", early_peak);
    assert!(
        late_peak < early_peak / 50.0,
        "kinetic energy should decay: early {} late {}",
        early_peak,
        late_peak
    );
    // Rest length is 1/32; the corners carry the whole sheet.
    assert!(late_strain < 0.3, "springs overstretched: {}", late_strain);
    assert!(cloth.positions().iter().all(|p| p.length() < 2.0));
}

#[test]
fn heavier_points_sag_further() {
    let sag = |mass: f32| {
        let config = ClothConfig::<f32>::new()
            .with_resolution(8)
            .with_mode(IntegrationMode::ForceEuler)
            .with_collision(false)
            .with_point_mass(mass);
        let mut cloth = Cloth::new(config).unwrap();
        for _ in 0..600 {
            cloth.step(0.016, SphereDirection::Stationary, &mut NoOpStepObserver);
        }
        assert!(kinetic_energy(&cloth) < 0.05 * mass);
        cloth.max_strain()
    };
    let light = sag(0.5);
    let heavy = sag(2.0);
    assert!(heavy > light, "strain {} (m=2) should exceed {} (m=0.5)", heavy, light);
}
