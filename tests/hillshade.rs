use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use relief::height_field::HeightField;
use relief::hillshading::normals::gradient;
use relief::hillshading::{
    compute_intensity, compute_normal, render_shaded_image, render_shaded_image_parallel,
    FrameRenderer, ParameterSet, SharedParameters,
};
use relief::testing::{assert_eq_approx, flat_field};
use std::sync::Arc;

fn random_field(width: usize, height: usize, seed: u64) -> HeightField {
    let mut rng = StdRng::seed_from_u64(seed);
    let samples = (0..width * height).map(|_| rng.random::<f32>()).collect();
    HeightField::new(width, height, samples).unwrap()
}

#[test]
fn flat_terrain_under_the_default_light() {
    let field = flat_field(16, 12, 0.6);
    let parameters = ParameterSet::default();

    // N = (0, 0, 1), L = (cos 45°, 0, sin 45°), d = sin 45°
    // R = 2d·N - L = (-cos 45°, 0, sin 45°), R·V = sin 45°
    let s = 45f32.to_radians().sin();
    let expected = 0.2 + 0.0 * s + 1.0 * s.powi(3);

    for row in 1..11 {
        for col in 1..15 {
            let normal = compute_normal(&field, parameters.exaggeration, row, col);
            assert_eq!(normal.to_array(), [0.0, 0.0, 1.0]);
            let intensity = compute_intensity(normal, parameters);
            assert_eq_approx(intensity, expected, 1e-4);
            assert_eq_approx(intensity, 0.5536, 1e-4);
        }
    }

    let bitmap = render_shaded_image(&field, &parameters);
    assert_eq!(bitmap.get_pixel(7, 5), [141, 141, 141, 255]);
}

#[test]
fn random_terrain_normals_are_unit_length() {
    let field = random_field(50, 40, 42);
    for exaggeration in [0.5, 1.0, 5.0, 20.0] {
        for row in 1..39 {
            for col in 1..49 {
                let normal = compute_normal(&field, exaggeration, row, col);
                assert_eq_approx(normal.length(), 1.0, 1e-6);
            }
        }
    }
}

#[test]
fn border_of_the_output_stays_untouched() {
    let field = random_field(33, 17, 7);
    let parameters = ParameterSet::new(0.9, 0.9, 0.9, 10.0, 77.0, 12.0);
    let bitmap = render_shaded_image(&field, &parameters);

    for x in 0..33 {
        assert_eq!(bitmap.get_pixel(x, 0), [0, 0, 0, 0]);
        assert_eq!(bitmap.get_pixel(x, 16), [0, 0, 0, 0]);
    }
    for y in 0..17 {
        assert_eq!(bitmap.get_pixel(0, y), [0, 0, 0, 0]);
        assert_eq!(bitmap.get_pixel(32, y), [0, 0, 0, 0]);
    }
    for y in 1..16 {
        for x in 1..32 {
            let [r, g, b, a] = bitmap.get_pixel(x, y);
            assert_eq!((r, a), (g, 255));
            assert_eq!(g, b);
        }
    }
}

#[test]
fn all_strategies_agree() {
    let field = Arc::new(random_field(64, 64, 1234));
    let parameters = ParameterSet::new(0.15, 0.55, 0.3, 6.0, 300.0, 40.0);

    let sequential = render_shaded_image(&field, &parameters);
    let parallel = render_shaded_image_parallel(&field, &parameters);

    let shared = SharedParameters::new(parameters);
    let mut renderer = FrameRenderer::new(field.clone());
    let frame = renderer.render_frame_from(&shared).clone();

    assert_eq!(sequential, parallel);
    assert_eq!(sequential, frame);
}

#[test]
fn rendering_is_deterministic() {
    let field = random_field(40, 25, 99);
    let parameters = ParameterSet::new(0.3, 0.4, 0.6, 3.0, 10.0, 55.0);
    let first = render_shaded_image(&field, &parameters);
    let second = render_shaded_image(&field, &parameters);
    assert_eq!(first.data(), second.data());
}

proptest! {
    #[test]
    fn doubling_exaggeration_steepens_the_gradient(
        seed in any::<u64>(),
        exaggeration in 0.1f32..50.0,
        row in 1usize..9,
        col in 1usize..9,
    ) {
        let field = random_field(10, 10, seed);
        let (dx1, dy1) = gradient(&field, exaggeration, row, col);
        let (dx2, dy2) = gradient(&field, 2.0 * exaggeration, row, col);
        prop_assume!(dx1 != 0.0 || dy1 != 0.0);
        prop_assert!(dx2.hypot(dy2) > dx1.hypot(dy1));
    }

    #[test]
    fn full_turn_of_azimuth_renders_the_same_image(
        seed in any::<u64>(),
        azimuth in -720i32..720,
        elevation_angle in 0.0f32..90.0,
    ) {
        let field = random_field(12, 12, seed);
        let base = ParameterSet::new(0.2, 0.6, 0.4, 4.0, azimuth as f32, elevation_angle);
        let turned = ParameterSet { azimuth: azimuth as f32 + 360.0, ..base };
        prop_assert_eq!(
            render_shaded_image(&field, &base),
            render_shaded_image(&field, &turned)
        );
    }

    #[test]
    fn any_parameters_are_accepted(
        ambient in -10.0f32..10.0,
        diffuse in -10.0f32..10.0,
        specular in -10.0f32..10.0,
        exaggeration in -100.0f32..100.0,
        azimuth in -1e4f32..1e4,
        elevation_angle in -180.0f32..180.0,
    ) {
        let field = random_field(6, 6, 3);
        let parameters =
            ParameterSet::new(ambient, diffuse, specular, exaggeration, azimuth, elevation_angle);
        let bitmap = render_shaded_image(&field, &parameters);
        prop_assert_eq!(bitmap.get_pixel(2, 2)[3], 255);
    }
}
