#![allow(dead_code)]

use frac_ngin::{FractalConfig, SagMode};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A rigid fractal with no spin: every frame is a pure function of the root
/// transform, which makes closed-form assertions easy.
pub fn rigid_config(depth: u32) -> FractalConfig {
    FractalConfig {
        depth,
        spin_rate: 0.0,
        sag: SagMode::Rigid,
        seed: 0,
    }
}

pub fn assert_vec3_near(actual: cgmath::Vector3<f32>, expected: cgmath::Vector3<f32>, eps: f32) {
    for (a, e) in [
        (actual.x, expected.x),
        (actual.y, expected.y),
        (actual.z, expected.z),
    ] {
        assert!(
            (a - e).abs() <= eps,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }
}

/// Translation column of a packed column-major model matrix.
pub fn translation_of(model: &[[f32; 4]; 4]) -> cgmath::Vector3<f32> {
    cgmath::Vector3::new(model[3][0], model[3][1], model[3][2])
}
