//! Directional light with ambient, diffuse and specular terms, seen by an
//! orthographic viewer straight above the terrain.
//!
//! Neither term is clamped. A surface facing away from the light gets a
//! negative diffuse term, and the specular term uses an odd exponent, so it
//! keeps the sign of `R·V`. Display clamping is left to the caller.

use crate::hillshading::parameters::Uniforms;
use crate::trig::{deg_to_rad, normalize_degrees};
use glam::Vec3;

pub const VIEW_DIRECTION: Vec3 = Vec3::Z;

/// Unit vector pointing towards the light.
pub fn light_direction(azimuth: f32, elevation_angle: f32) -> Vec3 {
    let theta = deg_to_rad(normalize_degrees(azimuth));
    let phi = deg_to_rad(elevation_angle);

    Vec3::new(phi.cos() * theta.cos(), phi.cos() * theta.sin(), phi.sin())
        .try_normalize()
        .unwrap_or(Vec3::Z)
}

/// The reflectance of a surface with the given unit normal. Accepts either a
/// [`ParameterSet`](crate::hillshading::parameters::ParameterSet) or its
/// uniform snapshot.
#[inline]
pub fn compute_intensity(normal: Vec3, parameters: impl Into<Uniforms>) -> f32 {
    let uniforms = parameters.into();
    let light = light_direction(uniforms.azimuth, uniforms.elevation_angle);
    intensity_for_light(normal, light, &uniforms)
}

/// Same as [`compute_intensity`], for callers that already derived the light
/// direction for the whole pass.
#[inline]
pub fn intensity_for_light(normal: Vec3, light: Vec3, uniforms: &Uniforms) -> f32 {
    let diffuse = normal.dot(light);
    let reflection = 2.0 * diffuse * normal - light;
    let specular = reflection.dot(VIEW_DIRECTION).powi(3);

    uniforms.ambient + uniforms.diffuse * diffuse + uniforms.specular * specular
}
