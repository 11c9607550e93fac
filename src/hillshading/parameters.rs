use bytemuck::{Pod, Zeroable};

/// The controls of the light model and the normal estimation.
///
/// Every finite value is accepted. Angles are in degrees; the azimuth is
/// taken modulo 360.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    pub exaggeration: f32,
    pub azimuth: f32,
    pub elevation_angle: f32,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            ambient: 0.2,
            diffuse: 0.0,
            specular: 1.0,
            exaggeration: 5.0,
            azimuth: 0.0,
            elevation_angle: 45.0,
        }
    }
}

impl ParameterSet {
    pub fn new(
        ambient: f32,
        diffuse: f32,
        specular: f32,
        exaggeration: f32,
        azimuth: f32,
        elevation_angle: f32,
    ) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            exaggeration,
            azimuth,
            elevation_angle,
        }
    }

    pub fn to_uniforms(&self) -> Uniforms {
        Uniforms {
            exaggeration: self.exaggeration,
            azimuth: self.azimuth,
            elevation_angle: self.elevation_angle,
            ambient: self.ambient,
            diffuse: self.diffuse,
            specular: self.specular,
        }
    }
}

/// The parameter snapshot as the per-pixel kernel sees it. Field order and
/// layout match the uniform buffer a GPU pass is fed: six `f32`, 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    pub exaggeration: f32,
    pub azimuth: f32,
    pub elevation_angle: f32,
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
}

pub const UNIFORMS_SIZE: usize = std::mem::size_of::<Uniforms>();

impl Uniforms {
    pub fn to_parameters(&self) -> ParameterSet {
        ParameterSet {
            ambient: self.ambient,
            diffuse: self.diffuse,
            specular: self.specular,
            exaggeration: self.exaggeration,
            azimuth: self.azimuth,
            elevation_angle: self.elevation_angle,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reads a uniform block from raw bytes. Returns `None` if the slice is
    /// not exactly [`UNIFORMS_SIZE`] bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Option<Uniforms> {
        if bytes.len() != UNIFORMS_SIZE {
            return None;
        }
        Some(bytemuck::pod_read_unaligned(bytes))
    }
}

impl From<ParameterSet> for Uniforms {
    fn from(parameters: ParameterSet) -> Self {
        parameters.to_uniforms()
    }
}
