pub mod batch;
pub mod frame;
pub mod kernel;
pub mod light_model;
pub mod normals;
pub mod parameters;

pub use batch::{render_shaded_image, render_shaded_image_into, render_shaded_image_parallel};
pub use frame::{FrameRenderer, SharedParameters};
pub use light_model::compute_intensity;
pub use normals::compute_normal;
pub use parameters::{ParameterSet, Uniforms};
