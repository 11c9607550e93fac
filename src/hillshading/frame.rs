//! Continuous re-rendering, one full recomputation per display frame.
//!
//! Every frame is computed from a uniform snapshot taken when the frame
//! starts, so a controller may change the parameters at any moment without
//! coordinating with the renderer.

use crate::height_field::HeightField;
use crate::hillshading::batch::shade_rows_parallel;
use crate::hillshading::parameters::{ParameterSet, Uniforms};
use crate::rgba_bitmap::RgbaBitmap;
use std::sync::{Arc, PoisonError, RwLock};

/// A parameter set shared between a controller that writes it and the
/// renderers that read it.
#[derive(Debug, Clone, Default)]
pub struct SharedParameters {
    inner: Arc<RwLock<ParameterSet>>,
}

impl SharedParameters {
    pub fn new(parameters: ParameterSet) -> Self {
        Self {
            inner: Arc::new(RwLock::new(parameters)),
        }
    }

    /// A consistent copy of the current parameters.
    pub fn snapshot(&self) -> ParameterSet {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, parameters: ParameterSet) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = parameters;
    }

    /// Changes the parameters in place, e.g. when a single slider moves.
    pub fn update<F>(&self, change: F)
    where
        F: FnOnce(&mut ParameterSet),
    {
        let mut parameters = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        change(&mut *parameters);
    }
}

/// Re-shades a height field every frame into a reused target bitmap.
#[derive(Debug)]
pub struct FrameRenderer {
    field: Arc<HeightField>,
    target: RgbaBitmap,
    frame_count: u64,
}

impl FrameRenderer {
    pub fn new(field: Arc<HeightField>) -> Self {
        let target = RgbaBitmap::new(field.width, field.height);
        Self {
            field,
            target,
            frame_count: 0,
        }
    }

    /// Number of frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Recomputes every interior pixel from the given uniforms.
    pub fn render_frame(&mut self, uniforms: &Uniforms) -> &RgbaBitmap {
        shade_rows_parallel(&self.field, uniforms, &mut self.target);
        self.frame_count += 1;
        tracing::trace!("Rendered frame {}", self.frame_count);
        &self.target
    }

    /// Renders a frame from raw uniform bytes, as uploaded to a GPU uniform
    /// buffer. Returns `None` if the block has the wrong size.
    pub fn render_frame_from_bytes(&mut self, bytes: &[u8]) -> Option<&RgbaBitmap> {
        let uniforms = Uniforms::from_bytes(bytes)?;
        Some(self.render_frame(&uniforms))
    }

    /// Takes a snapshot of the shared parameters and renders a frame.
    pub fn render_frame_from(&mut self, parameters: &SharedParameters) -> &RgbaBitmap {
        let uniforms = parameters.snapshot().to_uniforms();
        self.render_frame(&uniforms)
    }

    /// Renders `frames` frames back to back, handing each finished frame to
    /// `on_frame` together with its index. Parameters are re-read before
    /// each frame.
    pub fn run_frames<F>(&mut self, frames: u64, parameters: &SharedParameters, mut on_frame: F)
    where
        F: FnMut(u64, &RgbaBitmap),
    {
        for index in 0..frames {
            let frame = self.render_frame_from(parameters);
            on_frame(index, frame);
        }
    }

    /// Hands back the last rendered frame.
    pub fn into_frame(self) -> RgbaBitmap {
        self.target
    }
}
