use crate::{
    effect::{config::FringeVectors, driver::FrameSample},
    foundation::core::Rect4,
};

/// One positional argument of the scan layer shader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShaderArgument<'a> {
    /// Placeholder for the layer bounds; the host substitutes the real rectangle.
    BoundingRect,
    /// Four floats (`x, y, width, height`).
    Float4([f32; 4]),
    /// Flat float array.
    FloatArray(&'a [f32]),
    /// Two floats.
    Float2([f32; 2]),
}

/// Everything the shader needs beyond the bounding rect, available once geometry is known.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShaderPayload<'a> {
    /// Sampled rows for this frame.
    pub sample: FrameSample<'a>,
    /// Channel fringe multipliers.
    pub fringe: FringeVectors,
}

/// Argument set submitted to the shader for one frame.
///
/// While geometry is pending only the bounding rect is emitted and the shader
/// leaves the layer as is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShaderArguments<'a> {
    payload: Option<ShaderPayload<'a>>,
}

impl<'a> ShaderArguments<'a> {
    /// Arguments for a frame whose geometry is not known yet.
    pub fn pending() -> Self {
        Self { payload: None }
    }

    /// Full arguments for a sampled frame.
    pub fn ready(sample: FrameSample<'a>, fringe: FringeVectors) -> Self {
        Self {
            payload: Some(ShaderPayload { sample, fringe }),
        }
    }

    /// `true` when the full argument set is present.
    pub fn is_ready(&self) -> bool {
        self.payload.is_some()
    }

    /// Payload, if geometry is known.
    pub fn payload(&self) -> Option<&ShaderPayload<'a>> {
        self.payload.as_ref()
    }

    /// Content frame sent as the first `float4`.
    pub fn content_frame(&self) -> Option<Rect4> {
        self.payload.map(|p| p.sample.content_frame)
    }

    /// Row displacements as interleaved floats; empty while pending.
    pub fn displacement_floats(&self) -> &'a [f32] {
        match self.payload {
            Some(p) => p.sample.flattened_displacements(),
            None => &[],
        }
    }

    /// Row displacements as raw bytes, ready for a GPU buffer upload.
    pub fn displacement_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.displacement_floats())
    }

    /// Ordered argument list: bounding rect, then content frame, displacement
    /// array and the red, green and blue fringe vectors.
    pub fn arguments(&self) -> Vec<ShaderArgument<'a>> {
        let mut args = Vec::with_capacity(6);
        args.push(ShaderArgument::BoundingRect);
        if let Some(p) = self.payload {
            args.push(ShaderArgument::Float4(p.sample.content_frame.to_array()));
            args.push(ShaderArgument::FloatArray(
                p.sample.flattened_displacements(),
            ));
            args.extend(
                p.fringe
                    .as_array()
                    .into_iter()
                    .map(|v| ShaderArgument::Float2(v.to_array())),
            );
        }
        args
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effect/shader_args.rs"]
mod tests;
