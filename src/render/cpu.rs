//! CPU reference implementation of the scan layer shader.
//!
//! Consumes the same [`ShaderArguments`] a GPU shader would and applies them to an
//! RGBA8 layer. Intended for previews and headless tests, not for throughput.

use rayon::prelude::*;

use crate::{
    effect::shader_args::ShaderArguments,
    foundation::core::{Rect4, Vector2},
    foundation::error::{ScanError, ScanResult},
};

/// A rendered RGBA8 frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Fully transparent premultiplied frame.
    pub fn transparent(width: u32, height: u32) -> ScanResult<Self> {
        let len = expected_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
            premultiplied: true,
        })
    }

    /// Premultiply straight-alpha RGBA8 bytes.
    pub fn from_straight_rgba8(width: u32, height: u32, mut data: Vec<u8>) -> ScanResult<Self> {
        if data.len() != expected_len(width, height)? {
            return Err(ScanError::render(format!(
                "rgba8 buffer for {width}x{height} must be {} bytes, got {}",
                expected_len(width, height)?,
                data.len()
            )));
        }
        for px in data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * a + 127) / 255) as u8;
            }
        }
        Ok(Self {
            width,
            height,
            data,
            premultiplied: true,
        })
    }

    /// Straight-alpha copy of the pixel data (e.g. for PNG output).
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if !self.premultiplied {
            return out;
        }
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                px[..3].fill(0);
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Pixel at `(x, y)`; panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Copy `content` onto a transparent `width x height` frame with its top-left
    /// corner at `(x, y)`. Parts falling outside are clipped.
    pub fn place_on_canvas(
        content: &FrameRGBA,
        width: u32,
        height: u32,
        x: i64,
        y: i64,
    ) -> ScanResult<Self> {
        content.validate()?;
        let mut out = Self::transparent(width, height)?;
        out.premultiplied = content.premultiplied;
        for sy in 0..content.height {
            let dy = y + i64::from(sy);
            if dy < 0 || dy >= i64::from(height) {
                continue;
            }
            for sx in 0..content.width {
                let dx = x + i64::from(sx);
                if dx < 0 || dx >= i64::from(width) {
                    continue;
                }
                let di = (dy as usize * width as usize + dx as usize) * 4;
                out.data[di..di + 4].copy_from_slice(&content.pixel(sx, sy));
            }
        }
        Ok(out)
    }

    /// Check `data` matches the declared dimensions.
    pub fn validate(&self) -> ScanResult<()> {
        let expected = expected_len(self.width, self.height)?;
        if self.data.len() != expected {
            return Err(ScanError::render(format!(
                "frame data is {} bytes, expected {expected} for {}x{}",
                self.data.len(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }
}

fn expected_len(width: u32, height: u32) -> ScanResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| ScanError::render("frame dimensions overflow"))
}

/// Apply the scan effect to `layer`.
///
/// For each output pixel the row displacement `d` (from the pixel's row, clamped to
/// the sampled rows) is scaled per channel by the fringe vector, and the channel is
/// read (nearest) from `pixel_center - d * fringe`. Reads outside the content frame
/// or the layer are transparent. Output alpha is the largest of the three sampled
/// alphas, which keeps premultiplied data valid.
///
/// Pending arguments return the layer unchanged.
#[tracing::instrument(skip_all, fields(width = layer.width, height = layer.height))]
pub fn apply_scan_layer(layer: &FrameRGBA, args: &ShaderArguments<'_>) -> ScanResult<FrameRGBA> {
    layer.validate()?;
    let Some(payload) = args.payload() else {
        return Ok(layer.clone());
    };
    if layer.width == 0 || layer.height == 0 {
        return Ok(layer.clone());
    }

    let sample = payload.sample;
    let fringe = payload.fringe.as_array();
    let bounds = Rect4::new(0.0, 0.0, layer.width as f32, layer.height as f32);
    let width = layer.width as usize;

    let mut data = vec![0u8; layer.data.len()];
    data.par_chunks_exact_mut(width * 4)
        .enumerate()
        .for_each(|(y, row)| {
            let d = sample.displacement_at_row(y);
            for (x, out) in row.chunks_exact_mut(4).enumerate() {
                let center = Vector2::new(x as f32 + 0.5, y as f32 + 0.5);
                let mut alpha = 0u8;
                for (channel, f) in fringe.iter().enumerate() {
                    let src = center - d * *f;
                    let px = read_nearest(layer, bounds, sample.content_frame, src);
                    out[channel] = px[channel];
                    alpha = alpha.max(px[3]);
                }
                out[3] = alpha;
            }
        });

    Ok(FrameRGBA {
        width: layer.width,
        height: layer.height,
        data,
        premultiplied: layer.premultiplied,
    })
}

fn read_nearest(layer: &FrameRGBA, bounds: Rect4, content: Rect4, at: Vector2) -> [u8; 4] {
    if !at.is_finite() || !bounds.contains(at.x, at.y) || !content.contains(at.x, at.y) {
        return [0; 4];
    }
    layer.pixel(at.x.floor() as u32, at.y.floor() as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
