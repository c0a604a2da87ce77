//! scanfx simulates a line scanner capturing content that moves during the scan.
//!
//! Every rendered frame, each row of the scanned area (the *sensor area*) gets its own
//! displacement, computed by a [`DisplacementCalculator`]. A layer shader then reads
//! the content shifted by that row's displacement, scaled per colour channel by the
//! fringe vectors, which adds a chromatic-aberration edge proportional to the motion.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: pick a [`Calculator`] (from [`library`], [`presets`], or a sum of
//!    several via [`Composed`]) and wrap it in a [`ScanEffectConfig`].
//! 2. **Update geometry**: the host reports the sensor area size and the content frame
//!    whenever its layout changes ([`ScanEffect::set_sensor_area_size`],
//!    [`ScanEffect::set_content_frame`]).
//! 3. **Sample**: [`ScanEffect::prepare_frame`] evaluates the calculator once per row
//!    into a reused buffer ([`FrameDriver`]) and returns [`ShaderArguments`].
//! 4. **Shade**: a GPU shader consumes the arguments; [`apply_scan_layer`] is the CPU
//!    reference used for previews and tests.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure calculators**: evaluation is deterministic, allocation-free and never fails;
//!   degenerate geometry produces zero displacement instead of NaN.
//! - **Pending is not an error**: until both pieces of geometry are known only the
//!   bounding rect argument is emitted.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod displacement;
mod effect;
mod foundation;
mod render;

pub use displacement::calculator::DisplacementCalculator;
pub use displacement::compose::{AdditiveBuilder, Composed};
pub use displacement::library;
pub use displacement::model::{Calculator, CustomCalculator, presets};
pub use effect::config::{FringeVectors, ScanEffectConfig};
pub use effect::driver::{FrameDriver, FrameSample, OwnedFrameSample, compute_frame};
pub use effect::scan::ScanEffect;
pub use effect::shader_args::{ShaderArgument, ShaderArguments, ShaderPayload};
pub use foundation::core::{Rect, Rect4, Size, Vec2, Vector2};
pub use foundation::error::{ScanError, ScanResult};
pub use foundation::math::MAX_SENSOR_ROWS;
pub use render::cpu::{FrameRGBA, apply_scan_layer};
