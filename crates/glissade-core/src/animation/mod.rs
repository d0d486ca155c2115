//! Slide animation system
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (quadratic in-out, cubic, quintic, exponential)
//! - `timing` - Time calculation utilities (progress, interpolation, frame period)
//! - `generation` - Transition tags used to retire stale animations
//!
//! ## L3 Molecular Layer
//! - `animator` - Per-slide animation combining atoms

// L4 Atomic Layer
pub mod easing;
pub mod generation;
pub mod timing;

// L3 Molecular Layer
pub mod animator;

pub use animator::{AnimationOutcome, SlideAnimation};
pub use easing::EasingType;
pub use generation::Generation;
