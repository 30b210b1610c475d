//! Pixel transform operations: rect crop and quarter-turn rotation.
//!
//! These are the geometric half of the render pipeline. They consume the
//! windows computed by the `geometry` module and never decide geometry on
//! their own.
//!
//! # Transform Order
//!
//! When rendering, transforms run in this order:
//! 1. Crop to the resolved window
//! 2. Tonal adjustments
//! 3. Filter preset
//! 4. Rotation
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - Rotation is in degrees, positive = clockwise in screen space

mod crop;
mod rotation;

pub use crop::crop_to_window;
pub use rotation::rotate_quarter;
