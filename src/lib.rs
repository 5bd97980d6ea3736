//! This library computes camera-to-world rotation matrices from three elemental rotations, for
//! whichever Euler/Tait-Bryan convention and world frame your data happens to use.
//!
//! Three angles on their own say very little. To turn them into a rotation you also need to know
//! which axis each one turns around, in which order they are applied, which way is positive, and
//! which way the world's axes point. This crate makes each of those choices an explicit value:
//!
//! - an [`ElementalRotationDefinition`] names one rotation, its camera [`Axis`], and whether it
//!   turns clockwise;
//! - a [`TaitBryanAnglesDefinition`] orders three of them (eg,
//!   [yaw-pitch-roll](TaitBryanAnglesDefinition::yaw_pitch_roll) or
//!   [Pix4D's omega-phi-kappa](TaitBryanAnglesDefinition::pix4d_omega_phi_kappa)); and
//! - a [`WorldSystem`] labels the world axes with compass and vertical directions (eg,
//!   [NED](WorldSystem::ned) or [ENU](WorldSystem::enu)).
//!
//! The [`rotation`] module then combines angles and definitions into a [`CameraToWorld`]
//! rotation. Everything is immutable and every computation is a pure function, so values can be
//! shared freely between threads.
//!
//! # Examples
//!
//! A camera described with yaw, pitch, and roll relative to North-East-Down:
//!
//! ```
//! use approx::assert_relative_eq;
//! use euler_frames::{TaitBryanAnglesDefinition, Vector3, WorldSystem};
//! use uom::si::{angle::degree, f64::Angle};
//!
//! let ypr = TaitBryanAnglesDefinition::yaw_pitch_roll();
//! let ned = WorldSystem::ned();
//!
//! // angles are given in application order: roll, then pitch, then yaw
//! let camera_to_world = ypr.camera_to_world(
//!     [
//!         Angle::new::<degree>(0.),  // roll
//!         Angle::new::<degree>(0.),  // pitch
//!         Angle::new::<degree>(90.), // yaw
//!     ],
//!     Some(&ned),
//! );
//!
//! // the camera's x axis now points along the world's negative y axis
//! assert_relative_eq!(
//!     camera_to_world.transform(Vector3::x()),
//!     -Vector3::y(),
//!     epsilon = 1e-12
//! );
//! ```
//!
//! Conventions that are not built in are just values:
//!
//! ```
//! use euler_frames::{Axis, ElementalRotationDefinition, TaitBryanAnglesDefinition};
//!
//! let heading_first = TaitBryanAnglesDefinition::new([
//!     ElementalRotationDefinition::clockwise("Heading", Axis::Z),
//!     ElementalRotationDefinition::counter_clockwise("Tilt", Axis::X),
//!     ElementalRotationDefinition::counter_clockwise("Swing", Axis::Y),
//! ]);
//! assert!(heading_first.has_distinct_axes());
//! ```
//!
//! # Features
//!
//! - `std` (default) or `libm`: which implementation of `sin`/`cos` to use. Exactly one must be
//!   enabled.
//! - `serde` (default): `Serialize`/`Deserialize` for all data types. Deserialization validates
//!   just like the constructors do.
//! - `approx` (default): `AbsDiffEq`/`RelativeEq` for [`CameraToWorld`].

mod axes;
mod definition;
mod error;
mod float_math;
mod world;

pub mod control;
pub mod rotation;

/// A 3×3 matrix of `f64`, as returned by the [`rotation`] functions.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// A 3-vector of `f64`.
pub type Vector3 = nalgebra::Vector3<f64>;

pub use axes::{Axis, AxisLine, AxisSystem};
pub use definition::{ElementalRotationDefinition, TaitBryanAnglesDefinition};
pub use error::{Error, Result};
pub use rotation::{camera_to_world_rotation_matrix, compute_rotation, CameraToWorld};
pub use world::{Handedness, WorldSystem};
