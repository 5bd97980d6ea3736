use crate::axes::{Axis, AxisSystem};
use thiserror::Error;

/// Everything that can go wrong while describing a rotation convention or world system.
///
/// All of these are deterministic input-validation failures: they indicate a misconfigured
/// convention or world system, and retrying with the same input will fail the same way. Once a
/// value of one of the data-model types exists it is valid, and composing rotations from it
/// cannot fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A camera axis was named that is not one of X, Y, or Z.
    #[error("invalid rotation axis `{axis}`; expected one of x, y, z")]
    InvalidAxis { axis: String },

    /// A Tait-Bryan definition was given with a number of elemental rotations other than three.
    #[error("a Tait-Bryan definition needs exactly 3 elemental rotations, got {len}")]
    InvalidSequenceLength { len: usize },

    /// A world axis label is not one of North, South, East, West, Up, or Down.
    #[error("invalid world axis label `{label}`; expected one of North, South, East, West, Up, Down")]
    InvalidWorldAxisLabel { label: String },

    /// Two axes of a world system were assigned to the same physical line.
    ///
    /// This is the degenerate-triad half of an invalid world system. A label string that names
    /// no direction at all is reported as [`Error::InvalidWorldAxisLabel`] instead.
    #[error("world {first} axis ({first_label}) and {second} axis ({second_label}) lie on the same line")]
    DegenerateWorldSystem {
        first: Axis,
        first_label: AxisSystem,
        second: Axis,
        second_label: AxisSystem,
    },

    /// The fine adjustment of an angle control is outside [-50°, 50°].
    #[error("fine adjustment of {value}° is outside [-50°, 50°]")]
    FineAdjustmentOutOfRange { value: i32 },

    /// A matrix offered as a camera-to-world rotation is not orthonormal with determinant +1.
    #[error("matrix is not a rotation (expected orthonormal with determinant +1, got determinant {determinant})")]
    NotARotation { determinant: f64 },
}

/// Shorthand for results whose error is this crate's [`enum@Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
