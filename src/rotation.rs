//! The rotation engine: elemental matrices, sign correction, and composition.
//!
//! Everything in here is a pure function of its inputs. Callers recompute a rotation whenever an
//! angle changes; nothing is cached or observed.

use crate::axes::Axis;
use crate::definition::ElementalRotationDefinition;
use crate::error::{Error, Result};
use crate::float_math::FloatMath;
use crate::world::WorldSystem;
use crate::{Matrix3, Vector3};
use nalgebra::Rotation3;
use std::fmt::{self, Display, Formatter};
use std::ops::Mul;
use uom::si::angle::{degree, radian};
use uom::si::f64::Angle;

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returns the matrix for rotating the camera system counter-clockwise by `angle` around its
/// `axis`.
///
/// The matrix maps a point expressed in the rotated (camera) frame into the unrotated (parent)
/// frame. Seen from the fixed camera, points appear to turn clockwise.
///
/// ```text
/// X: [[1, 0, 0], [0, c, -s], [0, s, c]]
/// Y: [[c, 0, s], [0, 1, 0], [-s, 0, c]]
/// Z: [[c, -s, 0], [s, c, 0], [0, 0, 1]]
/// ```
#[must_use]
#[rustfmt::skip]
pub fn elemental_matrix(axis: Axis, angle: impl Into<Angle>) -> Matrix3 {
    let theta = angle.into().get::<radian>();
    let (s, c) = (FloatMath::sin(theta), FloatMath::cos(theta));
    match axis {
        Axis::X => Matrix3::new(
            1., 0., 0.,
            0., c, -s,
            0., s, c,
        ),
        Axis::Y => Matrix3::new(
            c, 0., s,
            0., 1., 0.,
            -s, 0., c,
        ),
        Axis::Z => Matrix3::new(
            c, -s, 0.,
            s, c, 0.,
            0., 0., 1.,
        ),
    }
}

/// Returns the counter-clockwise angle to feed into [`elemental_matrix`] for `angle` as
/// described by `definition`.
///
/// Two independent sign flips apply:
///
/// - clockwise definitions are negated, since clockwise as seen by the camera is negative
///   counter-clockwise; and
/// - if `world` labels the axis South, West, or Down, the angle is negated again, since the
///   primitive matrices assume a North, East, or Up pointing axis.
///
/// Without a world system only the first flip applies.
#[must_use]
pub fn corrected_angle(
    angle: impl Into<Angle>,
    definition: &ElementalRotationDefinition,
    world: Option<&WorldSystem>,
) -> Angle {
    let angle = angle.into();
    let world_reversed = world.is_some_and(|world| world.is_reversed(definition.axis()));
    let corrected = if definition.is_clockwise() != world_reversed {
        -angle
    } else {
        angle
    };
    log::trace!(
        "{}: {}° -> {}° around {}",
        definition.name(),
        angle.get::<degree>(),
        corrected.get::<degree>(),
        definition.axis()
    );
    corrected
}

/// Returns the sign-corrected elemental matrix for one (angle, definition) pair.
#[must_use]
pub fn elemental_rotation(
    angle: impl Into<Angle>,
    definition: &ElementalRotationDefinition,
    world: Option<&WorldSystem>,
) -> Matrix3 {
    elemental_matrix(definition.axis(), corrected_angle(angle, definition, world))
}

/// Computes the rotation matrix that takes a point in camera coordinates to world coordinates.
///
/// The three pairs are given in the order the rotations are applied to the camera, so the
/// result is `R_last · R_second · R_first`: matrix products act right-to-left, which puts the
/// first-applied rotation next to the vector.
#[must_use]
pub fn camera_to_world_rotation_matrix(
    first: (Angle, &ElementalRotationDefinition),
    second: (Angle, &ElementalRotationDefinition),
    last: (Angle, &ElementalRotationDefinition),
    world: Option<&WorldSystem>,
) -> Matrix3 {
    let r_first = elemental_rotation(first.0, first.1, world);
    let r_second = elemental_rotation(second.0, second.1, world);
    let r_last = elemental_rotation(last.0, last.1, world);
    r_last * r_second * r_first
}

/// Computes the camera-to-world rotation for three (angle, definition) pairs in application
/// order.
///
/// When `world` is `None` no world-axis sign correction is applied, which is the same as
/// passing a world system with only North, East, and Up labels (eg, [`WorldSystem::enu`]).
///
/// ```
/// use approx::assert_relative_eq;
/// use euler_frames::{compute_rotation, Matrix3, TaitBryanAnglesDefinition, WorldSystem};
/// use uom::si::{angle::degree, f64::Angle};
///
/// let ypr = TaitBryanAnglesDefinition::yaw_pitch_roll();
/// let [roll, pitch, yaw] = ypr.angles_in_order_applied();
/// let rotation = compute_rotation(
///     [
///         (Angle::new::<degree>(0.), roll),
///         (Angle::new::<degree>(0.), pitch),
///         (Angle::new::<degree>(90.), yaw),
///     ],
///     Some(&WorldSystem::ned()),
/// );
///
/// // NED labels z as Down, so the yaw is applied as -90° around z
/// assert_relative_eq!(
///     rotation.matrix(),
///     Matrix3::new(0., 1., 0., -1., 0., 0., 0., 0., 1.),
///     epsilon = 1e-12
/// );
/// ```
#[must_use]
pub fn compute_rotation(
    angles_with_defs: [(Angle, &ElementalRotationDefinition); 3],
    world: Option<&WorldSystem>,
) -> CameraToWorld {
    let [first, second, last] = angles_with_defs;
    let matrix = camera_to_world_rotation_matrix(first, second, last, world);
    log::debug!(
        "{} = {}°, {} = {}°, {} = {}° in {} -> {matrix}",
        first.1.name(),
        first.0.get::<degree>(),
        second.1.name(),
        second.0.get::<degree>(),
        last.1.name(),
        last.0.get::<degree>(),
        world.map_or_else(|| "unlabelled world".to_owned(), ToString::to_string),
    );
    CameraToWorld {
        inner: Rotation3::from_matrix_unchecked(matrix),
    }
}

/// How far `RᵀR` and `det(R)` may stray from `I` and 1 for a matrix to count as a rotation.
pub const ROTATION_TOLERANCE: f64 = 1e-9;

/// A rotation from camera coordinates into world coordinates.
///
/// The underlying matrix is row-major, orthonormal, and has determinant +1. Multiplying it with
/// a [`Vector3`] (or calling [`CameraToWorld::transform`]) takes a direction in the camera frame
/// to the same direction in the world frame.
///
/// Deserialization goes through [`CameraToWorld::from_matrix`], so a matrix read from disk has to
/// be a proper rotation as well.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Matrix3", into = "Matrix3"))]
pub struct CameraToWorld {
    inner: Rotation3<f64>,
}

impl CameraToWorld {
    /// The rotation that leaves the camera aligned with the world.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            inner: Rotation3::identity(),
        }
    }

    /// Wraps a matrix that was computed elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotARotation`] unless `RᵀR` is the identity and `det(R)` is +1, both to
    /// within [`ROTATION_TOLERANCE`]. Scaled matrices and reflections are rejected.
    pub fn from_matrix(matrix: Matrix3) -> Result<Self> {
        let determinant = matrix.determinant();
        let orthonormal =
            (matrix.transpose() * matrix - Matrix3::identity()).amax() <= ROTATION_TOLERANCE;
        // written so that NaN fails both checks
        if !(orthonormal && (determinant - 1.).abs() <= ROTATION_TOLERANCE) {
            return Err(Error::NotARotation { determinant });
        }
        Ok(Self {
            inner: Rotation3::from_matrix_unchecked(matrix),
        })
    }

    /// The 3×3 rotation matrix.
    #[must_use]
    pub fn matrix(&self) -> Matrix3 {
        *self.inner.matrix()
    }

    /// The matrix as row-major nested arrays.
    #[must_use]
    pub fn to_rows(&self) -> [[f64; 3]; 3] {
        let m = self.inner.matrix();
        [
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ]
    }

    /// Takes a direction in the camera frame into the world frame.
    #[doc(alias = "apply")]
    #[must_use]
    pub fn transform(&self, in_camera: Vector3) -> Vector3 {
        self.inner * in_camera
    }

    /// Takes a direction in the world frame into the camera frame.
    #[doc(alias = "undo")]
    #[must_use]
    pub fn inverse_transform(&self, in_world: Vector3) -> Vector3 {
        self.inner.inverse_transform_vector(&in_world)
    }

    /// The camera's x, y, and z axes expressed in world coordinates.
    ///
    /// These are the columns of [`CameraToWorld::matrix`].
    #[must_use]
    pub fn camera_axes_in_world(&self) -> [Vector3; 3] {
        Axis::ALL.map(|axis| self.inner.matrix().column(axis.index()).into_owned())
    }

    /// The rotation from world coordinates back into camera coordinates.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            inner: self.inner.inverse(),
        }
    }
}

impl TryFrom<Matrix3> for CameraToWorld {
    type Error = Error;

    fn try_from(matrix: Matrix3) -> Result<Self> {
        Self::from_matrix(matrix)
    }
}

impl From<CameraToWorld> for Matrix3 {
    fn from(rotation: CameraToWorld) -> Self {
        rotation.matrix()
    }
}

impl Mul<Vector3> for CameraToWorld {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        self.transform(rhs)
    }
}

impl Display for CameraToWorld {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.to_rows();
        write!(f, "[{a:?}, {b:?}, {c:?}]")
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for CameraToWorld {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        Rotation3::<f64>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.inner.abs_diff_eq(&other.inner, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for CameraToWorld {
    fn default_max_relative() -> Self::Epsilon {
        Rotation3::<f64>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.inner.relative_eq(&other.inner, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        camera_to_world_rotation_matrix, compute_rotation, corrected_angle, elemental_matrix,
        elemental_rotation, CameraToWorld,
    };
    use crate::axes::{Axis, AxisSystem};
    use crate::definition::{ElementalRotationDefinition, TaitBryanAnglesDefinition};
    use crate::error::Error;
    use crate::world::WorldSystem;
    use crate::{Matrix3, Vector3};
    use approx::{assert_relative_eq, assert_relative_ne};
    use quickcheck::{quickcheck, Arbitrary, Gen};
    use rstest::rstest;
    use uom::si::angle::{degree, radian};
    use uom::si::f64::Angle;

    fn d(degrees: f64) -> Angle {
        Angle::new::<degree>(degrees)
    }

    fn ccw(name: &str, axis: Axis) -> ElementalRotationDefinition {
        ElementalRotationDefinition::counter_clockwise(name, axis)
    }

    fn assert_orthonormal(r: &Matrix3) {
        assert_relative_eq!(r.transpose() * r, Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(r.determinant(), 1., epsilon = 1e-12);
    }

    /// quickcheck will give us awkward f64 values -- we fold them into a full turn
    #[derive(Clone, Copy, Debug)]
    struct Degrees(f64);

    impl Arbitrary for Degrees {
        fn arbitrary(g: &mut Gen) -> Self {
            loop {
                match f64::arbitrary(g) {
                    0. => break Degrees(0.),
                    f if f.is_normal() => break Degrees(f.rem_euclid(720.) - 360.),
                    _ => {}
                }
            }
        }
    }

    impl Arbitrary for Axis {
        fn arbitrary(g: &mut Gen) -> Self {
            *g.choose(&Axis::ALL).unwrap_or(&Axis::X)
        }
    }

    impl Arbitrary for AxisSystem {
        fn arbitrary(g: &mut Gen) -> Self {
            *g.choose(&AxisSystem::ALL).unwrap_or(&AxisSystem::North)
        }
    }

    #[rstest]
    #[case(Axis::X, Vector3::y(), Vector3::z())]
    #[case(Axis::Y, Vector3::z(), Vector3::x())]
    #[case(Axis::Z, Vector3::x(), Vector3::y())]
    fn quarter_turns_follow_the_right_hand_rule(
        #[case] axis: Axis,
        #[case] from: Vector3,
        #[case] to: Vector3,
    ) {
        assert_relative_eq!(elemental_matrix(axis, d(90.)) * from, to, epsilon = 1e-12);
    }

    #[test]
    fn elemental_matrices_match_closed_form() {
        let theta = 0.3_f64;
        let (s, c) = theta.sin_cos();
        let angle = Angle::new::<radian>(theta);
        assert_relative_eq!(
            elemental_matrix(Axis::X, angle),
            Matrix3::new(1., 0., 0., 0., c, -s, 0., s, c),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            elemental_matrix(Axis::Y, angle),
            Matrix3::new(c, 0., s, 0., 1., 0., -s, 0., c),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            elemental_matrix(Axis::Z, angle),
            Matrix3::new(c, -s, 0., s, c, 0., 0., 0., 1.),
            epsilon = 1e-12
        );
    }

    quickcheck! {
        fn elemental_matrices_are_orthonormal(axis: Axis, angle: Degrees) -> () {
            assert_orthonormal(&elemental_matrix(axis, d(angle.0)));
        }
    }

    quickcheck! {
        fn flipping_handedness_and_angle_cancels(axis: Axis, angle: Degrees, clockwise: bool) -> () {
            let definition = ElementalRotationDefinition::new("Angle", axis, clockwise);
            let flipped = definition.reversed();
            assert_relative_eq!(
                elemental_rotation(d(angle.0), &definition, None),
                elemental_rotation(d(-angle.0), &flipped, None),
                epsilon = 1e-12
            );
        }
    }

    quickcheck! {
        fn flipping_a_world_label_flips_the_angle(
            x: AxisSystem,
            axis: Axis,
            angle: Degrees,
            clockwise: bool
        ) -> () {
            // y and z fill in the two lines x leaves free, so the triad stays valid
            let y = AxisSystem::ALL
                .into_iter()
                .find(|l| l.line() != x.line())
                .unwrap();
            let z = AxisSystem::ALL
                .into_iter()
                .find(|l| l.line() != x.line() && l.line() != y.line())
                .unwrap();
            let mut labels = [x, y, z];
            let world = WorldSystem::new(labels[0], labels[1], labels[2]).unwrap();
            labels[axis.index()] = labels[axis.index()].opposite();
            let flipped = WorldSystem::new(labels[0], labels[1], labels[2]).unwrap();
            assert_ne!(world.is_reversed(axis), flipped.is_reversed(axis));

            let definition = ElementalRotationDefinition::new("Angle", axis, clockwise);
            assert_relative_eq!(
                corrected_angle(d(angle.0), &definition, Some(&world)).get::<radian>(),
                -corrected_angle(d(angle.0), &definition, Some(&flipped)).get::<radian>()
            );
            assert_relative_eq!(
                elemental_rotation(d(angle.0), &definition, Some(&world)),
                elemental_rotation(d(-angle.0), &definition, Some(&flipped)),
                epsilon = 1e-12
            );
        }
    }

    quickcheck! {
        fn compositions_are_rotations(a: Degrees, b: Degrees, c: Degrees, ned: bool) -> () {
            let world = if ned { WorldSystem::ned() } else { WorldSystem::enu() };
            for convention in [
                TaitBryanAnglesDefinition::yaw_pitch_roll(),
                TaitBryanAnglesDefinition::pix4d_omega_phi_kappa(),
            ] {
                let rotation = convention.camera_to_world([d(a.0), d(b.0), d(c.0)], Some(&world));
                assert_orthonormal(&rotation.matrix());
            }
        }
    }

    #[rstest]
    #[case(false, None, 30.)]
    #[case(true, None, -30.)]
    #[case(false, Some(WorldSystem::ned()), -30.)]
    #[case(true, Some(WorldSystem::ned()), 30.)]
    #[case(false, Some(WorldSystem::enu()), 30.)]
    #[case(true, Some(WorldSystem::enu()), -30.)]
    fn sign_corrections_compose_by_negation(
        #[case] clockwise: bool,
        #[case] world: Option<WorldSystem>,
        #[case] expected: f64,
    ) {
        let yaw = ElementalRotationDefinition::new("Yaw", Axis::Z, clockwise);
        assert_relative_eq!(
            corrected_angle(d(30.), &yaw, world.as_ref()).get::<degree>(),
            expected,
            epsilon = 1e-12
        );
    }

    #[rstest]
    #[case(TaitBryanAnglesDefinition::yaw_pitch_roll(), None)]
    #[case(TaitBryanAnglesDefinition::yaw_pitch_roll(), Some(WorldSystem::ned()))]
    #[case(TaitBryanAnglesDefinition::yaw_pitch_roll(), Some(WorldSystem::enu()))]
    #[case(TaitBryanAnglesDefinition::pix4d_omega_phi_kappa(), None)]
    #[case(TaitBryanAnglesDefinition::pix4d_omega_phi_kappa(), Some(WorldSystem::ned()))]
    #[case(TaitBryanAnglesDefinition::pix4d_omega_phi_kappa(), Some(WorldSystem::enu()))]
    fn zero_angles_give_identity(
        #[case] convention: TaitBryanAnglesDefinition,
        #[case] world: Option<WorldSystem>,
    ) {
        let rotation = convention.camera_to_world([d(0.), d(0.), d(0.)], world.as_ref());
        assert_relative_eq!(rotation, CameraToWorld::identity());
        assert_eq!(rotation.matrix(), Matrix3::identity());
    }

    #[test]
    fn yaw_in_ned() {
        let rotation = TaitBryanAnglesDefinition::yaw_pitch_roll().camera_to_world(
            [d(0.), d(0.), d(90.)],
            Some(&WorldSystem::ned()),
        );
        assert_relative_eq!(
            rotation.matrix(),
            Matrix3::new(0., 1., 0., -1., 0., 0., 0., 0., 1.),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            rotation.matrix(),
            elemental_matrix(Axis::Z, d(-90.)),
            epsilon = 1e-12
        );
    }

    #[test]
    fn yaw_without_world_is_counter_clockwise() {
        let rotation =
            TaitBryanAnglesDefinition::yaw_pitch_roll().camera_to_world([d(0.), d(0.), d(90.)], None);
        assert_relative_eq!(
            rotation.matrix(),
            Matrix3::new(0., -1., 0., 1., 0., 0., 0., 0., 1.),
            epsilon = 1e-12
        );
    }

    #[test]
    fn no_world_matches_world_without_reversed_labels() {
        let convention = TaitBryanAnglesDefinition::yaw_pitch_roll();
        let angles = [d(12.), d(-34.), d(56.)];
        assert_relative_eq!(
            convention.camera_to_world(angles, None),
            convention.camera_to_world(angles, Some(&WorldSystem::enu())),
            epsilon = 1e-12
        );
    }

    #[test]
    fn application_order_matters() {
        let yaw = ccw("Yaw", Axis::Z);
        let pitch = ccw("Pitch", Axis::Y);
        let roll = ccw("Roll", Axis::X);

        let yaw_then_pitch = compute_rotation(
            [(d(0.), &roll), (d(90.), &yaw), (d(90.), &pitch)],
            None,
        );
        let pitch_then_yaw = compute_rotation(
            [(d(0.), &roll), (d(90.), &pitch), (d(90.), &yaw)],
            None,
        );
        assert_relative_ne!(yaw_then_pitch, pitch_then_yaw, epsilon = 1e-6);
    }

    #[test]
    fn composition_applies_first_rotation_first() {
        let convention = TaitBryanAnglesDefinition::yaw_pitch_roll();
        let world = WorldSystem::ned();
        let (roll, pitch, yaw) = (d(10.), d(-20.), d(30.));
        let rotation = convention.camera_to_world([roll, pitch, yaw], Some(&world));

        // apply the three elemental rotations to a vector one after the other
        let v = Vector3::new(0.3, -1.2, 2.5);
        let after_roll = elemental_rotation(roll, convention.first(), Some(&world)) * v;
        let after_pitch = elemental_rotation(pitch, convention.second(), Some(&world)) * after_roll;
        let after_yaw = elemental_rotation(yaw, convention.last(), Some(&world)) * after_pitch;
        assert_relative_eq!(rotation.transform(v), after_yaw, epsilon = 1e-12);

        // and the reverse order does not give the same result
        let wrong = elemental_rotation(roll, convention.first(), Some(&world))
            * elemental_rotation(pitch, convention.second(), Some(&world))
            * elemental_rotation(yaw, convention.last(), Some(&world));
        assert_relative_ne!(rotation.matrix(), wrong, epsilon = 1e-6);
    }

    #[test]
    fn camera_basis_roundtrip() {
        let convention = TaitBryanAnglesDefinition::pix4d_omega_phi_kappa();
        let world = WorldSystem::enu();
        let rotation = convention.camera_to_world([d(5.), d(-15.), d(95.)], Some(&world));
        let axes = rotation.camera_axes_in_world();

        for axis in Axis::ALL {
            let mut basis = Vector3::zeros();
            basis[axis.index()] = 1.;
            assert_relative_eq!(rotation * basis, axes[axis.index()], epsilon = 1e-12);
            assert_relative_eq!(rotation.inverse_transform(axes[axis.index()]), basis, epsilon = 1e-12);
        }
        assert_relative_eq!(
            rotation.inverse().matrix(),
            rotation.matrix().transpose(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn explicit_pairs_match_the_convention_helper() {
        let convention = TaitBryanAnglesDefinition::pix4d_omega_phi_kappa();
        let [kappa, phi, omega] = convention.angles_in_order_applied();
        let matrix = camera_to_world_rotation_matrix(
            (d(40.), kappa),
            (d(3.), phi),
            (d(-7.), omega),
            Some(&WorldSystem::ned()),
        );
        assert_relative_eq!(
            convention
                .camera_to_world([d(40.), d(3.), d(-7.)], Some(&WorldSystem::ned()))
                .matrix(),
            matrix
        );
    }

    #[test]
    fn rows_are_row_major() {
        let rotation = TaitBryanAnglesDefinition::yaw_pitch_roll().camera_to_world(
            [d(0.), d(0.), d(90.)],
            Some(&WorldSystem::ned()),
        );
        let rows = rotation.to_rows();
        assert_relative_eq!(rows[0][1], 1., epsilon = 1e-12);
        assert_relative_eq!(rows[1][0], -1., epsilon = 1e-12);
        assert_eq!(rows[2], [0., 0., 1.]);
    }

    #[test]
    fn identity_display() {
        insta::assert_snapshot!(
            CameraToWorld::identity(),
            @"[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rotation_serde() {
        let rotation = TaitBryanAnglesDefinition::yaw_pitch_roll().camera_to_world(
            [d(10.), d(20.), d(30.)],
            Some(&WorldSystem::ned()),
        );
        let ser = serde_yaml::to_string(&rotation).unwrap();
        let de = serde_yaml::from_str::<CameraToWorld>(&ser).unwrap();
        assert_relative_eq!(de, rotation);
    }

    #[test]
    fn from_matrix_accepts_rotations() {
        let rotation = TaitBryanAnglesDefinition::pix4d_omega_phi_kappa()
            .camera_to_world([d(-7.), d(33.), d(121.)], Some(&WorldSystem::enu()));
        assert_eq!(CameraToWorld::from_matrix(rotation.matrix()), Ok(rotation));
        assert_eq!(
            CameraToWorld::from_matrix(Matrix3::identity()),
            Ok(CameraToWorld::identity())
        );
    }

    #[rstest]
    #[case(Matrix3::identity() * 2., 8.)]
    #[case(Matrix3::new(1., 0., 0., 0., 1., 0., 0., 0., -1.), -1.)]
    #[case(Matrix3::new(1., 1., 0., 0., 1., 0., 0., 0., 1.), 1.)]
    #[case(Matrix3::zeros(), 0.)]
    fn from_matrix_rejects_non_rotations(#[case] matrix: Matrix3, #[case] determinant: f64) {
        assert_eq!(
            CameraToWorld::from_matrix(matrix),
            Err(Error::NotARotation { determinant })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rotation_serde_rejects_scaled_matrix() {
        let err = serde_yaml::from_str::<CameraToWorld>("[2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0]")
            .unwrap_err();
        assert!(err.to_string().contains("not a rotation"));

        let identity = serde_yaml::from_str::<CameraToWorld>("[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]")
            .unwrap();
        assert_eq!(identity, CameraToWorld::identity());
    }
}
