use crate::axes::{Axis, AxisSystem};
use crate::error::{Error, Result};
use crate::Matrix3;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether the axes of a [`WorldSystem`] follow the right-hand or the left-hand rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handedness {
    Right,
    Left,
}

/// Assigns a compass or vertical direction to each of the world's x, y, and z axes.
///
/// The labels decide the sign correction applied to an elemental rotation: a rotation around a
/// camera axis whose world counterpart is labelled South, West, or Down has its angle negated
/// (see [`AxisSystem::is_reversed`]).
///
/// Construction rejects triads where two axes lie on the same line (eg, North and South), since
/// those do not span space. Both right- and left-handed triads are accepted; use
/// [`WorldSystem::handedness`] to tell them apart.
///
/// <https://en.wikipedia.org/wiki/Axes_conventions#World_reference_frames_for_attitude_description>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawWorldSystem"))]
pub struct WorldSystem {
    x_axis: AxisSystem,
    y_axis: AxisSystem,
    z_axis: AxisSystem,
}

impl WorldSystem {
    /// Assigns `x_axis`, `y_axis`, and `z_axis` to the world's x, y, and z.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateWorldSystem`] if two of the labels lie on the same line.
    pub fn new(x_axis: AxisSystem, y_axis: AxisSystem, z_axis: AxisSystem) -> Result<Self> {
        let world = Self {
            x_axis,
            y_axis,
            z_axis,
        };
        for (first, second) in [(Axis::X, Axis::Y), (Axis::X, Axis::Z), (Axis::Y, Axis::Z)] {
            let first_label = world.label(first);
            let second_label = world.label(second);
            if first_label.line() == second_label.line() {
                return Err(Error::DegenerateWorldSystem {
                    first,
                    first_label,
                    second,
                    second_label,
                });
            }
        }
        Ok(world)
    }

    /// North, East, Down.
    ///
    /// <https://en.wikipedia.org/wiki/Local_tangent_plane_coordinates#Local_north,_east,_down_(NED)_coordinates>
    #[doc(alias = "north_east_down")]
    #[must_use]
    pub fn ned() -> Self {
        Self {
            x_axis: AxisSystem::North,
            y_axis: AxisSystem::East,
            z_axis: AxisSystem::Down,
        }
    }

    /// East, North, Up.
    ///
    /// <https://en.wikipedia.org/wiki/Local_tangent_plane_coordinates#Local_east,_north,_up_(ENU)_coordinates>
    #[doc(alias = "east_north_up")]
    #[must_use]
    pub fn enu() -> Self {
        Self {
            x_axis: AxisSystem::East,
            y_axis: AxisSystem::North,
            z_axis: AxisSystem::Up,
        }
    }

    /// The world axes a photogrammetric camera lines up with when all its angles are zero.
    ///
    /// A photogrammetric camera has x pointing right (looking through the camera), y pointing
    /// up in the image, and z pointing backwards out of the lens. With no rotation applied these
    /// coincide with East, North, and Up, so this is the same triad as [`WorldSystem::enu`].
    #[must_use]
    pub fn photogrammetric_camera_alignment() -> Self {
        Self::enu()
    }

    #[must_use]
    pub fn x_axis(&self) -> AxisSystem {
        self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> AxisSystem {
        self.y_axis
    }

    #[must_use]
    pub fn z_axis(&self) -> AxisSystem {
        self.z_axis
    }

    /// The label of the world axis corresponding to `axis`.
    #[must_use]
    pub fn label(&self, axis: Axis) -> AxisSystem {
        match axis {
            Axis::X => self.x_axis,
            Axis::Y => self.y_axis,
            Axis::Z => self.z_axis,
        }
    }

    /// Whether a rotation around `axis` has its sense reversed in this world.
    #[must_use]
    pub fn is_reversed(&self, axis: Axis) -> bool {
        self.label(axis).is_reversed()
    }

    /// The world axes as rows, expressed in the East-North-Up scene frame.
    #[must_use]
    pub fn scene_basis(&self) -> Matrix3 {
        Matrix3::from_rows(&[
            self.x_axis.scene_direction().transpose(),
            self.y_axis.scene_direction().transpose(),
            self.z_axis.scene_direction().transpose(),
        ])
    }

    #[must_use]
    pub fn handedness(&self) -> Handedness {
        // rows are signed unit vectors along distinct lines, so the determinant is exactly ±1
        if self.scene_basis().determinant() > 0. {
            Handedness::Right
        } else {
            Handedness::Left
        }
    }
}

impl Display for WorldSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.x_axis, self.y_axis, self.z_axis)
    }
}

/// Unvalidated form of [`WorldSystem`] used on the deserialization path.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawWorldSystem {
    x_axis: AxisSystem,
    y_axis: AxisSystem,
    z_axis: AxisSystem,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWorldSystem> for WorldSystem {
    type Error = Error;

    fn try_from(raw: RawWorldSystem) -> Result<Self> {
        WorldSystem::new(raw.x_axis, raw.y_axis, raw.z_axis)
    }
}

#[cfg(test)]
mod tests {
    use super::{Handedness, WorldSystem};
    use crate::axes::{Axis, AxisSystem::*};
    use crate::error::Error;
    use rstest::rstest;

    #[test]
    fn factories() {
        let ned = WorldSystem::ned();
        assert_eq!((ned.x_axis(), ned.y_axis(), ned.z_axis()), (North, East, Down));
        let enu = WorldSystem::enu();
        assert_eq!((enu.x_axis(), enu.y_axis(), enu.z_axis()), (East, North, Up));

        // the factories agree with validated construction
        assert_eq!(WorldSystem::new(North, East, Down), Ok(ned));
        assert_eq!(WorldSystem::new(East, North, Up), Ok(enu));
    }

    #[test]
    fn photogrammetric_camera_sits_in_enu() {
        let aligned = WorldSystem::photogrammetric_camera_alignment();
        assert_eq!(aligned, WorldSystem::enu());
        assert_eq!(aligned.handedness(), Handedness::Right);
        assert!(Axis::ALL.iter().all(|&axis| !aligned.is_reversed(axis)));
    }

    #[test]
    fn reversed_axes() {
        let ned = WorldSystem::ned();
        assert!(!ned.is_reversed(Axis::X));
        assert!(!ned.is_reversed(Axis::Y));
        assert!(ned.is_reversed(Axis::Z));

        let enu = WorldSystem::enu();
        assert!(Axis::ALL.iter().all(|&axis| !enu.is_reversed(axis)));
    }

    #[rstest]
    #[case(North, South, Up, Axis::X, Axis::Y)]
    #[case(Up, East, Up, Axis::X, Axis::Z)]
    #[case(East, West, West, Axis::X, Axis::Y)]
    #[case(North, Down, Up, Axis::Y, Axis::Z)]
    fn degenerate_triads_are_rejected(
        #[case] x: crate::axes::AxisSystem,
        #[case] y: crate::axes::AxisSystem,
        #[case] z: crate::axes::AxisSystem,
        #[case] first: Axis,
        #[case] second: Axis,
    ) {
        match WorldSystem::new(x, y, z) {
            Err(Error::DegenerateWorldSystem {
                first: f,
                second: s,
                ..
            }) => {
                assert_eq!((f, s), (first, second));
            }
            other => panic!("expected a degenerate world system, got {other:?}"),
        }
    }

    #[rstest]
    #[case(WorldSystem::ned(), Handedness::Right)]
    #[case(WorldSystem::enu(), Handedness::Right)]
    #[case(WorldSystem::new(North, East, Up).unwrap(), Handedness::Left)]
    #[case(WorldSystem::new(East, North, Down).unwrap(), Handedness::Left)]
    #[case(WorldSystem::new(North, West, Up).unwrap(), Handedness::Right)]
    #[case(WorldSystem::new(South, West, Up).unwrap(), Handedness::Left)]
    fn handedness(#[case] world: WorldSystem, #[case] expected: Handedness) {
        assert_eq!(world.handedness(), expected);
    }

    #[test]
    fn flipping_one_label_flips_handedness() {
        for (x, y, z) in [(North, East, Down), (East, North, Up), (West, Up, South)] {
            let world = WorldSystem::new(x, y, z).unwrap();
            let flipped = WorldSystem::new(x, y, z.opposite()).unwrap();
            assert_ne!(world.handedness(), flipped.handedness());
        }
    }

    #[test]
    fn display() {
        insta::assert_snapshot!(WorldSystem::ned(), @"North-East-Down");
        insta::assert_snapshot!(WorldSystem::enu(), @"East-North-Up");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn world_serde() {
        let ser = serde_yaml::to_string(&WorldSystem::ned()).unwrap();
        let de = serde_yaml::from_str::<WorldSystem>(&ser).unwrap();
        assert_eq!(de, WorldSystem::ned());

        let err = serde_yaml::from_str::<WorldSystem>("x_axis: Up\ny_axis: North\nz_axis: Down\n")
            .unwrap_err();
        assert!(err.to_string().contains("lie on the same line"));

        let err =
            serde_yaml::from_str::<WorldSystem>("x_axis: Up\ny_axis: Left\nz_axis: North\n")
                .unwrap_err();
        assert!(err.to_string().contains("Left"));
    }
}
