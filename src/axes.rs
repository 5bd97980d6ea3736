use crate::error::Error;
use crate::Vector3;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three axes of the camera frame that an elemental rotation can turn around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", try_from = "String"))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns 0, 1, or 2 for X, Y, and Z respectively.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(Error::InvalidAxis {
                axis: index.to_string(),
            }),
        }
    }
}

impl FromStr for Axis {
    type Err = Error;

    /// Accepts `x`, `y`, `z` in either case, and the `around_x` style used by older
    /// configuration files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = trimmed.strip_prefix("around_").unwrap_or(trimmed);
        match name {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            _ => Err(Error::InvalidAxis {
                axis: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for Axis {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

/// A compass or vertical direction that a world axis can point in.
///
/// Opposite pairs (North and South, East and West, Up and Down) describe the same physical
/// line with reversed polarity. North, East, and Up are the _positive_ labels: the elemental
/// rotation matrices assume a world axis points in one of those directions, and an axis
/// labelled South, West, or Down reverses the sense of a positive rotation around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
pub enum AxisSystem {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

/// The physical line an [`AxisSystem`] label lies on, irrespective of polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisLine {
    NorthSouth,
    EastWest,
    Vertical,
}

impl AxisSystem {
    /// All six labels.
    pub const ALL: [AxisSystem; 6] = [
        AxisSystem::North,
        AxisSystem::South,
        AxisSystem::East,
        AxisSystem::West,
        AxisSystem::Up,
        AxisSystem::Down,
    ];

    /// The label pointing the other way along the same line.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            AxisSystem::North => AxisSystem::South,
            AxisSystem::South => AxisSystem::North,
            AxisSystem::East => AxisSystem::West,
            AxisSystem::West => AxisSystem::East,
            AxisSystem::Up => AxisSystem::Down,
            AxisSystem::Down => AxisSystem::Up,
        }
    }

    /// The line this label lies on.
    #[must_use]
    pub const fn line(self) -> AxisLine {
        match self {
            AxisSystem::North | AxisSystem::South => AxisLine::NorthSouth,
            AxisSystem::East | AxisSystem::West => AxisLine::EastWest,
            AxisSystem::Up | AxisSystem::Down => AxisLine::Vertical,
        }
    }

    /// Whether a world axis with this label flips the sense of rotation around it.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, AxisSystem::South | AxisSystem::West | AxisSystem::Down)
    }

    /// The unit vector this label points along in the East-North-Up scene frame.
    ///
    /// This is the frame a viewer draws the world in: East is +x, North is +y, and Up is +z,
    /// regardless of which world system the angles are expressed in.
    #[must_use]
    pub fn scene_direction(self) -> Vector3 {
        let positive = match self.line() {
            AxisLine::EastWest => Vector3::x(),
            AxisLine::NorthSouth => Vector3::y(),
            AxisLine::Vertical => Vector3::z(),
        };
        if self.is_reversed() {
            -positive
        } else {
            positive
        }
    }
}

impl FromStr for AxisSystem {
    type Err = Error;

    /// Parses a label case-insensitively, accepting full names and their initials.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(AxisSystem::North),
            "south" | "s" => Ok(AxisSystem::South),
            "east" | "e" => Ok(AxisSystem::East),
            "west" | "w" => Ok(AxisSystem::West),
            "up" | "u" => Ok(AxisSystem::Up),
            "down" | "d" => Ok(AxisSystem::Down),
            _ => Err(Error::InvalidWorldAxisLabel {
                label: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for AxisSystem {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Display for AxisSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AxisSystem::North => "North",
            AxisSystem::South => "South",
            AxisSystem::East => "East",
            AxisSystem::West => "West",
            AxisSystem::Up => "Up",
            AxisSystem::Down => "Down",
        })
    }
}
