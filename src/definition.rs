//! Descriptions of elemental rotations and the Tait-Bryan conventions built from them.
//!
//! Literature and tooling disagree on almost every aspect of "the" Euler angles: the axes, the
//! order they are applied in, and which way is positive. A [`TaitBryanAnglesDefinition`] pins
//! all three down so that three bare numbers can be turned into a single unambiguous rotation.

use crate::axes::Axis;
use crate::error::{Error, Result};
use crate::rotation::{self, CameraToWorld};
use crate::world::WorldSystem;
use std::fmt::{self, Display, Formatter};
use uom::si::f64::Angle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One elemental rotation: which camera axis it turns around and which way is positive.
///
/// Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElementalRotationDefinition {
    name: String,
    axis: Axis,
    #[cfg_attr(feature = "serde", serde(default))]
    is_clockwise: bool,
}

impl ElementalRotationDefinition {
    /// Defines a rotation named `name` around the camera's `axis`.
    ///
    /// With `is_clockwise` set, a positive angle turns the camera clockwise as seen by an
    /// observer fixed to the camera looking along the positive axis, which is the opposite of
    /// the [right-hand rule](https://en.wikipedia.org/wiki/Right-hand_rule#Rotations).
    #[must_use]
    pub fn new(name: impl Into<String>, axis: Axis, is_clockwise: bool) -> Self {
        Self {
            name: name.into(),
            axis,
            is_clockwise,
        }
    }

    /// Defines a right-hand-rule (counter-clockwise) rotation.
    #[must_use]
    pub fn counter_clockwise(name: impl Into<String>, axis: Axis) -> Self {
        Self::new(name, axis, false)
    }

    /// Defines a clockwise rotation.
    #[must_use]
    pub fn clockwise(name: impl Into<String>, axis: Axis) -> Self {
        Self::new(name, axis, true)
    }

    /// The display label of the angle, eg "Yaw".
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.is_clockwise
    }

    /// The same rotation with the opposite sense of positive angles.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            name: self.name.clone(),
            axis: self.axis,
            is_clockwise: !self.is_clockwise,
        }
    }
}

impl Display for ElementalRotationDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sense = if self.is_clockwise { "cw" } else { "ccw" };
        write!(f, "{} (around {}, {sense})", self.name, self.axis)
    }
}

/// Three elemental rotations in the order they are applied to the camera.
///
/// Index 0 is applied first and index 2 last. The axes need not be distinct (classic Euler
/// angles repeat one), though every built-in convention uses X, Y, and Z once each.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "Vec<ElementalRotationDefinition>",
        into = "Vec<ElementalRotationDefinition>"
    )
)]
pub struct TaitBryanAnglesDefinition {
    angles_in_order_applied: [ElementalRotationDefinition; 3],
}

impl TaitBryanAnglesDefinition {
    #[must_use]
    pub fn new(angles_in_order_applied: [ElementalRotationDefinition; 3]) -> Self {
        Self {
            angles_in_order_applied,
        }
    }

    /// The aerospace yaw, pitch, roll convention.
    ///
    /// Roll (around X) is applied first, then pitch (around Y), then yaw (around Z), all
    /// counter-clockwise.
    #[doc(alias = "ypr")]
    #[must_use]
    pub fn yaw_pitch_roll() -> Self {
        Self::new([
            ElementalRotationDefinition::counter_clockwise("Roll", Axis::X),
            ElementalRotationDefinition::counter_clockwise("Pitch", Axis::Y),
            ElementalRotationDefinition::counter_clockwise("Yaw", Axis::Z),
        ])
    }

    /// The omega, phi, kappa convention used by Pix4D.
    ///
    /// Kappa (around Z) is applied first, then phi (around Y), then omega (around X), all
    /// counter-clockwise.
    #[doc(alias = "opk")]
    #[must_use]
    pub fn pix4d_omega_phi_kappa() -> Self {
        Self::new([
            ElementalRotationDefinition::counter_clockwise("Kappa", Axis::Z),
            ElementalRotationDefinition::counter_clockwise("Phi", Axis::Y),
            ElementalRotationDefinition::counter_clockwise("Omega", Axis::X),
        ])
    }

    #[must_use]
    pub fn angles_in_order_applied(&self) -> &[ElementalRotationDefinition; 3] {
        &self.angles_in_order_applied
    }

    #[must_use]
    pub fn first(&self) -> &ElementalRotationDefinition {
        &self.angles_in_order_applied[0]
    }

    #[must_use]
    pub fn second(&self) -> &ElementalRotationDefinition {
        &self.angles_in_order_applied[1]
    }

    #[must_use]
    pub fn last(&self) -> &ElementalRotationDefinition {
        &self.angles_in_order_applied[2]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementalRotationDefinition> {
        self.angles_in_order_applied.iter()
    }

    /// Whether every camera axis is used exactly once (true Tait-Bryan rather than Euler).
    #[must_use]
    pub fn has_distinct_axes(&self) -> bool {
        let [a, b, c] = self.angles_in_order_applied.each_ref().map(|d| d.axis);
        a != b && b != c && a != c
    }

    /// Pairs each angle with its definition, in application order.
    ///
    /// `angles` must be given in the same order as the definitions, ie first-applied first.
    pub fn pair_with<'a>(
        &'a self,
        angles: [Angle; 3],
    ) -> [(Angle, &'a ElementalRotationDefinition); 3] {
        let [first, second, last] = angles;
        [
            (first, self.first()),
            (second, self.second()),
            (last, self.last()),
        ]
    }

    /// Computes the camera-to-world rotation for the given angles under this convention.
    ///
    /// See [`rotation::compute_rotation`].
    #[must_use]
    pub fn camera_to_world(&self, angles: [Angle; 3], world: Option<&WorldSystem>) -> CameraToWorld {
        rotation::compute_rotation(self.pair_with(angles), world)
    }
}

impl TryFrom<Vec<ElementalRotationDefinition>> for TaitBryanAnglesDefinition {
    type Error = Error;

    fn try_from(definitions: Vec<ElementalRotationDefinition>) -> Result<Self> {
        let len = definitions.len();
        let angles_in_order_applied: [ElementalRotationDefinition; 3] = definitions
            .try_into()
            .map_err(|_| Error::InvalidSequenceLength { len })?;
        Ok(Self::new(angles_in_order_applied))
    }
}

impl From<TaitBryanAnglesDefinition> for Vec<ElementalRotationDefinition> {
    fn from(definition: TaitBryanAnglesDefinition) -> Self {
        definition.angles_in_order_applied.into()
    }
}

impl Display for TaitBryanAnglesDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [first, second, last] = &self.angles_in_order_applied;
        write!(f, "{} -> {} -> {}", first.name, second.name, last.name)
    }
}
