//! Angle entry as done in an interactive viewer: a coarse angle plus a bounded fine adjustment.
//!
//! A viewer typically lets the user type a whole-degree angle and then nudge the camera with a
//! slider. [`AngleControl`] holds both values for one elemental rotation and
//! [`AngleControlPanel`] groups three of them in application order. Neither type observes
//! anything: after changing an input, call [`AngleControlPanel::camera_to_world`] again.

use crate::definition::{ElementalRotationDefinition, TaitBryanAnglesDefinition};
use crate::error::{Error, Result};
use crate::rotation::{self, CameraToWorld};
use crate::world::WorldSystem;
use std::ops::RangeInclusive;
use uom::si::angle::degree;
use uom::si::f64::Angle;

/// Smallest fine adjustment, in degrees.
pub const FINE_ADJUSTMENT_MIN: i32 = -50;

/// Largest fine adjustment, in degrees.
pub const FINE_ADJUSTMENT_MAX: i32 = 50;

const FINE_ADJUSTMENT: RangeInclusive<i32> = FINE_ADJUSTMENT_MIN..=FINE_ADJUSTMENT_MAX;

/// The input state for one elemental rotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AngleControl {
    definition: ElementalRotationDefinition,
    initial: i32,
    add_diff: i32,
}

impl AngleControl {
    /// A control for `definition` with both inputs at zero.
    #[must_use]
    pub fn new(definition: ElementalRotationDefinition) -> Self {
        Self {
            definition,
            initial: 0,
            add_diff: 0,
        }
    }

    #[must_use]
    pub fn definition(&self) -> &ElementalRotationDefinition {
        &self.definition
    }

    /// The label shown next to the inputs, eg `"Yaw: "`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}: ", self.definition.name())
    }

    /// The coarse angle in whole degrees.
    #[must_use]
    pub fn initial(&self) -> i32 {
        self.initial
    }

    /// The fine adjustment in whole degrees, always within
    /// [`FINE_ADJUSTMENT_MIN`]..=[`FINE_ADJUSTMENT_MAX`].
    #[must_use]
    pub fn add_diff(&self) -> i32 {
        self.add_diff
    }

    pub fn set_initial(&mut self, degrees: i32) {
        self.initial = degrees;
    }

    /// Sets the fine adjustment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FineAdjustmentOutOfRange`] and leaves the control unchanged if `degrees`
    /// is outside [-50, 50].
    pub fn set_add_diff(&mut self, degrees: i32) -> Result<()> {
        if !FINE_ADJUSTMENT.contains(&degrees) {
            return Err(Error::FineAdjustmentOutOfRange { value: degrees });
        }
        self.add_diff = degrees;
        Ok(())
    }

    /// Coarse angle plus fine adjustment.
    #[must_use]
    pub fn final_degrees(&self) -> i64 {
        i64::from(self.initial) + i64::from(self.add_diff)
    }

    /// [`AngleControl::final_degrees`] as an [`Angle`].
    #[must_use]
    pub fn final_angle(&self) -> Angle {
        Angle::new::<degree>(self.final_degrees() as f64)
    }
}

/// Three [`AngleControl`]s bound to a [`TaitBryanAnglesDefinition`], in application order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AngleControlPanel {
    angle_applied_first: AngleControl,
    angle_applied_second: AngleControl,
    angle_applied_last: AngleControl,
}

impl AngleControlPanel {
    #[must_use]
    pub fn new(definition: &TaitBryanAnglesDefinition) -> Self {
        Self {
            angle_applied_first: AngleControl::new(definition.first().clone()),
            angle_applied_second: AngleControl::new(definition.second().clone()),
            angle_applied_last: AngleControl::new(definition.last().clone()),
        }
    }

    #[must_use]
    pub fn first(&self) -> &AngleControl {
        &self.angle_applied_first
    }

    #[must_use]
    pub fn second(&self) -> &AngleControl {
        &self.angle_applied_second
    }

    #[must_use]
    pub fn last(&self) -> &AngleControl {
        &self.angle_applied_last
    }

    pub fn first_mut(&mut self) -> &mut AngleControl {
        &mut self.angle_applied_first
    }

    pub fn second_mut(&mut self) -> &mut AngleControl {
        &mut self.angle_applied_second
    }

    pub fn last_mut(&mut self) -> &mut AngleControl {
        &mut self.angle_applied_last
    }

    /// The three controls in application order.
    #[must_use]
    pub fn controls(&self) -> [&AngleControl; 3] {
        [
            &self.angle_applied_first,
            &self.angle_applied_second,
            &self.angle_applied_last,
        ]
    }

    /// Sets the coarse angles of all three controls, in application order.
    pub fn set_initial(&mut self, degrees: [i32; 3]) {
        let [first, second, last] = degrees;
        self.angle_applied_first.set_initial(first);
        self.angle_applied_second.set_initial(second);
        self.angle_applied_last.set_initial(last);
    }

    /// Sets the fine adjustments of all three controls, in application order.
    ///
    /// # Errors
    ///
    /// Fails if any adjustment is out of range, in which case no control is changed.
    pub fn set_add_diff(&mut self, degrees: [i32; 3]) -> Result<()> {
        if let Some(&value) = degrees.iter().find(|d| !FINE_ADJUSTMENT.contains(*d)) {
            return Err(Error::FineAdjustmentOutOfRange { value });
        }
        let [first, second, last] = degrees;
        self.angle_applied_first.set_add_diff(first)?;
        self.angle_applied_second.set_add_diff(second)?;
        self.angle_applied_last.set_add_diff(last)?;
        Ok(())
    }

    /// The final angles in application order.
    #[must_use]
    pub fn final_angles(&self) -> [Angle; 3] {
        self.controls().map(AngleControl::final_angle)
    }

    /// Computes the camera-to-world rotation for the current inputs.
    #[must_use]
    pub fn camera_to_world(&self, world: Option<&WorldSystem>) -> CameraToWorld {
        rotation::compute_rotation(
            self.controls()
                .map(|control| (control.final_angle(), control.definition())),
            world,
        )
    }
}
