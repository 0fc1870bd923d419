use serde::{Deserialize, Serialize};

use crate::LayoutError;

/// Geometry and grouping knobs for the path walk.
///
/// Every field has a default, so a partial JSON document deserializes into a
/// complete set of options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    pub center_x: f64,
    pub start_y: f64,
    pub row_spacing: f64,
    pub header_spacing: f64,
    pub x_offset: f64,
    pub reward_offset: f64,
    pub unit_size: usize,
    pub reward_interval: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            start_y: 120.0,
            row_spacing: 150.0,
            header_spacing: 120.0,
            x_offset: 80.0,
            reward_offset: 60.0,
            unit_size: 6,
            reward_interval: 4,
        }
    }
}

impl LayoutOptions {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.unit_size == 0 {
            return Err(LayoutError::new("E1001", "unitSize must be >= 1").with_field("unitSize"));
        }
        if self.reward_interval == 0 {
            return Err(
                LayoutError::new("E1002", "rewardInterval must be >= 1").with_field("rewardInterval")
            );
        }

        for (field, value) in [("centerX", self.center_x), ("startY", self.start_y)] {
            if !value.is_finite() {
                return Err(LayoutError::new("E1101", format!("{field} must be finite")).with_field(field));
            }
        }

        // y must keep increasing and lessons must sit on two distinct sides
        for (field, value) in [
            ("rowSpacing", self.row_spacing),
            ("headerSpacing", self.header_spacing),
            ("xOffset", self.x_offset),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(
                    LayoutError::new("E1102", format!("{field} must be a finite value > 0"))
                        .with_field(field),
                );
            }
        }

        if !(self.reward_offset.is_finite() && self.reward_offset >= 0.0) {
            return Err(
                LayoutError::new("E1103", "rewardOffset must be a finite value >= 0")
                    .with_field("rewardOffset"),
            );
        }
        Ok(())
    }
}
