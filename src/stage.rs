//! Quantization of the turntable angle into discrete stages.

use std::f32::consts::TAU;

/// A discrete orientation of the showcased model.
///
/// Stages are what the host application actually consumes: each one
/// names an orientation of the model that has associated content. "No
/// stage" is represented as `Option::<Stage>::None`, not as a variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    /// Stage 1.
    One,
    /// Stage 2.
    Two,
    /// Stage 3.
    Three,
    /// Stage 4.
    Four,
}

impl Stage {
    /// The 1-based index of this stage.
    #[inline]
    pub fn number(self) -> u8 {
        match self {
            Stage::One => 1,
            Stage::Two => 2,
            Stage::Three => 3,
            Stage::Four => 4,
        }
    }

    /// The stage with the given 1-based index, if any.
    pub fn from_number(number: u8) -> Option<Stage> {
        match number {
            1 => Some(Stage::One),
            2 => Some(Stage::Two),
            3 => Some(Stage::Three),
            4 => Some(Stage::Four),
            _ => None,
        }
    }
}

/// A closed range of normalized angles selecting one stage.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageBand {
    /// Lower bound of the band, in radians, inclusive.
    pub min: f32,
    /// Upper bound of the band, in radians, inclusive.
    pub max: f32,
    /// The stage selected when the angle falls inside the band.
    pub stage: Stage,
}

impl StageBand {
    /// Whether `angle` falls inside this band. Both bounds are inclusive.
    #[inline]
    pub fn contains(&self, angle: f32) -> bool {
        self.min <= angle && angle <= self.max
    }
}

/// The stage bands of the island model, in evaluation order.
///
/// The bands are disjoint today, but the first match wins, so the order
/// becomes significant if any band is ever widened.
pub const STAGE_BANDS: [StageBand; 4] = [
    StageBand {
        min: 5.45,
        max: 5.85,
        stage: Stage::Four,
    },
    StageBand {
        min: 0.85,
        max: 1.30,
        stage: Stage::Three,
    },
    StageBand {
        min: 2.40,
        max: 2.60,
        stage: Stage::Two,
    },
    StageBand {
        min: 4.25,
        max: 4.75,
        stage: Stage::One,
    },
];

/// Maps an unbounded angle to its equivalent in `[0, 2π)`.
///
/// The turntable accumulates rotation across full turns without ever
/// wrapping its stored angle, so this runs only at classification time.
#[inline]
pub fn normalize(angle: f32) -> f32 {
    ((angle % TAU) + TAU) % TAU
}

/// Classifies a normalized angle against [`STAGE_BANDS`].
pub fn classify(normalized: f32) -> Option<Stage> {
    STAGE_BANDS
        .iter()
        .find(|band| band.contains(normalized))
        .map(|band| band.stage)
}
