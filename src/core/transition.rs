use serde::{Deserialize, Serialize};

/// Duration of one bar enter/update animation.
pub const BAR_TRANSITION_MS: u32 = 800;

/// Per-column stagger step.
pub const STAGGER_DELAY_MS: u32 = 50;

/// Axis fade in/out duration outside of resize passes.
pub const AXIS_FADE_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    CubicOut,
}

impl Easing {
    /// Evaluates the curve at normalized time `t` in `[0, 1]`.
    #[must_use]
    pub fn eval(self, t: f64) -> f64 {
        match self {
            Self::CubicOut => {
                let inverse = 1.0 - t.clamp(0.0, 1.0);
                1.0 - inverse * inverse * inverse
            }
        }
    }
}

/// Fire-and-forget animation description handed to the surface.
///
/// The engine never awaits completion and issues no finished signal; a newer
/// render simply re-targets the same columns with a fresh schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            duration_ms: 0,
            delay_ms: 0,
            easing: Easing::CubicOut,
        }
    }

    /// Axis fade transition; resize passes suppress the duration entirely so
    /// window resizes do not replay entrance animations.
    #[must_use]
    pub fn axis_fade(is_resize: bool) -> Self {
        Self {
            duration_ms: if is_resize { 0 } else { AXIS_FADE_MS },
            delay_ms: 0,
            easing: Easing::CubicOut,
        }
    }

    /// Staggered bar transition for the column at data index `index`.
    ///
    /// `existing_count` is the size of the surviving column set; entering
    /// batches pass it so their stagger continues past every surviving bar.
    /// Update batches pass 0.
    #[must_use]
    pub fn bar_stagger(index: usize, existing_count: usize) -> Self {
        Self {
            duration_ms: BAR_TRANSITION_MS,
            delay_ms: index as u32 * STAGGER_DELAY_MS + stagger_offset_ms(existing_count),
            easing: Easing::CubicOut,
        }
    }
}

/// Uniform extra delay applied to entering columns: `(existing - 1) * 50ms`
/// when any columns survive, zero otherwise.
#[must_use]
pub fn stagger_offset_ms(existing_count: usize) -> u32 {
    let factor = if existing_count > 0 {
        existing_count - 1
    } else {
        existing_count
    };
    factor as u32 * STAGGER_DELAY_MS
}
