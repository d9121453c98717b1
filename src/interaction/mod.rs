//! Pointer interaction: hover highlighting and the shared tooltip.
//!
//! The tooltip is a process-wide, lazily-initialized singleton: one floating
//! element shared by every chart instance, owned by this module and mutated
//! only through `show`/`move`/`hide` operations.

use std::sync::{Mutex, MutexGuard, OnceLock};

use serde::{Deserialize, Serialize};

use crate::error::BarGraphResult;
use crate::render::{RenderOp, Surface};

/// Opacity of non-hovered columns while a bar is active.
pub const DIMMED_COLUMN_OPACITY: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

static TOOLTIP: OnceLock<Mutex<TooltipState>> = OnceLock::new();

fn tooltip() -> MutexGuard<'static, TooltipState> {
    TOOLTIP
        .get_or_init(Mutex::default)
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Snapshot of the shared tooltip.
#[must_use]
pub fn tooltip_state() -> TooltipState {
    tooltip().clone()
}

pub fn show_tooltip(text: &str) {
    let mut state = tooltip();
    state.visible = true;
    state.text = text.to_owned();
}

pub fn move_tooltip(x: f64, y: f64) {
    let mut state = tooltip();
    state.visible = true;
    state.x = x;
    state.y = y;
}

pub fn hide_tooltip() {
    tooltip().visible = false;
}

/// Pointer entered the column at `index`: the active column stays opaque, all
/// siblings dim, and the tooltip shows the caller-formatted text.
pub fn pointer_enter<S: Surface>(
    surface: &mut S,
    index: usize,
    text: &str,
) -> BarGraphResult<()> {
    surface.apply(&[
        RenderOp::SetAllColumnsOpacity {
            opacity: DIMMED_COLUMN_OPACITY,
        },
        RenderOp::SetColumnOpacity {
            index,
            opacity: 1.0,
        },
    ])?;

    show_tooltip(text);
    Ok(())
}

/// Pointer moved while hovering; repositions the tooltip at the pointer.
pub fn pointer_move(x: f64, y: f64) {
    move_tooltip(x, y);
}

/// Pointer left the bar: every column opacity resets and the tooltip hides.
pub fn pointer_leave<S: Surface>(surface: &mut S) -> BarGraphResult<()> {
    surface.apply(&[RenderOp::SetAllColumnsOpacity { opacity: 1.0 }])?;
    hide_tooltip();
    Ok(())
}
