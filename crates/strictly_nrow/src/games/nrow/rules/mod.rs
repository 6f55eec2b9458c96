//! Game rules for N-in-a-row.
//!
//! This module contains pure functions for evaluating a position. Rules are
//! separated from history storage so they can be used on a bare board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Axis, WinResult, detect_win};
