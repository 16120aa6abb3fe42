//! Turtle 2D Walk Engine
//!
//! Interprets an expanded symbol string as turtle commands and emits one
//! line segment per draw action, in command order. The turtle keeps a
//! position, a heading in degrees (accumulated, never normalized), and a
//! LIFO stack of saved (position, heading) pairs for the bracket symbols.

use serde::Serialize;
use thiserror::Error;

use crate::grammar::{Action, Grammar};
use crate::rewrite::{self, Expansion};
use crate::vector::Vec2;

/// Base draw length before per-generation scaling. Negative: screen y
/// grows downward and the shipped curves grow upward from their start
/// positions.
pub const BASE_LENGTH: f64 = -200.0;

/// A single drawn line, consumed in emit order by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WalkError {
    /// A pop symbol was reached with nothing on the state stack.
    /// Continuing would draw from undefined state, so the walk stops.
    #[error("state stack underflow at symbol index {index}: pop without a matching push")]
    UnbalancedStack { index: usize },
}

/// Walk the expanded string and collect segments.
///
/// The heading starts at 0 degrees: the first draw moves toward
/// (0, segment_length) from `start`. Symbols without an action are
/// skipped.
pub fn trace(
    expansion: &Expansion,
    grammar: &Grammar,
    start: Vec2,
) -> Result<Vec<Segment>, WalkError> {
    let mut segments = Vec::new();
    let mut position = start;
    let mut heading = 0.0_f64;
    let mut stack: Vec<(Vec2, f64)> = Vec::new();

    for (index, symbol) in expansion.symbols.chars().enumerate() {
        match grammar.action(symbol) {
            None => {}
            Some(Action::Draw) => {
                let displacement =
                    Vec2::new(0.0, expansion.segment_length).rotate(heading.to_radians());
                let next = position.add(displacement);
                segments.push(Segment {
                    from: position,
                    to: next,
                });
                position = next;
            }
            Some(Action::RotateRight) => heading += grammar.turn_degrees(),
            Some(Action::RotateLeft) => heading -= grammar.turn_degrees(),
            Some(Action::PushState) => stack.push((position, heading)),
            Some(Action::PopState) => {
                let (saved_position, saved_heading) =
                    stack.pop().ok_or(WalkError::UnbalancedStack { index })?;
                position = saved_position;
                heading = saved_heading;
            }
        }
    }

    Ok(segments)
}

/// Expand a grammar and walk the result in one call.
///
/// This is the entry point everything else uses: grammar, generation
/// count, length ratio and start position in, ordered segments out.
pub fn generate_segments(
    grammar: &Grammar,
    generations: u32,
    length_ratio: f64,
    start: Vec2,
) -> Result<Vec<Segment>, WalkError> {
    let expansion = rewrite::expand(grammar, generations, length_ratio, BASE_LENGTH);
    trace(&expansion, grammar, start)
}
