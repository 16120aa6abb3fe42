//! Segment Playback Driver
//!
//! Reveals segments a few per animation frame for the drawn-in effect.
//! A cancellation token is checked once per tick, so a stop request takes
//! effect before the next segment, never mid-segment.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::walk::Segment;

/// Clonable cancellation handle shared between UI controls and the player
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Owns an ordered segment list and a reveal cursor
#[derive(Debug)]
pub struct Player {
    segments: Vec<Segment>,
    revealed: usize,
    cancel: CancelToken,
}

impl Player {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            revealed: 0,
            cancel: CancelToken::new(),
        }
    }

    /// Token to wire to a stop control
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Reveal up to `n` more segments. Returns true while playback should
    /// continue, false once finished or cancelled.
    pub fn tick(&mut self, n: usize) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        self.revealed = (self.revealed + n.max(1)).min(self.segments.len());
        self.revealed < self.segments.len()
    }

    /// Segments revealed so far, in emit order
    pub fn shown(&self) -> &[Segment] {
        &self.segments[..self.revealed]
    }

    pub fn finished(&self) -> bool {
        self.revealed == self.segments.len()
    }

    /// (revealed, total)
    pub fn progress(&self) -> (usize, usize) {
        (self.revealed, self.segments.len())
    }
}
