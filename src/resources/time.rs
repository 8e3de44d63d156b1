use bevy::prelude::*;
use std::time::Duration;

use crate::utils::{MAX_FRAME_MS, REFERENCE_FRAME_MS};

/// Tracks the normalized frame delta.
///
/// Elapsed wall time is clamped to `max_frame_ms` and then expressed as a
/// multiple of one nominal frame, so `1.0` means the display is running at
/// the reference rate. The physics core takes this value but applies its
/// impulses per call rather than scaling by it; clamping here is what keeps
/// a stalled frame from turning into a teleport.
#[derive(Resource, Debug, Clone)]
pub struct FrameClock {
    max_frame_ms: f64,
    reference_frame_ms: f64,
    normalized_delta: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            max_frame_ms: MAX_FRAME_MS,
            reference_frame_ms: REFERENCE_FRAME_MS,
            normalized_delta: 1.0,
        }
    }
}

impl FrameClock {
    pub fn advance(&mut self, elapsed: Duration) {
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        self.normalized_delta = elapsed_ms.min(self.max_frame_ms) / self.reference_frame_ms;
    }

    pub fn normalized_delta(&self) -> f64 {
        self.normalized_delta
    }
}
