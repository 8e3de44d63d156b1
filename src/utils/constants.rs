/// Duration of one nominal ~60 Hz frame. Frame deltas are expressed as
/// multiples of this interval.
pub const REFERENCE_FRAME_MS: f64 = 16.67; // ms

/// Elapsed wall time is clamped here before normalization, so a stalled
/// frame (backgrounded window, debugger pause) cannot produce a catch-up
/// jump.
pub const MAX_FRAME_MS: f64 = 33.0; // ms
