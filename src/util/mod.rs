//! Shared utilities for the frame loop.

/// Frame timing, frame-rate cap and periodic FPS reports.
pub mod frame_timing;
