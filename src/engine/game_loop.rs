//! Game loop timing and control
//!
//! Driven by host timestamps (milliseconds, as delivered by a per-frame
//! callback) rather than by its own clock, so every tick is reproducible from
//! the timestamp sequence alone.
use std::collections::VecDeque;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Game loop timing state
#[derive(Debug)]
pub struct GameLoop {
    /// Timestamp of the previous frame (ms)
    last_timestamp: Option<f64>,

    /// Whether the game is paused
    paused: bool,

    /// Host time spent in paused frames (ms)
    paused_ms: f64,

    /// Frame timing history for FPS calculation (ms)
    frame_times: VecDeque<f64>,

    /// Current frame number
    frame_count: u64,

    /// Total updates executed
    update_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self {
            last_timestamp: None,
            paused: false,
            paused_ms: 0.0,
            frame_times: VecDeque::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            update_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame at `timestamp` (ms).
    ///
    /// Returns the elapsed milliseconds since the previous frame, or `None`
    /// when paused. The first frame reports zero elapsed time. The value is
    /// not clamped here; characters clamp it against their own limits.
    pub fn begin_frame(&mut self, timestamp: f64) -> Option<f32> {
        let elapsed = self
            .last_timestamp
            .map(|last| timestamp - last)
            .unwrap_or(0.0);
        self.last_timestamp = Some(timestamp);
        self.frame_count += 1;

        self.frame_times.push_back(elapsed);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.pop_front();
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        // Paused frames keep the timestamp current so resuming has no gap
        if self.paused {
            self.paused_ms += elapsed;
            return None;
        }

        self.update_count += 1;
        Some(elapsed as f32)
    }

    /// Timestamp of the most recent frame
    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }

    /// Unpaused time of the most recent frame (ms).
    ///
    /// The host timestamp minus every paused interval, so timers measured
    /// against it stand still while the game is paused.
    pub fn game_time(&self) -> f64 {
        self.last_timestamp.unwrap_or(0.0) - self.paused_ms
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total number of frames begun
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of updates executed
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Check if game is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the game
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    /// Resume the game
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            log::info!("Game resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: f64 = self.frame_times.iter().sum();
        let avg_frame_ms = total / self.frame_times.len() as f64;

        self.current_fps = if avg_frame_ms > 0.0 {
            (1000.0 / avg_frame_ms) as f32
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
