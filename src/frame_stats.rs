// Frames-per-second counter for the info overlay. Counts frames while enabled
// and publishes the count once a full second has accumulated.

const REFRESH_INTERVAL: f32 = 1.0;

#[derive(Debug, Default)]
pub struct FrameStats {
    enabled: bool,
    elapsed: f32,
    frames: u32,
    fps: Option<u32>,
}

impl FrameStats {
    pub fn new() -> FrameStats {
        FrameStats::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    // Returns the new state. Either way the next tick publishes immediately.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.elapsed = REFRESH_INTERVAL;
        self.enabled
    }

    /// Records one frame. Returns the frame count when a refresh happens.
    pub fn tick(&mut self, elapsed: f32) -> Option<u32> {
        if !self.enabled {
            return None;
        }
        self.elapsed += elapsed;
        self.frames += 1;
        if self.elapsed < REFRESH_INTERVAL {
            return None;
        }
        let fps = self.frames;
        self.fps = Some(fps);
        self.elapsed = 0.0;
        self.frames = 0;
        Some(fps)
    }

    /// Last published count, if any.
    pub fn fps(&self) -> Option<u32> {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_stats_do_not_count() {
        let mut stats = FrameStats::new();
        for _ in 0..100 {
            assert_eq!(stats.tick(0.03), None);
        }
        assert_eq!(stats.fps(), None);
    }

    #[test]
    fn enabling_forces_refresh_on_next_tick() {
        let mut stats = FrameStats::new();
        assert!(stats.toggle());
        assert_eq!(stats.tick(0.03), Some(1));
    }

    #[test]
    fn publishes_once_per_second_and_resets() {
        let mut stats = FrameStats::new();
        stats.toggle();
        stats.tick(0.0);

        for _ in 0..3 {
            assert_eq!(stats.tick(0.25), None);
        }
        assert_eq!(stats.tick(0.25), Some(4));
        assert_eq!(stats.fps(), Some(4));

        assert_eq!(stats.tick(0.5), None);
        assert_eq!(stats.tick(0.5), Some(2));
    }

    #[test]
    fn disabling_keeps_last_value() {
        let mut stats = FrameStats::new();
        stats.toggle();
        stats.tick(0.1);
        assert!(!stats.toggle());
        assert_eq!(stats.tick(5.0), None);
        assert_eq!(stats.fps(), Some(1));
        assert!(!stats.is_enabled());
    }
}
