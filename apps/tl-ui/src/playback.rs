//! Frame cursor for the chart animation.

/// Seconds between frames while playing.
pub const FRAME_DURATION_S: f64 = 0.02;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playback {
    frame: usize,
    playing: bool,
    next_step_at: f64,
}

impl Playback {
    /// Rewind to the first frame and start playing.
    pub fn restart(&mut self, now: f64) {
        self.frame = 0;
        self.playing = true;
        self.next_step_at = now + FRAME_DURATION_S;
    }

    /// Resume from the current frame, or from the start if already finished.
    pub fn play(&mut self, now: f64, frame_count: usize) {
        if self.frame + 1 >= frame_count {
            self.restart(now);
        } else {
            self.playing = true;
            self.next_step_at = now + FRAME_DURATION_S;
        }
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Advance at most one frame. Stops on the last frame.
    pub fn tick(&mut self, now: f64, frame_count: usize) {
        if !self.playing || now < self.next_step_at {
            return;
        }
        if self.frame + 1 < frame_count {
            self.frame += 1;
            self.next_step_at = now + FRAME_DURATION_S;
        }
        if self.frame + 1 >= frame_count {
            self.playing = false;
        }
    }
}
