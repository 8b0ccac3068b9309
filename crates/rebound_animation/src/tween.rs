//! Duration-based value tweens
//!
//! A [`Tween`] interpolates one f64 value from `from` to `to` over a fixed
//! duration, shaped by an [`Easing`] curve. It has no clock of its own: the
//! host advances it with `tick(dt_ms)` once per frame and reads `value()`.

use crate::easing::Easing;

/// A single animated value
#[derive(Clone, Debug)]
pub struct Tween {
    from: f64,
    to: f64,
    duration_ms: f32,
    easing: Easing,
    current_time: f32,
    playing: bool,
}

impl Tween {
    /// Create a tween; call [`start`](Self::start) to begin playback.
    ///
    /// Durations below one millisecond are raised to one so progress is
    /// always well-defined.
    pub fn new(from: f64, to: f64, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(1.0),
            easing,
            current_time: 0.0,
            playing: false,
        }
    }

    pub fn start(&mut self) {
        self.current_time = 0.0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// True once the full duration has elapsed
    pub fn is_finished(&self) -> bool {
        self.current_time >= self.duration_ms
    }

    pub fn progress(&self) -> f32 {
        (self.current_time / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Get the current interpolated value
    pub fn value(&self) -> f64 {
        let eased = self.easing.apply(self.progress()) as f64;
        self.from + (self.to - self.from) * eased
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Advance the animation by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.current_time += dt_ms;

        if self.current_time >= self.duration_ms {
            self.current_time = self.duration_ms;
            self.playing = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_reaches_target_exactly() {
        let mut tween = Tween::new(-120.0, 0.0, 300.0, Easing::EaseOutQuad);
        tween.start();
        assert_eq!(tween.value(), -120.0);

        // 60fps frames until done
        while tween.is_playing() {
            tween.tick(1000.0 / 60.0);
        }

        assert!(tween.is_finished());
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn test_tween_not_advancing_before_start() {
        let mut tween = Tween::new(10.0, 0.0, 100.0, Easing::Linear);
        tween.tick(50.0);
        assert_eq!(tween.value(), 10.0);
        assert!(!tween.is_finished());
    }

    #[test]
    fn test_decelerating_midpoint_past_half() {
        let mut tween = Tween::new(100.0, 0.0, 200.0, Easing::EaseOutQuad);
        tween.start();
        tween.tick(100.0);
        // More than half the distance covered at half time
        assert!(tween.value() < 50.0);
        assert!(tween.value() > 0.0);
    }

    #[test]
    fn test_overshooting_tick_clamps() {
        let mut tween = Tween::new(0.0, 1.0, 16.0, Easing::Linear);
        tween.start();
        tween.tick(1000.0);
        assert_eq!(tween.progress(), 1.0);
        assert_eq!(tween.value(), 1.0);
        assert!(!tween.is_playing());
    }

    #[test]
    fn test_zero_duration_clamped_to_one_ms() {
        let mut tween = Tween::new(5.0, 0.0, 0.0, Easing::Linear);
        tween.start();
        assert_eq!(tween.duration_ms(), 1.0);
        tween.tick(1.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 0.0);
    }
}
