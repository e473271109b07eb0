use crate::ease::Ease;

/// A scalar interpolation anchored at an absolute start time (seconds).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: f64,
    pub ease: Ease,
    pub start: f64,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f64, ease: Ease, start: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            ease,
            start,
        }
    }

    #[inline]
    pub fn end_time(&self) -> f64 {
        self.start + self.duration
    }

    /// Normalized, un-eased time in [0, 1].
    #[inline]
    pub fn phase(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0) as f32
    }

    #[inline]
    pub fn sample(&self, now: f64) -> f32 {
        let k = self.ease.apply(self.phase(now));
        self.from + (self.to - self.from) * k
    }

    #[inline]
    pub fn is_done(&self, now: f64) -> bool {
        now >= self.end_time()
    }

    #[inline]
    pub fn rising(&self) -> bool {
        self.to > self.from
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_hits_both_ends() {
        let t = Tween::new(50.0, 320.0, 6.0, Ease::QuadInOut, 10.0);
        assert_eq!(t.sample(0.0), 50.0);
        assert_eq!(t.sample(10.0), 50.0);
        assert!((t.sample(16.0) - 320.0).abs() < 1e-4);
        assert!((t.sample(100.0) - 320.0).abs() < 1e-4);
        assert!(t.is_done(16.0));
        assert!(!t.is_done(15.99));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let t = Tween::new(1.0, 0.5, 0.0, Ease::Linear, 3.0);
        assert_eq!(t.sample(3.0), 0.5);
        assert!(t.is_done(3.0));
    }
}
