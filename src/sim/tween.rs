//! Time-based value tweens

/// Easing curves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Cubic ease-out: fast start, slow finish
    Power3Out,
}

impl Easing {
    /// Map normalized time [0, 1] to normalized progress [0, 1]
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power3Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

/// Result of advancing a tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenStep {
    pub value: f32,
    /// True on the step that reached the end
    pub finished: bool,
}

/// Interpolates `from` to `to` over `duration` seconds
#[derive(Debug, Clone)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub easing: Easing,
    elapsed: f64,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            elapsed: 0.0,
        }
    }

    /// Normalized time in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration as f64).min(1.0) as f32
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Current value; exactly `to` once finished
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            self.to
        } else {
            self.from + (self.to - self.from) * self.easing.apply(self.progress())
        }
    }

    pub fn advance(&mut self, dt: f32) -> TweenStep {
        let was_finished = self.is_finished();
        self.elapsed += dt as f64;
        // Absorb f32 step rounding at the end
        let duration = self.duration as f64;
        if duration - self.elapsed < 1e-6 {
            self.elapsed = self.elapsed.max(duration);
        }
        TweenStep {
            value: self.value(),
            finished: !was_finished && self.is_finished(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power3_out_endpoints() {
        assert_eq!(Easing::Power3Out.apply(0.0), 0.0);
        assert_eq!(Easing::Power3Out.apply(1.0), 1.0);
        // Decelerating: more than half done at the midpoint
        assert!(Easing::Power3Out.apply(0.5) > 0.8);
    }

    #[test]
    fn test_power3_out_monotonic() {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = Easing::Power3Out.apply(i as f32 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_tween_reaches_target_exactly() {
        let mut tween = Tween::new(1.0, 40.0, 4.0, Easing::Power3Out);
        let mut finishes = 0;
        for _ in 0..480 {
            if tween.advance(1.0 / 120.0).finished {
                finishes += 1;
            }
        }
        assert_eq!(finishes, 1);
        assert_eq!(tween.value(), 40.0);
        // Further steps do not report completion again
        assert!(!tween.advance(0.1).finished);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut tween = Tween::new(0.0, 1.0, 0.0, Easing::Linear);
        assert_eq!(tween.value(), 1.0);
        assert!(!tween.advance(0.0).finished);
    }
}
