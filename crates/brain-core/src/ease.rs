//! Easing curves used by the intro timeline and the control panel.
//!
//! The names follow the usual Penner families; the doc on each variant gives
//! the "PowerN" alias used by tweening libraries so timings can be compared
//! one-to-one with motion specs.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Power1.easeIn
    QuadIn,
    /// Power1.easeInOut
    QuadInOut,
    /// Power2.easeIn
    CubicIn,
    /// Power4.easeIn
    QuintIn,
    /// Power4.easeInOut
    QuintInOut,
    /// Power4.easeOut
    QuintOut,
    ExpoInOut,
}

impl Ease {
    /// Map normalized time `t` to eased progress. Input is clamped to [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadIn => t * t,
            Ease::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) * 0.5
                }
            }
            Ease::CubicIn => t * t * t,
            Ease::QuintIn => t.powi(5),
            Ease::QuintInOut => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(5) * 0.5
                }
            }
            Ease::QuintOut => 1.0 - (1.0 - t).powi(5),
            Ease::ExpoInOut => expo_in_out(t),
        }
    }
}

// Matches the shader-side easeExpoInOut so CPU previews agree with the GPU.
#[inline]
fn expo_in_out(t: f32) -> f32 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else if t < 0.5 {
        0.5 * 2f32.powf(20.0 * t - 10.0)
    } else {
        1.0 - 0.5 * 2f32.powf(-20.0 * t + 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::QuadIn,
        Ease::QuadInOut,
        Ease::CubicIn,
        Ease::QuintIn,
        Ease::QuintInOut,
        Ease::QuintOut,
        Ease::ExpoInOut,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for e in ALL {
            assert!(e.apply(0.0).abs() < 1e-6, "{e:?} at 0");
            assert!((e.apply(1.0) - 1.0).abs() < 1e-6, "{e:?} at 1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for e in ALL {
            let mut prev = e.apply(0.0);
            for i in 1..=200 {
                let v = e.apply(i as f32 / 200.0);
                assert!(v + 1e-6 >= prev, "{e:?} dipped at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Ease::QuadIn.apply(-3.0), 0.0);
        assert_eq!(Ease::QuintOut.apply(7.0), 1.0);
    }

    #[test]
    fn quint_in_lags_cubic_in() {
        assert!((Ease::QuintIn.apply(0.5) - 0.03125).abs() < 1e-6);
        for i in 1..10 {
            let t = i as f32 / 10.0;
            assert!(Ease::QuintIn.apply(t) < Ease::CubicIn.apply(t));
        }
    }
}
