#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    /// Cubic deceleration: fast start, gentle landing.
    Power3Out,
}

impl Ease {
    /// Maps linear progress in `[0, 1]` to eased progress. Inputs outside
    /// the range are clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power3Out => 1.0 - (1.0 - t).powi(3),
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power3Out
    }
}
