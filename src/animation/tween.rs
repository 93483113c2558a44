use super::ease::Ease;

/// Visual state of an animated element: vertical offset in pixels and opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub y: f64,
    pub opacity: f64,
}

impl Pose {
    pub const RESTING: Pose = Pose { y: 0.0, opacity: 1.0 };

    pub fn hidden(offset: f64) -> Self {
        Pose { y: offset, opacity: 0.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OpacityMode {
    /// Opacity follows the same eased curve as the offset.
    Interpolate,
    /// Opacity jumps to its final value the instant the tween starts.
    SnapOnStart,
}

/// Entrance animation from an offset, transparent pose to the resting pose.
/// Times are in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: Pose,
    pub to: Pose,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
    pub opacity: OpacityMode,
}

impl Tween {
    pub fn entrance(offset: f64, duration: f64) -> Self {
        Tween {
            from: Pose::hidden(offset),
            to: Pose::RESTING,
            duration,
            delay: 0.0,
            ease: Ease::default(),
            opacity: OpacityMode::Interpolate,
        }
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn snap_opacity(mut self) -> Self {
        self.opacity = OpacityMode::SnapOnStart;
        self
    }

    /// Seconds from the tween's own time zero until it settles.
    pub fn end(&self) -> f64 {
        self.delay + self.duration
    }

    /// Pose at `elapsed` seconds. Before the delay runs out the element
    /// holds the from-pose so it never flashes at its resting position.
    pub fn sample(&self, elapsed: f64) -> Pose {
        let local = elapsed - self.delay;
        if local < 0.0 {
            return self.from;
        }

        let progress = if self.duration <= 0.0 {
            1.0
        } else {
            local / self.duration
        };
        let eased = self.ease.apply(progress);

        let opacity = match self.opacity {
            OpacityMode::Interpolate => lerp(self.from.opacity, self.to.opacity, eased),
            OpacityMode::SnapOnStart => self.to.opacity,
        };

        Pose {
            y: lerp(self.from.y, self.to.y, eased),
            opacity,
        }
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.end()
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
