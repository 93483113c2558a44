use super::tween::{Pose, Tween};

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub target: usize,
    pub start: f64,
    pub tween: Tween,
}

impl Track {
    pub fn sample(&self, time: f64) -> Pose {
        self.tween.sample(time - self.start)
    }

    pub fn end(&self) -> f64 {
        self.start + self.tween.end()
    }
}

/// A set of tweens placed on a shared clock. Each track addresses a target
/// by its index in the list of elements the timeline is played over.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    tracks: Vec<Track>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same tween for `count` consecutive targets, each starting `step`
    /// seconds after the previous one.
    pub fn staggered(count: usize, step: f64, tween: Tween) -> Self {
        (0..count).fold(Self::new(), |timeline, index| {
            timeline.add(index, index as f64 * step, tween)
        })
    }

    pub fn add(mut self, target: usize, start: f64, tween: Tween) -> Self {
        self.tracks.push(Track { target, start, tween });
        self
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn duration(&self) -> f64 {
        self.tracks.iter().map(Track::end).fold(0.0, f64::max)
    }

    pub fn is_finished(&self, time: f64) -> bool {
        self.tracks.iter().all(|track| track.tween.is_finished(time - track.start))
    }

    pub fn sample(&self, time: f64) -> impl Iterator<Item = (usize, Pose)> + '_ {
        self.tracks.iter().map(move |track| (track.target, track.sample(time)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal() -> Timeline {
        Timeline::staggered(5, 0.15, Tween::entrance(60.0, 0.8).snap_opacity())
    }

    #[test]
    fn stagger_offsets_each_target() {
        let timeline = reveal();
        let starts: Vec<f64> = timeline.tracks().iter().map(|t| t.start).collect();
        for (index, start) in starts.iter().enumerate() {
            assert!((start - 0.15 * index as f64).abs() < 1e-9);
        }
        assert_eq!(timeline.tracks()[4].target, 4);
        assert!((timeline.duration() - 1.4).abs() < 1e-9);
    }

    #[test]
    fn blocks_appear_at_their_start_and_before_their_slide_ends() {
        let timeline = reveal();
        for track in timeline.tracks() {
            let start = 0.15 * track.target as f64;
            if track.target > 0 {
                assert_eq!(track.sample(start - 1e-6).opacity, 0.0);
            }
            let first = track.sample(start);
            assert_eq!(first.opacity, 1.0);
            assert!(first.y > 0.0, "slide has not finished when block appears");
            assert_eq!(track.sample(start + 0.8), Pose::RESTING);
        }
    }

    #[test]
    fn reveal_cascades_rather_than_moving_together() {
        let poses: Vec<Pose> = reveal().sample(0.3).map(|(_, pose)| pose).collect();
        assert_eq!(poses.len(), 5);
        // Earlier blocks are further along
        for pair in poses[..3].windows(2) {
            assert!(pair[0].y < pair[1].y);
        }
        assert_eq!(poses[3], Pose::hidden(60.0));
        assert_eq!(poses[4], Pose::hidden(60.0));
    }

    #[test]
    fn empty_timeline_is_finished_immediately() {
        let timeline = Timeline::new();
        assert_eq!(timeline.duration(), 0.0);
        assert!(timeline.is_finished(0.0));
        assert_eq!(timeline.sample(0.0).count(), 0);
    }
}
