use web_sys::HtmlElement;

use super::timeline::Timeline;
use super::tween::Pose;

/// Something a pose can be written to and later reverted.
pub trait StyleTarget {
    fn apply(&self, pose: Pose);
    fn revert(&self);
}

impl StyleTarget for HtmlElement {
    fn apply(&self, pose: Pose) {
        let style = self.style();
        let _ = style.set_property("transform", &format!("translate3d(0px, {:.2}px, 0px)", pose.y));
        let _ = style.set_property("opacity", &format!("{:.3}", pose.opacity));
    }

    fn revert(&self) {
        let style = self.style();
        let _ = style.remove_property("transform");
        let _ = style.remove_property("opacity");
    }
}

/// Plays a timeline over a set of targets. The context owns the inline
/// styles it writes and removes them when dropped, so tearing down a page
/// or wizard step can never leave a stale or doubled animation behind.
pub struct AnimationContext<T: StyleTarget> {
    timeline: Timeline,
    targets: Vec<(usize, T)>,
    started_at: Option<f64>,
    finished: bool,
}

impl<T: StyleTarget> AnimationContext<T> {
    /// `targets` pairs each element with the timeline index it plays. The
    /// starting pose is written immediately.
    pub fn new(timeline: Timeline, targets: Vec<(usize, T)>) -> Self {
        let context = AnimationContext {
            timeline,
            targets,
            started_at: None,
            finished: false,
        };
        context.render(0.0);
        context
    }

    /// Advances to the wall-clock time `now_ms`. The first tick pins the
    /// timeline's zero. Returns whether the timeline is still running.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.finished {
            return false;
        }
        let started_at = *self.started_at.get_or_insert(now_ms);
        let elapsed = ((now_ms - started_at) / 1000.0).max(0.0);
        self.render(elapsed);
        self.finished = self.timeline.is_finished(elapsed);
        !self.finished
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn render(&self, time: f64) {
        for (index, pose) in self.timeline.sample(time) {
            for (_, target) in self.targets.iter().filter(|(i, _)| *i == index) {
                target.apply(pose);
            }
        }
    }
}

impl<T: StyleTarget> Drop for AnimationContext<T> {
    fn drop(&mut self) {
        for (_, target) in &self.targets {
            target.revert();
        }
    }
}

/// A context together with the timer handle `H` that drives it. The handle
/// is handed back as soon as the timeline finishes, or on [`Playback::stop`],
/// so the caller can drop it outside any borrow of the playback.
pub struct Playback<T: StyleTarget, H> {
    context: AnimationContext<T>,
    ticker: Option<H>,
}

impl<T: StyleTarget, H> Playback<T, H> {
    pub fn new(context: AnimationContext<T>) -> Self {
        Playback { context, ticker: None }
    }

    /// Keeps `ticker` alive while the timeline runs. A finished timeline
    /// gives it straight back.
    pub fn attach(&mut self, ticker: H) -> Option<H> {
        if self.context.is_finished() {
            return Some(ticker);
        }
        self.ticker.replace(ticker)
    }

    /// Renders the frame at `now_ms`. Returns the ticker on the frame that
    /// finishes the timeline and `None` otherwise.
    pub fn frame(&mut self, now_ms: f64) -> Option<H> {
        if self.context.tick(now_ms) {
            None
        } else {
            self.ticker.take()
        }
    }

    pub fn stop(&mut self) -> Option<H> {
        self.ticker.take()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::tween::Tween;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorded {
        poses: Vec<Pose>,
        reverts: usize,
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Recorded>>);

    impl Recorder {
        fn last(&self) -> Option<Pose> {
            self.0.borrow().poses.last().copied()
        }

        fn reverts(&self) -> usize {
            self.0.borrow().reverts
        }
    }

    impl StyleTarget for Recorder {
        fn apply(&self, pose: Pose) {
            self.0.borrow_mut().poses.push(pose);
        }

        fn revert(&self) {
            self.0.borrow_mut().reverts += 1;
        }
    }

    fn reveal_context(count: usize) -> (AnimationContext<Recorder>, Vec<Recorder>) {
        let recorders: Vec<Recorder> = (0..count).map(|_| Recorder::default()).collect();
        let timeline = Timeline::staggered(count, 0.15, Tween::entrance(60.0, 0.8).snap_opacity());
        let targets = recorders.iter().cloned().enumerate().collect();
        (AnimationContext::new(timeline, targets), recorders)
    }

    #[test]
    fn writes_starting_pose_on_creation() {
        let (_context, recorders) = reveal_context(3);
        assert_eq!(recorders[0].last(), Some(Pose { y: 60.0, opacity: 1.0 }));
        assert_eq!(recorders[1].last(), Some(Pose::hidden(60.0)));
        assert_eq!(recorders[2].last(), Some(Pose::hidden(60.0)));
    }

    #[test]
    fn ticks_relative_to_first_frame() {
        let (mut context, recorders) = reveal_context(2);
        assert!(context.tick(5_000.0));
        assert_eq!(recorders[1].last(), Some(Pose::hidden(60.0)));

        assert!(context.tick(5_150.0));
        assert_eq!(recorders[1].last().map(|p| p.opacity), Some(1.0));

        assert!(!context.tick(6_000.0));
        assert!(context.is_finished());
        assert_eq!(recorders[0].last(), Some(Pose::RESTING));
        assert_eq!(recorders[1].last(), Some(Pose::RESTING));

        let writes = recorders[0].0.borrow().poses.len();
        assert!(!context.tick(7_000.0));
        assert_eq!(recorders[0].0.borrow().poses.len(), writes);
    }

    #[test]
    fn drop_reverts_every_target_once() {
        let (mut context, recorders) = reveal_context(5);
        context.tick(0.0);
        context.tick(100.0);
        assert!(recorders.iter().all(|r| r.reverts() == 0));

        drop(context);
        assert!(recorders.iter().all(|r| r.reverts() == 1));
    }

    /// Stands in for a timer handle; counts how often it has been dropped.
    struct Handle(Rc<RefCell<usize>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            *self.0.borrow_mut() += 1;
        }
    }

    #[test]
    fn ticker_is_released_on_the_finishing_frame() {
        let (context, _recorders) = reveal_context(2);
        let dropped = Rc::new(RefCell::new(0));
        let mut playback = Playback::new(context);
        assert!(playback.attach(Handle(dropped.clone())).is_none());
        assert!(playback.is_ticking());

        assert!(playback.frame(0.0).is_none());
        assert!(playback.frame(500.0).is_none());
        assert!(playback.is_ticking());

        let released = playback.frame(1_000.0);
        assert!(released.is_some());
        assert!(!playback.is_ticking());
        drop(released);
        assert_eq!(*dropped.borrow(), 1);

        assert!(playback.frame(2_000.0).is_none());
        assert!(playback.stop().is_none());
        assert_eq!(*dropped.borrow(), 1);
    }

    #[test]
    fn stopping_early_keeps_styles_until_the_context_drops() {
        let (context, recorders) = reveal_context(3);
        let dropped = Rc::new(RefCell::new(0));
        let mut playback = Playback::new(context);
        playback.attach(Handle(dropped.clone()));
        playback.frame(0.0);

        drop(playback.stop());
        assert_eq!(*dropped.borrow(), 1);
        assert!(recorders.iter().all(|r| r.reverts() == 0));

        drop(playback);
        assert!(recorders.iter().all(|r| r.reverts() == 1));
    }

    #[test]
    fn finished_context_refuses_a_ticker() {
        let (mut context, _recorders) = reveal_context(1);
        context.tick(0.0);
        context.tick(1_000.0);
        let mut playback = Playback::new(context);
        let dropped = Rc::new(RefCell::new(0));
        assert!(playback.attach(Handle(dropped)).is_some());
        assert!(!playback.is_ticking());
    }

    #[test]
    fn missing_targets_are_skipped() {
        let recorder = Recorder::default();
        let timeline = Timeline::staggered(3, 0.3, Tween::entrance(60.0, 1.0));
        let mut context = AnimationContext::new(timeline, vec![(2, recorder.clone())]);
        assert!(context.tick(0.0));
        assert_eq!(recorder.0.borrow().poses.len(), 2);
        assert_eq!(recorder.last(), Some(Pose::hidden(60.0)));
    }
}
