//! Deterministic tween timelines sampled by time or by progress.
//!
//! A [`Timeline`] is immutable once built. Each tween captures the pose of
//! its target at its own start time, so sampling is a pure function of
//! `(target, time)` and scrubbing backwards retraces the forward curve.

use crate::easing::Ease;
use crate::transform::{Props, Transform};
use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub target: usize,
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
    pub props: Props,
    from: Transform,
}

impl Tween {
    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    /// Pose the target had when this tween started.
    pub fn start_pose(&self) -> &Transform {
        &self.from
    }

    #[inline]
    fn local(&self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            return if time >= self.start { 1.0 } else { 0.0 };
        }
        ((time - self.start) / self.duration).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct TimelineBuilder {
    bases: FnvHashMap<usize, Transform>,
    tweens: Vec<Tween>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pose of `target` before any tween touches it.
    pub fn base(&mut self, target: usize, pose: Transform) -> &mut Self {
        self.bases.insert(target, pose);
        self
    }

    /// Tween `target` toward `props` over `duration`, starting at the
    /// absolute `position` on this timeline.
    pub fn to(
        &mut self,
        target: usize,
        props: Props,
        duration: f32,
        position: f32,
        ease: Ease,
    ) -> &mut Self {
        self.tweens.push(Tween {
            target,
            start: position.max(0.0),
            duration: duration.max(0.0),
            ease,
            props,
            from: Transform::IDENTITY,
        });
        self
    }

    pub fn duration(&self) -> f32 {
        self.tweens.iter().map(Tween::end).fold(0.0, f32::max)
    }

    /// Append every tween of `other`, rescaled so that its whole duration
    /// spans `[0, span]` on this timeline.
    pub fn track(&mut self, other: &TimelineBuilder, span: f32) -> &mut Self {
        let own = other.duration();
        let factor = if own > 0.0 { span / own } else { 1.0 };
        for (target, pose) in &other.bases {
            self.bases.entry(*target).or_insert(*pose);
        }
        self.tweens.extend(other.tweens.iter().map(|tw| Tween {
            start: tw.start * factor,
            duration: tw.duration * factor,
            ..tw.clone()
        }));
        self
    }

    pub fn build(&self) -> Timeline {
        let mut ordered = self.tweens.clone();
        ordered.sort_by(|a, b| a.start.total_cmp(&b.start));

        let mut tracks: FnvHashMap<usize, SmallVec<[Tween; 4]>> = FnvHashMap::default();
        for tw in ordered {
            tracks.entry(tw.target).or_default().push(tw);
        }
        for (target, track) in tracks.iter_mut() {
            let base = self.bases.get(target).copied().unwrap_or_default();
            for k in 0..track.len() {
                let from = pose_at(base, &track[..k], track[k].start);
                track[k].from = from;
            }
        }

        Timeline {
            bases: self.bases.clone(),
            tracks,
            duration: self.duration(),
        }
    }
}

#[inline]
fn pose_at(base: Transform, tweens: &[Tween], time: f32) -> Transform {
    tweens
        .iter()
        .take_while(|tw| tw.start <= time)
        .fold(base, |pose, tw| {
            pose.blend(&tw.from, &tw.props, tw.ease.apply(tw.local(time)))
        })
}

#[derive(Clone, Debug, Default)]
pub struct Timeline {
    bases: FnvHashMap<usize, Transform>,
    tracks: FnvHashMap<usize, SmallVec<[Tween; 4]>>,
    duration: f32,
}

impl Timeline {
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn tweens_for(&self, target: usize) -> &[Tween] {
        self.tracks.get(&target).map(|t| t.as_slice()).unwrap_or(&[])
    }

    pub fn base(&self, target: usize) -> Transform {
        self.bases.get(&target).copied().unwrap_or_default()
    }

    /// Pose of `target` at `time`. Targets the timeline knows nothing about
    /// stay at the identity transform.
    pub fn sample(&self, target: usize, time: f32) -> Transform {
        let time = if time.is_nan() { 0.0 } else { time };
        pose_at(self.base(target), self.tweens_for(target), time)
    }

    /// Pose of `target` at normalized progress; progress is clamped to
    /// \[0, 1\].
    pub fn sample_progress(&self, target: usize, progress: f32) -> Transform {
        self.sample(target, clamp_progress(progress) * self.duration)
    }
}

#[inline]
pub fn clamp_progress(p: f32) -> f32 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Triangle phase of an endlessly repeating yoyo: rises 0 -> 1 over the
/// first `leg` seconds, falls back over the next, and so on.
pub fn yoyo_phase(elapsed: f32, leg: f32) -> f32 {
    if leg <= 0.0 || !elapsed.is_finite() || elapsed <= 0.0 {
        return 0.0;
    }
    let legs = elapsed / leg;
    let frac = legs.fract();
    if (legs.floor() as u64) % 2 == 0 {
        frac
    } else {
        1.0 - frac
    }
}
