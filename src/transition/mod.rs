//! Time-driven interpolation between two layout states. Endpoints resolve
//! against a reference dimension exactly once, when the transition starts,
//! and stay fixed in flight.

use std::fmt;

use glam::Vec2;

use crate::length::{Length, Length2};

mod time_function;
pub use time_function::TimeFunction;

pub trait Lerp: Copy + fmt::Debug + Default + PartialEq {
    fn lerp(from: Self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

pub trait Resolve: Copy + fmt::Debug {
    type Value: Lerp;
    type Reference: Copy;

    fn resolve(self, reference: Self::Reference) -> Self::Value;
}

impl Resolve for Length {
    type Value = f32;
    type Reference = f32;

    fn resolve(self, reference: f32) -> f32 {
        Length::resolve(self, reference)
    }
}

impl Resolve for Length2 {
    type Value = Vec2;
    type Reference = Vec2;

    fn resolve(self, reference: Vec2) -> Vec2 {
        Length2::resolve(self, reference)
    }
}

pub type Transition1 = Transition<Length>;
pub type Transition2 = Transition<Length2>;

#[derive(Clone, Copy, Debug)]
pub struct Transition<S: Resolve> {
    pub raw_initial: S,
    pub raw_final: S,
    initial: S::Value,
    target: S::Value,
    current_time: f32,
    final_time: f32,
    timing: TimeFunction,
    started: bool,
    from_current: bool,
}

impl<S: Resolve> Transition<S> {
    // Negative durations collapse to instant.
    pub fn new(raw_initial: S, raw_final: S, duration: f32, timing: TimeFunction) -> Self {
        Self {
            raw_initial,
            raw_final,
            initial: S::Value::default(),
            target: S::Value::default(),
            current_time: 0.0,
            final_time: duration.max(0.0),
            timing,
            started: false,
            from_current: false,
        }
    }

    // Starts from the owner's current processed value instead of a raw spec.
    pub fn to(raw_final: S, duration: f32, timing: TimeFunction) -> Self {
        let mut transition = Self::new(raw_final, raw_final, duration, timing);
        transition.from_current = true;
        transition
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_active(&self) -> bool {
        self.final_time > 0.0 && self.current_time < self.final_time
    }

    pub fn start(&mut self, current: S::Value, reference: S::Reference) {
        self.initial = if self.from_current {
            current
        } else {
            self.raw_initial.resolve(reference)
        };
        self.target = self.raw_final.resolve(reference);
        self.current_time = 0.0;
        self.started = true;
        log::trace!(
            "transition start: {:?} -> {:?} over {}s",
            self.initial,
            self.target,
            self.final_time
        );
    }

    // Negative time steps are ignored.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.started || !self.is_active() {
            return false;
        }
        self.current_time = (self.current_time + dt.max(0.0)).min(self.final_time);
        true
    }

    pub fn value(&self) -> S::Value {
        if !self.is_active() {
            return self.target;
        }
        let ratio = (self.current_time / self.final_time).clamp(0.0, 1.0);
        S::Value::lerp(self.initial, self.target, self.timing.sample(ratio))
    }

    pub fn target_value(&self) -> S::Value {
        self.target
    }
}
