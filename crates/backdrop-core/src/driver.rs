//! Start/stop frame driver.
//!
//! The browser calls back once per display refresh; the driver decides whether
//! that callback actually runs a frame. Keeping the decision here lets tests
//! single-step an animation without any real-time scheduling.

/// Something that advances by one frame at a time.
pub trait Animate {
    fn frame(&mut self);
}

#[derive(Debug)]
pub struct AnimationDriver<A> {
    animation: A,
    running: bool,
    frames: u64,
}

impl<A: Animate> AnimationDriver<A> {
    /// Wrap `animation`. The driver starts stopped.
    pub fn new(animation: A) -> Self {
        Self {
            animation,
            running: false,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames run since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame if started. Returns whether a frame ran.
    pub fn step(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.animation.frame();
        self.frames += 1;
        true
    }

    /// Run up to `n` frames, returning how many ran.
    pub fn step_n(&mut self, n: u64) -> u64 {
        let mut ran = 0;
        for _ in 0..n {
            if !self.step() {
                break;
            }
            ran += 1;
        }
        ran
    }

    pub fn animation(&self) -> &A {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut A {
        &mut self.animation
    }

    pub fn into_inner(self) -> A {
        self.animation
    }
}
