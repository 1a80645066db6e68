// Host-side tests for the start/stop animation driver.

use backdrop_core::{Animate, AnimationDriver, FloatingDecor};

#[derive(Default)]
struct Counter {
    frames: u32,
}

impl Animate for Counter {
    fn frame(&mut self) {
        self.frames += 1;
    }
}

#[test]
fn driver_starts_stopped() {
    let mut driver = AnimationDriver::new(Counter::default());
    assert!(!driver.is_running());
    assert!(!driver.step());
    assert_eq!(driver.animation().frames, 0);
    assert_eq!(driver.frames(), 0);
}

#[test]
fn step_runs_exactly_one_frame_while_running() {
    let mut driver = AnimationDriver::new(Counter::default());
    driver.start();
    assert!(driver.step());
    assert!(driver.step());
    assert_eq!(driver.animation().frames, 2);
    assert_eq!(driver.frames(), 2);
}

#[test]
fn stop_halts_further_frames() {
    let mut driver = AnimationDriver::new(Counter::default());
    driver.start();
    assert_eq!(driver.step_n(5), 5);
    driver.stop();
    assert_eq!(driver.step_n(5), 0);
    assert_eq!(driver.animation().frames, 5);

    driver.start();
    assert_eq!(driver.step_n(3), 3);
    assert_eq!(driver.into_inner().frames, 8);
}

struct Decor(FloatingDecor);

impl Animate for Decor {
    fn frame(&mut self) {
        self.0.advance();
    }
}

#[test]
fn decor_phase_advances_per_frame() {
    let mut driver = AnimationDriver::new(Decor(FloatingDecor::new()));
    driver.start();
    driver.step_n(1000);
    assert!((driver.animation().0.phase() - 1.6).abs() < 1e-3);
}
