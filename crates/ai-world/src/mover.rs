//! The movement-driver interface and a recording reference implementation.

use ai_core::Vec3;

// ── MoveDriver ────────────────────────────────────────────────────────────────

/// Fire-and-forget path/motion execution.
///
/// A task issues [`go_to`][Self::go_to] once, may adjust the live target
/// with [`retarget`][Self::retarget] on later ticks, and polls
/// [`stuck`][Self::stuck] / [`arrived`][Self::arrived] — the driver sets
/// those flags from its own collision/arrival handling some ticks later,
/// never synchronously inside the request.
///
/// Whatever state a run leaves behind, [`stop`][Self::stop] must release it;
/// tasks call it unconditionally from their finish path.
pub trait MoveDriver {
    /// Begin moving toward `target` at `speed`, finishing within
    /// `arrival_tolerance` of it.  Replaces any in-progress request.
    fn go_to(&mut self, target: Vec3, speed: f32, arrival_tolerance: f32);

    /// Redirect the in-progress request to a new target without resetting
    /// progress.  No-op when idle.
    fn retarget(&mut self, target: Vec3);

    /// Abort the in-progress request and clear the stuck/arrived flags.
    fn stop(&mut self);

    /// Whether a movement request is in progress.
    fn active(&self) -> bool;

    /// Whether the current request has hit an obstruction it cannot route
    /// around.  Cleared by `stop` and by a new `go_to`.
    fn stuck(&self) -> bool;

    /// Whether the current request reached its target.
    fn arrived(&self) -> bool;
}

// ── RecordingMover ────────────────────────────────────────────────────────────

/// What a [`RecordingMover`] saw, in call order.
#[derive(Clone, PartialEq, Debug)]
pub enum MoveEvent {
    GoTo {
        target: Vec3,
        speed: f32,
        tolerance: f32,
    },
    Retarget(Vec3),
    Stop,
}

/// Reference [`MoveDriver`] that executes nothing but records every call
/// and lets a test (or a scripted demo world) set the polled flags.
///
/// The event log is what makes cancel-before-start ordering observable: a
/// preempted task's `Stop` must appear in the log before the replacement's
/// `GoTo`.
#[derive(Default)]
pub struct RecordingMover {
    pub events: Vec<MoveEvent>,
    pub current_target: Option<Vec3>,
    active: bool,
    stuck: bool,
    arrived: bool,
}

impl RecordingMover {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the driver reporting an obstruction on a later tick.
    pub fn set_stuck(&mut self, stuck: bool) {
        self.stuck = stuck;
    }

    /// Simulate the driver reporting arrival on a later tick.
    pub fn set_arrived(&mut self, arrived: bool) {
        self.arrived = arrived;
    }
}

impl MoveDriver for RecordingMover {
    fn go_to(&mut self, target: Vec3, speed: f32, arrival_tolerance: f32) {
        self.events.push(MoveEvent::GoTo {
            target,
            speed,
            tolerance: arrival_tolerance,
        });
        self.current_target = Some(target);
        self.active = true;
        self.stuck = false;
        self.arrived = false;
    }

    fn retarget(&mut self, target: Vec3) {
        if self.active {
            self.events.push(MoveEvent::Retarget(target));
            self.current_target = Some(target);
        }
    }

    fn stop(&mut self) {
        self.events.push(MoveEvent::Stop);
        self.current_target = None;
        self.active = false;
        self.stuck = false;
        self.arrived = false;
    }

    fn active(&self) -> bool {
        self.active
    }

    fn stuck(&self) -> bool {
        self.stuck
    }

    fn arrived(&self) -> bool {
        self.arrived
    }
}
