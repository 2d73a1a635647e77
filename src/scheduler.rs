//! Cooperative task scheduler.
//!
//! Every registered task is resumed exactly once per `tick`, in insertion
//! order.  A task yields by returning from `step`; whatever it needs to
//! remember across ticks lives in its own struct.  Tasks spawned during a
//! tick are parked in the `Spawner` and only join the live list after the
//! whole pass finished, so they first run on the following tick.
//!
//! Panics raised inside `step` are not caught: tasks are trusted code.

/// What a task reports after being resumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Resume me again next tick.
    Continue,
    /// Natural end; drop me after this tick.
    Done,
}

/// A resumable unit of animated behaviour advanced once per tick.
pub trait Task<C> {
    fn step(&mut self, ctx: &mut C, spawner: &mut Spawner<C>) -> Step;
}

/// Collects tasks registered while a tick is in progress.
pub struct Spawner<C> {
    pending: Vec<Box<dyn Task<C>>>,
}

impl<C> Spawner<C> {
    fn new() -> Self {
        Self { pending: Vec::new() }
    }

    pub fn spawn(&mut self, task: impl Task<C> + 'static) {
        self.pending.push(Box::new(task));
    }
}

pub struct Scheduler<C> {
    tasks: Vec<Box<dyn Task<C>>>,
}

impl<C> Default for Scheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Scheduler<C> {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Enqueue a task; it runs from the next `tick` on.
    pub fn register(&mut self, task: impl Task<C> + 'static) {
        self.tasks.push(Box::new(task));
    }

    /// Resume every live task once.  Returns how many tasks finished.
    pub fn tick(&mut self, ctx: &mut C) -> usize {
        let mut spawner = Spawner::new();
        let snapshot = std::mem::take(&mut self.tasks);
        let before = snapshot.len();

        for mut task in snapshot {
            if task.step(ctx, &mut spawner) == Step::Continue {
                self.tasks.push(task);
            }
        }
        let finished = before - self.tasks.len();

        self.tasks.append(&mut spawner.pending);
        finished
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Counts down a fixed number of ticks.
///
/// `tick` returns `true` while the wait is still running, so a task that
/// must pause N ticks keeps returning `Step::Continue` until it reports
/// `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sleep {
    remaining: u32,
}

impl Sleep {
    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    pub fn is_over(&self) -> bool {
        self.remaining == 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}
