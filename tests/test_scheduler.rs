use space_garbage::scheduler::*;

/// Context shared by the test tasks: a log of who ran.
type Trace = Vec<String>;

struct Named {
    name: &'static str,
    runs_left: u32,
}

impl Task<Trace> for Named {
    fn step(&mut self, trace: &mut Trace, _spawner: &mut Spawner<Trace>) -> Step {
        trace.push(self.name.to_string());
        self.runs_left -= 1;
        if self.runs_left == 0 {
            Step::Done
        } else {
            Step::Continue
        }
    }
}

/// Registers a copy of itself every time it runs.
struct Breeder {
    generation: u32,
}

impl Task<Trace> for Breeder {
    fn step(&mut self, trace: &mut Trace, spawner: &mut Spawner<Trace>) -> Step {
        trace.push(format!("gen{}", self.generation));
        spawner.spawn(Breeder {
            generation: self.generation + 1,
        });
        Step::Done
    }
}

/// Waits a number of ticks, then records itself once.
struct Sleeper {
    sleep: Sleep,
}

impl Task<Trace> for Sleeper {
    fn step(&mut self, trace: &mut Trace, _spawner: &mut Spawner<Trace>) -> Step {
        if self.sleep.tick() {
            return Step::Continue;
        }
        trace.push("woke".to_string());
        Step::Done
    }
}

// ── tick ──────────────────────────────────────────────────────────────────────

#[test]
fn tick_runs_tasks_in_insertion_order() {
    let mut scheduler = Scheduler::new();
    scheduler.register(Named { name: "a", runs_left: 5 });
    scheduler.register(Named { name: "b", runs_left: 5 });
    scheduler.register(Named { name: "c", runs_left: 5 });

    let mut trace = Trace::new();
    scheduler.tick(&mut trace);
    scheduler.tick(&mut trace);
    assert_eq!(trace, ["a", "b", "c", "a", "b", "c"]);
}

#[test]
fn finished_tasks_are_dropped_after_the_tick() {
    let mut scheduler = Scheduler::new();
    scheduler.register(Named { name: "short", runs_left: 1 });
    scheduler.register(Named { name: "long", runs_left: 3 });

    let mut trace = Trace::new();
    assert_eq!(scheduler.tick(&mut trace), 1);
    assert_eq!(scheduler.len(), 1);
    scheduler.tick(&mut trace);
    assert_eq!(scheduler.tick(&mut trace), 1);
    assert!(scheduler.is_empty());
    assert_eq!(trace, ["short", "long", "long", "long"]);
}

#[test]
fn spawned_task_waits_for_next_tick() {
    let mut scheduler = Scheduler::new();
    scheduler.register(Breeder { generation: 0 });

    let mut trace = Trace::new();
    scheduler.tick(&mut trace);
    // The child exists but did not run in the same tick
    assert_eq!(trace, ["gen0"]);
    assert_eq!(scheduler.len(), 1);

    scheduler.tick(&mut trace);
    scheduler.tick(&mut trace);
    assert_eq!(trace, ["gen0", "gen1", "gen2"]);
}

#[test]
fn spawned_tasks_run_after_existing_ones() {
    let mut scheduler = Scheduler::new();
    scheduler.register(Breeder { generation: 0 });
    scheduler.register(Named { name: "steady", runs_left: 10 });

    let mut trace = Trace::new();
    scheduler.tick(&mut trace);
    scheduler.tick(&mut trace);
    assert_eq!(trace, ["gen0", "steady", "steady", "gen1"]);
}

#[test]
fn empty_scheduler_ticks_quietly() {
    let mut scheduler: Scheduler<Trace> = Scheduler::default();
    let mut trace = Trace::new();
    assert_eq!(scheduler.tick(&mut trace), 0);
    assert!(trace.is_empty());
}

#[test]
#[should_panic(expected = "task fault")]
fn task_panics_are_not_caught() {
    struct Faulty;
    impl Task<Trace> for Faulty {
        fn step(&mut self, _: &mut Trace, _: &mut Spawner<Trace>) -> Step {
            panic!("task fault");
        }
    }

    let mut scheduler = Scheduler::new();
    scheduler.register(Faulty);
    scheduler.tick(&mut Trace::new());
}

// ── Sleep ─────────────────────────────────────────────────────────────────────

#[test]
fn sleep_yields_exactly_n_ticks() {
    let mut scheduler = Scheduler::new();
    scheduler.register(Sleeper { sleep: Sleep::new(3) });

    let mut trace = Trace::new();
    for _ in 0..3 {
        scheduler.tick(&mut trace);
        assert!(trace.is_empty());
    }
    scheduler.tick(&mut trace);
    assert_eq!(trace, ["woke"]);
    assert!(scheduler.is_empty());
}

#[test]
fn zero_sleep_is_already_over() {
    let mut sleep = Sleep::new(0);
    assert!(sleep.is_over());
    assert!(!sleep.tick());
    assert_eq!(sleep.remaining(), 0);
}
