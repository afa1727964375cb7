use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config::FRAME_INTERVAL_MS;

/// Linear 0 → `target` interpolation over `duration_ms` of wall-clock time.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: u64,
    duration_ms: u64,
    started_at: Option<i64>,
    current: u64,
}

impl CountUp {
    pub fn new(target: u64, duration_ms: u64) -> Self {
        debug_assert!(duration_ms > 0, "count-up duration must be positive");
        Self {
            target,
            duration_ms,
            started_at: None,
            current: 0,
        }
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.has_started() && self.current < self.target
    }

    /// Rising edge of the start signal. Later calls are no-ops.
    pub fn start(&mut self, now_ms: i64) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now_ms);
        true
    }

    /// Recomputes the displayed value for `now_ms`. Never decreases and
    /// never passes `target`.
    pub fn sample(&mut self, now_ms: i64) -> u64 {
        let Some(started_at) = self.started_at else {
            return self.current;
        };
        let elapsed = now_ms.saturating_sub(started_at).max(0) as u64;
        let value = if elapsed >= self.duration_ms {
            self.target
        } else {
            (u128::from(self.target) * u128::from(elapsed) / u128::from(self.duration_ms)) as u64
        };
        self.current = self.current.max(value);
        self.current
    }
}

pub enum CountUpAction {
    Start(i64),
    Sample(i64),
}

impl Reducible for CountUp {
    type Action = CountUpAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CountUpAction::Start(now) => {
                if !next.start(now) {
                    return self;
                }
                debug!("count-up to {} started", next.target);
                next.sample(now);
            }
            CountUpAction::Sample(now) => {
                next.sample(now);
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Animated counter. Stays at 0 until `start` first turns `true`, then climbs
/// to `target` over `duration_ms`. The frame timer lives only while the
/// count is running.
#[hook]
pub fn use_count_up(target: u64, duration_ms: u64, start: bool) -> u64 {
    let counter = use_reducer(move || CountUp::new(target, duration_ms));

    {
        let dispatcher = counter.dispatcher();
        use_effect_with_deps(
            move |start| {
                if *start {
                    dispatcher.dispatch(CountUpAction::Start(Utc::now().timestamp_millis()));
                }
                || ()
            },
            start,
        );
    }

    {
        let dispatcher = counter.dispatcher();
        use_effect_with_deps(
            move |running| {
                let frames = running.then(|| {
                    Interval::new(FRAME_INTERVAL_MS, move || {
                        dispatcher.dispatch(CountUpAction::Sample(Utc::now().timestamp_millis()));
                    })
                });
                move || drop(frames)
            },
            counter.is_running(),
        );
    }

    counter.current()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_until_started() {
        let mut counter = CountUp::new(150, 2000);
        assert_eq!(counter.sample(10_000), 0);
        assert!(!counter.is_running());
    }

    #[test]
    fn reaches_target_exactly_at_duration() {
        let mut counter = CountUp::new(150, 2000);
        counter.start(1_000);
        assert_eq!(counter.sample(1_000), 0);
        let midway = counter.sample(2_000);
        assert!(midway <= 150);
        assert_eq!(midway, 75);
        assert_eq!(counter.sample(3_000), 150);
        assert_eq!(counter.sample(60_000), 150);
        assert!(!counter.is_running());
    }

    #[test]
    fn floors_intermediate_values() {
        let mut counter = CountUp::new(3, 2000);
        counter.start(0);
        assert_eq!(counter.sample(666), 0);
        assert_eq!(counter.sample(667), 1);
        assert_eq!(counter.sample(1999), 2);
        assert_eq!(counter.sample(2000), 3);
    }

    #[test]
    fn never_decreases_even_if_the_clock_jumps_back() {
        let mut counter = CountUp::new(500, 2000);
        counter.start(0);
        let before = counter.sample(1500);
        assert_eq!(counter.sample(200), before);
        assert_eq!(counter.sample(-5_000), before);
    }

    #[test]
    fn samples_are_monotonic_and_bounded() {
        let mut counter = CountUp::new(977, 1300);
        counter.start(42);
        let mut last = 0;
        for t in (42..2_000).step_by(7) {
            let value = counter.sample(t);
            assert!(value >= last);
            assert!(value <= 977);
            last = value;
        }
        assert_eq!(last, 977);
    }

    #[test]
    fn second_start_keeps_the_first_origin() {
        let mut counter = CountUp::new(100, 1000);
        assert!(counter.start(0));
        assert!(!counter.start(900));
        assert_eq!(counter.sample(1000), 100);
    }

    #[test]
    fn zero_target_is_done_as_soon_as_it_starts() {
        let mut counter = CountUp::new(0, 1000);
        counter.start(0);
        assert_eq!(counter.sample(0), 0);
        assert!(counter.has_started());
        assert!(!counter.is_running());
    }

    #[test]
    fn reducer_ignores_repeated_start() {
        let counter = Rc::new(CountUp::new(50, 1000));
        let started = counter.clone().reduce(CountUpAction::Start(0));
        assert!(started.has_started());
        let again = started.clone().reduce(CountUpAction::Start(500));
        assert!(Rc::ptr_eq(&started, &again));
        let done = again.reduce(CountUpAction::Sample(1000));
        assert_eq!(done.current(), 50);
    }

    #[test]
    fn stats_row_counters_run_independently() {
        let targets = [500, 100, 50, 3];
        let mut counters: Vec<CountUp> = targets.iter().map(|&t| CountUp::new(t, 2000)).collect();
        // Each card is scrolled into view at the same instant by its own detector.
        for counter in &mut counters {
            counter.start(10_000);
        }
        let midway: Vec<u64> = counters.iter_mut().map(|c| c.sample(11_000)).collect();
        assert_eq!(midway, vec![250, 50, 25, 1]);
        let done: Vec<u64> = counters.iter_mut().map(|c| c.sample(12_000)).collect();
        assert_eq!(done, targets.to_vec());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::RefCell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use yew::AppHandle;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct CounterProps {
        seen: Rc<RefCell<Vec<u64>>>,
        start: bool,
    }

    #[function_component]
    fn Counter(props: &CounterProps) -> Html {
        let value = use_count_up(1_000_000, 60_000, props.start);
        props.seen.borrow_mut().push(value);
        html! { <span>{value}</span> }
    }

    fn mount(start: bool) -> (web_sys::Element, Rc<RefCell<Vec<u64>>>, AppHandle<Counter>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let app = yew::Renderer::<Counter>::with_root_and_props(
            root.clone(),
            CounterProps {
                seen: seen.clone(),
                start,
            },
        )
        .render();
        (root, seen, app)
    }

    #[wasm_bindgen_test]
    async fn frames_stop_once_unmounted() {
        let (root, seen, app) = mount(true);

        TimeoutFuture::new(300).await;
        let climbing = seen.borrow().clone();
        assert!(climbing.len() > 2, "renders: {climbing:?}");
        assert!(climbing.windows(2).all(|pair| pair[0] <= pair[1]));

        app.destroy();
        let renders = seen.borrow().len();
        TimeoutFuture::new(300).await;
        assert_eq!(seen.borrow().len(), renders);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn idle_counter_never_ticks() {
        let (root, seen, app) = mount(false);

        TimeoutFuture::new(300).await;
        assert_eq!(*seen.borrow(), vec![0]);

        app.destroy();
        root.remove();
    }
}
