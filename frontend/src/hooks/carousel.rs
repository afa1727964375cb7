use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Maps any signed index onto `0..len`.
pub fn wrap_index(index: i64, len: usize) -> usize {
    debug_assert!(len > 0, "carousel needs at least one item");
    let len = len as i64;
    (((index % len) + len) % len) as usize
}

/// Cyclic slide index with an autoplay schedule. `next_due` is the instant
/// of the next automatic advance, or `None` while paused.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    current: usize,
    paused: bool,
    interval_ms: i64,
    next_due: Option<i64>,
}

impl Carousel {
    pub fn new(len: usize, interval_ms: u32, now_ms: i64) -> Self {
        debug_assert!(len > 0, "carousel needs at least one item");
        let interval_ms = i64::from(interval_ms);
        Self {
            len,
            current: 0,
            paused: false,
            interval_ms,
            next_due: Some(now_ms + interval_ms),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn next_due(&self) -> Option<i64> {
        self.next_due
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    pub fn jump_to(&mut self, index: i64) {
        self.current = wrap_index(index, self.len);
    }

    /// Pausing drops the pending advance. Resuming schedules a fresh one a
    /// full interval after `now_ms`.
    pub fn set_paused(&mut self, paused: bool, now_ms: i64) {
        if paused == self.paused {
            return;
        }
        self.paused = paused;
        self.next_due = if paused {
            None
        } else {
            Some(now_ms + self.interval_ms)
        };
    }

    /// The autoplay step. No-op while paused.
    pub fn auto_advance(&mut self, now_ms: i64) -> bool {
        if self.paused {
            return false;
        }
        self.next();
        self.next_due = Some(now_ms + self.interval_ms);
        true
    }

    /// Runs the autoplay step if it is due at `now_ms`.
    pub fn poll(&mut self, now_ms: i64) -> bool {
        match self.next_due {
            Some(due) if now_ms >= due => self.auto_advance(now_ms),
            _ => false,
        }
    }
}

pub enum CarouselAction {
    Next,
    Previous,
    JumpTo(i64),
    SetPaused(bool, i64),
    Poll(i64),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => next.next(),
            CarouselAction::Previous => next.previous(),
            CarouselAction::JumpTo(index) => next.jump_to(index),
            CarouselAction::SetPaused(paused, now) => next.set_paused(paused, now),
            CarouselAction::Poll(now) => {
                next.poll(now);
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Clone)]
pub struct UseCarouselHandle {
    state: UseReducerHandle<Carousel>,
}

impl UseCarouselHandle {
    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn current(&self) -> usize {
        self.state.current()
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    pub fn next(&self) {
        self.state.dispatch(CarouselAction::Next);
    }

    pub fn previous(&self) {
        self.state.dispatch(CarouselAction::Previous);
    }

    pub fn jump_to(&self, index: i64) {
        self.state.dispatch(CarouselAction::JumpTo(index));
    }

    pub fn set_paused(&self, paused: bool) {
        self.state
            .dispatch(CarouselAction::SetPaused(paused, Utc::now().timestamp_millis()));
    }
}

/// Carousel over `len` items that advances every `interval_ms` unless
/// paused. A single timeout is armed for the next due advance and is
/// cancelled whenever the schedule changes or the component unmounts.
/// The timeout only polls; a wakeup that lands before `next_due` re-arms
/// for the remainder instead of advancing.
#[hook]
pub fn use_carousel(len: usize, interval_ms: u32) -> UseCarouselHandle {
    let state = use_reducer(move || Carousel::new(len, interval_ms, Utc::now().timestamp_millis()));
    let wakeups = use_state(|| 0u32);

    {
        let dispatcher = state.dispatcher();
        let deps = (state.next_due(), *wakeups);
        let wakeups = wakeups.clone();
        use_effect_with_deps(
            move |(next_due, woken)| {
                let woken = *woken;
                let timer = next_due.map(|due| {
                    let delay = (due - Utc::now().timestamp_millis()).clamp(0, i64::from(u32::MAX)) as u32;
                    Timeout::new(delay, move || {
                        dispatcher.dispatch(CarouselAction::Poll(Utc::now().timestamp_millis()));
                        wakeups.set(woken.wrapping_add(1));
                    })
                });
                move || drop(timer)
            },
            deps,
        );
    }

    UseCarouselHandle { state }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: u32 = 4000;

    #[test]
    fn next_wraps_back_to_start() {
        let mut carousel = Carousel::new(4, INTERVAL, 0);
        for _ in 0..4 {
            carousel.next();
        }
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn previous_from_start_goes_to_last() {
        let mut carousel = Carousel::new(4, INTERVAL, 0);
        carousel.previous();
        assert_eq!(carousel.current(), 3);
    }

    #[test]
    fn jump_to_wraps_in_both_directions() {
        let mut carousel = Carousel::new(4, INTERVAL, 0);
        carousel.jump_to(4);
        assert_eq!(carousel.current(), 0);
        carousel.jump_to(-1);
        assert_eq!(carousel.current(), 3);
        carousel.jump_to(-9);
        assert_eq!(carousel.current(), 3);
        carousel.jump_to(10);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn single_item_carousel_stays_put() {
        let mut carousel = Carousel::new(1, INTERVAL, 0);
        carousel.next();
        carousel.previous();
        carousel.jump_to(-7);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn autoplay_advances_every_interval() {
        let mut carousel = Carousel::new(3, INTERVAL, 0);
        assert!(!carousel.poll(3_999));
        assert!(carousel.poll(4_000));
        assert_eq!(carousel.current(), 1);
        assert!(!carousel.poll(7_999));
        assert!(carousel.poll(8_000));
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn resume_does_not_catch_up_missed_ticks() {
        let mut carousel = Carousel::new(4, INTERVAL, 0);
        carousel.set_paused(true, 1_000);
        assert_eq!(carousel.next_due(), None);
        for t in (1_000..=5_000).step_by(250) {
            assert!(!carousel.poll(t));
        }
        assert_eq!(carousel.current(), 0);

        carousel.set_paused(false, 5_000);
        assert_eq!(carousel.next_due(), Some(9_000));
        assert!(!carousel.poll(5_000));
        assert!(!carousel.poll(8_999));
        assert!(carousel.poll(9_000));
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn stale_autoplay_after_pause_is_ignored() {
        let mut carousel = Carousel::new(4, INTERVAL, 0);
        carousel.set_paused(true, 3_999);
        assert!(!carousel.auto_advance(4_000));
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn repeated_pause_keeps_the_schedule() {
        let mut carousel = Carousel::new(4, INTERVAL, 0);
        carousel.set_paused(false, 2_000);
        assert_eq!(carousel.next_due(), Some(4_000));
    }

    #[test]
    fn manual_navigation_ignores_pause_and_schedule() {
        let mut carousel = Carousel::new(4, INTERVAL, 0);
        carousel.set_paused(true, 500);
        carousel.next();
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.current(), 1);
        assert!(carousel.is_paused());
        assert_eq!(carousel.next_due(), None);

        carousel.set_paused(false, 1_000);
        carousel.jump_to(3);
        assert_eq!(carousel.next_due(), Some(5_000));
    }

    #[test]
    fn reducer_routes_actions() {
        let carousel = Rc::new(Carousel::new(4, INTERVAL, 0));
        let carousel = carousel.reduce(CarouselAction::JumpTo(-2));
        assert_eq!(carousel.current(), 2);
        let carousel = carousel.reduce(CarouselAction::SetPaused(true, 100));
        let paused = carousel.clone();
        let carousel = carousel.reduce(CarouselAction::Poll(4_000));
        assert!(Rc::ptr_eq(&paused, &carousel));
        let carousel = carousel.reduce(CarouselAction::Next);
        assert_eq!(carousel.current(), 3);
    }

    #[test]
    fn early_poll_leaves_the_state_alone() {
        let carousel = Rc::new(Carousel::new(4, INTERVAL, 0));
        let early = carousel.clone().reduce(CarouselAction::Poll(3_999));
        assert!(Rc::ptr_eq(&carousel, &early));

        let due = early.reduce(CarouselAction::Poll(4_000));
        assert_eq!(due.current(), 1);
        assert_eq!(due.next_due(), Some(8_000));
    }

    #[test]
    fn late_poll_schedules_from_the_wakeup() {
        let carousel = Rc::new(Carousel::new(4, INTERVAL, 0));
        let late = carousel.reduce(CarouselAction::Poll(6_500));
        assert_eq!(late.current(), 1);
        assert_eq!(late.next_due(), Some(10_500));
    }

    #[test]
    fn poll_after_resume_waits_a_full_interval() {
        let carousel = Rc::new(Carousel::new(4, INTERVAL, 0));
        let carousel = carousel.reduce(CarouselAction::SetPaused(true, 1_000));
        let carousel = carousel.reduce(CarouselAction::SetPaused(false, 5_000));
        let resumed = carousel.clone();
        let carousel = carousel.reduce(CarouselAction::Poll(8_999));
        assert!(Rc::ptr_eq(&resumed, &carousel));
        let carousel = carousel.reduce(CarouselAction::Poll(9_000));
        assert_eq!(carousel.current(), 1);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::RefCell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const FAST_MS: u32 = 100;

    #[derive(Properties, PartialEq)]
    struct SlidesProps {
        shown: Rc<RefCell<Vec<usize>>>,
        #[prop_or_default]
        hold: bool,
    }

    #[function_component]
    fn Slides(props: &SlidesProps) -> Html {
        let carousel = use_carousel(3, FAST_MS);
        props.shown.borrow_mut().push(carousel.current());

        {
            let carousel = carousel.clone();
            use_effect_with_deps(
                move |hold| {
                    if *hold {
                        carousel.set_paused(true);
                    }
                    || ()
                },
                props.hold,
            );
        }

        html! { <p>{carousel.current()}</p> }
    }

    fn root() -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    fn distinct_slides(shown: &RefCell<Vec<usize>>) -> usize {
        let mut slides = shown.borrow().clone();
        slides.dedup();
        slides.len()
    }

    #[wasm_bindgen_test]
    async fn advances_while_mounted_and_stops_after_unmount() {
        let root = root();
        let shown = Rc::new(RefCell::new(Vec::new()));
        let app = yew::Renderer::<Slides>::with_root_and_props(
            root.clone(),
            SlidesProps {
                shown: shown.clone(),
                hold: false,
            },
        )
        .render();

        TimeoutFuture::new(FAST_MS * 3 + 80).await;
        assert!(distinct_slides(&shown) >= 3, "slides: {:?}", shown.borrow());
        assert_eq!(shown.borrow()[0], 0);

        app.destroy();
        let renders = shown.borrow().len();
        TimeoutFuture::new(FAST_MS * 3).await;
        assert_eq!(shown.borrow().len(), renders);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn paused_carousel_holds_the_first_slide() {
        let root = root();
        let shown = Rc::new(RefCell::new(Vec::new()));
        let app = yew::Renderer::<Slides>::with_root_and_props(
            root.clone(),
            SlidesProps {
                shown: shown.clone(),
                hold: true,
            },
        )
        .render();

        TimeoutFuture::new(FAST_MS * 4).await;
        assert!(shown.borrow().iter().all(|slide| *slide == 0), "slides: {:?}", shown.borrow());

        app.destroy();
        root.remove();
    }
}
