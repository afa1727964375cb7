use std::rc::Rc;

use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use log::{debug, info};
use yew::prelude::*;

use crate::config::COUNTDOWN_TICK_MS;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl TimeLeft {
    pub const ZERO: TimeLeft = TimeLeft {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Splits a remaining duration into display units. Anything at or below
    /// zero is `ZERO`.
    pub fn from_millis(diff: i64) -> Self {
        if diff <= 0 {
            return Self::ZERO;
        }
        Self {
            days: (diff / MS_PER_DAY) as u64,
            hours: ((diff % MS_PER_DAY) / MS_PER_HOUR) as u8,
            minutes: ((diff % MS_PER_HOUR) / MS_PER_MINUTE) as u8,
            seconds: ((diff % MS_PER_MINUTE) / MS_PER_SECOND) as u8,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    target: DateTime<Utc>,
    left: TimeLeft,
    expired: bool,
}

impl Countdown {
    pub fn new(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let mut countdown = Self {
            target,
            left: TimeLeft::ZERO,
            expired: false,
        };
        countdown.tick(now);
        countdown
    }

    pub fn left(&self) -> TimeLeft {
        self.left
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Recomputes the readout for `now`. Once the target has passed the
    /// readout is pinned to zero and later ticks change nothing.
    pub fn tick(&mut self, now: DateTime<Utc>) -> TimeLeft {
        if self.expired {
            return self.left;
        }
        let diff = (self.target - now).num_milliseconds();
        if diff <= 0 {
            self.expired = true;
            self.left = TimeLeft::ZERO;
        } else {
            self.left = TimeLeft::from_millis(diff);
        }
        self.left
    }
}

pub enum CountdownAction {
    Tick(DateTime<Utc>),
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let CountdownAction::Tick(now) = action;
        let mut next = (*self).clone();
        next.tick(now);
        if next.expired && !self.expired {
            info!("countdown to {} reached zero", next.target);
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Days/hours/minutes/seconds until `target`, refreshed every second until
/// it expires.
#[hook]
pub fn use_countdown(target: DateTime<Utc>) -> UseReducerHandle<Countdown> {
    let countdown = use_reducer(move || Countdown::new(target, Utc::now()));

    {
        let dispatcher = countdown.dispatcher();
        use_effect_with_deps(
            move |expired| {
                let ticker = (!*expired).then(|| {
                    debug!("countdown ticker armed");
                    Interval::new(COUNTDOWN_TICK_MS, move || {
                        dispatcher.dispatch(CountdownAction::Tick(Utc::now()));
                    })
                });
                move || drop(ticker)
            },
            countdown.is_expired(),
        );
    }

    countdown
}

#[cfg(test)]
impl Countdown {
    pub fn remaining_millis(&self, now: DateTime<Utc>) -> i64 {
        (self.target - now).num_milliseconds().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_760_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn thirty_days_out_reads_thirty_days() {
        let now = at(0);
        let countdown = Countdown::new(now + Duration::days(30), now);
        let left = countdown.left();
        assert!(left.days == 30 || left.days == 29);
        assert!(left.hours <= 23);
        assert!(left.minutes <= 59);
        assert!(left.seconds <= 59);
        assert_eq!(left, TimeLeft { days: 30, hours: 0, minutes: 0, seconds: 0 });
    }

    #[test]
    fn one_millisecond_short_of_thirty_days() {
        let left = TimeLeft::from_millis(30 * MS_PER_DAY - 1);
        assert_eq!(left, TimeLeft { days: 29, hours: 23, minutes: 59, seconds: 59 });
    }

    #[test]
    fn one_second_later_a_second_less_remains() {
        let now = at(0);
        let mut countdown = Countdown::new(now + Duration::days(30), now);
        let before = countdown.remaining_millis(now);
        let later = now + Duration::seconds(1);
        countdown.tick(later);
        let after = countdown.remaining_millis(later);
        assert!((before - after - 1000).abs() <= 50);
        assert_eq!(countdown.left(), TimeLeft { days: 29, hours: 23, minutes: 59, seconds: 59 });
    }

    #[test]
    fn splits_mixed_durations() {
        let diff = 2 * MS_PER_DAY + 5 * MS_PER_HOUR + 7 * MS_PER_MINUTE + 9 * MS_PER_SECOND + 999;
        assert_eq!(
            TimeLeft::from_millis(diff),
            TimeLeft { days: 2, hours: 5, minutes: 7, seconds: 9 }
        );
    }

    #[test]
    fn expiry_pins_the_readout_to_zero() {
        let now = at(0);
        let mut countdown = Countdown::new(now + Duration::seconds(2), now);
        assert_eq!(countdown.left().seconds, 2);
        assert!(!countdown.is_expired());

        countdown.tick(now + Duration::seconds(2));
        assert!(countdown.is_expired());
        assert_eq!(countdown.left(), TimeLeft::ZERO);

        let frozen = countdown.clone();
        countdown.tick(now + Duration::days(3));
        assert_eq!(countdown, frozen);
    }

    #[test]
    fn deadline_in_the_past_starts_expired() {
        let now = at(0);
        let countdown = Countdown::new(now - Duration::minutes(5), now);
        assert!(countdown.is_expired());
        assert_eq!(countdown.left(), TimeLeft::ZERO);
        assert_eq!(countdown.remaining_millis(now), 0);
    }

    #[test]
    fn reducer_keeps_state_when_nothing_changes() {
        let now = at(0);
        let countdown = Rc::new(Countdown::new(now - Duration::seconds(1), now));
        let next = countdown.clone().reduce(CountdownAction::Tick(now + Duration::seconds(10)));
        assert!(Rc::ptr_eq(&countdown, &next));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::RefCell;

    use chrono::Duration;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use yew::AppHandle;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct ClockProps {
        target: DateTime<Utc>,
        seen: Rc<RefCell<Vec<TimeLeft>>>,
    }

    #[function_component]
    fn Clock(props: &ClockProps) -> Html {
        let countdown = use_countdown(props.target);
        props.seen.borrow_mut().push(countdown.left());
        html! { <span>{countdown.left().seconds}</span> }
    }

    fn mount(target: DateTime<Utc>) -> (web_sys::Element, Rc<RefCell<Vec<TimeLeft>>>, AppHandle<Clock>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let app = yew::Renderer::<Clock>::with_root_and_props(
            root.clone(),
            ClockProps {
                target,
                seen: seen.clone(),
            },
        )
        .render();
        (root, seen, app)
    }

    #[wasm_bindgen_test]
    async fn ticker_stops_once_unmounted() {
        let (root, seen, app) = mount(Utc::now() + Duration::hours(1));

        TimeoutFuture::new(COUNTDOWN_TICK_MS * 2 + 300).await;
        assert!(seen.borrow().len() >= 2, "renders: {:?}", seen.borrow());

        app.destroy();
        let renders = seen.borrow().len();
        TimeoutFuture::new(COUNTDOWN_TICK_MS * 2 + 300).await;
        assert_eq!(seen.borrow().len(), renders);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn expired_deadline_arms_no_ticker() {
        let (root, seen, app) = mount(Utc::now() - Duration::seconds(5));

        TimeoutFuture::new(COUNTDOWN_TICK_MS + 300).await;
        assert_eq!(*seen.borrow(), vec![TimeLeft::ZERO]);

        app.destroy();
        root.remove();
    }
}
