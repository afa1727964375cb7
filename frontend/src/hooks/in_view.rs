use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

// Absorbs f64 rounding in the reported ratio; anything measurably below the
// threshold still does not count.
const RATIO_EPSILON: f64 = 1e-6;

/// One-shot "has this element been on screen" flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Visibility {
    threshold: f64,
    visible: bool,
}

impl Visibility {
    pub fn new(threshold: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&threshold),
            "visibility threshold must be a fraction, got {threshold}"
        );
        Self {
            threshold,
            visible: false,
        }
    }

    /// Feeds one intersection report. The ratio has to meet or exceed the
    /// threshold, give or take `RATIO_EPSILON` of rounding. Returns `true`
    /// only for the report that flips the flag; everything after that is
    /// ignored.
    pub fn observe(&mut self, ratio: f64, intersecting: bool) -> bool {
        if self.visible || !intersecting || ratio + RATIO_EPSILON < self.threshold {
            return false;
        }
        self.visible = true;
        true
    }
}

/// A live IntersectionObserver watch. Dropping it disconnects the observer
/// and releases the JS callback.
pub struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watches `element` and calls `on_visible` the first time it crosses
/// `threshold`. The observer disconnects itself right after firing.
pub fn observe_once<F>(element: &Element, threshold: f64, on_visible: F) -> Result<Observation, JsValue>
where
    F: Fn() + 'static,
{
    let detector = Rc::new(RefCell::new(Visibility::new(threshold)));
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let ratio = entry.intersection_ratio();
                if detector.borrow_mut().observe(ratio, entry.is_intersecting()) {
                    debug!("element entered the viewport at ratio {:.2}", ratio);
                    observer.disconnect();
                    on_visible();
                    break;
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    Ok(Observation {
        observer,
        _callback: callback,
    })
}

/// Returns a node ref to attach and a flag that turns `true` once, the first
/// time the attached element is at least `threshold` visible. An unattached
/// ref stays `false` forever.
#[hook]
pub fn use_in_view(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let in_view = use_state_eq(|| false);

    {
        let node = node.clone();
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |threshold| {
                let observation = match node.cast::<Element>() {
                    Some(element) if !*in_view => {
                        let setter = in_view.setter();
                        match observe_once(&element, *threshold, move || setter.set(true)) {
                            Ok(observation) => Some(observation),
                            Err(err) => {
                                warn!("could not observe element visibility: {:?}", err);
                                None
                            }
                        }
                    }
                    _ => None,
                };
                move || drop(observation)
            },
            threshold,
        );
    }

    (node, *in_view)
}

#[cfg(test)]
impl Visibility {
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let detector = Visibility::new(0.15);
        assert!(!detector.is_visible());
        assert_eq!(detector.threshold(), 0.15);
    }

    #[test]
    fn below_threshold_does_not_count() {
        let mut detector = Visibility::new(0.15);
        assert!(!detector.observe(0.05, true));
        assert!(!detector.observe(0.14, true));
        assert!(!detector.is_visible());
    }

    #[test]
    fn meeting_threshold_fires_once() {
        let mut detector = Visibility::new(0.15);
        assert!(detector.observe(0.15, true));
        assert!(detector.is_visible());
        assert!(!detector.observe(0.9, true));
    }

    #[test]
    fn rounding_noise_at_the_crossing_still_counts() {
        let mut detector = Visibility::new(0.15);
        assert!(detector.observe(0.15 - 1e-9, true));
    }

    #[test]
    fn just_under_the_threshold_is_still_hidden() {
        let mut detector = Visibility::new(0.15);
        assert!(!detector.observe(0.1491, true));
        assert!(!detector.observe(0.1499, true));
        assert!(!detector.is_visible());
    }

    #[test]
    fn non_intersecting_reports_are_ignored() {
        let mut detector = Visibility::new(0.0);
        assert!(!detector.observe(0.0, false));
        assert!(detector.observe(0.0, true));
    }

    #[test]
    fn in_out_in_only_fires_on_first_entry() {
        let mut detector = Visibility::new(0.15);
        let reports = [(0.0, false), (0.4, true), (0.0, false), (0.6, true), (0.0, false)];
        let rising_edges = reports
            .iter()
            .filter(|(ratio, intersecting)| detector.observe(*ratio, *intersecting))
            .count();
        assert_eq!(rising_edges, 1);
        assert!(detector.is_visible());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use yew::AppHandle;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mounted_box() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element("div").unwrap();
        element.set_attribute("style", "width: 100px; height: 100px;").unwrap();
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    async fn on_screen_element_fires_exactly_once() {
        let element = mounted_box();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let _observation = observe_once(&element, 0.15, move || counter.set(counter.get() + 1)).unwrap();

        TimeoutFuture::new(200).await;
        assert_eq!(hits.get(), 1);
        element.remove();
    }

    #[derive(Properties, PartialEq)]
    struct WatchedProps {
        seen: Rc<RefCell<Vec<bool>>>,
        attach: bool,
    }

    #[function_component]
    fn Watched(props: &WatchedProps) -> Html {
        let (node, visible) = use_in_view(0.15);
        props.seen.borrow_mut().push(visible);
        if props.attach {
            html! { <div ref={node} style="width: 100px; height: 100px;" /> }
        } else {
            html! { <div style="width: 100px; height: 100px;" /> }
        }
    }

    fn mount_watched(attach: bool) -> (Element, Rc<RefCell<Vec<bool>>>, AppHandle<Watched>) {
        let root = mounted_box();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let app = yew::Renderer::<Watched>::with_root_and_props(
            root.clone(),
            WatchedProps {
                seen: seen.clone(),
                attach,
            },
        )
        .render();
        (root, seen, app)
    }

    #[wasm_bindgen_test]
    async fn unattached_ref_stays_hidden() {
        let (root, seen, app) = mount_watched(false);

        TimeoutFuture::new(300).await;
        assert!(!seen.borrow().is_empty());
        assert!(seen.borrow().iter().all(|visible| !visible));

        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn attached_element_turns_visible_once() {
        let (root, seen, app) = mount_watched(true);

        TimeoutFuture::new(300).await;
        assert_eq!(seen.borrow().last(), Some(&true));
        assert_eq!(seen.borrow().iter().filter(|visible| **visible).count(), 1);

        app.destroy();
        let renders = seen.borrow().len();
        TimeoutFuture::new(200).await;
        assert_eq!(seen.borrow().len(), renders);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn dropped_observation_never_fires() {
        let element = mounted_box();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let observation = observe_once(&element, 0.15, move || counter.set(counter.get() + 1)).unwrap();
        drop(observation);

        TimeoutFuture::new(200).await;
        assert_eq!(hits.get(), 0);
        element.remove();
    }
}
