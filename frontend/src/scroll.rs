use log::{debug, warn};
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls to the element matching `selector` (usually a `#section`
/// anchor). Missing elements are logged and ignored.
pub fn scroll_to_section(selector: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        warn!("no document to scroll");
        return;
    };
    match document.query_selector(selector) {
        Ok(Some(element)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        Ok(None) => debug!("no section matches {}", selector),
        Err(err) => warn!("bad section selector {}: {:?}", selector, err),
    }
}

/// Jumps to the top of the page, used when a route mounts.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
