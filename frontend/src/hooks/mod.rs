//! Timed UI behaviours shared by the page sections. Each module pairs a
//! plain state holder (advanced by explicit timestamps, testable without a
//! browser) with the Yew hook that owns the browser timer or observer.

pub mod carousel;
pub mod count_up;
pub mod countdown;
pub mod in_view;

pub use carousel::use_carousel;
pub use count_up::use_count_up;
pub use countdown::{use_countdown, TimeLeft};
pub use in_view::use_in_view;
