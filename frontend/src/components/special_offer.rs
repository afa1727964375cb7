use chrono::Utc;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::offer_deadline;
use crate::hooks::{use_countdown, TimeLeft};
use crate::scroll::scroll_to_section;

/// Two-digit padding for the banner cells; days may run past 99.
pub fn time_cells(left: TimeLeft) -> [(String, &'static str); 4] {
    [
        (format!("{:02}", left.days), "Days"),
        (format!("{:02}", left.hours), "Hours"),
        (format!("{:02}", left.minutes), "Mins"),
        (format!("{:02}", left.seconds), "Secs"),
    ]
}

#[function_component(SpecialOffer)]
pub fn special_offer() -> Html {
    let deadline = use_state(|| offer_deadline(Utc::now()));
    let countdown = use_countdown(*deadline);

    let claim = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("#contact");
    });

    html! {
        <section class="special-offer" aria-label="Special offer">
            <style>
                {r#"
                    .special-offer {
                        padding: 4rem 0;
                        background: linear-gradient(135deg, var(--primary), var(--secondary));
                        color: #fff;
                        text-align: center;
                    }
                    .offer-badge {
                        display: inline-block;
                        padding: 0.3rem 1rem;
                        border-radius: 999px;
                        background: rgba(255, 255, 255, 0.18);
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }
                    .countdown {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        margin: 2rem 0;
                    }
                    .time-unit {
                        min-width: 5rem;
                        padding: 1rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.12);
                    }
                    .time-value {
                        font-size: 2.25rem;
                        font-weight: 700;
                        font-variant-numeric: tabular-nums;
                    }
                    .time-label {
                        font-size: 0.75rem;
                        opacity: 0.8;
                    }
                    .special-offer .btn {
                        background: #fff;
                        color: var(--primary);
                    }
                "#}
            </style>
            <div class="container">
                <span class="offer-badge">
                    { if countdown.is_expired() { "Offer ended" } else { "⚡ Limited Time Offer" } }
                </span>
                <h2 class="section-title">{"Get 20% off your first 3 months"}</h2>
                <p>{"Lock in your spot before this offer expires. No commitment, cancel anytime."}</p>
                <div class="countdown" role="timer">
                    { for time_cells(countdown.left()).into_iter().map(|(value, label)| html! {
                        <div class="time-unit">
                            <div class="time-value">{value}</div>
                            <div class="time-label">{label}</div>
                        </div>
                    }) }
                </div>
                if !countdown.is_expired() {
                    <a href="#contact" class="btn" onclick={claim}>{"Claim Offer Now ⚡"}</a>
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_zero_padded() {
        let left = TimeLeft { days: 3, hours: 4, minutes: 0, seconds: 9 };
        let values: Vec<String> = time_cells(left).into_iter().map(|(v, _)| v).collect();
        assert_eq!(values, vec!["03", "04", "00", "09"]);
    }

    #[test]
    fn expired_banner_shows_zeros() {
        let values: Vec<String> = time_cells(TimeLeft::ZERO).into_iter().map(|(v, _)| v).collect();
        assert_eq!(values, vec!["00", "00", "00", "00"]);
    }
}
