use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::Plan;
use crate::scroll::scroll_to_section;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Billing {
    Monthly,
    Yearly,
}

/// Rupee amount with Indian digit grouping: the last three digits, then
/// pairs (`1,49,999`).
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("₹{},{}", groups.join(","), tail)
}

fn price_label(plan: &Plan, billing: Billing) -> String {
    let price = match billing {
        Billing::Monthly => plan.monthly_price,
        Billing::Yearly => plan.yearly_price,
    };
    price.map(format_inr).unwrap_or_else(|| "Custom".to_string())
}

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub plans: &'static [Plan],
    /// Hide the monthly/yearly switch for one-off project pricing.
    #[prop_or(true)]
    pub toggle: bool,
    #[prop_or(AttrValue::Static("/mo"))]
    pub period: AttrValue,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let billing = use_state(|| Billing::Monthly);

    let toggle_billing = {
        let billing = billing.clone();
        Callback::from(move |_: MouseEvent| {
            billing.set(match *billing {
                Billing::Monthly => Billing::Yearly,
                Billing::Yearly => Billing::Monthly,
            });
        })
    };

    let contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("#contact");
    });

    html! {
        <section id="pricing" class="section" aria-label="Pricing">
            <style>
                {r#"
                    .billing-toggle {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin: 1.5rem 0 3rem;
                    }
                    .switch {
                        position: relative;
                        width: 3.25rem;
                        height: 1.75rem;
                        border-radius: 999px;
                        border: none;
                        background: var(--border);
                        cursor: pointer;
                    }
                    .switch::after {
                        content: "";
                        position: absolute;
                        top: 0.2rem;
                        left: 0.2rem;
                        width: 1.35rem;
                        height: 1.35rem;
                        border-radius: 50%;
                        background: #fff;
                        transition: transform 0.25s ease;
                    }
                    .switch.on { background: var(--primary); }
                    .switch.on::after { transform: translateX(1.5rem); }
                    .save-badge {
                        font-size: 0.75rem;
                        color: var(--accent);
                        font-weight: 600;
                    }
                    .plans {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                        align-items: stretch;
                    }
                    .plan {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        padding: 2rem;
                        border-radius: 1.25rem;
                        border: 1px solid var(--border);
                    }
                    .plan.featured {
                        border: 2px solid var(--primary);
                        box-shadow: 0 20px 40px rgba(232, 93, 58, 0.12);
                    }
                    .plan-badge {
                        position: absolute;
                        top: -0.8rem;
                        left: 50%;
                        transform: translateX(-50%);
                        padding: 0.25rem 1rem;
                        border-radius: 999px;
                        background: var(--primary);
                        color: #fff;
                        font-size: 0.75rem;
                    }
                    .plan-price {
                        font-size: 2.25rem;
                        font-weight: 700;
                    }
                    .plan-price small {
                        font-size: 0.9rem;
                        color: var(--muted);
                        font-weight: 400;
                    }
                    .plan ul {
                        flex: 1;
                        padding: 0;
                        list-style: none;
                    }
                    .plan li { padding: 0.35rem 0; }
                    .plan li::before {
                        content: "✓ ";
                        color: var(--accent);
                    }
                "#}
            </style>
            <div class="container">
                <Reveal>
                    <div class="section-label">{"Pricing"}</div>
                    <h2 class="section-title">{"Simple, transparent pricing"}</h2>
                </Reveal>
                if props.toggle {
                    <div class="billing-toggle">
                        <span>{"Monthly"}</span>
                        <button
                            class={classes!("switch", (*billing == Billing::Yearly).then_some("on"))}
                            aria-label="Toggle yearly billing"
                            onclick={toggle_billing}
                        />
                        <span>{"Yearly"}</span>
                        <span class="save-badge">{"Save 20%"}</span>
                    </div>
                }
                <div class="plans">
                    { for props.plans.iter().map(|plan| {
                        let label = price_label(plan, *billing);
                        let custom = plan.monthly_price.is_none();
                        html! {
                            <Reveal class={classes!("plan", plan.featured.then_some("featured"))}>
                                if plan.featured {
                                    <span class="plan-badge">{"Most Popular"}</span>
                                }
                                <h3>{plan.name}</h3>
                                <p class="section-lead">{plan.description}</p>
                                <div class="plan-price">
                                    {label}
                                    if !custom {
                                        <small>{&props.period}</small>
                                    }
                                </div>
                                <ul>
                                    { for plan.features.iter().map(|f| html! { <li>{*f}</li> }) }
                                </ul>
                                <a
                                    href="#contact"
                                    class={classes!("btn", if plan.featured { "btn-primary" } else { "btn-outline" })}
                                    onclick={contact.clone()}
                                >
                                    {plan.cta}
                                </a>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{consultant, web};

    #[test]
    fn indian_grouping() {
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(14_999), "₹14,999");
        assert_eq!(format_inr(149_999), "₹1,49,999");
        assert_eq!(format_inr(12_345_678), "₹1,23,45,678");
        assert_eq!(format_inr(0), "₹0");
    }

    #[test]
    fn yearly_toggle_switches_the_amount() {
        let growth = &consultant::CONTENT.plans[1];
        assert_eq!(price_label(growth, Billing::Monthly), "₹29,999");
        assert_eq!(price_label(growth, Billing::Yearly), "₹23,999");
    }

    #[test]
    fn unpriced_plans_read_custom() {
        let enterprise = &web::CONTENT.plans[2];
        assert_eq!(price_label(enterprise, Billing::Monthly), "Custom");
    }
}
