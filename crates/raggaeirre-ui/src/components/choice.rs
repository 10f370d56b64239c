//! Donation choice controls
//!
//! Preset amount buttons and payment method cards. Both are single-choice
//! groups: the caller owns the selection and passes it back in.

use dioxus::prelude::*;
use raggaeirre_core::catalog::PaymentMethodInfo;
use raggaeirre_core::{format_kes, PaymentMethod};

/// Properties for the AmountOptions component
#[derive(Clone, PartialEq, Props)]
pub struct AmountOptionsProps {
    /// Preset amounts in KES
    pub presets: Vec<u64>,
    /// Highlighted preset, if any
    pub selected: Option<u64>,
    pub on_select: EventHandler<u64>,
}

/// Row of preset amount buttons
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AmountOptions {
///         presets: vec![500, 1000, 2500],
///         selected: flow.selected_preset(),
///         on_select: move |amount| site.with_donation(|d| d.select_amount(amount)),
///     }
/// }
/// ```
#[component]
pub fn AmountOptions(props: AmountOptionsProps) -> Element {
    rsx! {
        div {
            class: "amount-options",
            role: "radiogroup",
            "aria-label": "Donation amount",
            for amount in props.presets.iter().copied() {
                {
                    let is_selected = props.selected == Some(amount);
                    let label = format_kes(amount);
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{amount}",
                            class: if is_selected { "amount-btn selected" } else { "amount-btn" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(amount),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

/// Properties for the PaymentOptions component
#[derive(Clone, PartialEq, Props)]
pub struct PaymentOptionsProps {
    /// Methods in display order with their presentation
    pub methods: Vec<(PaymentMethod, PaymentMethodInfo)>,
    pub checked: Option<PaymentMethod>,
    pub on_select: EventHandler<PaymentMethod>,
}

/// Payment method cards, each wrapping a radio input
#[component]
pub fn PaymentOptions(props: PaymentOptionsProps) -> Element {
    rsx! {
        div { class: "payment-methods",
            for (method, info) in props.methods.iter() {
                {
                    let method = *method;
                    let is_checked = props.checked == Some(method);
                    let on_select = props.on_select;
                    let value = method.as_str();
                    rsx! {
                        label {
                            key: "{value}",
                            class: if is_checked { "payment-method selected" } else { "payment-method" },
                            input {
                                r#type: "radio",
                                name: "paymentMethod",
                                value: "{value}",
                                checked: is_checked,
                                onchange: move |_| on_select.call(method),
                            }
                            div { class: "payment-info",
                                i { class: "{info.icon}", style: "color: {info.color};" }
                                div {
                                    strong { "{info.name}" }
                                    p { "{info.description}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Catalog methods in display order
pub fn ordered_methods(
    methods: &std::collections::BTreeMap<PaymentMethod, PaymentMethodInfo>,
) -> Vec<(PaymentMethod, PaymentMethodInfo)> {
    PaymentMethod::ALL
        .iter()
        .filter_map(|m| methods.get(m).map(|info| (*m, info.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use raggaeirre_core::Catalog;

    #[test]
    fn methods_follow_display_order() {
        let catalog = Catalog::builtin();
        let methods = ordered_methods(&catalog.donation.payment_methods);
        let order: Vec<_> = methods.iter().map(|(m, _)| *m).collect();
        assert_eq!(
            order,
            vec![PaymentMethod::Mpesa, PaymentMethod::Paypal, PaymentMethod::Bank]
        );
        assert_eq!(methods[0].1.name, "M-Pesa");
    }
}
