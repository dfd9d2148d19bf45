//! Attribute Panel - point-buy editing of the six attributes

use dioxus::prelude::*;

use charbuild_domain::{modifier, Attribute, CharacterData, MAX_ATTRIBUTE_POINTS};

use crate::presentation::state::RosterState;

#[derive(Props, Clone, PartialEq)]
pub struct AttributePanelProps {
    pub data: CharacterData,
    pub on_change: EventHandler<CharacterData>,
}

#[component]
pub fn AttributePanel(props: AttributePanelProps) -> Element {
    let total = props.data.attribute_points_total();
    let remaining = props.data.attributes.remaining_points();

    rsx! {
        div {
            class: "sheet-section",
            h2 { "Attributes" }
            div {
                class: "muted",
                "Points used: {total} / {MAX_ATTRIBUTE_POINTS} ({remaining} remaining)"
            }
            for attribute in Attribute::ALL {
                AttributeRow {
                    key: "{attribute}",
                    attribute,
                    data: props.data.clone(),
                    on_change: props.on_change,
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct AttributeRowProps {
    attribute: Attribute,
    data: CharacterData,
    on_change: EventHandler<CharacterData>,
}

#[component]
fn AttributeRow(props: AttributeRowProps) -> Element {
    let mut state = use_context::<RosterState>();
    let attribute = props.attribute;
    let value = props.data.attributes.get(attribute);
    let modifier = modifier(value);
    let on_change = props.on_change;
    let data_for_increment = props.data.clone();
    let data_for_decrement = props.data.clone();

    rsx! {
        div {
            class: "sheet-row",
            span { "{attribute}: {value} (Modifier: {modifier})" }
            button {
                onclick: move |_| match data_for_increment.increment_attribute(attribute) {
                    Ok(next) => on_change.call(next),
                    Err(e) => state.reject(&e),
                },
                "+"
            }
            button {
                onclick: move |_| on_change.call(data_for_decrement.decrement_attribute(attribute)),
                "-"
            }
        }
    }
}
