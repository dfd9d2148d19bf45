//! Class Panel - class selection and the selected class's minimums

use dioxus::prelude::*;

use charbuild_domain::{class_by_name, Attribute, CharacterData, CLASS_LIST};

use crate::presentation::state::RosterState;

#[derive(Props, Clone, PartialEq)]
pub struct ClassPanelProps {
    pub data: CharacterData,
    pub on_change: EventHandler<CharacterData>,
}

/// Lists every class; eligible ones are highlighted and any can be toggled.
#[component]
pub fn ClassPanel(props: ClassPanelProps) -> Element {
    let selected = props.data.selected_class_definition();

    rsx! {
        div {
            class: "sheet-section sheet-section-narrow",
            h2 { "Classes" }
            for class in CLASS_LIST.iter() {
                ClassEntry {
                    key: "{class.name}",
                    name: class.name,
                    eligible: props.data.meets_class_requirements(class),
                    selected: props.data.selected_class.as_deref() == Some(class.name),
                    data: props.data.clone(),
                    on_change: props.on_change,
                }
            }
        }

        if let Some(class) = selected {
            ClassRequirements { name: class.name }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ClassEntryProps {
    name: &'static str,
    eligible: bool,
    selected: bool,
    data: CharacterData,
    on_change: EventHandler<CharacterData>,
}

#[component]
fn ClassEntry(props: ClassEntryProps) -> Element {
    let mut state = use_context::<RosterState>();
    let name = props.name;
    let on_change = props.on_change;
    let data = props.data.clone();
    let css = match (props.selected, props.eligible) {
        (true, _) => "class-entry class-selected",
        (false, true) => "class-entry class-eligible",
        (false, false) => "class-entry",
    };

    rsx! {
        div {
            class: "{css}",
            onclick: move |_| match data.toggle_class(name) {
                Ok(next) => on_change.call(next),
                Err(e) => state.reject(&e),
            },
            "{name}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ClassRequirementsProps {
    name: &'static str,
}

#[component]
fn ClassRequirements(props: ClassRequirementsProps) -> Element {
    let minimums: Vec<(Attribute, String)> = class_by_name(props.name)
        .map(|class| {
            Attribute::ALL
                .iter()
                .map(|&attribute| {
                    let minimum = class
                        .minimum(attribute)
                        .map_or_else(|| "-".to_string(), |m| m.to_string());
                    (attribute, minimum)
                })
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        div {
            class: "sheet-section sheet-section-narrow",
            h2 { "{props.name} Minimum Requirements" }
            for (attribute, minimum) in minimums {
                div {
                    key: "{attribute}",
                    "{attribute}: {minimum}"
                }
            }
        }
    }
}
