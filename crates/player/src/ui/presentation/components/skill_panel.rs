//! Skill Panel - skill ranks against the INT-derived point pool

use dioxus::prelude::*;

use charbuild_domain::{Attribute, CharacterData};

use crate::presentation::state::RosterState;

#[derive(Props, Clone, PartialEq)]
pub struct SkillPanelProps {
    pub data: CharacterData,
    pub on_change: EventHandler<CharacterData>,
}

#[component]
pub fn SkillPanel(props: SkillPanelProps) -> Element {
    let available = props.data.available_skill_points();
    let used = props.data.used_skill_points();

    rsx! {
        div {
            class: "sheet-section sheet-section-wide",
            h2 { "Skills" }
            div {
                class: "muted",
                "Total skill points available: {available} (used: {used})"
            }
            for (skill, rank) in props.data.skills.iter() {
                SkillRow {
                    key: "{skill.name}",
                    name: skill.name,
                    governing: skill.governing_attribute,
                    rank,
                    data: props.data.clone(),
                    on_change: props.on_change,
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SkillRowProps {
    name: &'static str,
    governing: Attribute,
    rank: i32,
    data: CharacterData,
    on_change: EventHandler<CharacterData>,
}

#[component]
fn SkillRow(props: SkillRowProps) -> Element {
    let mut state = use_context::<RosterState>();
    let name = props.name;
    let governing = props.governing;
    let rank = props.rank;
    let modifier = props.data.attributes.modifier(governing);
    let total = rank + modifier;
    let on_change = props.on_change;
    let data_for_increment = props.data.clone();
    let data_for_decrement = props.data.clone();

    rsx! {
        div {
            class: "sheet-row",
            span { "{name}: {rank} (Modifier: {governing}): {modifier}" }
            button {
                onclick: move |_| match data_for_increment.increment_skill(name) {
                    Ok(next) => on_change.call(next),
                    Err(e) => state.reject(&e),
                },
                "+"
            }
            button {
                onclick: move |_| match data_for_decrement.decrement_skill(name) {
                    Ok(next) => on_change.call(next),
                    Err(e) => state.reject(&e),
                },
                "-"
            }
            span { class: "muted", "total: {total}" }
        }
    }
}
