//! Skill Check Panel - roll d20 + skill total against a DC

use dioxus::prelude::*;

use charbuild_domain::{CharacterData, SkillCheckOutcome, SKILL_LIST};

use crate::presentation::state::RosterState;

#[derive(Props, Clone, PartialEq)]
pub struct SkillCheckPanelProps {
    pub data: CharacterData,
}

/// The chosen skill, DC and last outcome are local to this panel.
#[component]
pub fn SkillCheckPanel(props: SkillCheckPanelProps) -> Element {
    let mut state = use_context::<RosterState>();
    let mut skill = use_signal(|| SKILL_LIST[0].name.to_string());
    let mut dc = use_signal(|| 0_i32);
    let mut outcome: Signal<Option<SkillCheckOutcome>> = use_signal(|| None);

    let data = props.data.clone();
    let roll = move |_: MouseEvent| {
        let skill_name = skill.read().clone();
        match data.resolve_skill_check(&skill_name, dc()) {
            Ok(result) => {
                tracing::debug!(
                    skill = %skill_name,
                    roll = result.roll,
                    total = result.total,
                    dc = result.dc,
                    success = result.success,
                    "Skill check"
                );
                outcome.set(Some(result));
            }
            Err(e) => state.reject(&e),
        }
    };

    let (rolled, verdict) = match outcome() {
        Some(result) => (
            result.roll.to_string(),
            if result.success { "Success" } else { "Failure" },
        ),
        None => ("-".to_string(), "-"),
    };

    rsx! {
        div {
            class: "sheet-section skill-check",
            h2 { "Skill Check" }
            div {
                class: "sheet-row",
                label { "Skill: " }
                select {
                    value: "{skill}",
                    onchange: move |evt| skill.set(evt.value()),
                    for definition in SKILL_LIST.iter() {
                        option {
                            key: "{definition.name}",
                            value: "{definition.name}",
                            "{definition.name}"
                        }
                    }
                }
                label { "DC: " }
                input {
                    r#type: "number",
                    value: "{dc}",
                    oninput: move |evt| dc.set(evt.value().trim().parse().unwrap_or(0)),
                }
                button {
                    onclick: roll,
                    "Roll"
                }
            }
            div { "Rolled: {rolled}" }
            div { "Result: {verdict}" }
        }
    }
}
