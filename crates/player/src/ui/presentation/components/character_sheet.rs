//! Character Sheet - one record's editor
//!
//! Receives an owned copy of its record. Every edit produces new data that is
//! handed back with the record id; the roster decides where it lands.

use dioxus::prelude::*;

use charbuild_domain::{CharacterData, CharacterId, CharacterRecord};

use super::attribute_panel::AttributePanel;
use super::class_panel::ClassPanel;
use super::skill_check_panel::SkillCheckPanel;
use super::skill_panel::SkillPanel;

#[derive(Props, Clone, PartialEq)]
pub struct CharacterSheetProps {
    pub record: CharacterRecord,
    pub on_change: EventHandler<(CharacterId, CharacterData)>,
}

#[component]
pub fn CharacterSheet(props: CharacterSheetProps) -> Element {
    let id = props.record.id;
    let on_change = props.on_change;
    let data = props.record.data.clone();

    rsx! {
        div {
            class: "character-sheet",
            h1 { "Character: {id}" }
            SkillCheckPanel { data: data.clone() }
            div {
                class: "sheet-sections",
                AttributePanel {
                    data: data.clone(),
                    on_change: move |next: CharacterData| on_change.call((id, next)),
                }
                ClassPanel {
                    data: data.clone(),
                    on_change: move |next: CharacterData| on_change.call((id, next)),
                }
                SkillPanel {
                    data: data.clone(),
                    on_change: move |next: CharacterData| on_change.call((id, next)),
                }
            }
        }
    }
}
