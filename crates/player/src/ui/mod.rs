use dioxus::prelude::*;

use charbuild_domain::{CharacterData, CharacterId};

pub mod presentation;

use presentation::components::{CharacterSheet, Toolbar};
use presentation::state::RosterState;

const STYLES: &str = r#"
body { font-family: sans-serif; margin: 0; background: #1f2430; color: #e6e6e6; }
.app { padding: 1rem; }
.toolbar { display: flex; gap: 0.5rem; margin-bottom: 1rem; }
.notice { padding: 0.5rem 1rem; margin-bottom: 1rem; border-radius: 4px; display: flex; justify-content: space-between; }
.notice-info { background: #23527c; }
.notice-warning { background: #8a6d3b; }
.notice-error { background: #a94442; }
.character-sheet { border: 1px solid #3a4150; border-radius: 6px; padding: 1rem; margin-bottom: 1rem; }
.sheet-sections { display: flex; gap: 1rem; align-items: flex-start; }
.sheet-section { background: #262c3a; border-radius: 4px; padding: 0.5rem 1rem; }
.sheet-section-narrow { min-width: 12rem; }
.sheet-section-wide { flex: 1; }
.sheet-row { display: flex; gap: 0.5rem; align-items: center; margin: 0.25rem 0; }
.muted { color: #9aa3b2; font-size: 0.9em; }
.class-entry { cursor: pointer; padding: 0.25rem; }
.class-eligible { color: #ff6b6b; }
.class-selected { font-weight: bold; text-decoration: underline; }
"#;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Must be created inside an active Dioxus runtime.
    let mut state = use_context_provider(RosterState::new);

    let records = state.roster.read().clone().into_records();
    let banner = state
        .notice
        .read()
        .clone()
        .map(|notice| (notice.css_class(), notice.message));

    rsx! {
        style { {STYLES} }
        div {
            class: "app",
            h1 { "Character Builder" }
            Toolbar {}

            if let Some((css, message)) = banner {
                div {
                    class: "{css}",
                    span { "{message}" }
                    button {
                        onclick: move |_| state.dismiss(),
                        "Dismiss"
                    }
                }
            }

            for (index, record) in records.into_iter().enumerate() {
                CharacterSheet {
                    // Ids can repeat, so the position is part of the key.
                    key: "{index}-{record.id}",
                    record: record.clone(),
                    on_change: move |(id, data): (CharacterId, CharacterData)| {
                        state.update_character(id, data);
                    },
                }
            }
        }
    }
}
