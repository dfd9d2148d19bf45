//! Toolbar - roster-wide actions: add, reset, save and fetch

use dioxus::prelude::*;

use crate::presentation::services::use_roster_service;
use crate::presentation::state::{Notice, RosterState};

#[component]
pub fn Toolbar() -> Element {
    let mut state = use_context::<RosterState>();
    let roster_service = use_roster_service();
    let busy = *state.busy.read();

    let save_service = roster_service.clone();
    let handle_save = move |_| {
        let svc = save_service.clone();
        let snapshot = state.roster.read().clone();
        state.busy.set(true);

        spawn(async move {
            match svc.save_all(&snapshot).await {
                Ok(ack) => {
                    let message = ack
                        .message()
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("Saved {} character(s)", snapshot.len()));
                    state.notify(Notice::info(message));
                }
                Err(e) => state.notify(Notice::error(format!("Failed to save characters: {}", e))),
            }
            state.busy.set(false);
        });
    };

    let fetch_service = roster_service.clone();
    let handle_fetch = move |_| {
        let svc = fetch_service.clone();
        state.busy.set(true);

        spawn(async move {
            // A failed fetch leaves the live roster untouched.
            let mut roster = state.roster.read().clone();
            match svc.refresh(&mut roster).await {
                Ok(count) => {
                    state.roster.set(roster);
                    state.notify(Notice::info(format!("Fetched {} character(s)", count)));
                }
                Err(e) => state.notify(Notice::error(format!("Failed to fetch characters: {}", e))),
            }
            state.busy.set(false);
        });
    };

    rsx! {
        div {
            class: "toolbar",
            button {
                onclick: move |_| {
                    state.add_character();
                },
                "Add New Character"
            }
            button {
                onclick: move |_| state.reset(),
                "Reset All Characters"
            }
            button {
                disabled: busy,
                onclick: handle_save,
                "Save All Characters"
            }
            button {
                disabled: busy,
                onclick: handle_fetch,
                "Fetch Characters"
            }
        }
    }
}
