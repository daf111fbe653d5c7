//! Event log panel, newest line first.

use leptos::prelude::*;
use thermaldash_domain::element::ElementId;
use thermaldash_domain::log::EventLog;

#[component]
pub fn LogPanel(log: RwSignal<EventLog>) -> impl IntoView {
    view! {
        <div id=ElementId::LogBox.as_str() class="logbox">
            {move || {
                log.with(|entries| {
                    entries
                        .iter()
                        .map(|entry| view! { <div>{entry.to_string()}</div> })
                        .collect_view()
                })
            }}
        </div>
    }
}
