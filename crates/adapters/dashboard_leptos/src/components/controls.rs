//! Refresh-interval selector plus the save and fullscreen buttons.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thermaldash_app::services::fullscreen::toggle_fullscreen;
use thermaldash_domain::element::ElementId;
use thermaldash_domain::interval::RefreshInterval;

use crate::Controller;
use crate::browser::{self, DocumentFullscreen};

#[component]
pub fn Controls(
    /// Periods offered, in display order.
    choices: Vec<RefreshInterval>,
    /// Period the timers start with.
    selected: RefreshInterval,
    controller: StoredValue<Rc<Controller>, LocalStorage>,
) -> impl IntoView {
    let on_change = move |ev| {
        let raw = event_target_value(&ev);
        controller.with_value(|c| {
            if let Err(err) = c.change_interval(&raw) {
                leptos::logging::warn!("{err}");
            }
        });
    };

    // A failed save is reported on the console only, never in the log panel.
    let on_save = move |_| {
        let controller = controller.get_value();
        spawn_local(async move {
            match controller.service().capture().await {
                Ok(capture) => {
                    if let Err(err) = browser::download(&capture) {
                        leptos::logging::error!("failed to save {}: {err:?}", capture.filename);
                    }
                }
                Err(err) => leptos::logging::error!("failed to fetch frame: {err}"),
            }
        });
    };

    let on_fullscreen = move |_| {
        if let Err(err) = toggle_fullscreen(&DocumentFullscreen) {
            leptos::logging::error!("fullscreen request refused: {err:?}");
        }
    };

    view! {
        <div class="controls">
            <label for=ElementId::RefreshInterval.as_str()>"Refresh"</label>
            <select id=ElementId::RefreshInterval.as_str() on:change=on_change>
                {choices
                    .into_iter()
                    .map(|choice| {
                        view! {
                            <option value=choice.as_millis().to_string() selected={choice == selected}>
                                {choice.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <button id=ElementId::SaveButton.as_str() on:click=on_save>"Save image"</button>
            <button id=ElementId::FullscreenButton.as_str() on:click=on_fullscreen>"Fullscreen"</button>
        </div>
    }
}
