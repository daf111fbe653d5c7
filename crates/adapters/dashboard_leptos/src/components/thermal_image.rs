//! The thermal frame, re-fetched whenever its source changes.

use leptos::prelude::*;
use thermaldash_domain::element::ElementId;

#[component]
pub fn ThermalImage(
    /// Cache-busted image URL; empty until the first refresh.
    src: RwSignal<String>,
) -> impl IntoView {
    view! {
        <img id=ElementId::ThermalImage.as_str() class="thermal" src=move || src.get() alt="Thermal frame"/>
    }
}
