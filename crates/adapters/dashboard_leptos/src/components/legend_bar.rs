//! Colour-bar legend: max at the top, midpoint, min at the bottom.

use leptos::prelude::*;
use thermaldash_domain::element::ElementId;
use thermaldash_domain::reading::Legend;

#[component]
pub fn LegendBar(legend: RwSignal<Legend>) -> impl IntoView {
    view! {
        <div class="colorbar">
            <div class="colorbar-scale"></div>
            <div class="colorbar-labels">
                <span id=ElementId::LegendMax.as_str()>{move || legend.with(|l| l.max.clone())}</span>
                <span id=ElementId::LegendMid.as_str()>{move || legend.with(|l| l.mid.clone())}</span>
                <span id=ElementId::LegendMin.as_str()>{move || legend.with(|l| l.min.clone())}</span>
            </div>
        </div>
    }
}
