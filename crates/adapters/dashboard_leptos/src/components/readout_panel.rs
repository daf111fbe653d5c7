//! Min / max / average temperature readout.

use leptos::prelude::*;
use thermaldash_domain::element::ElementId;
use thermaldash_domain::reading::Readout;

/// Three labelled temperatures, blank until the first reading arrives.
#[component]
pub fn ReadoutPanel(readout: RwSignal<Readout>) -> impl IntoView {
    view! {
        <dl class="readout">
            <dt>"Min"</dt>
            <dd id=ElementId::Min.as_str()>{move || readout.with(|r| r.min.clone())}</dd>
            <dt>"Max"</dt>
            <dd id=ElementId::Max.as_str()>{move || readout.with(|r| r.max.clone())}</dd>
            <dt>"Avg"</dt>
            <dd id=ElementId::Avg.as_str()>{move || readout.with(|r| r.avg.clone())}</dd>
        </dl>
    }
}
