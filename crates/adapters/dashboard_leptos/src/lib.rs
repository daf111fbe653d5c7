//! # thermaldash-adapter-dashboard-leptos
//!
//! Browser dashboard for the thermal camera, rendered client-side with Leptos.
//!
//! ## Responsibilities
//! - Render the page markup with the element ids the dashboard contract names
//! - Implement the application ports for the browser: `gloo-net` feed,
//!   `gloo-timers` scheduler, `web-sys` fullscreen and download, Leptos
//!   signals as the view
//! - Boot sequence: load `/config.json`, mount, verify bindings, start the
//!   controller

use std::rc::Rc;

use leptos::prelude::*;
use thermaldash_app::clock::SystemClock;
use thermaldash_app::services::controller::DashboardController;
use thermaldash_app::services::dashboard_service::DashboardService;
use thermaldash_domain::config::DashboardConfig;

pub mod api;
pub mod bindings;
pub mod browser;
mod components;
pub mod view;

use api::HttpFeed;
use browser::BrowserScheduler;
use components::{Controls, LegendBar, LogPanel, ReadoutPanel, ThermalImage};
use view::SignalView;

/// Dashboard service wired to the browser.
pub type Service = DashboardService<HttpFeed, SystemClock, SignalView>;

/// Page controller wired to the browser.
pub type Controller = DashboardController<HttpFeed, SystemClock, SignalView, BrowserScheduler>;

/// Build the controller for one page session.
#[must_use]
pub fn build_controller(config: &DashboardConfig, view: SignalView) -> Rc<Controller> {
    let service = Rc::new(DashboardService::new(
        HttpFeed::new(config),
        SystemClock,
        view,
        config,
    ));
    let scheduler = BrowserScheduler::new(Rc::clone(&service));
    Rc::new(DashboardController::new(service, scheduler))
}

/// Root application component.
#[component]
pub fn App(
    config: DashboardConfig,
    view: SignalView,
    controller: StoredValue<Rc<Controller>, LocalStorage>,
) -> impl IntoView {
    view! {
        <main class="dashboard">
            <section class="frame">
                <ThermalImage src=view.image_src/>
                <LegendBar legend=view.legend/>
            </section>
            <aside class="side">
                <ReadoutPanel readout=view.readout/>
                <Controls
                    choices=config.interval_choices_ms
                    selected=config.default_interval_ms
                    controller=controller
                />
                <LogPanel log=view.log/>
            </aside>
        </main>
    }
}

/// Load the configuration, mount the page and start polling.
///
/// Polling does not start if the mounted page lacks any element of the
/// dashboard contract.
pub async fn boot() {
    let config = match api::fetch_config().await {
        Ok(config) => config,
        Err(err) => {
            leptos::logging::warn!("using default dashboard config: {err}");
            DashboardConfig::default()
        }
    };

    let view = SignalView::new(config.log_capacity);
    let controller = build_controller(&config, view);
    let stored = StoredValue::new_local(Rc::clone(&controller));

    let page_config = config.clone();
    leptos::mount::mount_to_body(move || {
        view! { <App config=page_config view=view controller=stored/> }
    });

    if let Err(err) = bindings::verify_document() {
        leptos::logging::error!("dashboard not started: {err}");
        return;
    }

    controller.start(config.default_interval_ms).await;
}
