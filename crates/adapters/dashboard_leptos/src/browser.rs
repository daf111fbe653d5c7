//! Browser implementations of the scheduler and fullscreen ports, plus the
//! one-shot download used by the save button.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::task::spawn_local;
use thermaldash_app::ports::{Fullscreen, Scheduler, TimerTask};
use thermaldash_app::services::dashboard_service::Capture;
use thermaldash_domain::interval::RefreshInterval;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

use crate::Service;

/// MIME type of frames served by `/image`.
const IMAGE_MIME: &str = "image/jpeg";

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// [`Scheduler`] backed by `setInterval`.
///
/// Dropping an [`Interval`] clears it, so cancelling is dropping the handle.
pub struct BrowserScheduler {
    service: Rc<Service>,
}

impl BrowserScheduler {
    #[must_use]
    pub fn new(service: Rc<Service>) -> Self {
        Self { service }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = Interval;

    fn every(&self, task: TimerTask, period: RefreshInterval) -> Interval {
        let service = Rc::clone(&self.service);
        Interval::new(period.as_millis(), move || match task {
            TimerTask::RefreshImage => service.refresh_image(),
            TimerTask::RefreshStatus => {
                let service = Rc::clone(&service);
                spawn_local(async move {
                    service.refresh_status().await;
                });
            }
        })
    }

    fn cancel(&self, handle: Interval) {
        drop(handle);
    }
}

/// [`Fullscreen`] over the document's Fullscreen API.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentFullscreen;

impl Fullscreen for DocumentFullscreen {
    type Error = JsValue;

    fn is_active(&self) -> bool {
        document().is_ok_and(|doc| doc.fullscreen_element().is_some())
    }

    fn enter(&self) -> Result<(), JsValue> {
        document()?
            .document_element()
            .ok_or_else(|| JsValue::from_str("no root element"))?
            .request_fullscreen()
    }

    fn exit(&self) -> Result<(), JsValue> {
        document()?.exit_fullscreen();
        Ok(())
    }
}

/// Hand `capture` to the browser as a file download.
///
/// The object URL lives only for the duration of the synthetic click.
///
/// # Errors
///
/// Returns the `JsValue` raised by any DOM call.
pub fn download(capture: &Capture) -> Result<(), JsValue> {
    let document = document()?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let bytes = js_sys::Uint8Array::from(capture.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(IMAGE_MIME);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&capture.filename);
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();

    Url::revoke_object_url(&url)
}
