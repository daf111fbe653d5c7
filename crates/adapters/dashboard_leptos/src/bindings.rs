//! Fail-fast check that the mounted page carries every contract element.

use thermaldash_domain::element::ElementId;
use thermaldash_domain::error::DashboardError;
use web_sys::Document;

/// Check that `document` has an element for every [`ElementId`].
///
/// # Errors
///
/// Returns [`DashboardError::MissingBinding`] naming the first absent id.
pub fn verify(document: &Document) -> Result<(), DashboardError> {
    match ElementId::ALL
        .into_iter()
        .find(|id| document.get_element_by_id(id.as_str()).is_none())
    {
        Some(missing) => Err(DashboardError::MissingBinding(missing.as_str())),
        None => Ok(()),
    }
}

/// [`verify`] against the current window's document.
///
/// # Errors
///
/// Returns [`DashboardError::MissingBinding`] for the first absent id, or
/// naming `document` when there is no document at all.
pub fn verify_document() -> Result<(), DashboardError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(DashboardError::MissingBinding("document"))?;
    verify(&document)
}
