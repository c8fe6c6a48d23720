//! Turns an in-memory payload into a file saved by the browser.
//!
//! Every `save` creates its own temporary object URL, clicks a hidden
//! `<a download>` bound to it, then releases the URL. Release happens after the
//! click whether or not the click succeeded.

use std::rc::Rc;

use gloo_file::{Blob, ObjectUrl};
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use common::Payload;

use super::error::DownloadError;

/// The host environment able to persist a payload for the user.
pub trait SaveHost {
    /// Temporary handle on the payload, valid until released.
    type Reference;

    fn create_reference(&self, payload: &Payload) -> Result<Self::Reference, DownloadError>;

    fn trigger_save(&self, reference: &Self::Reference, file_name: &str)
        -> Result<(), DownloadError>;

    fn release(&self, reference: Self::Reference);
}

/// Saves through an object URL and a synthetic anchor click.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSaveHost;

impl SaveHost for BrowserSaveHost {
    type Reference = ObjectUrl;

    fn create_reference(&self, payload: &Payload) -> Result<ObjectUrl, DownloadError> {
        let blob = Blob::new_with_options(
            payload.bytes.as_slice(),
            payload.content_type.as_deref(),
        );
        Ok(ObjectUrl::from(blob))
    }

    fn trigger_save(&self, url: &ObjectUrl, file_name: &str) -> Result<(), DownloadError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(DownloadError::NoDocument)?;
        let body = document.body().ok_or(DownloadError::NoDocument)?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|err| DownloadError::Link(format!("{:?}", err)))?
            .dyn_into()
            .map_err(|_| DownloadError::Link("element is not an anchor".to_string()))?;
        anchor.set_href(url);
        anchor.set_download(file_name);
        anchor.style().set_property("display", "none").ok();

        body.append_child(&anchor)
            .map_err(|err| DownloadError::Link(format!("{:?}", err)))?;
        anchor.click();
        anchor.remove();
        Ok(())
    }

    fn release(&self, url: ObjectUrl) {
        // ObjectUrl revokes itself on drop.
        drop(url);
    }
}

pub struct DownloadTrigger<H> {
    pub(super) host: Rc<H>,
}

impl<H> Clone for DownloadTrigger<H> {
    fn clone(&self) -> Self {
        Self {
            host: Rc::clone(&self.host),
        }
    }
}

impl<H: SaveHost> DownloadTrigger<H> {
    pub fn new(host: H) -> Self {
        Self {
            host: Rc::new(host),
        }
    }

    pub fn save(&self, payload: &Payload, file_name: &str) -> Result<(), DownloadError> {
        let reference = self.host.create_reference(payload)?;
        let saved = self.host.trigger_save(&reference, file_name);
        self.host.release(reference);
        if saved.is_ok() {
            debug!("offered {} ({} bytes) for download", file_name, payload.len());
        }
        saved
    }
}
