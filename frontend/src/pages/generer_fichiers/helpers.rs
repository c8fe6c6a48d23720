//! Browser-side helpers for the page: reading the picked file and toasts.

use gloo_file::{futures::read_as_bytes, Blob};
use log::warn;

use common::{PayloadKind, SourceFile};

/// Reads the whole picked file into memory. `None` if the browser refused.
pub async fn read_source_file(file: web_sys::File) -> Option<SourceFile> {
    let name = file.name();
    let content_type = file.type_();
    match read_as_bytes(&Blob::from(file)).await {
        Ok(bytes) => Some(SourceFile::new(name, bytes).with_content_type(content_type)),
        Err(err) => {
            warn!("could not read {}: {:?}", name, err);
            None
        }
    }
}

pub fn failure_message(kind: PayloadKind) -> &'static str {
    match kind {
        PayloadKind::Template => "Le modèle n'a pas pu être téléchargé.",
        PayloadKind::Bundle => "Les fichiers de coproprieté n'ont pas pu être générés.",
    }
}

/// Displays a temporary notification at the bottom of the screen, removed
/// after three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(message));
        toast.set_class_name("toast");

        if body.append_child(&toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(3000).await;
                toast.remove();
            });
        }
    }
}
