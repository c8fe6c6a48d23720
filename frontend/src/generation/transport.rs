//! Binary request/response exchange with the generation service.
//!
//! `Transport` is the raw HTTP seam (implemented over `gloo-net` in the browser
//! and by in-memory doubles in tests). `TransportClient` sits on top of it and
//! knows the two service operations: fetching the template and requesting a
//! generation bundle.

use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use log::{debug, info};
use wasm_bindgen::JsValue;
use web_sys::FormData;

use common::{FormValue, GenerationRequest, Payload, ServiceConfig, SourceFile};

use super::error::TransportError;

#[async_trait(?Send)]
pub trait Transport {
    async fn get_binary(&self, url: &str) -> Result<Payload, TransportError>;

    async fn post_multipart(
        &self,
        url: &str,
        request: &GenerationRequest,
    ) -> Result<Payload, TransportError>;
}

/// Talks to the service through the browser's `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get_binary(&self, url: &str) -> Result<Payload, TransportError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| TransportError::Network {
                url: url.to_string(),
                message: err.to_string(),
            })?;
        read_binary(url, response).await
    }

    async fn post_multipart(
        &self,
        url: &str,
        request: &GenerationRequest,
    ) -> Result<Payload, TransportError> {
        let form = build_form_data(request)?;
        let response = Request::post(url)
            .body(form)
            .map_err(|err| TransportError::Encoding(err.to_string()))?
            .send()
            .await
            .map_err(|err| TransportError::Network {
                url: url.to_string(),
                message: err.to_string(),
            })?;
        read_binary(url, response).await
    }
}

async fn read_binary(url: &str, response: Response) -> Result<Payload, TransportError> {
    if !response.ok() {
        return Err(TransportError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let content_type = response.headers().get("content-type");
    let bytes = response
        .binary()
        .await
        .map_err(|err| TransportError::Body {
            url: url.to_string(),
            message: err.to_string(),
        })?;
    Ok(Payload::new(bytes).with_content_type(content_type))
}

fn build_form_data(request: &GenerationRequest) -> Result<FormData, TransportError> {
    let form = FormData::new().map_err(js_error)?;
    for part in request.parts() {
        match part.value {
            FormValue::File {
                file_name,
                content_type,
                bytes,
            } => {
                let blob = web_sys::Blob::from(gloo_file::Blob::new_with_options(
                    bytes,
                    content_type,
                ));
                form.append_with_blob_and_filename(part.name, &blob, file_name)
                    .map_err(js_error)?;
            }
            FormValue::Text(text) => form.append_with_str(part.name, text).map_err(js_error)?,
        }
    }
    Ok(form)
}

fn js_error(value: JsValue) -> TransportError {
    TransportError::Encoding(format!("{:?}", value))
}

/// The two operations of the generation service.
pub struct TransportClient<T> {
    pub(super) transport: Rc<T>,
    config: Rc<ServiceConfig>,
}

impl<T> Clone for TransportClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
            config: Rc::clone(&self.config),
        }
    }
}

impl<T: Transport> TransportClient<T> {
    pub fn new(transport: T, config: ServiceConfig) -> Self {
        Self {
            transport: Rc::new(transport),
            config: Rc::new(config),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// `GET /modele`.
    pub async fn fetch_template(&self) -> Result<Payload, TransportError> {
        let url = self.config.template_url();
        debug!("fetching template from {}", url);
        self.transport.get_binary(&url).await
    }

    /// `POST /fichiers-copropriete` with the file and every key.
    ///
    /// `Ok(None)` means nothing was sent: either no file or no key. The
    /// network is not touched in that case.
    pub async fn request_generation<K: AsRef<str>>(
        &self,
        file: Option<&SourceFile>,
        keys: &[K],
    ) -> Result<Option<Payload>, TransportError> {
        let Some(request) = GenerationRequest::new(file, keys) else {
            debug!("generation skipped: missing file or document keys");
            return Ok(None);
        };
        self.send(&request).await.map(Some)
    }

    async fn send(&self, request: &GenerationRequest) -> Result<Payload, TransportError> {
        let url = self.config.generation_url();
        info!(
            "requesting {} document(s) from {} for {}",
            request.keys.len(),
            url,
            request.file.name
        );
        self.transport.post_multipart(&url, request).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use common::requests::{FILE_FIELD, KEYS_FIELD};
    use std::cell::RefCell;

    /// One recorded multipart part: field name plus either the file name or the text.
    pub type RecordedPart = (&'static str, String);

    /// In-memory service: counts calls, records bodies, answers with a canned result.
    #[derive(Default)]
    pub struct FakeTransport {
        pub gets: RefCell<Vec<String>>,
        pub posts: RefCell<Vec<(String, Vec<RecordedPart>)>>,
        pub failure: Option<TransportError>,
    }

    impl FakeTransport {
        pub fn failing(error: TransportError) -> Self {
            Self {
                failure: Some(error),
                ..Self::default()
            }
        }

        pub fn calls(&self) -> usize {
            self.gets.borrow().len() + self.posts.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl Transport for FakeTransport {
        async fn get_binary(&self, url: &str) -> Result<Payload, TransportError> {
            self.gets.borrow_mut().push(url.to_string());
            match &self.failure {
                Some(error) => Err(error.clone()),
                None => Ok(Payload::new(b"xlsx".to_vec())),
            }
        }

        async fn post_multipart(
            &self,
            url: &str,
            request: &GenerationRequest,
        ) -> Result<Payload, TransportError> {
            let parts = request
                .parts()
                .into_iter()
                .map(|part| match part.value {
                    FormValue::File { file_name, .. } => (part.name, file_name.to_string()),
                    FormValue::Text(text) => (part.name, text.to_string()),
                })
                .collect();
            self.posts.borrow_mut().push((url.to_string(), parts));
            match &self.failure {
                Some(error) => Err(error.clone()),
                None => Ok(Payload::new(b"zip".to_vec())),
            }
        }
    }

    fn client_for(transport: FakeTransport) -> TransportClient<FakeTransport> {
        TransportClient::new(transport, ServiceConfig::default())
    }

    fn csv() -> SourceFile {
        SourceFile::new("data.csv", b"niveau;lots".to_vec())
    }

    #[tokio::test]
    async fn no_network_without_keys() {
        let client = client_for(FakeTransport::default());
        let result = client.request_generation::<&str>(Some(&csv()), &[]).await;
        assert_eq!(result, Ok(None));
        assert_eq!(client.transport.calls(), 0);
    }

    #[tokio::test]
    async fn no_network_without_file() {
        let client = client_for(FakeTransport::default());
        let result = client.request_generation(None, &["TA", "PV"]).await;
        assert_eq!(result, Ok(None));
        assert_eq!(client.transport.calls(), 0);
    }

    #[tokio::test]
    async fn multipart_holds_one_file_and_every_key() {
        let client = client_for(FakeTransport::default());
        let keys = ["Quot P CH2", "TR-C", "Reglement"];

        let payload = client.request_generation(Some(&csv()), &keys).await.unwrap();
        assert_eq!(payload.map(|p| p.bytes), Some(b"zip".to_vec()));

        let posts = client.transport.posts.borrow();
        assert_eq!(posts.len(), 1);
        let (url, parts) = &posts[0];
        assert_eq!(url, "/api/fichiers-copropriete");

        let files: Vec<_> = parts.iter().filter(|(name, _)| *name == FILE_FIELD).collect();
        assert_eq!(files, vec![&(FILE_FIELD, "data.csv".to_string())]);

        let sent: Vec<_> = parts
            .iter()
            .filter(|(name, _)| *name == KEYS_FIELD)
            .map(|(_, value)| value.as_str())
            .collect();
        assert_eq!(sent, keys);
    }

    #[tokio::test]
    async fn template_fetch_uses_configured_url() {
        let transport = FakeTransport::default();
        let client = TransportClient::new(
            transport,
            ServiceConfig::default().with_base_url("http://localhost:8000"),
        );
        client.fetch_template().await.unwrap();
        assert_eq!(
            client.transport.gets.borrow().as_slice(),
            ["http://localhost:8000/modele".to_string()]
        );
    }

    #[tokio::test]
    async fn failures_come_back_as_errors() {
        let status = TransportError::Status {
            url: "/api/modele".to_string(),
            status: 500,
        };
        let client = client_for(FakeTransport::failing(status.clone()));
        assert_eq!(client.fetch_template().await, Err(status.clone()));
        assert_eq!(
            client.request_generation(Some(&csv()), &["TA"]).await,
            Err(status)
        );

        let network = TransportError::Network {
            url: "/api/modele".to_string(),
            message: "connection refused".to_string(),
        };
        let client = client_for(FakeTransport::failing(network.clone()));
        assert_eq!(client.fetch_template().await, Err(network));
    }
}
