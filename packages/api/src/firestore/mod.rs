//! # Firestore record store
//!
//! [`FirestoreStore`] implements [`store::RecordStore`] against the Cloud
//! Firestore REST API, one collection per store.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `list_all` | `GET {collection}?pageSize=N`, following `nextPageToken` until the collection is exhausted |
//! | `insert` | `POST {collection}` with every field; Firestore assigns the document id |
//! | `replace` | `PATCH {collection}/{id}?currentDocument.exists=true` with every field |
//! | `remove` | `DELETE {collection}/{id}?currentDocument.exists=true` |
//!
//! The `currentDocument.exists` precondition makes Firestore answer 404 for a
//! missing document instead of silently creating (or ignoring) it, which
//! surfaces as [`StoreError::NotFound`].
//!
//! The client is built once from [`FirestoreSettings`] at startup and handed to
//! the controller; nothing here is global.

pub mod codec;

use reqwest::{Client, Method, RequestBuilder, Response};
use store::{Profile, Record, RecordId, RecordStore, StoreError};
use tracing::debug;

use crate::settings::FirestoreSettings;
use codec::{Document, ListDocuments};

/// Remote user collection in Cloud Firestore.
#[derive(Clone, Debug)]
pub struct FirestoreStore {
    http: Client,
    collection_url: String,
    api_key: Option<String>,
    page_size: u32,
}

impl FirestoreStore {
    pub fn new(settings: &FirestoreSettings) -> Self {
        Self::with_client(Client::new(), settings)
    }

    pub fn with_client(http: Client, settings: &FirestoreSettings) -> Self {
        let collection_url = format!(
            "{}/v1/projects/{}/databases/{}/documents/{}",
            settings.base_url.trim_end_matches('/'),
            settings.project_id,
            settings.database,
            settings.collection,
        );
        Self {
            http,
            collection_url,
            api_key: settings.api_key.clone().filter(|k| !k.is_empty()),
            page_size: settings.page_size.max(1),
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    pub fn document_url(&self, id: &RecordId) -> String {
        format!("{}/{}", self.collection_url, id)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.api_key {
            Some(key) => builder.query(&[("key", key)]),
            None => builder,
        }
    }

    /// Send and turn any non-2xx answer into a [`StoreError`].
    async fn send(
        &self,
        builder: RequestBuilder,
        target: Option<&RecordId>,
    ) -> Result<Response, StoreError> {
        let response = builder
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(codec::status_error(status.as_u16(), &body, target))
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, StoreError> {
        response.json().await.map_err(|e| StoreError::Decode {
            id: self.collection_url.clone(),
            reason: e.to_string(),
        })
    }
}

impl RecordStore for FirestoreStore {
    async fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        let mut records = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut builder = self
                .request(Method::GET, &self.collection_url)
                .query(&[("pageSize", self.page_size)]);
            if let Some(token) = &page_token {
                builder = builder.query(&[("pageToken", token)]);
            }

            let response = self.send(builder, None).await?;
            let page: ListDocuments = self.read_json(response).await?;
            records.extend(page.documents.iter().map(codec::decode));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        debug!(count = records.len(), "Listed documents");
        Ok(records)
    }

    async fn insert(&self, profile: &Profile) -> Result<RecordId, StoreError> {
        let builder = self
            .request(Method::POST, &self.collection_url)
            .json(&codec::encode(profile));
        let response = self.send(builder, None).await?;
        let doc: Document = self.read_json(response).await?;
        Ok(codec::document_id(&doc.name))
    }

    async fn replace(&self, id: &RecordId, profile: &Profile) -> Result<(), StoreError> {
        let builder = self
            .request(Method::PATCH, &self.document_url(id))
            .query(&[("currentDocument.exists", "true")])
            .json(&codec::encode(profile));
        self.send(builder, Some(id)).await?;
        Ok(())
    }

    async fn remove(&self, id: &RecordId) -> Result<(), StoreError> {
        let builder = self
            .request(Method::DELETE, &self.document_url(id))
            .query(&[("currentDocument.exists", "true")]);
        self.send(builder, Some(id)).await?;
        Ok(())
    }
}
