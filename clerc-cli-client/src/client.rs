use crate::config::Configuration;
use crate::error::{ClercError, Result};
use bytes::Bytes;
use clerc_models::{Buckets, Keys};
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Blocking client for the riak HTTP API.
///
/// Bucket and key names are interpolated into paths as they are, without
/// any escaping.
#[derive(Debug, Clone)]
pub struct RiakClient {
    base_url: String,
    http: Client,
}

impl RiakClient {
    pub fn new(config: &Configuration) -> Result<Self> {
        // No timeout: a stuck server keeps us waiting.
        let http = Client::builder().timeout(None).build()?;
        Ok(Self::with_client(&config.server_url, http))
    }

    pub fn with_client(base_url: &str, http: Client) -> Self {
        Self {
            base_url: base_url.to_string(),
            http,
        }
    }

    pub fn list_buckets(&self) -> Result<Buckets> {
        self.get_json("/buckets?buckets=true")
    }

    pub fn list_keys(&self, bucket: &str) -> Result<Keys> {
        self.get_json(&format!("/buckets/{}/keys?keys=true", bucket))
    }

    pub fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes> {
        let url = self.url(&format!("/buckets/{}/keys/{}", bucket, key));
        log::debug!("Making request: {}", url);

        let response = self.http.get(&url).send()?;
        read_expected(response, StatusCode::OK)
    }

    pub fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> Result<()> {
        let url = self.url(&object_resource(bucket, key));
        log::debug!("Making request: {}", url);

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;
        read_expected(response, StatusCode::NO_CONTENT)?;

        Ok(())
    }

    /// Any status is accepted.
    pub fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        let url = self.url(&object_resource(bucket, key));
        log::debug!("Deleting: {}", url);

        let response = self.http.delete(&url).send()?;
        log::debug!("Deleted object: {}", key);
        read_body(response)?;

        Ok(())
    }

    fn get_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T> {
        let url = self.url(resource);
        log::debug!("Making request: {}", url);

        let response = self.http.get(&url).send()?;
        let body = read_expected(response, StatusCode::OK)?;

        Ok(serde_json::from_slice(&body)?)
    }

    fn url(&self, resource: &str) -> String {
        format!("{}{}", self.base_url, resource)
    }
}

fn object_resource(bucket: &str, key: &str) -> String {
    format!("/riak/{}/{}", bucket, key)
}

/// Drains the body first so the connection is released on every path, then
/// checks the status.
fn read_expected(response: Response, expected: StatusCode) -> Result<Bytes> {
    let actual = response.status();
    let body = read_body(response)?;
    assert_status(actual, expected)?;
    Ok(body)
}

fn read_body(response: Response) -> Result<Bytes> {
    let body = response.bytes()?;
    log::debug!("Got response: {}", String::from_utf8_lossy(&body));
    Ok(body)
}

fn assert_status(actual: StatusCode, expected: StatusCode) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(ClercError::Status { expected, actual })
    }
}
