// src/shared/remote/rest_client.rs
use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::service::{RemoteDataService, RemoteError, SelectQuery};

/// Path prefix of the table REST API (PostgREST layout).
const REST_PREFIX: &str = "rest/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// Internal seam so the client can be tested without a live server.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, api_key: &str, request: HttpRequest) -> Result<HttpReply, String>;
}

/// Production transport backed by `reqwest`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, api_key: &str, request: HttpRequest) -> Result<HttpReply, String> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(request.url),
            HttpMethod::Post => self.client.post(request.url),
            HttpMethod::Patch => self.client.patch(request.url),
            HttpMethod::Delete => self.client.delete(request.url),
        };

        let mut builder = builder
            .header("apikey", api_key)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Accept", "application/json")
            .header("Prefer", "return=representation");

        if let Some(body) = request.body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = builder.send().await.map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.to_string())?;

        Ok(HttpReply { status, body })
    }
}

/// Remote data service speaking the PostgREST table protocol:
/// `GET/POST/PATCH/DELETE {base}/rest/v1/{table}?col=eq.value&order=col.asc`.
pub struct RestTableClient {
    base_url: Url,
    api_key: String,
    transport: Box<dyn HttpTransport>,
}

impl RestTableClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let transport = ReqwestTransport::new(timeout)?;
        Self::with_transport(base_url, api_key, Box::new(transport))
    }

    pub fn with_transport(
        base_url: &str,
        api_key: &str,
        transport: Box<dyn HttpTransport>,
    ) -> Result<Self, RemoteError> {
        // A trailing slash keeps Url::join from dropping the last segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| RemoteError::Network(format!("invalid remote url: {}", e)))?;

        Ok(Self {
            base_url,
            api_key: api_key.to_string(),
            transport,
        })
    }

    fn table_url(&self, table: &str) -> Result<Url, RemoteError> {
        self.base_url
            .join(&format!("{}/{}", REST_PREFIX, table))
            .map_err(|e| RemoteError::Network(format!("invalid table url: {}", e)))
    }

    fn id_url(&self, table: &str, id: &str) -> Result<Url, RemoteError> {
        let mut url = self.table_url(table)?;
        url.query_pairs_mut().append_pair("id", &format!("eq.{}", id));
        Ok(url)
    }

    async fn call(&self, request: HttpRequest) -> Result<Value, RemoteError> {
        debug!("Remote {:?} {}", request.method, request.url);

        let reply = self
            .transport
            .send(&self.api_key, request)
            .await
            .map_err(RemoteError::Network)?;

        match reply.status {
            200..=299 => {
                if reply.body.trim().is_empty() {
                    Ok(Value::Array(vec![]))
                } else {
                    Ok(serde_json::from_str(&reply.body)?)
                }
            }
            404 => Err(RemoteError::NotFound),
            409 => Err(RemoteError::Conflict(reply.body)),
            status => Err(RemoteError::Status {
                status,
                message: reply.body,
            }),
        }
    }
}

fn into_rows(value: Value) -> Result<Vec<Value>, RemoteError> {
    match value {
        Value::Array(rows) => Ok(rows),
        other => Err(RemoteError::Decode(format!(
            "expected an array of rows, got {}",
            other
        ))),
    }
}

#[async_trait]
impl RemoteDataService for RestTableClient {
    async fn select_single(&self, table: &str) -> Result<Option<Value>, RemoteError> {
        let rows = self.select(table, SelectQuery::new().limit(1)).await?;
        Ok(rows.into_iter().next())
    }

    async fn select(&self, table: &str, query: SelectQuery) -> Result<Vec<Value>, RemoteError> {
        let mut url = self.table_url(table)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", "*");
            for (column, value) in &query.filters {
                pairs.append_pair(column, &format!("eq.{}", value));
            }
            if let Some(order) = &query.order {
                let direction = if order.ascending { "asc" } else { "desc" };
                pairs.append_pair("order", &format!("{}.{}", order.column, direction));
            }
            if let Some(limit) = query.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
        }

        let value = self
            .call(HttpRequest {
                method: HttpMethod::Get,
                url,
                body: None,
            })
            .await?;
        into_rows(value)
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, RemoteError> {
        let value = self
            .call(HttpRequest {
                method: HttpMethod::Post,
                url: self.table_url(table)?,
                body: Some(row.to_string()),
            })
            .await?;

        into_rows(value)?
            .into_iter()
            .next()
            .ok_or_else(|| RemoteError::Decode("insert returned no row".to_string()))
    }

    async fn update_by_id(&self, table: &str, id: &str, row: Value) -> Result<Value, RemoteError> {
        let value = self
            .call(HttpRequest {
                method: HttpMethod::Patch,
                url: self.id_url(table, id)?,
                body: Some(row.to_string()),
            })
            .await?;

        into_rows(value)?
            .into_iter()
            .next()
            .ok_or(RemoteError::NotFound)
    }

    async fn delete_by_id(&self, table: &str, id: &str) -> Result<(), RemoteError> {
        let value = self
            .call(HttpRequest {
                method: HttpMethod::Delete,
                url: self.id_url(table, id)?,
                body: None,
            })
            .await?;

        if into_rows(value)?.is_empty() {
            return Err(RemoteError::NotFound);
        }
        Ok(())
    }
}
