use async_trait::async_trait;
use pgprobe_core::{Product, ProductQuery};

use crate::{ClientError, ProbeClient};

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn fetch_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ClientError>;

    async fn close(&self);
}

#[async_trait]
impl ProductStore for ProbeClient {
    async fn fetch_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ClientError> {
        ProbeClient::fetch_products(self, query).await
    }

    async fn close(&self) {
        ProbeClient::close(self).await
    }
}
