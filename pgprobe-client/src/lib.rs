use pgprobe_core::{Group, Product, ProductQuery};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use thiserror::Error;

pub use sqlx;

pub mod check;
pub mod store;

#[derive(Debug, Clone)]
pub struct ProbeClient {
    pool: PgPool,
}

impl ProbeClient {
    pub fn connect(database_url: &str) -> Result<Self, ClientError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    pub fn connect_env() -> Result<Self, ClientError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ClientError::msg("DATABASE_URL is not set"))?;
        Self::connect(&database_url)
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn ping(&self) -> Result<(), ClientError> {
        sqlx::query("SELECT 1")
            .execute(self.pool())
            .await?
            .rows_affected();
        Ok(())
    }

    pub async fn fetch_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ClientError> {
        let sql = query.to_sql();
        let rows = sqlx::query(&sql).fetch_all(self.pool()).await?;
        rows.iter()
            .map(|row| product_from_row(row, query.include_group))
            .collect()
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn product_from_row(row: &PgRow, include_group: bool) -> Result<Product, ClientError> {
    let id = row.try_get("product_id")?;
    if !include_group {
        return Ok(Product::bare(id));
    }

    let group = match row.try_get::<Option<i32>, _>("group_id")? {
        Some(group_id) => Some(Group {
            id: group_id,
            name: row.try_get("group_name")?,
        }),
        None => None,
    };
    Ok(Product { id, group })
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Message(String),
}

impl ClientError {
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

pub mod prelude {
    pub use crate::check::{run, run_env, CheckOutcome};
    pub use crate::store::ProductStore;
    pub use crate::{ClientError, ProbeClient};
    pub use sqlx;
}
