use std::fmt::{self, Display};

use pgprobe_core::ProductQuery;

use crate::store::ProductStore;
use crate::{ClientError, ProbeClient};

#[derive(Debug)]
pub enum CheckOutcome {
    Success(String),
    Failure(ClientError),
}

impl CheckOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckOutcome::Success(_))
    }
}

impl Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Success(payload) => write!(f, "Success: {}", payload),
            CheckOutcome::Failure(err) => write!(f, "Error: {}", err),
        }
    }
}

pub async fn run<S: ProductStore>(store: S, query: &ProductQuery) -> CheckOutcome {
    let report = match store.fetch_products(query).await {
        Ok(products) => serde_json::to_string(&products).map_err(ClientError::from),
        Err(err) => Err(err),
    };
    store.close().await;

    match report {
        Ok(payload) => CheckOutcome::Success(payload),
        Err(err) => CheckOutcome::Failure(err),
    }
}

pub async fn run_env(query: &ProductQuery) -> CheckOutcome {
    match ProbeClient::connect_env() {
        Ok(client) => run(client, query).await,
        Err(err) => CheckOutcome::Failure(err),
    }
}
