//! Alexa Proxy Lambda - Forwards Alexa skill requests to the Ariadne backend.
//!
//! One binary is deployed under several function names; the name picks the
//! Smart Home skill, the Custom skill or a diagnostic greeting.

mod routes;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use shared::{Config, Forwarder};
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::routes::{dispatch, InvocationOutput};

async fn handler(
    forwarder: Arc<Forwarder>,
    event: LambdaEvent<Value>,
) -> Result<InvocationOutput, Error> {
    let (envelope, context) = event.into_parts();
    let function_name = context.env_config.function_name.as_str();

    debug!(
        request_id = %context.request_id,
        function_name,
        event = %envelope,
        "Received invocation"
    );

    Ok(dispatch(&forwarder, function_name, &envelope).await?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    let forwarder = Arc::new(Forwarder::new(config)?);

    run(service_fn(move |event| {
        let forwarder = Arc::clone(&forwarder);
        async move { handler(forwarder, event).await }
    }))
    .await
}
