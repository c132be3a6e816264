use lamedh_runtime::{handler_fn, run, Context, Error};
use okv4_function::{handler, Envelope};
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).try_init()?;

    info!("Loading function");
    run(handler_fn(func)).await?;
    Ok(())
}

async fn func(event: Value, context: Context) -> Result<Envelope, Error> {
    debug!(request_id = %context.request_id, "invoked");
    handler(event, context)
}
