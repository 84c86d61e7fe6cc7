use std::sync::Arc;

use planwright_infra::InMemoryActivityStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    planwright_observability::init();

    let addr = std::env::var("PLANWRIGHT_API_ADDR").unwrap_or_else(|_| {
        tracing::info!("PLANWRIGHT_API_ADDR not set; using 0.0.0.0:8080");
        "0.0.0.0:8080".to_string()
    });

    // Dev default; a durable store plugs in behind the same port.
    let store = Arc::new(InMemoryActivityStore::new());
    let app = planwright_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
