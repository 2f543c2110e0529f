use axum::Router;
use clap::Parser;
use globejobs::config::{Command, Config};
use globejobs::models::search::{MAX_LIMIT, SearchEnvelope, SearchRequest};
use globejobs::pipeline::JobSearch;
use globejobs::providers::{self, feed};
use globejobs::routes;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("globejobs=info,tower_http=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    let client = feed::http_client()?;
    let search = JobSearch::new(providers::registry(&client, &config))
        .with_timeout(config.provider_timeout());
    tracing::info!("Registered providers: {}", search.provider_names().join(", "));

    match config.resolved_command() {
        Command::Serve { listen_addr } => serve(search, &listen_addr).await,
        Command::Search {
            query,
            location,
            limit,
        } => run_search(search, query, location, limit).await,
    }
}

async fn serve(search: JobSearch, listen_addr: &str) -> anyhow::Result<()> {
    let app = Router::new()
        .merge(routes::router(search))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    tracing::info!("Listening on {listen_addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn run_search(
    search: JobSearch,
    query: String,
    location: String,
    limit: usize,
) -> anyhow::Result<()> {
    let request = SearchRequest::new(query.trim(), location.trim(), limit.clamp(1, MAX_LIMIT));
    let results = search.search(&request).await?;
    let envelope = SearchEnvelope::from(results);
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
