#![allow(clippy::print_stdout, reason = "Search results are written to stdout")]
use crate::cli::{Args, Command};
use anyhow::Context;
use clap::Parser;
use event_search::{
    build_query, EndpointConfig, EventSearch, HttpSparqlEndpoint, RawSearchParams, SearchFilters,
};
use event_search_web::ServerConfig;
use std::io::{stdout, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    init_tracing();
    let matches = Args::parse();
    match matches.command {
        Command::Serve {
            bind,
            endpoint,
            cors,
        } => {
            event_search_web::serve(ServerConfig {
                bind,
                endpoint: endpoint.into(),
                cors,
            })
            .await
        }
        Command::Search {
            filters,
            endpoint,
            print_query,
        } => search(filters.into(), endpoint.into(), print_query).await,
    }
}

/// Logs go to stderr so that stdout only carries search results.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn search(
    params: RawSearchParams,
    endpoint: EndpointConfig,
    print_query: bool,
) -> anyhow::Result<()> {
    let filters = SearchFilters::try_from(params)?;
    if print_query {
        println!("{}", build_query(&filters));
        return Ok(());
    }

    let endpoint = HttpSparqlEndpoint::new(endpoint)?;
    let url = endpoint.url().to_owned();
    let events = EventSearch::new(Arc::new(endpoint))
        .search(&filters)
        .await
        .with_context(|| format!("Search against {url} failed"))?;

    let mut stdout = stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &events)?;
    writeln!(stdout)?;
    Ok(())
}
