use crate::aggregate::aggregate;
use crate::client::SparqlEndpoint;
use crate::error::SearchError;
use crate::filters::SearchFilters;
use crate::model::Event;
use crate::query::build_query;
use std::sync::Arc;
use tracing::info;

/// Runs searches against a SPARQL endpoint.
///
/// Cloning is cheap; every clone talks to the same endpoint. A search keeps no
/// state beyond its own call.
#[derive(Clone)]
pub struct EventSearch {
    endpoint: Arc<dyn SparqlEndpoint>,
}

impl EventSearch {
    pub fn new(endpoint: Arc<dyn SparqlEndpoint>) -> Self {
        Self { endpoint }
    }

    /// Builds the query for `filters`, evaluates it and aggregates the results.
    ///
    /// Nothing is aggregated before the endpoint has returned the complete
    /// response, so a failing request never yields a partial list.
    pub async fn search(&self, filters: &SearchFilters) -> Result<Vec<Event>, SearchError> {
        let query = build_query(filters);
        info!(%query, "Event-Retrieve query");

        let results = self.endpoint.query(&query).await?;
        let events = aggregate(&results)?;
        info!(count = events.len(), "Parsed events");
        Ok(events)
    }
}
