#![doc = include_str!("../README.md")]

pub mod aggregate;
pub mod client;
pub mod error;
pub mod filters;
pub mod model;
mod pipeline;
pub mod query;
pub mod results;

pub use aggregate::{aggregate, EventCollection};
pub use client::{EndpointConfig, HttpSparqlEndpoint, SparqlEndpoint};
pub use error::{AggregationError, EndpointError, FilterError, SearchError};
pub use filters::{RawSearchParams, SearchFilters};
pub use model::{Area, Entity, Event, Image};
pub use pipeline::EventSearch;
pub use query::build_query;
pub use results::BindingRow;
