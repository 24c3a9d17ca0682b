use quick_xml::events::attributes::AttrError;
use reqwest::StatusCode;

/// An error raised while turning request parameters into [`SearchFilters`](crate::SearchFilters).
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// A date parameter is not an ISO 8601 calendar date.
    #[error("Invalid {field} '{value}': date should be ISO8601 format (YYYY-MM-DD)")]
    InvalidDate {
        /// The name of the offending parameter.
        field: &'static str,
        /// The value as it was received.
        value: String,
        /// The parsing error.
        #[source]
        error: time::error::Parse,
    },
}

/// An error raised while talking to the SPARQL endpoint.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    /// The request could not be sent or the response body could not be read.
    #[error("SPARQL endpoint request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("SPARQL endpoint answered with status {status}")]
    Status {
        /// The status returned by the endpoint.
        status: StatusCode,
        /// The response body, usually an error message from the store.
        body: String,
    },
}

/// An error raised while folding a SPARQL results document into events.
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    /// The document is not well-formed XML.
    #[error("Invalid SPARQL results document: {0}")]
    Xml(#[from] quick_xml::Error),
    /// An attribute of the document is malformed.
    #[error("Invalid SPARQL results document: {0}")]
    Attribute(#[from] AttrError),
    /// The root element is not `sparql` in the SPARQL results namespace.
    #[error("Invalid SPARQL results document: unexpected root element <{0}>")]
    UnexpectedRoot(String),
    /// The document ends inside an element.
    #[error("Invalid SPARQL results document: unexpected end of document")]
    UnexpectedEof,
    /// The document has no `results` element.
    #[error("Invalid SPARQL results document: no results element")]
    MissingResults,
    /// A `binding` element lacks its `name` attribute.
    #[error("Invalid SPARQL results document: binding without name")]
    MissingBindingName,
    /// The endpoint returned the result of an ASK query.
    #[error("Expected a solution sequence, found a boolean result")]
    BooleanResult,
}

/// An error raised by [`EventSearch::search`](crate::EventSearch::search).
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
}
