use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use event_search::{EndpointError, FilterError, SearchError};

#[derive(thiserror::Error, Debug)]
pub enum EventSearchServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Upstream failure: {0}")]
    Upstream(#[from] SearchError),
}

impl From<FilterError> for EventSearchServerError {
    fn from(error: FilterError) -> Self {
        Self::BadRequest(error.to_string())
    }
}

impl IntoResponse for EventSearchServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            EventSearchServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            EventSearchServerError::Upstream(SearchError::Endpoint(EndpointError::Request(e)))
                if e.is_timeout() =>
            {
                StatusCode::GATEWAY_TIMEOUT
            }
            EventSearchServerError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "Search failed");
        }

        (status, self.to_string()).into_response()
    }
}
