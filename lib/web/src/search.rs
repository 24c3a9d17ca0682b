use crate::error::EventSearchServerError;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use event_search::{Event, RawSearchParams, SearchFilters};

/// Plain-text hint served on the root path.
pub const USAGE: &str = "Please use the API call \"search\"\n\
e.g., http://localhost:8000/search?extent=POINT(1%2010)&reference_date=2016-01-01&event_date=2017-01-01&keys=Camp";

/// Searches for events matching the query parameters and returns them as a JSON
/// array.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<RawSearchParams>,
) -> Result<Json<Vec<Event>>, EventSearchServerError> {
    let filters = SearchFilters::try_from(params)?;
    let events = state.search.search(&filters).await?;
    Ok(Json(events))
}
