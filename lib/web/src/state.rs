use event_search::EventSearch;

#[derive(Clone)]
pub struct AppState {
    pub search: EventSearch,
}
