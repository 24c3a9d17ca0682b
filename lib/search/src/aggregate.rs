use crate::error::AggregationError;
use crate::model::{Area, Entity, Event, Image};
use crate::results::{read_rows, BindingRow};
use rustc_hash::FxHashMap;

impl BindingRow {
    fn area(&self) -> Area {
        Area {
            name: self.area_name.clone(),
            geometry: self.geometry.clone(),
        }
    }

    fn entity(&self) -> Entity {
        Entity {
            thesaurus: self.thesaurus.clone(),
            concept_uri: self.concept_uri.clone(),
        }
    }

    fn image(&self) -> Image {
        Image {
            link: self.link.clone(),
            place: self.place.clone(),
        }
    }
}

/// Events keyed by id, kept in the order their ids were first seen.
#[derive(Debug, Default)]
pub struct EventCollection {
    events: Vec<Event>,
    index: FxHashMap<String, usize>,
}

impl EventCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a row into the event with the same id, creating the event on
    /// first sight. Title and date are taken from the first row.
    pub fn insert_row(&mut self, row: BindingRow) {
        let (area, entity, image) = (row.area(), row.entity(), row.image());
        let position = match self.index.get(&row.id) {
            Some(position) => *position,
            None => {
                let position = self.events.len();
                self.index.insert(row.id.clone(), position);
                self.events.push(Event::new(row.id, row.title, row.date));
                position
            }
        };
        let event = &mut self.events[position];
        event.add_area(area);
        event.add_entity(entity);
        event.add_image(image);
    }

    pub fn into_vec(self) -> Vec<Event> {
        self.events
    }
}

/// Folds a [SPARQL Query Results XML](https://www.w3.org/TR/rdf-sparql-XMLres/)
/// document into events.
///
/// The whole document is read before anything is returned: a syntax error in
/// the last result still fails the aggregation.
pub fn aggregate(xml: &str) -> Result<Vec<Event>, AggregationError> {
    let mut events = EventCollection::new();
    for row in read_rows(xml)? {
        events.insert_row(row);
    }
    Ok(events.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, area: &str, image: &str) -> BindingRow {
        BindingRow {
            id: id.to_owned(),
            title: format!("Event {id}"),
            date: "2016-05-01T00:00:00".to_owned(),
            geometry: format!("POINT({area})"),
            area_name: area.to_owned(),
            link: image.to_owned(),
            place: "Athens".to_owned(),
            concept_uri: "http://example.com/concept".to_owned(),
            thesaurus: "thesaurus".to_owned(),
        }
    }

    fn collect(rows: impl IntoIterator<Item = BindingRow>) -> Vec<Event> {
        let mut events = EventCollection::new();
        for row in rows {
            events.insert_row(row);
        }
        events.into_vec()
    }

    #[test]
    fn duplicate_rows_are_idempotent() {
        let events = collect([row("1", "a", "i"), row("1", "a", "i")]);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].areas.len(), 1);
        assert_eq!(events[0].entities.len(), 1);
        assert_eq!(events[0].images.len(), 1);
    }

    #[test]
    fn events_keep_first_seen_order() {
        let events = collect([
            row("b", "1", "i"),
            row("a", "1", "i"),
            row("b", "2", "i"),
            row("c", "1", "i"),
        ]);
        let ids = events.iter().map(|e| e.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, ["b", "a", "c"]);
        assert_eq!(events[0].areas.len(), 2);
    }

    #[test]
    fn first_row_sets_title_and_date() {
        let mut later = row("1", "b", "i");
        later.title = "Renamed".to_owned();
        later.date = "2020-01-01T00:00:00".to_owned();
        let events = collect([row("1", "a", "i"), later]);
        assert_eq!(events[0].title, "Event 1");
        assert_eq!(events[0].event_date, "2016-05-01T00:00:00");
    }

    #[test]
    fn empty_id_is_a_key() {
        let events = collect([BindingRow::default(), BindingRow::default()]);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "");
        assert_eq!(
            events[0].areas,
            [Area {
                name: String::new(),
                geometry: String::new(),
            }]
        );
    }
}
