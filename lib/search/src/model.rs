use serde::Serialize;

/// A news event together with everything the store links to it.
///
/// Events are identified by [`Event::id`]. The related records are kept in the
/// order they were first seen, without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// The date as returned by the store (an `xsd:dateTime` lexical value).
    #[serde(rename = "eventDate")]
    pub event_date: String,
    pub areas: Vec<Area>,
    pub entities: Vec<Entity>,
    pub images: Vec<Image>,
}

impl Event {
    /// Creates an event without any related records.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        event_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            event_date: event_date.into(),
            areas: Vec::new(),
            entities: Vec::new(),
            images: Vec::new(),
        }
    }

    pub fn add_area(&mut self, area: Area) {
        push_unique(&mut self.areas, area);
    }

    pub fn add_entity(&mut self, entity: Entity) {
        push_unique(&mut self.entities, entity);
    }

    pub fn add_image(&mut self, image: Image) {
        push_unique(&mut self.images, image);
    }
}

fn push_unique<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if !values.contains(&value) {
        values.push(value);
    }
}

/// A named area an event took place in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Area {
    pub name: String,
    /// WKT serialization of the area.
    pub geometry: String,
}

/// A thesaurus concept mentioned by an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entity {
    pub thesaurus: String,
    pub concept_uri: String,
}

/// A picture of an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Image {
    pub link: String,
    pub place: String,
}
