//! Reader for [SPARQL Query Results XML](https://www.w3.org/TR/rdf-sparql-XMLres/)
//! documents, reduced to what the search needs.
//!
//! Only `sparql/results/result/binding` elements are read. The `head` is not
//! consulted, bindings with an unknown name are skipped, and the text of a
//! binding's value element is taken as it is: a `<uri>` is not required to be a
//! valid IRI.

use crate::error::AggregationError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use std::mem::take;

pub const SPARQL_RESULTS_NS: &str = "http://www.w3.org/2005/sparql-results#";

/// One row of the search query's result table. Unbound columns are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingRow {
    pub id: String,
    pub title: String,
    pub date: String,
    pub geometry: String,
    pub area_name: String,
    pub link: String,
    pub place: String,
    pub concept_uri: String,
    pub thesaurus: String,
}

/// The projected variables a row is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Id,
    Title,
    Date,
    Geometry,
    AreaName,
    Link,
    Place,
    ConceptUri,
    Thesaurus,
}

impl Column {
    fn from_variable(name: &str) -> Option<Self> {
        Some(match name {
            "id" => Self::Id,
            "t" => Self::Title,
            "d" => Self::Date,
            "w" => Self::Geometry,
            "n" => Self::AreaName,
            "link" => Self::Link,
            "place" => Self::Place,
            "con" => Self::ConceptUri,
            "thesid" => Self::Thesaurus,
            _ => return None,
        })
    }
}

impl BindingRow {
    fn set(&mut self, column: Column, value: String) {
        let field = match column {
            Column::Id => &mut self.id,
            Column::Title => &mut self.title,
            Column::Date => &mut self.date,
            Column::Geometry => &mut self.geometry,
            Column::AreaName => &mut self.area_name,
            Column::Link => &mut self.link,
            Column::Place => &mut self.place,
            Column::ConceptUri => &mut self.concept_uri,
            Column::Thesaurus => &mut self.thesaurus,
        };
        *field = value;
    }
}

/// Where the reader currently is in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
    Sparql,
    Results,
    Result,
    Binding,
    Value,
    Other,
}

/// Reads the rows of a results document in document order.
pub fn read_rows(xml: &str) -> Result<Vec<BindingRow>, AggregationError> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().expand_empty_elements = true;

    let mut path = Vec::new();
    let mut rows = Vec::new();
    let mut row = BindingRow::default();
    let mut column = None;
    let mut value = String::new();
    let mut has_value = false;
    let mut has_results = false;

    loop {
        let (namespace, event) = reader.read_resolved_event()?;
        let in_sparql_ns = matches!(
            namespace,
            ResolveResult::Bound(Namespace(ns)) if ns == SPARQL_RESULTS_NS.as_bytes()
        );
        match event {
            Event::Start(start) => {
                let local_name = start.local_name();
                let element = match (path.last(), in_sparql_ns, local_name.as_ref()) {
                    (None, true, b"sparql") => Element::Sparql,
                    (None, _, _) => {
                        return Err(AggregationError::UnexpectedRoot(
                            String::from_utf8_lossy(start.name().as_ref()).into_owned(),
                        ))
                    }
                    (Some(Element::Sparql), true, b"boolean") => {
                        return Err(AggregationError::BooleanResult)
                    }
                    (Some(Element::Sparql), true, b"results") => {
                        has_results = true;
                        Element::Results
                    }
                    (Some(Element::Results), true, b"result") => {
                        row = BindingRow::default();
                        Element::Result
                    }
                    (Some(Element::Result), true, b"binding") => {
                        column = binding_column(&start)?;
                        value.clear();
                        has_value = false;
                        Element::Binding
                    }
                    (Some(Element::Binding), _, _) if !has_value => {
                        has_value = true;
                        Element::Value
                    }
                    _ => Element::Other,
                };
                path.push(element);
            }
            Event::End(_) => match path.pop() {
                Some(Element::Binding) => {
                    if let Some(column) = column.take() {
                        row.set(column, take(&mut value));
                    }
                }
                Some(Element::Result) => rows.push(take(&mut row)),
                _ => {}
            },
            Event::Text(text) if path.last() == Some(&Element::Value) && column.is_some() => {
                value.push_str(&text.unescape()?);
            }
            Event::CData(data) if path.last() == Some(&Element::Value) && column.is_some() => {
                value.push_str(&String::from_utf8_lossy(&data));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !path.is_empty() {
        return Err(AggregationError::UnexpectedEof);
    }
    if !has_results {
        return Err(AggregationError::MissingResults);
    }
    Ok(rows)
}

/// The column a `binding` element fills, `None` for variables the search does
/// not project.
fn binding_column(binding: &BytesStart<'_>) -> Result<Option<Column>, AggregationError> {
    let name = binding
        .try_get_attribute("name")?
        .ok_or(AggregationError::MissingBindingName)?;
    Ok(Column::from_variable(&name.unescape_value()?))
}
