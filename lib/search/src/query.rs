//! Translation of [`SearchFilters`] into the SPARQL query sent to the store.
//!
//! The query targets the news-event ontology of the Strabon deployment: every
//! event has an id, a title, a date, areas with WKT geometries, thesaurus
//! entities and images.

use crate::filters::SearchFilters;
use time::Date;

/// The projection of every search query.
pub const SELECT_CLAUSE: &str = "SELECT distinct ?e ?id ?t ?d ?w ?n ?link ?place ?con ?thesid";

/// Prefix declarations of every search query.
pub const PREFIXES: &str = "PREFIX geo: <http://www.opengis.net/ont/geosparql#>
PREFIX strdf: <http://strdf.di.uoa.gr/ontology#>
PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX xsd: <http://www.w3.org/2001/XMLSchema#>
PREFIX ev: <http://big-data-europe.eu/security/man-made-changes/ontology#>";

/// The graph pattern linking an event to its attributes. The block is left open
/// so that a filter can be appended.
pub const WHERE_BODY: &str = "WHERE{
 ?e rdf:type ev:NewsEvent .
 ?e ev:hasId ?id . ?e ev:hasTitle ?t .
 ?e ev:hasDate ?d .
 ?e ev:hasArea ?a .
 ?a ev:hasName ?n .
 ?a geo:hasGeometry ?g .
 ?e ev:hasEntity ?ent . ?ent ev:hasThesaurusId ?thesid . ?ent ev:hasConceptURI ?con .
 ?e ev:hasImages ?im . ?im  ev:hasLink ?link .
 ?im ev:hasPlace ?place .
 ?g geo:asWKT ?w .";

/// Builds the search query for the given filters.
///
/// The filter clause is only emitted when an extent is given: without one, date
/// and keyword constraints are dropped too. Deployed clients rely on this.
pub fn build_query(filters: &SearchFilters) -> String {
    let mut where_clause = WHERE_BODY.to_owned();
    let expressions = filter_expressions(filters);
    if !expressions.is_empty() && filters.extent.is_some() {
        where_clause.push_str("FILTER(");
        where_clause.push_str(&expressions.join(" && "));
        where_clause.push_str(")}");
    } else {
        where_clause.push('}');
    }
    [PREFIXES, SELECT_CLAUSE, where_clause.as_str()].join("\n")
}

/// Renders the individual filter expressions in a fixed order: upper date bound,
/// lower date bound, keywords, extent.
///
/// Values are interpolated as they are, without any escaping. A `'` in the
/// extent or the keywords ends the string literal and lets the caller inject
/// SPARQL, so the endpoint must only be reachable by trusted clients.
fn filter_expressions(filters: &SearchFilters) -> Vec<String> {
    let mut expressions = Vec::new();
    if let Some(date) = filters.event_date {
        expressions.push(format!("?d < '{}'^^xsd:dateTime", date_time_literal(date)));
    }
    if let Some(date) = filters.reference_date {
        expressions.push(format!("?d > '{}'^^xsd:dateTime", date_time_literal(date)));
    }
    if let Some(keys) = &filters.keys {
        expressions.push(format!("regex(?t, '{keys}','i')"));
    }
    if let Some(extent) = &filters.extent {
        expressions.push(format!("strdf:intersects(?w,'{extent}')"));
    }
    expressions
}

/// Midnight of the given day in `xsd:dateTime` lexical form.
fn date_time_literal(date: Date) -> String {
    format!("{date}T00:00:00")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn date(year: i32, month: Month, day: u8) -> Date {
        Date::from_calendar_date(year, month, day).unwrap()
    }

    fn all_filters() -> SearchFilters {
        SearchFilters {
            extent: Some("POINT(1 10)".to_owned()),
            keys: Some("Camp|Flood".to_owned()),
            event_date: Some(date(2017, Month::January, 1)),
            reference_date: Some(date(2016, Month::January, 1)),
        }
    }

    #[test]
    fn unfiltered_query() {
        let query = build_query(&SearchFilters::default());
        assert_eq!(query, format!("{PREFIXES}\n{SELECT_CLAUSE}\n{WHERE_BODY}}}"));
        assert!(!query.contains("FILTER"));
    }

    #[test]
    fn fixed_parts_are_always_emitted() {
        for filters in [SearchFilters::default(), all_filters()] {
            let query = build_query(&filters);
            assert!(query.starts_with(PREFIXES));
            assert!(query.contains(SELECT_CLAUSE));
            assert!(query.contains(WHERE_BODY));
        }
    }

    #[test]
    fn all_filters_are_joined_in_order() {
        let query = build_query(&all_filters());
        assert!(query.ends_with(
            " ?g geo:asWKT ?w .FILTER(?d < '2017-01-01T00:00:00'^^xsd:dateTime && \
             ?d > '2016-01-01T00:00:00'^^xsd:dateTime && \
             regex(?t, 'Camp|Flood','i') && \
             strdf:intersects(?w,'POINT(1 10)'))}"
        ));
        assert_eq!(query.matches("FILTER(").count(), 1);
    }

    #[test]
    fn extent_alone_is_filtered() {
        let filters = SearchFilters {
            extent: Some("POLYGON((0 0, 1 0, 1 1, 0 0))".to_owned()),
            ..SearchFilters::default()
        };
        assert!(build_query(&filters)
            .ends_with("FILTER(strdf:intersects(?w,'POLYGON((0 0, 1 0, 1 1, 0 0))'))}"));
    }

    #[test]
    fn no_filter_without_extent() {
        let filters = SearchFilters {
            extent: None,
            ..all_filters()
        };
        let query = build_query(&filters);
        assert!(!query.contains("FILTER"));
        assert!(!query.contains("regex"));
        assert!(query.ends_with("?w .}"));
    }

    #[test]
    fn build_is_deterministic() {
        assert_eq!(build_query(&all_filters()), build_query(&all_filters()));
    }
}
