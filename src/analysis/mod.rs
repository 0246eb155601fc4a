/// Analysis layer: the incident predicate, coordinate extraction, and
/// the map document.
pub mod geo;
pub mod incidents;
pub mod map;
