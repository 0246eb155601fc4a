/// Data layer: the tabular core types and loading.
///
/// Architecture:
/// ```text
///   CSV resource URL / CSV text
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  ordered columns, typed cells
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ columns   │  declarative column-role resolution
///   └──────────┘
/// ```
pub mod columns;
pub mod loader;
pub mod model;
