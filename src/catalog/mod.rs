/// Catalog layer: typed CKAN API access and dataset discovery.
///
/// Architecture:
/// ```text
///   package_list / package_show  (remote CKAN endpoints)
///        │
///        ▼
///   ┌──────────┐
///   │  client   │  GET → status check → typed JSON models
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  search   │  keyword filter, CSV resource resolution
///   └──────────┘
/// ```
pub mod client;
pub mod model;
pub mod search;
