use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Typed CKAN response models
// ---------------------------------------------------------------------------
//
// The catalog returns loosely-shaped JSON; everything downstream works on
// these explicit schemas instead. Absent fields default rather than fail,
// so a sparse package record still parses.

/// Response of the `package_list` action: the full list of dataset
/// identifiers known to the catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub result: Vec<String>,
}

/// Response of the `package_show` action for a single dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageShowResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub result: PackageMetadata,
}

/// One dataset's metadata. Only the fields the pipeline reads are
/// modeled; `resources` keeps its declared order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub resources: Vec<ResourceDescriptor>,
}

/// One downloadable file attached to a dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mimetype: Option<String>,
}
