use log::info;

use super::model::{CellValue, Table};
use crate::catalog::client::CatalogClient;
use crate::error::FetchError;

// ---------------------------------------------------------------------------
// Tabular loader
// ---------------------------------------------------------------------------

/// Parse CSV text (header row first) into a typed [`Table`].
///
/// No schema is assumed beyond the header row; every field is
/// type-inferred per cell. A malformed payload (e.g. a row with the
/// wrong field count) fails the whole load.
pub fn parse_csv(text: &str) -> Result<Table, csv::Error> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row = record.iter().map(CellValue::parse).collect();
        rows.push(row);
    }
    Ok(Table::new(headers, rows))
}

/// Download a CSV resource and parse the body into a [`Table`].
pub fn load_url(client: &CatalogClient, url: &str) -> Result<Table, FetchError> {
    let text = client.fetch_text(url)?;
    let table = parse_csv(&text).map_err(|source| FetchError::Csv {
        url: url.to_string(),
        source,
    })?;
    info!(
        "loaded {} rows × {} columns from {url}",
        table.len(),
        table.columns.len()
    );
    Ok(table)
}
