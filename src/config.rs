use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Pipeline configuration
// ---------------------------------------------------------------------------

/// Runtime configuration for a pipeline run. Built once in `main` and
/// passed down explicitly; no component reads ambient/global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// CKAN action API base, e.g. `https://dati.gov.it/opendata/api/3/action`.
    pub base_url: String,

    /// Where JSON catalog artifacts are written.
    pub data_dir: PathBuf,
    /// Where CSV / HTML outputs are written.
    pub output_dir: PathBuf,

    // Artifact file names
    pub package_list_file: String,
    pub filtered_list_file: String,
    pub selected_package_file: String,
    pub output_csv_file: String,
    pub conditions_csv_file: String,
    pub map_html_file: String,

    /// Traffic condition value the incident filter matches exactly.
    pub traffic_condition: String,
    /// Rows must have strictly more vehicles involved than this.
    pub min_vehicles: i64,

    /// Initial zoom level of the generated map.
    pub map_zoom: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://dati.gov.it/opendata/api/3/action".to_string(),
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            package_list_file: "DatiGovIt.json".to_string(),
            filtered_list_file: "DatiGovItFiltrati.json".to_string(),
            selected_package_file: "DatiSelezionati.json".to_string(),
            output_csv_file: "output.csv".to_string(),
            conditions_csv_file: "condizioni.csv".to_string(),
            map_html_file: "mappa_incidenti.html".to_string(),
            traffic_condition: "Intenso".to_string(),
            min_vehicles: 2,
            map_zoom: 13,
        }
    }
}
