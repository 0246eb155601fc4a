use std::io::{self, BufRead, Write};

use anyhow::Result;
use log::info;

use crate::analysis::{geo, incidents, map};
use crate::catalog::client::CatalogClient;
use crate::catalog::search;
use crate::config::Config;
use crate::data::columns::ColumnRole;
use crate::data::loader;
use crate::data::model::Table;
use crate::export::Exporter;
use crate::ui;

// ---------------------------------------------------------------------------
// Pipeline orchestration
// ---------------------------------------------------------------------------

/// The interactive analysis flow, one step after another:
///
/// 1. fetch and save the catalog listing
/// 2. prompt a keyword and filter the identifiers
/// 3. let the user pick a dataset
/// 4. fetch and save its metadata
/// 5. resolve a CSV resource (manual URL fallback) and download it
/// 6. save the loaded table
/// 7. analyze incidents and, when geolocated, write the map
///
/// Every step reports its outcome; a failed step ends the run without
/// panicking. Execution is strictly sequential and blocking.
pub struct App {
    config: Config,
    client: CatalogClient,
    exporter: Exporter,
}

impl App {
    pub fn new(config: Config) -> Self {
        let client = CatalogClient::new(&config.base_url);
        let exporter = Exporter::new(&config);
        Self {
            config,
            client,
            exporter,
        }
    }

    pub fn run(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(&mut stdin.lock(), &mut stdout.lock())
    }

    /// Same flow, driven by explicit reader/writer.
    pub fn run_with(&self, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
        // 1. Catalog listing
        ui::show_info("Recupero della lista dataset da dati.gov.it...");
        let identifiers = match self.client.list_identifiers() {
            Ok(ids) => ids,
            Err(e) => {
                ui::show_error(&format!("Impossibile recuperare la lista dataset: {e}"));
                return Ok(());
            }
        };
        self.exporter
            .save_json(&identifiers, &self.config.package_list_file)?;
        ui::show_success(&format!(
            "Lista dataset salvata in {}",
            self.config.package_list_file
        ));

        // 2. Keyword filter
        let keyword = ui::prompt_keyword(input, output)?;
        let filtered = search::filter_identifiers(&identifiers, &keyword);
        if filtered.is_empty() {
            ui::show_error(&format!("Nessun risultato trovato per '{keyword}'"));
            return Ok(());
        }
        self.exporter
            .save_json(&filtered, &self.config.filtered_list_file)?;
        ui::show_success(&format!(
            "Trovati {} dataset per '{keyword}'",
            filtered.len()
        ));

        // 3. Selection
        let selected = ui::prompt_selection(input, output, &filtered)?;

        // 4. Metadata
        ui::show_info(&format!("Recupero dei dettagli per '{selected}'..."));
        let metadata = match self.client.get_metadata(&selected) {
            Ok(meta) => meta,
            Err(e) => {
                ui::show_error(&format!(
                    "Impossibile recuperare i dettagli per '{selected}': {e}"
                ));
                return Ok(());
            }
        };
        self.exporter
            .save_json(&metadata, &self.config.selected_package_file)?;
        ui::show_success("Dettagli del dataset salvati");

        // 5. CSV resource
        if metadata.resources.is_empty() {
            ui::show_error("Nessuna risorsa presente nel dataset");
            return Ok(());
        }
        ui::show_info("Ricerca di file CSV tra le risorse del dataset...");
        let csv_url = match search::resolve_csv_url(&metadata) {
            Some(url) => url.to_string(),
            None => {
                ui::show_info("Nessun file CSV trovato automaticamente");
                ui::prompt_manual_url(input, output)?
            }
        };

        ui::show_info(&format!("Download dei dati da: {csv_url}"));
        let table = match loader::load_url(&self.client, &csv_url) {
            Ok(table) => table,
            Err(e) => {
                ui::show_error(&format!("Impossibile scaricare i dati CSV: {e}"));
                return Ok(());
            }
        };
        ui::show_success(&format!("Scaricati {} record", table.len()));

        // 6. Base output
        self.exporter
            .save_table_csv(&table, &self.config.output_csv_file)?;

        // 7. Incident analysis
        self.analyze_incidents(&table, output)?;

        ui::show_success("Analisi completata con successo!");
        Ok(())
    }

    /// Summary display, incident filtering and optional map creation.
    fn analyze_incidents(&self, table: &Table, output: &mut impl Write) -> Result<()> {
        ui::show_info("Avvio dell'analisi incidenti...");
        ui::display_summary(output, &table.summary())?;

        let has_required_columns = ColumnRole::TrafficCondition.resolve(table).is_some()
            && ColumnRole::VehicleCount.resolve(table).is_some();
        if !has_required_columns {
            ui::show_info("Dati non adatti all'analisi incidenti");
            return Ok(());
        }

        let filtered = incidents::filter_conditions(
            table,
            &self.config.traffic_condition,
            self.config.min_vehicles,
        );
        if filtered.is_empty() {
            ui::show_info("Nessun incidente trovato con i criteri specificati");
            return Ok(());
        }

        info!(
            "{} incidenti con traffico {} e più di {} veicoli coinvolti",
            filtered.len(),
            self.config.traffic_condition,
            self.config.min_vehicles
        );
        self.exporter
            .save_table_csv(&filtered, &self.config.conditions_csv_file)?;
        ui::show_success(&format!(
            "Trovati {} incidenti: salvati in {}",
            filtered.len(),
            self.config.conditions_csv_file
        ));

        let points = geo::locate_points(&filtered, None, None);
        match map::render_map(&points, self.config.map_zoom) {
            Some(html) => {
                let path = self
                    .exporter
                    .save_html(&html, &self.config.map_html_file)?;
                ui::show_success(&format!(
                    "Mappa con {} punti salvata in {}",
                    points.len(),
                    path.display()
                ));
            }
            None => ui::show_info("Coordinate non disponibili per la creazione della mappa"),
        }
        Ok(())
    }
}
