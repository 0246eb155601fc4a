use opendata_incidenti::app::App;
use opendata_incidenti::config::Config;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== OPEN DATA ANALYZER ===");
    println!("Analisi di open data da dati.gov.it\n");

    let app = App::new(Config::default());
    app.run()
}
