use std::error::Error;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Generate a sample road-accident CSV with the columns the analysis
/// expects, so the pipeline's second half can be exercised offline.
fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = SimpleRng::new(42);

    let conditions = ["Intenso", "Normale", "Scorrevole"];
    let road_types = ["Urbana", "Extraurbana", "Autostrada"];

    // Rome city center, jittered.
    let (base_lat, base_lon) = (41.9028, 12.4964);

    let output_path = "sample_incidenti.csv";
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record([
        "Data",
        "Condizioni traffico",
        "N. veicoli coinvolti",
        "Tipo strada",
        "Latitudine",
        "Longitudine",
    ])?;

    let n_rows = 200;
    for i in 0..n_rows {
        let day = (i % 28) + 1;
        let month = (i % 12) + 1;
        let date = format!("2024-{month:02}-{day:02}");

        let condition = rng.pick(&conditions);
        let vehicles = (1 + (rng.next_u64() % 5)).to_string();
        let road = rng.pick(&road_types);

        // Roughly 1 row in 10 has no coordinates.
        let (lat, lon) = if rng.next_f64() < 0.1 {
            (String::new(), String::new())
        } else {
            let lat = base_lat + (rng.next_f64() - 0.5) * 0.1;
            let lon = base_lon + (rng.next_f64() - 0.5) * 0.1;
            (format!("{lat:.6}"), format!("{lon:.6}"))
        };

        writer.write_record([
            date.as_str(),
            condition,
            vehicles.as_str(),
            road,
            lat.as_str(),
            lon.as_str(),
        ])?;
    }
    writer.flush()?;

    println!("Scritti {n_rows} incidenti di esempio in {output_path}");
    Ok(())
}
