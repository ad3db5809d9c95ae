//! Generate a deterministic sample CSV for demos and manual testing:
//! three species across three islands with species-dependent gaussian
//! measurements, plus a sprinkling of missing cells.

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a>(&mut self, options: &'a [&'a str]) -> &'a str {
        options[(self.next_u64() % options.len() as u64) as usize]
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample.csv".to_string());

    let mut rng = SimpleRng::new(42);

    // (species, mean bill length, mean bill depth, mean body mass)
    let species_profiles = [
        ("Adelie", 38.8, 18.3, 3700.0),
        ("Chinstrap", 48.8, 18.4, 3730.0),
        ("Gentoo", 47.5, 15.0, 5070.0),
    ];
    let islands = ["Biscoe", "Dream", "Torgersen"];

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record([
        "species",
        "island",
        "bill_length_mm",
        "bill_depth_mm",
        "body_mass_g",
    ])?;

    let mut rows = 0usize;
    for (species, bill_len, bill_depth, mass) in species_profiles {
        for i in 0..50 {
            // every 17th measurement went missing in the field
            let bill_length = if i % 17 == 16 {
                String::new()
            } else {
                format!("{:.1}", rng.gauss(bill_len, 2.5))
            };
            let depth = format!("{:.1}", rng.gauss(bill_depth, 1.2));
            let body_mass = format!("{:.0}", rng.gauss(mass, 350.0));
            writer.write_record([
                species,
                rng.pick(&islands),
                bill_length.as_str(),
                depth.as_str(),
                body_mass.as_str(),
            ])?;
            rows += 1;
        }
    }
    writer.flush()?;

    println!("wrote {rows} rows to {path}");
    Ok(())
}
