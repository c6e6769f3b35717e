//! Writes a synthetic monthly sunspot file in the observatory layout
//! (headerless, `;`-separated, seven columns) for running the dashboard
//! without the real data set.

use std::f64::consts::PI;

use anyhow::{Context, Result};

const FIRST_YEAR: i32 = 1749;
const LAST_YEAR: i32 = 2024;
/// Start of solar cycle 1.
const CYCLE_EPOCH: f64 = 1755.2;
const MEAN_CYCLE_YEARS: f64 = 11.0;
/// Trailing months flagged as provisional.
const PROVISIONAL_MONTHS: usize = 6;

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
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

/// Peak monthly sunspot number of each cycle, drawn once per cycle.
fn cycle_amplitudes(rng: &mut SimpleRng, cycles: usize) -> Vec<f64> {
    (0..cycles).map(|_| 80.0 + rng.next_f64() * 200.0).collect()
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let cycles = ((f64::from(LAST_YEAR) - CYCLE_EPOCH) / MEAN_CYCLE_YEARS).ceil() as usize + 2;
    let amplitudes = cycle_amplitudes(&mut rng, cycles);

    let months: Vec<(i32, u32)> = (FIRST_YEAR..=LAST_YEAR)
        .flat_map(|year| (1..=12).map(move |month| (year, month)))
        .collect();
    let provisional_from = months.len().saturating_sub(PROVISIONAL_MONTHS);

    let output_path = "SN_m_tot_V2.0.csv";
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    for (i, &(year, month)) in months.iter().enumerate() {
        let frac_date = f64::from(year) + (f64::from(month) - 0.5) / 12.0;

        // Cycles before systematic observation are folded back onto cycle 0.
        let phase = ((frac_date - CYCLE_EPOCH) / MEAN_CYCLE_YEARS).max(0.0);
        let cycle = phase.floor() as usize;
        let shape = (PI * phase.fract()).sin().powi(2);
        let mean = (amplitudes[cycle] * shape + rng.gauss(0.0, 8.0 + 0.15 * amplitudes[cycle] * shape))
            .max(0.0);

        // Sparse early record: no deviation or station count before 1818.
        let (std_dev, observations) = if year < 1818 {
            (-1.0, -1)
        } else {
            (
                (mean.sqrt() * 1.2 + rng.next_f64()).max(0.1),
                50 + (rng.next_f64() * 1500.0) as i64,
            )
        };
        let indicator = if i >= provisional_from { 0 } else { 1 };

        writer
            .write_record([
                format!("{year:4}"),
                format!("{month:02}"),
                format!("{frac_date:8.3}"),
                format!("{mean:6.1}"),
                format!("{std_dev:5.1}"),
                format!("{observations:5}"),
                format!("{indicator}"),
            ])
            .with_context(|| format!("writing {year}-{month:02}"))?;
    }
    writer.flush().context("flushing output")?;

    println!(
        "Wrote {} months ({FIRST_YEAR}–{LAST_YEAR}) to {output_path}",
        months.len()
    );
    Ok(())
}
