use std::io::Write;

use chrono::{Datelike, NaiveDate};

/// Mean solar cycle length, days.
const CYCLE_DAYS: f64 = 11.0 * 365.25;

/// Tiny deterministic xoshiro256** generator; noise for a fixture file does
/// not warrant a rand dependency.
struct NoiseRng {
    s: [u64; 4],
}

impl NoiseRng {
    /// Expand the seed into generator state with splitmix64.
    fn seeded(seed: u64) -> Self {
        let mut x = seed;
        let mut split = move || {
            x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = x;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        };
        NoiseRng {
            s: [split(), split(), split(), split()],
        }
    }

    fn next_u64(&mut self) -> u64 {
        let [s0, s1, s2, s3] = self.s;
        let out = s1.wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = s1 << 17;
        self.s = [
            s0 ^ s3 ^ s1,
            s1 ^ s2 ^ s0,
            s2 ^ s0 ^ t,
            (s3 ^ s1).rotate_left(45),
        ];
        out
    }

    fn unit_f64(&mut self) -> f64 {
        // 53 random mantissa bits → uniform in [0, 1).
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Normal deviate via the Box-Muller transform.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.unit_f64().max(f64::MIN_POSITIVE);
        let u2 = self.unit_f64();
        let r = (-2.0 * u1.ln()).sqrt();
        mean + std_dev * r * (2.0 * std::f64::consts::PI * u2).sin()
    }
}

/// Expected sunspot count on a given day: a rectified ~11-year cycle with a
/// slow secular modulation, roughly shaped like the real record.
fn cycle_level(day: usize) -> f64 {
    let t = day as f64;
    let phase = 2.0 * std::f64::consts::PI * t / CYCLE_DAYS;
    let secular = 1.0 + 0.3 * (2.0 * std::f64::consts::PI * t / (80.0 * 365.25)).sin();
    let cycle = phase.sin().max(0.0);
    120.0 * secular * cycle.powf(1.5)
}

fn main() {
    let mut rng = NoiseRng::seeded(42);

    let start = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    let n_days = 40 * 365;

    let output_path = "sunspot_data.csv";
    let mut file = std::fs::File::create(output_path).expect("Failed to create output file");
    writeln!(file, "Year,Month,Day,Number of Sunspots").expect("Failed to write header");

    let mut date = start;
    for day in 0..n_days {
        let count = rng.normal(cycle_level(day), 12.0).round().max(0.0) as u32;
        writeln!(
            file,
            "{},{},{},{}",
            date.year(),
            date.month(),
            date.day(),
            count
        )
        .expect("Failed to write row");
        date = date.succ_opt().expect("date in range");
    }

    println!("Wrote {n_days} daily observations to {output_path}");
}
