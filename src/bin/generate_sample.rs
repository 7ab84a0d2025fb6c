use anyhow::{Context, Result};

// ---------------------------------------------------------------------------
// Sample-data generator
//
// Writes the default dashboard asset: a StatCan-shaped CSV of household food
// expenditure, including provincial rows, a second statistic and one
// suppressed cell, so the national-average filter path is exercised end to
// end.
// ---------------------------------------------------------------------------

const OUTPUT_PATH: &str = "data/detailed_food_spending_canada.csv";

const YEARS: &[&str] = &["2015", "2017", "2019", "2021"];

/// (geography, scale relative to the national average)
const GEOGRAPHIES: &[(&str, f64)] = &[
    ("Canada", 1.0),
    ("Ontario", 1.06),
    ("Quebec", 0.92),
    ("British Columbia", 1.09),
];

const AVERAGE_STAT: &str = "Average expenditure per household";
const STATISTICS: &[&str] = &[AVERAGE_STAT, "Percent of households reporting"];

/// (category, base CAD per household in the first sample year)
const CATEGORIES: &[(&str, f64)] = &[
    ("Food expenditures", 8100.0),
    ("Food purchased from stores", 5900.0),
    ("Bakery products", 460.0),
    ("Cereal grains and cereal products", 250.0),
    ("Fruit, fruit preparations and nuts", 780.0),
    ("Vegetables and vegetable preparations", 740.0),
    ("Dairy products and eggs", 800.0),
    ("Meat", 1200.0),
    ("Fish and seafood", 230.0),
    ("Non-alcoholic beverages and other food products", 1100.0),
    ("Food purchased from restaurants", 2200.0),
    ("Restaurant meals", 1700.0),
    ("Restaurant snacks and beverages", 490.0),
];

/// Minimal deterministic PRNG (splitmix64).
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in [lo, hi).
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    std::fs::create_dir_all("data").context("creating data directory")?;
    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;
    writer.write_record([
        "REF_DATE",
        "GEO",
        "Statistic",
        "Food expenditures, summary-level categories",
        "VALUE",
    ])?;

    let mut rows = 0usize;
    for (geo, geo_scale) in GEOGRAPHIES {
        for statistic in STATISTICS {
            for (step, year) in YEARS.iter().enumerate() {
                let growth = 1.0 + 0.055 * step as f64;
                for (category, base) in CATEGORIES {
                    let value = if *statistic != AVERAGE_STAT {
                        format!("{:.1}", (86.0 + rng.range(-6.0, 10.0)).min(100.0))
                    } else if *geo == "Canada"
                        && *year == "2015"
                        && *category == "Restaurant snacks and beverages"
                    {
                        // One suppressed national cell: the line chart plots
                        // it as 0 and the pie omits it.
                        String::new()
                    } else {
                        format!("{:.0}", base * geo_scale * growth * rng.range(0.96, 1.04))
                    };

                    writer.write_record([*year, *geo, *statistic, *category, value.as_str()])?;
                    rows += 1;
                }
            }
        }
    }
    writer.flush().context("writing output file")?;

    println!("Wrote {rows} rows to {OUTPUT_PATH}");
    Ok(())
}
