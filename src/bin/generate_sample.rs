use health_data::config::COGNITIVE_QUESTION;
use health_data::data::model::Indicator;
use serde_json::json;

const STATES: [&str; 12] = [
    "Alabama", "Alaska", "Arizona", "California", "Colorado", "Florida", "Iowa", "Maine",
    "Ohio", "Oregon", "Texas", "Utah",
];
const STRATIFICATIONS: [&str; 6] = [
    "Overall",
    "Male",
    "Female",
    "Hispanic",
    "White, non-Hispanic",
    "Black, non-Hispanic",
];

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
}

fn write_survey(rng: &mut SimpleRng, path: &str) -> usize {
    let mut wtr = csv::Writer::from_path(path).expect("Failed to create survey file");
    wtr.write_record([
        "YearStart",
        "LocationDesc",
        "Topic",
        "Question",
        "Response",
        "DataValue",
        "Stratification1",
    ])
    .expect("Failed to write header");

    let mut rows = 0;
    for state in STATES {
        // A per-state risk level drives all indicators, so they correlate.
        let risk = rng.gauss(0.0, 1.0);
        let baselines = [
            (Indicator::AllTeethLost, 14.0 + 4.0 * risk),
            (Indicator::SixOrMoreLost, 38.0 + 7.0 * risk),
            (Indicator::NoTeethLost, 55.0 - 6.0 * risk),
        ];

        for (indicator, base) in baselines {
            for strat in STRATIFICATIONS {
                // Roughly one value in twenty is suppressed, as in the real table.
                let value = if rng.next_f64() < 0.05 {
                    "~".to_string()
                } else {
                    format!("{:.1}", (base + rng.gauss(0.0, 2.5)).max(0.0))
                };
                wtr.write_record([
                    "2020",
                    state,
                    "Oral Health",
                    indicator.question(),
                    "",
                    value.as_str(),
                    strat,
                ])
                .expect("Failed to write row");
                rows += 1;
            }
        }

        let decline = format!("{:.1}", 10.5 + 1.5 * risk + rng.gauss(0.0, 0.8));
        wtr.write_record([
            "2020",
            state,
            "Cognitive Health and Caregiving",
            COGNITIVE_QUESTION,
            "",
            decline.as_str(),
            "Overall",
        ])
        .expect("Failed to write row");
        rows += 1;
    }

    wtr.flush().expect("Failed to flush survey file");
    rows
}

fn write_proteins(rng: &mut SimpleRng, path: &str) -> usize {
    const AMINO_ACIDS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";
    let locations = [
        "Cell outer membrane",
        "Cell inner membrane",
        "Cytoplasm",
        "Periplasm",
        "Mitochondrion inner membrane",
        "Secreted",
    ];

    let results: Vec<_> = (0..40)
        .map(|i| {
            let len = 40 + (rng.next_u64() % 300) as usize;
            let sequence: String = (0..len)
                .map(|_| AMINO_ACIDS[(rng.next_u64() % AMINO_ACIDS.len() as u64) as usize] as char)
                .collect();
            let n_locs = (rng.next_u64() % 3) as usize;
            let locs: Vec<_> = (0..n_locs)
                .map(|_| {
                    let loc = locations[(rng.next_u64() % locations.len() as u64) as usize];
                    json!({ "location": { "value": loc } })
                })
                .collect();

            let mut record = json!({
                "primaryAccession": format!("SMP{i:03}"),
                "sequence": { "value": sequence, "length": len },
                "comments": [ { "commentType": "SUBCELLULAR LOCATION", "subcellularLocations": locs } ],
            });
            // Every third record has no recommended name.
            if i % 3 != 0 {
                record["proteinDescription"] =
                    json!({ "recommendedName": { "fullName": { "value": format!("Sample protein {i}") } } });
            }
            record
        })
        .collect();

    let n = results.len();
    let file = std::fs::File::create(path).expect("Failed to create protein file");
    serde_json::to_writer_pretty(file, &json!({ "results": results }))
        .expect("Failed to write protein file");
    n
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let survey_path = "sample_survey.csv";
    let rows = write_survey(&mut rng, survey_path);
    println!("Wrote {rows} survey rows to {survey_path}");

    let protein_path = "sample_proteins.json";
    let records = write_proteins(&mut rng, protein_path);
    println!("Wrote {records} protein records to {protein_path}");
}
