use anyhow::{Context, Result};
use serde_json::{json, Map, Value};

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Kyte-Doolittle hydropathy, for a plausible GRAVY per record.
fn hydropathy(aa: u8) -> f64 {
    match aa {
        b'A' => 1.8,
        b'C' => 2.5,
        b'D' => -3.5,
        b'E' => -3.5,
        b'F' => 2.8,
        b'G' => -0.4,
        b'H' => -3.2,
        b'I' => 4.5,
        b'K' => -3.9,
        b'L' => 3.8,
        b'M' => 1.9,
        b'N' => -3.5,
        b'P' => -1.6,
        b'Q' => -3.5,
        b'R' => -4.5,
        b'S' => -0.8,
        b'T' => -0.7,
        b'V' => 4.2,
        b'W' => -0.9,
        b'Y' => -1.3,
        _ => 0.0,
    }
}

/// Residue pool biased towards the small/charged residues LEA proteins are
/// rich in.
const RESIDUE_POOL: &[u8] = b"AAAAEEEEKKKKGGGTTTSSSDDQQNNRRHVVLLIMPPFYW";

const PREDICTORS: [&str; 5] = ["VSL2", "IUPRED", "ANCHOR", "MOBIDB", "FUZZPRED"];

/// (Acovs group, PFAM class, PFAM accession) combinations to draw from.
const CLASSES: [(&str, &str, &str); 5] = [
    ("Group-1", "LEA_1", "PF03760"),
    ("Group-1", "LEA_2", "PF03168"),
    ("Group-2", "LEA_3", "PF03242"),
    ("Group-2", "dehydrin", "PF00257"),
    ("Group-3", "SMP", "PF04927"),
];

fn generate_sequence(rng: &mut SimpleRng, length: usize) -> String {
    (0..length)
        .map(|_| *rng.pick(RESIDUE_POOL) as char)
        .collect()
}

/// Random-walk score track in [0, 1], one value per residue.
fn generate_scores(rng: &mut SimpleRng, length: usize) -> Vec<f64> {
    let mut score = rng.next_f64();
    (0..length)
        .map(|_| {
            score = (score + (rng.next_f64() - 0.5) * 0.16).clamp(0.0, 1.0);
            (score * 1000.0).round() / 1000.0
        })
        .collect()
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut records = Map::new();

    for i in 0..6 {
        let (acovs, pfam_class, pfam_acc) = *rng.pick(&CLASSES);
        let length = 80 + (rng.next_u64() % 81) as usize;
        let sequence = generate_sequence(&mut rng, length);
        let gravy: f64 = sequence.bytes().map(hydropathy).sum::<f64>() / length as f64;

        let mut predictors = Map::new();
        for name in PREDICTORS {
            predictors.insert(
                name.to_string(),
                json!({ "scores": generate_scores(&mut rng, length) }),
            );
        }

        let gene = format!("AT{}G{:05}", i % 5 + 1, 1470 + i * 7320);
        let tair_protein = format!("{gene}.1");

        records.insert(
            tair_protein.clone(),
            json!({
                "uniprot": format!("Q9LE{:02}", 10 + i),
                "tair_protein": tair_protein,
                "tair_gen": gene,
                "classification": { "ClassPFMA": pfam_class, "ClassAcovs": acovs },
                "domains": { "PFAM": pfam_acc },
                "parameters": { "GRAVY": (gravy * 1000.0).round() / 1000.0 },
                "sequence": sequence,
                "predictors": Value::Object(predictors),
            }),
        );
    }

    let output_path = "sample_leas.json";
    let text = serde_json::to_string_pretty(&Value::Object(records))
        .context("serialising sample records")?;
    std::fs::write(output_path, &text).with_context(|| format!("writing {output_path}"))?;

    println!("Wrote 6 sample LEA records to {output_path}");
    Ok(())
}
