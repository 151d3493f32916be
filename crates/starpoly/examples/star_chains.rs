//! Print the turning analysis of a few sampled star polygons.
//!
//! Usage:
//!   cargo run -p starpoly --example star_chains -- [seed]

use starpoly::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let cfg = StarCfg {
        inclusion_probability: 0.7,
        ..StarCfg::default()
    };
    for index in 0..5 {
        let tok = ReplayToken { seed, index };
        let poly = match draw_star_polygon_seeded(&cfg, tok) {
            Ok(p) => p,
            Err(err) => {
                eprintln!("sample {index}: {err}");
                continue;
            }
        };
        match analyze(&poly, GeomCfg::default()) {
            Ok(a) => {
                let arc = a.arc();
                println!(
                    "sample {index}: n={}, arc=({}, {}) turning={:.3}, forward={:?}, backward={:?}",
                    a.len(),
                    arc.start,
                    arc.end,
                    arc.turning,
                    a.forward_chain(),
                    a.backward_chain()
                );
            }
            Err(err) => println!("sample {index}: {err}"),
        }
    }
}
