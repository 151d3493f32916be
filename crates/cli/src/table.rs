//! Per-edge analysis table (one row per polygon edge).

use anyhow::{Context, Result};
use polars::prelude::*;
use starpoly::prelude::{Polygon, StarAnalysis};
use std::fs::File;
use std::path::Path;

/// Columns: edge index, start vertex, edge angle, turning at the end vertex,
/// chain membership, and whether the edge is an end of the maximal arc.
pub fn edge_table(poly: &Polygon, analysis: &StarAnalysis) -> PolarsResult<DataFrame> {
    let n = analysis.len();
    let arc = analysis.arc();
    let mut edge = Vec::with_capacity(n);
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    let mut forward = vec![false; n];
    let mut backward = vec![false; n];
    for i in 0..n {
        let v = poly.vertices()[i];
        edge.push(i as u32);
        x.push(v.x);
        y.push(v.y);
    }
    for &i in analysis.forward_chain() {
        forward[i] = true;
    }
    for &i in analysis.backward_chain() {
        backward[i] = true;
    }
    let arc_start: Vec<bool> = (0..n)
        .map(|i| !arc.is_degenerate() && i == arc.start)
        .collect();
    let arc_end: Vec<bool> = (0..n)
        .map(|i| !arc.is_degenerate() && i == arc.end)
        .collect();
    df!(
        "edge" => edge,
        "x" => x,
        "y" => y,
        "edge_angle" => analysis.edge_angles().as_slice().to_vec(),
        "rotation" => analysis.rotations().as_slice().to_vec(),
        "forward_chain" => forward,
        "backward_chain" => backward,
        "arc_start" => arc_start,
        "arc_end" => arc_end
    )
}

/// Write `df` as Parquet when `out` ends in `.parquet`, CSV otherwise.
pub fn write_table(df: &mut DataFrame, out: &Path) -> Result<()> {
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    let is_parquet = out
        .extension()
        .map(|e| e.eq_ignore_ascii_case("parquet"))
        .unwrap_or(false);
    if is_parquet {
        ParquetWriter::new(&mut file)
            .finish(df)
            .with_context(|| format!("writing parquet {}", out.display()))?;
    } else {
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(df)
            .with_context(|| format!("writing csv {}", out.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use starpoly::prelude::*;
    use tempfile::tempdir;

    fn sample() -> (Polygon, StarAnalysis) {
        let poly = draw_star_polygon_seeded(&StarCfg::default(), ReplayToken { seed: 1, index: 0 })
            .unwrap();
        let analysis = analyze(&poly, GeomCfg::default()).unwrap();
        (poly, analysis)
    }

    #[test]
    fn table_has_one_row_per_edge() {
        let (poly, analysis) = sample();
        let df = edge_table(&poly, &analysis).unwrap();
        assert_eq!(df.height(), poly.len());
        assert_eq!(df.width(), 9);
        let fwd = df.column("forward_chain").unwrap().bool().unwrap();
        let marked = fwd.into_iter().filter(|v| *v == Some(true)).count();
        assert_eq!(marked, {
            let mut seen = analysis.forward_chain().to_vec();
            seen.sort_unstable();
            seen.dedup();
            seen.len()
        });
    }

    #[test]
    fn csv_written_with_header() {
        let (poly, analysis) = sample();
        let mut df = edge_table(&poly, &analysis).unwrap();
        let dir = tempdir().unwrap();
        let out = dir.path().join("edges.csv");
        write_table(&mut df, &out).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        let header = text.lines().next().unwrap();
        assert!(header.starts_with("edge,x,y,edge_angle,rotation"));
        assert_eq!(text.lines().count(), poly.len() + 1);
    }
}
