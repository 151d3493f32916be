use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use starpoly::prelude::*;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Star polygon sampling and turning analysis")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw and analyze a star polygon; write the per-edge table (.csv or .parquet)
    Run {
        #[command(flatten)]
        draw: DrawArgs,
        #[arg(long)]
        out: String,
    },
    /// Write the draw list (JSON) for an analyzed star polygon
    Figure {
        #[command(flatten)]
        draw: DrawArgs,
        #[arg(long)]
        show_max_edge_angle: bool,
        #[arg(long)]
        show_forward_chain: bool,
        #[arg(long)]
        show_backward_chain: bool,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Sampler parameters plus the replay token of the first attempt.
#[derive(Args, Clone, Debug, Serialize)]
struct DrawArgs {
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
    #[arg(long, default_value_t = StarCfg::default().center_x)]
    center_x: f64,
    #[arg(long, default_value_t = StarCfg::default().center_y)]
    center_y: f64,
    #[arg(long, default_value_t = StarCfg::default().max_slots)]
    max_slots: usize,
    #[arg(long, default_value_t = StarCfg::default().min_radius)]
    min_radius: f64,
    #[arg(long, default_value_t = StarCfg::default().max_radius)]
    max_radius: f64,
    #[arg(long, default_value_t = StarCfg::default().inclusion_probability)]
    probability: f64,
    /// Fresh replay indices to try when a sample is degenerate
    #[arg(long, default_value_t = 1)]
    max_attempts: u32,
}

impl DrawArgs {
    fn star_cfg(&self) -> StarCfg {
        StarCfg {
            center_x: self.center_x,
            center_y: self.center_y,
            max_slots: self.max_slots,
            min_radius: self.min_radius,
            max_radius: self.max_radius,
            inclusion_probability: self.probability,
        }
    }
}

/// One analyzed sample and the token that reproduces it.
#[derive(Debug)]
struct Sample {
    token: ReplayToken,
    polygon: Polygon,
    analysis: StarAnalysis,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { draw, out } => run(draw, out),
        Action::Figure {
            draw,
            show_max_edge_angle,
            show_forward_chain,
            show_backward_chain,
            out,
        } => figure(
            draw,
            DisplayToggles {
                show_max_edge_angle,
                show_forward_chain,
                show_backward_chain,
            },
            out,
        ),
        Action::Report => report(),
    }
}

/// Draw and analyze, moving to the next replay index on degenerate samples.
fn draw_sample(args: &DrawArgs) -> Result<Sample> {
    let cfg = args.star_cfg();
    let mut token = ReplayToken {
        seed: args.seed,
        index: args.index,
    };
    for attempt in 0..args.max_attempts.max(1) {
        let polygon = draw_star_polygon_seeded(&cfg, token)?;
        match analyze(&polygon, GeomCfg::default()) {
            Ok(analysis) => {
                return Ok(Sample {
                    token,
                    polygon,
                    analysis,
                })
            }
            Err(err) => {
                tracing::warn!(attempt, seed = token.seed, index = token.index, %err, "degenerate sample");
                token = token.succ();
            }
        }
    }
    bail!(
        "no usable star polygon after {} attempt(s)",
        args.max_attempts.max(1)
    )
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn run(draw: DrawArgs, out: String) -> Result<()> {
    tracing::info!(seed = draw.seed, index = draw.index, out, "run");
    let sample = draw_sample(&draw)?;
    let arc = sample.analysis.arc();
    tracing::info!(
        vertices = sample.polygon.len(),
        arc_start = arc.start,
        arc_end = arc.end,
        turning = arc.turning,
        degenerate_arc = arc.is_degenerate(),
        forward = sample.analysis.forward_chain().len(),
        backward = sample.analysis.backward_chain().len(),
        "analyzed"
    );

    let out_path = Path::new(&out);
    ensure_parent(out_path)?;
    let mut df = table::edge_table(&sample.polygon, &sample.analysis)?;
    table::write_table(&mut df, out_path)?;

    let payload = Payload::new(serde_json::to_value(&draw)?)
        .with_replay(sample.token.seed, sample.token.index);
    write_sidecar(out_path, payload)?;
    Ok(())
}

fn figure(draw: DrawArgs, toggles: DisplayToggles, out: String) -> Result<()> {
    tracing::info!(seed = draw.seed, index = draw.index, out, ?toggles, "figure");
    let sample = draw_sample(&draw)?;
    let scene = compose_scene(&sample.polygon, &sample.analysis, toggles);

    let out_path = Path::new(&out);
    ensure_parent(out_path)?;
    std::fs::write(out_path, serde_json::to_vec_pretty(&scene_json(&scene))?)
        .with_context(|| format!("writing {}", out_path.display()))?;

    let mut params = serde_json::to_value(&draw)?;
    params["toggles"] = json!({
        "show_max_edge_angle": toggles.show_max_edge_angle,
        "show_forward_chain": toggles.show_forward_chain,
        "show_backward_chain": toggles.show_backward_chain,
    });
    let payload = Payload::new(params).with_replay(sample.token.seed, sample.token.index);
    write_sidecar(out_path, payload)?;
    Ok(())
}

fn scene_json(scene: &Scene) -> Value {
    let pt = |p: &Vec2<f64>| json!([p.x, p.y]);
    json!({
        "outline": {
            "points": scene.outline.iter().map(pt).collect::<Vec<_>>(),
            "width": scene.outline_width,
            "color": Color::Outline.as_hex(),
            "closed": true
        },
        "strokes": scene.strokes.iter().map(|s| json!({
            "from": pt(&s.from),
            "to": pt(&s.to),
            "color": s.color.as_hex(),
            "dash": s.dash.map(|d| json!({ "pattern": d.pattern, "offset": d.offset })),
        })).collect::<Vec<_>>(),
        "dots": {
            "points": scene.dots.iter().map(pt).collect::<Vec<_>>(),
            "radius": scene.dot_radius
        }
    })
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "crate_version": starpoly::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(probability: f64, max_attempts: u32) -> DrawArgs {
        DrawArgs {
            seed: 5,
            index: 0,
            center_x: 400.0,
            center_y: 400.0,
            max_slots: 12,
            min_radius: 80.0,
            max_radius: 350.0,
            probability,
            max_attempts,
        }
    }

    #[test]
    fn draw_sample_succeeds_with_full_probability() {
        let s = draw_sample(&args(1.0, 1)).unwrap();
        assert_eq!(s.polygon.len(), 12);
        assert_eq!(s.token, ReplayToken { seed: 5, index: 0 });
    }

    #[test]
    fn draw_sample_gives_up_on_empty_polygons() {
        let err = draw_sample(&args(-1.0, 3)).unwrap_err();
        assert!(err.to_string().contains("3 attempt"));
    }

    #[test]
    fn scene_json_lists_strokes() {
        let s = draw_sample(&args(1.0, 1)).unwrap();
        let toggles = DisplayToggles {
            show_max_edge_angle: true,
            show_forward_chain: false,
            show_backward_chain: false,
        };
        let scene = compose_scene(&s.polygon, &s.analysis, toggles);
        let v = scene_json(&scene);
        assert_eq!(v["strokes"].as_array().unwrap().len(), 2);
        assert_eq!(v["strokes"][0]["color"], "#F00");
        assert!(v["strokes"][0]["dash"].is_null());
        assert_eq!(v["dots"]["points"].as_array().unwrap().len(), 12);
    }

    #[test]
    fn cli_parses_figure_toggles() {
        let cmd = Cmd::try_parse_from([
            "cli",
            "figure",
            "--seed",
            "3",
            "--show-forward-chain",
            "--out",
            "scene.json",
        ])
        .unwrap();
        match cmd.action {
            Action::Figure {
                draw,
                show_forward_chain,
                show_max_edge_angle,
                ..
            } => {
                assert_eq!(draw.seed, 3);
                assert_eq!(draw.max_slots, 20);
                assert!(show_forward_chain);
                assert!(!show_max_edge_angle);
            }
            _ => panic!("expected figure"),
        }
    }
}
