// File: crates/demo/src/main.rs
// Summary: Demo reads axis requests (label, kind, min, max, n) from CSV, solves
// each one and prints the widened range, step and tick labels.

use anyhow::{Context, Result};
use axis_core::density::{average_label_width, major_tick_count};
use axis_core::{Axis, ScaleConfig, ScaleResult};
use std::path::Path;

/// Advance per label character, in pixels.
const CHAR_WIDTH_PX: f64 = 7.0;
const DEFAULT_AXIS_WIDTH_PX: f64 = 150.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Policy {
    Exact,
    Approx,
    Log,
}

struct Request {
    axis: Axis,
    policy: Policy,
    n: Option<usize>,
}

fn main() -> Result<()> {
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/axes.csv").to_string());
    let axis_width = match std::env::args().nth(2) {
        Some(w) => w.parse::<f64>().with_context(|| format!("axis width '{w}' is not a number"))?,
        None => DEFAULT_AXIS_WIDTH_PX,
    };

    let path = Path::new(&raw);
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    println!("Using input file: {}", path.display());

    let requests = load_requests(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} axis requests (axis width {axis_width}px)", requests.len());

    let config = ScaleConfig::default();
    let mut failures = 0usize;
    for req in &requests {
        let n = req.n.unwrap_or_else(|| {
            major_tick_count(axis_width, average_label_width(req.axis.min, req.axis.max, CHAR_WIDTH_PX))
        });
        let solved = match req.policy {
            Policy::Approx => req.axis.solve_approx(n, &config),
            Policy::Exact | Policy::Log => req.axis.solve(n, &config),
        };
        match solved {
            Ok(r) => print_result(req, n, &r),
            Err(e) => {
                failures += 1;
                eprintln!("{:<10} [{}, {}] n={n}: {e}", req.axis.label, req.axis.min, req.axis.max);
            }
        }
    }

    if failures > 0 {
        println!("{failures} of {} requests rejected", requests.len());
    }
    Ok(())
}

fn print_result(req: &Request, n: usize, r: &ScaleResult) {
    println!(
        "{:<10} {:?} [{}, {}] n={n} -> [{}, {}] step {} ({} intervals)",
        req.axis.label,
        req.policy,
        req.axis.min,
        req.axis.max,
        r.adjusted_min,
        r.adjusted_max,
        r.step,
        r.interval_count(),
    );
    println!("           ticks: {}", r.labels().join("  "));
}

/// Load `label,kind,min,max,n` rows; an empty `n` means "derive from width".
fn load_requests(path: &Path) -> Result<Vec<Request>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let line = i + 2;
        let field = |ix: usize, name: &str| -> Result<&str> {
            rec.get(ix).with_context(|| format!("line {line}: missing column '{name}'"))
        };
        let number = |ix: usize, name: &str| -> Result<f64> {
            let s = field(ix, name)?;
            s.parse::<f64>().with_context(|| format!("line {line}: {name} '{s}' is not a number"))
        };

        let label = field(0, "label")?;
        let policy = parse_policy(field(1, "kind")?).with_context(|| format!("line {line}"))?;
        let (min, max) = (number(2, "min")?, number(3, "max")?);
        let n = match rec.get(4).unwrap_or("") {
            "" => None,
            s => Some(s.parse::<usize>().with_context(|| format!("line {line}: n '{s}' is not a count"))?),
        };

        let axis = match policy {
            Policy::Log => Axis::log10(label, min, max),
            Policy::Exact | Policy::Approx => Axis::new(label, min, max),
        };
        out.push(Request { axis, policy, n });
    }
    Ok(out)
}

fn parse_policy(s: &str) -> Result<Policy> {
    match s.to_ascii_lowercase().as_str() {
        "linear" | "exact" => Ok(Policy::Exact),
        "approx" => Ok(Policy::Approx),
        "log" | "log10" => Ok(Policy::Log),
        other => anyhow::bail!("unknown axis kind '{other}' (expected linear, approx or log)"),
    }
}
