use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use multiorder_core::{OrderKind, OrderedBag};

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Output {
    implementation: &'static str,
    workload: String,
    timestamp: String,
    name: String,
    total_ops: u64,
    duration_ms: f64,
    ops_per_sec: f64,
    extra: Extra,
    source_file: Option<String>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Extra {
    count: u64,
    kind: OrderKind,
}

fn run_benchmark(kind: OrderKind, count: u64) -> f64 {
    let mut bag = OrderedBag::new();
    for i in 0..count {
        // Spread values so the sorted orders are not already sorted.
        bag.append(i.wrapping_mul(2_654_435_761) % (count.max(1) * 4));
    }

    let start = Instant::now();
    let mut sum = 0u64;
    for value in bag.traverse(kind) {
        sum = sum.wrapping_add(value.expect("bag is not mutated during the walk"));
    }
    let elapsed = start.elapsed().as_secs_f64() * 1000.0;
    log::debug!("{kind} checksum={sum}");
    elapsed
}

fn main() {
    env_logger::init();

    let mut count: u64 = 10_000;
    let mut kinds: Vec<OrderKind> = OrderKind::ALL.to_vec();
    let mut out_file: Option<PathBuf> = None;
    for arg in env::args().skip(1) {
        if let Some(val) = arg.strip_prefix("--count=") {
            count = val.parse().unwrap_or(count);
        } else if let Some(val) = arg.strip_prefix("--kind=") {
            match val.parse() {
                Ok(kind) => kinds = vec![kind],
                Err(err) => log::warn!("ignoring --kind: {err}"),
            }
        } else if let Some(val) = arg.strip_prefix("--out=") {
            out_file = Some(PathBuf::from(val));
        }
    }

    let outputs: Vec<Output> = kinds
        .into_iter()
        .map(|kind| {
            let duration_ms = run_benchmark(kind, count);
            let workload = format!("{}-{}", kind, count);
            Output {
                implementation: "core-memory",
                workload: workload.clone(),
                timestamp: chrono::Utc::now().to_rfc3339(),
                name: workload,
                total_ops: count,
                duration_ms,
                ops_per_sec: if duration_ms > 0.0 {
                    count as f64 / duration_ms * 1000.0
                } else {
                    f64::INFINITY
                },
                extra: Extra { count, kind },
                source_file: out_file.as_ref().map(|p| p.display().to_string()),
            }
        })
        .collect();

    let json = serde_json::to_string_pretty(&outputs).expect("serialize");
    if let Some(path) = out_file {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdirs");
        }
        fs::write(&path, &json).expect("write output");
    }
    println!("{}", json);
}
