//! Binary that runs all three vertex cover algorithms on the bundled sample graphs
//! and prints a table with cover sizes, running times and approximation ratios.

use std::error;
use std::time::{Duration, Instant};

use log::{info, warn};
use structopt::StructOpt;

use take_cover::cover::is_vertex_cover;
use take_cover::cust_error::ProcessingError;
use take_cover::samples;

#[derive(StructOpt)]
#[structopt(
    name = "compare",
    about = "Compares the vertex cover algorithms on the sample graphs."
)]
struct Opt {
    /// Skips the exhaustive search on graphs with more nodes than this.
    #[structopt(short = "b", long, default_value = "25")]
    brute_force_limit: usize,
}

struct Row {
    graph: &'static str,
    algorithm: &'static str,
    millis: f64,
    ratio: Option<f64>,
    cover: Vec<usize>,
}

pub fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::init();
    let opt = Opt::from_args();
    let mut rows = Vec::new();
    for (name, graph) in samples::all() {
        let edges = graph.edges();

        let start = Instant::now();
        let exact = match graph.bounded_brute_force_cover(opt.brute_force_limit) {
            Ok(cover) => cover,
            Err(err) => {
                warn!("{}: {}", name, err);
                None
            },
        };
        let millis = to_millis(start.elapsed());
        let optimum = exact.as_ref().map(|cover| cover.len());
        if let Some(cover) = exact {
            check(&cover, &edges, name, "brute force")?;
            rows.push(Row {
                graph: name,
                algorithm: "brute force",
                millis,
                ratio: Some(1.0),
                cover,
            });
        }

        let start = Instant::now();
        let (cover, size) = graph.approx_cover();
        let millis = to_millis(start.elapsed());
        check(&cover, &edges, name, "approximation")?;
        rows.push(Row {
            graph: name,
            algorithm: "approximation",
            millis,
            ratio: ratio_of(size, optimum),
            cover,
        });

        let start = Instant::now();
        let cover = graph.degree_heuristic_cover();
        let millis = to_millis(start.elapsed());
        check(&cover, &edges, name, "degree heuristic")?;
        rows.push(Row {
            graph: name,
            algorithm: "degree heuristic",
            millis,
            ratio: ratio_of(cover.len(), optimum),
            cover,
        });

        info!("{}: all covers validated", name);
    }

    println!(
        "{:<13} {:<17} {:>6} {:>12} {:>8}   {}",
        "Graph", "Algorithm", "Size", "Time (ms)", "Ratio", "Cover"
    );
    for row in rows {
        let ratio = row
            .ratio
            .map_or("-".to_owned(), |ratio| format!("{:.3}", ratio));
        println!(
            "{:<13} {:<17} {:>6} {:>12.3} {:>8}   {:?}",
            row.graph,
            row.algorithm,
            row.cover.len(),
            row.millis,
            ratio,
            row.cover
        );
    }
    Ok(())
}

fn to_millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1_000.0
}

fn ratio_of(size: usize, optimum: Option<usize>) -> Option<f64> {
    optimum.map(|optimum| size as f64 / optimum as f64)
}

fn check(
    cover: &[usize],
    edges: &[(usize, usize)],
    graph: &str,
    algorithm: &str,
) -> Result<(), ProcessingError> {
    if is_vertex_cover(&cover.iter().copied().collect(), edges) {
        Ok(())
    } else {
        Err(ProcessingError::InvalidSolution(format!(
            "{} produced a non-covering set on {}",
            algorithm, graph
        )))
    }
}
