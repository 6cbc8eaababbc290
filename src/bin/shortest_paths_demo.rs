use std::error::Error;
use std::fs;

use mol_paths::graph::generators;
use mol_paths::{ConnectionTable, Graph, ShortestPathIndex};
use serde::Serialize;

/// Per-pair output record for `--json`
#[derive(Serialize)]
struct PairReport {
    from: usize,
    to: usize,
    length: usize,
    path: Vec<usize>,
    path_count: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    let mut json = false;
    let mut input = None;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            input = Some(arg);
        }
    }

    let (name, table) = match &input {
        Some(path) => {
            let table: ConnectionTable = serde_json::from_str(&fs::read_to_string(path)?)?;
            (path.as_str(), table)
        }
        None => ("fumaric acid", generators::fumaric_acid()),
    };

    log::info!(
        "Loaded {} with {} atoms and {} bonds",
        name,
        table.vertex_count(),
        table.edge_count()
    );

    let mut reports = Vec::new();
    if !json {
        println!("Find shortest paths in {}", name);
        println!();
    }

    for i in 0..table.vertex_count() {
        let index = ShortestPathIndex::new(&table, i)?;
        if !json {
            println!("Using central atom # {}", i);
            println!("    ShortestPathIndex instance: {}", index);
        }

        for j in (i + 1)..table.vertex_count() {
            if !index.path_exists(j) {
                if !json {
                    println!("        {} - {} no path", i, j);
                }
                continue;
            }

            let report = PairReport {
                from: i,
                to: j,
                length: index.distance_to(j)?,
                path: index.shortest_path_to(j)?,
                path_count: index.shortest_paths_to(j)?.count(),
            };

            if json {
                reports.push(report);
            } else {
                println!(
                    "        {} - {} length: {}, path: {:?}, shortest paths: {}",
                    i, j, report.length, report.path, report.path_count
                );
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}
