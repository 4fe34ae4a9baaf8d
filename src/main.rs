use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use network_insights::sandalphon::report::Report;
use network_insights::sandalphon::scenario::Scenario;
use network_insights::sandalphon::utils::get_pb;
use network_insights::{debug, time_it};

const DEFAULT_SCENARIO: &str = "network.ron";
const REPORT: &str = "report.ron";

fn main() -> ExitCode {
    let start = Instant::now();

    let scenario_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SCENARIO.to_string());

    let verbose = fs::metadata(".verbose").is_ok();
    println!("verbose: {verbose}");

    let scenario = match time_it!(at once | "loading scenario" => Scenario::load(&scenario_path)) {
        Ok(scenario) => scenario,
        Err(err) => {
            eprintln!("{scenario_path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let (network, rejected) = time_it!("building the network" => scenario.build());
    debug!(&rejected);

    println!(
        "{} users ({} max), {} rejected operations",
        network.user_count(),
        network.capacity(),
        rejected.len()
    );
    for op in &rejected {
        println!("rejected: {op:?}");
    }

    if verbose {
        println!("{network}");
    }

    let report = time_it!(at once | "building the report" => Report::with_progress(
        &network,
        get_pb(network.user_count() as u64, "Building report"),
    ));

    match &report.most_popular {
        Some(name) => println!("most popular: {name}"),
        None => println!("most popular: nobody is followed"),
    }

    if let Err(err) = time_it!("writing to report.ron" => report.save(REPORT)) {
        eprintln!("{REPORT}: {err}");
        return ExitCode::FAILURE;
    }

    println!("Total run time => {:?}", start.elapsed());
    ExitCode::SUCCESS
}
