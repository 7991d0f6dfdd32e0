/*!
 * cpu-sched - Command-line entry point
 *
 * Usage:
 *   cpu-sched <algorithm> <input>
 *   cpu-sched <algorithm> --random <count> [seed]
 *
 * Prints a JSON report to stdout; diagnostics go to stderr.
 */

use std::error::Error;
use std::process::ExitCode;
use std::time::Instant;

use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cpu_sched::input::parse_processes;
use cpu_sched::report::Report;
use cpu_sched::workload::WorkloadGenerator;
use cpu_sched::{Policy, Process, SchedulerConfig, Simulator};

const USAGE: &str = "Usage: cpu-sched <algorithm> <input>\n       \
                     cpu-sched <algorithm> --random <count> [seed]\n\
                     Algorithms: FCFS, RR, SJF, LJF, Priority, HRRN, Auto";

/// Initialize tracing on stderr.
///
/// `RUST_LOG` controls the filter (default `info`); `CPU_SCHED_LOG_JSON=1`
/// switches to JSON lines.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("CPU_SCHED_LOG_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .init();
    }
}

fn load_processes(args: &[String]) -> Result<Vec<Process>, Box<dyn Error>> {
    match args {
        [input] => Ok(parse_processes(input)?),
        [flag, count] if flag == "--random" => {
            Ok(WorkloadGenerator::new().generate_seeded(0, count.parse()?))
        }
        [flag, count, seed] if flag == "--random" => {
            Ok(WorkloadGenerator::new().generate_seeded(seed.parse()?, count.parse()?))
        }
        _ => Err(USAGE.into()),
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let (algorithm, rest) = args.split_first().ok_or(USAGE)?;

    let config = SchedulerConfig::from_env()?;
    let policy: Policy = algorithm.parse()?;
    let processes = load_processes(rest)?;
    info!(
        policy = %policy,
        name = policy.description(),
        processes = processes.len(),
        quantum = config.quantum,
        "Starting simulation"
    );

    let simulator = Simulator::new().with_config(config);
    let started = Instant::now();
    let outcome = simulator.simulate(&processes, policy)?;
    let elapsed = started.elapsed();

    if outcome.policy != outcome.requested {
        info!(
            chosen = %outcome.policy,
            name = outcome.policy.description(),
            "Auto-classifier selected policy"
        );
    }
    debug!(
        makespan = outcome.metrics.makespan,
        dispatches = outcome.timeline.len(),
        context_switches = outcome.timeline.context_switches(),
        elapsed_us = elapsed.as_micros() as u64,
        "Simulation finished"
    );

    println!("{}", Report::new(&outcome, elapsed).to_json()?);
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Simulation failed");
            ExitCode::FAILURE
        }
    }
}
