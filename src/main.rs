use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use balloon_ascent::balloon::{self, library, GasSpecies};
use balloon_ascent::io::csv;
use balloon_ascent::io::json::{self, FlightSummary};
use balloon_ascent::physics::atmosphere;
use balloon_ascent::sim::{self, Flight, Termination};
use balloon_ascent::{Balloon, SimConfig};

#[derive(Parser)]
#[command(name = "balloon-ascent", version)]
#[command(about = "High-altitude balloon ascent simulator", long_about = None)]
struct Cli {
    /// Log progress of every step
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log force breakdowns and gas state
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate an ascent described by a JSON configuration file
    Simulate {
        /// Path to the simulation configuration
        config: PathBuf,

        /// Write the series as CSV
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write a JSON flight summary
        #[arg(short, long)]
        summary: Option<PathBuf>,

        /// Rows of the sampled trajectory table to print
        #[arg(long, default_value_t = 30)]
        rows: usize,
    },

    /// List the bundled balloon specifications
    Balloons,

    /// List the known lift gas species
    Gases,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    match cli.command {
        Command::Simulate { config, output, summary, rows } => {
            let config = SimConfig::load(&config)?;
            let (mut balloon, payload, settings) = config.build()?;
            let flight = sim::simulate_standard(&mut balloon, &payload, &settings)?;

            print_report(&config, &balloon, &flight, rows);

            if let Some(path) = output {
                csv::write_series_file(&path, &flight.samples)?;
            }
            if let Some(path) = summary {
                let s = FlightSummary::from_flight(
                    &config.simulation.id,
                    &config.balloon.part_number,
                    &flight,
                );
                json::write_summary_file(&path, &s)?;
            }
        }
        Command::Balloons => print_balloons()?,
        Command::Gases => print_gases(),
    }

    Ok(())
}

/// Warnings always; `-v` adds per-step progress, `--debug` adds forces.
/// `RUST_LOG` takes precedence when set.
fn init_logging(verbose: bool, debug: bool) {
    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_report(config: &SimConfig, balloon: &Balloon, flight: &Flight, rows: usize) {
    let spec = balloon.spec();
    let title = if config.simulation.id.is_empty() {
        spec.part_number.as_str()
    } else {
        config.simulation.id.as_str()
    };

    println!();
    println!("====================================================================");
    println!("  BALLOON ASCENT SIMULATION — {title}");
    println!("====================================================================");
    println!();
    println!("  Flight Train");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Balloon:       {:>12}    Lift gas:     {:>10}", spec.part_number, spec.lifting_gas);
    println!(
        "  Envelope mass: {:>8.2} kg    Gas mass:     {:>8.3} kg",
        spec.mass,
        config.lift_gas_mass()
    );
    println!(
        "  Payload bus:   {:>8.2} kg    Ballast:      {:>8.3} kg",
        config.payload.bus_mass_kg, config.payload.ballast_mass_kg
    );
    println!(
        "  Cd:            {:>8.3}       Burst dia.:   {:>8.2} m",
        spec.drag_coefficient, spec.burst_diameter
    );
    println!();

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    if flight.time_step.was_clamped() {
        println!(
            "  TIME STEP  requested {} s, clamped to {} s",
            flight.time_step.requested, flight.time_step.effective
        );
    }
    match flight.termination {
        Termination::Burst { time, altitude, diameter } => {
            let atm = atmosphere::isa(altitude);
            println!(
                "  BURST      t={time:>7.1}s   alt={altitude:>8.0}m   dia={diameter:>6.2}m   p={:.0} Pa",
                atm.pressure
            );
        }
        Termination::DurationComplete => {
            println!("  COMPLETE   t={:>7.1}s   no burst", config.simulation.duration);
        }
    }
    println!();

    let Some(peak) = flight.peak_altitude() else {
        println!("  No steps were simulated.");
        println!();
        return;
    };
    let max_rate = flight
        .samples
        .iter()
        .map(|s| s.ascent_rate)
        .fold(f64::MIN, f64::max);

    println!("  Performance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Max altitude:  {:>8.0} m   ({:.2} km) at t={:.1}s",
        peak.altitude,
        peak.altitude / 1000.0,
        peak.time
    );
    println!("  Max ascent:    {:>8.2} m/s", max_rate);
    println!();

    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>8}  {:>9}  {:>9}  {:>10}  {:>8}",
        "t (s)", "alt (m)", "v (m/s)", "a (m/s^2)", "dia (m)"
    );
    println!("  {}", "─".repeat(54));

    let interval = (flight.samples.len() / rows.max(1)).max(1);
    let last = flight.samples.len() - 1;
    for (i, s) in flight.samples.iter().enumerate() {
        if i % interval != 0 && i != last {
            continue;
        }
        println!(
            "  {:>8.1}  {:>9.1}  {:>9.3}  {:>10.4}  {:>8.3}",
            s.time, s.altitude, s.ascent_rate, s.ascent_accel, s.balloon_diameter
        );
    }

    println!();
    println!(
        "  Simulation: {} steps, dt={} s",
        flight.samples.len(),
        flight.time_step.effective
    );
    println!("====================================================================");
    println!();
}

fn print_balloons() -> Result<(), Box<dyn Error>> {
    println!("  {:<10}  {:<16}  {:>8}  {:>10}  {:>6}  {:<8}", "part", "name", "mass kg", "burst m", "Cd", "gas");
    for pn in library::known_balloons() {
        let spec = library::lookup(pn)?;
        println!(
            "  {:<10}  {:<16}  {:>8.2}  {:>10.2}  {:>6.2}  {:<8}",
            spec.part_number, spec.name, spec.mass, spec.burst_diameter, spec.drag_coefficient, spec.lifting_gas
        );
    }
    Ok(())
}

fn print_gases() {
    println!("  {:<16}  {:<6}  {:>12}", "species", "key", "kg/mol");
    for g in GasSpecies::ALL {
        println!("  {:<16}  {:<6}  {:>12.8}", g.name(), g.symbol(), g.molar_mass());
    }
    println!();
    println!("  accepted names: {}", balloon::known_species().join(", "));
}
