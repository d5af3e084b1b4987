// Θ–Kerr Diagnostic CLI
//
// This binary runs the horizon-gate diagnostic pipeline and prints the
// triage verdicts: a single parameter point, the (a*, χ) parameter map,
// or the σ_Π sharpness scan.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;

use theta_kerr::*;

/// CLI arguments for the diagnostic driver
#[derive(Parser, Debug)]
#[command(name = "diagnose")]
#[command(about = "Run the Θ–Kerr horizon-gate triage pipeline", long_about = None)]
struct Args {
    /// Run mode: "point", "map" or "scan"
    #[arg(short, long, default_value = "point")]
    mode: String,

    /// Black hole mass M (geometric units)
    #[arg(short = 'M', long, default_value_t = 10.0)]
    mass: f64,

    /// Coupling parameter ε
    #[arg(short, long, default_value_t = 1.0e-3)]
    eps: f64,

    /// EFT cutoff scale Λ
    #[arg(short = 'L', long, default_value_t = 100.0)]
    lambda: f64,

    /// Dimensionless spin a* = a/M (point mode)
    #[arg(short, long, default_value_t = 0.99)]
    a_star: f64,

    /// Gate sharpness σ_K
    #[arg(long, default_value_t = 0.1)]
    sigma_k: f64,

    /// Gate sharpness σ_Π
    #[arg(long, default_value_t = 0.3)]
    sigma_pi: f64,

    /// Number of θ samples for the horizon quadrature
    #[arg(short, long, default_value_t = 400)]
    samples: usize,

    /// Write the sweep rows as pretty JSON to this path (map/scan modes)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Run mode parsed from the --mode string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Point,
    Map,
    Scan,
}

/// Parse the run mode from its CLI name
fn parse_mode(mode: &str) -> Result<Mode, String> {
    match mode {
        "point" => Ok(Mode::Point),  // Single parameter point, full summary
        "map" => Ok(Mode::Map),      // (a*, chi) grid table
        "scan" => Ok(Mode::Scan),    // sigma_Pi sharpness scan table
        _ => Err(format!(
            "Invalid mode: '{}'. Must be one of: point, map, scan",
            mode
        )),
    }
}

/// Progress bar over grid points
fn grid_progress(len: usize) -> Result<ProgressBar, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} grid points")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

/// Write rows as pretty JSON
fn write_rows<T: serde::Serialize>(path: &PathBuf, rows: &[T]) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json)?;
    println!("\nWrote {} rows: {}", rows.len(), path.display());
    Ok(())
}

/// Single-point diagnostic with a full summary block
fn run_point(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let params = ModelParameters {
        mass: args.mass,
        eps: args.eps,
        lambda: args.lambda,
        a_star: args.a_star,
        sigma_k: args.sigma_k,
        sigma_pi: args.sigma_pi,
    };

    let point = diagnose_point(&params, args.samples, &FirstLawInputs::placeholder())?;
    let bh = params.black_hole()?;

    println!("\n=========== SUMMARY ===========");
    println!("M                 = {:.3}", params.mass);
    println!("a*                = {:.3}", params.a_star);
    println!("a                 = {:.3}", params.spin());
    println!("r_+               = {:.6}", bh.horizon_radius());
    println!("eps               = {:.3e}", params.eps);
    println!("Lambda            = {:.3}", params.lambda);
    println!("chi = eps M^2/L^2 = {:.3e}", point.chi);
    println!("sigma_K           = {:.3}", params.sigma_k);
    println!("sigma_Pi          = {:.3}", params.sigma_pi);
    println!("<G>_H             = {:.5}", point.gate_average);
    println!("dr_ph/r_ph (min)  = {:.3e}", point.shift_min);
    println!("dr_ph/r_ph (max)  = {:.3e}", point.shift_max);
    println!("First Law R       = {:.3e}", point.residual);
    println!("Triage decision   = {}", point.triage.decision.name());
    for reason in &point.triage.reasons {
        println!("  - {}", reason);
    }
    println!("================================\n");

    Ok(())
}

/// Parameter-map table over (a*, chi)
fn run_map(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = ParamMapConfig {
        mass: args.mass,
        lambda: args.lambda,
        sigma_k: args.sigma_k,
        sigma_pi: args.sigma_pi,
        samples: args.samples,
        ..ParamMapConfig::default()
    };

    // One profile per spin dominates the cost; tick per spin
    let pb = grid_progress(config.spins.len())?;
    let mut rows = Vec::new();
    for &a_star in &config.spins {
        let single = ParamMapConfig { spins: vec![a_star], ..config.clone() };
        rows.extend(param_map(&single)?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!("\n=========== PARAMETER MAP (a*, chi) ===========");
    println!(" a*   |    chi    |  <G>_H   |  dr_ph/r_ph (min)  |  dr_ph/r_ph (max)  | triage");
    println!("------+-----------+----------+--------------------+--------------------+--------");
    for row in &rows {
        println!(
            " {:4.2} | {:9.3e} | {:8.5} | {:18.3e} | {:18.3e} | {}",
            row.a_star,
            row.chi,
            row.gate_average,
            row.shift_min,
            row.shift_max,
            row.decision.name()
        );
    }
    println!("===============================================\n");

    if let Some(ref path) = args.output {
        write_rows(path, &rows)?;
    }
    Ok(())
}

/// Sharpness-scan table over sigma_Pi
fn run_scan(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = SigmaScanConfig {
        mass: args.mass,
        a_star: args.a_star,
        eps: args.eps,
        lambda: args.lambda,
        sigma_k: args.sigma_k,
        samples: args.samples,
        ..SigmaScanConfig::default()
    };

    let pb = grid_progress(config.sigma_pi_values.len())?;
    let mut rows = Vec::new();
    for &sigma_pi in &config.sigma_pi_values {
        let single = SigmaScanConfig { sigma_pi_values: vec![sigma_pi], ..config.clone() };
        rows.extend(sigma_scan(&single)?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let chi = config.eps * config.mass * config.mass / (config.lambda * config.lambda);
    println!(
        "\n====== SIGMA_Pi SCAN (a* = {:.2}, chi = {:.3e}) ======",
        config.a_star, chi
    );
    println!(" sigma_Pi |    chi    |  <G>_H   |  dr_ph/r_ph (min)  |  dr_ph/r_ph (max)  | triage");
    println!("----------+-----------+----------+--------------------+--------------------+--------");
    for row in &rows {
        println!(
            "   {:6.2} | {:9.3e} | {:8.5} | {:18.3e} | {:18.3e} | {}",
            row.sigma_pi,
            row.chi,
            row.gate_average,
            row.shift_min,
            row.shift_max,
            row.decision.name()
        );
    }
    println!("=====================================================\n");

    if let Some(ref path) = args.output {
        write_rows(path, &rows)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mode = parse_mode(&args.mode).map_err(|e| e.to_string())?;

    println!("\nTheta-Kerr Horizon Gate Diagnostics");
    println!("=======================================");
    println!("  Mode: {:?}", mode);
    println!("  M = {}, eps = {:.1e}, Lambda = {}", args.mass, args.eps, args.lambda);
    println!("  sigma_K = {}, sigma_Pi = {}, samples = {}", args.sigma_k, args.sigma_pi, args.samples);
    println!("=======================================");

    match mode {
        Mode::Point => run_point(&args),
        Mode::Map => run_map(&args),
        Mode::Scan => run_scan(&args),
    }
}
