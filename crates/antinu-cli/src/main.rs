// ─────────────────────────────────────────────────────────────────────
// SCPN Antineutrino Backgrounds — CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Evaluate background spectra from a JSON configuration and print CSV.
//!
//! ```text
//! antinu --config configs/backgrounds.json --source all --e-max 10 --points 1001
//! ```

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use antinu_detector::geometry::Detector;
use antinu_spectra::geoneutrino::GeoneutrinoModel;
use antinu_spectra::reactor::ReactorModel;
use antinu_types::config::BackgroundConfig;
use antinu_types::decay::DecayChainKind;
use antinu_types::error::{SpectrumError, SpectrumResult};
use antinu_types::grid::EnergyGrid;
use clap::{Parser, ValueEnum};
use ndarray::Array1;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Geoneutrino and reactor antineutrino spectra on a linear energy grid."
)]
struct Cli {
    /// JSON file with chain branching tables, reactor and detector settings.
    #[arg(long)]
    config: String,

    #[arg(long, value_enum, default_value_t = Source::All)]
    source: Source,

    /// Lower grid edge [MeV].
    #[arg(long, default_value_t = 0.0)]
    e_min: f64,

    /// Upper grid edge [MeV].
    #[arg(long, default_value_t = 10.0)]
    e_max: f64,

    #[arg(long, default_value_t = 1001)]
    points: usize,

    /// Reactor thermal power [W], overrides the configuration.
    #[arg(long)]
    power: Option<f64>,

    /// Report the reactor spectrum as flux at the configured detector.
    #[arg(long)]
    detector: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Source {
    U238,
    Th232,
    K40,
    Reactor,
    All,
}

impl Source {
    fn chains(self) -> Vec<DecayChainKind> {
        match self {
            Source::U238 => vec![DecayChainKind::U238],
            Source::Th232 => vec![DecayChainKind::Th232],
            Source::K40 => vec![DecayChainKind::K40],
            Source::Reactor => Vec::new(),
            Source::All => DecayChainKind::ALL.to_vec(),
        }
    }

    fn includes_reactor(self) -> bool {
        matches!(self, Source::Reactor | Source::All)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> SpectrumResult<()> {
    let config = BackgroundConfig::from_file(&cli.config)?;
    let grid = EnergyGrid::linspace(cli.e_min, cli.e_max, cli.points)?;
    tracing::info!(
        e_min = grid.min(),
        e_max = grid.max(),
        points = grid.len(),
        "energy grid"
    );

    let mut columns: Vec<(String, Array1<f64>)> = Vec::new();

    let chains = cli.source.chains();
    if !chains.is_empty() {
        let geo = GeoneutrinoModel::from_config(&config)?;
        for kind in chains {
            let result = geo.spectrum(kind, &grid)?;
            tracing::info!(chain = %kind, integral = result.integral(&grid), "chain spectrum");
            columns.push((kind.to_string(), result.total));
        }
    }

    if cli.source.includes_reactor() {
        let mut reactor_cfg = config.reactor.clone();
        if let Some(power) = cli.power {
            reactor_cfg.thermal_power_w = power;
        }
        let reactor = ReactorModel::from_config(&reactor_cfg)?;
        for (iso, n_fiss) in reactor.weight_factors() {
            tracing::info!(isotope = %iso, fissions_per_s = n_fiss, "fission rate");
        }
        let spectrum = reactor.full_spectrum(grid.as_slice());
        if cli.detector {
            let det_cfg = config.detector.as_ref().ok_or_else(|| {
                SpectrumError::ConfigError("--detector given but no detector configured".into())
            })?;
            let detector = Detector::from_config(det_cfg)?;
            tracing::info!(
                material = %detector.material,
                z = detector.material.atomic_number(),
                distance_m = detector.distance_m,
                "reactor flux at detector"
            );
            columns.push(("reactor_flux_cm2".into(), detector.incident_flux(&spectrum)));
        } else {
            columns.push(("reactor".into(), spectrum));
        }
    }

    write_csv(&grid, &columns)?;
    Ok(())
}

fn write_csv(grid: &EnergyGrid, columns: &[(String, Array1<f64>)]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write!(out, "energy_mev")?;
    for (name, _) in columns {
        write!(out, ",{name}")?;
    }
    writeln!(out)?;
    for (i, e) in grid.as_slice().iter().enumerate() {
        write!(out, "{e:.6}")?;
        for (_, values) in columns {
            write!(out, ",{:.6e}", values[i])?;
        }
        writeln!(out)?;
    }
    out.flush()
}
