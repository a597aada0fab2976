use clap::{Parser, Subcommand};
use pf_core::{Dimension, Input, QuantityError, Value};
use pf_formulary::*;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "plasmaform CLI - plasma parameter formulary", long_about = None)]
struct Cli {
    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Quantities are given as text, e.g. `"0.1 T"`, `"5 eV"`, `"1e19 m^-3"` or
/// `"1,2,3 K"`. A number without a unit is taken in SI and warned about.
#[derive(Subcommand)]
enum Commands {
    /// Mass density from a mass or number density
    MassDensity {
        density: Input,
        #[arg(long)]
        particle: Option<String>,
        #[arg(long)]
        z_mean: Option<f64>,
    },
    /// Alfvén speed
    AlfvenSpeed {
        b: Input,
        density: Input,
        #[arg(long, default_value = "p+")]
        ion: String,
        #[arg(long)]
        z_mean: Option<f64>,
    },
    /// Ion sound speed
    IonSoundSpeed {
        t_e: Input,
        t_i: Input,
        #[arg(long)]
        n_e: Option<Input>,
        /// Wavenumber
        #[arg(long)]
        k: Option<Input>,
        #[arg(long, default_value_t = 1.0)]
        gamma_e: f64,
        #[arg(long, default_value_t = 3.0)]
        gamma_i: f64,
        #[arg(long, default_value = "p+")]
        ion: String,
        #[arg(long)]
        z_mean: Option<f64>,
    },
    /// Thermal speed of a Maxwellian
    ThermalSpeed {
        t: Input,
        #[arg(long, default_value = "e-")]
        particle: String,
        /// most_probable, rms or mean_magnitude
        #[arg(long, default_value = "most_probable")]
        method: ThermalSpeedMethod,
        #[arg(long)]
        mass: Option<Input>,
    },
    /// Thermal speed of a kappa distribution
    KappaThermalSpeed {
        t: Input,
        kappa: f64,
        #[arg(long, default_value = "e-")]
        particle: String,
        #[arg(long, default_value = "most_probable")]
        method: ThermalSpeedMethod,
    },
    /// Thermal pressure n k_B T
    ThermalPressure { t: Input, n: Input },
    /// Ratio of gyrofrequency to collision frequency
    HallParameter {
        n: Input,
        t: Input,
        b: Input,
        ion_particle: String,
        #[arg(long, default_value = "e-")]
        particle: String,
        #[arg(long)]
        coulomb_log: Option<f64>,
        /// Relative speed
        #[arg(long)]
        v: Option<Input>,
        #[arg(long, default_value = "classical")]
        coulomb_log_method: String,
    },
    /// Gyrofrequency
    Gyrofrequency {
        b: Input,
        #[arg(long, default_value = "e-")]
        particle: String,
        #[arg(long)]
        signed: bool,
        #[arg(long)]
        z: Option<f64>,
        #[arg(long)]
        to_hz: bool,
    },
    /// Gyroradius from a perpendicular speed or a temperature
    Gyroradius {
        b: Input,
        #[arg(long, default_value = "e-")]
        particle: String,
        #[arg(long)]
        vperp: Option<Input>,
        #[arg(long)]
        t_i: Option<Input>,
    },
    /// Plasma frequency
    PlasmaFrequency {
        n: Input,
        #[arg(long, default_value = "e-")]
        particle: String,
        #[arg(long)]
        z_mean: Option<f64>,
        #[arg(long)]
        to_hz: bool,
    },
    /// Debye length
    DebyeLength { t_e: Input, n_e: Input },
    /// Number of electrons in a Debye sphere
    DebyeNumber { t_e: Input, n_e: Input },
    /// Inertial length c / ω_p
    InertialLength { n: Input, particle: String },
    /// Magnetic pressure
    MagneticPressure { b: Input },
    /// Magnetic energy density
    MagneticEnergyDensity { b: Input },
    /// Upper hybrid frequency
    UpperHybridFrequency {
        b: Input,
        n_e: Input,
        #[arg(long)]
        to_hz: bool,
    },
    /// Lower hybrid frequency
    LowerHybridFrequency {
        b: Input,
        n_i: Input,
        #[arg(long, default_value = "p+")]
        ion: String,
        #[arg(long)]
        to_hz: bool,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Formulary(#[from] FormularyError),
    #[error(transparent)]
    Quantity(#[from] QuantityError),
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Serialize)]
struct Report<'a> {
    formula: &'a str,
    value: Value,
    unit: &'a str,
    dimension: Dimension,
    warnings: Vec<String>,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (formula, evaluation) = evaluate(cli.command)?;
    debug!(formula, "evaluated");
    print_result(formula, &evaluation, cli.json)
}

fn evaluate(command: Commands) -> FormularyResult<(&'static str, Evaluation)> {
    let result = match command {
        Commands::MassDensity {
            density,
            particle,
            z_mean,
        } => (
            "mass_density",
            mass_density(
                density,
                MassDensityOptions {
                    particle: particle.as_deref(),
                    z_mean,
                },
            )?,
        ),
        Commands::AlfvenSpeed {
            b,
            density,
            ion,
            z_mean,
        } => (
            "alfven_speed",
            alfven_speed(b, density, AlfvenSpeedOptions { ion: &ion, z_mean })?,
        ),
        Commands::IonSoundSpeed {
            t_e,
            t_i,
            n_e,
            k,
            gamma_e,
            gamma_i,
            ion,
            z_mean,
        } => (
            "ion_sound_speed",
            ion_sound_speed(
                t_e,
                t_i,
                IonSoundSpeedOptions {
                    n_e,
                    k,
                    gamma_e,
                    gamma_i,
                    ion: &ion,
                    z_mean,
                },
            )?,
        ),
        Commands::ThermalSpeed {
            t,
            particle,
            method,
            mass,
        } => (
            "thermal_speed",
            thermal_speed(
                t,
                ThermalSpeedOptions {
                    particle: &particle,
                    method,
                    mass,
                },
            )?,
        ),
        Commands::KappaThermalSpeed {
            t,
            kappa,
            particle,
            method,
        } => (
            "kappa_thermal_speed",
            kappa_thermal_speed(
                t,
                kappa,
                KappaThermalSpeedOptions {
                    particle: &particle,
                    method,
                },
            )?,
        ),
        Commands::ThermalPressure { t, n } => ("thermal_pressure", thermal_pressure(t, n)?),
        Commands::HallParameter {
            n,
            t,
            b,
            ion_particle,
            particle,
            coulomb_log,
            v,
            coulomb_log_method,
        } => (
            "hall_parameter",
            hall_parameter(
                n,
                t,
                b,
                &ion_particle,
                HallParameterOptions {
                    particle: &particle,
                    coulomb_log,
                    v,
                    coulomb_log_method: &coulomb_log_method,
                },
            )?,
        ),
        Commands::Gyrofrequency {
            b,
            particle,
            signed,
            z,
            to_hz,
        } => (
            "gyrofrequency",
            gyrofrequency(
                b,
                GyrofrequencyOptions {
                    particle: &particle,
                    signed,
                    z,
                    to_hz,
                },
            )?,
        ),
        Commands::Gyroradius {
            b,
            particle,
            vperp,
            t_i,
        } => (
            "gyroradius",
            gyroradius(
                b,
                GyroradiusOptions {
                    particle: &particle,
                    vperp,
                    t_i,
                },
            )?,
        ),
        Commands::PlasmaFrequency {
            n,
            particle,
            z_mean,
            to_hz,
        } => (
            "plasma_frequency",
            plasma_frequency(
                n,
                PlasmaFrequencyOptions {
                    particle: &particle,
                    z_mean,
                    to_hz,
                },
            )?,
        ),
        Commands::DebyeLength { t_e, n_e } => ("debye_length", debye_length(t_e, n_e)?),
        Commands::DebyeNumber { t_e, n_e } => ("debye_number", debye_number(t_e, n_e)?),
        Commands::InertialLength { n, particle } => {
            ("inertial_length", inertial_length(n, &particle)?)
        }
        Commands::MagneticPressure { b } => ("magnetic_pressure", magnetic_pressure(b)?),
        Commands::MagneticEnergyDensity { b } => {
            ("magnetic_energy_density", magnetic_energy_density(b)?)
        }
        Commands::UpperHybridFrequency { b, n_e, to_hz } => (
            "upper_hybrid_frequency",
            upper_hybrid_frequency(b, n_e, to_hz)?,
        ),
        Commands::LowerHybridFrequency { b, n_i, ion, to_hz } => (
            "lower_hybrid_frequency",
            lower_hybrid_frequency(b, n_i, LowerHybridFrequencyOptions { ion: &ion, to_hz })?,
        ),
    };
    Ok(result)
}

/// Warnings already went to the log as they were raised; JSON output
/// repeats them in the report.
fn print_result(formula: &str, evaluation: &Evaluation, json: bool) -> CliResult<()> {
    if !json {
        println!("{evaluation}");
        return Ok(());
    }

    let quantity = evaluation.quantity();
    let report = Report {
        formula,
        value: quantity.value_in(quantity.unit())?,
        unit: quantity.unit().symbol(),
        dimension: quantity.dimension(),
        warnings: evaluation.warnings().iter().map(ToString::to_string).collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
