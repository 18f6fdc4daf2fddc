use clap::Parser;
use ecdh_commute::{
    BigUint, NistP256Arithmetic, Result, Transcript, exchange, parse_scalar,
    random::MAX_SCALAR_BITS, random_scalar,
};
use rand_core::{CryptoRngCore, OsRng};
use std::{io, process::ExitCode};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Check that k*(d*G) and d*(k*G) agree on NIST P-256.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// First scalar in decimal; drawn at random when omitted
    #[arg(short, long, value_parser = parse_scalar)]
    k: Option<BigUint>,

    /// Second scalar in decimal; drawn at random when omitted
    #[arg(short, long, value_parser = parse_scalar)]
    d: Option<BigUint>,

    /// Width in bits of randomly drawn scalars (a multiple of 8, at most 4096)
    #[arg(
        long,
        default_value_t = 256,
        value_parser = clap::value_parser!(u16).range(8..=MAX_SCALAR_BITS as i64)
    )]
    bits: u16,

    /// Print k*(d*G) and d*(k*G) before the verdict
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing();

    let transcript = match run(&cli) {
        Ok(transcript) => transcript,
        Err(err) => {
            tracing::error!(%err, "exchange failed");
            return ExitCode::FAILURE;
        }
    };

    match transcript.write_report(&mut io::stdout().lock(), cli.verbose) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "failed to write report");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Transcript> {
    let curve = NistP256Arithmetic::new();
    let bits = usize::from(cli.bits);
    let mut rng = OsRng;

    match (&cli.k, &cli.d) {
        (None, None) => exchange::run_random(&curve, bits, &mut rng),
        (k, d) => {
            let k = fixed_or_random(k.as_ref(), bits, &mut rng)?;
            let d = fixed_or_random(d.as_ref(), bits, &mut rng)?;
            exchange::run(&curve, &k, &d)
        }
    }
}

fn fixed_or_random(
    scalar: Option<&BigUint>,
    bits: usize,
    rng: &mut impl CryptoRngCore,
) -> Result<BigUint> {
    match scalar {
        Some(scalar) => Ok(scalar.clone()),
        None => random_scalar(bits, rng),
    }
}

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let log_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(log_layer).init();
}
