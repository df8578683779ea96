//! To run the binary:
//!
//!     `RUST_LOG=info cargo run --release --bin attest -- --snapshot snapshots/demo.json --height 19426587`

use std::env;
use std::path::PathBuf;

use alloy::primitives::B256;
use anyhow::{bail, ensure};
use astrum_primitives::{attest, decode_input, encode_input, AttestationRequest};
use astrum_script::HeaderSnapshot;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(about = "Serve one header attestation from a snapshot.")]
pub struct AttestArgs {
    /// Snapshot file holding the canonical headers.
    #[arg(long, env = "ASTRUM_SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Raw 64-byte request as hex, exactly as a requester would submit it.
    #[arg(long)]
    pub input: Option<String>,

    /// Height to attest; builds the request locally instead of --input.
    #[arg(long)]
    pub height: Option<u64>,

    /// Expected header hash to embed when building the request from --height.
    /// Defaults to the zero hash.
    #[arg(long)]
    pub expected_hash: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env::set_var("RUST_LOG", "info");
    dotenv::dotenv().ok();

    // Set up tracing.
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = AttestArgs::parse();

    let input = match (&args.input, args.height) {
        (Some(raw), None) => {
            ensure!(
                args.expected_hash.is_none(),
                "--expected-hash only applies together with --height"
            );
            hex::decode(raw.trim_start_matches("0x"))?
        }
        (None, Some(height)) => {
            let expected_hash = match &args.expected_hash {
                Some(raw) => parse_hash(raw)?,
                None => B256::ZERO,
            };
            encode_input(&AttestationRequest {
                height,
                expected_hash,
            })
            .to_vec()
        }
        _ => bail!("pass exactly one of --input or --height"),
    };

    let snapshot = HeaderSnapshot::load(&args.snapshot)?;
    info!(
        "loaded {} headers from {}",
        snapshot.len(),
        args.snapshot.display()
    );

    let request = decode_input(&input)?;
    info!(
        "attesting height {} (expected hash {})",
        request.height, request.expected_hash
    );

    let attestation = attest(&input, &snapshot)?;
    println!("0x{}", hex::encode(attestation));

    Ok(())
}

fn parse_hash(raw: &str) -> anyhow::Result<B256> {
    let bytes = hex::decode(raw.trim_start_matches("0x"))?;
    ensure!(
        bytes.len() == 32,
        "expected a 32-byte hash, got {} bytes",
        bytes.len()
    );
    Ok(B256::from_slice(&bytes))
}
