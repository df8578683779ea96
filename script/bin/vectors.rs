//! To run the binary:
//!
//!     `cargo run --release --bin vectors -- --out vectors.csv`

use std::env;
use std::path::PathBuf;

use alloy::primitives::{Address, B256, B64, U256};
use astrum_primitives::{
    attest, encode_input, AttestationRequest, HeaderRecord, InMemoryHeaderStore,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(about = "Write wire-format conformance vectors to a CSV file.")]
pub struct VectorsArgs {
    #[arg(long, default_value = "vectors.csv")]
    pub out: PathBuf,
}

#[derive(serde::Serialize, Clone)]
struct VectorRow {
    name: &'static str,
    height: u64,
    input: String,
    attestation: String,
}

/// Fixed cases covering the corners of the wire format. Each case gets its
/// own single-entry store so heights never collide.
fn sample_cases() -> Vec<(&'static str, u64, B256, HeaderRecord)> {
    vec![
        ("zero_header", 0, B256::ZERO, HeaderRecord::default()),
        (
            "gas_limit_21000",
            8,
            B256::ZERO,
            HeaderRecord {
                gas_limit: 21_000,
                ..Default::default()
            },
        ),
        (
            "distinct_bytes",
            1,
            B256::repeat_byte(0xee),
            HeaderRecord {
                parent_hash: B256::repeat_byte(0x11),
                uncle_hash: B256::repeat_byte(0x22),
                coinbase: Address::from([0xaa; 20]),
                difficulty: U256::from(0x0102030405060708_u64),
                number: U256::from(0x1122334455667788_u64),
                gas_limit: 0xa1a2a3a4a5a6a7a8,
                gas_used: 0xb1b2b3b4b5b6b7b8,
                timestamp: 0xc1c2c3c4c5c6c7c8,
                nonce: B64::from([0xd1, 0xd2, 0xd3, 0xd4, 0xd5, 0xd6, 0xd7, 0xd8]),
            },
        ),
        (
            // 2^64 + 5 lands on the wire as 5.
            "difficulty_truncated",
            77,
            B256::ZERO,
            HeaderRecord {
                difficulty: U256::from_limbs([5, 1, 0, 0]),
                ..Default::default()
            },
        ),
        (
            "max_values",
            u64::MAX,
            B256::repeat_byte(0xff),
            HeaderRecord {
                parent_hash: B256::repeat_byte(0xff),
                uncle_hash: B256::repeat_byte(0xff),
                coinbase: Address::from([0xff; 20]),
                difficulty: U256::MAX,
                number: U256::from(u64::MAX),
                gas_limit: u64::MAX,
                gas_used: u64::MAX,
                timestamp: u64::MAX,
                nonce: B64::from([0xff; 8]),
            },
        ),
    ]
}

fn main() -> anyhow::Result<()> {
    env::set_var("RUST_LOG", "info");
    dotenv::dotenv().ok();

    // Set up tracing.
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = VectorsArgs::parse();

    let cases = sample_cases();
    let count = cases.len();

    let mut csv_writer = csv::Writer::from_path(&args.out)?;
    for (name, height, expected_hash, header) in cases {
        let mut store = InMemoryHeaderStore::new();
        store.insert(height, header);

        let input = encode_input(&AttestationRequest {
            height,
            expected_hash,
        });
        let attestation = attest(&input, &store)?;

        csv_writer.serialize(VectorRow {
            name,
            height,
            input: format!("0x{}", hex::encode(input)),
            attestation: format!("0x{}", hex::encode(attestation)),
        })?;
    }
    csv_writer.flush()?;

    println!("Wrote {} vectors to {}", count, args.out.display());

    Ok(())
}
