//! Command-line interface for `edcrypt`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use aes_core::{decrypt_block, encrypt_block, expand_key, Aes128Key, BLOCK_SIZE};
use anyhow::{bail, ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use edcrypt::{derive_key, Mode, Session};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Password-keyed AES-128 CLI.
#[derive(Parser)]
#[command(
    name = "edcrypt",
    version,
    author,
    about = "Encrypt or decrypt files block by block with AES-128"
)]
struct Cli {
    /// Print block counts and the derived key.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file whose length is a multiple of 16 bytes.
    Enc(Transform),
    /// Decrypt a file produced by `enc`.
    Dec(Transform),
    /// Run the FIPS-197 known-answer test and random round trips.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: encrypt random data under a password, decrypt back.
    Demo {
        /// Password for the demo session.
        #[arg(long, default_value = "correct horse battery staple")]
        password: String,
        /// Number of 16-byte blocks to generate.
        #[arg(long, default_value_t = 2)]
        blocks: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct Transform {
    /// Input file (must be a multiple of 16 bytes).
    #[arg(long, value_name = "FILE")]
    input: PathBuf,
    /// Output path.
    #[arg(long, value_name = "FILE")]
    output: PathBuf,
    /// Password folded into the AES-128 key.
    #[arg(long, env = "EDCRYPT_PASSWORD", hide_env_values = true)]
    password: Option<String>,
    /// Raw AES-128 key as 32 hex characters; takes precedence over the password.
    #[arg(long, value_name = "HEX")]
    key_hex: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc(args) => cmd_transform(Mode::Encrypt, &args, cli.verbose),
        Commands::Dec(args) => cmd_transform(Mode::Decrypt, &args, cli.verbose),
        Commands::Check { samples, seed } => cmd_check(samples, seed, cli.verbose),
        Commands::Demo {
            password,
            blocks,
            seed,
        } => cmd_demo(&password, blocks, seed),
    }
}

fn cmd_transform(mode: Mode, args: &Transform, verbose: bool) -> Result<()> {
    let key = resolve_key(args)?;
    let session = Session::from_key(&key);
    let mut data =
        fs::read(&args.input).with_context(|| format!("read {}", args.input.display()))?;
    session
        .apply(mode, &mut data)
        .with_context(|| format!("process {}", args.input.display()))?;
    fs::write(&args.output, &data).with_context(|| format!("write {}", args.output.display()))?;

    if verbose {
        println!("key: {}", hex::encode(key.0));
        println!(
            "{:?}ed {} blocks: {} -> {}",
            mode,
            data.len() / BLOCK_SIZE,
            args.input.display(),
            args.output.display()
        );
    }
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>, verbose: bool) -> Result<()> {
    let key = parse_key_hex("000102030405060708090a0b0c0d0e0f")?;
    let schedule = expand_key(&key);
    let plain = hex::decode("00112233445566778899aabbccddeeff")?;
    let expected = "69c4e0d86a7b0430d8cdb78070b4c55a";

    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(&plain);
    let ct = encrypt_block(&block, &schedule);
    ensure!(hex::encode(ct) == expected, "known-answer encryption mismatch");
    ensure!(
        decrypt_block(&ct, &schedule) == block,
        "known-answer decryption mismatch"
    );
    if verbose {
        println!("fips-197 c.1: ok");
    }

    let mut rng = seeded_rng(seed);
    for _ in 0..samples {
        let mut password = [0u8; 24];
        rng.fill_bytes(&mut password);
        let session = Session::new(password);
        let mut data = vec![0u8; BLOCK_SIZE * 4];
        rng.fill_bytes(&mut data);
        let original = data.clone();
        session.apply(Mode::Encrypt, &mut data)?;
        session.apply(Mode::Decrypt, &mut data)?;
        if data != original {
            bail!("round trip failed for password {}", hex::encode(password));
        }
    }
    println!("check passed ({samples} random samples)");
    Ok(())
}

fn cmd_demo(password: &str, blocks: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut data = vec![0u8; blocks * BLOCK_SIZE];
    rng.fill_bytes(&mut data);
    let plaintext_hex = hex::encode(&data);

    edcrypt::encrypt(&mut data, password)?;
    let ciphertext_hex = hex::encode(&data);
    edcrypt::decrypt(&mut data, password)?;
    let decrypted_hex = hex::encode(&data);

    println!("demo key: {}", hex::encode(derive_key(password.as_bytes()).0));
    println!("plaintext: {}", plaintext_hex);
    println!("ciphertext: {}", ciphertext_hex);
    println!("decrypted: {}", decrypted_hex);
    if decrypted_hex != plaintext_hex {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn resolve_key(args: &Transform) -> Result<Aes128Key> {
    match (&args.key_hex, &args.password) {
        (Some(key_hex), _) => parse_key_hex(key_hex),
        (None, Some(password)) => Ok(derive_key(password.as_bytes())),
        (None, None) => bail!("either --password (or EDCRYPT_PASSWORD) or --key-hex is required"),
    }
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if bytes.len() != 16 {
        bail!("AES-128 key must be 16 bytes (32 hex characters)");
    }
    let mut key = [0u8; 16];
    key.copy_from_slice(&bytes);
    Ok(Aes128Key::from(key))
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
