//! Demonstration harness (non-normative, see `spec.md` §6): reads a file,
//! derives a key from a passphrase, stages, challenges with a seed, and
//! prints hex-encoded roots and the verify boolean.

use clap::Parser;
use poc_custody::{challenge, primitives, proof, stage::Stage, verify};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "poc-custody")]
#[command(about = "Proof-of-custody challenge/response demo")]
struct Args {
    /// Path of the file to stage and prove custody of.
    #[arg(long)]
    file: PathBuf,

    /// Passphrase the private key is derived from: keccak256(hex(passphrase)).
    #[arg(long, default_value = "hello world")]
    passphrase: String,

    /// Challenge seed. Defaults to the passphrase.
    #[arg(long)]
    seed: Option<String>,

    /// Number of independent sub-challenges.
    #[arg(long, default_value_t = 5)]
    n_sub: usize,

    /// Print the commitment, challenge, and PoC as JSON instead of hex summaries.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(valid) => {
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            println!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> poc_custody::Result<bool> {
    let file_bytes = std::fs::read(&args.file)?;

    let priv_key = primitives::hash(hex::encode(args.passphrase.as_bytes()).as_bytes());
    let seed = args.seed.clone().unwrap_or_else(|| args.passphrase.clone());

    let stage = Stage::build(&file_bytes, &priv_key)?;
    let commitment = stage.commitment();

    let depth = stage.data_tree.depth();
    let challenge = challenge::generate(seed.as_bytes(), args.n_sub, depth);
    let poc = proof::produce(&stage, &challenge);

    let valid = verify::verify(&poc, stage.data_root(), stage.sig_root(), &challenge);

    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "commitment": commitment,
                "challenge": challenge,
                "poc": poc,
                "valid": valid,
            })
        );
    } else {
        println!("data_root:  {}", hex::encode(stage.data_root()));
        println!("sig_root:   {}", hex::encode(commitment.sig_root));
        println!("depth:      {depth}");
        println!("n_sub:      {}", args.n_sub);
        println!("valid:      {valid}");
    }

    Ok(valid)
}
