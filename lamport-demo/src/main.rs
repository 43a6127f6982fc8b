use anyhow::Result;
use clap::{Parser, ValueEnum};
use lamport_ots::{generate_keypair, Blake3, HashFunction, PublicKey, SecretKey, Sha256};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Arguments {
    /// Message to sign and verify.
    #[clap(long, default_value = "Hi")]
    message: String,
    /// A different message, which must not verify under the same signature.
    #[clap(long, default_value = "Bye")]
    other_message: String,
    #[clap(long, value_enum, default_value_t = HashChoice::Blake3)]
    hash: HashChoice,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum HashChoice {
    Blake3,
    Sha256,
}

fn run<H: HashFunction>(args: &Arguments) -> Result<()> {
    let (secret_key, public_key): (SecretKey<H>, PublicKey<H>) = generate_keypair()?;
    info!(
        public_key_len = public_key.to_bytes().len(),
        "generated key pair"
    );

    let signature = secret_key.sign(&args.message)?;
    info!(signature_len = signature.as_bytes().len(), "signed message");

    let valid = public_key.verify(&args.message, &signature)?;
    println!("{:?}: signature validity: {}", args.message, valid);
    let other_valid = public_key.verify(&args.other_message, &signature)?;
    println!("{:?}: signature validity: {}", args.other_message, other_valid);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Arguments::parse();
    match args.hash {
        HashChoice::Blake3 => run::<Blake3>(&args),
        HashChoice::Sha256 => run::<Sha256>(&args),
    }
}
