//! One-time Lamport signatures over a 32-byte hash function.
//!
//! A [`SecretKey`] is two halves of 256 random 32-byte blocks, and its
//! [`PublicKey`] is the digest of every block. Signing a message reveals,
//! for each bit of the message digest, the block of the half selected by
//! that bit. Each secret key signs at most one message.
//!
//! ```
//! use lamport_ots::{generate_keypair, PublicKey, SecretKey};
//!
//! let (secret_key, public_key): (SecretKey, PublicKey) = generate_keypair()?;
//! let signature = secret_key.sign(b"Hi")?;
//! assert!(public_key.verify(b"Hi", &signature)?);
//! assert!(!public_key.verify(b"Bye", &signature)?);
//! # Ok::<(), lamport_ots::Error>(())
//! ```
//!
//! The hash function is a type parameter, [`Blake3`] unless stated
//! otherwise. [`Sha256`] is available as well.

pub mod error;
pub mod hash;
pub mod lamport;
pub mod params;

pub use error::{Error, Result};
pub use hash::{Blake3, Digest, HashFunction, Sha256};
pub use lamport::{generate_keypair, PublicKey, SecretKey, Signature};
