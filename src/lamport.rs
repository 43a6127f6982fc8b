use std::fmt;
use std::marker::PhantomData;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::hash::{Blake3, Digest, HashFunction};
use crate::params::*;

/// Generates a fresh [`SecretKey`] from the operating system random number
/// generator together with its [`PublicKey`].
pub fn generate_keypair<H: HashFunction>() -> Result<(SecretKey<H>, PublicKey<H>)> {
    let secret_key = SecretKey::generate()?;
    let public_key = secret_key.public_key();
    Ok((secret_key, public_key))
}

/// A secret key is what you generate and keep in order to sign a message.
/// From it, you can generate a [`PublicKey`] and send that to others,
/// allowing them to verify your signature down the line.
///
/// A secret key may sign exactly one message: every signature reveals half
/// of the key, and two signatures over different messages reveal enough of
/// both halves to forge more. [`SecretKey::sign`] therefore consumes the key.
/// Rebuilding a key from its bytes with [`From`] sidesteps that, so keep the
/// serialized form as private as the key itself.
pub struct SecretKey<H = Blake3> {
    halves: [[u8; HALF_LEN]; 2],
    hash: PhantomData<H>,
}

impl<H: HashFunction> SecretKey<H> {
    /// Generates a new secret key using the operating system random
    /// number generator.
    pub fn generate() -> Result<SecretKey<H>> {
        Self::generate_with(&mut OsRng)
    }

    /// Generates a new secret key, drawing half 0 and then half 1 from `rng`.
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<SecretKey<H>> {
        // Built in place: `Drop` wipes a partially drawn key.
        let mut secret_key = SecretKey {
            halves: [[0u8; HALF_LEN]; 2],
            hash: PhantomData,
        };
        for half in secret_key.halves.iter_mut() {
            rng.try_fill_bytes(half)?;
        }
        debug!(bytes = SECRET_KEY_LEN, "generated lamport secret key");
        Ok(secret_key)
    }

    /// Creates the [`PublicKey`] associated with this [`SecretKey`].
    pub fn public_key(&self) -> PublicKey<H> {
        let mut halves = [[[0u8; DIGEST_LEN]; BLOCK_COUNT]; 2];
        for (digests, secret) in halves.iter_mut().zip(self.halves.iter()) {
            for (digest, block) in digests.iter_mut().zip(secret.chunks_exact(BLOCK_LEN)) {
                *digest = H::digest(block);
            }
        }
        PublicKey {
            halves,
            hash: PhantomData,
        }
    }

    /// Signs the message, producing a [`Signature`] which another party would
    /// be able to [`PublicKey::verify`] with access to the [`PublicKey`] generated
    /// from this [`SecretKey`] with [`SecretKey::public_key`].
    ///
    /// Fails with [`Error::InvalidInput`] if `message` is empty. The key is
    /// consumed either way.
    pub fn sign<A: AsRef<[u8]>>(self, message: A) -> Result<Signature> {
        let message = message.as_ref();
        if message.is_empty() {
            return Err(Error::InvalidInput("cannot sign an empty message"));
        }
        let digest = H::digest(message);
        let mut exposed = [0u8; SIGNATURE_LEN];
        for (chunk, i) in exposed.chunks_exact_mut(BLOCK_LEN).zip(0..) {
            chunk.copy_from_slice(self.block(bit_at(&digest, i), i));
        }
        debug!(message_len = message.len(), "signed message");
        Ok(Signature { exposed })
    }
}

impl<H> SecretKey<H> {
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_LEN] {
        self.into()
    }

    fn block(&self, half: usize, index: usize) -> &[u8] {
        &self.halves[half][index * BLOCK_LEN..(index + 1) * BLOCK_LEN]
    }
}

impl<H> Drop for SecretKey<H> {
    fn drop(&mut self) {
        for half in self.halves.iter_mut() {
            half.zeroize();
        }
    }
}

impl<H> ZeroizeOnDrop for SecretKey<H> {}

impl<H> fmt::Debug for SecretKey<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

impl<H> From<&[u8; SECRET_KEY_LEN]> for SecretKey<H> {
    fn from(value: &[u8; SECRET_KEY_LEN]) -> Self {
        let mut halves = [[0u8; HALF_LEN]; 2];
        halves[0].copy_from_slice(&value[..HALF_LEN]);
        halves[1].copy_from_slice(&value[HALF_LEN..]);
        SecretKey {
            halves,
            hash: PhantomData,
        }
    }
}

impl<H> From<&SecretKey<H>> for [u8; SECRET_KEY_LEN] {
    /// Lays the key out as half 0 followed by half 1.
    fn from(secret_key: &SecretKey<H>) -> [u8; SECRET_KEY_LEN] {
        let mut out = [0u8; SECRET_KEY_LEN];
        out[..HALF_LEN].copy_from_slice(&secret_key.halves[0]);
        out[HALF_LEN..].copy_from_slice(&secret_key.halves[1]);
        out
    }
}

/// Bit `index` of `bytes`, where bit 0 is the least significant bit of
/// byte 0 and bit 8 the least significant bit of byte 1.
fn bit_at(bytes: &[u8], index: usize) -> usize {
    usize::from((bytes[index / 8] >> (index % 8)) & 1)
}

#[test]
fn test_bit_at() {
    assert_eq!(bit_at(b"\x00\x00", 0), 0);
    assert_eq!(bit_at(b"\xFF\x00", 0), 1);
    assert_eq!(bit_at(b"\x80\x00", 7), 1);
    assert_eq!(bit_at(b"\x80\x00", 0), 0);
    assert_eq!(bit_at(b"\xFF\x00", 9), 0);
    assert_eq!(bit_at(b"\xFF\x07", 9), 1);
    assert_eq!(bit_at(b"\x00\x01", 8), 1);
}

/// The public key associated with a given [`SecretKey`], allowing any
/// owner to [`PublicKey::verify`] a [`Signature`] produced by that
/// [`SecretKey`].
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct PublicKey<H = Blake3> {
    halves: [[Digest; BLOCK_COUNT]; 2],
    hash: PhantomData<H>,
}

impl<H: HashFunction> PublicKey<H> {
    /// Checks that `signature` reveals, for every bit of the message digest,
    /// a preimage of the digest published under that bit's value.
    ///
    /// A signature that does not match is `Ok(false)`; only an empty
    /// `message` is an error.
    pub fn verify<A: AsRef<[u8]>>(&self, message: A, signature: &Signature) -> Result<bool> {
        let message = message.as_ref();
        if message.is_empty() {
            return Err(Error::InvalidInput("cannot verify an empty message"));
        }
        let msg_hash = H::digest(message);
        for (chunk, i) in signature.exposed.chunks_exact(BLOCK_LEN).zip(0..) {
            let public_hash = &self.halves[bit_at(&msg_hash, i)][i];
            if !bool::from(H::digest(chunk)[..].ct_eq(&public_hash[..])) {
                debug!(block = i, "signature block does not match public key");
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<H> PublicKey<H> {
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.into()
    }

    /// The digest published for block `index` of half `half`, or `None`
    /// if `half > 1` or `index >= BLOCK_COUNT`.
    pub fn digest(&self, half: usize, index: usize) -> Option<&Digest> {
        self.halves.get(half)?.get(index)
    }
}

impl<H> From<&[u8; PUBLIC_KEY_LEN]> for PublicKey<H> {
    fn from(value: &[u8; PUBLIC_KEY_LEN]) -> Self {
        let mut halves = [[[0u8; DIGEST_LEN]; BLOCK_COUNT]; 2];
        for (digest, chunk) in halves
            .iter_mut()
            .flatten()
            .zip(value.chunks_exact(DIGEST_LEN))
        {
            digest.copy_from_slice(chunk);
        }
        PublicKey {
            halves,
            hash: PhantomData,
        }
    }
}

impl<H> From<&PublicKey<H>> for [u8; PUBLIC_KEY_LEN] {
    fn from(value: &PublicKey<H>) -> Self {
        let mut out = [0u8; PUBLIC_KEY_LEN];
        for (chunk, digest) in out
            .chunks_exact_mut(DIGEST_LEN)
            .zip(value.halves.iter().flatten())
        {
            chunk.copy_from_slice(digest);
        }
        out
    }
}

/// The result of [`SecretKey::sign`]ing a message. Can be verified
/// to be from the [`SecretKey`] associated with a [`PublicKey`]
/// if you have that public key, the message, along with the signature.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone)]
pub struct Signature {
    exposed: [u8; SIGNATURE_LEN],
}

impl Signature {
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.exposed
    }

    /// The secret key block revealed for digest bit `index`, or `None` if
    /// `index >= BLOCK_COUNT`.
    pub fn block(&self, index: usize) -> Option<&[u8]> {
        self.exposed.chunks_exact(BLOCK_LEN).nth(index)
    }
}

impl From<[u8; SIGNATURE_LEN]> for Signature {
    fn from(exposed: [u8; SIGNATURE_LEN]) -> Self {
        Signature { exposed }
    }
}

impl From<Signature> for [u8; SIGNATURE_LEN] {
    fn from(signature: Signature) -> Self {
        signature.exposed
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        let exposed: [u8; SIGNATURE_LEN] = value.try_into().map_err(|_| Error::InvalidLength {
            expected: SIGNATURE_LEN,
            actual: value.len(),
        })?;
        Ok(Signature { exposed })
    }
}
