//! The hash functions a key pair can be instantiated with.

use crate::params::DIGEST_LEN;

pub type Digest = [u8; DIGEST_LEN];

/// A deterministic hash function with a [`DIGEST_LEN`]-byte output.
///
/// Every security property of the scheme reduces to preimage and
/// collision resistance of the implementation chosen here.
pub trait HashFunction {
    fn digest(bytes: &[u8]) -> Digest;
}

/// BLAKE3 in its default 32-byte output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Blake3;

impl HashFunction for Blake3 {
    fn digest(bytes: &[u8]) -> Digest {
        *blake3::hash(bytes).as_bytes()
    }
}

/// SHA-256.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sha256;

impl HashFunction for Sha256 {
    fn digest(bytes: &[u8]) -> Digest {
        use sha2::Digest as _;

        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&sha2::Sha256::digest(bytes));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blake3_empty_input() {
        assert_eq!(
            hex::encode(Blake3::digest(b"")),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
    }

    #[test]
    fn sha256_abc() {
        assert_eq!(
            hex::encode(Sha256::digest(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn functions_disagree() {
        assert_ne!(Blake3::digest(b"Hi"), Sha256::digest(b"Hi"));
    }
}
