//! Fixed parameters of the scheme.

/// Size in bytes of a message or block digest.
pub const DIGEST_LEN: usize = 32;

/// Size in bytes of a single secret key or signature block.
pub const BLOCK_LEN: usize = 32;

/// Number of blocks per half, one for each bit of a digest.
pub const BLOCK_COUNT: usize = DIGEST_LEN * 8;

/// Size in bytes of one half of a [`SecretKey`](crate::SecretKey).
pub const HALF_LEN: usize = BLOCK_COUNT * BLOCK_LEN;

pub const SECRET_KEY_LEN: usize = 2 * HALF_LEN;

pub const PUBLIC_KEY_LEN: usize = 2 * BLOCK_COUNT * DIGEST_LEN;

pub const SIGNATURE_LEN: usize = BLOCK_COUNT * BLOCK_LEN;
