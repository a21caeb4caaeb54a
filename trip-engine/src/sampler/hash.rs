//! The fixed string hash underlying deterministic sampling.

/// FNV-1a offset basis (32-bit).
const OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV-1a prime (32-bit).
const PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over the UTF-8 bytes of a string.
///
/// For each byte: XOR into the accumulator, then wrapping-multiply by the
/// prime. Fixed and platform-independent; this exact algorithm is the
/// entire basis of cross-call determinism and must never change.
pub fn fnv1a_32(input: &str) -> u32 {
    let mut hash = OFFSET_BASIS;
    for &byte in input.as_bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
