use xxhash_rust::xxh64::xxh64;

const BASE62_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Encode a u64 value as a base62 string (11 chars, zero-padded).
fn base62_encode(mut value: u64) -> String {
    if value == 0 {
        return "0".repeat(11);
    }
    let mut result = Vec::with_capacity(11);
    while value > 0 {
        let idx = (value % 62) as usize;
        result.push(BASE62_CHARS[idx]);
        value /= 62;
    }
    // Pad to 11 chars
    while result.len() < 11 {
        result.push(b'0');
    }
    result.reverse();
    String::from_utf8(result).expect("base62 chars are valid UTF-8")
}

/// Compute the bindlint fingerprint for a callable declaration.
///
/// fingerprint = base62(xxhash64(name + file + physical_signature))
///
/// The fingerprint identifies a callable in diagnostics and suppress hints.
/// It is stable across runs and changes whenever the callable moves or its
/// physical signature changes.
pub fn fingerprint(name: &str, file: &str, signature: &str) -> String {
    let mut input = String::with_capacity(name.len() + file.len() + signature.len() + 2);
    input.push_str(name);
    input.push('\0'); // separator
    input.push_str(file);
    input.push('\0'); // separator
    input.push_str(signature);

    let hash_value = xxh64(input.as_bytes(), 0);
    base62_encode(hash_value)
}
