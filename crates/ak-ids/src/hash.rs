//! Design-time name hashing
//!
//! Object IDs are not allocated: they are the 32-bit FNV-1 hash of the
//! lowercased design-time name. The same name always yields the same ID,
//! in any process and on any platform.

/// FNV-1 32-bit offset basis
pub const FNV_OFFSET_BASIS: u32 = 2166136261;

/// FNV-1 32-bit prime
pub const FNV_PRIME: u32 = 16777619;

/// Hash a design-time object name into its numeric ID.
///
/// ASCII letters are folded to lowercase before hashing, so `Play_Cows`,
/// `PLAY_COWS` and `play_cows` produce the same ID.
///
/// ```
/// use ak_ids::hash_name;
///
/// assert_eq!(hash_name("Play_BallKick"), 4269038391);
/// assert_eq!(hash_name("None"), 748895195);
/// ```
#[inline]
pub const fn hash_name(name: &str) -> u32 {
    let bytes = name.as_bytes();
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash = hash.wrapping_mul(FNV_PRIME);
        hash ^= bytes[i].to_ascii_lowercase() as u32;
        i += 1;
    }
    hash
}

/// Convert a design-time name into the symbol used in generated tables.
///
/// Letters are uppercased, anything outside `[A-Za-z0-9_]` becomes `_`, and
/// a leading digit gets a `_` prefix so the result is a valid identifier.
pub fn symbol_name(name: &str) -> String {
    let mut symbol = String::with_capacity(name.len() + 1);
    if name.as_bytes().first().is_some_and(u8::is_ascii_digit) {
        symbol.push('_');
    }
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            symbol.push(ch.to_ascii_uppercase());
        } else {
            symbol.push('_');
        }
    }
    symbol
}

/// Whether `name` is a well-formed table symbol: `[A-Z0-9_]+`, not starting
/// with a digit, and not a lone `_` (which is no identifier).
pub fn is_symbol(name: &str) -> bool {
    let bytes = name.as_bytes();
    match bytes.first() {
        None => false,
        Some(first) if first.is_ascii_digit() => false,
        Some(_) if bytes == b"_" => false,
        Some(_) => bytes
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || *b == b'_'),
    }
}
