//! Listing Identifiers
//!
//! Short opaque ids in the `Math.random().toString(36)` style.

use crate::models::Listing;

const ID_LEN: usize = 8;

/// A fresh random id: eight base-36 characters
pub fn fresh_id() -> String {
    encode_base36(js_sys::Math::random(), ID_LEN)
}

/// An id no listing in `listings` already uses
pub fn unused_id(listings: &[Listing]) -> String {
    loop {
        let id = fresh_id();
        if !listings.iter().any(|listing| listing.id == id) {
            return id;
        }
    }
}

/// Successive base-36 digits of a fraction in [0, 1)
fn encode_base36(mut frac: f64, len: usize) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        frac *= 36.0;
        let digit = frac.floor();
        out.push(DIGITS[(digit as usize).min(35)] as char);
        frac -= digit;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(encode_base36(0.0, 8), "00000000");
        assert_eq!(encode_base36(0.5, 2), "i0");
        assert_eq!(encode_base36(0.123456789, 8), encode_base36(0.123456789, 8));
    }

    #[test]
    fn test_encode_emits_only_base36_digits() {
        for frac in [0.0, 0.1, 0.333333, 0.789, 0.999999999] {
            let id = encode_base36(frac, ID_LEN);
            assert_eq!(id.len(), ID_LEN);
            assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_distinct_fractions_give_distinct_ids() {
        assert_ne!(encode_base36(0.25, 8), encode_base36(0.75, 8));
    }
}
