//! Seed hashing and the 10-character display code

use rand::Rng;

/// Alphabet for display codes (no I, O, 0 or 1)
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// 64-bit FNV-1a
pub fn fnv1a_64(input: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in input {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// True if `input` is already a code and should be used as given
///
/// Any 11-character seed holding exactly one `-` counts, wherever the dash
/// sits and whatever the alphabet, so hand-typed codes like `ABCDE-12345`
/// keep their name. The other characters must be ASCII letters or digits
/// because the code ends up in output file names.
pub fn is_display_code(input: &str) -> bool {
    input.len() == 11
        && input.bytes().filter(|&b| b == b'-').count() == 1
        && input.bytes().all(|b| b == b'-' || b.is_ascii_alphanumeric())
}

/// Map any seed text onto its canonical display code
///
/// Text that is already a display code is returned unchanged; anything else
/// is hashed and six bits of the hash pick each character.
pub fn display_code(input: &str) -> String {
    if is_display_code(input) {
        return input.to_string();
    }

    let hash = fnv1a_64(input.as_bytes());
    let chars: Vec<u8> = (0..10)
        .map(|i| {
            let index = (hash >> (i * 6)) % CODE_ALPHABET.len() as u64;
            CODE_ALPHABET[index as usize]
        })
        .collect();
    format_code(&chars)
}

/// Fresh random display code for runs without a user seed
pub fn random_code<R: Rng>(rng: &mut R) -> String {
    let chars: Vec<u8> = (0..10)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())])
        .collect();
    format_code(&chars)
}

fn format_code(chars: &[u8]) -> String {
    let text: String = chars.iter().map(|&b| b as char).collect();
    format!("{}-{}", &text[..5], &text[5..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_fnv_reference_values() {
        assert_eq!(fnv1a_64(b""), 0xcbf29ce484222325);
        assert_eq!(fnv1a_64(b"a"), 0xaf63dc4c8601ec8c);
        assert_eq!(fnv1a_64(b"foobar"), 0x85944171f73967e8);
    }

    #[test]
    fn test_display_code_is_stable() {
        let a = display_code("ALPHA7");
        let b = display_code("ALPHA7");
        assert_eq!(a, b);
        assert!(is_display_code(&a), "not a display code: {}", a);
    }

    #[test]
    fn test_display_code_passthrough() {
        assert_eq!(display_code("ABCDE-23456"), "ABCDE-23456");
        assert_eq!(display_code("ABCDE-12345"), "ABCDE-12345");
        assert_eq!(display_code("abc-defghij"), "abc-defghij");
    }

    #[test]
    fn test_other_shapes_are_hashed() {
        for seed in ["ABCDE12345", "ABCDE-1234-", "ABCDEF12345", "../..-ABCDE", "ABCDE-123456"] {
            let code = display_code(seed);
            assert_ne!(code, seed);
            assert_eq!(code.len(), 11);
            assert_eq!(&code[5..6], "-");
        }
    }

    #[test]
    fn test_random_code_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..20 {
            assert!(is_display_code(&random_code(&mut rng)));
        }
    }
}
