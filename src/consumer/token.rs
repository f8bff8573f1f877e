//! Queue-name token generation

use rand::Rng;

/// Generate a 36-character token in the canonical 8-4-4-4-12 hexadecimal
/// grouping with a fixed version nibble.
///
/// The token names the per-process auto-delete queue. Uniqueness over one
/// process lifetime is the requirement, not unpredictability.
pub fn queue_token() -> String {
    let mut rng = rand::thread_rng();
    let mut token = String::with_capacity(36);

    for group in [8, 4, 4, 4, 12] {
        if !token.is_empty() {
            token.push('-');
        }
        for _ in 0..group {
            let nibble: u8 = rng.gen_range(0..16);
            token.push(char::from_digit(nibble as u32, 16).unwrap());
        }
    }

    // Version nibble: first hex digit of the third group
    token.replace_range(14..15, "4");
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_has_canonical_shape() {
        let token = queue_token();
        assert_eq!(token.len(), 36);

        let groups: Vec<&str> = token.split('-').collect();
        let lengths: Vec<usize> = groups.iter().map(|g| g.len()).collect();
        assert_eq!(lengths, vec![8, 4, 4, 4, 12]);

        for group in groups {
            assert!(group.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn token_has_fixed_version_nibble() {
        for _ in 0..32 {
            assert_eq!(queue_token().as_bytes()[14], b'4');
        }
    }

    #[test]
    fn tokens_are_distinct() {
        let first = queue_token();
        let second = queue_token();
        assert_ne!(first, second);
    }
}
