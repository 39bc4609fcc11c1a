//! Key and value grammar.
//!
//! ```text
//! key    = simple-key / tenant-key "@" system-id
//! simple = lcalpha|DIGIT 0*255( lcalpha / DIGIT / "_" / "-" / "*" / "/" )
//! tenant = lcalpha|DIGIT 0*240( same )
//! system = lcalpha       0*13 ( same )
//! value  = 0*255( %x20-7E minus "," "=" ) %x21-7E minus "," "="
//! ```

const MAX_SIMPLE_KEY_TAIL: usize = 255;
const MAX_TENANT_TAIL: usize = 240;
const MAX_SYSTEM_TAIL: usize = 13;
const MAX_VALUE_LEN: usize = 256;

/// Whether `key` is a valid (already lower-cased) tracestate key.
pub fn valid_key(key: &str) -> bool {
    match key.split_once('@') {
        None => valid_id(key, is_lc_alnum, MAX_SIMPLE_KEY_TAIL),
        Some((tenant, system)) => {
            valid_id(tenant, is_lc_alnum, MAX_TENANT_TAIL)
                && valid_id(system, |b| b.is_ascii_lowercase(), MAX_SYSTEM_TAIL)
        }
    }
}

/// Whether `value` is a valid tracestate value.
pub fn valid_value(value: &str) -> bool {
    let bytes = value.as_bytes();
    let Some(&last) = bytes.last() else {
        return false;
    };

    bytes.len() <= MAX_VALUE_LEN
        && bytes.iter().all(|&b| (0x20..=0x7e).contains(&b) && b != b',' && b != b'=')
        && last != b' '
}

fn valid_id(id: &str, first: impl Fn(u8) -> bool, max_tail: usize) -> bool {
    let Some((&head, tail)) = id.as_bytes().split_first() else {
        return false;
    };
    first(head) && tail.len() <= max_tail && tail.iter().all(|&b| is_key_char(b))
}

fn is_lc_alnum(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit()
}

fn is_key_char(b: u8) -> bool {
    is_lc_alnum(b) || matches!(b, b'_' | b'-' | b'*' | b'/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_keys() {
        assert!(valid_key("vendor"));
        assert!(valid_key("0vendor"));
        assert!(valid_key("a_b-c*d/e"));
        assert!(valid_key(&"a".repeat(256)));

        assert!(!valid_key(""));
        assert!(!valid_key("_123"));
        assert!(!valid_key("Vendor"));
        assert!(!valid_key("ven dor"));
        assert!(!valid_key(&"a".repeat(257)));
    }

    #[test]
    fn test_tenant_keys() {
        assert!(valid_key("tenant@system"));
        assert!(valid_key("0tenant@s"));
        assert!(valid_key(&format!("{}@{}", "t".repeat(241), "s".repeat(14))));

        assert!(!valid_key("tenant@0system"));
        assert!(!valid_key("@system"));
        assert!(!valid_key("tenant@"));
        assert!(!valid_key("a@b@c"));
        assert!(!valid_key(&format!("{}@s", "t".repeat(242))));
        assert!(!valid_key(&format!("t@{}", "s".repeat(15))));
    }

    #[test]
    fn test_values() {
        assert!(valid_value("value"));
        assert!(valid_value(" leading space"));
        assert!(valid_value("!"));
        assert!(valid_value(&"a".repeat(256)));

        assert!(!valid_value(""));
        assert!(!valid_value("trailing "));
        assert!(!valid_value("value,"));
        assert!(!valid_value("a=b"));
        assert!(!valid_value("tab\tinside"));
        assert!(!valid_value("caf\u{e9}"));
        assert!(!valid_value(&"a".repeat(257)));
    }
}
