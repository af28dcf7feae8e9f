// Key handling for the form: Enter must never submit it implicitly.

pub const ENTER_KEY_CODE: u32 = 13;

// Hosts call this from keyup/keypress and cancel the event on `true`.
pub fn should_suppress_key(key_code: u32) -> bool {
    key_code == ENTER_KEY_CODE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_key_is_enter_then_it_is_suppressed() {
        assert!(should_suppress_key(13));
    }

    #[test]
    fn when_key_is_not_enter_then_it_passes_through() {
        for code in [0, 9, 10, 27, 32, 65] {
            assert!(!should_suppress_key(code), "key {code} should pass");
        }
    }
}
