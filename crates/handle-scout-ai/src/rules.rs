use regex::Regex;
use std::sync::OnceLock;

/// Local re-validation of generated usernames.
///
/// The generator is asked for 3-7 characters of letters, digits and
/// underscores, but it is not trusted to honour that. Length is always
/// enforced; the character set only when `strict_charset` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsernameRules {
    pub min_len: usize,
    pub max_len: usize,
    pub strict_charset: bool,
}

impl Default for UsernameRules {
    fn default() -> Self {
        Self {
            min_len: 3,
            max_len: 7,
            strict_charset: false,
        }
    }
}

fn charset_regex() -> &'static Regex {
    static CHARSET_REGEX: OnceLock<Regex> = OnceLock::new();
    CHARSET_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap())
}

impl UsernameRules {
    /// Tolerant rules plus the letters/digits/underscore check.
    pub fn strict() -> Self {
        Self {
            strict_charset: true,
            ..Self::default()
        }
    }

    /// Length is counted in characters, bounds inclusive.
    pub fn accepts(&self, candidate: &str) -> bool {
        let len = candidate.chars().count();
        if len < self.min_len || len > self.max_len {
            return false;
        }
        !self.strict_charset || charset_regex().is_match(candidate)
    }

    /// Keep accepted candidates, preserving order.
    pub fn filter(&self, candidates: Vec<String>) -> Vec<String> {
        candidates
            .into_iter()
            .filter(|candidate| self.accepts(candidate))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let rules = UsernameRules::default();
        assert!(!rules.accepts("xx"));
        assert!(rules.accepts("abc"));
        assert!(rules.accepts("abcdefg"));
        assert!(!rules.accepts("abcdefgh"));
        assert!(!rules.accepts(""));
    }

    #[test]
    fn test_filter_drops_out_of_range_names() {
        let rules = UsernameRules::default();
        let filtered = rules.filter(names(&["gamer1", "pro_gm", "xx", "waytoolong"]));
        assert_eq!(filtered, names(&["gamer1", "pro_gm"]));
    }

    #[test]
    fn test_every_survivor_is_within_bounds() {
        let rules = UsernameRules::default();
        let input = names(&["a", "ab", "abc", "abcd", "abcde", "abcdef", "abcdefg", "abcdefgh"]);
        for name in rules.filter(input) {
            let len = name.chars().count();
            assert!((3..=7).contains(&len), "{name} has length {len}");
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let rules = UsernameRules::default();
        let once = rules.filter(names(&["gamer1", "pro_gm", "xx", "ok!", "über"]));
        let twice = rules.filter(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let rules = UsernameRules::default();
        // 4 characters, 8 bytes
        assert!(rules.accepts("ñañá"));
    }

    #[test]
    fn test_default_rules_tolerate_stray_characters() {
        let rules = UsernameRules::default();
        assert!(rules.accepts("pro-gm"));
        assert!(rules.accepts("gm.io"));
    }

    #[test]
    fn test_strict_rules_enforce_charset() {
        let rules = UsernameRules::strict();
        assert!(rules.accepts("pro_gm"));
        assert!(rules.accepts("Gam3r"));
        assert!(!rules.accepts("pro-gm"));
        assert!(!rules.accepts("gm io"));
        assert!(!rules.accepts("ñañá"));
    }
}
