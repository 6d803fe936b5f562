use super::prefix::{FilePrefix, PREFIX_LEN};
use crate::error::SignatureError;

/// A content signature: a sparse byte mask over the file prefix and the
/// label reported when every constrained byte matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureRule {
    label: String,
    mask: Vec<Option<u8>>,
}

impl SignatureRule {
    pub fn new(label: impl Into<String>, mask: Vec<Option<u8>>) -> Result<Self, SignatureError> {
        let label = label.into();
        if mask.len() > PREFIX_LEN {
            return Err(SignatureError::invalid_rule(
                label,
                format!("pattern spans {} bytes, prefix is {PREFIX_LEN}", mask.len()),
            ));
        }
        if mask.iter().all(Option::is_none) {
            return Err(SignatureError::invalid_rule(
                label,
                "pattern constrains no bytes",
            ));
        }
        Ok(Self { label, mask })
    }

    /// Builds a rule from whitespace separated hex bytes placed at `offset`.
    /// `??` leaves a position unconstrained.
    pub fn from_hex(
        label: impl Into<String>,
        offset: usize,
        pattern: &str,
    ) -> Result<Self, SignatureError> {
        let label = label.into();
        if offset >= PREFIX_LEN {
            return Err(SignatureError::invalid_rule(
                label,
                format!("offset {offset} is past the {PREFIX_LEN}-byte prefix"),
            ));
        }
        let mut mask = vec![None; offset];

        for token in pattern.split_whitespace() {
            if token == "??" {
                mask.push(None);
                continue;
            }
            if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(SignatureError::invalid_rule(
                    label,
                    format!("'{token}' is not a hex byte"),
                ));
            }
            let byte = u8::from_str_radix(token, 16)
                .map_err(|e| SignatureError::invalid_rule(&label, e.to_string()))?;
            mask.push(Some(byte));
        }

        Self::new(label, mask)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn mask(&self) -> &[Option<u8>] {
        &self.mask
    }

    /// True when every constrained position agrees with the prefix.
    pub fn matches(&self, prefix: &FilePrefix) -> bool {
        self.constraints()
            .all(|(offset, expected)| prefix.byte_at(offset) == expected)
    }

    /// True when `self` matches every prefix `later` matches, so `later`
    /// can never win if placed after `self`.
    pub fn shadows(&self, later: &SignatureRule) -> bool {
        self.constraints()
            .all(|(offset, expected)| later.mask.get(offset) == Some(&Some(expected)))
    }

    fn constraints(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(offset, byte)| byte.map(|b| (offset, b)))
    }
}

type BuiltinSignature = (&'static str, &'static [Option<u8>]);

/// Built-in table, in priority order.
pub(crate) const BUILTIN_SIGNATURES: &[BuiltinSignature] = &[
    ("Shell script", &[Some(0x23), Some(0x21)]),
    (
        "SQLite database",
        &[
            Some(0x53),
            Some(0x51),
            Some(0x4C),
            Some(0x69),
            Some(0x74),
            Some(0x65),
            Some(0x20),
            Some(0x66),
            Some(0x6F),
            Some(0x72),
            Some(0x6D),
            Some(0x61),
            Some(0x74),
            Some(0x20),
            Some(0x33),
            Some(0x00),
        ],
    ),
    (
        "Computer ICO icon file",
        &[Some(0x00), Some(0x00), Some(0x01), Some(0x00)],
    ),
    // GIF87a / GIF89a: byte 4 is the version digit
    (
        "GIF",
        &[Some(0x47), Some(0x49), Some(0x46), Some(0x38), None, Some(0x61)],
    ),
    ("JPG", &[Some(0xFF), Some(0xD8), Some(0xFF), Some(0xEE)]),
    (
        "RAR",
        &[Some(0x52), Some(0x61), Some(0x72), Some(0x21), Some(0x1A), Some(0x07)],
    ),
    (
        "PNG",
        &[
            Some(0x89),
            Some(0x50),
            Some(0x4E),
            Some(0x47),
            Some(0x0D),
            Some(0x0A),
            Some(0x1A),
            Some(0x0A),
        ],
    ),
    (
        "Java class file",
        &[Some(0xCA), Some(0xFE), Some(0xBA), Some(0xBE)],
    ),
    ("PDF", &[Some(0x25), Some(0x50), Some(0x44), Some(0x46)]),
    ("MP3", &[Some(0x49), Some(0x44), Some(0x33)]),
    (
        "ISO",
        &[Some(0x43), Some(0x44), Some(0x30), Some(0x30), Some(0x31)],
    ),
    (
        "Chrome extension archive",
        &[Some(0x43), Some(0x72), Some(0x32), Some(0x34)],
    ),
    ("MP4", &[Some(0x00), Some(0x00), Some(0x00), Some(0x18)]),
];

pub(crate) fn builtin_rules() -> Vec<SignatureRule> {
    BUILTIN_SIGNATURES
        .iter()
        .map(|(label, mask)| SignatureRule {
            label: (*label).to_string(),
            mask: mask.to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_with_offset_and_wildcard() {
        let rule = SignatureRule::from_hex("WAV", 8, "57 41 ?? 45").unwrap();
        assert_eq!(rule.mask().len(), 12);
        assert!(rule.mask()[..8].iter().all(Option::is_none));
        assert_eq!(rule.mask()[8], Some(0x57));
        assert_eq!(rule.mask()[10], None);
    }

    #[test]
    fn test_from_hex_rejects_bad_token() {
        let err = SignatureRule::from_hex("Broken", 0, "50 4G").unwrap_err();
        assert!(err.to_string().contains("'4G' is not a hex byte"));

        assert!(SignatureRule::from_hex("Broken", 0, "504B").is_err());
    }

    #[test]
    fn test_from_hex_rejects_pattern_past_prefix() {
        let err = SignatureRule::from_hex("Late", 14, "01 02 03").unwrap_err();
        assert!(matches!(err, SignatureError::InvalidRule { .. }));
    }

    #[test]
    fn test_from_hex_rejects_offset_past_prefix() {
        assert!(SignatureRule::from_hex("Far", 16, "01").is_err());
        assert!(SignatureRule::from_hex("Far", usize::MAX, "01").is_err());
    }

    #[test]
    fn test_rejects_wildcard_only_pattern() {
        assert!(SignatureRule::from_hex("Anything", 0, "?? ??").is_err());
        assert!(SignatureRule::from_hex("Nothing", 0, "").is_err());
    }

    #[test]
    fn test_matches_checks_every_constraint() {
        let gif = SignatureRule::from_hex("GIF", 0, "47 49 46 38 ?? 61").unwrap();
        assert!(gif.matches(&FilePrefix::from_bytes(b"GIF89a")));
        assert!(gif.matches(&FilePrefix::from_bytes(b"GIF87a")));
        assert!(!gif.matches(&FilePrefix::from_bytes(b"GIF89b")));
        assert!(!gif.matches(&FilePrefix::from_bytes(b"GIF8")));
    }

    #[test]
    fn test_short_prefix_compares_against_zero_pad() {
        let sqlite = builtin_rules()
            .into_iter()
            .find(|r| r.label() == "SQLite database")
            .unwrap();
        // The trailing NUL is absent but the pad stands in for it.
        assert!(sqlite.matches(&FilePrefix::from_bytes(b"SQLite format 3")));
        assert!(!sqlite.matches(&FilePrefix::from_bytes(b"SQLite format")));
    }

    #[test]
    fn test_shorter_rule_shadows_longer_with_same_lead() {
        let short = SignatureRule::from_hex("ZIP", 0, "50 4B").unwrap();
        let long = SignatureRule::from_hex("DOCX", 0, "50 4B 03 04").unwrap();
        assert!(short.shadows(&long));
        assert!(!long.shadows(&short));
    }

    #[test]
    fn test_builtin_table_has_no_shadowed_rules() {
        let rules = builtin_rules();
        for (i, earlier) in rules.iter().enumerate() {
            for later in &rules[i + 1..] {
                assert!(
                    !earlier.shadows(later),
                    "{} shadows {}",
                    earlier.label(),
                    later.label()
                );
            }
        }
    }

    #[test]
    fn test_builtin_rules_fit_prefix() {
        for (label, mask) in BUILTIN_SIGNATURES {
            assert!(mask.len() <= PREFIX_LEN, "{label} is too long");
            assert!(mask.iter().any(Option::is_some), "{label} is empty");
        }
    }
}
