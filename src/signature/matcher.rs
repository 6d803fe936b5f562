use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, trace, warn};

use super::prefix::FilePrefix;
use super::rules::{builtin_rules, SignatureRule};
use crate::error::SignatureError;

/// Label reported when no signature matches.
pub const UNKNOWN_LABEL: &str = "unknown";

#[derive(Debug, Deserialize)]
struct SignaturesFile {
    signatures: Vec<UserSignature>,
}

#[derive(Debug, Deserialize)]
struct UserSignature {
    label: String,
    #[serde(default)]
    offset: usize,
    bytes: String,
}

/// Ordered signature table. The first rule whose mask matches wins.
#[derive(Debug, Clone)]
pub struct SignatureMatcher {
    rules: Vec<SignatureRule>,
}

impl SignatureMatcher {
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// The built-in table, extended from `path` when one is given.
    pub fn with_user_rules(path: Option<&Path>) -> crate::error::Result<Self> {
        let mut matcher = Self::builtin();
        if let Some(path) = path {
            matcher.load_user_rules(path)?;
        }
        Ok(matcher)
    }

    pub fn identify(&self, prefix: &FilePrefix) -> &str {
        match self.rules.iter().find(|rule| rule.matches(prefix)) {
            Some(rule) => {
                trace!(label = rule.label(), "signature matched");
                rule.label()
            }
            None => UNKNOWN_LABEL,
        }
    }

    pub fn rules(&self) -> &[SignatureRule] {
        &self.rules
    }

    /// Appends a rule at the lowest priority. Returns the label of an
    /// existing rule that makes it unreachable, if any.
    pub fn push_rule(&mut self, rule: SignatureRule) -> Option<String> {
        let shadowed_by = self
            .rules
            .iter()
            .find(|earlier| earlier.shadows(&rule))
            .map(|earlier| earlier.label().to_string());

        if let Some(ref earlier) = shadowed_by {
            warn!(
                label = rule.label(),
                shadowed_by = %earlier,
                "signature can never match"
            );
        }
        self.rules.push(rule);
        shadowed_by
    }

    /// Loads extra signatures from a JSON or YAML file. They are appended
    /// after the rules already present.
    pub fn load_user_rules<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, SignatureError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading user signatures");

        let content = fs::read_to_string(path)
            .map_err(|e| SignatureError::rules_file_read_error(path, e.to_string()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let file: SignaturesFile = match extension {
            "json" => serde_json::from_str(&content)
                .map_err(|e| SignatureError::rules_parse_error(path, e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| SignatureError::rules_parse_error(path, e.to_string()))?,
            _ => return Err(SignatureError::unsupported_format(extension)),
        };

        // Validate everything before touching the table.
        let rules = file
            .signatures
            .into_iter()
            .map(|sig| SignatureRule::from_hex(sig.label, sig.offset, &sig.bytes))
            .collect::<Result<Vec<_>, _>>()?;

        let count = rules.len();
        for rule in rules {
            self.push_rule(rule);
        }
        debug!(count, total = self.rules.len(), "loaded user signatures");
        Ok(count)
    }
}

impl Default for SignatureMatcher {
    fn default() -> Self {
        Self::builtin()
    }
}
