use std::fmt;

/// Fixer access key. Only ever trimmed, never validated beyond that.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct Credential(String);

impl Credential {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

// Keep the key out of logs and debug dumps.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            f.write_str("Credential(<blank>)")
        } else {
            f.write_str("Credential(<redacted>)")
        }
    }
}
