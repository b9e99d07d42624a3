//! Account Configuration

/// Account numbering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountConfig {
    /// Prefix of generated account numbers
    pub number_prefix: String,
    /// Zero-padded width of the sequence part
    pub number_width: usize,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            number_prefix: "CONTA".to_string(),
            number_width: 6,
        }
    }
}

impl AccountConfig {
    /// Render the account number for a sequence value
    pub fn format_number(&self, sequence: u64) -> String {
        format!(
            "{}-{:0width$}",
            self.number_prefix,
            sequence,
            width = self.number_width
        )
    }
}
