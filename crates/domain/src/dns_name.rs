use std::fmt;

/// Maximum length of a single label in wire form.
pub const MAX_LABEL_LEN: usize = 63;

/// A domain name as an ordered sequence of labels.
///
/// Labels hold one `char` per wire byte, using the byte value as the code
/// point. Encoding truncates every `char` back to its low byte, so names
/// decoded from the wire re-encode to the exact same bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DomainName {
    labels: Vec<String>,
}

impl DomainName {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Builds a name from its dotted form. A trailing dot is ignored and the
    /// empty string (or a lone ".") is the root name with no labels.
    pub fn from_dotted(name: &str) -> Self {
        let trimmed = name.trim_end_matches('.');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self {
            labels: trimmed.split('.').map(str::to_string).collect(),
        }
    }

    /// Converts raw label bytes to the label representation used here.
    pub fn label_from_bytes(bytes: &[u8]) -> String {
        bytes.iter().map(|&b| char::from(b)).collect()
    }

    pub fn push_label(&mut self, label: String) {
        self.labels.push(label);
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Key under which the zone store indexes the zone for this exact name.
    pub fn zone_key(&self) -> String {
        self.labels.join(".")
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.zone_key())
    }
}

impl From<&str> for DomainName {
    fn from(name: &str) -> Self {
        Self::from_dotted(name)
    }
}
