use std::fmt::{self, Display, Formatter};

/// A named block of a WireGuard-style config, e.g. `[Interface]` or `[Peer]`.
///
/// The body is kept as opaque text so that line order, duplicate keys,
/// comments and spacing survive untouched. Key lookups are done on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section name without brackets.
    pub name: String,
    /// Body text between the header and the next section, trimmed.
    pub body: String,
}

impl Section {
    /// Create a section, trimming surrounding whitespace from `body`.
    pub fn new(name: impl Into<String>, body: impl AsRef<str>) -> Self {
        Self {
            name: name.into(),
            body: body.as_ref().trim().to_string(),
        }
    }

    /// Create a section with an empty body.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    /// Return `true` when the body holds no text.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterate over body lines without line terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body.lines()
    }

    /// Iterate over `key = value` lines in order, skipping comments.
    ///
    /// Keys and values are trimmed. Lines without `=` are ignored.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lines().filter_map(parse_entry)
    }

    /// Return the value of the first entry whose key equals `key` exactly.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Remove the first line equal to `line` (ignoring surrounding whitespace).
    ///
    /// Everything else in the body stays byte-for-byte identical. Returns
    /// `true` if a line was removed.
    pub fn remove_line(&mut self, line: &str) -> bool {
        let wanted = line.trim();
        let mut offset = 0;
        let mut found = None;

        for raw in self.body.split_inclusive('\n') {
            if raw.trim() == wanted {
                found = Some((offset, raw.len()));
                break;
            }
            offset += raw.len();
        }

        let Some((start, len)) = found else {
            return false;
        };
        self.body.replace_range(start..start + len, "");
        let trimmed = self.body.trim();
        if trimmed.len() != self.body.len() {
            self.body = trimmed.to_string();
        }
        true
    }

    /// Append a `key = value` line to the end of the body.
    pub fn push_entry(&mut self, key: &str, value: &str) {
        if !self.body.is_empty() {
            self.body.push('\n');
        }
        self.body.push_str(key);
        self.body.push_str(" = ");
        self.body.push_str(value);
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)?;
        if !self.body.is_empty() {
            write!(f, "\n{}", self.body)?;
        }
        Ok(())
    }
}

fn parse_entry(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.starts_with('#') || line.starts_with(';') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}

#[cfg(test)]
mod tests {
    use super::Section;

    #[test]
    fn get_returns_first_matching_key() {
        let section = Section::new("Interface", "DNS = 10.0.0.1\nDNS = 1.1.1.1");
        assert_eq!(section.get("DNS"), Some("10.0.0.1"));
    }

    #[test]
    fn get_is_case_sensitive_and_skips_comments() {
        let section = Section::new("Interface", "# DNS = 9.9.9.9\ndns = 8.8.8.8");
        assert_eq!(section.get("DNS"), None);
        assert_eq!(section.get("dns"), Some("8.8.8.8"));
    }

    #[test]
    fn remove_line_removes_only_first_occurrence() {
        let mut section = Section::new("Peer", "A = 1\nB = 2\nA = 1\nC = 3");
        assert!(section.remove_line("A = 1"));
        assert_eq!(section.body, "B = 2\nA = 1\nC = 3");
    }

    #[test]
    fn remove_line_keeps_crlf_body_intact() {
        let mut section = Section::new("Peer", "PublicKey = B\r\nX = 1\r\nEndpoint = e");
        assert!(section.remove_line("X = 1"));
        assert_eq!(section.body, "PublicKey = B\r\nEndpoint = e");
    }

    #[test]
    fn remove_missing_line_is_a_no_op() {
        let mut section = Section::new("Peer", "PublicKey = B");
        assert!(!section.remove_line("AllowedIPs = 0.0.0.0/0"));
        assert_eq!(section.body, "PublicKey = B");
    }

    #[test]
    fn push_entry_on_empty_body_has_no_leading_newline() {
        let mut section = Section::empty("Peer");
        section.push_entry("AllowedIPs", "10.0.0.0/8");
        assert_eq!(section.to_string(), "[Peer]\nAllowedIPs = 10.0.0.0/8");
    }
}
