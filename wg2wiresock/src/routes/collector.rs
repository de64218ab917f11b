use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use thiserror::Error;

pub const ROUTE_PROMPT: &str = "Route (IP, CIDR or domain; empty line to finish): ";

/// Errors returned when reading route entries from a file.
#[derive(Debug, Error)]
pub enum RoutesLoadError {
    #[error("failed to read routes file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Read route entries interactively until an empty line or end of input.
///
/// Each entry is trimmed. The prompt is written before every read, including
/// the one that ends the loop.
pub fn prompt_routes<R: BufRead, W: Write>(
    input: &mut R,
    prompt: &mut W,
) -> io::Result<Vec<String>> {
    let mut routes = Vec::new();
    loop {
        write!(prompt, "{ROUTE_PROMPT}")?;
        prompt.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let entry = line.trim();
        if entry.is_empty() {
            break;
        }
        routes.push(entry.to_string());
    }
    Ok(routes)
}

/// Parse a routes list: one entry per line, `#` comments skipped.
///
/// The list ends at the first blank line or at end of text, the same way an
/// interactive session ends.
pub fn parse_routes_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .take_while(|line| !line.is_empty())
        .filter(|line| !line.starts_with('#'))
        .map(ToOwned::to_owned)
        .collect()
}

/// Load a routes list file.
pub fn load_routes_file(path: &Path) -> Result<Vec<String>, RoutesLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| RoutesLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_routes_list(&raw))
}

/// Combine non-interactive route sources: flag values first, then file entries.
///
/// An empty flag value ends the sequence, so neither later flags nor file
/// entries are taken.
pub fn collect_routes(flags: &[String], file_entries: Vec<String>) -> Vec<String> {
    let mut routes = Vec::with_capacity(flags.len() + file_entries.len());
    for entry in flags {
        let entry = entry.trim();
        if entry.is_empty() {
            return routes;
        }
        routes.push(entry.to_string());
    }
    routes.extend(file_entries);
    routes
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{collect_routes, parse_routes_list, prompt_routes, ROUTE_PROMPT};

    #[test]
    fn prompt_stops_at_first_blank_line_and_keeps_duplicates() {
        let mut input =
            Cursor::new("10.0.0.0/8\n  example.com \n10.0.0.0/8\n   \nignored.example\n");
        let mut prompt = Vec::new();

        let routes = prompt_routes(&mut input, &mut prompt).expect("in-memory io");

        assert_eq!(routes, vec!["10.0.0.0/8", "example.com", "10.0.0.0/8"]);
        let shown = String::from_utf8(prompt).expect("utf-8");
        assert_eq!(shown.matches(ROUTE_PROMPT).count(), 4);
    }

    #[test]
    fn prompt_ends_on_eof_without_blank_line() {
        let mut input = Cursor::new("192.168.1.0/24");
        let routes = prompt_routes(&mut input, &mut Vec::new()).expect("in-memory io");
        assert_eq!(routes, vec!["192.168.1.0/24"]);
    }

    #[test]
    fn routes_list_skips_comments() {
        let routes = parse_routes_list("# office\n10.1.0.0/16\n  example.com\n#10.2.0.0/16\n");
        assert_eq!(routes, vec!["10.1.0.0/16", "example.com"]);
    }

    #[test]
    fn routes_list_ends_at_first_blank_line() {
        assert_eq!(parse_routes_list("3.3.3.3\n\n4.4.4.4\n"), vec!["3.3.3.3"]);
        assert_eq!(parse_routes_list("3.3.3.3\n   \n4.4.4.4"), vec!["3.3.3.3"]);
        assert!(parse_routes_list("\n3.3.3.3\n").is_empty());
    }

    #[test]
    fn flags_come_before_file_entries() {
        let routes = collect_routes(
            &["1.1.1.1".to_string(), " 10.0.0.0/8 ".to_string()],
            vec!["2.2.2.2".to_string()],
        );
        assert_eq!(routes, vec!["1.1.1.1", "10.0.0.0/8", "2.2.2.2"]);
    }

    #[test]
    fn empty_flag_ends_the_route_list() {
        let flags = ["1.1.1.1".to_string(), String::new(), "2.2.2.2".to_string()];
        assert_eq!(collect_routes(&flags, Vec::new()), vec!["1.1.1.1"]);

        let flags = ["1.1.1.1".to_string(), "  ".to_string()];
        assert_eq!(
            collect_routes(&flags, vec!["3.3.3.3".to_string()]),
            vec!["1.1.1.1"]
        );
    }
}
