//! YAML front-matter splitting for content files.
//!
//! A front-matter block is a leading `---` line, YAML, then a closing
//! `---` line. Files without a block are passed through whole; an
//! unclosed block is treated as body, not an error.

use super::FrontMatter;

/// Split raw file text into front matter and body.
///
/// Returns `None` front matter when the file has no block at all, so
/// callers can distinguish "no front matter" from "empty front matter".
pub fn parse(raw: &str) -> Result<(Option<FrontMatter>, String), serde_yaml::Error> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    if let Some(rest) = strip_open_delimiter(text) {
        if let Some((yaml, body)) = split_at_close_delimiter(rest) {
            let front = if yaml.trim().is_empty() {
                FrontMatter::default()
            } else {
                serde_yaml::from_str(yaml)?
            };
            return Ok((Some(front), body.to_string()));
        }
    }

    Ok((None, text.to_string()))
}

fn strip_open_delimiter(s: &str) -> Option<&str> {
    let s = s.strip_prefix("---")?;
    s.strip_prefix("\r\n").or_else(|| s.strip_prefix('\n'))
}

fn split_at_close_delimiter(s: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in s.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&s[..offset], &s[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_front_matter() {
        let raw = "---\ntitle: alias doc\naliases:\n  - \"alias1/\"\n  - \"alias-2/\"\n---\naliases\n";
        let (front, body) = parse(raw).unwrap();
        let front = front.expect("block should be detected");
        assert_eq!(front.title.as_deref(), Some("alias doc"));
        assert_eq!(front.aliases, vec!["alias1/", "alias-2/"]);
        assert_eq!(body, "aliases\n");
    }

    #[test]
    fn test_parse_without_front_matter() {
        let raw = "<!DOCTYPE html><html><body>hi</body></html>";
        let (front, body) = parse(raw).unwrap();
        assert!(front.is_none());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_parse_empty_block() {
        let (front, body) = parse("---\n---\nbody\n").unwrap();
        let front = front.expect("empty block is still a block");
        assert!(front.aliases.is_empty());
        assert!(!front.draft);
        assert_eq!(body, "body\n");
    }

    #[test]
    fn test_parse_unclosed_block_is_body() {
        let raw = "---\ntitle: dangling\n";
        let (front, body) = parse(raw).unwrap();
        assert!(front.is_none());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_parse_crlf() {
        let raw = "---\r\ntitle: windows\r\ndraft: true\r\n---\r\nbody";
        let (front, body) = parse(raw).unwrap();
        let front = front.unwrap();
        assert_eq!(front.title.as_deref(), Some("windows"));
        assert!(front.draft);
        assert_eq!(body, "body");
    }

    #[test]
    fn test_parse_malformed_yaml_is_error() {
        let raw = "---\ntitle: [unclosed\n---\nbody\n";
        assert!(parse(raw).is_err());
    }

    #[test]
    fn test_alias_order_preserved() {
        let raw = "---\naliases: [z/, a/, m/]\n---\n";
        let (front, _) = parse(raw).unwrap();
        assert_eq!(front.unwrap().aliases, vec!["z/", "a/", "m/"]);
    }
}
