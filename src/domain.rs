//! Domain-name validation and normalization.
//!
//! A [`Domain`] is always lowercase and always matches the domain grammar:
//! dot-separated labels of alphanumerics and internal hyphens, no label
//! starting or ending with a hyphen. Construction goes through [`FromStr`]
//! (strict, returns an error) or [`normalize`] (line-oriented, silently
//! drops comments, blanks and garbage).

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Grammar for a full domain name, anchored start to end. Input is
/// lowercased before matching, so lowercase classes suffice.
static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)*[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$")
        .expect("domain grammar regex is valid")
});

/// The input does not match the domain grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a valid domain name")]
pub struct InvalidDomain(pub String);

/// A validated, normalized (lowercase) domain name.
///
/// Equality, hashing and ordering are byte-wise on the normalized form,
/// which makes the sort order of an output file deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Domain(String);

impl Domain {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Domain {
    type Err = InvalidDomain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        if DOMAIN_RE.is_match(&lowered) {
            Ok(Domain(lowered))
        } else {
            Err(InvalidDomain(s.to_string()))
        }
    }
}

/// True for lines the validator skips outright: blank, `#` comment or
/// `//` comment.
pub fn is_comment_or_blank(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//")
}

/// Normalize one raw line from a source list.
///
/// Trims whitespace, skips blank lines and `#`/`//` comments, lowercases
/// the rest and accepts it only if it matches the domain grammar.
/// Rejection is silent: malformed input yields `None`, never an error.
///
/// # Examples
/// ```
/// use domblock::domain::normalize;
/// assert_eq!(normalize("  Example.COM  ").unwrap().as_str(), "example.com");
/// assert!(normalize("# a comment").is_none());
/// assert!(normalize("not a domain!").is_none());
/// ```
pub fn normalize(line: &str) -> Option<Domain> {
    if is_comment_or_blank(line) {
        return None;
    }
    line.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // FromStr tests
    #[test]
    fn test_parse_simple_domain() {
        let d: Domain = "example.com".parse().unwrap();
        assert_eq!(d.as_str(), "example.com");
    }

    #[test]
    fn test_parse_lowercases() {
        let d: Domain = "FOO.EXAMPLE.ORG".parse().unwrap();
        assert_eq!(d.as_str(), "foo.example.org");
    }

    #[test]
    fn test_parse_single_label() {
        assert!("localhost".parse::<Domain>().is_ok());
        assert!("a".parse::<Domain>().is_ok());
    }

    #[test]
    fn test_parse_deep_subdomains() {
        assert!("a.b.c.d.e.example.co.uk".parse::<Domain>().is_ok());
    }

    #[test]
    fn test_parse_internal_hyphens() {
        assert!("my-host.example-site.com".parse::<Domain>().is_ok());
    }

    #[test]
    fn test_parse_rejects_edge_hyphens() {
        assert!("-bad.com".parse::<Domain>().is_err());
        assert!("bad-.com".parse::<Domain>().is_err());
        assert!("sub.-bad.com".parse::<Domain>().is_err());
    }

    #[test]
    fn test_parse_rejects_empty_labels() {
        assert!("example..com".parse::<Domain>().is_err());
        assert!(".example.com".parse::<Domain>().is_err());
        assert!("example.com.".parse::<Domain>().is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Domain>().is_err());
        assert!("not a domain!".parse::<Domain>().is_err());
        assert!("foo_bar.com".parse::<Domain>().is_err());
        assert!("https://example.com".parse::<Domain>().is_err());
    }

    #[test]
    fn test_parse_rejects_non_ascii() {
        // Lowercasing is Unicode-aware but the grammar is ASCII-only,
        // so raw IDN input is rejected while punycode passes.
        assert!("bücher.com".parse::<Domain>().is_err());
        assert!("xn--bcher-kva.com".parse::<Domain>().is_ok());
    }

    #[test]
    fn test_parse_error_keeps_original_input() {
        let err = "Not A Domain!".parse::<Domain>().unwrap_err();
        assert_eq!(err.to_string(), "'Not A Domain!' is not a valid domain name");
    }

    #[test]
    fn test_domain_ordering_is_bytewise() {
        let mut domains: Vec<Domain> = ["b.com", "a.com", "c.org"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        domains.sort();
        let sorted: Vec<&str> = domains.iter().map(|d| d.as_str()).collect();
        assert_eq!(sorted, vec!["a.com", "b.com", "c.org"]);
    }

    // normalize tests
    #[test]
    fn test_is_comment_or_blank() {
        assert!(is_comment_or_blank(""));
        assert!(is_comment_or_blank("   "));
        assert!(is_comment_or_blank("# note"));
        assert!(is_comment_or_blank("  // note"));
        assert!(!is_comment_or_blank("example.com"));
        assert!(!is_comment_or_blank("not a domain!"));
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Example.COM\t").unwrap().as_str(), "example.com");
    }

    #[test]
    fn test_normalize_skips_blank_lines() {
        assert!(normalize("").is_none());
        assert!(normalize("   ").is_none());
        assert!(normalize("\t\r").is_none());
    }

    #[test]
    fn test_normalize_skips_comments() {
        assert!(normalize("# comment").is_none());
        assert!(normalize("   # indented comment").is_none());
        assert!(normalize("// slash comment").is_none());
    }

    #[test]
    fn test_normalize_rejects_malformed_silently() {
        assert!(normalize("not a domain!").is_none());
        assert!(normalize("-bad.com").is_none());
    }

    #[test]
    fn test_normalize_accepted_set() {
        let lines = ["example.com", "  ", "#comment", "not a domain!", "FOO.EXAMPLE.ORG"];
        let accepted: Vec<String> = lines
            .iter()
            .filter_map(|l| normalize(l))
            .map(|d| d.as_str().to_string())
            .collect();
        assert_eq!(accepted, vec!["example.com", "foo.example.org"]);
    }
}
