//! Caption parsing for the chat dispatcher.
//!
//! Maps the text a user sends with a photo onto a [`Directive`]. Captions are
//! trimmed and lowercased first. `rotate` and `salt and pepper` accept an
//! optional count and fall back to 1 when it is missing or not an integer.

use std::fmt;

use crate::{Error, Result};

pub const SUPPORTED_FILTERS: &[&str] = &[
    "Blur",
    "Contour",
    "Segment",
    "Rotate",
    "Salt and Pepper",
    "Concat",
    "Median",
    "Edge Extraction",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Blur,
    Contour,
    /// Mirror concat: the image joined horizontally with its left-right flip.
    Concat,
    Segment,
    Rotate { times: i64 },
    SaltAndPepper { iterations: usize },
    Median,
    EdgeExtraction,
}

impl Directive {
    pub fn parse(caption: &str) -> Result<Self> {
        let normalized = caption.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(Error::MissingDirective);
        }

        let directive = match normalized.as_str() {
            "blur" => Directive::Blur,
            "contour" => Directive::Contour,
            "concat" => Directive::Concat,
            "segment" => Directive::Segment,
            "median" => Directive::Median,
            "edge extraction" => Directive::EdgeExtraction,
            s if s.starts_with("rotate") => Directive::Rotate {
                times: count_token(s, 1),
            },
            s if s.starts_with("salt and pepper") => Directive::SaltAndPepper {
                iterations: count_token(s, 3).max(0) as usize,
            },
            _ => return Err(Error::UnsupportedDirective(caption.trim().to_string())),
        };

        Ok(directive)
    }

    /// Lowercase filter name as it appears in captions.
    pub fn name(&self) -> &'static str {
        match self {
            Directive::Blur => "blur",
            Directive::Contour => "contour",
            Directive::Concat => "concat",
            Directive::Segment => "segment",
            Directive::Rotate { .. } => "rotate",
            Directive::SaltAndPepper { .. } => "salt and pepper",
            Directive::Median => "median",
            Directive::EdgeExtraction => "edge extraction",
        }
    }
}

/// Integer at whitespace token `index`, or 1.
fn count_token(caption: &str, index: usize) -> i64 {
    match caption.split_whitespace().nth(index).map(str::parse::<i64>) {
        Some(Ok(n)) => n,
        Some(Err(_)) => {
            tracing::warn!(caption, "ignoring non-numeric count, using 1");
            1
        }
        None => 1,
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Rotate { times } => write!(f, "rotate {times}"),
            Directive::SaltAndPepper { iterations } => write!(f, "salt and pepper {iterations}"),
            other => f.write_str(other.name()),
        }
    }
}

/// The reply a dispatcher sends for an unsupported caption.
pub fn help_text() -> String {
    format!(
        "Unsupported filter. Supported filters are: {}\n\
         You can extend 'Rotate' and 'Salt and Pepper' filters by specifying \
         'Rotate 2' to rotate the image twice, or 'Salt and Pepper 5' to make the image more noisy.",
        SUPPORTED_FILTERS.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_names() {
        assert_eq!(Directive::parse("blur").unwrap(), Directive::Blur);
        assert_eq!(Directive::parse("  Contour ").unwrap(), Directive::Contour);
        assert_eq!(Directive::parse("CONCAT").unwrap(), Directive::Concat);
        assert_eq!(Directive::parse("segment").unwrap(), Directive::Segment);
        assert_eq!(Directive::parse("Median").unwrap(), Directive::Median);
        assert_eq!(
            Directive::parse("Edge Extraction").unwrap(),
            Directive::EdgeExtraction
        );
    }

    #[test]
    fn test_parse_rotate_counts() {
        assert_eq!(Directive::parse("rotate").unwrap(), Directive::Rotate { times: 1 });
        assert_eq!(Directive::parse("Rotate 2").unwrap(), Directive::Rotate { times: 2 });
        assert_eq!(Directive::parse("rotate -1").unwrap(), Directive::Rotate { times: -1 });
        assert_eq!(Directive::parse("rotate twice").unwrap(), Directive::Rotate { times: 1 });
    }

    #[test]
    fn test_parse_salt_and_pepper_counts() {
        assert_eq!(
            Directive::parse("Salt and Pepper").unwrap(),
            Directive::SaltAndPepper { iterations: 1 }
        );
        assert_eq!(
            Directive::parse("salt and pepper 5").unwrap(),
            Directive::SaltAndPepper { iterations: 5 }
        );
        assert_eq!(
            Directive::parse("salt and pepper -3").unwrap(),
            Directive::SaltAndPepper { iterations: 0 }
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            Directive::parse("sharpen"),
            Err(Error::UnsupportedDirective(s)) if s == "sharpen"
        ));
        // exact match required for the fixed names
        assert!(Directive::parse("blur 3").is_err());
    }

    #[test]
    fn test_parse_empty_is_missing() {
        assert!(matches!(Directive::parse("   "), Err(Error::MissingDirective)));
    }

    #[test]
    fn test_display_reparses() {
        for d in [
            Directive::Blur,
            Directive::Rotate { times: 3 },
            Directive::SaltAndPepper { iterations: 4 },
            Directive::EdgeExtraction,
        ] {
            assert_eq!(Directive::parse(&d.to_string()).unwrap(), d);
        }
    }

    #[test]
    fn test_help_lists_every_filter() {
        let help = help_text();
        for name in SUPPORTED_FILTERS {
            assert!(help.contains(name));
        }
    }
}
