//! Sort directive parsing and candidate ordering.
//!
//! A directive is free text of the form `"<key>[ <direction>]"`, e.g.
//! `"FileName Desc"` or `"DateCreated"`. Parsing returns a typed value
//! checked explicitly by the caller; a malformed directive is rejected
//! before any directory scan takes place.
//!
//! Both the key and the direction tokens are matched case-insensitively.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::discover::FileCandidate;
use crate::error::{PdfBindError, Result};

/// The candidate attribute a merge run is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SortKey {
    /// Keep the discovery order (no reordering, no key extraction).
    None,
    /// Filesystem creation timestamp.
    DateCreated,
    /// Filesystem modification timestamp.
    DateModified,
    /// File name.
    #[default]
    FileName,
    /// Full file path.
    FilePath,
}

impl SortKey {
    const TOKENS: [(&'static str, SortKey); 5] = [
        ("none", SortKey::None),
        ("datecreated", SortKey::DateCreated),
        ("datemodified", SortKey::DateModified),
        ("filename", SortKey::FileName),
        ("filepath", SortKey::FilePath),
    ];

    fn parse_token(token: &str) -> Option<Self> {
        let lowered = token.to_ascii_lowercase();
        Self::TOKENS
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, key)| *key)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::DateCreated => "DateCreated",
            Self::DateModified => "DateModified",
            Self::FileName => "FileName",
            Self::FilePath => "FilePath",
        };
        f.write_str(name)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SortDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    fn parse_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("Asc"),
            Self::Desc => f.write_str("Desc"),
        }
    }
}

/// A parsed sort directive: key plus direction.
///
/// Immutable once parsed. The default directive is `{FileName, Asc}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SortDirective {
    /// Attribute to order by.
    pub key: SortKey,
    /// Direction to order in.
    pub direction: SortDirection,
}

impl SortDirective {
    /// Parse a directive from optional free text.
    ///
    /// Absent, empty, or all-whitespace input yields the default directive.
    ///
    /// # Errors
    ///
    /// Returns [`PdfBindError::InvalidSortSpec`] when the key or direction
    /// token is unrecognized, or when more than two tokens are supplied.
    pub fn parse(input: Option<&str>) -> Result<Self> {
        let Some(input) = input else {
            return Ok(Self::default());
        };

        let tokens: Vec<&str> = input.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Ok(Self::default()),
            [key] => Ok(Self {
                key: Self::parse_key(input, key)?,
                direction: SortDirection::Asc,
            }),
            [key, direction] => Ok(Self {
                key: Self::parse_key(input, key)?,
                direction: SortDirection::parse_token(direction).ok_or_else(|| {
                    PdfBindError::invalid_sort_spec(
                        input,
                        format!("unknown direction {direction:?}, expected Asc or Desc"),
                    )
                })?,
            }),
            _ => Err(PdfBindError::invalid_sort_spec(
                input,
                format!("expected at most 2 tokens, got {}", tokens.len()),
            )),
        }
    }

    fn parse_key(input: &str, token: &str) -> Result<SortKey> {
        SortKey::parse_token(token).ok_or_else(|| {
            PdfBindError::invalid_sort_spec(
                input,
                format!(
                    "unknown sort key {token:?}, expected one of \
                     None, DateCreated, DateModified, FileName, FilePath"
                ),
            )
        })
    }
}

impl FromStr for SortDirective {
    type Err = PdfBindError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(Some(s))
    }
}

impl fmt::Display for SortDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key {
            SortKey::None => f.write_str("None"),
            key => {
                let direction = match self.direction {
                    SortDirection::Asc => "Ascending",
                    SortDirection::Desc => "Descending",
                };
                write!(f, "{direction} by {key}")
            }
        }
    }
}

/// Order discovered candidates according to a directive.
///
/// `SortKey::None` returns the candidates in the exact sequence supplied.
/// Every other key performs a stable sort: candidates comparing equal on
/// the key keep their relative input order regardless of direction, so a
/// fixed candidate list always produces the same processed order.
pub fn order_candidates(
    mut candidates: Vec<FileCandidate>,
    directive: &SortDirective,
) -> Vec<FileCandidate> {
    let compare = |a: &FileCandidate, b: &FileCandidate| match directive.key {
        SortKey::None => unreachable!("None is identity"),
        SortKey::DateCreated => a.created.cmp(&b.created),
        SortKey::DateModified => a.modified.cmp(&b.modified),
        SortKey::FileName => a.name.cmp(&b.name),
        SortKey::FilePath => a.path.cmp(&b.path),
    };

    match (directive.key, directive.direction) {
        (SortKey::None, _) => {}
        (_, SortDirection::Asc) => candidates.sort_by(compare),
        (_, SortDirection::Desc) => candidates.sort_by(|a, b| compare(b, a)),
    }

    candidates
}
