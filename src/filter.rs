//! Parsing of numeric filter tokens from the query string.
//!
//! A token is an optional comparison operator followed by a numeric
//! literal: `">=4.5"`, `"<30"`, `"=10"`, or just `"10"`. Malformed
//! tokens never fail the request; they simply produce no filter.

use std::sync::LazyLock;

use regex::Regex;

// Whitespace between operator and numeral is tolerated; the original
// form dropped ">= 5" outright, which read as an accident rather than
// a policy.
static FILTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([<>]=?|=)\s*(\d+\.?\d*|\.\d+)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Gt,
    Ge,
    Lt,
    Le,
}

impl CmpOp {
    /// SQL comparison operator, for splicing into a WHERE clause.
    pub fn sql(self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericFilter {
    pub op: CmpOp,
    pub value: f64,
}

/// Parses a filter token into a typed comparison.
///
/// Match attempts run in a fixed order: operator-prefixed literal, then
/// bare float (treated as equality), then give up. `None` means the
/// token adds no constraint; garbage is silently ignored by design, not
/// rejected.
pub fn parse_numeric_filter(token: &str) -> Option<NumericFilter> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    if let Some(caps) = FILTER_RE.captures(token) {
        let op = match &caps[1] {
            ">=" => CmpOp::Ge,
            "<=" => CmpOp::Le,
            ">" => CmpOp::Gt,
            "<" => CmpOp::Lt,
            _ => CmpOp::Eq,
        };
        let value = caps[2].parse().ok()?;
        return Some(NumericFilter { op, value });
    }

    token
        .parse()
        .ok()
        .map(|value| NumericFilter { op: CmpOp::Eq, value })
}
