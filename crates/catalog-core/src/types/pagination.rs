//! Pagination types for the listing endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_LIMIT: u64 = 50;
/// Maximum page size. Values above this are rejected, not clamped.
const MAX_LIMIT: u64 = 100;

/// A validated pagination window for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
}

impl PageRequest {
    /// Create a page request from already-validated values.
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }
    }

    /// Validate raw query values into a pagination window.
    ///
    /// Both parameters arrive as raw strings so that non-integer input can
    /// be reported rule by rule instead of failing deserialization. On
    /// failure, returns one message per violated rule. A non-numeric value
    /// also fails every range rule on that parameter; a fractional number
    /// only fails the range rules its value actually violates.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Result<Self, Vec<String>> {
        let mut violations = Vec::new();
        let page = parse_bounded(page, "page", 1, None, &mut violations);
        let limit = parse_bounded(limit, "limit", DEFAULT_LIMIT, Some(MAX_LIMIT), &mut violations);

        if violations.is_empty() {
            Ok(Self { page, limit })
        } else {
            Err(violations)
        }
    }

    /// Calculate the SQL `OFFSET` value.
    ///
    /// Saturates at `i64::MAX` so huge page numbers stay representable
    /// as a Postgres `BIGINT` offset and simply land past the last row.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn parse_bounded(
    raw: Option<&str>,
    name: &str,
    default: u64,
    max: Option<u64>,
    violations: &mut Vec<String>,
) -> u64 {
    let Some(raw) = raw else {
        return default;
    };

    match raw.parse::<i64>() {
        Ok(value) => {
            if value < 1 {
                violations.push(format!("{name} must not be less than 1"));
            }
            if let Some(max) = max {
                if value > max as i64 {
                    violations.push(format!("{name} must not be greater than {max}"));
                }
            }
            value.max(1) as u64
        }
        Err(_) => {
            violations.push(format!("{name} must be an integer number"));
            // Numeric but fractional input still gets meaningful range
            // checks; non-numeric input compares like NaN and fails all
            // of them.
            match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    if value < 1.0 {
                        violations.push(format!("{name} must not be less than 1"));
                    }
                    if let Some(max) = max {
                        if value > max as f64 {
                            violations.push(format!("{name} must not be greater than {max}"));
                        }
                    }
                }
                _ => {
                    violations.push(format!("{name} must not be less than 1"));
                    if let Some(max) = max {
                        violations.push(format!("{name} must not be greater than {max}"));
                    }
                }
            }
            default
        }
    }
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total number of matching items, ignoring the window.
    pub total: u64,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of pages, never below 1.
    pub last_page: u64,
}

impl PageMeta {
    /// Build metadata for a window over `total` matching rows.
    pub fn new(total: u64, page: &PageRequest) -> Self {
        let last_page = if total == 0 {
            1
        } else {
            total.div_ceil(page.limit)
        };
        Self {
            total,
            page: page.page,
            page_size: page.limit,
            last_page,
        }
    }
}
