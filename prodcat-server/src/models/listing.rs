//! List-window clamping for the products listing

/// Largest page the listing will serve
const MAX_COUNT: i64 = 10;

/// Bounds for the `GET /products` listing.
///
/// Raw `count`/`start` query values are clamped here rather than rejected:
/// a count outside 1..=10 falls back to 10, a negative start becomes 0.
/// Unparsable values are treated as absent by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListWindow {
    count: i64,
    start: i64,
}

impl ListWindow {
    pub fn new(count: i64, start: i64) -> Self {
        Self {
            count: if (1..=MAX_COUNT).contains(&count) {
                count
            } else {
                MAX_COUNT
            },
            start: start.max(0),
        }
    }

    /// SQL LIMIT value
    pub fn limit(&self) -> i64 {
        self.count
    }

    /// SQL OFFSET value
    pub fn offset(&self) -> i64 {
        self.start
    }
}

impl Default for ListWindow {
    fn default() -> Self {
        Self {
            count: MAX_COUNT,
            start: 0,
        }
    }
}
