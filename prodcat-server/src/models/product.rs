//! Validated product input

use super::validation::ValidationError;

/// Maximum accepted name length
const MAX_NAME_LEN: usize = 256;

/// Validated name/price pair for create and update operations.
///
/// The id is never part of a draft: it is store-assigned on create and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    name: String,
    price: f64,
}

impl ProductDraft {
    /// Validate a raw name/price pair.
    ///
    /// - name is trimmed, must be non-empty, at most 256 chars
    /// - price must be finite and non-negative
    /// - price is rounded to 2 decimal places so the stored NUMERIC(10,2)
    ///   value and the echoed response agree
    pub fn new(name: &str, price: f64) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN,
            });
        }
        if !price.is_finite() {
            return Err(ValidationError::OutOfRange {
                field: "price",
                reason: "must be a finite number",
            });
        }
        if price < 0.0 {
            return Err(ValidationError::OutOfRange {
                field: "price",
                reason: "must not be negative",
            });
        }

        Ok(Self {
            name: name.to_string(),
            price: (price * 100.0).round() / 100.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_input() {
        let draft = ProductDraft::new("test product", 11.72).unwrap();
        assert_eq!(draft.name(), "test product");
        assert_eq!(draft.price(), 11.72);
    }

    #[test]
    fn trims_name() {
        let draft = ProductDraft::new("  widget  ", 1.0).unwrap();
        assert_eq!(draft.name(), "widget");
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(
            ProductDraft::new("   ", 1.0),
            Err(ValidationError::Empty { field: "name" })
        ));
    }

    #[test]
    fn rejects_overlong_name() {
        let name = "x".repeat(257);
        assert!(matches!(
            ProductDraft::new(&name, 1.0),
            Err(ValidationError::TooLong { field: "name", max: 256 })
        ));
    }

    #[test]
    fn rejects_negative_price() {
        assert!(matches!(
            ProductDraft::new("widget", -0.01),
            Err(ValidationError::OutOfRange { field: "price", .. })
        ));
    }

    #[test]
    fn rejects_non_finite_price() {
        assert!(ProductDraft::new("widget", f64::NAN).is_err());
        assert!(ProductDraft::new("widget", f64::INFINITY).is_err());
    }

    #[test]
    fn zero_price_is_allowed() {
        assert!(ProductDraft::new("freebie", 0.0).is_ok());
    }

    #[test]
    fn rounds_to_two_decimals() {
        let draft = ProductDraft::new("widget", 9.999).unwrap();
        assert_eq!(draft.price(), 10.0);

        let draft = ProductDraft::new("widget", 3.141).unwrap();
        assert_eq!(draft.price(), 3.14);
    }
}
