//! Structural equality with mismatch descriptors.
//!
//! `equals` returns `Ok(())` or the first mismatch found, described
//! precisely enough to locate it: which property of which type, which
//! array element, which side was absent.

use thiserror::Error;

/// Result of a structural comparison.
pub type EqualsResult = Result<(), Unequal>;

/// First difference found between two values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unequal {
    /// Two scalar values differ.
    #[error("{left} != {right}")]
    Values { left: String, right: String },

    /// Left side has a value, right side does not.
    #[error("left value {left} is absent on the right")]
    LeftPresent { left: String },

    /// Right side has a value, left side does not.
    #[error("right value {right} is absent on the left")]
    RightPresent { right: String },

    #[error("array lengths differ: {left} != {right}")]
    ArrayLength { left: usize, right: usize },

    #[error("element {index}: {inner}")]
    ArrayElement { index: usize, inner: Box<Unequal> },

    /// Union values hold different variants.
    #[error("variant {left} != {right}")]
    Variant {
        left: &'static str,
        right: &'static str,
    },

    #[error("{type_name}.{property}: {inner}")]
    Property {
        type_name: &'static str,
        property: &'static str,
        inner: Box<Unequal>,
    },
}

impl Unequal {
    pub fn values(left: impl ToString, right: impl ToString) -> Self {
        Unequal::Values {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Wraps this mismatch as occurring in `type_name.property`.
    pub fn in_property(self, type_name: &'static str, property: &'static str) -> Self {
        Unequal::Property {
            type_name,
            property,
            inner: Box::new(self),
        }
    }

    /// Path of property names down to the innermost mismatch,
    /// e.g. `["member", "[0]", "name"]`.
    pub fn path(&self) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = self;
        loop {
            match current {
                Unequal::Property {
                    property, inner, ..
                } => {
                    path.push((*property).to_string());
                    current = inner;
                }
                Unequal::ArrayElement { index, inner } => {
                    path.push(format!("[{index}]"));
                    current = inner;
                }
                _ => return path,
            }
        }
    }
}

/// Compares two scalars with `==`.
pub fn scalars<T: PartialEq + ToString>(left: &T, right: &T) -> EqualsResult {
    if left == right {
        Ok(())
    } else {
        Err(Unequal::values(left.to_string(), right.to_string()))
    }
}

/// Compares two doubles; NaN equals NaN.
pub fn doubles(left: f64, right: f64) -> EqualsResult {
    if left == right || (left.is_nan() && right.is_nan()) {
        Ok(())
    } else {
        Err(Unequal::values(left, right))
    }
}
