//! Scalar datatype inference over a column's distinct values

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ProfilerError;

/// Scalar datatype of a profiled column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Datatype {
    Int,
    Float,
    Str,
}

impl Datatype {
    /// Tag used in the schema lookup
    pub fn type_name(&self) -> &'static str {
        match self {
            Datatype::Int => "int",
            Datatype::Float => "float",
            Datatype::Str => "str",
        }
    }

    /// Classify a single raw value
    pub fn of_value(value: &str) -> Datatype {
        if is_int(value) {
            Datatype::Int
        } else if is_float(value) {
            Datatype::Float
        } else {
            Datatype::Str
        }
    }

    /// Whether `value` is compatible with this baseline type
    fn accepts(&self, value: &str) -> bool {
        match self {
            Datatype::Int => is_int(value),
            Datatype::Float => is_float(value),
            Datatype::Str => !is_int(value) && !is_float(value),
        }
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Outcome of datatype inference over a value list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatatypeVerdict {
    /// Every value agreed with the first value's type
    Consistent(Datatype),
    /// At least one value disagreed
    Different,
}

impl DatatypeVerdict {
    /// Resolve to a column datatype; mixed columns become strings
    pub fn into_datatype(self) -> Datatype {
        match self {
            DatatypeVerdict::Consistent(datatype) => datatype,
            DatatypeVerdict::Different => Datatype::Str,
        }
    }
}

/// Determine the datatype shared by `values`.
///
/// The first value fixes the baseline; the first value that disagrees with it
/// ends the scan with [`DatatypeVerdict::Different`]. `column` only labels the
/// error returned for an empty list.
pub fn determine_datatype<S: AsRef<str>>(
    values: &[S],
    column: &str,
) -> Result<DatatypeVerdict, ProfilerError> {
    let Some((first, rest)) = values.split_first() else {
        tracing::error!(column, "Datatype inference received an empty value list");
        return Err(ProfilerError::EmptyValues {
            column: column.to_string(),
        });
    };

    let baseline = Datatype::of_value(first.as_ref());

    for value in rest {
        let value = value.as_ref();
        if !baseline.accepts(value) {
            tracing::debug!(
                column,
                expected = %baseline,
                found = %Datatype::of_value(value),
                value,
                "Values do not have a consistent datatype"
            );
            return Ok(DatatypeVerdict::Different);
        }
    }

    tracing::debug!(column, datatype = %baseline, "All values share one datatype");
    Ok(DatatypeVerdict::Consistent(baseline))
}

/// Optional sign followed by one or more ASCII digits, surrounding whitespace
/// ignored. No magnitude limit.
fn is_int(value: &str) -> bool {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix(['+', '-'])
        .unwrap_or(trimmed);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_float(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(values: &[&str]) -> DatatypeVerdict {
        determine_datatype(values, "test").unwrap()
    }

    #[test]
    fn test_all_integers() {
        assert_eq!(
            verdict(&["1", "2", "3"]),
            DatatypeVerdict::Consistent(Datatype::Int)
        );
        assert_eq!(
            verdict(&["-4", "+5", " 6 ", "123456789012345678901234567890123456789012"]),
            DatatypeVerdict::Consistent(Datatype::Int)
        );
    }

    #[test]
    fn test_float_baseline_accepts_integers() {
        assert_eq!(
            verdict(&["1.5", "2"]),
            DatatypeVerdict::Consistent(Datatype::Float)
        );
        assert_eq!(
            verdict(&["1e3", "-0.25", "inf"]),
            DatatypeVerdict::Consistent(Datatype::Float)
        );
    }

    #[test]
    fn test_int_baseline_rejects_floats() {
        assert_eq!(verdict(&["1", "2.5"]), DatatypeVerdict::Different);
    }

    #[test]
    fn test_string_baseline_rejects_numbers() {
        assert_eq!(verdict(&["a", "1"]), DatatypeVerdict::Different);
        assert_eq!(verdict(&["a", "1.5"]), DatatypeVerdict::Different);
        assert_eq!(
            verdict(&["red", "green", ""]),
            DatatypeVerdict::Consistent(Datatype::Str)
        );
    }

    #[test]
    fn test_empty_string_is_str() {
        assert_eq!(Datatype::of_value(""), Datatype::Str);
        assert_eq!(Datatype::of_value("-"), Datatype::Str);
        assert_eq!(Datatype::of_value("1_000"), Datatype::Str);
    }

    #[test]
    fn test_different_maps_to_str() {
        assert_eq!(DatatypeVerdict::Different.into_datatype(), Datatype::Str);
        assert_eq!(
            DatatypeVerdict::Consistent(Datatype::Float).into_datatype(),
            Datatype::Float
        );
    }

    #[test]
    fn test_empty_values_is_error() {
        let values: [&str; 0] = [];
        assert!(matches!(
            determine_datatype(&values, "Age"),
            Err(ProfilerError::EmptyValues { column }) if column == "Age"
        ));
    }

    #[test]
    fn test_type_name_serialization() {
        assert_eq!(serde_json::to_string(&Datatype::Int).unwrap(), "\"int\"");
        assert_eq!(Datatype::Float.to_string(), "float");
    }
}
