//! Column classification: infer a value type and detect a header row.
//!
//! The algorithm anchors on the last value (the most representative one),
//! checks the interior values against the anchor type back to front with a
//! short-circuit on the first mismatch, and finally inspects the first value
//! to decide between a uniform column, a header label, or a mixed column
//! that falls back to text.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value_type::{ValueType, value_matches_type, value_type_of};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("cannot classify an empty sequence of values")]
    EmptyInput,
}

/// Outcome of classifying one column's worth of values.
///
/// `header` is only ever `true` for a non-text `value_type`: a text column
/// offers no signal to tell a label apart from data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Classification {
    pub value_type: ValueType,
    pub header: bool,
}

impl Classification {
    fn text() -> Self {
        Classification {
            value_type: ValueType::Text,
            header: false,
        }
    }
}

/// Determines the value type of a pasted column and whether its first value
/// is a header label.
///
/// The values must be in paste order: the first element is the header
/// candidate and the last anchors the type. Messy data is not an error:
/// any non-conforming value degrades the whole column to
/// [`ValueType::Text`] with no header. The only failure is an empty input.
pub fn classify<S: AsRef<str>>(values: &[S]) -> Result<Classification, ClassifyError> {
    if values.is_empty() {
        return Err(ClassifyError::EmptyInput);
    }
    let classification = classify_non_empty(values);
    debug!(
        "Classified {} value(s) as {} (header: {})",
        values.len(),
        classification.value_type,
        classification.header
    );
    Ok(classification)
}

fn classify_non_empty<S: AsRef<str>>(values: &[S]) -> Classification {
    // The last value anchors the type. If it reads as text, the whole
    // column is text and no header detection applies.
    let initial = value_type_of(values[values.len() - 1].as_ref());
    if initial == ValueType::Text {
        return Classification::text();
    }

    // A single value cannot establish a header.
    if values.len() == 1 {
        return Classification {
            value_type: initial,
            header: false,
        };
    }

    // Every value strictly between the first and the last must conform to
    // the anchor type; one mismatch makes the column text.
    for value in values[1..values.len() - 1].iter().rev() {
        if !value_matches_type(value.as_ref(), initial) {
            return Classification::text();
        }
    }

    // A text first value atop uniform typed data reads as a column header.
    let first = values[0].as_ref();
    if value_type_of(first) == ValueType::Text {
        return Classification {
            value_type: initial,
            header: true,
        };
    }

    // A non-text first value of a different type means the column mixes two
    // typed forms with no header story to explain it.
    if !value_matches_type(first, initial) {
        return Classification::text();
    }

    Classification {
        value_type: initial,
        header: false,
    }
}
