//! Semantic value-type classification for pasted tabular data.
//!
//! Given one column's worth of raw tokens, already split from a pasted block
//! by the caller, [`classify`] infers the column's [`ValueType`] and reports
//! whether the first token is a header label sitting atop otherwise-uniform
//! data. The import workflow consuming the result maps the inferred type to a
//! target column definition and skips the first row when a header is flagged.
//!
//! Splitting, trimming, and encoding are the caller's responsibility; this
//! crate only classifies. The classifier is a pure function of its input:
//! no shared state, no I/O, and messy data never fails. Ambiguity always
//! degrades to `(Text, no header)`.

pub mod classify;
pub mod value_type;

pub use classify::{Classification, ClassifyError, classify};
pub use value_type::{ParseValueTypeError, ValueType};
