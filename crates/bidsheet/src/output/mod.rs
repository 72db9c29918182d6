//! Comparison sheet output: layout configuration, cell planning, and
//! sinks.
//!
//! The engine's output is turned into positioned `(row, column, value)`
//! writes by [`plan_writes`]; a [`ComparisonSink`] only ever sees those
//! writes, so storage formats stay interchangeable.

mod csv;
mod layout;
mod sink;
mod xlsx;

pub use csv::CsvSink;
pub use layout::{SheetLayout, column_index};
pub use sink::{CellValue, CellWrite, ComparisonSink, plan_writes, write_comparison};
pub use xlsx::XlsxSink;
