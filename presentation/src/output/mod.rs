//! Console formatting and the Markdown evaluation report

pub mod console;
pub mod report;
