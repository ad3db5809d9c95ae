/// Textual reporters: the info/describe block shown inline and the full
/// descriptive report written to a file.
pub mod full;
pub mod info;
