//! Format trait for extracting watchable sections from documents.
//!
//! The demo watches plain text documents whose structure is discovered with
//! tree-sitter. A format supplies the grammar and the queries that locate
//! section headings and their titles; the document module turns the
//! captures into line-addressed sections for the watcher.

pub mod markdown;

/// A document format the demo can extract sections from.
pub trait Format {
    /// Tree-sitter grammar for this format.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing one node per section heading.
    fn section_query(&self) -> &str;
    /// Query capturing the title text inside a heading node.
    fn title_query(&self) -> &str;
}
