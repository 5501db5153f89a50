//! Document model for the demo: text lines plus heading-delimited sections.
//!
//! A document is measured in terminal rows, which makes the geometry exact:
//! every line is one unit tall, a section spans the rows from its heading to
//! the next heading, and the content pane is the scroller. The model is
//! parsed once; the row geometry is rebuilt from it on every pulse, the way
//! a live layout would be re-measured.

use crate::formats::Format;
use crate::geometry::{ScrollMetrics, StaticGeometry};
use std::fs;
use std::io;
use std::path::Path;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

#[derive(Clone, Debug, PartialEq, Eq)]
/// One heading-delimited region of the document.
pub struct DocSection {
    /// Heading text without markup symbols.
    pub title: String,
    /// Heading depth (1 for top-level).
    pub level: usize,
    /// Row of the heading line.
    pub line_start: usize,
    /// Row where the next section begins or the document ends.
    pub line_end: usize,
}

/// A loaded document and the sections the watcher tracks in it.
pub struct Document {
    /// Raw text, one entry per row.
    pub lines: Vec<String>,
    /// Sections in document order.
    pub sections: Vec<DocSection>,
}

/// Node table measuring a document in terminal rows.
pub struct RowGeometry {
    /// The table to hand to the watcher.
    pub geometry: StaticGeometry,
    /// Element id of the scrollable content pane.
    pub container: usize,
    /// Element ids of the sections, in document order.
    pub sections: Vec<usize>,
}

impl Document {
    /// Load a document from disk and extract its sections.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the format's grammar
    /// or queries fail to load.
    pub fn load(path: &Path, format: &impl Format) -> io::Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source, format)
    }

    /// Extract sections from already-loaded source text.
    ///
    /// Each captured heading opens a section running to the next heading or
    /// the end of the document; a document without headings has no sections.
    ///
    /// # Errors
    ///
    /// Returns an error if the format's grammar or queries fail to load.
    pub fn parse(source: &str, format: &impl Format) -> io::Result<Self> {
        let language = format.language();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "parse failed"))?;

        let section_query = Query::new(&language, format.section_query())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let title_query = Query::new(&language, format.title_query())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let bytes = source.as_bytes();
        let mut headings: Vec<(usize, usize, String)> = Vec::new();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&section_query, tree.root_node(), bytes);
        while let Some(m) = matches.next() {
            for capture in m.captures {
                let node = capture.node;
                headings.push((
                    node.start_position().row,
                    heading_level(node),
                    heading_title(node, &title_query, bytes),
                ));
            }
        }
        headings.sort_by_key(|&(row, _, _)| row);

        let lines: Vec<String> = source.lines().map(String::from).collect();

        let mut sections = Vec::with_capacity(headings.len());
        for (i, (row, level, title)) in headings.iter().enumerate() {
            let line_end = headings
                .get(i + 1)
                .map_or(lines.len(), |&(next_row, _, _)| next_row);
            sections.push(DocSection {
                title: title.clone(),
                level: *level,
                line_start: *row,
                line_end,
            });
        }

        Ok(Document { lines, sections })
    }

    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    /// Build the node table measuring this document in rows.
    ///
    /// The content pane becomes a scrollable element at the layout root
    /// with the given scroll state; each section becomes a child spanning
    /// its rows. Element ids are stable across rebuilds: the container
    /// first, then the sections in document order.
    pub fn row_geometry(&self, scroll_top: i64, viewport_rows: i64) -> RowGeometry {
        let total = self.lines.len() as i64;
        let mut geometry = StaticGeometry::default();
        let container = geometry.push_scroller(
            None,
            0,
            total,
            ScrollMetrics {
                scroll_top,
                visible_height: viewport_rows,
                full_height: total,
            },
        );
        let sections = self
            .sections
            .iter()
            .map(|s| {
                geometry.push_node(
                    Some(container),
                    s.line_start as i64,
                    (s.line_end - s.line_start) as i64,
                )
            })
            .collect();

        RowGeometry {
            geometry,
            container,
            sections,
        }
    }
}

/// Heading depth from the ATX marker child, defaulting to 1.
fn heading_level(node: Node) -> usize {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(digit) = child
            .kind()
            .strip_prefix("atx_h")
            .and_then(|k| k.strip_suffix("_marker"))
        {
            if let Ok(level) = digit.parse() {
                return level;
            }
        }
    }
    1
}

/// Title text captured inside the heading, falling back to the trimmed line.
fn heading_title(node: Node, title_query: &Query, bytes: &[u8]) -> String {
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(title_query, node, bytes);
    while let Some(m) = matches.next() {
        if let Some(capture) = m.captures.first() {
            if let Ok(text) = capture.node.utf8_text(bytes) {
                return text.trim().to_string();
            }
        }
    }
    node.utf8_text(bytes)
        .unwrap_or_default()
        .trim_start_matches('#')
        .trim()
        .to_string()
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
