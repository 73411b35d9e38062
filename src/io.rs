//! Edge-list input and relation-count output.
//!
//! Input lines carry exactly two integers separated by a comma or a tab
//! (tabs are normalized to commas before tokenizing); blank lines are
//! skipped. Anything else is fatal — the engine never runs on partial
//! input. Output is one comma-joined line of the five counts per node.

use crate::engine::RelationCounts;
use crate::graph::{Edge, NodeId};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading an edge list.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed line {line}: expected two integers, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("invalid node id {value} on line {line}: ids start at 1")]
    InvalidNodeId { line: usize, value: i64 },
}

pub type InputResult<T> = Result<T, InputError>;

/// Parse one input line into an edge.
///
/// Returns `Ok(None)` for a blank line. `line_no` is 1-based and only used
/// for error reporting.
pub fn parse_line(raw: &str, line_no: usize) -> InputResult<Option<Edge>> {
    let line = raw.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Ok(None);
    }

    let normalized = line.replace('\t', ",");
    let mut ids = [0i64; 2];
    let mut seen = 0;

    for token in normalized.split(',').filter(|t| !t.is_empty()) {
        let value: i64 = token.trim().parse().map_err(|_| InputError::MalformedLine {
            line: line_no,
            content: line.to_string(),
        })?;
        if seen == 2 {
            return Err(InputError::MalformedLine {
                line: line_no,
                content: line.to_string(),
            });
        }
        ids[seen] = value;
        seen += 1;
    }

    if seen != 2 {
        return Err(InputError::MalformedLine {
            line: line_no,
            content: line.to_string(),
        });
    }

    for &value in &ids {
        if value < 1 || value > NodeId::MAX as i64 {
            return Err(InputError::InvalidNodeId { line: line_no, value });
        }
    }

    Ok(Some(Edge::new(ids[0] as NodeId, ids[1] as NodeId)))
}

/// Read every edge from a buffered reader, failing on the first bad line.
pub fn read_edges<R: BufRead>(reader: R) -> InputResult<Vec<Edge>> {
    let mut edges = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        if let Some(edge) = parse_line(&line?, idx + 1)? {
            edges.push(edge);
        }
    }
    debug!(edges = edges.len(), "edge list parsed");
    Ok(edges)
}

/// Read every edge from a CSV/TSV file on disk.
pub fn read_edges_from_path<P: AsRef<Path>>(path: P) -> InputResult<Vec<Edge>> {
    let file = File::open(path)?;
    read_edges(BufReader::new(file))
}

/// Serialize one record as its comma-joined five-count line.
pub fn csv_line(r: &RelationCounts) -> String {
    format!(
        "{},{},{},{},{}",
        r.direct_children, r.direct_parents, r.indirect_descendants, r.indirect_ancestors, r.siblings
    )
}

/// Write the whole result table as CSV, one line per node in record order.
pub fn write_csv<W: Write>(mut out: W, records: &[RelationCounts]) -> io::Result<()> {
    for r in records {
        writeln!(out, "{}", csv_line(r))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_comma_line() {
        assert_eq!(parse_line("3,7", 1).unwrap(), Some(Edge::new(3, 7)));
    }

    #[test]
    fn test_parse_tab_line() {
        assert_eq!(parse_line("3\t7", 1).unwrap(), Some(Edge::new(3, 7)));
    }

    #[test]
    fn test_blank_line_skipped() {
        assert_eq!(parse_line("", 1).unwrap(), None);
        assert_eq!(parse_line("\r\n", 1).unwrap(), None);
    }

    #[test]
    fn test_one_integer_is_fatal() {
        assert!(matches!(
            parse_line("42", 3),
            Err(InputError::MalformedLine { line: 3, .. })
        ));
    }

    #[test]
    fn test_three_integers_is_fatal() {
        assert!(matches!(
            parse_line("1,2,3", 1),
            Err(InputError::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_non_numeric_is_fatal() {
        assert!(matches!(
            parse_line("a,2", 1),
            Err(InputError::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_zero_id_rejected() {
        assert!(matches!(
            parse_line("0,2", 5),
            Err(InputError::InvalidNodeId { line: 5, value: 0 })
        ));
    }

    #[test]
    fn test_read_edges_skips_blanks() {
        let input = "1,2\n\n2,3\n";
        let edges = read_edges(Cursor::new(input)).unwrap();
        assert_eq!(edges, vec![Edge::new(1, 2), Edge::new(2, 3)]);
    }

    #[test]
    fn test_read_edges_stops_on_bad_line() {
        let input = "1,2\nbogus\n2,3\n";
        assert!(read_edges(Cursor::new(input)).is_err());
    }

    #[test]
    fn test_csv_line_field_order() {
        let r = RelationCounts {
            node: 1,
            direct_children: 2,
            direct_parents: 0,
            indirect_descendants: 1,
            indirect_ancestors: 0,
            siblings: 3,
        };
        assert_eq!(csv_line(&r), "2,0,1,0,3");
    }
}
