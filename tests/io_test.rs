use lineage::io::{read_edges_from_path, write_csv, InputError};
use lineage::{Edge, RelationEngine};
use std::io::Write;
use tempfile::NamedTempFile;

fn file_with(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f
}

#[test]
fn test_read_mixed_separators_and_blank_lines() {
    let f = file_with("1,2\n1\t3\n\n2,4\n");
    let edges = read_edges_from_path(f.path()).unwrap();
    assert_eq!(
        edges,
        vec![Edge::new(1, 2), Edge::new(1, 3), Edge::new(2, 4)]
    );
}

#[test]
fn test_malformed_line_reports_line_number() {
    let f = file_with("1,2\n3,x\n");
    match read_edges_from_path(f.path()) {
        Err(InputError::MalformedLine { line, content }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "3,x");
        }
        other => panic!("expected MalformedLine, got {other:?}"),
    }
}

#[test]
fn test_zero_node_id_is_rejected() {
    let f = file_with("1,0\n");
    assert!(matches!(
        read_edges_from_path(f.path()),
        Err(InputError::InvalidNodeId { line: 1, value: 0 })
    ));
}

#[test]
fn test_missing_file_surfaces_io_error() {
    assert!(matches!(
        read_edges_from_path("/nonexistent/edges.csv"),
        Err(InputError::Io(_))
    ));
}

#[test]
fn test_end_to_end_csv_output() {
    // Same pipeline as the binary: parse, classify, emit CSV.
    let f = file_with("1,2\n1,3\n2,4\n3,4\n");
    let edges = read_edges_from_path(f.path()).unwrap();
    let records = RelationEngine::from_edges(&edges).compute();

    let mut out = Vec::new();
    write_csv(&mut out, &records).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text, "2,0,1,0,0\n1,1,0,0,1\n1,1,0,0,1\n0,2,0,1,0\n");
}

#[test]
fn test_empty_file_yields_no_output() {
    let f = file_with("");
    let edges = read_edges_from_path(f.path()).unwrap();
    let records = RelationEngine::from_edges(&edges).compute();

    let mut out = Vec::new();
    write_csv(&mut out, &records).unwrap();
    assert!(out.is_empty());
}
