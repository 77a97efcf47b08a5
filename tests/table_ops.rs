//! End-to-end table tests
//!
//! Parse/render round trips, lookup totality, removal invariants, and
//! file I/O through a temp directory.

use csvgrid::{Delimiter, Error, Table};

const SAMPLE: &str = "name,age\nAlice,30\nBob,25\n";

// ========================================================================
// Worked example: name,age / Alice / Bob
// ========================================================================

#[test]
fn test_sample_header_and_rows() {
    let table = Table::parse(SAMPLE, Delimiter::Comma).unwrap();

    assert_eq!(table.columns(), &["name", "age"]);
    assert_eq!(table.num_rows(), 2);
    assert_eq!(table.field(0, "age").unwrap(), "30");
    assert_eq!(table.column_index("age"), Some(1));
    assert_eq!(table.search_row("Bob", "name").unwrap(), Some(1));
}

#[test]
fn test_sample_remove_first_row() {
    let mut table = Table::parse(SAMPLE, Delimiter::Comma).unwrap();
    table.remove_row(0).unwrap();

    assert_eq!(table.num_rows(), 1);
    assert_eq!(table.field(0, "name").unwrap(), "Bob");
}

#[test]
fn test_sample_render_has_no_trailing_newline() {
    let table = Table::parse(SAMPLE, Delimiter::Comma).unwrap();
    assert_eq!(table.render(), "name,age\nAlice,30\nBob,25");
}

// ========================================================================
// Round trip
// ========================================================================

#[test]
fn test_parse_render_parse_is_identity() {
    let table = Table::parse(SAMPLE, Delimiter::Comma).unwrap();
    let reparsed = Table::parse(&table.render(), Delimiter::Comma).unwrap();

    assert_eq!(reparsed.columns(), table.columns());
    assert_eq!(reparsed.num_rows(), table.num_rows());
    for row in 0..table.num_rows() {
        for name in table.columns() {
            assert_eq!(
                reparsed.field(row, name).unwrap(),
                table.field(row, name).unwrap()
            );
        }
    }
}

#[test]
fn test_round_trip_with_empty_fields() {
    let source = "a,b,c\n,,\nx,,z";
    let table = Table::parse(source, Delimiter::Comma).unwrap();
    assert_eq!(table.render(), source);
}

// ========================================================================
// Column lookup totality
// ========================================================================

#[test]
fn test_every_declared_column_resolves_to_its_position() {
    let table = Table::parse("one,two,three\n1,2,3\n", Delimiter::Comma).unwrap();

    for (i, name) in table.columns().iter().enumerate() {
        assert_eq!(table.column_index(name), Some(i));
    }
}

#[test]
fn test_unknown_column_fails_everywhere() {
    let table = Table::parse(SAMPLE, Delimiter::Comma).unwrap();

    assert_eq!(table.column_index("ghost"), None);
    assert!(matches!(
        table.field(0, "ghost"),
        Err(Error::ColumnNotFound(_))
    ));
    assert!(matches!(
        table.search_row("x", "ghost"),
        Err(Error::ColumnNotFound(_))
    ));
}

// ========================================================================
// Removal invariant
// ========================================================================

#[test]
fn test_removal_shifts_and_preserves_other_rows() {
    let source = "id,val\n0,a\n1,b\n2,c\n3,d\n";
    let mut table = Table::parse(source, Delimiter::Comma).unwrap();

    let before: Vec<Vec<String>> = (0..table.num_rows())
        .map(|i| table.row(i).unwrap().to_vec())
        .collect();

    table.remove_row(1).unwrap();

    assert_eq!(table.num_rows(), before.len() - 1);
    // Rows before the removal point are unchanged.
    assert_eq!(table.row(0).unwrap(), before[0].as_slice());
    // Rows at or after it shifted down by one.
    assert_eq!(table.row(1).unwrap(), before[2].as_slice());
    assert_eq!(table.row(2).unwrap(), before[3].as_slice());
}

// ========================================================================
// Malformed input
// ========================================================================

#[test]
fn test_short_row_reports_line_number() {
    let err = Table::parse("a,b\n1,2\nonly_one\n", Delimiter::Comma).unwrap_err();
    match err {
        Error::MalformedRow {
            line,
            expected,
            found,
        } => {
            assert_eq!(line, 3);
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("expected MalformedRow, got {}", other),
    }
}

#[test]
fn test_malformed_input_never_yields_a_table() {
    for bad in ["a,b\n1\n", "a,b\n1,2,3\n", ""] {
        assert!(Table::parse(bad, Delimiter::Comma).is_err(), "input {:?}", bad);
    }
}

// ========================================================================
// File I/O
// ========================================================================

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv");
    std::fs::write(&path, SAMPLE).unwrap();

    let mut table = Table::from_path(&path).unwrap();
    table.remove_row(0).unwrap();

    let out = dir.path().join("out.csv");
    table.write_to_file(&out).unwrap();

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "name,age\nBob,25");

    // And the written file parses back to the same table.
    let reparsed = Table::from_path(&out).unwrap();
    assert_eq!(reparsed.field(0, "name").unwrap(), "Bob");
}

#[test]
fn test_write_to_unwritable_path_is_io_error() {
    let table = Table::parse(SAMPLE, Delimiter::Comma).unwrap();
    let err = table
        .write_to_file("/definitely/not/a/dir/out.csv")
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

// ========================================================================
// Table stays usable after a failed operation
// ========================================================================

#[test]
fn test_failures_do_not_poison_the_table() {
    let mut table = Table::parse(SAMPLE, Delimiter::Comma).unwrap();

    assert!(table.field(99, "name").is_err());
    assert!(table.remove_row(99).is_err());
    assert!(table.search_row("x", "ghost").is_err());

    // All reads still work.
    assert_eq!(table.field(1, "name").unwrap(), "Bob");
    assert_eq!(table.render(), "name,age\nAlice,30\nBob,25");
}
