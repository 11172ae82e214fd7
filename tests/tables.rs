// tests/tables.rs
//
// Table rows → lists / maps, with colspan expansion and column selection.
//
use html_harvest::{
    all, extract, extract_rows, extract_table, parse_document, Error, ExtractedTable, OutputShape,
    QueryError, Sel, TableOptions,
};
use indoc::indoc;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

const GRID: &str = indoc! {r#"
    <table id="grid">
      <tr><th>Col 1</th><th>Col 2</th><th>Col 3</th></tr>
      <tr><td>a1</td><td>a2</td><td>a3</td></tr>
      <tr><td colspan="2">X</td><td>Y</td></tr>
    </table>
"#};

fn grid(opts: &TableOptions) -> Value {
    let doc = parse_document(GRID);
    serde_json::to_value(extract(&doc, opts).unwrap()).unwrap()
}

#[test]
fn lists_with_header_row() {
    assert_eq!(
        grid(&TableOptions::default()),
        json!([["Col 1", "Col 2", "Col 3"], ["a1", "a2", "a3"], ["X", null, "Y"]])
    );
}

#[test]
fn header_row_can_be_dropped() {
    assert_eq!(
        grid(&TableOptions::new().headers(false)),
        json!([["a1", "a2", "a3"], ["X", null, "Y"]])
    );
}

#[test]
fn columns_by_name_keep_requested_order() {
    assert_eq!(
        grid(&TableOptions::new().only(vec!["Col 3", "Col 1"])),
        json!([["Col 3", "Col 1"], ["a3", "a1"], ["Y", "X"]])
    );
}

#[test]
fn unknown_column_lists_known_names() {
    let doc = parse_document(GRID);
    let err = extract(&doc, &TableOptions::new().only(vec!["Col 1", "Col B"])).unwrap_err();
    match err {
        Error::UnknownColumn { name, known } => {
            assert_eq!(name, "Col B");
            assert_eq!(known, vec!["Col 1", "Col 2", "Col 3"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn single_column_is_flattened() {
    assert_eq!(grid(&TableOptions::new().only("Col 2")), json!(["Col 2", "a2", null]));
    assert_eq!(grid(&TableOptions::new().only(0usize).headers(false)), json!(["a1", "X"]));
}

#[test]
fn list_of_one_column_is_not_flattened() {
    assert_eq!(
        grid(&TableOptions::new().only(vec!["Col 2"])),
        json!([["Col 2"], ["a2"], [null]])
    );
}

#[test]
fn except_removes_columns() {
    assert_eq!(
        grid(&TableOptions::new().except(1usize)),
        json!([["Col 1", "Col 3"], ["a1", "a3"], ["X", "Y"]])
    );
    assert_eq!(
        grid(&TableOptions::new().only(vec![0usize, 2]).except("Col 1")),
        json!([["Col 3"], ["a3"], ["Y"]])
    );
    assert_eq!(
        grid(&TableOptions::new().only(2usize).except(0usize)),
        json!(["Col 3", "a3", "Y"])
    );
}

#[test]
fn duplicates_and_out_of_range_indices() {
    assert_eq!(
        grid(&TableOptions::new().only(vec![0usize, 0, 7]).headers(false)),
        json!([["a1", "a1", null], ["X", "X", null]])
    );
}

#[test]
fn maps_are_keyed_by_header() {
    let expected = json!([
        { "Col 1": "a1", "Col 2": "a2", "Col 3": "a3" },
        { "Col 1": "X", "Col 2": null, "Col 3": "Y" },
    ]);
    assert_eq!(grid(&TableOptions::new().shape(OutputShape::Maps)), expected);
    // headers is a lists-only option
    assert_eq!(grid(&TableOptions::new().shape(OutputShape::Maps).headers(false)), expected);

    assert_eq!(
        grid(&TableOptions::new().shape(OutputShape::Maps).only(vec!["Col 3", "Col 1"])),
        json!([{ "Col 3": "a3", "Col 1": "a1" }, { "Col 3": "Y", "Col 1": "X" }])
    );
}

#[test]
fn map_keys_follow_column_order() {
    let doc = parse_document(GRID);
    let opts = TableOptions::new().shape(OutputShape::Maps).only(vec!["Col 3", "Col 1"]);
    let ExtractedTable::Maps(maps) = extract(&doc, &opts).unwrap() else {
        panic!("expected maps");
    };
    let keys: Vec<&str> = maps[0].keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Col 3", "Col 1"]);
}

#[test]
fn update_runs_on_every_value() {
    let opts = TableOptions::new().update(|v| v.to_uppercase());
    assert_eq!(
        grid(&opts),
        json!([["COL 1", "COL 2", "COL 3"], ["A1", "A2", "A3"], ["X", null, "Y"]])
    );
}

#[test]
fn short_rows_pad_with_null() {
    let doc = parse_document(indoc! {r#"
        <table>
          <tr><th>A</th><th>B</th><th>C</th></tr>
          <tr><td>only</td></tr>
        </table>
    "#});
    let got = extract(&doc, &TableOptions::new().headers(false)).unwrap();
    assert_eq!(got, ExtractedTable::Rows(vec![vec![Some("only".into()), None, None]]));
}

#[test]
fn empty_cells_take_their_form_field() {
    let doc = parse_document(indoc! {r#"
        <table>
          <tr><th>Item</th><th>Qty</th><th>Tags</th><th>Ok</th><th>Two</th></tr>
          <tr>
            <td>Apple</td>
            <td><input name="qty" value="3"></td>
            <td>
              <select name="tags" multiple>
                <option value="a" selected></option>
                <option value="b" selected></option>
                <option value="c"></option>
              </select>
            </td>
            <td><input type="checkbox" name="ok" value="yes" checked></td>
            <td><input name="l" value="1"><input name="r" value="2"></td>
          </tr>
        </table>
    "#});
    let got = extract(&doc, &TableOptions::new().headers(false)).unwrap();
    assert_eq!(
        serde_json::to_value(got).unwrap(),
        json!([["Apple", "3", r#"["a","b"]"#, "yes", ""]])
    );
}

#[test]
fn maps_leave_out_columns_under_header_colspan() {
    let doc = parse_document(indoc! {r#"
        <table>
          <tr><th>A</th><th colspan="3">B</th></tr>
          <tr><td>1</td><td>2</td><td>3</td><td>4</td></tr>
        </table>
    "#});
    let opts = TableOptions::new().shape(OutputShape::Maps);
    let got = extract(&doc, &opts).unwrap();
    assert_eq!(serde_json::to_value(got).unwrap(), json!([{ "A": "1", "B": "2" }]));

    // lists keep every column
    let lists = extract(&doc, &TableOptions::new().headers(false)).unwrap();
    assert_eq!(serde_json::to_value(lists).unwrap(), json!([["1", "2", "3", "4"]]));
}

#[test]
fn conflicting_fields_in_a_cell_resolve_to_empty() {
    let doc = parse_document(indoc! {r#"
        <table>
          <tr><th>Name</th><th>Field</th></tr>
          <tr>
            <td>a</td>
            <td><input name="a[b]" value="1"><input name="a[b][c]" value="2"></td>
          </tr>
        </table>
    "#});
    let got = extract(&doc, &TableOptions::new().headers(false)).unwrap();
    assert_eq!(serde_json::to_value(got).unwrap(), json!([["a", ""]]));
}

#[test]
fn extract_table_skips_nested_tables() {
    let doc = parse_document(indoc! {r#"
        <table id="outer">
          <tr><th>Name</th><th>Detail</th></tr>
          <tr>
            <td>a</td>
            <td><table id="inner"><tr><td>x</td><td>y</td></tr></table></td>
          </tr>
        </table>
    "#});

    let got = extract_table(&doc, Some(Sel::from("#outer")), &TableOptions::default()).unwrap();
    assert_eq!(serde_json::to_value(got).unwrap(), json!([["Name", "Detail"], ["a", "x y"]]));

    let inner = extract_table(&doc, Some(Sel::from("#inner")), &TableOptions::default()).unwrap();
    assert_eq!(serde_json::to_value(inner).unwrap(), json!([["x", "y"]]));

    assert!(matches!(
        extract_table(&doc, None, &TableOptions::default()).unwrap_err(),
        Error::Query(QueryError::Ambiguous { count: 2, .. })
    ));
}

#[test]
fn explicit_rows_use_first_as_header() {
    let doc = parse_document(GRID);
    let rows = all(&doc, "#grid tr").unwrap();
    let got = extract_rows(&rows[1..], &TableOptions::new().shape(OutputShape::Maps)).unwrap();
    assert_eq!(serde_json::to_value(got).unwrap(), json!([{ "a1": "X", "a2": null, "a3": "Y" }]));
}

#[test]
fn no_rows() {
    let got = extract_rows(&[], &TableOptions::default()).unwrap();
    assert_eq!(got, ExtractedTable::Rows(vec![]));
    assert!(got.is_empty());

    let maps = extract_rows(&[], &TableOptions::new().shape(OutputShape::Maps)).unwrap();
    assert_eq!(maps, ExtractedTable::Maps(vec![]));
}

#[test]
fn maps_to_rows_puts_keys_first() {
    let doc = parse_document(GRID);
    let got = extract(&doc, &TableOptions::new().shape(OutputShape::Maps).only(vec!["Col 1"])).unwrap();
    assert_eq!(got.len(), 2);
    assert_eq!(
        got.to_rows(),
        vec![
            vec![Some("Col 1".to_string())],
            vec![Some("a1".to_string())],
            vec![Some("X".to_string())],
        ]
    );
}
