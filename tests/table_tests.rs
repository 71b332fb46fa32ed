use bacchus::utils::table::Table;

#[test]
fn renders_the_two_column_layout_byte_for_byte() {
    let mut t = Table::new(["ID", "Name"]);
    t.add_row(vec!["1".to_string(), "Alice".to_string()]);
    t.add_row(vec!["22".to_string(), "Bo".to_string()]);

    let out = t.render();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "ID | Name ");
    assert_eq!(lines[1], "----------");
    assert_eq!(lines[2], "1  | Alice");
    assert_eq!(lines[3], "22 | Bo   ");
}

#[test]
fn zero_rows_render_the_placeholder_line() {
    let t = Table::new(["A"]);
    let lines: Vec<String> = t.render().lines().map(str::to_string).collect();

    assert_eq!(lines, ["A", "-", "(No Data to Display)"]);
}

#[test]
fn header_widens_to_the_longest_cell() {
    let mut t = Table::new(["X"]);
    t.add_row(vec!["a long value".to_string()]);

    let lines: Vec<String> = t.render().lines().map(str::to_string).collect();
    assert_eq!(lines[0], "X           ");
    assert_eq!(lines[1], "------------");
    assert_eq!(lines[2], "a long value");
}

#[test]
fn header_and_data_lines_share_one_width() {
    let mut t = Table::new(["InvoiceID", "Name", "Status"]);
    t.add_row(vec!["1".into(), "Valley Cork and Barrel".into(), "Late".into()]);
    t.add_row(vec!["20456".into(), "x".into(), "On Time".into()]);

    let out = t.render();
    let lines: Vec<&str> = out.lines().collect();
    let expected = lines[0].len();

    for line in &lines {
        assert_eq!(line.len(), expected, "misaligned line: {:?}", line);
    }
}

#[test]
fn empty_cells_pad_like_any_other_value() {
    let mut t = Table::new(["A", "B"]);
    t.add_row(vec!["".to_string(), "filled".to_string()]);

    let lines: Vec<String> = t.render().lines().map(str::to_string).collect();
    assert_eq!(lines[2], "  | filled");
}

#[test]
fn render_is_a_pure_function_of_its_input() {
    let mut t = Table::new(["ID", "Name"]);
    t.add_row(vec!["7".to_string(), "Merlot".to_string()]);

    assert_eq!(t.render(), t.render());
}
