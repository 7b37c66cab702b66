use std::io::{Cursor, Read};

use super::*;

fn part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut xml = String::new();
    file.read_to_string(&mut xml).unwrap();
    xml
}

fn record(id: Option<i64>, name: &str, amount: f64) -> ExpenseRecord {
    ExpenseRecord {
        id,
        name: name.to_string(),
        amount,
        date: "2024-05-10".to_string(),
        description: "test row".to_string(),
        category: "Other".to_string(),
    }
}

#[test]
fn workbook_is_a_zip_container() {
    let bytes = build_workbook(&[record(Some(1), "Tea", 3.5)]).unwrap();
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn empty_collection_still_exports_header() {
    let bytes = build_workbook(&[]).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn sheet_holds_header_and_rows() {
    let rows = vec![record(None, "Monthly", 2400.0), record(Some(7), "Bus", 2.8)];
    let bytes = build_workbook(&rows).unwrap();

    let workbook = part(&bytes, "xl/workbook.xml");
    assert!(workbook.contains(r#"name="Expenses""#));

    let strings = part(&bytes, "xl/sharedStrings.xml");
    let texts = ["Monthly", "Bus", "2024-05-10", "test row", "Other"];
    for text in COLUMNS.iter().chain(texts.iter()) {
        assert!(strings.contains(&format!("<t>{}</t>", text)), "missing {}", text);
    }

    let sheet = part(&bytes, "xl/worksheets/sheet1.xml");
    for cell in ["A1", "F1", "B2", "C2", "F2", "A3", "C3"] {
        assert!(sheet.contains(&format!(r#"<c r="{}""#, cell)), "missing {}", cell);
    }
    // first row has no id
    assert!(!sheet.contains(r#"<c r="A2""#));
    assert!(sheet.contains("<v>2400</v>"));
    assert!(sheet.contains("<v>7</v>"));
    assert!(sheet.contains("<v>2.8</v>"));
}
