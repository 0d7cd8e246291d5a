// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::ZipError;
use crate::tests::{fixed_date, init_logger};
use crate::xlsx::parts::{
    CONTENT_TYPES_PATH, PACKAGE_RELS_PATH, WORKBOOK_PATH, WORKBOOK_RELS_PATH, WORKSHEET_PATH,
};
use crate::xlsx::{column_letters, Cell, Workbook, XlsxBuilder};

fn part<'a>(parts: &'a [crate::ZipEntry], path: &str) -> &'a str {
    parts.iter().find(|entry| entry.filename() == path).map(|entry| entry.content()).expect("missing part")
}

#[test]
fn column_letter_mapping() {
    assert_eq!(column_letters(0), "A");
    assert_eq!(column_letters(1), "B");
    assert_eq!(column_letters(25), "Z");
    assert_eq!(column_letters(26), "AA");
    assert_eq!(column_letters(701), "ZZ");
    assert_eq!(column_letters(702), "AAA");
}

#[test]
fn parts_in_fixed_order() {
    let mut workbook = Workbook::new();
    workbook.add_worksheet("Sheet1").add_row(["Hello", "World"]);

    let parts = XlsxBuilder::new(&workbook).parts().expect("failed to build parts");
    let paths: Vec<&str> = parts.iter().map(|entry| entry.filename()).collect();

    assert_eq!(paths, [CONTENT_TYPES_PATH, PACKAGE_RELS_PATH, WORKBOOK_PATH, WORKBOOK_RELS_PATH, WORKSHEET_PATH]);
}

#[test]
fn cell_serialisation() {
    assert_eq!(Cell::from(42).to_xml("A1").unwrap(), r#"<c r="A1"><v>42</v></c>"#);
    assert_eq!(Cell::from(1.5).to_xml("B2").unwrap(), r#"<c r="B2"><v>1.5</v></c>"#);
    assert_eq!(
        Cell::from("Hello").to_xml("C3").unwrap(),
        r#"<c r="C3" t="inlineStr"><is><t>Hello</t></is></c>"#
    );
    assert_eq!(
        Cell::from(" padded ").to_xml("D4").unwrap(),
        r#"<c r="D4" t="inlineStr"><is><t xml:space="preserve"> padded </t></is></c>"#
    );
}

#[test]
fn text_is_escaped() {
    let xml = Cell::from(r#"a & <b> "c" 'd'"#).to_xml("A1").unwrap();

    assert!(xml.contains("<t>a &amp; &lt;b&gt; &quot;c&quot; &apos;d&apos;</t>"), "{xml}");
}

#[test]
fn control_characters_encoded() {
    assert_eq!(
        Cell::from("a\u{1}b").to_xml("A1").unwrap(),
        r#"<c r="A1" t="inlineStr"><is><t>a_x0001_b</t></is></c>"#
    );

    let xml = Cell::from("\u{0}\u{8}\u{B}\u{D}\u{1F}\u{FFFF}").to_xml("A1").unwrap();
    assert!(xml.contains("<t>_x0000__x0008__x000B__x000D__x001F__xFFFF_</t>"), "{xml}");

    // Tabs and line feeds are legal XML and pass through untouched.
    assert!(Cell::from("a\tb\nc").to_xml("A1").unwrap().contains("<t>a\tb\nc</t>"));
}

#[test]
fn literal_escape_sequences_preserved() {
    assert!(Cell::from("_x0041_").to_xml("A1").unwrap().contains("<t>_x005F_x0041_</t>"));
    assert!(Cell::from("snake_x_case_xABCD").to_xml("A1").unwrap().contains("<t>snake_x_case_xABCD</t>"));
}

#[test]
fn worksheet_xml_has_no_raw_control_characters() {
    let mut workbook = Workbook::new();
    workbook.add_worksheet("Sheet1").add_row([Cell::from("a\u{1}b"), Cell::from("bell\u{7}")]);

    let parts = XlsxBuilder::new(&workbook).parts().expect("failed to build parts");
    let xml = part(&parts, WORKSHEET_PATH);

    assert!(!xml.chars().any(|ch| ch.is_control() && !matches!(ch, '\t' | '\n')), "{xml:?}");
    assert!(xml.contains("<t>a_x0001_b</t>"), "{xml}");
    assert!(xml.contains("<t>bell_x0007_</t>"), "{xml}");
}

#[test]
fn sheet_name_with_control_character_rejected() {
    let mut workbook = Workbook::new();
    workbook.add_worksheet("bad\u{1}name");

    assert!(matches!(XlsxBuilder::new(&workbook).parts(), Err(ZipError::EncodingError(_))));
    assert!(matches!(XlsxBuilder::new(&workbook).build_at(fixed_date()), Err(ZipError::EncodingError(_))));
}

#[test]
fn non_finite_numbers_rejected() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(Cell::Number(value).to_xml("A1"), Err(ZipError::EncodingError(_))));
    }

    let mut workbook = Workbook::new();
    workbook.add_worksheet("Sheet1").add_row([f64::NAN]);
    assert!(matches!(XlsxBuilder::new(&workbook).build_at(fixed_date()), Err(ZipError::EncodingError(_))));
}

#[test]
fn worksheet_references() {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet("Data");
    sheet.add_row([Cell::from("name"), Cell::from("score")]);
    sheet.add_row([Cell::from("ada"), Cell::from(36)]);

    let parts = XlsxBuilder::new(&workbook).parts().expect("failed to build parts");
    let xml = part(&parts, WORKSHEET_PATH);

    assert!(xml.contains(r#"<row r="1"><c r="A1" t="inlineStr"><is><t>name</t></is></c>"#), "{xml}");
    assert!(xml.contains(r#"<c r="B2"><v>36</v></c></row>"#), "{xml}");
    assert!(!xml.contains(r#"<row r="3""#));
}

#[test]
fn sheet_name_is_escaped() {
    let mut workbook = Workbook::new();
    workbook.add_worksheet("Q&A");

    let parts = XlsxBuilder::new(&workbook).parts().expect("failed to build parts");

    assert!(part(&parts, WORKBOOK_PATH).contains(r#"<sheet name="Q&amp;A" sheetId="1" r:id="rId1"/>"#));
}

#[test]
fn empty_workbook() {
    let parts = XlsxBuilder::new(&Workbook::new()).parts().expect("failed to build parts");

    assert_eq!(parts.len(), 5);
    assert!(part(&parts, WORKBOOK_PATH).contains(r#"name="Sheet1""#));
    assert!(!part(&parts, WORKSHEET_PATH).contains("<row"));
}

#[test]
fn only_first_worksheet_written() {
    init_logger();

    let mut workbook = Workbook::new();
    workbook.add_worksheet("First").add_row(["kept"]);
    workbook.add_worksheet("Second").add_row(["dropped"]);

    let parts = XlsxBuilder::new(&workbook).parts().expect("failed to build parts");
    let xml = part(&parts, WORKSHEET_PATH);

    assert_eq!(parts.len(), 5);
    assert!(xml.contains("kept"));
    assert!(!xml.contains("dropped"));
    assert!(part(&parts, WORKBOOK_PATH).contains(r#"name="First""#));
}

#[test]
fn build_is_deterministic() {
    let mut workbook = Workbook::new();
    workbook.add_worksheet("Sheet1").add_row([Cell::from("x"), Cell::from(1)]);
    let builder = XlsxBuilder::new(&workbook);

    assert_eq!(builder.build_at(fixed_date()).unwrap(), builder.build_at(fixed_date()).unwrap());
}
