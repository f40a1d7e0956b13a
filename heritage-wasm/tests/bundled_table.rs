use heritage_wasm::bundled_timeline;

#[test]
fn bundled_table_is_parsed_once() {
    let first = bundled_timeline().expect("embedded table must be valid");
    let second = bundled_timeline().expect("embedded table must be valid");

    assert!(std::ptr::eq(first, second));
    assert_eq!(first.len(), 11);
    assert!(first.get("1888").is_some());
}
