use std::fs;

use person_registry::export::{ExportScope, export_to_path};
use person_registry::listing::ListingView;

use crate::utils::{FakePersonApi, person};

async fn twenty_rows() -> ListingView {
    let records = (1..=20)
        .map(|i| {
            let name = if i % 10 == 0 { "Zara" } else { "Asha" };
            person(i, name)
        })
        .collect();
    let mut view = ListingView::default();
    view.load(&FakePersonApi::with_records(records)).await;
    view
}

#[tokio::test]
async fn test_export_ignores_active_search() {
    let mut view = twenty_rows().await;
    view.set_search("zara");
    assert_eq!(view.filtered_rows().len(), 2);

    let mut out = Vec::new();
    let count = view.export(&mut out, ExportScope::default()).unwrap();
    assert_eq!(count, 20);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 21);
    assert!(text.starts_with(
        "Id,Name,Age/sex,Mobile,Address,Govt Id Type,Govt Id,Guardian,Nationality"
    ));
}

#[tokio::test]
async fn test_filtered_export_writes_visible_rows() {
    let mut view = twenty_rows().await;
    view.set_search("zara");

    let mut out = Vec::new();
    let count = view.export(&mut out, ExportScope::Filtered).unwrap();
    assert_eq!(count, 2);

    let text = String::from_utf8(out).unwrap();
    let ids: Vec<&str> = text
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(ids, vec!["10", "20"]);
}

#[tokio::test]
async fn test_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.csv");
    let view = twenty_rows().await;

    let count = export_to_path(&path, view.rows()).unwrap();
    assert_eq!(count, 20);

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 21);
    assert!(contents.contains("20,Zara,--Y/--"));
}

#[tokio::test]
async fn test_view_exports_to_file_by_scope() {
    let dir = tempfile::tempdir().unwrap();
    let mut view = twenty_rows().await;
    view.set_search("zara");

    let all = dir.path().join("all.csv");
    assert_eq!(view.export_to_path(&all, ExportScope::All).unwrap(), 20);
    assert_eq!(fs::read_to_string(&all).unwrap().lines().count(), 21);

    let filtered = dir.path().join("filtered.csv");
    assert_eq!(view.export_to_path(&filtered, ExportScope::Filtered).unwrap(), 2);
    assert_eq!(fs::read_to_string(&filtered).unwrap().lines().count(), 3);
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("users.csv");
    assert!(export_to_path(&path, Vec::<&person_registry::DisplayRow>::new()).is_err());
}
