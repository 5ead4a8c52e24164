use person_registry::PersonRecord;
use person_registry::listing::{Column, ListingState, ListingView, SortOrder, SortSpec};

use crate::utils::{FakePersonApi, person};

fn names(rows: &[&person_registry::DisplayRow]) -> Vec<String> {
    rows.iter().map(|r| r.name.clone()).collect()
}

#[tokio::test]
async fn test_empty_fetch_gives_zero_rows() {
    let api = FakePersonApi::empty();
    let mut view = ListingView::default();

    let state = view.load(&api).await;

    assert_eq!(state, &ListingState::Loaded(Vec::new()));
    assert!(!view.is_loading());
    assert!(view.rows().is_empty());
    assert_eq!(view.page(1).total_pages, 1);
    assert_eq!(api.list_count(), 1);
}

#[tokio::test]
async fn test_fetch_failure_is_an_explicit_state() {
    let api = FakePersonApi::empty().failing_list(503, "unavailable");
    let mut view = ListingView::default();

    let state = view.load(&api).await.clone();

    assert!(matches!(state, ListingState::Failed(ref message) if message.contains("unavailable")));
    assert!(!view.is_loading());
    assert!(view.rows().is_empty());
}

#[tokio::test]
async fn test_search_is_case_insensitive_and_idempotent() {
    let api = FakePersonApi::with_records(vec![
        person(1, "Asha Rao"),
        person(2, "Ravi Kumar"),
        person(3, "Meena"),
        person(4, "PRAVEEN"),
    ]);
    let mut view = ListingView::default();
    view.load(&api).await;

    view.set_search("RA");
    let first = names(&view.filtered_rows());
    assert_eq!(first, vec!["Asha Rao", "Ravi Kumar", "PRAVEEN"]);

    view.set_search("RA");
    assert_eq!(names(&view.filtered_rows()), first);

    // The fetched list is never touched by searching.
    assert_eq!(view.rows().len(), 4);
    assert_eq!(api.list_count(), 1);
}

#[tokio::test]
async fn test_search_matches_name_only() {
    let mut record = person(1, "Asha");
    record.city = Some("Ravipur".to_string());
    let api = FakePersonApi::with_records(vec![record, person(2, "Ravi")]);
    let mut view = ListingView::default();
    view.load(&api).await;

    view.set_search("ravi");
    assert_eq!(names(&view.filtered_rows()), vec!["Ravi"]);
}

#[tokio::test]
async fn test_nameless_record_is_not_found_by_search() {
    let api = FakePersonApi::with_records(vec![PersonRecord::default(), person(2, "Asha")]);
    let mut view = ListingView::default();
    view.load(&api).await;

    for query in ["-", "--", "a"] {
        view.set_search(query);
        assert!(
            view.filtered_rows().iter().all(|r| r.id == "2"),
            "query {query:?}"
        );
    }
    view.set_search("-");
    assert!(view.filtered_rows().is_empty());

    view.set_search("");
    assert_eq!(view.filtered_rows().len(), 2);
}

#[tokio::test]
async fn test_pages_of_seventeen() {
    let records = (1..=40).map(|i| person(i, &format!("Person {i}"))).collect();
    let api = FakePersonApi::with_records(records);
    let mut view = ListingView::default();
    view.load(&api).await;

    let page = view.page(3);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.rows.len(), 6);
    assert_eq!(page.rows[0].id, "35");
}

#[tokio::test]
async fn test_sort_by_id_descending() {
    let api = FakePersonApi::with_records(vec![person(9, "a"), person(10, "b"), person(100, "c")]);
    let mut view = ListingView::default();
    view.load(&api).await;

    view.set_sort(Some(SortSpec::new(Column::Id, SortOrder::Descending)));
    let ids: Vec<&str> = view.visible_rows().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["100", "10", "9"]);
}
