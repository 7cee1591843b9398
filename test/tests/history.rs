//! Tests for back and forward through the fragment history.

use bcbites_test::prelude::*;

#[test]
fn back_and_forward_restore_pages() {
    let mut harness = TestHarness::new();
    harness.navigate("/food-trucks").navigate("/schedule");

    assert!(harness.back());
    assert_eq!(harness.page(), Some(Page::FoodTrucks));
    assert!(harness.back());
    assert_eq!(harness.page(), Some(Page::Home));
    assert!(!harness.back());

    assert!(harness.forward());
    assert!(harness.forward());
    assert_eq!(harness.page(), Some(Page::Schedule));
    assert!(!harness.forward());

    assert_eq!(
        harness.mounts(),
        [
            Some(Page::Home),
            Some(Page::FoodTrucks),
            Some(Page::Schedule),
            Some(Page::FoodTrucks),
            Some(Page::Home),
            Some(Page::FoodTrucks),
            Some(Page::Schedule),
        ]
    );
}

#[test]
fn navigating_after_back_drops_forward_entries() {
    let mut harness = TestHarness::new();
    harness.navigate("/contact");
    harness.back();
    harness.navigate("/about");

    assert!(!harness.forward());
    assert_eq!(harness.page(), Some(Page::About));
    assert_eq!(harness.location().history_len(), 2);
}

#[test]
fn empty_and_root_fragments_are_the_same_page() {
    let mut harness = TestHarness::new();
    harness.edit_address_bar("#/");
    harness.edit_address_bar("#");

    assert_eq!(harness.page(), Some(Page::Home));
    assert_eq!(harness.mounts(), [Some(Page::Home)]);
}
