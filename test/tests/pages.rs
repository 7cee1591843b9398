//! Tests for the mounted markup of each page.

use bcbites_test::prelude::*;
use strum::IntoEnumIterator;
use time::macros::date;

#[test]
fn every_page_is_wrapped_in_the_shell() {
    for page in Page::iter() {
        let harness = TestHarness::with_fragment(page.path());
        let html = harness.app().to_html();

        assert!(
            html.starts_with(r#"<div><main class="wrapper" role="main"><div class="content">"#),
            "{page:?}"
        );
        assert!(html.ends_with(r#"<footer class="footer"></footer></div>"#), "{page:?}");
        assert_eq!(harness.app().title(), page.title());
    }
}

#[test]
fn home_lists_both_quads_and_the_map() {
    let harness = TestHarness::new();
    let view = harness.view();

    let quads: Vec<_> = view
        .find_by_class("quad-title")
        .into_iter()
        .map(|title| title.text_content())
        .collect();
    assert_eq!(quads, ["West Quad", "East Quad"]);
    assert_eq!(view.find_by_class("food-truck").len(), 6);
    assert!(view.find_by_class("campus-map-container")[0].attr("data-map").is_some());
}

#[test]
fn directory_lists_all_seven_trucks() {
    let harness = TestHarness::with_fragment("#/food-trucks");
    assert_eq!(harness.view().find_by_class("food-truck-item").len(), 7);
}

#[test]
fn schedule_is_titled_for_the_week() {
    let node = bcbites::pages::schedule_for(date!(2025 - 05 - 01));
    assert_eq!(node.find_by_class("schedule-title")[0].text_content(), "April, 28 - 2");
    assert_eq!(node.find_by_class("truck-schedule").len(), 19);
}

#[test]
fn contact_links_are_dialable() {
    let harness = TestHarness::with_fragment("#/contact");
    let view = harness.view();
    let phones: Vec<_> = view
        .find_all(|element| element.attr("href").is_some_and(|href| href.starts_with("tel:")))
        .into_iter()
        .filter_map(|link| link.attr("href"))
        .collect();

    assert_eq!(phones.len(), 7);
    assert!(phones.iter().all(|href| href.len() == "tel:+1".len() + 10));
}
