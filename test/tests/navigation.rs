//! Tests for moving between pages through the address bar.

use bcbites_test::prelude::*;
use strum::IntoEnumIterator;

#[test]
fn no_fragment_shows_home() {
    let harness = TestHarness::new();
    assert_eq!(harness.page(), Some(Page::Home));
    assert_eq!(harness.route(), "/");
    assert_eq!(harness.mounts(), [Some(Page::Home)]);
}

#[test]
fn every_page_is_reachable_by_deep_link() {
    for page in Page::iter() {
        let harness = TestHarness::with_fragment(&format!("#{}", page.path()));
        assert_eq!(harness.page(), Some(page));
        assert_eq!(harness.mounts(), [Some(page)], "{page:?} mounted more than once");
    }
}

#[test]
fn navigate_switches_page_without_reload() {
    let mut harness = TestHarness::new();
    harness.navigate("/contact");

    assert_eq!(harness.page(), Some(Page::Contact));
    assert_eq!(harness.fragment(), "/contact");
    assert_eq!(harness.mounts(), [Some(Page::Home), Some(Page::Contact)]);
    assert_eq!(harness.view().find_by_class("contact-container").len(), 1);
}

#[test]
fn navigating_to_the_current_page_does_not_remount() {
    let mut harness = TestHarness::with_fragment("#/about");
    harness.navigate("/about").navigate("#/about");
    assert_eq!(harness.mounts(), [Some(Page::About)]);
}

#[test]
fn header_links_lead_to_their_pages() {
    let mut harness = TestHarness::new();
    for page in Page::iter() {
        assert!(harness.click_link(page.nav_label()), "{page:?} has no link");
        assert_eq!(harness.page(), Some(page));
        assert_eq!(harness.route(), page.path());
    }
}

#[test]
fn missing_link_is_reported() {
    let mut harness = TestHarness::new();
    assert!(!harness.click_link("MENU"));
    assert_eq!(harness.mounts().len(), 1);
}

#[test]
fn recorder_sees_every_change_in_order() {
    let mut harness = TestHarness::new();
    let recorder = RouteRecorder::attach(harness.location().as_ref());

    harness.navigate("/schedule");
    harness.edit_address_bar("#/about");
    harness.back();

    assert_eq!(recorder.routes(), ["/schedule", "/about", "/schedule"]);
    recorder.reset();
    assert_eq!(recorder.count(), 0);
    assert_eq!(recorder.last(), None);

    harness.forward();
    assert_eq!(recorder.routes(), ["/about"]);
    recorder.detach();

    harness.navigate("/");
    assert_eq!(recorder.count(), 1);
    assert_eq!(recorder.last(), Some(Route::from("/about")));
}
