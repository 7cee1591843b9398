//! Tests for addresses that match no page.

use bcbites_test::prelude::*;

#[test]
fn unknown_route_shows_home_and_keeps_address() {
    let harness = TestHarness::with_fragment("#/menu");

    assert_eq!(harness.page(), Some(Page::Home));
    assert_eq!(harness.fragment(), "/menu");
    assert_eq!(harness.app().dispatcher().resolution(), Resolution::NotFound);
}

#[test]
fn routes_without_leading_slash_do_not_match() {
    let harness = TestHarness::with_config(
        "#about",
        SiteConfig::default().fallback(FallbackPolicy::Blank),
    );
    assert_eq!(harness.route(), "about");
    assert_eq!(harness.page(), None);
}

#[test]
fn blank_policy_unmounts_the_page() {
    let mut harness =
        TestHarness::with_config("", SiteConfig::default().fallback(FallbackPolicy::Blank));
    harness.navigate("/menu");

    assert_eq!(harness.page(), None);
    assert_eq!(harness.mounts(), [Some(Page::Home), None]);
    assert!(harness.view().find_by_class("bc-header").is_empty());
    assert_eq!(harness.view().find_by_class("footer").len(), 1);
}

#[test]
fn redirect_policy_rewrites_the_address() {
    let mut harness = TestHarness::with_config(
        "#/about",
        SiteConfig::default().fallback(FallbackPolicy::RedirectHome),
    );
    harness.edit_address_bar("#/menu");

    assert_eq!(harness.page(), Some(Page::Home));
    assert_eq!(harness.fragment(), "/");
    assert_eq!(harness.mounts(), [Some(Page::About), Some(Page::Home)]);

    // Stepping back onto the unknown route redirects again, replacing the forward entry.
    assert!(harness.back());
    assert_eq!(harness.fragment(), "/");
    assert!(!harness.forward());
    assert_eq!(harness.mounts(), [Some(Page::About), Some(Page::Home)]);
}

#[test]
fn redirect_policy_applies_at_startup() {
    let harness = TestHarness::with_config(
        "#/menu",
        SiteConfig::default().fallback(FallbackPolicy::RedirectHome),
    );
    assert_eq!(harness.fragment(), "/");
    assert_eq!(harness.page(), Some(Page::Home));
    assert_eq!(harness.mounts(), [Some(Page::Home)]);
}
