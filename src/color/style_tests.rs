//! Tests for color primitives.

use super::*;

#[test]
fn named_format() {
    let color = ChartColor::named("orange");
    assert_eq!(color.to_css(), "orange");
}

#[test]
fn hex_format() {
    let color = ChartColor::hex("#1f77b4");
    assert_eq!(color.to_css(), "#1f77b4");
}

#[test]
fn display_matches_css() {
    assert_eq!(format!("{}", ChartColor::named("white")), "white");
    assert_eq!(format!("{}", ChartColor::hex("#ff7f0e")), "#ff7f0e");
}

#[test]
fn named_and_hex_are_distinct() {
    assert_ne!(ChartColor::named("red"), ChartColor::hex("red"));
}
