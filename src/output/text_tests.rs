use super::*;
use crate::color::ChartColor;
use crate::group::{Entry, Series};
use crate::metric::MetricType;

fn group(name: &str, index: usize, entries: usize) -> SeriesGroup {
    let series = Series::new(name, MetricType::Int)
        .with_entries((0..entries).map(|_| Entry::new(0, 1, "1")).collect());
    let mut group = SeriesGroup::new(name).with_series(series);
    group.index = index;
    group
}

#[test]
fn groups_are_listed_with_index() {
    let temperature = group("Temperature", 1, 3);
    let battery = group("Battery level", 0, 1);

    let output = TextFormatter
        .format_groups(&[&temperature, &battery])
        .unwrap();
    assert_eq!(
        output,
        "[1] Temperature (1 series, 3 entries)\n\
         [0] Battery level (1 series, 1 entries)\n\
         2 visible groups\n"
    );
}

#[test]
fn single_group_footer_is_singular() {
    let voltage = group("Voltage", 0, 0);
    let output = TextFormatter.format_groups(&[&voltage]).unwrap();
    assert!(output.ends_with("1 visible group\n"));
}

#[test]
fn no_groups() {
    let output = TextFormatter.format_groups(&[]).unwrap();
    assert_eq!(output, "0 visible groups\n");
}

#[test]
fn legend_lists_value_and_color() {
    let legend = vec![
        LegendEntry::new(ChartColor::named("white"), "off"),
        LegendEntry::new(ChartColor::hex("#1f77b4"), "on"),
    ];
    let output = TextFormatter.format_legend("Screen", &legend).unwrap();
    assert_eq!(output, "Screen\n  off: white\n  on: #1f77b4\n");
}

#[test]
fn empty_legend_message() {
    let output = TextFormatter.format_legend("Temperature", &[]).unwrap();
    assert_eq!(output, "No legend for Temperature\n");
}
