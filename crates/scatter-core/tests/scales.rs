// File: crates/scatter-core/tests/scales.rs
// Purpose: Scale domains/ranges, color assignment and axis ticks for the fixed layout.

use scatter_core::axis::AxisOrient;
use scatter_core::theme::CATEGORY10;
use scatter_core::{derive_points, Extents, Layout, Record, Scale, Scales, TimeOfDay};

fn points() -> Vec<scatter_core::DerivedPoint> {
    derive_points(&[
        Record::new("Rider A", "ITA", 1994, "36:50", ""),
        Record::new("Rider B", "ESP", 2015, "36:13", "Admitted doping 2012"),
        Record::new("Rider C", "FRA", 2003, "39:45", ""),
    ])
    .expect("derive")
}

#[test]
fn layout_matches_fixed_margins() {
    let layout = Layout::default();
    assert_eq!(layout.surface_size(), (790, 560));
    assert_eq!(layout.x_range(), (40.0, 690.0));
    assert_eq!(layout.y_range(), (30.0, 470.0));
}

#[test]
fn x_domain_is_padded_by_one_year() {
    let scales = Scales::build(&points(), &Layout::default(), &CATEGORY10);
    assert_eq!(scales.x.domain(), (1993.0, 2016.0));
    assert_eq!(scales.x.range(), (40.0, 690.0));
    assert!(scales.x.map(1994.0) > 40.0);
    assert!(scales.x.map(2015.0) < 690.0);
    assert!((scales.x.invert(scales.x.map(2003.0)) - 2003.0).abs() < 1e-9);
}

#[test]
fn y_maps_fastest_to_top_and_slowest_to_bottom() {
    let layout = Layout::default();
    let scales = Scales::build(&points(), &layout, &CATEGORY10);
    assert_eq!(scales.y.domain(), (TimeOfDay::from_min_sec(36, 13), TimeOfDay::from_min_sec(39, 45)));
    assert!((scales.y.map(TimeOfDay::from_min_sec(36, 13)) - 30.0).abs() < 1e-9);
    assert!((scales.y.map(TimeOfDay::from_min_sec(39, 45)) - 470.0).abs() < 1e-9);
    assert_eq!(scales.y.invert(470.0), TimeOfDay::from_min_sec(39, 45));
}

#[test]
fn extents_come_from_one_scan() {
    let e = Extents::scan(&points()).expect("non-empty");
    assert_eq!((e.year_min, e.year_max), (1994, 2015));
    assert!(Extents::scan(&[]).is_none());
}

#[test]
fn doping_categories_get_distinct_hues() {
    let scales = Scales::build(&points(), &Layout::default(), &CATEGORY10);
    assert_eq!(scales.fill(false), CATEGORY10[0]);
    assert_eq!(scales.fill(true), CATEGORY10[1]);
    assert_ne!(scales.fill(false), scales.fill(true));
}

#[test]
fn axes_carry_formatted_labels() {
    let layout = Layout::default();
    let scales = Scales::build(&points(), &layout, &CATEGORY10);
    let (x, y) = scales.axes(&layout);

    assert_eq!(x.id, "x-axis");
    assert_eq!(x.orient, AxisOrient::Bottom);
    assert_eq!(x.translate, (0.0, 470.0));
    assert_eq!(x.labels().first().copied(), Some("1994"));
    assert_eq!(x.labels().last().copied(), Some("2016"));
    assert!(x.labels().iter().all(|l| l.len() == 4 && l.chars().all(|c| c.is_ascii_digit())));

    assert_eq!(y.id, "y-axis");
    assert_eq!(y.orient, AxisOrient::Left);
    assert_eq!(y.translate, (40.0, 0.0));
    assert_eq!(y.labels().first().copied(), Some("36:15"));
    assert_eq!(y.labels().last().copied(), Some("39:45"));
    // ticks stay inside the range
    assert!(y.ticks.iter().all(|t| t.position >= 30.0 - 1e-9 && t.position <= 470.0 + 1e-9));
}

#[test]
fn empty_input_falls_back_to_unit_domain() {
    let scales = Scales::build(&[], &Layout::default(), &CATEGORY10);
    assert_eq!(scales.x.domain(), (0.0, 1.0));
    // collapsed y domain maps to the middle of the range
    assert_eq!(scales.y.map(TimeOfDay::EPOCH), 250.0);
}
