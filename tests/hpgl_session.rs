//! Whole-session tests: drive a plotter into memory and check the stream.

use hpglabel::{FontTable, Orientation, PlotConfig, PlotError, Plotter, Vertical};
use regex_lite::Regex;

fn config() -> PlotConfig {
    PlotConfig::new()
        .with_picture_size(10.0, 8.0)
        .with_offset(0.0, 0.0)
        .with_margins(0.5, 0.5)
}

fn session() -> Plotter<Vec<u8>> {
    let mut plot = Plotter::new(Vec::new(), &config()).unwrap();
    plot.set_font(0, 12.0).unwrap();
    plot
}

fn finish(plot: Plotter<Vec<u8>>) -> String {
    String::from_utf8(plot.end().unwrap()).unwrap()
}

/// Stream after the three initialization lines and the font line
fn body(out: &str) -> &str {
    let mut rest = out;
    for _ in 0..4 {
        rest = &rest[rest.find('\n').unwrap() + 1..];
    }
    rest
}

/// Every in-label pen-up move, in order
fn repositions(out: &str) -> Vec<(i32, i32)> {
    let re = Regex::new(r"PU;PA(-?\d+), ?(-?\d+);").unwrap();
    re.captures_iter(out)
        .map(|c| (c[1].parse().unwrap(), c[2].parse().unwrap()))
        .collect()
}

#[test]
fn chemical_formula_end_to_end() {
    let mut plot = session();
    plot.left_text(0.5, 0.5, "H\\a_2O").unwrap();
    insta::assert_snapshot!(finish(plot), @r"
    IN; IP-512,-512,9728,7680;
    SC0,10000,0,10000;DT\;
    CA7;SS;
    PU;CS0;SS;SI0.104, 0.249;
    PU;PA5000, 5000;LBH\;SA;LBa\;SS;PU;PA5120,4948;PU;SI0.104,0.125;LB2\;PU;SI0.104,0.249;PU;PA5180,5000;LBO\;
    ");
}

#[test]
fn initialization_order() {
    let out = finish(Plotter::new(Vec::new(), &config()).unwrap());
    assert_eq!(
        out,
        "IN; IP-512,-512,9728,7680;\nSC0,10000,0,10000;DT\\;\nCA7;SS;\n"
    );
}

#[test]
fn alternate_font_comes_from_table() {
    let config = config()
        .with_alt_font("Plotter-Greek")
        .with_fonts(FontTable::standard().with("Plotter-Greek", 4));
    let out = finish(Plotter::new(Vec::new(), &config).unwrap());
    assert!(out.contains("CA4;SS;\n"), "{out}");

    let config = config.with_alt_font("Missing");
    let out = finish(Plotter::new(Vec::new(), &config).unwrap());
    assert!(out.contains("CA0;SS;\n"), "{out}");
}

#[test]
fn lines_and_pens() {
    let mut plot = session();
    plot.pen(2).unwrap();
    plot.set_dash(3).unwrap();
    plot.move_to(0.1, 0.1).unwrap();
    plot.draw_to(0.9, 0.1).unwrap();
    plot.set_dash(0).unwrap();
    plot.set_dash(42).unwrap();
    plot.draw_to(0.9, 0.9).unwrap();
    let out = finish(plot);
    insta::assert_snapshot!(body(&out), @r"
    SP;PU;SP2;
    LT2,3;
    PU;PA1000, 1000;
    PD;PA9000, 1000;
    LT;
    PD;PA9000, 9000;
    ");
}

#[test]
fn right_offset_header_ends_line() {
    let mut plot = session();
    plot.right_offset_text(0.9, 0.2, 0.0, "10^{3}").unwrap();
    assert_eq!(
        body(&finish(plot)),
        "PU;PA8830, 1931;\nLB10\\;PU;PA8950,2035;PU;SI0.104,0.125;LB3\\;PU;SI0.104,0.249;PU;PA9010,1931;\n"
    );
}

#[test]
fn centre_justified_headers() {
    let mut plot = session();
    plot.centre_bottom_text(0.5, 0.5, 0.0, "abcd").unwrap();
    plot.left_centre_text(0.25, 0.5, "abc").unwrap();
    plot.centre_top_text(0.5, 0.5, 9.0, "ab").unwrap();
    let out = finish(plot);
    insta::assert_snapshot!(body(&out), @r"
    PU;PA4890, 5000;LBabcd\;
    PU;PA2500, 4931;LBabc\;
    PU;PA4950, 4948;
    LBab\;
    ");
}

#[test]
fn vertical_title() {
    let mut plot = session();
    let placement = Vertical {
        x_offset: 36.0,
        title_size: 12.0,
        reference: "-1.0^{5}",
        reference_size: 18.0,
    };
    let stats = plot
        .vertical_text(0.1, 0.5, &placement, "Time (s^{-1})")
        .unwrap();
    assert_eq!(stats.glyphs, 10);
    let out = finish(plot);
    insta::assert_snapshot!(body(&out), @r"
    PU;SI0.156, 0.199;
    PU;PA875,4710;DR0,1;LBTime (s\;PU;PA771,5310;PU;SI0.130,0.100;LB-1\;PU;SI0.130,0.199;PU;PA875,5460;LB)\;
    DR;
    PU;SI0.125, 0.249;
    ");
}

#[test]
fn lowered_run_sits_below_baseline() {
    let mut plot = session();
    plot.left_text(0.2, 0.3, "CO_2 and x^{2}").unwrap();
    let moves = repositions(body(&finish(plot)));
    // start, lowered, back, raised, back
    assert_eq!(moves.len(), 5);
    let baseline = moves[0].1;
    assert!(moves[1].1 < baseline);
    assert_eq!(moves[2].1, baseline);
    assert!(moves[3].1 > baseline);
    assert_eq!(moves[4].1, baseline);
    // the pen only ever moves forward along the line
    assert!(moves.windows(2).all(|w| w[0].0 <= w[1].0));
}

#[test]
fn malformed_markup_is_truncated() {
    let mut plot = session();
    plot.show_text("ab^{cd", Orientation::Horizontal, glam::IVec2::new(0, 0))
        .unwrap();
    plot.show_text("x_", Orientation::Horizontal, glam::IVec2::new(0, 0))
        .unwrap();
    assert_eq!(
        body(&finish(plot)),
        "LBab\\;PU;PA120,104;PU;SI0.104,0.125;LBcd\\;PU;SI0.104,0.249;PU;PA240,0;\nLBx\\;\n"
    );
}

#[test]
fn oversized_label_is_capped() {
    let mut plot = session();
    let text = "W".repeat(400);
    let stats = plot.left_text(0.0, 0.0, &text).unwrap();
    assert_eq!(stats.glyphs, 159);
    let out = finish(plot);
    let label = body(&out)
        .trim_start_matches("PU;PA0, 0;LB")
        .trim_end_matches("\\;\n");
    assert_eq!(label.len(), 159);
}

#[test]
fn plot_file_round_trip() {
    let path = std::env::temp_dir().join(format!("hpglabel-{}.hpgl", std::process::id()));
    let mut plot = Plotter::create(&path, &config()).unwrap();
    plot.set_font(0, 12.0).unwrap();
    plot.left_text(0.5, 0.5, "ok").unwrap();
    plot.end().unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(written.starts_with("IN; IP"));
    assert!(written.ends_with("PU;PA5000, 5000;LBok\\;\n"));
}

#[test]
fn unopenable_file_is_reported() {
    let path = std::env::temp_dir()
        .join("hpglabel-no-such-dir")
        .join("nested")
        .join("plot.hpgl");
    let err = Plotter::create(&path, &config()).unwrap_err();
    match err {
        PlotError::Open { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_picture_is_rejected_before_output() {
    let config = PlotConfig::new().with_picture_size(-1.0, 8.0);
    let err = Plotter::new(Vec::new(), &config).unwrap_err();
    assert!(matches!(err, PlotError::InvalidPictureSize { .. }));
}
