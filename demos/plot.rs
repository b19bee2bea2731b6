use hpglabel::{PlotConfig, PlotError, Plotter, Vertical};

fn main() -> Result<(), PlotError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "decay.hpgl".to_string());

    let config = PlotConfig::new()
        .with_picture_size(6.0, 4.5)
        .with_offset(1.0, 1.0)
        .with_margins(0.25, 0.25);
    let mut plot = Plotter::create(&path, &config)?;

    // Frame
    plot.pen(1)?;
    plot.set_dash(0)?;
    plot.move_to(0.15, 0.15)?;
    for (x, y) in [(0.95, 0.15), (0.95, 0.95), (0.15, 0.95), (0.15, 0.15)] {
        plot.draw_to(x, y)?;
    }

    // Tick labels
    plot.set_font(0, 10.0)?;
    for i in 0..=4 {
        let frac = f64::from(i) / 4.0;
        let x = 0.15 + 0.8 * frac;
        let y = 0.15 + 0.8 * frac;
        plot.centre_top_text(x, 0.15, -4.0, &format!("{}", i * 25))?;
        plot.right_offset_text(0.15, y, -4.0, &format!("10^{{{}}}", i - 2))?;
    }

    // Curve
    plot.pen(2)?;
    plot.set_dash(3)?;
    plot.move_to(0.15, 0.95)?;
    for step in 1..=40 {
        let t = f64::from(step) / 40.0;
        plot.draw_to(0.15 + 0.8 * t, 0.15 + 0.8 * (-3.0 * t).exp())?;
    }
    plot.set_dash(0)?;

    // Titles
    plot.pen(1)?;
    plot.set_font(0, 14.0)?;
    plot.centre_bottom_text(0.55, 0.95, 0.5, "Decay of \\t_{1/2} samples")?;
    plot.centre_top_text(0.55, 0.15, -16.0, "Time (s)")?;
    plot.vertical_text(
        0.15,
        0.55,
        &Vertical {
            x_offset: -10.0,
            title_size: 14.0,
            reference: "10^{-2}",
            reference_size: 10.0,
        },
        "Activity (Bq m^{-3})",
    )?;
    plot.left_centre_text(0.7, 0.8, "N = N_0e^{-kt}")?;

    plot.end()?;
    eprintln!("wrote {path}");
    Ok(())
}
