//! Writes a small sample drawing: a polyline, then a rotated group of
//! rectangles, circles and closed paths.
//!
//! Run with: cargo run --example puzzle --features tracing -- out.svg

use svgdoc::{
    Circle, Document, DocumentOptions, Fill, GroupTransform, Path, PathData, Polyline, Rectangle,
    Sink, Stroke,
};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "test.svg".to_string());

    let mut doc = Document::create(&path, DocumentOptions::default().size(600, 500))?;

    let fill = Fill::with_opacity("red", 0.8);
    let stroke = Stroke::with_width("black", 5);

    doc.write(
        &Polyline::new([(80, 50), (100, 20), (30, 40), (58, 12)])
            .with_stroke(stroke.clone()),
    )?;

    let mut g = doc.group(GroupTransform::default().translate(250, 250).rotate(45))?;
    for x in (0..200).step_by(60) {
        g.write(&Rectangle::new(x, 0, 20, 30).with_stroke(stroke.clone()))?;
        g.write(&Circle::new(x + 20, 40, 5).with_fill(fill.clone()))?;

        let d = PathData::new()
            .move_to(x, 50)
            .line_by(20, 30)
            .line_by(-40, 0)
            .close();
        g.write(&Path::new(d).with_stroke(stroke.clone()).with_fill(fill.clone()))?;
    }
    g.close()?;

    doc.finish()?;
    tracing::info!(%path, "wrote SVG");
    Ok(())
}
