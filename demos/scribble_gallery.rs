use aoer_scribble::prelude::*;
use geo_types::Point;
use svg::node::element::path::Data;
use svg::node::element::Path;
use svg::Document;

/// The showcase scene: one of everything, side by side on a 1000x800 page.
/// Writes `scribble_gallery.svg`, or wherever the first argument points.
/// Set RUST_LOG=trace to watch each shape go by.
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let fname = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "scribble_gallery.svg".to_string());

    let mut pen = Pen::with_seed(0.0, 0.0, 101);

    pen.line(80.0, 100.0, 80.0, 700.0, 50_000)?
        .ellipse(300.0, 400.0, 120.0, 300.0, 100_000)?
        .circle(600.0, 200.0, 100.0, 50_000)?
        .rectangle(500.0, 400.0, 200.0, 300.0, 50_000)?
        .path(
            &[
                Point::new(800.0, 100.0),
                Point::new(900.0, 300.0),
                Point::new(800.0, 500.0),
                Point::new(900.0, 700.0),
            ],
            false,
            50_000,
        )?
        .dot(300.0, 400.0, 5_000)?;

    let mut document = Document::new()
        .set("viewBox", (0, 0, 1000, 800))
        .set("width", "1000")
        .set("height", "800");
    for stroke in pen.strokes() {
        let mut data = Data::new();
        for (i, point) in stroke.iter().enumerate() {
            data = if i == 0 {
                data.move_to((point.x(), point.y()))
            } else {
                data.line_to((point.x(), point.y()))
            };
        }
        document = document.add(
            Path::new()
                .set("d", data)
                .set("fill", "none")
                .set("stroke", "black")
                .set("stroke-width", 0.25),
        );
    }

    svg::save(&fname, &document)?;
    println!("Wrote {} strokes to {}", pen.strokes().len(), fname);
    Ok(())
}
