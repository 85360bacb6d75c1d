//! End-to-end document output: real files, scope balance, and the sample
//! drawing as a snapshot.

use std::fs;

use svgdoc::{
    Circle, Document, DocumentOptions, Fill, GroupTransform, Path, PathData, Polyline, Rectangle,
    Shape, Sink, Stroke, SvgError,
};

const HEADER_500: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n",
    "<!-- basic SVG header -->\n",
    "<svg width=\"500\" height=\"500\" xmlns=\"http://www.w3.org/2000/svg\">\n",
    "<title>SVG</title>\n",
    "<desc>My SVG</desc>\n",
);

fn sample_drawing() -> Result<String, SvgError> {
    let mut doc = Document::new(Vec::new(), DocumentOptions::default().size(600, 500))?;

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

    let bytes = doc.finish()?;
    Ok(String::from_utf8(bytes).expect("output is UTF-8"))
}

#[test]
fn sample_drawing_snapshot() {
    let svg = sample_drawing().unwrap();
    insta::assert_snapshot!("sample_drawing", svg);
}

#[test]
fn empty_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.svg");

    let doc = Document::create(&path, DocumentOptions::default()).unwrap();
    drop(doc);

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, format!("{HEADER_500}</svg>\n"));
}

#[test]
fn group_closes_before_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("group.svg");

    let mut doc = Document::create(&path, DocumentOptions::default()).unwrap();
    let mut g = doc.group(GroupTransform::default()).unwrap();
    g.write(&Rectangle::new(0, 0, 20, 30)).unwrap();
    g.close().unwrap();
    doc.finish().unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let body = written.strip_prefix(HEADER_500).unwrap();
    assert_eq!(
        body,
        concat!(
            "<g opacity=\"1.0\" transform=\"translate(0,0) rotate(0)\">\n",
            "<rect x=\"0\" y=\"0\" width=\"20\" height=\"30\" fill=\"none\"/>\n",
            "</g>\n",
            "</svg>\n",
        )
    );
}

#[test]
fn default_group_keeps_float_opacity() {
    let mut doc = Document::new(Vec::new(), DocumentOptions::default()).unwrap();
    doc.group(GroupTransform::default()).unwrap().close().unwrap();
    let svg = String::from_utf8(doc.finish().unwrap()).unwrap();

    let body = svg.strip_prefix(HEADER_500).unwrap();
    assert_eq!(
        body,
        "<g opacity=\"1.0\" transform=\"translate(0,0) rotate(0)\">\n</g>\n</svg>\n"
    );
}

#[test]
fn group_tags_only_come_from_group_scopes() {
    let mut doc = Document::new(Vec::new(), DocumentOptions::default()).unwrap();
    let transform = GroupTransform::default().translate(5, 5);
    {
        let mut outer = doc.group(transform).unwrap();
        outer.write(&Rectangle::new(0, 0, 1, 1)).unwrap();
        let mut inner = outer.group(transform.rotate(15)).unwrap();
        inner.write(&Circle::new(0, 0, 1)).unwrap();
        inner.close().unwrap();
        let sibling = outer.group(GroupTransform::default()).unwrap();
        drop(sibling);
    }
    let svg = String::from_utf8(doc.finish().unwrap()).unwrap();

    assert_eq!(svg.matches("<g ").count(), 3);
    assert_eq!(svg.matches("</g>").count(), 3);

    let mut depth = 0i32;
    for line in svg.lines() {
        if line.starts_with("<g ") {
            depth += 1;
        } else if line == "</g>" {
            depth -= 1;
        }
        assert!(depth >= 0, "closing tag before its opening tag");
    }
    assert_eq!(depth, 0);
}

#[test]
fn nested_groups_snapshot() {
    let mut doc = Document::new(Vec::new(), DocumentOptions::default().title("Nested")).unwrap();
    {
        let mut outer = doc
            .group(GroupTransform::default().translate(10, 20))
            .unwrap();
        let mut inner = outer
            .group(GroupTransform::default().rotate(-30).opacity(0.5))
            .unwrap();
        inner
            .write(&Circle::new(0, 0, 2.5).with_stroke(Stroke::color("blue")))
            .unwrap();
    }
    let svg = String::from_utf8(doc.finish().unwrap()).unwrap();
    insta::assert_snapshot!("nested_groups", svg);
}

#[test]
fn error_inside_scopes_leaves_balanced_file() {
    fn draw(path: &std::path::Path) -> Result<(), SvgError> {
        let mut doc = Document::create(path, DocumentOptions::default())?;
        let mut outer = doc.group(GroupTransform::default())?;
        let mut inner = outer.group(GroupTransform::default())?;
        inner.write(&Circle::new(1, 1, 1))?;
        let _bad: svgdoc::PathCommand = "A".parse()?;
        inner.write(&Circle::new(2, 2, 2))?;
        Ok(())
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.svg");

    let err = draw(&path).unwrap_err();
    assert!(matches!(err, SvgError::UnknownPathCommand { .. }));

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written.matches("<g ").count(), 2);
    assert_eq!(written.matches("</g>").count(), 2);
    assert!(written.ends_with("<circle cx=\"1\" cy=\"1\" r=\"1\" fill=\"none\"/>\n</g>\n</g>\n</svg>\n"));
}

#[test]
fn heterogeneous_shapes_in_order() {
    let shapes: Vec<Shape> = vec![
        Circle::new(5, 5, 1).into(),
        Rectangle::new(0, 0, 1, 1)
            .with_fill(Fill::color("#0f0"))
            .into(),
        Polyline::new([svgdoc::Point::from((0, 0)), svgdoc::Point::from((1.5, 2.0))]).into(),
    ];

    let mut doc = Document::new(Vec::new(), DocumentOptions::default()).unwrap();
    for shape in &shapes {
        doc.write(shape).unwrap();
    }
    let svg = String::from_utf8(doc.finish().unwrap()).unwrap();

    let body = svg.strip_prefix(HEADER_500).unwrap();
    assert_eq!(
        body,
        concat!(
            "<circle cx=\"5\" cy=\"5\" r=\"1\" fill=\"none\"/>\n",
            "<rect x=\"0\" y=\"0\" width=\"1\" height=\"1\" fill=\"#0f0\"/>\n",
            "<polyline points=\"0,0 1.5,2.0 \" fill=\"none\"/>\n",
            "</svg>\n",
        )
    );
}

#[test]
fn missing_directory_is_a_create_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("out.svg");

    match Document::create(&path, DocumentOptions::default()) {
        Err(SvgError::Create { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected create error, got {other:?}"),
    }
}
