use star_coil::{core::traits::FuzzyEq, CircleLayout, PointCount, StarPatternSet};

fn main() {
    let points = PointCount::new(5).expect("5 is a valid point count");
    let layout = CircleLayout::<f64>::for_image(points, 800);
    println!(
        "center ({}, {}), radius {}, {} degrees between points",
        layout.center().x,
        layout.center().y,
        layout.radius(),
        layout.angle_between_points()
    );

    for (index, pos) in layout.positions() {
        println!("point {index}: ({:.2}, {:.2})", pos.x, pos.y);
    }

    let top = layout.position(1).expect("point 1 exists");
    assert!(top.x.fuzzy_eq(400.0), "point 1 should be at the top center");
    assert!(top.y.fuzzy_eq(40.0), "point 1 should be 40px below the top edge");

    // coordinates of the pentagram in drawing order
    let patterns = StarPatternSet::enumerate(points);
    let pentagram = &patterns.as_slice()[0];
    let path = layout
        .path_points(pentagram.path())
        .expect("path belongs to this layout");
    assert_eq!(path.len(), 6);
    assert!(path[0].fuzzy_eq(path[5]), "path should close at point 1");
    for (from, to) in pentagram.path().segments() {
        println!("line {from} -> {to}");
    }
}
