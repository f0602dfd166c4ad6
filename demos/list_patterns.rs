use star_coil::{pattern_count, PointCount, StarPatternSet};

fn main() {
    ten_points();
    compound_stars();
    both_parities();
}

fn ten_points() {
    let points = PointCount::new(10).expect("10 is a valid point count");
    let patterns = StarPatternSet::enumerate(points);
    assert_eq!(patterns.len(), 3, "10 points should give step sizes 2, 3 and 4");

    for pattern in &patterns {
        println!(
            "{}: step {} winds {} ({} tips)",
            pattern.file_name(),
            pattern.step_size(),
            pattern.path(),
            pattern.tip_count()
        );
    }

    let step3 = patterns.get(3).expect("pattern index 3 is step size 3");
    assert_eq!(step3.tip_count(), 10, "step 3 is coprime with 10, visits all points");
    assert_eq!(step3.file_name(), "P010-S003-T010-I003.jpg");
}

fn compound_stars() {
    let points = PointCount::new(12).expect("12 is a valid point count");
    for pattern in &StarPatternSet::enumerate(points) {
        if pattern.is_compound() {
            println!(
                "step {} on 12 points is {} overlapping {}-gons",
                pattern.step_size(),
                pattern.component_count(),
                pattern.tip_count()
            );
        }
    }
}

fn both_parities() {
    // step sizes stop below half the point count, so 10 and 11 points differ by one pattern
    let even = PointCount::new(10).expect("valid point count");
    let odd = PointCount::new(11).expect("valid point count");
    assert_eq!(pattern_count(even), 3);
    assert_eq!(pattern_count(odd), 4);
}
