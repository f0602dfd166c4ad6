use star_coil::StarPattern;

const WINDING_PREFIX: &str = "Winding pattern: ";

/// Text lines describing `pattern`, drawn in the top left corner of its image.
///
/// The winding pattern line is wrapped onto continuation lines when `measure` (pixel width of a
/// string) reports it wider than `max_width`.
pub fn annotation_lines<F>(pattern: &StarPattern, max_width: u32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> u32,
{
    let mut lines = wrap_winding_pattern(pattern, max_width, &measure);

    let points = pattern.point_count().get();
    let angle = 360.0 / f64::from(points);
    lines.push(format!("Points on circle: {points}"));
    // debug format keeps the trailing `.0` for whole angles, e.g. `36.0`
    lines.push(format!("Angle between points: {angle:?}"));
    lines.push(format!("Step Size: {}", pattern.step_size()));
    lines.push(format!("Tips: {}", pattern.tip_count()));
    lines.push(format!("Iteration: {}", pattern.index()));
    lines
}

fn wrap_winding_pattern<F>(pattern: &StarPattern, max_width: u32, measure: &F) -> Vec<String>
where
    F: Fn(&str) -> u32,
{
    let points = pattern.path().points();
    let mut lines = Vec::new();
    let mut current = String::from(WINDING_PREFIX);
    let mut current_has_points = false;
    for (i, p) in points.iter().enumerate() {
        let token = if i + 1 < points.len() {
            format!("{p},")
        } else {
            p.to_string()
        };

        let candidate = format!("{current}{token}");
        if current_has_points && measure(&candidate) > max_width {
            lines.push(std::mem::replace(&mut current, token));
        } else {
            current = candidate;
        }
        current_has_points = true;
    }

    lines.push(current);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use star_coil::PointCount;

    fn char_width(s: &str) -> u32 {
        s.len() as u32
    }

    #[test]
    fn ten_points_step_three() {
        let pattern = StarPattern::new(2, PointCount::new(10).unwrap(), 3);
        let lines = annotation_lines(&pattern, 760, char_width);
        assert_eq!(
            lines,
            vec![
                "Winding pattern: 1,4,7,10,3,6,9,2,5,8,1",
                "Points on circle: 10",
                "Angle between points: 36.0",
                "Step Size: 3",
                "Tips: 10",
                "Iteration: 2",
            ]
        );
    }

    #[test]
    fn fractional_angle() {
        let pattern = StarPattern::new(2, PointCount::new(7).unwrap(), 2);
        let lines = annotation_lines(&pattern, 760, char_width);
        assert_eq!(lines[2], "Angle between points: 51.42857142857143");
    }

    #[test]
    fn long_winding_pattern_wraps() {
        let pattern = StarPattern::new(3, PointCount::new(90).unwrap(), 7);
        let lines = annotation_lines(&pattern, 60, char_width);
        let winding_lines = lines.len() - 5;
        assert!(winding_lines > 1);
        for line in &lines[..winding_lines] {
            assert!(line.len() <= 60, "{line}");
        }

        // joining the wrapped lines gives back the full text
        let joined: String = lines[..winding_lines].concat();
        assert_eq!(
            joined,
            format!("{WINDING_PREFIX}{}", pattern.path())
        );
        assert_eq!(lines[winding_lines], "Points on circle: 90");
    }

    #[test]
    fn narrow_width_keeps_at_least_one_point_per_line() {
        let pattern = StarPattern::new(2, PointCount::new(5).unwrap(), 2);
        let lines = annotation_lines(&pattern, 1, char_width);
        assert_eq!(&lines[..6], &["Winding pattern: 1,", "3,", "5,", "2,", "4,", "1"]);
    }
}
