/// Extension of the generated image files.
pub const FILE_EXTENSION: &str = "jpg";

/// Image file name for a star pattern, `P{points}-S{step}-T{tips}-I{index}.jpg` with every
/// number zero padded to (at least) 3 digits.
///
/// # Examples
///
/// ```
/// # use star_coil::pattern_file_name;
/// assert_eq!(pattern_file_name(10, 3, 10, 2), "P010-S003-T010-I002.jpg");
/// assert_eq!(pattern_file_name(1200, 7, 1200, 7), "P1200-S007-T1200-I007.jpg");
/// ```
pub fn pattern_file_name(
    point_count: u32,
    step_size: u32,
    tip_count: usize,
    pattern_index: u32,
) -> String {
    format!(
        "P{point_count:03}-S{step_size:03}-T{tip_count:03}-I{pattern_index:03}.{FILE_EXTENSION}"
    )
}
