//! Column count search.
//!
//! For `c` columns the text block is `c * column_width` wide and
//! `ceil(total_lines / c) * line_height` tall. Candidates are scanned from
//! `c = 1` upward and the scan stops at the first candidate whose distance to
//! the target ratio is not strictly better than the best seen so far.
//!
//! The `ceil` makes the height a step function, so the distance curve has
//! plateaus. A plateau ends the scan just like a rise does.

/// Search for the column count whose width:height ratio is closest to
/// `target_ratio`.
///
/// `column_width` and `line_height` are the pixel size of one column's unit
/// cell. Returns 1 when there are no lines. Never returns more columns than
/// there are lines.
pub fn optimal_columns(
    column_width: f64,
    line_height: f64,
    total_lines: usize,
    target_ratio: f64,
) -> usize {
    if total_lines == 0 {
        return 1;
    }

    let mut best_columns = 1;
    let mut best_distance = f64::INFINITY;

    for columns in 1..=total_lines {
        let distance = (aspect_ratio(columns, column_width, line_height, total_lines)
            - target_ratio)
            .abs();
        if distance < best_distance {
            best_distance = distance;
            best_columns = columns;
        } else {
            break;
        }
    }

    best_columns
}

/// Width:height ratio of the text block laid out in `columns` columns
pub fn aspect_ratio(
    columns: usize,
    column_width: f64,
    line_height: f64,
    total_lines: usize,
) -> f64 {
    let lines_per_column = total_lines.div_ceil(columns);
    let width = columns as f64 * column_width;
    let height = lines_per_column as f64 * line_height;
    width / height
}
