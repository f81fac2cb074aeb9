/// Height-field relaxation, normalization, and sea-level derivation.
use crate::hexgrid;
use crate::world::HeightField;

/// Runs `passes` neighbor-averaging passes over the field. Each cell becomes
/// the mean of itself and its in-bounds neighbors. Reads come from the
/// previous pass's buffer, so a pass never observes its own writes.
pub fn relax(field: &mut HeightField, passes: usize) {
    let rows = field.len();
    if rows == 0 || passes == 0 {
        return;
    }
    let cols = field[0].len();

    let mut src = std::mem::take(field);
    let mut dst = src.clone();

    for _ in 0..passes {
        for r in 0..rows {
            for q in 0..cols {
                let mut sum = src[r][q];
                let mut count = 1.0_f32;
                for (dq, dr) in hexgrid::NEIGHBOR_OFFSETS {
                    let nq = q as i32 + dq;
                    let nr = r as i32 + dr;
                    if hexgrid::in_bounds(nq, nr, cols, rows) {
                        sum += src[nr as usize][nq as usize];
                        count += 1.0;
                    }
                }
                dst[r][q] = sum / count;
            }
        }
        std::mem::swap(&mut src, &mut dst);
    }

    *field = src;
}

/// Linearly rescales the field so its minimum maps to 0 and its maximum to 1.
/// A degenerate (flat) field divides by `min_span` instead of its zero range.
pub fn normalize(field: &mut HeightField, min_span: f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for row in field.iter() {
        for &v in row {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return;
    }

    let span = (max - min).max(min_span);
    for row in field.iter_mut() {
        for v in row.iter_mut() {
            *v = (*v - min) / span;
        }
    }
}

/// Returns the `percentile` quantile of the field with linear interpolation
/// between adjacent order statistics.
pub fn sea_level_quantile(field: &HeightField, percentile: f32) -> f32 {
    let mut values: Vec<f32> = field.iter().flatten().copied().collect();
    if values.is_empty() {
        return 0.0;
    }
    values.sort_unstable_by(f32::total_cmp);

    let position = percentile.clamp(0.0, 1.0) * (values.len() - 1) as f32;
    let lo = position.floor() as usize;
    let hi = position.ceil() as usize;
    let t = position - lo as f32;
    values[lo] * (1.0 - t) + values[hi] * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relaxing_a_flat_field_changes_nothing() {
        let mut field = vec![vec![0.3_f32; 6]; 5];
        relax(&mut field, 2);
        for row in &field {
            for &v in row {
                assert!((v - 0.3).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn relaxation_pulls_a_spike_toward_neighbors() {
        let mut field = vec![vec![0.0_f32; 5]; 5];
        field[2][2] = 1.0;
        relax(&mut field, 1);
        assert!(field[2][2] < 1.0);
        assert!(field[2][3] > 0.0);
    }

    #[test]
    fn normalization_spans_unit_interval() {
        let mut field = vec![vec![2.0, 4.0], vec![3.0, 6.0]];
        normalize(&mut field, 1e-6);
        assert_eq!(field[0][0], 0.0);
        assert_eq!(field[1][1], 1.0);
        for row in &field {
            for &v in row {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn degenerate_field_normalizes_without_dividing_by_zero() {
        let mut field = vec![vec![0.7_f32; 4]; 4];
        normalize(&mut field, 1e-6);
        for row in &field {
            for &v in row {
                assert!(v.is_finite());
                assert_eq!(v, 0.0);
            }
        }
    }

    #[test]
    fn quantile_interpolates_between_order_statistics() {
        let field = vec![vec![0.0, 1.0, 2.0, 3.0]];
        assert_eq!(sea_level_quantile(&field, 0.5), 1.5);
        assert_eq!(sea_level_quantile(&field, 0.0), 0.0);
        assert_eq!(sea_level_quantile(&field, 1.0), 3.0);
    }

    #[test]
    fn median_of_odd_sized_field_is_exact() {
        let field = vec![vec![0.9, 0.1, 0.5]];
        assert_eq!(sea_level_quantile(&field, 0.5), 0.5);
    }
}
