//! Min/max peak downsampling for waveform drawing.

/// Number of min/max columns computed for each waveform.
pub const PEAK_COLUMNS: usize = 600;

/// Downsamples interleaved samples to one (min, max) pair per column.
///
/// Short clips get fewer columns than requested rather than padded ones;
/// the canvas scales whatever it is given across its width.
pub fn min_max_peaks(samples: &[f32], columns: usize) -> Vec<(f32, f32)> {
    if samples.is_empty() || columns == 0 {
        return Vec::new();
    }

    let columns = columns.min(samples.len());
    let samples_per_column = samples.len() / columns;

    (0..columns)
        .map(|col| {
            let start = col * samples_per_column;
            // The last column absorbs the division remainder so no tail
            // sample goes uninspected.
            let end = if col + 1 == columns {
                samples.len()
            } else {
                start + samples_per_column
            };
            let chunk = &samples[start..end];

            let min = chunk.iter().cloned().fold(f32::INFINITY, f32::min);
            let max = chunk.iter().cloned().fold(f32::NEG_INFINITY, f32::max);

            (min, max)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_no_columns() {
        assert!(min_max_peaks(&[], 100).is_empty());
        assert!(min_max_peaks(&[0.5], 0).is_empty());
    }

    #[test]
    fn column_count_matches_request() {
        let samples: Vec<f32> = (0..4800).map(|i| (i as f32 / 4800.0) - 0.5).collect();
        let peaks = min_max_peaks(&samples, 600);
        assert_eq!(peaks.len(), 600);
    }

    #[test]
    fn short_clips_get_one_column_per_sample() {
        let samples = [0.1, -0.2, 0.3];
        let peaks = min_max_peaks(&samples, 600);
        assert_eq!(peaks.len(), 3);
        assert_eq!(peaks[1], (-0.2, -0.2));
    }

    #[test]
    fn trailing_remainder_lands_in_the_last_column() {
        let mut samples = vec![0.0f32; 10];
        samples[9] = 0.9; // past the 3 even columns of 3 samples each
        let peaks = min_max_peaks(&samples, 3);
        assert_eq!(peaks.len(), 3);
        assert_eq!(peaks[2].1, 0.9);
    }

    #[test]
    fn each_column_spans_its_chunk() {
        let mut samples = vec![0.0f32; 400];
        samples[10] = -0.9; // lands in the first column of 4
        samples[399] = 0.8; // lands in the last
        let peaks = min_max_peaks(&samples, 4);
        assert_eq!(peaks.len(), 4);
        assert_eq!(peaks[0].0, -0.9);
        assert_eq!(peaks[3].1, 0.8);
    }
}
