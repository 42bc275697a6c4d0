use std::io::BufRead;

use crate::error::HeatMapError;

/// Reads one win count per line until end of input. Lines are trimmed; blank
/// lines are skipped so trailing newlines from upstream pipes don't abort the
/// run. Any other unparseable line is reported with its 1-based number.
pub fn read_win_counts<R: BufRead>(reader: R) -> Result<Vec<u64>, HeatMapError> {
    let mut counts = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let count = text.parse::<u64>().map_err(|_| HeatMapError::MalformedLine {
            line: idx + 1,
            text: text.to_string(),
        })?;
        counts.push(count);
    }
    Ok(counts)
}

/// Converts raw win counts into a probability vector summing to 1.
pub fn normalize(counts: &[u64]) -> Result<Vec<f64>, HeatMapError> {
    if counts.is_empty() {
        return Err(HeatMapError::EmptyInput);
    }
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return Err(HeatMapError::ZeroTotal);
    }
    Ok(counts.iter().map(|&c| c as f64 / total as f64).collect())
}
