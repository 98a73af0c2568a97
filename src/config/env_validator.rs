//! Environment variable validation with typo suggestions
//!
//! Invalid values never abort startup: they are turned into warnings and the
//! previous value is kept. Warnings are returned, not printed, because the
//! interactive tree owns the terminal.

/// Validator for environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

/// An environment value that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEnvValue {
    pub var_name: String,
    pub value: String,
    pub suggestion: Option<String>,
}

impl<'a> EnvVarValidator<'a> {
    /// Create a new validator for the given environment variable
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse a value, describing the failure when `parser` rejects it
    pub fn parse<T, F>(&self, value: &str, parser: F) -> Result<T, InvalidEnvValue>
    where
        F: Fn(&str) -> Option<T>,
    {
        parser(value).ok_or_else(|| InvalidEnvValue {
            var_name: self.var_name.to_string(),
            value: value.to_string(),
            suggestion: suggest(&value.to_lowercase(), self.valid_values),
        })
    }
}

/// Closest candidate within two edits, if any
pub fn suggest(value: &str, candidates: &[&str]) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;

    for &candidate in candidates {
        let dist = levenshtein(value, candidate);
        match best {
            None => best = Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => best = Some((candidate, dist)),
            _ => {}
        }
    }

    match best {
        Some((suggested, dist)) if dist <= 2 && dist > 0 => Some(suggested.to_string()),
        _ => None,
    }
}

/// Simple Levenshtein distance for typo detection
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let a_len = a_bytes.len();
    let b_len = b_bytes.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}
