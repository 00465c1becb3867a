//! Compression of integer multisets into compact textual ranges.
//!
//! Turns the id and line-number sets of a summary subset into strings like
//! `"2,5,7-14,20"` instead of listing every value.

/// One rendered token: a lone value or a closed interval of consecutive values.
///
/// An interval always satisfies `start < end`, so the token vocabulary cannot
/// represent a malformed range and the merge scan needs no defensive branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RangeToken {
    Single(u32),
    Run(u32, u32),
}

impl RangeToken {
    /// Extends this token by `value` when it continues the run, i.e. when
    /// `value` is exactly one past the token's last value.
    fn try_extend(&mut self, value: u32) -> bool {
        match *self {
            RangeToken::Single(start) if value == start + 1 => {
                *self = RangeToken::Run(start, value);
                true
            }
            RangeToken::Run(start, end) if value == end + 1 => {
                *self = RangeToken::Run(start, value);
                true
            }
            _ => false,
        }
    }
}

/// Compresses a multiset of values into a range description.
///
/// Values are sorted ascending (duplicates retained); strictly consecutive
/// runs of length ≥ 2 collapse into one interval rendered as
/// `<start><range_sep><end>`, everything else renders as a lone decimal
/// value. Tokens are joined with `item_sep`. A duplicated value never merges
/// into a run (it is not one past its predecessor), so `[3, 3, 5]` renders
/// as `"3,3,5"`. Empty input yields the empty string.
pub fn compress(values: &[u32], item_sep: &str, range_sep: &str) -> String {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mut tokens: Vec<RangeToken> = Vec::new();
    for &value in &sorted {
        if let Some(last) = tokens.last_mut() {
            if last.try_extend(value) {
                continue;
            }
        }
        tokens.push(RangeToken::Single(value));
    }

    let rendered: Vec<String> = tokens
        .iter()
        .map(|token| match *token {
            RangeToken::Single(value) => value.to_string(),
            RangeToken::Run(start, end) => format!("{start}{range_sep}{end}"),
        })
        .collect();
    rendered.join(item_sep)
}

/// Compresses with the compact separators used inside summary lines: `,` and `-`.
pub fn short(values: &[u32]) -> String {
    compress(values, ",", "-")
}

/// Compresses with spaced separators for prose-style output: `, ` and ` - `.
pub fn spaced(values: &[u32]) -> String {
    compress(values, ", ", " - ")
}
