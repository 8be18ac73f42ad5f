use arrow::array::StringArray;

use crate::utils::text::title_case;

/// One step of a string normalization chain. Chains are applied in order to
/// every value of a column, so the position of each step matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextOp {
    /// Strip surrounding whitespace.
    Trim,
    /// Title-case every word.
    Title,
    /// Replace nulls with a sentinel.
    FillNull(&'static str),
    /// Replace values equal to `from`.
    Replace {
        from: &'static str,
        to: &'static str,
    },
    /// Replace every occurrence of `from` inside a value.
    ReplaceSubstring {
        from: &'static str,
        to: &'static str,
    },
    /// Fold raw variants to a canonical label. Keys are matched
    /// case-sensitively, ignoring surrounding whitespace.
    Synonyms(&'static [(&'static str, &'static str)]),
}

impl TextOp {
    pub fn apply(&self, value: Option<String>) -> Option<String> {
        match self {
            TextOp::FillNull(fill) => Some(value.unwrap_or_else(|| fill.to_string())),
            _ => value.map(|v| self.apply_present(v)),
        }
    }

    fn apply_present(&self, value: String) -> String {
        match self {
            TextOp::Trim => value.trim().to_string(),
            TextOp::Title => title_case(&value),
            TextOp::Replace { from, to } if value == *from => to.to_string(),
            TextOp::ReplaceSubstring { from, to } => value.replace(from, to),
            TextOp::Synonyms(table) => {
                let key = value.trim();
                table
                    .iter()
                    .find(|(raw, _)| *raw == key)
                    .map(|(_, canonical)| canonical.to_string())
                    .unwrap_or(value)
            }
            TextOp::Replace { .. } | TextOp::FillNull(_) => value,
        }
    }
}

/// Apply a chain of text operations to every value.
pub fn normalize(array: &StringArray, ops: &[TextOp]) -> StringArray {
    array
        .iter()
        .map(|value| {
            ops.iter()
                .fold(value.map(str::to_string), |acc, op| op.apply(acc))
        })
        .collect()
}
