use cvcv_core::{FilterKind, LetterOptions, NameConfig};

/// Names per row in the results grid.
pub const GRID_COLUMNS: usize = 6;

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

/// Raw form inputs, exactly as typed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormState {
    pub vowels: String,
    pub add_vowels: String,
    pub consonants: String,
    pub add_consonants: String,
    pub include_y: bool,
    pub filter: FilterKind,
    pub suffix: String,
    pub first: String,
}

impl FormState {
    /// Trims every field; blank fields become "not provided".
    pub fn to_config(&self) -> NameConfig {
        NameConfig {
            letters: LetterOptions {
                vowels: non_blank(&self.vowels),
                consonants: non_blank(&self.consonants),
                add_vowels: non_blank(&self.add_vowels),
                add_consonants: non_blank(&self.add_consonants),
                include_y: self.include_y,
            },
            first: non_blank(&self.first),
            filter: self.filter,
            suffix: self.suffix.trim().to_owned(),
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}

// ---------------------------------------------------------------------------
// Results state
// ---------------------------------------------------------------------------

/// The last generated names plus the client-side search box.
///
/// Searching never re-runs the generator.
#[derive(Debug, Default)]
pub struct ResultsState {
    names: Vec<String>,
    pub query: String,
}

impl ResultsState {
    pub fn set(&mut self, names: Vec<String>) {
        self.names = names;
    }

    /// Drops the results and the search text.
    pub fn clear(&mut self) {
        self.names.clear();
        self.query.clear();
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names containing the (lowercased) search text.
    pub fn visible(&self) -> Vec<&str> {
        let query = self.query.trim().to_lowercase();
        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| query.is_empty() || name.contains(&query))
            .collect()
    }

    /// "N names" or, while searching, "k / N names".
    pub fn count_label(&self) -> String {
        let total = group_thousands(self.names.len());
        if self.query.trim().is_empty() {
            format!("{total} names")
        } else {
            format!("{} / {total} names", group_thousands(self.visible().len()))
        }
    }
}

/// Lays names out in rows of `columns`, each padded to width 8,
/// separated by three spaces.
pub fn format_grid(names: &[&str], columns: usize) -> String {
    names
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|name| format!("{name:<8}"))
                .collect::<Vec<_>>()
                .join("   ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `1234567` → `1,234,567`
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
