//! Levenshtein edit distance over a reusable dynamic-programming table.
//!
//! The recursive definition (delete, insert, substitute on the string tails)
//! is evaluated bottom-up: cell `(i, j)` of the table holds the distance
//! between the last `len(a) - i` characters of `a` and the last
//! `len(b) - j` characters of `b`. Filling the table from the bottom-right
//! corner reproduces the tail recursion exactly, in `O(len(a) * len(b))`
//! time and space, without recursion depth limits.
//!
//! Strings are compared as sequences of `char`s. No case folding happens
//! here; callers fold before scoring.

/// Reusable edit distance scorer.
///
/// Holds the table and the decoded character buffers between calls so that
/// scoring many candidates against the same query does not allocate per
/// candidate once the buffers have grown to the largest pair seen.
///
/// # Example
///
/// ```rust
/// use weather_tui::search::EditDistance;
///
/// let mut scorer = EditDistance::default();
/// assert_eq!(scorer.distance("kitten", "sitting"), 3);
/// assert_eq!(scorer.distance("paris", "paris"), 0);
/// ```
#[derive(Debug, Default, Clone)]
pub struct EditDistance {
    table: Vec<usize>,
    left: Vec<char>,
    right: Vec<char>,
}

impl EditDistance {
    /// Returns the minimum number of single-character insertions, deletions
    /// and substitutions that turn `a` into `b`.
    ///
    /// Empty against empty is `0`; empty against `s` is the character count
    /// of `s`.
    pub fn distance(&mut self, a: &str, b: &str) -> usize {
        self.left.clear();
        self.left.extend(a.chars());
        self.right.clear();
        self.right.extend(b.chars());

        let rows = self.left.len();
        let cols = self.right.len();

        if rows == 0 {
            return cols;
        }
        if cols == 0 {
            return rows;
        }

        let width = cols + 1;
        self.table.clear();
        self.table.resize((rows + 1) * width, 0);

        // Base cases: one tail exhausted, the other must be inserted/deleted.
        for i in 0..=rows {
            self.table[i * width + cols] = rows - i;
        }
        for j in 0..=cols {
            self.table[rows * width + j] = cols - j;
        }

        for i in (0..rows).rev() {
            for j in (0..cols).rev() {
                let cell = if self.left[i] == self.right[j] {
                    self.table[(i + 1) * width + j + 1]
                } else {
                    let delete = self.table[(i + 1) * width + j];
                    let insert = self.table[i * width + j + 1];
                    let substitute = self.table[(i + 1) * width + j + 1];
                    1 + delete.min(insert).min(substitute)
                };
                self.table[i * width + j] = cell;
            }
        }

        self.table[0]
    }
}

/// Computes the edit distance between `a` and `b` with a one-off scorer.
///
/// Prefer holding an [`EditDistance`] when scoring many pairs.
#[must_use]
pub fn distance(a: &str, b: &str) -> usize {
    EditDistance::default().distance(a, b)
}
