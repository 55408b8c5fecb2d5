use fxhash::FxHashMap as HashMap;

///
/// Per-feature hit counts.
///
/// Rows are keyed by feature name and kept in the order the names were first seeded. Every
/// row starts at zero, so features that never see a hit are still reported. Features that
/// share a name share a row.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitCountTable {
    names: Vec<String>,
    counts: Vec<u64>,
    rows: HashMap<String, usize>,
}

impl HitCountTable {
    ///
    /// Create a table with one zeroed row per distinct name.
    ///
    /// # Arguments
    /// - names: feature names, in output order
    ///
    pub fn zeroed<'a, N>(names: N) -> Self
    where
        N: IntoIterator<Item = &'a str>,
    {
        let mut table = HitCountTable::default();
        for name in names {
            table.seed(name);
        }
        table
    }

    /// Add a zeroed row for `name` unless one exists. Returns the row index either way.
    pub fn seed(&mut self, name: &str) -> usize {
        if let Some(&row) = self.rows.get(name) {
            return row;
        }
        let row = self.names.len();
        self.names.push(name.to_owned());
        self.counts.push(0);
        self.rows.insert(name.to_owned(), row);
        row
    }

    /// Row index of `name`, if it was seeded.
    pub fn row(&self, name: &str) -> Option<usize> {
        self.rows.get(name).copied()
    }

    ///
    /// Add one to a row obtained from [`HitCountTable::row`] or [`HitCountTable::seed`].
    ///
    /// # Panics
    /// If `row` is out of bounds.
    ///
    #[inline]
    pub fn increment_row(&mut self, row: usize) {
        self.counts[row] += 1;
    }

    /// Add one to the row of `name`. Returns `false` if there is no such row.
    pub fn increment(&mut self, name: &str) -> bool {
        match self.row(name) {
            Some(row) => {
                self.increment_row(row);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.row(name).map(|row| self.counts[row])
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterate `(name, count)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }

    ///
    /// Fold another table into this one by summing counts row by row.
    ///
    /// Rows of `other` missing here are appended. Summation commutes, so partial tables can
    /// be merged in any order.
    ///
    pub fn merge(&mut self, other: &HitCountTable) {
        for (name, count) in other.iter() {
            let row = self.seed(name);
            self.counts[row] += count;
        }
    }
}
