//! Row filters shared by `getStatsData` and `postDataset`: the tab, time and
//! area dimensions plus the numbered category dimensions (`cdCat01`..`cdCat15`).

use crate::Error;

use super::common::{push, push_list};

/// Highest category number the API accepts.
pub const MAX_CATEGORY: u8 = 15;

/// Filter on one dimension: a hierarchy level, explicit codes, or a code range.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DimensionFilter {
    /// Hierarchy level(s), e.g. `1` or `1-3` (`lv*`).
    pub level: Option<String>,
    /// Explicit codes, sent comma separated (`cd*`).
    pub codes: Vec<String>,
    /// First code of a range (`cd*From`).
    pub from: Option<String>,
    /// Last code of a range (`cd*To`).
    pub to: Option<String>,
}

impl DimensionFilter {
    pub fn with_level(mut self, level: &str) -> Self {
        self.level = Some(level.to_string());
        self
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.codes.push(code.to_string());
        self
    }
    pub fn with_codes(mut self, codes: &[&str]) -> Self {
        self.codes.extend(codes.iter().map(|c| c.to_string()));
        self
    }

    pub fn with_range(mut self, from: &str, to: &str) -> Self {
        self.from = Some(from.to_string());
        self.to = Some(to.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.codes.is_empty() && self.from.is_none() && self.to.is_none()
    }

    /// Emits `lv{name}`, `cd{name}`, `cd{name}From`, `cd{name}To`.
    fn push_pairs(&self, name: &str, pairs: &mut Vec<(String, String)>) {
        push(pairs, &format!("lv{}", name), &self.level);
        push_list(pairs, &format!("cd{}", name), &self.codes);
        push(pairs, &format!("cd{}From", name), &self.from);
        push(pairs, &format!("cd{}To", name), &self.to);
    }
}

/// Filter on category dimension `number` (1..=15), sent as `cdCatNN` and friends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryFilter {
    number: u8,
    pub filter: DimensionFilter,
}

impl CategoryFilter {
    pub fn new(number: u8) -> Result<Self, Error> {
        if number == 0 || number > MAX_CATEGORY {
            return Err(Error::InvalidArgument(format!(
                "category number must be between 1 and {}, got {}",
                MAX_CATEGORY, number
            )));
        }
        Ok(Self {
            number,
            filter: DimensionFilter::default(),
        })
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// Wire name stem, e.g. `Cat01`.
    pub fn name(&self) -> String {
        format!("Cat{:02}", self.number)
    }

    pub fn with_level(mut self, level: &str) -> Self {
        self.filter = self.filter.with_level(level);
        self
    }
    pub fn with_code(mut self, code: &str) -> Self {
        self.filter = self.filter.with_code(code);
        self
    }
    pub fn with_codes(mut self, codes: &[&str]) -> Self {
        self.filter = self.filter.with_codes(codes);
        self
    }
    pub fn with_range(mut self, from: &str, to: &str) -> Self {
        self.filter = self.filter.with_range(from, to);
        self
    }
}

/// All row filters of a stats-data request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NarrowingConditions {
    pub tab: DimensionFilter,
    pub time: DimensionFilter,
    pub area: DimensionFilter,
    /// Sent in list order. [`NarrowingConditions::set_category`] keeps it
    /// sorted with one entry per number.
    pub categories: Vec<CategoryFilter>,
}

impl NarrowingConditions {
    /// Adds a category filter, replacing any existing filter with the same number.
    pub fn set_category(&mut self, category: CategoryFilter) {
        match self
            .categories
            .binary_search_by_key(&category.number, |c| c.number)
        {
            Ok(idx) => self.categories[idx] = category,
            Err(idx) => self.categories.insert(idx, category),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tab.is_empty()
            && self.time.is_empty()
            && self.area.is_empty()
            && self.categories.iter().all(|c| c.filter.is_empty())
    }

    pub(crate) fn push_pairs(&self, pairs: &mut Vec<(String, String)>) {
        self.tab.push_pairs("Tab", pairs);
        self.time.push_pairs("Time", pairs);
        self.area.push_pairs("Area", pairs);
        for category in self.categories.iter() {
            category.filter.push_pairs(&category.name(), pairs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryFilter, DimensionFilter, NarrowingConditions};
    use crate::Error;

    #[test]
    fn category_names_are_zero_padded() {
        assert_eq!(CategoryFilter::new(1).unwrap().name(), "Cat01");
        assert_eq!(CategoryFilter::new(15).unwrap().name(), "Cat15");
    }

    #[test]
    fn category_number_out_of_range() {
        assert!(matches!(CategoryFilter::new(0), Err(Error::InvalidArgument(_))));
        assert!(matches!(CategoryFilter::new(16), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn dimension_pairs() {
        let mut pairs = Vec::new();
        let conditions = NarrowingConditions {
            area: DimensionFilter::default()
                .with_level("2")
                .with_codes(&["13000", "27000"]),
            time: DimensionFilter::default().with_range("2015000000", "2020000000"),
            ..Default::default()
        };
        conditions.push_pairs(&mut pairs);
        assert_eq!(
            pairs,
            vec![
                ("cdTimeFrom".to_string(), "2015000000".to_string()),
                ("cdTimeTo".to_string(), "2020000000".to_string()),
                ("lvArea".to_string(), "2".to_string()),
                ("cdArea".to_string(), "13000,27000".to_string()),
            ]
        );
    }

    #[test]
    fn categories_are_ordered_and_deduplicated() {
        let mut conditions = NarrowingConditions::default();
        conditions.set_category(CategoryFilter::new(2).unwrap().with_code("020"));
        conditions.set_category(CategoryFilter::new(1).unwrap().with_code("010"));
        conditions.set_category(CategoryFilter::new(2).unwrap().with_codes(&["020", "030"]));

        let mut pairs = Vec::new();
        conditions.push_pairs(&mut pairs);
        assert_eq!(
            pairs,
            vec![
                ("cdCat01".to_string(), "010".to_string()),
                ("cdCat02".to_string(), "020,030".to_string()),
            ]
        );
    }
}
