use serde::Deserialize;

// ---------------------------------------------------------------------------
// Filter constants
// ---------------------------------------------------------------------------

/// Only national-level rows are retained. Exact, case-sensitive match.
pub const GEO_FILTER: &str = "Canada";

/// Only the per-household average statistic is retained.
pub const STATISTIC_FILTER: &str = "Average expenditure per household";

/// Header of the category column in the source table.
pub const CATEGORY_COLUMN: &str = "Food expenditures, summary-level categories";

// ---------------------------------------------------------------------------
// RawRow – one record as read from the source file
// ---------------------------------------------------------------------------

/// A single record of the StatCan food-expenditure table, before filtering.
/// All fields are optional so that sparse rows deserialize instead of
/// erroring; they are validated in [`RawRow::into_point`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    #[serde(rename = "REF_DATE")]
    pub ref_date: Option<String>,
    #[serde(rename = "GEO")]
    pub geo: Option<String>,
    #[serde(rename = "Statistic")]
    pub statistic: Option<String>,
    #[serde(rename = "Food expenditures, summary-level categories")]
    pub category: Option<String>,
    #[serde(rename = "VALUE")]
    pub value: Option<String>,
}

impl RawRow {
    /// Map the row to a [`DataPoint`], or `None` if it must be dropped.
    ///
    /// A row survives when:
    /// * `GEO` and `Statistic` match the filter constants exactly;
    /// * date, category and value are all present and non-empty;
    /// * the value parses as a finite decimal.
    pub fn into_point(self) -> Option<DataPoint> {
        if self.geo.as_deref() != Some(GEO_FILTER)
            || self.statistic.as_deref() != Some(STATISTIC_FILTER)
        {
            return None;
        }

        let date = self.ref_date.filter(|s| !s.is_empty())?;
        let category = self.category.filter(|s| !s.is_empty())?;
        let value: f64 = self.value.as_deref()?.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }

        Some(DataPoint {
            date,
            category,
            value,
        })
    }
}

// ---------------------------------------------------------------------------
// DataPoint – one filtered, typed expenditure record
// ---------------------------------------------------------------------------

/// A filtered expenditure record: one (year, category, dollars) observation.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    /// Reference year, kept as the source's `"YYYY"` string.
    pub date: String,
    /// English summary-level category label.
    pub category: String,
    /// Average expenditure per household, CAD.
    pub value: f64,
}

// ---------------------------------------------------------------------------
// ExpenditureDataset – the complete loaded snapshot
// ---------------------------------------------------------------------------

/// The full filtered dataset with pre-computed category and year indices.
#[derive(Debug, Clone)]
pub struct ExpenditureDataset {
    /// All retained points, in file order.
    pub points: Vec<DataPoint>,
    /// Distinct category labels, first-seen order.
    pub categories: Vec<String>,
    /// Distinct years, ascending. Lexicographic sort is correct for the
    /// source's `"YYYY"` strings.
    pub years: Vec<String>,
}

impl ExpenditureDataset {
    /// Build the derived category and year indices from the retained points.
    pub fn from_points(points: Vec<DataPoint>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        let mut years: Vec<String> = Vec::new();

        for p in &points {
            if !categories.contains(&p.category) {
                categories.push(p.category.clone());
            }
            if !years.contains(&p.date) {
                years.push(p.date.clone());
            }
        }
        years.sort();

        ExpenditureDataset {
            points,
            categories,
            years,
        }
    }

    /// Number of retained points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, geo: &str, stat: &str, cat: &str, value: &str) -> RawRow {
        RawRow {
            ref_date: Some(date.to_string()),
            geo: Some(geo.to_string()),
            statistic: Some(stat.to_string()),
            category: Some(cat.to_string()),
            value: Some(value.to_string()),
        }
    }

    #[test]
    fn matching_row_becomes_point() {
        let p = row("2018", GEO_FILTER, STATISTIC_FILTER, "Meat", "1200")
            .into_point()
            .unwrap();
        assert_eq!(p.date, "2018");
        assert_eq!(p.category, "Meat");
        assert_eq!(p.value, 1200.0);
    }

    #[test]
    fn non_canada_row_is_dropped() {
        let r = row("2018", "Ontario", STATISTIC_FILTER, "Meat", "1200");
        assert!(r.into_point().is_none());
    }

    #[test]
    fn other_statistic_is_dropped() {
        let r = row("2018", GEO_FILTER, "Median expenditure", "Meat", "1200");
        assert!(r.into_point().is_none());
    }

    #[test]
    fn filter_is_case_sensitive() {
        let r = row("2018", "canada", STATISTIC_FILTER, "Meat", "1200");
        assert!(r.into_point().is_none());
    }

    #[test]
    fn missing_or_empty_fields_drop_the_row() {
        let mut r = row("2018", GEO_FILTER, STATISTIC_FILTER, "Meat", "1200");
        r.ref_date = None;
        assert!(r.into_point().is_none());

        let mut r = row("2018", GEO_FILTER, STATISTIC_FILTER, "Meat", "1200");
        r.category = Some(String::new());
        assert!(r.into_point().is_none());

        let mut r = row("2018", GEO_FILTER, STATISTIC_FILTER, "Meat", "1200");
        r.value = Some(String::new());
        assert!(r.into_point().is_none());
    }

    #[test]
    fn unparseable_or_non_finite_value_drops_the_row() {
        let r = row("2018", GEO_FILTER, STATISTIC_FILTER, "Meat", "n/a");
        assert!(r.into_point().is_none());

        let r = row("2018", GEO_FILTER, STATISTIC_FILTER, "Meat", "inf");
        assert!(r.into_point().is_none());
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let points = vec![
            DataPoint {
                date: "2019".into(),
                category: "Meat".into(),
                value: 1300.0,
            },
            DataPoint {
                date: "2018".into(),
                category: "Bakery products".into(),
                value: 400.0,
            },
            DataPoint {
                date: "2018".into(),
                category: "Meat".into(),
                value: 1200.0,
            },
        ];
        let ds = ExpenditureDataset::from_points(points);
        assert_eq!(ds.categories, vec!["Meat", "Bakery products"]);
    }

    #[test]
    fn years_are_sorted_and_deduplicated() {
        let points = vec![
            DataPoint {
                date: "2019".into(),
                category: "Meat".into(),
                value: 1300.0,
            },
            DataPoint {
                date: "2017".into(),
                category: "Meat".into(),
                value: 1100.0,
            },
            DataPoint {
                date: "2019".into(),
                category: "Bakery products".into(),
                value: 400.0,
            },
        ];
        let ds = ExpenditureDataset::from_points(points);
        assert_eq!(ds.years, vec!["2017", "2019"]);
        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
    }
}
