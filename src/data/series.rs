use super::model::ExpenditureDataset;

// ---------------------------------------------------------------------------
// Chart-ready series derived from the loaded snapshot
// ---------------------------------------------------------------------------

/// One point of the line chart: a category's value for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub year: String,
    pub value: f64,
}

/// One slice of the pie chart: a category's value in one year.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// English category label; translated at the presentation boundary.
    pub category: String,
    pub value: f64,
}

/// Build the year-by-year series for one category.
///
/// Exactly one point per dataset year, in `years` order.  A (year, category)
/// pair with no observation plots as `0.0`: the line chart treats absent as
/// zero, it does not skip the year.
pub fn line_series(dataset: &ExpenditureDataset, category: &str) -> Vec<LinePoint> {
    dataset
        .years
        .iter()
        .map(|year| {
            let value = dataset
                .points
                .iter()
                .find(|p| p.date == *year && p.category == category)
                .map(|p| p.value)
                .unwrap_or(0.0);
            LinePoint {
                year: year.clone(),
                value,
            }
        })
        .collect()
}

/// Build the category breakdown for one year.
///
/// One slice per observation in that year, in point order.  Categories with
/// no observation that year are absent rather than zero-valued.
pub fn pie_series(dataset: &ExpenditureDataset, year: &str) -> Vec<PieSlice> {
    dataset
        .points
        .iter()
        .filter(|p| p.date == year)
        .map(|p| PieSlice {
            category: p.category.clone(),
            value: p.value,
        })
        .collect()
}
