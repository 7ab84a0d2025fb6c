use crate::color::ColorMap;
use crate::data::model::ExpenditureDataset;
use crate::data::series::{LinePoint, PieSlice, line_series, pie_series};
use crate::i18n::Language;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Two independent selectors drive the two charts.  Changing one never
/// affects the other, and there is no cross-validation: a category absent in
/// the selected year simply has no pie slice.
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<ExpenditureDataset>,

    /// Category plotted by the line chart.  Empty while unloaded.
    pub selected_category: String,

    /// Year broken down by the pie chart.  Empty while unloaded.
    pub selected_year: String,

    /// Active display language.  Swapping it only changes labels.
    pub language: Language,

    /// Cached line series for the current selection.
    pub line_series: Vec<LinePoint>,

    /// Cached pie series for the current selection.
    pub pie_series: Vec<PieSlice>,

    /// Colours per category, rebuilt with each dataset.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selected_category: String::new(),
            selected_year: String::new(),
            language: Language::default(),
            line_series: Vec::new(),
            pie_series: Vec::new(),
            color_map: ColorMap::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and derive default selections.
    ///
    /// Both selectors default to the first point encountered, matching the
    /// order of the source file rather than the sorted year axis.
    pub fn set_dataset(&mut self, dataset: ExpenditureDataset) {
        self.selected_category = dataset
            .points
            .first()
            .map(|p| p.category.clone())
            .unwrap_or_default();
        self.selected_year = dataset
            .points
            .first()
            .map(|p| p.date.clone())
            .unwrap_or_default();
        self.color_map = ColorMap::new(&dataset.categories);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.rebuild_series();
    }

    /// Select the line chart's category.
    pub fn set_category(&mut self, category: String) {
        self.selected_category = category;
        self.rebuild_series();
    }

    /// Select the pie chart's year.
    pub fn set_year(&mut self, year: String) {
        self.selected_year = year;
        self.rebuild_series();
    }

    /// Recompute both cached series from the snapshot and the selection.
    fn rebuild_series(&mut self) {
        match &self.dataset {
            Some(ds) => {
                self.line_series = line_series(ds, &self.selected_category);
                self.pie_series = pie_series(ds, &self.selected_year);
            }
            None => {
                self.line_series.clear();
                self.pie_series.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::DataPoint;

    fn point(date: &str, category: &str, value: f64) -> DataPoint {
        DataPoint {
            date: date.to_string(),
            category: category.to_string(),
            value,
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(ExpenditureDataset::from_points(vec![
            point("2019", "Meat", 1300.0),
            point("2018", "Meat", 1200.0),
            point("2018", "Bakery products", 400.0),
        ]));
        state
    }

    #[test]
    fn unloaded_state_is_empty() {
        let state = AppState::default();
        assert!(state.dataset.is_none());
        assert!(state.selected_category.is_empty());
        assert!(state.selected_year.is_empty());
        assert!(state.line_series.is_empty());
        assert!(state.pie_series.is_empty());
    }

    #[test]
    fn defaults_come_from_the_first_point() {
        let state = loaded_state();
        assert_eq!(state.selected_category, "Meat");
        // First point's date, not the first sorted year.
        assert_eq!(state.selected_year, "2019");
    }

    #[test]
    fn load_rebuilds_both_series() {
        let state = loaded_state();
        assert_eq!(state.line_series.len(), 2);
        assert_eq!(state.pie_series.len(), 1);
        assert_eq!(state.pie_series[0].category, "Meat");
    }

    #[test]
    fn selectors_are_independent() {
        let mut state = loaded_state();
        state.set_year("2018".to_string());
        assert_eq!(state.selected_category, "Meat");
        assert_eq!(state.pie_series.len(), 2);

        state.set_category("Bakery products".to_string());
        assert_eq!(state.selected_year, "2018");
        assert_eq!(state.line_series.len(), 2);
        // 2019 has no Bakery products observation: zero-filled.
        assert_eq!(state.line_series[1].value, 0.0);
    }

    #[test]
    fn empty_dataset_leaves_selections_empty() {
        let mut state = AppState::default();
        state.set_dataset(ExpenditureDataset::from_points(Vec::new()));
        assert!(state.selected_category.is_empty());
        assert!(state.selected_year.is_empty());
        assert!(state.line_series.is_empty());
        assert!(state.pie_series.is_empty());
    }

    #[test]
    fn language_swap_does_not_touch_selection() {
        let mut state = loaded_state();
        state.language = Language::Fr;
        assert_eq!(state.selected_category, "Meat");
        assert_eq!(state.pie_series[0].category, "Meat");
    }
}
