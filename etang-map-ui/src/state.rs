//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals of the pond map into one `Copy`
//! struct provided via `use_context_provider`. The selector holds the active
//! session; it is replaced as a whole when another year is loaded.

use etang_data::legend::LegendLayout;
use etang_data::session::TemporalSelector;
use dioxus::prelude::*;

/// Shared state of the pond map app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Active session and date (None until the first dataset is loaded)
    pub selector: Signal<Option<TemporalSelector>>,
    /// Whether a dataset fetch is in flight
    pub loading: Signal<bool>,
    /// Error message if a load failed
    pub error_msg: Signal<Option<String>>,
    /// Year tab labels
    pub years: Signal<Vec<String>>,
    /// Currently selected year tab
    pub selected_year: Signal<String>,
    /// Legend of the active date, as last emitted by the selector
    pub legend: Signal<Option<LegendLayout>>,
    /// Whether dry ponds get the highlighted outline
    pub show_dryness: Signal<bool>,
}

impl AppState {
    /// Create the state with the given year tabs; the first tab is selected.
    pub fn new(years: &[String]) -> Self {
        Self {
            selector: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            years: Signal::new(years.to_vec()),
            selected_year: Signal::new(years.first().cloned().unwrap_or_default()),
            legend: Signal::new(None),
            show_dryness: Signal::new(true),
        }
    }
}

/// Label of the dataset currently on screen.
pub fn displayed_year(selector: Option<&TemporalSelector>) -> Option<&str> {
    selector.map(|s| s.session().label())
}

/// Whether selecting `year` needs a fetch. Reselecting the year on screen
/// does not.
pub fn needs_load(selector: Option<&TemporalSelector>, year: &str) -> bool {
    !year.is_empty() && displayed_year(selector) != Some(year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use etang_core::dryness::DrynessWindow;
    use etang_core::palette::Palette;
    use etang_core::record::Record;
    use etang_data::legend::LegendSizing;
    use etang_data::session::Session;

    fn selector_for(year: &str) -> TemporalSelector {
        let session = Session::build(year, vec![Record::new("2018-03-01", "1", Some(1))]).unwrap();
        TemporalSelector::new(
            Palette::Etangs.table(),
            LegendSizing::default(),
            DrynessWindow::default(),
            session,
        )
    }

    #[test]
    fn test_needs_load() {
        assert!(needs_load(None, "2018"));
        assert!(!needs_load(None, ""));

        let selector = selector_for("2018");
        assert_eq!(displayed_year(Some(&selector)), Some("2018"));
        assert!(!needs_load(Some(&selector), "2018"));
        assert!(needs_load(Some(&selector), "2019"));
    }
}
