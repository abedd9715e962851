//! Active dataset and the date selector driving the map, legend and chart.
//!
//! A [`Session`] holds everything derived from one dataset (one year). It is
//! built in full before it replaces the previous one, so the views never mix
//! two datasets. The [`TemporalSelector`] owns the session and the current
//! position on its timeline, and pushes every change to a [`ViewSink`].

use crate::aggregate::{aggregate, CountTable};
use crate::chart::{class_bars, ClassBar};
use crate::legend::{layout_legend, LegendLayout, LegendSizing};
use crate::series::{PondIndex, PondSeries};
use etang_core::dryness::DrynessWindow;
use etang_core::palette::ColorTable;
use etang_core::record::{PondId, Record, Timestamp};
use etang_core::style::MapFilters;
use etang_core::{EtangError, Result};

/// Receiver of view updates (map renderer, legend container, chart container).
pub trait ViewSink {
    fn apply_filters(&mut self, filters: &MapFilters);
    fn render_legend(&mut self, legend: &LegendLayout);
    fn render_chart(&mut self, timestamp: &Timestamp, bars: &[ClassBar]);
}

/// Everything derived from one dataset.
#[derive(Debug, Clone)]
pub struct Session {
    label: String,
    records: Vec<Record>,
    timeline: Vec<Timestamp>,
    counts: CountTable,
    ponds: PondIndex,
}

impl Session {
    /// Fails with `EmptyDataset` when no record carries a date.
    pub fn build(label: impl Into<String>, records: Vec<Record>) -> Result<Self> {
        let label = label.into();
        let counts = aggregate(&records);
        let timeline = counts.timeline();
        if timeline.is_empty() {
            return Err(EtangError::EmptyDataset(label));
        }
        let ponds = PondIndex::build(&records);
        log::info!(
            "[Etangs] session: {} built with {} records, {} dates, {} ponds",
            label,
            records.len(),
            timeline.len(),
            ponds.len()
        );
        Ok(Self {
            label,
            records,
            timeline,
            counts,
            ponds,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn timeline(&self) -> &[Timestamp] {
        &self.timeline
    }

    pub fn counts(&self) -> &CountTable {
        &self.counts
    }

    pub fn ponds(&self) -> &PondIndex {
        &self.ponds
    }

    /// `None` for ponds absent from this dataset.
    pub fn pond_series(&self, pond_id: &PondId) -> Option<&PondSeries> {
        self.ponds.get(pond_id)
    }
}

/// Everything the views show for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub timestamp: Timestamp,
    pub filters: MapFilters,
    pub legend: LegendLayout,
    pub bars: Vec<ClassBar>,
}

/// Current position on the active session's timeline.
#[derive(Debug, Clone)]
pub struct TemporalSelector {
    colors: &'static ColorTable,
    sizing: LegendSizing,
    window: DrynessWindow,
    session: Session,
    index: usize,
}

impl TemporalSelector {
    /// Starts at the first date. Nothing is emitted until [`refresh`](Self::refresh).
    pub fn new(
        colors: &'static ColorTable,
        sizing: LegendSizing,
        window: DrynessWindow,
        session: Session,
    ) -> Self {
        Self {
            colors,
            sizing,
            window,
            session,
            index: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.session.timeline.len()
    }

    /// A built session always has at least one date.
    pub fn is_empty(&self) -> bool {
        self.session.timeline.is_empty()
    }

    pub fn active_timestamp(&self) -> &Timestamp {
        &self.session.timeline[self.index]
    }

    pub fn window(&self) -> DrynessWindow {
        self.window
    }

    pub fn colors(&self) -> &'static ColorTable {
        self.colors
    }

    /// Move to position `index`. Out-of-range positions are rejected and
    /// leave the selector and the views untouched.
    pub fn set_index<S: ViewSink>(&mut self, index: usize, sink: &mut S) -> Result<()> {
        let len = self.len();
        if index >= len {
            log::warn!("[Etangs] selector: rejected index {} (len {})", index, len);
            return Err(EtangError::SelectorOutOfRange { index, len });
        }
        self.index = index;
        self.refresh(sink);
        Ok(())
    }

    /// Move to the position of `timestamp`.
    pub fn select<S: ViewSink>(&mut self, timestamp: &Timestamp, sink: &mut S) -> Result<()> {
        let index = self
            .session
            .timeline
            .binary_search(timestamp)
            .map_err(|_| EtangError::UnknownDate(timestamp.to_string()))?;
        self.set_index(index, sink)
    }

    /// Replace the whole dataset and go back to its first date.
    ///
    /// The new session is built before anything changes; if that fails the
    /// previous session stays active and nothing is emitted.
    pub fn switch_dataset<S: ViewSink>(
        &mut self,
        label: impl Into<String>,
        records: Vec<Record>,
        sink: &mut S,
    ) -> Result<()> {
        let session = Session::build(label, records)?;
        self.install(session, sink);
        Ok(())
    }

    /// Swap in an already built session, back at its first date.
    pub fn install<S: ViewSink>(&mut self, session: Session, sink: &mut S) {
        log::info!(
            "[Etangs] selector: {} -> {}",
            self.session.label,
            session.label
        );
        self.session = session;
        self.index = 0;
        self.refresh(sink);
    }

    /// Views for the active snapshot.
    pub fn frame(&self) -> Frame {
        let timestamp = self.active_timestamp().clone();
        let counts = self
            .session
            .counts
            .get(&timestamp)
            .copied()
            .unwrap_or_default();
        Frame {
            filters: MapFilters::for_timestamp(&timestamp, self.window),
            legend: layout_legend(self.colors, Some(&counts), &self.sizing),
            bars: class_bars(&counts, self.colors),
            timestamp,
        }
    }

    /// Push the active snapshot: map filters, then legend, then chart.
    pub fn refresh<S: ViewSink>(&self, sink: &mut S) {
        let frame = self.frame();
        sink.apply_filters(&frame.filters);
        sink.render_legend(&frame.legend);
        sink.render_chart(&frame.timestamp, &frame.bars);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etang_core::class_code::ClassCode;
    use etang_core::palette::Palette;
    use etang_core::style::Filter;

    #[derive(Debug, Clone, PartialEq)]
    enum Update {
        Filters(MapFilters),
        Legend(LegendLayout),
        Chart(Timestamp, Vec<ClassBar>),
    }

    #[derive(Default)]
    struct RecordingSink(Vec<Update>);

    impl ViewSink for RecordingSink {
        fn apply_filters(&mut self, filters: &MapFilters) {
            self.0.push(Update::Filters(filters.clone()));
        }
        fn render_legend(&mut self, legend: &LegendLayout) {
            self.0.push(Update::Legend(legend.clone()));
        }
        fn render_chart(&mut self, timestamp: &Timestamp, bars: &[ClassBar]) {
            self.0.push(Update::Chart(timestamp.clone(), bars.to_vec()));
        }
    }

    fn year_2018() -> Vec<Record> {
        vec![
            Record::new("2018-01", "a", Some(3)),
            Record::new("2018-01", "b", Some(3)),
            Record::new("2018-02", "a", Some(9)),
        ]
    }

    fn year_2019() -> Vec<Record> {
        vec![
            Record::new("2019-05-01", "a", Some(1)).with_dry(true),
            Record::new("2019-06-01", "a", Some(2)),
            Record::new("2019-07-01", "c", Some(2)),
        ]
    }

    fn selector() -> TemporalSelector {
        let session = Session::build("2018", year_2018()).unwrap();
        TemporalSelector::new(
            Palette::Etangs.table(),
            LegendSizing::default(),
            DrynessWindow::default(),
            session,
        )
    }

    fn bar_count(bars: &[ClassBar], code: u8) -> u32 {
        bars.iter().find(|b| b.code == code).map(|b| b.count).unwrap_or(0)
    }

    #[test]
    fn test_set_index_emits_in_order() {
        let mut selector = selector();
        let mut sink = RecordingSink::default();
        selector.set_index(1, &mut sink).unwrap();

        assert_eq!(sink.0.len(), 3);
        match &sink.0[0] {
            Update::Filters(filters) => {
                assert_eq!(filters.date, Filter::DateEquals(Timestamp::from("2018-02")))
            }
            other => panic!("expected filters first, got {:?}", other),
        }
        match &sink.0[1] {
            Update::Legend(legend) => {
                let cell = legend.cell(ClassCode::new(9).unwrap()).unwrap();
                assert_eq!(cell.count, Some(1));
                assert_eq!(cell.size_px, LegendSizing::default().max_px);
            }
            other => panic!("expected legend second, got {:?}", other),
        }
        match &sink.0[2] {
            Update::Chart(timestamp, bars) => {
                assert_eq!(timestamp, &Timestamp::from("2018-02"));
                assert_eq!(bar_count(bars, 9), 1);
                assert_eq!(bar_count(bars, 3), 0);
            }
            other => panic!("expected chart third, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_is_rejected_without_side_effects() {
        let mut selector = selector();
        let mut sink = RecordingSink::default();
        selector.set_index(1, &mut sink).unwrap();
        sink.0.clear();

        let err = selector.set_index(2, &mut sink).unwrap_err();
        assert!(matches!(err, EtangError::SelectorOutOfRange { index: 2, len: 2 }));
        assert_eq!(selector.index(), 1);
        assert!(sink.0.is_empty());
    }

    #[test]
    fn test_switch_dataset_resets_and_replaces_counts() {
        let mut selector = selector();
        let mut sink = RecordingSink::default();
        selector.set_index(1, &mut sink).unwrap();
        sink.0.clear();

        selector.switch_dataset("2019", year_2019(), &mut sink).unwrap();
        assert_eq!(selector.index(), 0);
        assert_eq!(selector.session().label(), "2019");
        assert_eq!(selector.active_timestamp(), &Timestamp::from("2019-05-01"));
        assert!(selector.session().counts().get(&Timestamp::from("2018-01")).is_none());
        assert_eq!(selector.len(), 3);

        assert_eq!(sink.0.len(), 3);
        match &sink.0[2] {
            Update::Chart(timestamp, bars) => {
                assert_eq!(timestamp, &Timestamp::from("2019-05-01"));
                assert_eq!(bar_count(bars, 1), 1);
                assert_eq!(bar_count(bars, 3), 0);
                assert_eq!(bars.iter().map(|b| b.count).sum::<u32>(), 1);
            }
            other => panic!("expected chart, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_switch_keeps_previous_session() {
        let mut selector = selector();
        let mut sink = RecordingSink::default();
        selector.set_index(1, &mut sink).unwrap();
        sink.0.clear();

        let err = selector.switch_dataset("2020", Vec::new(), &mut sink).unwrap_err();
        assert!(matches!(err, EtangError::EmptyDataset(label) if label == "2020"));
        assert_eq!(selector.session().label(), "2018");
        assert_eq!(selector.index(), 1);
        assert!(sink.0.is_empty());
    }

    #[test]
    fn test_select_by_timestamp() {
        let mut selector = selector();
        let mut sink = RecordingSink::default();
        selector.select(&Timestamp::from("2018-02"), &mut sink).unwrap();
        assert_eq!(selector.index(), 1);
        assert!(selector.select(&Timestamp::from("2018-03"), &mut sink).is_err());
        assert_eq!(selector.index(), 1);
    }

    #[test]
    fn test_refresh_is_repeatable() {
        let selector = selector();
        let mut first = RecordingSink::default();
        let mut second = RecordingSink::default();
        selector.refresh(&mut first);
        selector.refresh(&mut second);
        assert_eq!(first.0, second.0);
    }

    #[test]
    fn test_pond_series_lookup() {
        let selector = selector();
        assert_eq!(
            selector.session().pond_series(&PondId::from("a")).map(|s| s.points.len()),
            Some(2)
        );
        assert!(selector.session().pond_series(&PondId::from("zz")).is_none());
    }
}
