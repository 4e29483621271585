//! Record selection by plant and year

use super::record::Record;

/// What one chart panel is currently showing.
///
/// `None` stands for an empty selector and matches no records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub plant: Option<String>,
    pub year: Option<i32>,
}

/// Records for `plant` observed in calendar year `year`, in dataset order.
///
/// Rows with an unparseable date never match.
pub fn filter_records<'a>(records: &'a [Record], plant: &str, year: i32) -> Vec<&'a Record> {
    profiling::scope!("filter_records");
    records
        .iter()
        .filter(|r| r.plant_id() == Some(plant) && r.year() == Some(year))
        .collect()
}

/// Same as [`filter_records`], driven by a panel selection
pub fn filter_selection<'a>(records: &'a [Record], selection: &Selection) -> Vec<&'a Record> {
    match (selection.plant.as_deref(), selection.year) {
        (Some(plant), Some(year)) => filter_records(records, plant, year),
        _ => Vec::new(),
    }
}
