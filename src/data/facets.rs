//! Selector options derived from the full record set

use std::collections::HashSet;

use super::record::Record;

/// One selectable option: the value a selector holds and the text it shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption<T> {
    pub value: T,
    pub label: String,
}

pub type PlantFacet = FacetOption<String>;
pub type YearFacet = FacetOption<i32>;

/// Plant and year options for every selector, computed once per dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Facets {
    pub plants: Vec<PlantFacet>,
    pub years: Vec<YearFacet>,
}

impl Facets {
    pub fn build(records: &[Record]) -> Self {
        profiling::scope!("Facets::build");
        Self {
            plants: plant_facets(records),
            years: year_facets(records),
        }
    }

    pub fn first_plant(&self) -> Option<&str> {
        self.plants.first().map(|f| f.value.as_str())
    }

    pub fn first_year(&self) -> Option<i32> {
        self.years.first().map(|f| f.value)
    }
}

/// Distinct plant identifiers in first-seen order, labelled "id - name".
///
/// Rows missing either the identifier or the name are skipped here only.
pub fn plant_facets(records: &[Record]) -> Vec<PlantFacet> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(|r| Some((r.plant_id()?, r.plant_name()?)))
        .filter(|(id, _)| seen.insert(*id))
        .map(|(id, name)| FacetOption {
            value: id.to_string(),
            label: format!("{} - {}", id, name),
        })
        .collect()
}

/// Distinct observation years in first-seen order (not sorted).
///
/// Rows whose date does not parse contribute nothing.
pub fn year_facets(records: &[Record]) -> Vec<YearFacet> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(Record::year)
        .filter(|year| seen.insert(*year))
        .map(|year| FacetOption {
            value: year,
            label: year.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::csv::parse_csv;

    fn records(text: &str) -> Vec<Record> {
        parse_csv(text).records
    }

    #[test]
    fn test_plant_facets_first_seen_unique() {
        let rs = records(
            "植物編號,植物名稱,日期\n\
             P2,楓香,2023-01-01\n\
             P1,樟樹,2023-01-02\n\
             P2,楓香,2023-01-03\n\
             P3,榕樹,2023-01-04\n\
             P1,樟樹,2023-01-05\n",
        );
        let facets = plant_facets(&rs);
        let ids: Vec<&str> = facets.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(ids, vec!["P2", "P1", "P3"]);
        assert_eq!(facets[1].label, "P1 - 樟樹");
    }

    #[test]
    fn test_plant_facets_skip_rows_missing_fields() {
        // First P1 row has no name value, so P1's label comes from its later row.
        // An empty name is present, just blank.
        let rs = records("植物編號,植物名稱\nP1\nP2,楓香\nP1,樟樹\nP3,\n");
        let facets = plant_facets(&rs);
        let labels: Vec<&str> = facets.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["P2 - 楓香", "P1 - 樟樹", "P3 - "]);
    }

    #[test]
    fn test_year_facets_keep_insertion_order() {
        let rs = records(
            "植物編號,植物名稱,日期\n\
             P1,樟樹,2023-05-01\n\
             P1,樟樹,2022-05-01\n\
             P1,樟樹,2023-06-01\n\
             P2,楓香,2021-01-01\n",
        );
        let years: Vec<i32> = year_facets(&rs).iter().map(|f| f.value).collect();
        assert_eq!(years, vec![2023, 2022, 2021]);
    }

    #[test]
    fn test_year_facets_ignore_unparseable_dates() {
        let rs = records("植物編號,日期\nP1,someday\nP1,2020/02/02\nP2\n");
        let facets = year_facets(&rs);
        assert_eq!(facets.len(), 1);
        assert_eq!(facets[0].value, 2020);
        assert_eq!(facets[0].label, "2020");
        // The records themselves are all still there
        assert_eq!(rs.len(), 3);
    }

    #[test]
    fn test_build_and_lookups() {
        let rs = records("植物編號,植物名稱,日期\nP1,樟樹,2023-03-05\n");
        let facets = Facets::build(&rs);
        assert_eq!(facets.first_plant(), Some("P1"));
        assert_eq!(facets.first_year(), Some(2023));
        assert_eq!(facets.plants[0].label, "P1 - 樟樹");

        let empty = Facets::build(&[]);
        assert_eq!(empty.first_plant(), None);
        assert_eq!(empty.first_year(), None);
    }
}
