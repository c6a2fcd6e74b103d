use crate::data::record::FundingRecord;
use std::collections::BTreeSet;

//an immutable, ordered collection of funding records
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<FundingRecord>,
}

impl Dataset {
    //row order is preserved as given
    pub fn new(records: Vec<FundingRecord>) -> Self {
        Dataset { records }
    }

    pub fn records(&self) -> &[FundingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FundingRecord> {
        self.records.iter()
    }

    //distinct startup names, sorted
    pub fn startup_names(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.startup.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    //distinct investor names across every record, sorted
    pub fn investor_names(&self) -> Vec<String> {
        self.records
            .iter()
            .flat_map(|record| record.investors.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    //distinct years present in the data, ascending
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(FundingRecord::year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a FundingRecord;
    type IntoIter = std::slice::Iter<'a, FundingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
