use crate::{
    classify::{classify, ClassifiedRecord, JoiningGroup, JoiningType},
    error::Result,
    filter::RecordFilter,
    parse::ShapingRecord,
};
use log::info;
use std::collections::{btree_map, BTreeMap, BTreeSet};

/// A single generated table entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableEntry<V> {
    pub code_point: u32,
    pub value: V,
    /// Documentation for the entry, not used by consumers.
    pub comment: String,
}

/// The finished joining type and joining group tables.
///
/// Both tables are keyed by code point and iterate in ascending order. Every code point in the
/// group table also has an entry in the type table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JoiningTables {
    types: BTreeMap<u32, TableEntry<JoiningType>>,
    groups: BTreeMap<u32, TableEntry<JoiningGroup>>,
    group_names: BTreeSet<JoiningGroup>,
}
impl JoiningTables {
    /// Classifies and filters `records`, then folds them into tables.
    pub fn build<'a>(
        records: impl IntoIterator<Item = Result<ShapingRecord<'a>>>,
        filter: &RecordFilter<'_>,
    ) -> Result<JoiningTables> {
        let tables = records
            .into_iter()
            .map(|record| classify(&record?))
            .try_fold(JoiningTables::default(), |tables, record| {
                record.map(|record| tables.with_record(filter, record))
            })?
            .finish();
        info!(
            "Built tables: {} joining types, {} joining groups, {} distinct groups",
            tables.types.len(),
            tables.groups.len(),
            tables.group_names.len(),
        );
        Ok(tables)
    }

    fn with_record(mut self, filter: &RecordFilter<'_>, record: ClassifiedRecord) -> Self {
        let admission = filter.admit(&record);
        if admission.has_type() {
            let ClassifiedRecord { code_point, joining_type, joining_group, comment } = record;
            if admission.has_group() {
                let entry = TableEntry { code_point, value: joining_group, comment: comment.clone() };
                self.groups.insert(code_point, entry);
            } else {
                // a later record may have replaced the group of an earlier one
                self.groups.remove(&code_point);
            }
            self.types.insert(code_point, TableEntry { code_point, value: joining_type, comment });
        }
        self
    }

    fn finish(mut self) -> Self {
        self.group_names = self.groups.values().map(|entry| entry.value.clone()).collect();
        self
    }

    pub fn joining_type(&self, code_point: u32) -> Option<JoiningType> {
        self.types.get(&code_point).map(|entry| entry.value)
    }

    pub fn joining_group(&self, code_point: u32) -> Option<&JoiningGroup> {
        self.groups.get(&code_point).map(|entry| &entry.value)
    }

    /// The joining type entries in ascending code point order.
    pub fn types(&self) -> btree_map::Values<'_, u32, TableEntry<JoiningType>> {
        self.types.values()
    }

    /// The joining group entries in ascending code point order.
    pub fn groups(&self) -> btree_map::Values<'_, u32, TableEntry<JoiningGroup>> {
        self.groups.values()
    }

    /// Every distinct joining group in the group table, sorted by name.
    pub fn group_names(&self) -> &BTreeSet<JoiningGroup> {
        &self.group_names
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
