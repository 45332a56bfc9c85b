//! Restricting the generated tables to the Arabic script.
//!
//! The `ArabicShaping.txt` file covers every script that uses cursive joining. Consumers that
//! only shape Arabic want the joining type of every Arabic letter, but only the joining groups
//! that Arabic fonts actually distinguish.

use crate::classify::ClassifiedRecord;
use log::debug;
use std::collections::BTreeSet;
use unicode_bidi::{bidi_class, BidiClass};

/// Joining groups that are dropped from the group table in [`FilterMode::Arabic`].
///
/// These groups belong to scripts whose letters share the `Arabic_Letter` bidi class with
/// Arabic (Syriac and Hanifi Rohingya), so the bidi check alone does not remove them. Characters in these groups keep their
/// joining type entry.
pub const ARABIC_SUPPRESSED_GROUPS: &[&str] = &[
    // Syriac
    "Alaph",
    "Beth",
    "Dalath_Rish",
    "E",
    "Fe",
    "Final_Semkath",
    "Gamal",
    "He",
    "Heth",
    "Kaph",
    "Khaph",
    "Lamadh",
    "Mim",
    "Nun",
    "Pe",
    "Qaph",
    "Reversed_Pe",
    "Sadhe",
    "Semkath",
    "Shin",
    "Swash_Kaph",
    "Syriac_Waw",
    "Taw",
    "Teth",
    "Teth_Garshuni",
    "Yudh",
    "Yudh_He",
    "Zain",
    "Zhain",
    // Syriac letters for Persian
    "Persian_Bheth",
    "Persian_Dhalath",
    "Persian_Ghamal",
    // Syriac letters for Malayalam
    "Malayalam_Bha",
    "Malayalam_Ja",
    "Malayalam_Lla",
    "Malayalam_Llla",
    "Malayalam_Nga",
    "Malayalam_Nna",
    "Malayalam_Nnna",
    "Malayalam_Nya",
    "Malayalam_Ra",
    "Malayalam_Ssa",
    "Malayalam_Tta",
    // Hanifi Rohingya
    "Hanifi_Rohingya_Kinna_Ya",
    "Hanifi_Rohingya_Pa",
];

/// Which records end up in the generated tables.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum FilterMode {
    /// Every record is emitted in both tables.
    Full,
    /// Only `Arabic_Letter` characters are emitted, and suppressed groups are left out of the
    /// group table.
    Arabic,
}

/// A source of bidi class information for code points.
pub trait BidiLookup {
    fn bidi_class(&self, code_point: u32) -> Option<BidiClass>;
}
impl<F: Fn(u32) -> Option<BidiClass>> BidiLookup for F {
    fn bidi_class(&self, code_point: u32) -> Option<BidiClass> {
        self(code_point)
    }
}

/// Looks up bidi classes in the Unicode character database.
#[derive(Copy, Clone, Debug, Default)]
pub struct UcdBidi;
impl BidiLookup for UcdBidi {
    fn bidi_class(&self, code_point: u32) -> Option<BidiClass> {
        char::from_u32(code_point).map(bidi_class)
    }
}

/// Which tables a record is admitted to.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum Admission {
    Excluded,
    TypeOnly,
    TypeAndGroup,
}
impl Admission {
    pub fn has_type(self) -> bool {
        self != Admission::Excluded
    }
    pub fn has_group(self) -> bool {
        self == Admission::TypeAndGroup
    }
}

/// Decides which tables each classified record belongs to.
pub struct RecordFilter<'a> {
    mode: FilterMode,
    bidi: &'a dyn BidiLookup,
    suppressed: BTreeSet<&'a str>,
}
impl<'a> RecordFilter<'a> {
    pub fn new(mode: FilterMode, bidi: &'a dyn BidiLookup, suppressed: &[&'a str]) -> Self {
        RecordFilter { mode, bidi, suppressed: suppressed.iter().copied().collect() }
    }

    /// A filter that admits every record to both tables.
    pub fn full() -> RecordFilter<'static> {
        RecordFilter { mode: FilterMode::Full, bidi: &UcdBidi, suppressed: BTreeSet::new() }
    }

    pub fn is_suppressed(&self, group: &str) -> bool {
        self.suppressed.contains(group)
    }

    pub fn admit(&self, record: &ClassifiedRecord) -> Admission {
        match self.mode {
            FilterMode::Full => Admission::TypeAndGroup,
            FilterMode::Arabic => {
                let bidi_class = self.bidi.bidi_class(record.code_point);
                if bidi_class != Some(BidiClass::AL) {
                    debug!("Excluding U+{:04X} ({:?})", record.code_point, bidi_class);
                    Admission::Excluded
                } else if self.is_suppressed(record.joining_group.name()) {
                    debug!(
                        "Suppressing group {} for U+{:04X}",
                        record.joining_group, record.code_point
                    );
                    Admission::TypeOnly
                } else {
                    Admission::TypeAndGroup
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{JoiningGroup, JoiningType};

    fn record(code_point: u32, group: &str) -> ClassifiedRecord {
        ClassifiedRecord {
            code_point,
            joining_type: JoiningType::DualJoining,
            joining_group: JoiningGroup::from_raw(group),
            comment: String::new(),
        }
    }

    fn fixed(class: BidiClass) -> impl Fn(u32) -> Option<BidiClass> {
        move |_| Some(class)
    }

    #[test]
    fn full_mode_admits_everything() {
        let filter = RecordFilter::full();
        assert_eq!(filter.admit(&record(0x0710, "ALAPH")), Admission::TypeAndGroup);
        assert_eq!(filter.admit(&record(0x07CA, "No_Joining_Group")), Admission::TypeAndGroup);
    }

    #[test]
    fn arabic_mode_requires_arabic_letter() {
        let al = fixed(BidiClass::AL);
        let rtl = fixed(BidiClass::R);
        let none = |_: u32| -> Option<BidiClass> { None };

        let filter = RecordFilter::new(FilterMode::Arabic, &al, ARABIC_SUPPRESSED_GROUPS);
        assert_eq!(filter.admit(&record(0x08A0, "FEH")), Admission::TypeAndGroup);

        let filter = RecordFilter::new(FilterMode::Arabic, &rtl, ARABIC_SUPPRESSED_GROUPS);
        assert_eq!(filter.admit(&record(0x08A0, "FEH")), Admission::Excluded);

        let filter = RecordFilter::new(FilterMode::Arabic, &none, ARABIC_SUPPRESSED_GROUPS);
        assert_eq!(filter.admit(&record(0x08A0, "FEH")), Admission::Excluded);
    }

    #[test]
    fn arabic_mode_suppresses_groups() {
        let al = fixed(BidiClass::AL);
        let filter = RecordFilter::new(FilterMode::Arabic, &al, ARABIC_SUPPRESSED_GROUPS);
        let admission = filter.admit(&record(0x0710, "ALAPH"));
        assert_eq!(admission, Admission::TypeOnly);
        assert!(admission.has_type());
        assert!(!admission.has_group());

        let filter = RecordFilter::new(FilterMode::Arabic, &al, &[crate::NO_JOINING_GROUP]);
        assert_eq!(filter.admit(&record(0x0627, "No_Joining_Group")), Admission::TypeOnly);
    }

    #[test]
    fn suppressed_groups_are_canonical() {
        for group in ARABIC_SUPPRESSED_GROUPS {
            assert_eq!(crate::canonicalize_group(group), *group);
        }
    }

    #[test]
    fn ucd_lookup() {
        assert_eq!(UcdBidi.bidi_class(0x0627), Some(BidiClass::AL));
        assert_eq!(UcdBidi.bidi_class(0x0041), Some(BidiClass::L));
        assert_eq!(UcdBidi.bidi_class(0xD800), None);

        // letters added to Arabic Extended-B and to Hanifi Rohingya
        assert_eq!(UcdBidi.bidi_class(0x0870), Some(BidiClass::AL));
        assert_eq!(UcdBidi.bidi_class(0x08BE), Some(BidiClass::AL));
        assert_eq!(UcdBidi.bidi_class(0x10D19), Some(BidiClass::AL));
    }

    #[test]
    fn hanifi_rohingya_groups_are_suppressed() {
        let filter = RecordFilter::new(FilterMode::Arabic, &UcdBidi, ARABIC_SUPPRESSED_GROUPS);
        let admission = filter.admit(&record(0x10D19, "HANIFI ROHINGYA KINNA YA"));
        assert_eq!(admission, Admission::TypeOnly);
        let admission = filter.admit(&record(0x10D02, "HANIFI ROHINGYA PA"));
        assert_eq!(admission, Admission::TypeOnly);
        assert_eq!(filter.admit(&record(0x0870, "ALEF")), Admission::TypeAndGroup);
    }
}
