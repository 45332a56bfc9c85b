use crate::filter::{BidiLookup, FilterMode, RecordFilter, ARABIC_SUPPRESSED_GROUPS};

/// A preset controlling which characters end up in the generated tables.
#[derive(Copy, Clone, Debug)]
pub struct GeneratorConfig {
    pub name: &'static str,
    pub description: &'static str,
    pub mode: FilterMode,
    pub suppressed_groups: &'static [&'static str],
}
impl GeneratorConfig {
    pub const FULL: GeneratorConfig = GeneratorConfig {
        name: "full",
        description: "Every character listed in ArabicShaping.txt, for every joining script.",
        mode: FilterMode::Full,
        suppressed_groups: &[],
    };
    pub const ARABIC: GeneratorConfig = GeneratorConfig {
        name: "arabic",
        description: "\
            Only characters with the Arabic_Letter bidi class. Joining groups used by other \
            scripts sharing that bidi class are left out of the group table.\
        ",
        mode: FilterMode::Arabic,
        suppressed_groups: ARABIC_SUPPRESSED_GROUPS,
    };

    pub const ALL: &'static [GeneratorConfig] = &[GeneratorConfig::FULL, GeneratorConfig::ARABIC];

    pub fn by_name(name: &str) -> Option<GeneratorConfig> {
        GeneratorConfig::ALL.iter().find(|x| x.name == name).copied()
    }

    pub fn filter<'a>(&self, bidi: &'a dyn BidiLookup) -> RecordFilter<'a> {
        RecordFilter::new(self.mode, bidi, self.suppressed_groups)
    }
}
