use super::{hex_literal, joining_types, BANNER};
use crate::tables::JoiningTables;

fn table<'a>(name: &str, entries: impl Iterator<Item = (u32, String, &'a str)>) -> String {
    let mut accum = format!("export const {name} = {{\n");
    for (code_point, value, comment) in entries {
        accum.push_str(&format!("  {}: {value}, // {comment}\n", hex_literal(code_point)));
    }
    accum.push_str("};\n");
    accum
}

pub fn emit(tables: &JoiningTables) -> String {
    let mut accum = format!("{BANNER}\n\n");

    accum.push_str("export const JoiningType = {\n");
    for (name, code) in joining_types() {
        accum.push_str(&format!("  {name}: \"{code}\",\n"));
    }
    accum.push_str("};\n\n");

    accum.push_str("export const JoiningGroup = {\n");
    for group in tables.group_names() {
        accum.push_str(&format!("  {group}: '{group}',\n"));
    }
    accum.push_str("};\n\n");

    accum.push_str(&table(
        "JOINING_TYPE",
        tables.types().map(|entry| {
            (entry.code_point, format!("JoiningType.{}", entry.value), entry.comment.as_str())
        }),
    ));
    accum.push('\n');
    accum.push_str(&table(
        "JOINING_GROUP",
        tables.groups().map(|entry| {
            (entry.code_point, format!("JoiningGroup.{}", entry.value), entry.comment.as_str())
        }),
    ));
    accum
}
