use super::{hex_literal, joining_types, BANNER};
use crate::tables::JoiningTables;

const DERIVES: &str = "#[derive(Copy, Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq)]\n\
                       #[allow(non_camel_case_types)]\n";

fn enum_def<'a>(
    name: &str,
    accessor: &str,
    ret_ty: &str,
    members: impl Iterator<Item = (&'a str, String)> + Clone,
) -> String {
    let mut accum = format!("{DERIVES}pub enum {name} {{\n");
    for (member, _) in members.clone() {
        accum.push_str(&format!("    {member},\n"));
    }
    accum.push_str("}\n");

    accum.push_str(&format!("impl {name} {{\n"));
    accum.push_str(&format!("    pub const fn {accessor}(self) -> {ret_ty} {{\n"));
    accum.push_str("        match self {\n");
    for (member, value) in members {
        accum.push_str(&format!("            {name}::{member} => {value},\n"));
    }
    accum.push_str("        }\n    }\n}\n");
    accum
}

fn table<'a>(
    name: &str,
    fn_name: &str,
    ty: &str,
    entries: impl Iterator<Item = (u32, &'a str, &'a str)>,
) -> String {
    let mut accum = format!("pub static {name}: &[(u32, {ty})] = &[\n");
    for (code_point, member, comment) in entries {
        accum.push_str(&format!(
            "    ({}, {ty}::{member}), // {comment}\n",
            hex_literal(code_point)
        ));
    }
    accum.push_str("];\n\n");

    accum.push_str(&format!("pub fn {fn_name}(code_point: u32) -> Option<{ty}> {{\n"));
    accum.push_str(&format!(
        "    match {name}.binary_search_by_key(&code_point, |entry| entry.0) {{\n"
    ));
    accum.push_str(&format!("        Ok(idx) => Some({name}[idx].1),\n"));
    accum.push_str("        Err(_) => None,\n");
    accum.push_str("    }\n}\n");
    accum
}

pub fn emit(tables: &JoiningTables) -> String {
    let mut accum = format!("{BANNER}\n\n");

    accum.push_str(&enum_def(
        "JoiningType",
        "code",
        "char",
        joining_types().map(|(name, code)| (name, format!("'{code}'"))),
    ));
    accum.push('\n');
    accum.push_str(&enum_def(
        "JoiningGroup",
        "name",
        "&'static str",
        tables.group_names().iter().map(|group| (group.name(), format!("\"{group}\""))),
    ));
    accum.push('\n');

    accum.push_str(&table(
        "JOINING_TYPE",
        "joining_type",
        "JoiningType",
        tables.types().map(|entry| (entry.code_point, entry.value.name(), entry.comment.as_str())),
    ));
    accum.push('\n');
    accum.push_str(&table(
        "JOINING_GROUP",
        "joining_group",
        "JoiningGroup",
        tables.groups().map(|entry| (entry.code_point, entry.value.name(), entry.comment.as_str())),
    ));
    accum
}
