use anyhow::*;
use log::info;
use std::path::PathBuf;

// Download URL for the latest version of the Unicode character database
pub const ARABIC_SHAPING_URL: &str =
    "https://www.unicode.org/Public/UCD/latest/ucd/ArabicShaping.txt";

/// Where `ArabicShaping.txt` is read from.
#[derive(Clone, Debug)]
pub enum SourceLocation {
    Url(String),
    File(PathBuf),
}

fn download(url: &str) -> Result<String> {
    info!("Downloading '{url}'...");
    let data = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.bytes())
        .with_context(|| format!("Could not download '{url}'."))?;
    String::from_utf8(data.to_vec()).with_context(|| format!("'{url}' is not valid UTF-8."))
}

fn read_file(path: &PathBuf) -> Result<String> {
    info!("Reading '{}'...", path.display());
    std::fs::read_to_string(path).with_context(|| format!("Could not read '{}'.", path.display()))
}

/// Retrieves the source text. Any failure here is fatal, and happens before output is written.
pub fn load_source(location: &SourceLocation) -> Result<String> {
    let text = match location {
        SourceLocation::Url(url) => download(url)?,
        SourceLocation::File(path) => read_file(path)?,
    };
    info!("Loaded {} bytes of shaping data.", text.len());
    Ok(text)
}
