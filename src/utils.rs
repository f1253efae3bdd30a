use crate::constants::{
    DOCX_SUFFIX, PLAIN_TEXT_MEDIA_TYPE, TXT_SUFFIX, WORD_DOCUMENT_MEDIA_TYPE,
};

/// Format a byte count as a human-readable size string
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Media type a file picker would report for the given filename, based on
/// its suffix; unknown suffixes yield an empty string
pub fn media_type_for_name(name: &str) -> String {
    if name.ends_with(TXT_SUFFIX) {
        PLAIN_TEXT_MEDIA_TYPE.to_string()
    } else if name.ends_with(DOCX_SUFFIX) {
        WORD_DOCUMENT_MEDIA_TYPE.to_string()
    } else {
        String::new()
    }
}
