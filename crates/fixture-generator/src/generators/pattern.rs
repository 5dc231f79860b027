//! String value generators: identifiers and suffixed product names.

/// Identifier `prod-{provider}-{sequence}` with the sequence zero padded to 3 digits.
///
/// `position` is zero-based; the sequence number starts at 1.
pub fn product_id(provider_index: u8, position: usize) -> String {
    format!("prod-{provider_index}-{:03}", position + 1)
}

/// Template name followed by the rotated suffix, trimmed when the suffix is empty.
pub fn suffixed_name(base: &str, suffixes: &[&str; 5], position: usize) -> String {
    format!("{base} {}", suffixes[position % suffixes.len()])
        .trim()
        .to_string()
}
