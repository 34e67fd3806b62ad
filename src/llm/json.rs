/// Extract the first balanced JSON object from model output.
///
/// Models asked for strict JSON still wrap it in prose or markdown fences
/// often enough that callers must treat extraction as fallible. Returns the
/// object substring, or `None` when no balanced object exists. Brace
/// balancing is string-aware, so braces inside JSON string values do not
/// confuse the scan.
#[must_use]
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let bytes = text.as_bytes();

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match byte {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}
