//! Pulling a JSON object out of free-form model output

use serde::de::DeserializeOwned;

/// Models wrap JSON in prose or code fences; keep the outermost object
pub(crate) fn extract_json_object(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    (end > start).then(|| &response[start..=end])
}

/// Repairs the usual near-JSON mistakes (single quotes, Python booleans, trailing commas)
///
/// Quotes are only swapped when the text has no double quotes at all, so
/// apostrophes inside proper strings survive.
pub(crate) fn fix_json_format(json_str: &str) -> String {
    let quoted = if json_str.contains('"') {
        json_str.to_string()
    } else {
        json_str.replace('\'', "\"")
    };
    let repaired = quoted.replace("True", "true").replace("False", "false");
    strip_trailing_commas(&repaired)
}

/// Drop a comma that only has whitespace before the closing `}` or `]`
fn strip_trailing_commas(json_str: &str) -> String {
    let mut out = String::with_capacity(json_str.len());
    for (i, c) in json_str.char_indices() {
        if c == ',' {
            let rest = json_str[i + 1..].trim_start();
            if rest.starts_with('}') || rest.starts_with(']') {
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Parse the first JSON object in `response`, retrying once after repair
pub(crate) fn parse_json_response<T: DeserializeOwned>(response: &str) -> Result<T, String> {
    let candidate = extract_json_object(response)
        .ok_or_else(|| "response contains no JSON object".to_string())?;

    match serde_json::from_str(candidate) {
        Ok(value) => Ok(value),
        Err(first) => serde_json::from_str(&fix_json_format(candidate))
            .map_err(|_| format!("invalid JSON: {}", first)),
    }
}
