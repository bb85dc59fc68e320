/// Decodes HTML character references in an attribute value
///
/// Supports the named references that appear in URLs in practice
/// (`&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`, `&#39;`, `&nbsp;`) and
/// decimal (`&#47;`) or hexadecimal (`&#x2F;`) numeric references.
/// Unknown or malformed references are left untouched.
///
/// # Examples
///
/// ```
/// use ripple_check::url::decode_entities;
///
/// assert_eq!(decode_entities("/search?a=1&amp;b=2"), "/search?a=1&b=2");
/// assert_eq!(decode_entities("/a&#x2F;b"), "/a/b");
/// ```
pub fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }

    let mut decoded = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find('&') {
        decoded.push_str(&rest[..start]);
        let candidate = &rest[start..];

        match candidate.find(';').and_then(|end| {
            decode_reference(&candidate[1..end]).map(|c| (c, end))
        }) {
            Some((c, end)) => {
                decoded.push(c);
                rest = &candidate[end + 1..];
            }
            None => {
                decoded.push('&');
                rest = &candidate[1..];
            }
        }
    }

    decoded.push_str(rest);
    decoded
}

/// Decodes the text between `&` and `;`
fn decode_reference(reference: &str) -> Option<char> {
    if let Some(numeric) = reference.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    match reference {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    }
}
