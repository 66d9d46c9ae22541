// src/core/sanitize.rs

/// Longest entity body we bother looking at, e.g. `#x0001F600`.
const MAX_ENTITY_LEN: usize = 10;

fn named_entity(name: &str) -> Option<char> {
    Some(match name {
        "quot" => '"',
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => return None,
    })
}

fn numeric_entity(body: &str) -> Option<char> {
    let code = if let Some(hex) = body.strip_prefix('x').or_else(|| body.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        body.parse::<u32>().ok()?
    };
    char::from_u32(code)
}

/// Decode HTML character references: the common named ones plus decimal and
/// hex numeric references. Anything unrecognised is copied through untouched.
pub fn unescape_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest[1..]
            .char_indices()
            .take(MAX_ENTITY_LEN + 1)
            .find(|&(_, c)| c == ';')
            .and_then(|(semi, _)| {
                let body = &rest[1..1 + semi];
                let ch = match body.strip_prefix('#') {
                    Some(num) => numeric_entity(num),
                    None => named_entity(body),
                }?;
                Some((ch, semi + 2))
            });

        match decoded {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_named_entities() {
        assert_eq!(
            unescape_entities("{&quot;name&quot;:&quot;Tom &amp; Jerry&quot;}"),
            r#"{"name":"Tom & Jerry"}"#
        );
        assert_eq!(unescape_entities("&lt;b&gt; it&apos;s"), "<b> it's");
    }

    #[test]
    fn decodes_numeric_entities() {
        assert_eq!(unescape_entities("it&#39;s"), "it's");
        assert_eq!(unescape_entities("&#x20AC;25"), "€25");
        assert_eq!(unescape_entities("&#X41;"), "A");
    }

    #[test]
    fn leaves_unknown_or_broken_entities() {
        assert_eq!(unescape_entities("AT&T"), "AT&T");
        assert_eq!(unescape_entities("&bogus;"), "&bogus;");
        assert_eq!(unescape_entities("&#xZZ;"), "&#xZZ;");
        assert_eq!(unescape_entities("trailing &"), "trailing &");
        assert_eq!(unescape_entities("&&amp;"), "&&");
    }
}
