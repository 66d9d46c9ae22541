// src/core/html.rs
//
// Byte offsets found in the lowercased copy are valid in the original:
// ASCII lowercasing never changes lengths.

/// Locate the next `open … close` block at or after `from` in an already
/// lowercased document. Returns (start of open tag, end of open tag, end of block).
/// Self-closing tags yield an empty body.
fn next_tag_block(lc: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize, usize)> {
    let mut from = from;
    loop {
        let start = lc.get(from..)?.find(open)? + from;
        let after_name = start + open.len();

        // `<script` must not match `<scripts`
        match lc[after_name..].chars().next() {
            Some(c) if c == '>' || c == '/' || c.is_ascii_whitespace() => {}
            _ => {
                from = after_name;
                continue;
            }
        }

        let open_end = lc[start..].find('>')? + start + 1;
        if lc[..open_end].ends_with("/>") {
            return Some((start, open_end, open_end));
        }
        let end_rel = lc[open_end..].find(close)?;
        return Some((start, open_end, open_end + end_rel + close.len()));
    }
}

fn inner_after_open_tag(block: &str, open_len: usize) -> &str {
    let body = &block[open_len..];
    match body.rfind('<') {
        Some(cs) => &body[..cs],
        None => body,
    }
}

/// Text of every `<script>` element, in document order.
pub fn script_texts(html: &str) -> Vec<&str> {
    let lc = html.to_ascii_lowercase();
    let mut out = Vec::new();
    let mut from = 0;

    while let Some((start, open_end, end)) = next_tag_block(&lc, "<script", "</script>", from) {
        if end > open_end {
            out.push(inner_after_open_tag(&html[start..end], open_end - start));
        }
        from = end;
    }
    out
}
