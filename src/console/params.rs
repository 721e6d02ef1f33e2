use std::collections::BTreeMap;

/// Splits on whitespace outside double quotes and drops the quotes, so
/// `-path="/home/my docs"` stays one token. An unterminated quote runs to the
/// end of the line.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;

    for ch in input.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !cur.is_empty() {
                    out.push(std::mem::take(&mut cur));
                }
            }
            c => cur.push(c),
        }
    }
    if !cur.is_empty() {
        out.push(cur);
    }
    out
}

/// Parses `-key=value` arguments after the command word. Keys are
/// lowercased and a bare `-flag` maps to `"true"`. Tokens without a leading
/// `-` are ignored.
pub fn parse_params(command: &str) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for arg in tokenize(command).into_iter().skip(1) {
        let Some(arg) = arg.strip_prefix('-') else {
            continue;
        };
        match arg.split_once('=') {
            Some((key, value)) => {
                out.insert(key.to_lowercase(), value.to_string());
            }
            None => {
                out.insert(arg.to_lowercase(), "true".to_string());
            }
        }
    }
    out
}
