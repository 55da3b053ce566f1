use serde::de::IgnoredAny;
use std::borrow::Cow;
use std::io::{self, Write};

const INDENT: &[u8] = b"    ";

/// Re-indents a JSON body with four spaces. Anything that does not parse as
/// JSON comes back untouched.
///
/// Only whitespace between tokens changes: key order, duplicate keys,
/// string escapes and number text are kept exactly as received.
pub fn prettify(body: &[u8]) -> Cow<'_, [u8]> {
    match indent(body) {
        Ok(pretty) => Cow::Owned(pretty),
        Err(_) => Cow::Borrowed(body),
    }
}

pub fn print_object<W: Write>(out: &mut W, body: &[u8]) -> io::Result<()> {
    out.write_all(&prettify(body))?;
    out.write_all(b"\n")
}

fn indent(body: &[u8]) -> serde_json::Result<Vec<u8>> {
    // Syntax check only; IgnoredAny accepts duplicate keys.
    serde_json::from_slice::<IgnoredAny>(body)?;

    let mut pretty = Vec::with_capacity(body.len() * 2);
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    // An opening bracket whose line break waits on the next token, so empty
    // containers stay `{}` / `[]`.
    let mut opened = false;

    for &byte in body {
        if in_string {
            pretty.push(byte);
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b' ' | b'\t' | b'\n' | b'\r' => continue,
            b'}' | b']' => {
                depth = depth.saturating_sub(1);
                if opened {
                    opened = false;
                } else {
                    newline(&mut pretty, depth);
                }
                pretty.push(byte);
                continue;
            }
            _ => {}
        }

        if opened {
            newline(&mut pretty, depth);
            opened = false;
        }
        pretty.push(byte);

        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                opened = true;
            }
            b',' => newline(&mut pretty, depth),
            b':' => pretty.push(b' '),
            _ => {}
        }
    }

    Ok(pretty)
}

fn newline(pretty: &mut Vec<u8>, depth: usize) {
    pretty.push(b'\n');
    for _ in 0..depth {
        pretty.extend_from_slice(INDENT);
    }
}
