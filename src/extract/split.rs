//! Document splitting: one log text into its `---`-delimited blocks.

/// The document separator line.
const SEPARATOR: &str = "---";

/// Split a multi-document log into trimmed, non-empty document bodies.
///
/// Only a line that is exactly `---` separates documents (a trailing `\r`
/// is tolerated). Consecutive, leading, and trailing separators produce
/// empty bodies, which are dropped.
pub fn split_documents(text: &str) -> Vec<&str> {
    let mut documents = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let content = line.trim_end_matches('\n').trim_end_matches('\r');
        if content == SEPARATOR {
            push_trimmed(&mut documents, &text[start..offset]);
            start = offset + line.len();
        }
        offset += line.len();
    }
    push_trimmed(&mut documents, &text[start..]);

    documents
}

fn push_trimmed<'a>(documents: &mut Vec<&'a str>, body: &'a str) {
    let body = body.trim();
    if !body.is_empty() {
        documents.push(body);
    }
}
