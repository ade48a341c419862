use once_cell::sync::Lazy;
use regex::Regex;
use reviewbot_core::trim_text;

// Opening fence, optional ASCII language tag + newline, lazy body, closing fence.
static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```(?:[A-Za-z0-9_]*\n)?([\s\S]*?)```").expect("fenced block pattern is valid")
});

/// Extract the trimmed contents of the first fenced code block in `text`.
///
/// The first closing fence ends the block, so only the first of several
/// blocks is returned. A block whose contents are empty after trimming is
/// treated the same as no block at all.
///
/// # Examples
///
/// ```
/// use reviewbot_review::extract::extract_code_block;
///
/// let comment = "Please check:\n```js\nconst x = 1;\n```";
/// assert_eq!(extract_code_block(comment).as_deref(), Some("const x = 1;"));
/// assert_eq!(extract_code_block("no code here"), None);
/// ```
pub fn extract_code_block(text: &str) -> Option<String> {
    let captures = FENCED_BLOCK.captures(text)?;
    let code = trim_text(captures.get(1)?.as_str());
    if code.is_empty() {
        return None;
    }
    Some(code.to_string())
}
