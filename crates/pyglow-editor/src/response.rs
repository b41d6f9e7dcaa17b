#![forbid(unsafe_code)]

//! Pull code out of a generated response.

const FENCE: &str = "```";
const LANGUAGE_TAG: &str = "python";

/// The code carried by a model response.
///
/// If the response holds a fenced block (opening fence optionally tagged
/// `python`, closed by a second fence), the first block's body is returned
/// with surrounding whitespace trimmed. Otherwise the whole response is
/// returned trimmed. An empty block body counts as no block.
///
/// ```
/// use pyglow_editor::extract_code;
///
/// let reply = "Here you go:\n```python\nprint(1)\n```\nEnjoy!";
/// assert_eq!(extract_code(reply), "print(1)");
/// assert_eq!(extract_code("  x = 1\n"), "x = 1");
/// ```
#[must_use]
pub fn extract_code(response: &str) -> &str {
    fenced_body(response)
        .map(str::trim)
        .unwrap_or_else(|| response.trim())
}

fn fenced_body(response: &str) -> Option<&str> {
    let open = response.find(FENCE)? + FENCE.len();
    let rest = &response[open..];
    let rest = rest.strip_prefix(LANGUAGE_TAG).unwrap_or(rest);
    let close = rest.find(FENCE)?;
    let body = &rest[..close];
    (!body.is_empty()).then_some(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_block() {
        let reply = "```python\ndef f():\n    return 1\n```";
        assert_eq!(extract_code(reply), "def f():\n    return 1");
    }

    #[test]
    fn untagged_block() {
        assert_eq!(extract_code("text\n```\nx = 2\n```\nmore"), "x = 2");
    }

    #[test]
    fn first_block_wins() {
        assert_eq!(extract_code("```a = 1```\n```b = 2```"), "a = 1");
    }

    #[test]
    fn other_language_tag_is_kept() {
        assert_eq!(extract_code("```py\nx\n```"), "py\nx");
    }

    #[test]
    fn unclosed_fence_falls_back_to_whole_response() {
        assert_eq!(extract_code("  ```python\nx = 1  "), "```python\nx = 1");
    }

    #[test]
    fn empty_block_falls_back() {
        assert_eq!(extract_code(" `````` "), "``````");
        assert_eq!(extract_code("```python```"), "```python```");
    }

    #[test]
    fn whitespace_only_block_is_empty_code() {
        assert_eq!(extract_code("```\n\n```"), "");
    }

    #[test]
    fn plain_response_is_trimmed() {
        assert_eq!(extract_code("\n\nprint('hi')\n"), "print('hi')");
        assert_eq!(extract_code(""), "");
    }
}
