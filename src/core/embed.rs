use crate::error::EmbedError;
use url::Url;

/// Decide whether an embedded player's `src` needs rewriting.
///
/// Offscreen players with `param=1` are switched to `param=0` and onscreen
/// players with `param=0` back to `param=1`. Any other combination returns
/// `Ok(None)` so the iframe is not reloaded. Relative sources resolve
/// against `base`.
pub fn autostart_update(
    src: &str,
    base: Option<&str>,
    visible: bool,
    param: &str,
) -> Result<Option<String>, EmbedError> {
    let invalid = |reason: String| EmbedError::InvalidSource {
        src: src.to_string(),
        reason,
    };
    let base = base
        .map(Url::parse)
        .transpose()
        .map_err(|e| invalid(format!("base: {e}")))?;
    let mut url = Url::options()
        .base_url(base.as_ref())
        .parse(src)
        .map_err(|e| invalid(e.to_string()))?;

    let current = url
        .query_pairs()
        .find(|(k, _)| k == param)
        .map(|(_, v)| v.into_owned());
    let next = match (current.as_deref(), visible) {
        (Some("1"), false) => "0",
        (Some("0"), true) => "1",
        _ => return Ok(None),
    };
    set_query_param(&mut url, param, next);
    Ok(Some(url.to_string()))
}

// Same semantics as URLSearchParams.set: the first occurrence keeps its
// position, later duplicates are dropped.
fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let mut seen = false;
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter_map(|(k, v)| {
            if k != key {
                return Some((k.into_owned(), v.into_owned()));
            }
            if seen {
                return None;
            }
            seen = true;
            Some((k.into_owned(), value.to_string()))
        })
        .collect();
    url.query_pairs_mut().clear().extend_pairs(pairs);
}
