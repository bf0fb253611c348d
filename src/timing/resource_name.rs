use url::Url;

/// Short display name for a resource URL.
///
/// - `http://github.com` → `github.com`
/// - `http://underscorejs.org/underscore.js` → `underscore.js`
/// - `https://www.google.com/images/srpr/logo11w.png` → `logo11w.png`
///
/// Strings that are not absolute URLs (initiator types such as `script`)
/// resolve to their last `/`-separated segment.
#[must_use]
pub fn short_resource_name(raw: &str) -> String {
    let Ok(url) = Url::parse(raw) else {
        return last_segment(raw).to_owned();
    };

    let path = url.path();
    if path == "/" || path.is_empty() {
        if let Some(host) = url.host_str() {
            return host.to_owned();
        }
    }
    last_segment(path).to_owned()
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
