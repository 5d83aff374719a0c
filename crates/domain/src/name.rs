/// Canonical table key for a domain name: lowercased and fully qualified.
///
/// `"Example.com"`, `"example.com."` and `"EXAMPLE.COM"` all map to
/// `"example.com."`. The empty name maps to the root, `"."`.
pub fn normalize_name(name: &str) -> String {
    let mut key = name.to_lowercase();
    if !key.ends_with('.') {
        key.push('.');
    }
    key
}
