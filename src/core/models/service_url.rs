pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Joins a server-relative file path onto the base URL, percent-encoding
/// each segment. Backslash separators are treated as `/`.
pub fn asset_url(base_url: &str, relative_path: &str) -> String {
    let normalized = relative_path.replace('\\', "/");
    let encoded_path = normalized
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");

    endpoint_url(base_url, &encoded_path)
}
