/// Splits `prefix:local` at the first colon.
pub fn split_namespaced_name(prefixed_name: &str) -> (Option<&str>, &str) {
    match prefixed_name.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, prefixed_name),
    }
}

/// Drops a leading `prefix:` from a qualified name. Names without a colon are
/// returned unchanged.
pub fn strip_namespace(prefixed_name: &str) -> &str {
    split_namespaced_name(prefixed_name).1
}
