//! In-page anchor links

/// Element id an in-page link points at, if any.
///
/// `"#signup"` → `Some("signup")`; a bare `"#"`, an off-page link or an
/// empty href yields `None`.
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}
