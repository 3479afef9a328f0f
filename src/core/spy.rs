/// Pick the section whose nav link should be highlighted.
///
/// `sections` are `(id, viewport_top)` pairs in document order. The first
/// section is the fallback; any section that has scrolled up to the header
/// (plus `offset`) takes over, the last such one winning. A winner with an
/// empty id highlights nothing.
pub fn current_section<'a, I>(sections: I, header_height: f64, offset: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut iter = sections.into_iter();
    let (first_id, _) = iter.next()?;
    let current = iter
        .filter(|&(_, top)| top - header_height - offset <= 0.0)
        .last()
        .map_or(first_id, |(id, _)| id);
    (!current.is_empty()).then_some(current)
}

#[inline]
pub fn link_is_active(href: Option<&str>, section_id: &str) -> bool {
    href.and_then(|h| h.strip_prefix('#'))
        .is_some_and(|fragment| fragment == section_id)
}
