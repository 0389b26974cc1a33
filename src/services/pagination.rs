pub const QUESTIONS_PER_PAGE: usize = 10;

/// Reads the `page` query value. Absent or non-numeric values fall back to page 1.
pub fn requested_page(raw: Option<&str>) -> i64 {
    raw.and_then(|val| val.trim().parse::<i64>().ok())
        .unwrap_or(1)
}

/// Returns the 1-based `page` of `items`, `QUESTIONS_PER_PAGE` entries at most.
///
/// Never fails: pages below 1 or past the end of `items` are empty.
pub fn paginate<T>(page: i64, items: &[T]) -> &[T] {
    if page < 1 {
        return &[];
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|index| index.checked_mul(QUESTIONS_PER_PAGE));

    match start {
        Some(start) if start < items.len() => {
            let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
            &items[start..end]
        }
        _ => &[],
    }
}
