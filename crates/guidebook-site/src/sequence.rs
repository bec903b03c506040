//! Guide sequencing.

/// Pair each item with its successor.
///
/// Yields `(current, Some(next))` for every item except the last,
/// which is paired with `None`. Drives the "next section" links: the
/// last guide gets no link.
pub fn with_successors<T>(items: &[T]) -> impl Iterator<Item = (&T, Option<&T>)> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| (item, items.get(index + 1)))
}
