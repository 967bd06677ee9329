//! Sorted insertion into subtag lists
//!
//! Variants and `u` attributes are both kept sorted. They differ in what
//! happens to an equal element: variants reject it, attributes keep it.

/// What to do when an equal element is already present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duplicates {
    Reject,
    Allow,
}

/// Insert `item` at its sorted position in `list`.
///
/// Comparison is ASCII case-insensitive. With [`Duplicates::Allow`] the item
/// goes after any equal elements. With [`Duplicates::Reject`] an equal
/// element hands the item back as the error.
pub fn insert_sorted(list: &mut Vec<String>, item: String, duplicates: Duplicates) -> Result<(), String> {
    let key = item.to_ascii_lowercase();
    let lower = list.partition_point(|existing| existing.to_ascii_lowercase() < key);
    let upper = list.partition_point(|existing| existing.to_ascii_lowercase() <= key);

    if lower != upper && duplicates == Duplicates::Reject {
        return Err(item);
    }
    list.insert(upper, item);
    Ok(())
}
