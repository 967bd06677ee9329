//! Subtag shape predicates and ASCII casing helpers
//!
//! Each predicate checks one production of the TR35 `unicode_locale_id`
//! grammar: the subtag length must be in range and every character must be in
//! the production's class (ASCII letter, ASCII digit, or either). Anything
//! outside ASCII fails every class, so non-ASCII input can never form a valid
//! subtag.
//!
//! | Production                 | Shape                                     |
//! |----------------------------|-------------------------------------------|
//! | language                   | 2-3 or 5-8 letters                        |
//! | script                     | 4 letters                                 |
//! | region                     | 2 letters or 3 digits                     |
//! | variant                    | 5-8 alnum, or 3 alnum starting with digit |
//! | unicode attribute          | 3-8 alnum                                 |
//! | unicode key                | alnum letter                              |
//! | unicode type item          | 3-8 alnum                                 |
//! | transformed key            | letter digit                              |
//! | transformed value item     | 3-8 alnum                                 |
//! | private-use item           | 1-8 alnum                                 |
//! | other extension item       | 2-8 alnum                                 |

fn is_class(subtag: &str, min: usize, max: usize, class: fn(&u8) -> bool) -> bool {
    (min..=max).contains(&subtag.len()) && subtag.bytes().all(|b| class(&b))
}

fn is_pair(subtag: &str, first: fn(&u8) -> bool, second: fn(&u8) -> bool) -> bool {
    match subtag.as_bytes() {
        [a, b] => first(a) && second(b),
        _ => false,
    }
}

pub fn is_language_subtag(subtag: &str) -> bool {
    is_class(subtag, 2, 3, u8::is_ascii_alphabetic) || is_class(subtag, 5, 8, u8::is_ascii_alphabetic)
}

pub fn is_script_subtag(subtag: &str) -> bool {
    is_class(subtag, 4, 4, u8::is_ascii_alphabetic)
}

pub fn is_region_subtag(subtag: &str) -> bool {
    is_class(subtag, 2, 2, u8::is_ascii_alphabetic) || is_class(subtag, 3, 3, u8::is_ascii_digit)
}

pub fn is_variant_subtag(subtag: &str) -> bool {
    is_class(subtag, 5, 8, u8::is_ascii_alphanumeric)
        || (is_class(subtag, 3, 3, u8::is_ascii_alphanumeric)
            && subtag.as_bytes().first().is_some_and(u8::is_ascii_digit))
}

pub fn is_unicode_attribute(subtag: &str) -> bool {
    is_class(subtag, 3, 8, u8::is_ascii_alphanumeric)
}

pub fn is_unicode_key(subtag: &str) -> bool {
    is_pair(subtag, u8::is_ascii_alphanumeric, u8::is_ascii_alphabetic)
}

pub fn is_unicode_type_item(subtag: &str) -> bool {
    is_class(subtag, 3, 8, u8::is_ascii_alphanumeric)
}

pub fn is_transformed_key(subtag: &str) -> bool {
    is_pair(subtag, u8::is_ascii_alphabetic, u8::is_ascii_digit)
}

pub fn is_transformed_value_item(subtag: &str) -> bool {
    is_class(subtag, 3, 8, u8::is_ascii_alphanumeric)
}

pub fn is_private_use_item(subtag: &str) -> bool {
    is_class(subtag, 1, 8, u8::is_ascii_alphanumeric)
}

pub fn is_other_extension_item(subtag: &str) -> bool {
    is_class(subtag, 2, 8, u8::is_ascii_alphanumeric)
}

/// Returns the extension singleton if `subtag` is exactly one ASCII alphanumeric
pub fn singleton(subtag: &str) -> Option<char> {
    match subtag.as_bytes() {
        [b] if b.is_ascii_alphanumeric() => Some(char::from(*b)),
        _ => None,
    }
}

/// First letter upper-cased, the rest lower-cased (ASCII only)
pub fn to_ascii_titlecase(subtag: &str) -> String {
    let mut out = subtag.to_ascii_lowercase();
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}
