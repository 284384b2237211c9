/// Returns the display name for a character class ID.
///
/// Unknown IDs fall back to the Warrior class.
///
/// ## Example
///
/// ```rust
/// use agonyl_support::class_name;
///
/// assert_eq!(class_name(2), "Mage");
/// assert_eq!(class_name(0), "Warrior");
/// ```
pub fn class_name(class: u8) -> &'static str {
    match class {
        1 => "Holy Knight",
        2 => "Mage",
        3 => "Archer",
        _ => "Warrior",
    }
}

/// Returns the display name for a nation ID.
///
/// Unknown IDs fall back to Temoz.
pub fn nation_name(nation: u8) -> &'static str {
    match nation {
        1 => "Quanato",
        _ => "Temoz",
    }
}
