//! Stable integer IDs derived from string names.
//!
//! Types implementing [`StableId`] map each value to the hash code of a
//! string name. The mapping depends only on the name, so IDs stay the same
//! across builds, platforms and variant reordering.
//!
//! Implement it with `#[derive(StableId)]` from the `hashcode` crate, which
//! also rejects duplicate names and hash collisions at compile time.

/// A closed set of values, each identified by the hash of its name.
///
/// `IDS` and `NAMES` are parallel: `IDS[i] == string_hash(NAMES[i])`.
pub trait StableId: Sized + 'static {
    /// Every ID, in declaration order.
    const IDS: &'static [i32];

    /// Every name, in declaration order.
    const NAMES: &'static [&'static str];

    /// The ID of this value.
    fn stable_id(&self) -> i32;

    /// The value with the given ID, if any.
    fn from_stable_id(id: i32) -> Option<Self>;

    /// The name this value's ID was hashed from.
    fn id_name(&self) -> &'static str;

    /// The name behind an ID, if any value has it.
    fn name_of(id: i32) -> Option<&'static str> {
        Self::IDS
            .iter()
            .position(|&candidate| candidate == id)
            .map(|index| Self::NAMES[index])
    }
}
