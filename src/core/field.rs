//! Enumerated field values shared by the wire format and the UI
//!
//! Status, type and category fields travel as small integers on the wire and
//! are shown as labels in selects. [`WireEnum`] ties the three representations
//! together; implementations are generated by
//! [`impl_wire_enum!`](crate::impl_wire_enum) from a single table so that every
//! direction of the mapping is an exhaustive `match`.

use std::fmt::Debug;

/// An enum with a fixed integer code and a UI label per variant
pub trait WireEnum: Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Every variant, in declaration order
    const ALL: &'static [Self];

    /// Integer transmitted on the wire
    fn code(self) -> u8;

    /// Label shown in the UI
    fn label(self) -> &'static str;

    fn from_code(code: u8) -> Option<Self>;

    /// Exact label lookup
    fn from_label_exact(label: &str) -> Option<Self>;

    /// Lenient label lookup used for select values: trims and ignores case.
    /// Empty input means "no value".
    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        Self::from_label_exact(label).or_else(|| {
            Self::ALL
                .iter()
                .copied()
                .find(|v| v.label().eq_ignore_ascii_case(label))
        })
    }
}
