//! Outcome of inserting into a bounded container.

/// Whether a bounded container took the item.
///
/// The parcel queue and the availability scheduler both return this.  A
/// rejected item is dropped; callers that ignore the result get the
/// silent-discard behaviour of a fixed-size buffer.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[must_use = "a rejected item has been dropped"]
pub enum Admission {
    Accepted,
    /// The container was at capacity; the item was discarded.
    Rejected,
}

impl Admission {
    #[inline]
    pub fn is_accepted(self) -> bool {
        matches!(self, Admission::Accepted)
    }

    #[inline]
    pub fn is_rejected(self) -> bool {
        matches!(self, Admission::Rejected)
    }
}
