use stepstar_core::Location;

/// One grid cell discovered during a search.
///
/// `f` is not stored: it is always `g + h`, so it cannot drift from its
/// parts. `parent` is the location of the node this one was reached from,
/// and is `None` only for the start node.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub location: Location,
    pub g: f32,
    pub h: f32,
    pub parent: Option<Location>,
}

impl SearchNode {
    /// The start node: zero costs, no parent.
    pub fn start(location: Location) -> Self {
        Self {
            location,
            g: 0.0,
            h: 0.0,
            parent: None,
        }
    }

    /// A node reached from `parent`.
    pub fn reached(location: Location, g: f32, h: f32, parent: Location) -> Self {
        Self {
            location,
            g,
            h,
            parent: Some(parent),
        }
    }

    /// Estimated total cost through this node.
    #[inline]
    pub fn f(&self) -> f32 {
        self.g + self.h
    }

    /// Expansion priority: lower `f` first, then lower `h`.
    pub(crate) fn priority_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f()
            .total_cmp(&other.f())
            .then(self.h.total_cmp(&other.h))
    }
}
