use serde::{Serialize, Serializer};
use std::fmt;

/// Edge weight. Unsigned, so negative weights cannot reach the engine.
pub type Weight = u32;

/// Slot index of a node in the graph's node table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tentative or final distance from the source.
///
/// `Distance::INFINITY` is the "no path found" sentinel. Addition saturates
/// at the sentinel so relaxing from an unreached node can never wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Distance = Distance(0);
    pub const INFINITY: Distance = Distance(u64::MAX);

    pub fn new(value: u64) -> Self {
        Distance(value)
    }

    pub fn is_infinite(&self) -> bool {
        *self == Self::INFINITY
    }

    pub fn is_finite(&self) -> bool {
        !self.is_infinite()
    }

    /// Finite value, or `None` for the sentinel
    pub fn value(&self) -> Option<u64> {
        self.is_finite().then_some(self.0)
    }

    /// Distance after traversing an edge of `weight`
    pub fn extend(self, weight: Weight) -> Self {
        Distance(self.0.saturating_add(u64::from(weight)))
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl From<u64> for Distance {
    fn from(value: u64) -> Self {
        Distance(value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "unreachable"),
        }
    }
}

/// Serializes as a number, or `null` for the sentinel
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}
