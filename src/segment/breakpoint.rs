use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

/// A stored change point of the step function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint<P, I> {
    position: P,
    intensity: I,
}

impl<P: Copy, I: Copy> Breakpoint<P, I> {
    pub fn new(position: P, intensity: I) -> Breakpoint<P, I> {
        Breakpoint { position, intensity }
    }

    pub fn position(&self) -> P {
        self.position
    }

    pub fn intensity(&self) -> I {
        self.intensity
    }
}

// Serialized as a bare pair so a canonical form renders as
// [[10,1],[30,0]] instead of a list of objects.
impl<P: Serialize, I: Serialize> Serialize for Breakpoint<P, I> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.position)?;
        pair.serialize_element(&self.intensity)?;
        pair.end()
    }
}
