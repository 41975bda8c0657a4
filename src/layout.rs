//! Grid placement of ladder elements for schematic renderers.
//!
//! The ladder is drawn as a chain running right from the input port at the
//! origin. Series elements extend the chain by one unit, parallel elements
//! hang one unit down from the current chain node to the return rail, and the
//! ground terminator drops from the last chain node.

use crate::cauer::{Ladder, NetworkElement, Placement, Terminator};
use crate::traits::{CoeffBase, ElementPlacer};

/// A point on the schematic grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
}

impl Anchor {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Anchor { x, y }
    }

    #[inline]
    fn right(self) -> Self {
        Anchor::new(self.x + 1, self.y)
    }

    #[inline]
    fn down(self) -> Self {
        Anchor::new(self.x, self.y - 1)
    }
}

/// An element with the two grid points its terminals connect to
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize + CoeffBase",
        deserialize = "T: serde::Deserialize<'de> + CoeffBase"
    ))
)]
pub struct PlacedElement<T> {
    pub element: NetworkElement<T>,
    pub from: Anchor,
    pub to: Anchor,
}

/// Output of [SchematicPlacer]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize + CoeffBase",
        deserialize = "T: serde::Deserialize<'de> + CoeffBase"
    ))
)]
pub struct Schematic<T> {
    pub elements: Vec<PlacedElement<T>>,
    /// Where the ground terminator attaches, `None` if the ladder was never terminated
    pub ground: Option<Anchor>,
}

/// [ElementPlacer] laying out a ladder on an integer grid
#[derive(Debug, Clone)]
pub struct SchematicPlacer<T> {
    cursor: Anchor,
    placed: Vec<PlacedElement<T>>,
    ground: Option<Anchor>,
}

impl<T> SchematicPlacer<T> {
    pub fn new() -> Self {
        SchematicPlacer {
            cursor: Anchor::default(),
            placed: Vec::new(),
            ground: None,
        }
    }
}

impl<T> Default for SchematicPlacer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ElementPlacer<T> for SchematicPlacer<T> {
    type Output = Schematic<T>;

    fn place(&mut self, element: &NetworkElement<T>) {
        let from = self.cursor;
        let to = match element.placement {
            Placement::Series => {
                self.cursor = from.right();
                self.cursor
            }
            Placement::Parallel => from.down(),
        };
        self.placed.push(PlacedElement {
            element: element.clone(),
            from,
            to,
        });
    }

    fn terminate(&mut self, terminator: Terminator) {
        match terminator {
            Terminator::Ground => self.ground = Some(self.cursor),
        }
    }

    fn finish(self) -> Schematic<T> {
        Schematic {
            elements: self.placed,
            ground: self.ground,
        }
    }
}

impl<T: CoeffBase> Ladder<T> {
    /// Lay the ladder out with a [SchematicPlacer]
    pub fn schematic(&self) -> Schematic<T> {
        self.place_with(SchematicPlacer::new())
    }
}
