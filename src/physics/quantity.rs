//! Physical quantities and their staggering on the Yee grid
//!
//! Every field in the simulation carries a [`Quantity`] tag. The tag alone
//! determines where the field lives on the staggered grid ([`Centering`]),
//! so a field never has to be told how to interpolate itself.
//!
//! # Yee convention (1-D, along x)
//!
//! ```text
//!  primal nodes :  |-------|-------|-------|
//!                  i       i+1     i+2
//!  dual cells   :      i       i+1
//!
//!  E : Ex dual,   Ey primal, Ez primal
//!  B : Bx primal, By dual,   Bz dual
//!  J : Jx dual,   Jy primal, Jz primal
//! ```

use std::fmt;

// =================================================================================================
// Direction
// =================================================================================================

/// Spatial direction of a grid axis or vector component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    X,
    Y,
    Z,
}

impl Direction {
    /// All three directions, in component order
    pub const ALL: [Direction; 3] = [Direction::X, Direction::Y, Direction::Z];

    /// Position of the direction in a `[_; 3]` component array
    pub fn index(self) -> usize {
        match self {
            Direction::X => 0,
            Direction::Y => 1,
            Direction::Z => 2,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::X => write!(f, "x"),
            Direction::Y => write!(f, "y"),
            Direction::Z => write!(f, "z"),
        }
    }
}

// =================================================================================================
// Centering
// =================================================================================================

/// Location of a quantity inside a grid cell
///
/// - `Primal`: defined on cell edges (grid nodes)
/// - `Dual`: defined on cell centers, half a cell away from the nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Centering {
    Primal,
    Dual,
}

impl Centering {
    /// Offset of the storage location from the left node, in cell units
    pub fn offset(self) -> f64 {
        match self {
            Centering::Primal => 0.0,
            Centering::Dual => 0.5,
        }
    }
}

impl fmt::Display for Centering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Centering::Primal => write!(f, "primal"),
            Centering::Dual => write!(f, "dual"),
        }
    }
}

// =================================================================================================
// Quantity
// =================================================================================================

/// Scalar physical quantity stored on the grid
///
/// The centering of a quantity is fixed by the Yee convention and cannot be
/// changed, which is what keeps a field's centering constant for its whole
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Electric field, x component
    Ex,
    /// Electric field, y component
    Ey,
    /// Electric field, z component
    Ez,
    /// Magnetic field, x component
    Bx,
    /// Magnetic field, y component
    By,
    /// Magnetic field, z component
    Bz,
    /// Current density, x component
    Jx,
    /// Current density, y component
    Jy,
    /// Current density, z component
    Jz,
}

impl Quantity {
    /// Centering of the quantity along the x axis
    pub fn centering(self) -> Centering {
        self.centering_along(Direction::X)
    }

    /// Centering of the quantity along `axis`
    ///
    /// E and J components are dual along their own direction and primal
    /// across it; B components are the other way around.
    pub fn centering_along(self, axis: Direction) -> Centering {
        let along_own_axis = self.direction() == axis;
        match (self.vector(), along_own_axis) {
            (VectorQuantity::B, true) => Centering::Primal,
            (VectorQuantity::B, false) => Centering::Dual,
            (_, true) => Centering::Dual,
            (_, false) => Centering::Primal,
        }
    }

    /// Vector quantity this component belongs to
    pub fn vector(self) -> VectorQuantity {
        match self {
            Quantity::Ex | Quantity::Ey | Quantity::Ez => VectorQuantity::E,
            Quantity::Bx | Quantity::By | Quantity::Bz => VectorQuantity::B,
            Quantity::Jx | Quantity::Jy | Quantity::Jz => VectorQuantity::J,
        }
    }

    /// Component direction of the quantity
    pub fn direction(self) -> Direction {
        match self {
            Quantity::Ex | Quantity::Bx | Quantity::Jx => Direction::X,
            Quantity::Ey | Quantity::By | Quantity::Jy => Direction::Y,
            Quantity::Ez | Quantity::Bz | Quantity::Jz => Direction::Z,
        }
    }

    /// Short name used in logs and file headers
    pub fn name(self) -> &'static str {
        match self {
            Quantity::Ex => "Ex",
            Quantity::Ey => "Ey",
            Quantity::Ez => "Ez",
            Quantity::Bx => "Bx",
            Quantity::By => "By",
            Quantity::Bz => "Bz",
            Quantity::Jx => "Jx",
            Quantity::Jy => "Jy",
            Quantity::Jz => "Jz",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =================================================================================================
// Vector quantity
// =================================================================================================

/// Vector physical quantity (a triple of scalar quantities)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorQuantity {
    /// Electric field
    E,
    /// Magnetic field
    B,
    /// Current density
    J,
}

impl VectorQuantity {
    /// Scalar components, in x, y, z order
    pub fn components(self) -> [Quantity; 3] {
        match self {
            VectorQuantity::E => [Quantity::Ex, Quantity::Ey, Quantity::Ez],
            VectorQuantity::B => [Quantity::Bx, Quantity::By, Quantity::Bz],
            VectorQuantity::J => [Quantity::Jx, Quantity::Jy, Quantity::Jz],
        }
    }

    /// Component of this vector along `direction`
    pub fn component(self, direction: Direction) -> Quantity {
        self.components()[direction.index()]
    }
}

impl fmt::Display for VectorQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorQuantity::E => write!(f, "E"),
            VectorQuantity::B => write!(f, "B"),
            VectorQuantity::J => write!(f, "J"),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
