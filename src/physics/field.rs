//! Scalar and vector field containers
//!
//! A [`Field`] is a flat, ghost-inclusive array of `f64` tagged with the
//! [`Quantity`] it holds. The tag fixes the field's centering for its whole
//! lifetime. A [`VecField`] groups three fields (x, y, z components) built on
//! the same layout; its components may have different centerings.
//!
//! Fields are owned by the caller. Kernels only ever borrow them for the
//! duration of a call.
//!
//! # Example
//!
//! ```rust
//! use hybrid_pic::physics::{GridLayout, VecField, VectorQuantity, Direction};
//!
//! let layout = GridLayout::<1>::new([100], [0.1], 0.01, 1)?;
//! let mut b = VecField::new(&layout, VectorQuantity::B);
//!
//! let start = layout.dual_dom_start(Direction::X);
//! b.z_mut()[start] = 1.0;
//! assert_eq!(b.z()[start], 1.0);
//! # Ok::<(), String>(())
//! ```

use nalgebra::DVector;
use std::ops::{Index, IndexMut};

use crate::physics::layout::GridLayout;
use crate::physics::quantity::{Centering, Direction, Quantity, VectorQuantity};

// =================================================================================================
// Scalar field
// =================================================================================================

/// Scalar field stored over the ghost-inclusive index space of a layout
#[derive(Debug, Clone, PartialEq)]
pub struct Field<const DIM: usize> {
    /// Physical quantity held by the field
    quantity: Quantity,

    /// Centering along each axis, resolved once from the layout
    centerings: [Centering; DIM],

    /// Allocated extent along each axis
    shape: [usize; DIM],

    /// Values, first axis fastest
    data: DVector<f64>,
}

impl<const DIM: usize> Field<DIM> {
    /// Create a zero-initialized field for `quantity`
    pub fn new(layout: &GridLayout<DIM>, quantity: Quantity) -> Self {
        let shape = layout.field_shape(quantity);
        let size = shape.iter().product();

        Self {
            quantity,
            centerings: layout.centerings(quantity),
            shape,
            data: DVector::zeros(size),
        }
    }

    /// Quantity tag
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Centering along every axis
    pub fn centerings(&self) -> [Centering; DIM] {
        self.centerings
    }

    /// Allocated shape, ghosts included
    pub fn shape(&self) -> [usize; DIM] {
        self.shape
    }

    /// Total number of allocated entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Set every entry, ghosts included, to `value`
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Raw storage
    pub fn as_slice(&self) -> &[f64] {
        self.data.as_slice()
    }

    /// Mutable raw storage
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.data.as_mut_slice()
    }

    /// Iterate over every entry, ghosts included
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }

    /// Check that every entry is finite
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|value| value.is_finite())
    }
}

impl Field<1> {
    /// Build a field by sampling `profile` at the coordinate of every index
    ///
    /// Ghost entries are sampled too, at coordinates outside the domain.
    pub fn from_fn<F>(layout: &GridLayout<1>, quantity: Quantity, profile: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let mut field = Self::new(layout, quantity);
        for (index, value) in field.data.iter_mut().enumerate() {
            *value = profile(layout.coordinate(Direction::X, quantity, index));
        }
        field
    }

    /// Centering along x
    pub fn centering(&self) -> Centering {
        self.centerings[0]
    }

    /// Interior values (physical domain only)
    pub fn interior<'f>(&'f self, layout: &GridLayout<1>) -> &'f [f64] {
        let start = layout.dom_start(Direction::X, self.centering());
        let end = layout.dom_end(Direction::X, self.centering());
        &self.data.as_slice()[start..=end]
    }

    /// Coordinates of the interior values, aligned with [`Field::interior`]
    pub fn interior_coordinates(&self, layout: &GridLayout<1>) -> Vec<f64> {
        let start = layout.dom_start(Direction::X, self.centering());
        let end = layout.dom_end(Direction::X, self.centering());
        (start..=end)
            .map(|index| layout.coordinate(Direction::X, self.quantity, index))
            .collect()
    }
}

impl<const DIM: usize> Index<usize> for Field<DIM> {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl<const DIM: usize> IndexMut<usize> for Field<DIM> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.data[index]
    }
}

// =================================================================================================
// Vector field
// =================================================================================================

/// Vector field: three scalar fields sharing one layout
#[derive(Debug, Clone, PartialEq)]
pub struct VecField<const DIM: usize> {
    quantity: VectorQuantity,
    x: Field<DIM>,
    y: Field<DIM>,
    z: Field<DIM>,
}

impl<const DIM: usize> VecField<DIM> {
    /// Create a zero-initialized vector field
    pub fn new(layout: &GridLayout<DIM>, quantity: VectorQuantity) -> Self {
        let [qx, qy, qz] = quantity.components();
        Self {
            quantity,
            x: Field::new(layout, qx),
            y: Field::new(layout, qy),
            z: Field::new(layout, qz),
        }
    }

    /// Vector quantity tag
    pub fn quantity(&self) -> VectorQuantity {
        self.quantity
    }

    pub fn x(&self) -> &Field<DIM> {
        &self.x
    }

    pub fn y(&self) -> &Field<DIM> {
        &self.y
    }

    pub fn z(&self) -> &Field<DIM> {
        &self.z
    }

    pub fn x_mut(&mut self) -> &mut Field<DIM> {
        &mut self.x
    }

    pub fn y_mut(&mut self) -> &mut Field<DIM> {
        &mut self.y
    }

    pub fn z_mut(&mut self) -> &mut Field<DIM> {
        &mut self.z
    }

    /// Component along `direction`
    pub fn component(&self, direction: Direction) -> &Field<DIM> {
        match direction {
            Direction::X => &self.x,
            Direction::Y => &self.y,
            Direction::Z => &self.z,
        }
    }

    /// Mutable component along `direction`
    pub fn component_mut(&mut self, direction: Direction) -> &mut Field<DIM> {
        match direction {
            Direction::X => &mut self.x,
            Direction::Y => &mut self.y,
            Direction::Z => &mut self.z,
        }
    }

    /// Mutable access to the three components at once
    pub fn components_mut(&mut self) -> [&mut Field<DIM>; 3] {
        [&mut self.x, &mut self.y, &mut self.z]
    }

    /// Set every component to zero, ghosts included
    pub fn zero(&mut self) {
        for component in self.components_mut() {
            component.fill(0.0);
        }
    }

    /// Check that every component is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl VecField<1> {
    /// Build a vector field from one profile per component
    pub fn from_fns<FX, FY, FZ>(
        layout: &GridLayout<1>,
        quantity: VectorQuantity,
        fx: FX,
        fy: FY,
        fz: FZ,
    ) -> Self
    where
        FX: Fn(f64) -> f64,
        FY: Fn(f64) -> f64,
        FZ: Fn(f64) -> f64,
    {
        let [qx, qy, qz] = quantity.components();
        Self {
            quantity,
            x: Field::from_fn(layout, qx, fx),
            y: Field::from_fn(layout, qy, fy),
            z: Field::from_fn(layout, qz, fz),
        }
    }

    /// Uniform vector field (ghosts included)
    pub fn uniform(layout: &GridLayout<1>, quantity: VectorQuantity, value: [f64; 3]) -> Self {
        Self::from_fns(
            layout,
            quantity,
            |_| value[0],
            |_| value[1],
            |_| value[2],
        )
    }

    /// Field energy `½ Σ |F|² Δx` over the interior of every component
    ///
    /// The last primal node duplicates the first one on a periodic domain and
    /// is therefore left out of the sum.
    pub fn energy(&self, layout: &GridLayout<1>) -> f64 {
        let dx = layout.cell_size(Direction::X);
        let mut sum = 0.0;
        for component in [&self.x, &self.y, &self.z] {
            let interior = component.interior(layout);
            let cells = match component.centering() {
                Centering::Primal => &interior[..interior.len() - 1],
                Centering::Dual => interior,
            };
            sum += cells.iter().map(|value| value * value).sum::<f64>();
        }
        0.5 * sum * dx
    }
}

// =================================================================================================
// Tests
// =================================================================================================
