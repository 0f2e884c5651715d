//! Grid layout of the staggered (Yee) mesh
//!
//! The layout is the single source of truth for the spatial and temporal
//! discretization: cell size, time step, ghost width and the index ranges of
//! the primal and dual domains. It is built once during setup, validated at
//! construction and then only ever borrowed immutably by fields and kernels.
//!
//! # Index convention
//!
//! For `n` physical cells and `g` ghost cells on each side:
//!
//! ```text
//!  index        0 .. g-1 | g                               g+n | g+n+1 .. g+n+g
//!  primal       ghosts   | node 0 ......................... node n | ghosts
//!  dual         ghosts   | cell 0 ................ cell n-1 | ghosts
//! ```
//!
//! - primal interior domain: `g ..= g + n`      (`n + 1` nodes)
//! - dual interior domain:   `g ..= g + n - 1`  (`n` cells)
//! - dual index `i` is the cell spanning primal nodes `i` and `i + 1`
//!
//! # Example
//!
//! ```rust
//! use hybrid_pic::physics::{GridLayout, Direction};
//!
//! let layout = GridLayout::<1>::new([1000], [0.1], 0.05, 1)?;
//!
//! assert_eq!(layout.primal_dom_start(Direction::X), 1);
//! assert_eq!(layout.primal_dom_end(Direction::X), 1001);
//! assert_eq!(layout.dual_dom_end(Direction::X), 1000);
//! # Ok::<(), String>(())
//! ```

use crate::physics::quantity::{Centering, Direction, Quantity};

/// Uniform staggered grid layout in `DIM` spatial dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout<const DIM: usize> {
    /// Number of physical cells along each axis
    nbr_cells: [usize; DIM],

    /// Cell size along each axis
    cell_size: [f64; DIM],

    /// Time step shared by every kernel
    time_step: f64,

    /// Number of ghost cells on each side of each axis
    nbr_ghosts: usize,

    /// Physical coordinate of the first primal node
    origin: [f64; DIM],
}

impl<const DIM: usize> GridLayout<DIM> {
    /// Create a new validated layout with its origin at zero
    ///
    /// # Errors
    ///
    /// Returns an error if any axis has no cells, a non-positive or
    /// non-finite cell size, if the time step is not positive and finite,
    /// or if there are no ghost cells (the curl stencils read `i + 1`).
    pub fn new(
        nbr_cells: [usize; DIM],
        cell_size: [f64; DIM],
        time_step: f64,
        nbr_ghosts: usize,
    ) -> Result<Self, String> {
        let layout = Self {
            nbr_cells,
            cell_size,
            time_step,
            nbr_ghosts,
            origin: [0.0; DIM],
        };
        layout.validate()?;

        log::debug!(
            "GridLayout<{}>: cells {:?}, dx {:?}, dt {}, ghosts {}",
            DIM,
            nbr_cells,
            cell_size,
            time_step,
            nbr_ghosts
        );

        Ok(layout)
    }

    /// Builder pattern: move the first primal node to `origin`
    pub fn with_origin(mut self, origin: [f64; DIM]) -> Self {
        self.origin = origin;
        self
    }

    /// Validate the discretization parameters
    pub fn validate(&self) -> Result<(), String> {
        if DIM == 0 || DIM > 3 {
            return Err(format!("GridLayout supports 1 to 3 dimensions, got {}", DIM));
        }

        for axis in 0..DIM {
            if self.nbr_cells[axis] == 0 {
                return Err(format!("Axis {} must contain at least one cell", axis));
            }
            if !(self.cell_size[axis].is_finite() && self.cell_size[axis] > 0.0) {
                return Err(format!(
                    "Cell size along axis {} must be positive and finite, got {}",
                    axis, self.cell_size[axis]
                ));
            }
            if !self.origin[axis].is_finite() {
                return Err(format!("Origin along axis {} is not finite", axis));
            }
        }

        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(format!(
                "Time step must be positive and finite, got {}",
                self.time_step
            ));
        }

        if self.nbr_ghosts == 0 {
            return Err("At least one ghost cell is required by the curl stencils".to_string());
        }

        Ok(())
    }

    // ===================================== Query methods =========================================

    /// Number of spatial dimensions
    pub fn dimension(&self) -> usize {
        DIM
    }

    /// Array position of `direction`
    ///
    /// # Panics
    ///
    /// Panics if the layout has no axis along `direction`.
    fn axis(&self, direction: Direction) -> usize {
        let axis = direction.index();
        assert!(
            axis < DIM,
            "direction {} does not exist in a {}-D layout",
            direction,
            DIM
        );
        axis
    }

    /// Cell size along `direction`
    pub fn cell_size(&self, direction: Direction) -> f64 {
        self.cell_size[self.axis(direction)]
    }

    /// Time step
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Number of physical cells along `direction`
    pub fn nbr_cells(&self, direction: Direction) -> usize {
        self.nbr_cells[self.axis(direction)]
    }

    /// Number of ghost cells on each side
    pub fn nbr_ghosts(&self) -> usize {
        self.nbr_ghosts
    }

    /// Coordinate of the first primal node along `direction`
    pub fn origin(&self, direction: Direction) -> f64 {
        self.origin[self.axis(direction)]
    }

    /// Physical length of the domain along `direction`
    pub fn domain_length(&self, direction: Direction) -> f64 {
        self.nbr_cells(direction) as f64 * self.cell_size(direction)
    }

    // ====================================== Index ranges =========================================

    /// First interior primal index
    pub fn primal_dom_start(&self, _direction: Direction) -> usize {
        self.nbr_ghosts
    }

    /// Last interior primal index (inclusive)
    pub fn primal_dom_end(&self, direction: Direction) -> usize {
        self.nbr_ghosts + self.nbr_cells(direction)
    }

    /// First interior dual index
    pub fn dual_dom_start(&self, _direction: Direction) -> usize {
        self.nbr_ghosts
    }

    /// Last interior dual index (inclusive)
    pub fn dual_dom_end(&self, direction: Direction) -> usize {
        self.nbr_ghosts + self.nbr_cells(direction) - 1
    }

    /// First interior index for a given centering
    pub fn dom_start(&self, direction: Direction, centering: Centering) -> usize {
        match centering {
            Centering::Primal => self.primal_dom_start(direction),
            Centering::Dual => self.dual_dom_start(direction),
        }
    }

    /// Last interior index (inclusive) for a given centering
    pub fn dom_end(&self, direction: Direction, centering: Centering) -> usize {
        match centering {
            Centering::Primal => self.primal_dom_end(direction),
            Centering::Dual => self.dual_dom_end(direction),
        }
    }

    /// Last allocated index (inclusive), ghosts included
    pub fn ghost_end(&self, direction: Direction, centering: Centering) -> usize {
        self.allocation_size(direction, centering) - 1
    }

    /// Number of allocated entries along `direction`, ghosts included
    pub fn allocation_size(&self, direction: Direction, centering: Centering) -> usize {
        let nodes = match centering {
            Centering::Primal => self.nbr_cells(direction) + 1,
            Centering::Dual => self.nbr_cells(direction),
        };
        nodes + 2 * self.nbr_ghosts
    }

    // ======================================= Centering ===========================================

    /// Centering of `quantity` along every axis of the layout
    pub fn centerings(&self, quantity: Quantity) -> [Centering; DIM] {
        std::array::from_fn(|axis| quantity.centering_along(Direction::ALL[axis]))
    }

    /// Allocated shape of a field holding `quantity`
    pub fn field_shape(&self, quantity: Quantity) -> [usize; DIM] {
        let centerings = self.centerings(quantity);
        std::array::from_fn(|axis| {
            self.allocation_size(Direction::ALL[axis], centerings[axis])
        })
    }

    /// Physical coordinate of `index` for `quantity` along `direction`
    ///
    /// Ghost indices map to coordinates outside the physical domain.
    pub fn coordinate(&self, direction: Direction, quantity: Quantity, index: usize) -> f64 {
        let axis = self.axis(direction);
        let offset = quantity.centering_along(direction).offset();
        let relative = index as f64 - self.nbr_ghosts as f64 + offset;
        self.origin[axis] + relative * self.cell_size[axis]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
