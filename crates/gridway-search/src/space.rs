use gridway_core::{Direction, Point, Pose, Range};

/// Sentinel cost meaning "not reached".
pub const UNREACHABLE: i32 = i32::MAX;

/// Orientations per cell in the node arena.
pub(crate) const ORIENTATIONS: usize = 4;

// ---------------------------------------------------------------------------
// Internal node for priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node arena, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// Central coordinator for uniform-cost search on a grid rectangle.
///
/// `SearchSpace` owns all internal caches: a flat node arena with one slot
/// per (cell, orientation) pair, the optimal-predecessor table used in
/// all-optimal-paths mode, and scratch buffers. Repeated queries reuse the
/// arena by bumping a generation counter, so stale entries are invalidated
/// in O(1) and warm queries allocate nothing.
///
/// State lives only for the duration of one query; the answer is returned
/// by value and the caches are inert until the next call.
pub struct SearchSpace {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // Optimal predecessors per node, rebuilt lazily each generation.
    pub(crate) preds: Vec<Vec<u32>>,
    // Back-trace scratch
    pub(crate) trace_mark: Vec<bool>,
    pub(crate) cell_mark: Vec<bool>,
    pub(crate) trace_stack: Vec<u32>,
    // Shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Pose>,
}

impl SearchSpace {
    /// Create a new `SearchSpace` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let cells = rng.len();
        let len = cells * ORIENTATIONS;
        Self {
            rng,
            width: w,
            nodes: vec![Node::default(); len],
            generation: 0,
            preds: vec![Vec::new(); len],
            trace_mark: vec![false; len],
            cell_mark: vec![false; cells],
            trace_stack: Vec::new(),
            nbuf: Vec::with_capacity(ORIENTATIONS),
        }
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Pose` to a flat arena index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, s: Pose) -> Option<usize> {
        if !self.rng.contains(s.pos) {
            return None;
        }
        let x = (s.pos.x - self.rng.min.x) as usize;
        let y = (s.pos.y - self.rng.min.y) as usize;
        Some((y * self.width + x) * ORIENTATIONS + s.dir.index())
    }

    /// Convert a flat arena index back to a `Pose`.
    #[inline]
    pub(crate) fn pose(&self, idx: usize) -> Pose {
        let dir = Direction::ALL[idx % ORIENTATIONS];
        let cell = idx / ORIENTATIONS;
        let x = (cell % self.width) as i32 + self.rng.min.x;
        let y = (cell / self.width) as i32 + self.rng.min.y;
        Pose::new(Point::new(x, y), dir)
    }

    /// Flat cell index of an in-range point.
    #[inline]
    pub(crate) fn cell_idx(&self, p: Point) -> usize {
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        y * self.width + x
    }
}
