//! Arena-backed quad-edge structure (Guibas–Stolfi, without the dual).
//!
//! Every undirected edge is stored as two directed records that sit next to
//! each other in the arena, so the reverse of edge `2k` is `2k + 1` and
//! [`EdgeId::sym`] is a bit flip. Each record knows its origin vertex and its
//! neighbours in the rotational ring of edges leaving that origin:
//! `next_ccw` (Onext) and `next_cw` (Oprev).
//!
//! Topology only changes through [`QuadEdgeMesh::splice`]. Deleted edges stay
//! in the arena with a flag set, so handles held by a caller never dangle.
//!
//! # Example
//!
//! ```
//! use delaunay2d::triangulation::QuadEdgeMesh;
//!
//! // Two edges leaving vertex 0, joined into one ring.
//! let mut mesh = QuadEdgeMesh::new();
//! let a = mesh.make_edge(0, 1);
//! let b = mesh.make_edge(0, 2);
//! mesh.splice(a, b);
//!
//! assert_eq!(mesh.next_ccw(a), b);
//! assert_eq!(mesh.next_cw(a), b);
//! assert_eq!(mesh.ring(a).count(), 2);
//!
//! // Splicing again separates them.
//! mesh.splice(a, b);
//! assert_eq!(mesh.next_ccw(a), a);
//! ```

use std::collections::HashMap;
use thiserror::Error;

/// Handle to one directed edge in a [`QuadEdgeMesh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Position of the record in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    /// The same edge, reversed.
    #[inline]
    pub fn sym(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// True for the half created as `origin → destination` by
    /// [`QuadEdgeMesh::make_edge`].
    #[inline]
    pub fn is_primary(self) -> bool {
        self.0 & 1 == 0
    }
}

#[derive(Debug, Clone)]
struct EdgeRecord {
    origin: usize,
    next_ccw: EdgeId,
    next_cw: EdgeId,
    deleted: bool,
}

/// A ring invariant that does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingDefect {
    /// `next_ccw` and `next_cw` are not inverse at `edge`.
    #[error("next_cw of next_ccw({edge:?}) does not lead back")]
    BrokenInverse {
        /// Edge where the inverse fails.
        edge: EdgeId,
    },

    /// The ring around `edge`'s origin reaches an edge leaving another vertex.
    #[error("ring of {edge:?} contains an edge with a different origin")]
    MixedOrigin {
        /// Edge whose ring was walked.
        edge: EdgeId,
    },

    /// The ring around `edge`'s origin reaches a deleted edge.
    #[error("ring of {edge:?} reaches a deleted edge")]
    DeletedInRing {
        /// Edge whose ring was walked.
        edge: EdgeId,
    },

    /// The ring does not hold every live edge leaving its origin.
    #[error("ring of {edge:?} has {found} edges but its origin has degree {degree}")]
    WrongLength {
        /// Edge whose ring was walked.
        edge: EdgeId,
        /// Edges visited before the ring closed.
        found: usize,
        /// Live edges leaving the origin.
        degree: usize,
    },
}

/// Growable arena of directed edges.
#[derive(Debug, Clone, Default)]
pub struct QuadEdgeMesh {
    records: Vec<EdgeRecord>,
}

impl QuadEdgeMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an arena with room for `edges` undirected edges.
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            records: Vec::with_capacity(2 * edges),
        }
    }

    /// Allocates the edge `origin → destination` and its reverse.
    ///
    /// Both halves start as singleton rings. Returns the primary half.
    pub fn make_edge(&mut self, origin: usize, destination: usize) -> EdgeId {
        let e = EdgeId(self.records.len());
        let s = e.sym();
        self.records.push(EdgeRecord {
            origin,
            next_ccw: e,
            next_cw: e,
            deleted: false,
        });
        self.records.push(EdgeRecord {
            origin: destination,
            next_ccw: s,
            next_cw: s,
            deleted: false,
        });
        e
    }

    #[inline]
    pub fn sym(&self, e: EdgeId) -> EdgeId {
        e.sym()
    }

    #[inline]
    pub fn origin(&self, e: EdgeId) -> usize {
        self.records[e.0].origin
    }

    #[inline]
    pub fn destination(&self, e: EdgeId) -> usize {
        self.records[e.sym().0].origin
    }

    /// Next edge counter-clockwise around the origin of `e`.
    #[inline]
    pub fn next_ccw(&self, e: EdgeId) -> EdgeId {
        self.records[e.0].next_ccw
    }

    /// Next edge clockwise around the origin of `e`.
    #[inline]
    pub fn next_cw(&self, e: EdgeId) -> EdgeId {
        self.records[e.0].next_cw
    }

    /// Next edge counter-clockwise around the face to the left of `e`.
    #[inline]
    pub fn lnext(&self, e: EdgeId) -> EdgeId {
        self.next_cw(e.sym())
    }

    /// Previous edge around the face to the right of `e`.
    #[inline]
    pub fn rprev(&self, e: EdgeId) -> EdgeId {
        self.next_ccw(e.sym())
    }

    #[inline]
    pub fn is_deleted(&self, e: EdgeId) -> bool {
        self.records[e.0].deleted
    }

    /// Number of undirected edges ever allocated, deleted ones included.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.records.len() / 2
    }

    /// Joins the rings of `a` and `b` if they are separate, or splits them
    /// if they are the same ring.
    ///
    /// Swaps the `next_ccw` links of `a` and `b` and repairs the `next_cw`
    /// back-links of the two edges that followed them. Splicing an edge with
    /// itself does nothing.
    pub fn splice(&mut self, a: EdgeId, b: EdgeId) {
        if a == b {
            return;
        }
        let alpha = self.next_ccw(a);
        let beta = self.next_ccw(b);

        self.records[alpha.0].next_cw = b;
        self.records[beta.0].next_cw = a;
        self.records[a.0].next_ccw = beta;
        self.records[b.0].next_ccw = alpha;
    }

    /// Adds an edge from the destination of `a` to the origin of `b`.
    ///
    /// The new edge is placed in the ring at `destination(a)` so that it
    /// follows `a` around their shared left face, and in the ring at
    /// `origin(b)` next to `b`. If `a` and `b` border the same face the face
    /// is split in two.
    pub fn connect(&mut self, a: EdgeId, b: EdgeId) -> EdgeId {
        let e = self.make_edge(self.destination(a), self.origin(b));
        self.splice(e, self.lnext(a));
        self.splice(e.sym(), b);
        e
    }

    /// Detaches `e` from the rings at both endpoints and flags both halves deleted.
    pub fn delete(&mut self, e: EdgeId) {
        self.splice(e, self.next_cw(e));
        let s = e.sym();
        self.splice(s, self.next_cw(s));
        self.records[e.0].deleted = true;
        self.records[s.0].deleted = true;
    }

    /// Iterates the ring around the origin of `e`, counter-clockwise,
    /// starting with `e` itself.
    pub fn ring(&self, e: EdgeId) -> Ring<'_> {
        Ring {
            mesh: self,
            start: e,
            current: Some(e),
            remaining: self.records.len(),
        }
    }

    /// Primary halves of all edges that are not deleted, in creation order.
    pub fn live_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.records.len())
            .step_by(2)
            .map(EdgeId)
            .filter(move |&e| !self.is_deleted(e))
    }

    /// Checks every live directed edge for ring consistency.
    ///
    /// For each edge: `next_cw` undoes `next_ccw`, every edge in its ring
    /// shares its origin and is live, and walking the ring returns to the
    /// edge after exactly as many steps as the origin has live edges.
    pub fn check_rings(&self) -> Result<(), RingDefect> {
        let mut degree: HashMap<usize, usize> = HashMap::new();
        for e in self.live_edges() {
            *degree.entry(self.origin(e)).or_insert(0) += 1;
            *degree.entry(self.destination(e)).or_insert(0) += 1;
        }

        for e in self.live_edges().flat_map(|e| [e, e.sym()]) {
            if self.next_cw(self.next_ccw(e)) != e {
                return Err(RingDefect::BrokenInverse { edge: e });
            }
            let origin = self.origin(e);
            let mut found = 0;
            for r in self.ring(e) {
                if self.is_deleted(r) {
                    return Err(RingDefect::DeletedInRing { edge: e });
                }
                if self.origin(r) != origin {
                    return Err(RingDefect::MixedOrigin { edge: e });
                }
                found += 1;
            }
            let degree = degree.get(&origin).copied().unwrap_or(0);
            if found != degree {
                return Err(RingDefect::WrongLength {
                    edge: e,
                    found,
                    degree,
                });
            }
        }
        Ok(())
    }
}

/// Iterator over an origin ring, see [`QuadEdgeMesh::ring`].
///
/// Stops after visiting as many edges as the arena holds, so a corrupted
/// ring cannot loop forever.
pub struct Ring<'a> {
    mesh: &'a QuadEdgeMesh,
    start: EdgeId,
    current: Option<EdgeId>,
    remaining: usize,
}

impl Iterator for Ring<'_> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<EdgeId> {
        let e = self.current?;
        if self.remaining == 0 {
            self.current = None;
            return None;
        }
        self.remaining -= 1;
        let next = self.mesh.next_ccw(e);
        self.current = (next != self.start).then_some(next);
        Some(e)
    }
}
