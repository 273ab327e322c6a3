//! Arena storage for lazily evaluated series nodes.
//!
//! Every [`Series`] is a 32-bit handle into a [`SeriesArena`] that owns
//! the node storage. A node is a cons cell: one coefficient plus a
//! suspended computation for the rest of the sequence. Self-referential
//! definitions — a series whose tail is expressed in terms of the series
//! itself — are ordinary index references, so no ownership cycles can
//! form and dropping the arena reclaims every node, recipe and cached
//! value at once.

use std::fmt;
use std::mem;

use fluxion_rings::traits::Field;

/// Trait bound for series coefficients.
///
/// Coefficients live in a [`Field`] and must be shareable across threads
/// so that suspended tail computations remain `Send`.
pub trait Coeff: Field + Send + Sync + 'static {}

impl<T: Field + Send + Sync + 'static> Coeff for T {}

/// A handle to a series stored in a [`SeriesArena`].
///
/// Handles are lightweight 32-bit indices that can be copied freely.
/// Equality of handles is identity of nodes, not equality of the
/// sequences they denote; compare prefixes with
/// [`SeriesArena::eq_prefix`] instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Series(u32);

impl Series {
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this handle.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Series({})", self.0)
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A suspended tail computation.
type Recipe<R> = Box<dyn FnOnce(&mut SeriesArena<R>) -> Series + Send>;

/// The state of a node's tail.
///
/// Forcing transitions `Pending` → `Done` exactly once; the recipe is
/// consumed by the first force and later forces return the cached handle.
enum Tail<R: Coeff> {
    /// Not yet forced.
    Pending(Recipe<R>),
    /// Currently being forced. Observing this state means the tail's own
    /// recipe demanded the tail it is supposed to produce.
    Forcing,
    /// Forced and memoized.
    Done(Series),
}

enum Slot<R: Coeff> {
    /// A cons cell: one coefficient plus the rest of the sequence.
    Cell { head: R, tail: Tail<R> },
    /// A declared placeholder whose definition has not been bound yet.
    Vacant,
}

/// The arena that owns every series node.
///
/// All series operations are methods on the arena; the [`Series`] values
/// they hand out are only meaningful together with the arena that
/// created them.
pub struct SeriesArena<R: Coeff> {
    nodes: Vec<Slot<R>>,
    /// Cached handle for the all-zero series.
    zero: Option<Series>,
}

impl<R: Coeff> SeriesArena<R> {
    /// Creates a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            zero: None,
        }
    }

    /// Creates an arena with pre-allocated node capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            zero: None,
        }
    }

    /// Returns the number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, slot: Slot<R>) -> Series {
        let index = self.nodes.len();
        assert!(index < u32::MAX as usize, "series arena capacity exceeded");
        self.nodes.push(slot);
        Series::new(index as u32)
    }

    /// Creates a series from a coefficient and an existing tail.
    pub fn cons(&mut self, head: R, tail: Series) -> Series {
        self.push(Slot::Cell {
            head,
            tail: Tail::Done(tail),
        })
    }

    /// Creates a series from a coefficient and a suspended tail.
    ///
    /// The recipe runs at most once, on the first [`tail`](Self::tail)
    /// force; its result is cached for every later force.
    pub fn defer<F>(&mut self, head: R, recipe: F) -> Series
    where
        F: FnOnce(&mut Self) -> Series + Send + 'static,
    {
        self.push(Slot::Cell {
            head,
            tail: Tail::Pending(Box::new(recipe)),
        })
    }

    /// Declares a placeholder series whose definition is supplied later
    /// via [`bind`](Self::bind).
    ///
    /// The handle may be mentioned freely inside defining expressions
    /// before it is bound; only reading its head or tail is an error
    /// until then.
    pub fn declare(&mut self) -> Series {
        self.push(Slot::Vacant)
    }

    /// Binds a declared placeholder to its defining series.
    ///
    /// Only the definition's first coefficient is read here; the rest of
    /// the definition stays suspended, so the definition may mention the
    /// placeholder itself (or a sibling placeholder bound before either
    /// is forced).
    ///
    /// # Panics
    ///
    /// Panics if `placeholder` was not created by
    /// [`declare`](Self::declare) or has already been bound, or if the
    /// definition's own head is not readable yet.
    pub fn bind(&mut self, placeholder: Series, definition: Series) {
        assert!(
            matches!(self.nodes[placeholder.index() as usize], Slot::Vacant),
            "series {placeholder} is already defined and cannot be bound again"
        );
        let head = self.head(definition);
        self.nodes[placeholder.index() as usize] = Slot::Cell {
            head,
            tail: Tail::Pending(Box::new(move |arena| arena.tail(definition))),
        };
    }

    /// Builds a self-referential series in one step: declares a
    /// placeholder, passes it to `define`, and binds the result.
    ///
    /// The handle given to `define` is the series being defined; the
    /// defining expression may mention it anywhere as long as nothing
    /// forces it before `define` returns.
    pub fn fixed_point<F>(&mut self, define: F) -> Series
    where
        F: FnOnce(&mut Self, Series) -> Series,
    {
        let placeholder = self.declare();
        let definition = define(self, placeholder);
        self.bind(placeholder, definition);
        placeholder
    }

    /// Returns the first coefficient of a series.
    ///
    /// # Panics
    ///
    /// Panics if `s` is a placeholder that has not been bound yet.
    #[must_use]
    pub fn head(&self, s: Series) -> R {
        match &self.nodes[s.index() as usize] {
            Slot::Cell { head, .. } => head.clone(),
            Slot::Vacant => panic!("series {s} was read before its definition was bound"),
        }
    }

    /// Returns the series of all coefficients after the first, forcing
    /// and memoizing the suspended computation if necessary.
    ///
    /// # Panics
    ///
    /// Panics if `s` is a placeholder that has not been bound yet, or if
    /// the tail's own computation circles back and demands the tail it
    /// is producing (a definition that never makes progress).
    pub fn tail(&mut self, s: Series) -> Series {
        let index = s.index() as usize;
        let recipe = match &mut self.nodes[index] {
            Slot::Vacant => panic!("series {s} was forced before its definition was bound"),
            Slot::Cell { tail, .. } => match tail {
                Tail::Done(t) => return *t,
                Tail::Forcing => panic!(
                    "series {s} demands its own tail while computing it; \
                     the definition is not productive"
                ),
                Tail::Pending(_) => match mem::replace(tail, Tail::Forcing) {
                    Tail::Pending(recipe) => recipe,
                    _ => unreachable!(),
                },
            },
        };
        let forced = recipe(self);
        match &mut self.nodes[index] {
            Slot::Cell { tail, .. } => *tail = Tail::Done(forced),
            Slot::Vacant => unreachable!(),
        }
        forced
    }

    pub(crate) fn cached_zero(&self) -> Option<Series> {
        self.zero
    }

    pub(crate) fn set_cached_zero(&mut self, z: Series) {
        self.zero = Some(z);
    }

    pub(crate) fn next_index(&self) -> u32 {
        let index = self.nodes.len();
        assert!(index < u32::MAX as usize, "series arena capacity exceeded");
        index as u32
    }
}

impl<R: Coeff> Default for SeriesArena<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Coeff> fmt::Debug for SeriesArena<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeriesArena")
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluxion_rings::rationals::Q;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn q(n: i64, d: i64) -> Q {
        Q::new(n, d)
    }

    #[test]
    fn test_cons_head_tail() {
        let mut a = SeriesArena::new();
        let z = a.zero();
        let s = a.cons(q(7, 1), z);

        assert_eq!(a.head(s), q(7, 1));
        assert_eq!(a.tail(s), z);
    }

    #[test]
    fn test_tail_is_memoized() {
        let mut a = SeriesArena::new();
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);

        let s = a.defer(q(1, 1), move |arena| {
            counter.fetch_add(1, Ordering::SeqCst);
            arena.zero()
        });

        let t1 = a.tail(s);
        let t2 = a.tail(s);
        assert_eq!(t1, t2);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fixed_point_repeating() {
        // ones = cons(1, ones)
        let mut a = SeriesArena::new();
        let ones = a.fixed_point(|arena, this| arena.cons(q(1, 1), this));

        assert_eq!(a.take(4, ones), vec![q(1, 1); 4]);
        // The self-referential tail resolves to the node itself.
        assert_eq!(a.tail(ones), ones);
    }

    #[test]
    fn test_mutual_placeholders() {
        // a = cons(0, b), b = cons(1, a): the alternating sequence.
        let mut arena = SeriesArena::new();
        let first = arena.declare();
        let second = arena.declare();
        let first_def = arena.cons(q(0, 1), second);
        let second_def = arena.cons(q(1, 1), first);
        arena.bind(first, first_def);
        arena.bind(second, second_def);

        assert_eq!(
            arena.take(5, first),
            vec![q(0, 1), q(1, 1), q(0, 1), q(1, 1), q(0, 1)]
        );
    }

    #[test]
    #[should_panic(expected = "before its definition was bound")]
    fn test_unbound_head_panics() {
        let mut a = SeriesArena::<Q>::new();
        let p = a.declare();
        let _ = a.head(p);
    }

    #[test]
    #[should_panic(expected = "before its definition was bound")]
    fn test_unbound_tail_panics() {
        let mut a = SeriesArena::<Q>::new();
        let p = a.declare();
        let _ = a.tail(p);
    }

    #[test]
    #[should_panic(expected = "cannot be bound again")]
    fn test_double_bind_panics() {
        let mut a = SeriesArena::<Q>::new();
        let p = a.declare();
        let def = a.one();
        a.bind(p, def);
        a.bind(p, def);
    }

    #[test]
    #[should_panic(expected = "not productive")]
    fn test_self_demanding_tail_panics() {
        let mut a = SeriesArena::new();
        let s = a.defer(q(1, 1), move |arena| {
            // Demands the very tail this recipe is supposed to produce.
            arena.tail(Series::new(0))
        });
        let _ = a.tail(s);
    }

    #[test]
    fn test_arena_len() {
        let mut a = SeriesArena::<Q>::new();
        assert!(a.is_empty());
        let _ = a.zero();
        assert_eq!(a.len(), 1);
    }
}
