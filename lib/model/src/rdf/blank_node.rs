use crate::{ConstructionError, IncomparableError};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(0);

/// A process-unique number identifying a [BlankNodeScope].
///
/// The number is only used for hashing and diagnostics. Scopes themselves are compared by
/// identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u64);

impl ScopeId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug)]
struct ScopeInner {
    id: ScopeId,
}

/// The identity scope of blank nodes.
///
/// A scope is created once per ingestion source (e.g., a parsed file) and attached to every
/// [BlankNode] minted from that source. This gives blank node ids uniqueness without a global
/// allocator. Two scopes are equal only if they are the same scope, and scopes are never merged.
///
/// Each [BlankNode] holds a handle to its scope, so a scope lives at least as long as any blank
/// node that references it.
#[derive(Clone)]
pub struct BlankNodeScope(Arc<ScopeInner>);

impl BlankNodeScope {
    /// Creates a new scope that is distinct from all other scopes.
    pub fn new() -> Self {
        let id = NEXT_SCOPE_ID.fetch_add(1, AtomicOrdering::Relaxed);
        Self(Arc::new(ScopeInner { id: ScopeId(id) }))
    }

    pub fn id(&self) -> ScopeId {
        self.0.id
    }
}

impl Default for BlankNodeScope {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for BlankNodeScope {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for BlankNodeScope {}

impl Hash for BlankNodeScope {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for BlankNodeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlankNodeScope({})", self.id())
    }
}

/// An RDF blank node, identified by a numeric id within its [BlankNodeScope].
///
/// Blank nodes of the same scope are ordered by their id. Blank nodes of different scopes are
/// never equal and have no relative order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BlankNode {
    scope: BlankNodeScope,
    id: u64,
}

impl BlankNode {
    pub fn new(scope: &BlankNodeScope, id: u64) -> Self {
        Self {
            scope: scope.clone(),
            id,
        }
    }

    pub fn scope(&self) -> &BlankNodeScope {
        &self.scope
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Orders two blank nodes of the same scope by their id.
    ///
    /// Returns an error if the blank nodes originate from different scopes.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, IncomparableError> {
        if self.scope != other.scope {
            return Err(IncomparableError::BlankNodeScopes {
                lhs: self.scope.id(),
                rhs: other.scope.id(),
            });
        }
        Ok(self.id.cmp(&other.id))
    }
}

impl PartialOrd for BlankNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl fmt::Debug for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlankNode(id={}, factory={:?})", self.id, self.scope)
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Mints blank nodes for a single ingestion source.
///
/// Every factory owns a fresh [BlankNodeScope] and hands out sequential ids. Labelled blank nodes
/// (e.g., `_:b0` in a Turtle document) are mapped to the same [BlankNode] for as long as the
/// factory lives.
///
/// Minting requires `&mut self`. Hosts that share a factory across threads must synchronize the
/// access themselves.
#[derive(Debug)]
pub struct BlankNodeFactory {
    scope: BlankNodeScope,
    /// `None` once the id `u64::MAX` has been handed out.
    next_id: Option<u64>,
    labels: FxHashMap<String, u64>,
}

impl BlankNodeFactory {
    pub fn new() -> Self {
        Self::with_initial_id(0)
    }

    /// Creates a factory whose first minted blank node has the id `initial_id`.
    pub fn with_initial_id(initial_id: u64) -> Self {
        Self {
            scope: BlankNodeScope::new(),
            next_id: Some(initial_id),
            labels: FxHashMap::default(),
        }
    }

    pub fn scope(&self) -> &BlankNodeScope {
        &self.scope
    }

    /// Mints a blank node that has not been handed out by this factory before.
    ///
    /// Fails once all ids up to `u64::MAX` have been handed out. Ids are never reused.
    pub fn fresh(&mut self) -> Result<BlankNode, ConstructionError> {
        let id = self
            .next_id
            .ok_or(ConstructionError::BlankNodeIdsExhausted {
                scope: self.scope.id(),
            })?;
        self.next_id = id.checked_add(1);
        Ok(BlankNode::new(&self.scope, id))
    }

    /// Returns the blank node for `label`, minting a fresh one on the first request.
    pub fn for_label(&mut self, label: &str) -> Result<BlankNode, ConstructionError> {
        if let Some(id) = self.labels.get(label) {
            return Ok(BlankNode::new(&self.scope, *id));
        }

        let node = self.fresh()?;
        self.labels.insert(label.to_owned(), node.id());
        Ok(node)
    }
}

impl Default for BlankNodeFactory {
    fn default() -> Self {
        Self::new()
    }
}
