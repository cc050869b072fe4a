//! Error types for the railspan core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::id::NodeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Broad classification of [`GraphError`] variants.
///
/// Callers that only care whether an operation referenced a missing node or
/// received a bad argument can match on the kind instead of every variant.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorKind {
    /// A referenced node is not part of the graph.
    NotFound,
    /// An argument was rejected (self-edge or malformed weight).
    InvalidArgument,
    /// The unordered node pair already has an edge.
    DuplicateEdge,
    /// The operation requires at least one node.
    EmptyGraph,
}

/// Errors produced while building a [`crate::Graph`] or requesting its
/// minimum spanning tree.
///
/// Node values are rendered with their `Debug` representation so the error
/// type stays independent of the graph's node type.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint or query referenced a node that was never added.
    #[error("node {node} is not present in the graph")]
    NodeNotFound {
        /// `Debug` rendering of the missing node.
        node: Arc<str>,
    },
    /// Both endpoints of an edge were the same node.
    #[error("self-edge on node {node} is not allowed")]
    SelfEdge {
        /// `Debug` rendering of the node.
        node: Arc<str>,
    },
    /// The edge weight was negative, NaN, or infinite.
    #[error("edge ({left}, {right}) has weight {weight}; weights must be finite and non-negative")]
    InvalidWeight {
        /// `Debug` rendering of the first endpoint as supplied.
        left: Arc<str>,
        /// `Debug` rendering of the second endpoint as supplied.
        right: Arc<str>,
        /// The rejected weight.
        weight: f64,
    },
    /// The unordered pair already carries an edge.
    #[error("an edge between {left} and {right} already exists")]
    DuplicateEdge {
        /// `Debug` rendering of the first endpoint as supplied.
        left: Arc<str>,
        /// `Debug` rendering of the second endpoint as supplied.
        right: Arc<str>,
    },
    /// A minimum spanning tree was requested for a graph without nodes.
    #[error("cannot compute a minimum spanning tree for an empty graph")]
    EmptyGraph,
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge endpoint or query referenced a node that was never added.
        NodeNotFound => NodeNotFound { .. } => "GRAPH_NODE_NOT_FOUND",
        /// Both endpoints of an edge were the same node.
        SelfEdge => SelfEdge { .. } => "GRAPH_SELF_EDGE",
        /// The edge weight was negative, NaN, or infinite.
        InvalidWeight => InvalidWeight { .. } => "GRAPH_INVALID_WEIGHT",
        /// The unordered pair already carries an edge.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
        /// A minimum spanning tree was requested for a graph without nodes.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
    }
}

impl GraphError {
    /// Classifies the error into its broad [`GraphErrorKind`].
    ///
    /// # Examples
    /// ```
    /// use railspan_core::{GraphError, GraphErrorKind};
    ///
    /// assert_eq!(GraphError::EmptyGraph.kind(), GraphErrorKind::EmptyGraph);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> GraphErrorKind {
        match self {
            Self::NodeNotFound { .. } => GraphErrorKind::NotFound,
            Self::SelfEdge { .. } | Self::InvalidWeight { .. } => GraphErrorKind::InvalidArgument,
            Self::DuplicateEdge { .. } => GraphErrorKind::DuplicateEdge,
            Self::EmptyGraph => GraphErrorKind::EmptyGraph,
        }
    }

    pub(crate) fn node_not_found(node: &(impl fmt::Debug + ?Sized)) -> Self {
        Self::NodeNotFound {
            node: render(node),
        }
    }

    pub(crate) fn self_edge(node: &(impl fmt::Debug + ?Sized)) -> Self {
        Self::SelfEdge {
            node: render(node),
        }
    }

    pub(crate) fn invalid_weight(
        left: &(impl fmt::Debug + ?Sized),
        right: &(impl fmt::Debug + ?Sized),
        weight: f64,
    ) -> Self {
        Self::InvalidWeight {
            left: render(left),
            right: render(right),
            weight,
        }
    }

    pub(crate) fn duplicate_edge(
        left: &(impl fmt::Debug + ?Sized),
        right: &(impl fmt::Debug + ?Sized),
    ) -> Self {
        Self::DuplicateEdge {
            left: render(left),
            right: render(right),
        }
    }
}

fn render(value: &(impl fmt::Debug + ?Sized)) -> Arc<str> {
    Arc::from(format!("{value:?}"))
}

/// Errors produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The node was never registered with `make_set`.
    #[error("node {node} is not registered in the disjoint set")]
    NotRegistered {
        /// The unregistered node id.
        node: NodeId,
    },
    /// `make_set` was called twice for the same node.
    #[error("node {node} is already registered in the disjoint set")]
    AlreadyRegistered {
        /// The node id registered twice.
        node: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The node was never registered with `make_set`.
        NotRegistered => NotRegistered { .. } => "DISJOINT_SET_NOT_REGISTERED",
        /// `make_set` was called twice for the same node.
        AlreadyRegistered => AlreadyRegistered { .. } => "DISJOINT_SET_ALREADY_REGISTERED",
    }
}

/// Convenient alias for results returned by the graph API.
pub type Result<T> = core::result::Result<T, GraphError>;
