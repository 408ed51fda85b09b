//! The operation catalog: ten fixed transformation rules.
//!
//! The catalog is process-wide constant data. Ids are order-significant and
//! are used as array indices everywhere (node caches, search results,
//! serialized paths). Names and glyphs are presentation only; nothing matches
//! on them.
//!
//! | Id | Name         | Glyph | Takes                     | Makes                     |
//! |----|--------------|-------|---------------------------|---------------------------|
//! | 0  | Invert-left  | `<`   | Zeta Theta Gamma Omega    | Lambda Xi Epsilon Phi     |
//! | 1  | Invert-right | `>`   | Lambda Xi Epsilon Phi     | Zeta Theta Gamma Omega    |
//! | 2  | Fold-1       | `a`   | Lambda Omega              | Xi Theta                  |
//! | 3  | Fold-2       | `b`   | Xi Gamma                  | Zeta Lambda               |
//! | 4  | Fold-3       | `c`   | Xi Zeta                   | Theta Phi                 |
//! | 5  | Fold-4       | `d`   | Lambda Theta              | Epsilon Zeta              |
//! | 6  | Fold-5       | `e`   | Theta Epsilon             | Phi Omega                 |
//! | 7  | Fold-6       | `f`   | Zeta Phi                  | Gamma Epsilon             |
//! | 8  | Fold-7       | `g`   | Phi Gamma                 | Omega Xi                  |
//! | 9  | Fold-8       | `h`   | Epsilon Omega             | Lambda Gamma              |

use std::fmt;

use crate::carrier::polarization::Polarization::{
    self, Epsilon, Gamma, Lambda, Omega, Phi, Theta, Xi, Zeta,
};
use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash};
use crate::proof::hash_domain::HashDomain;

/// Number of operations in the catalog.
pub const CATALOG_LEN: usize = 10;

/// Separator used by [`path_to_string`].
pub const PATH_SEPARATOR: &str = " -> ";

/// Index of an operation in [`CATALOG`].
///
/// Only ids `0..CATALOG_LEN` can be constructed, so every id indexes the
/// catalog without a bounds failure.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OperationId(u8);

pub const OP_INVERT_LEFT: OperationId = OperationId(0);
pub const OP_INVERT_RIGHT: OperationId = OperationId(1);
pub const OP_FOLD_1: OperationId = OperationId(2);
pub const OP_FOLD_2: OperationId = OperationId(3);
pub const OP_FOLD_3: OperationId = OperationId(4);
pub const OP_FOLD_4: OperationId = OperationId(5);
pub const OP_FOLD_5: OperationId = OperationId(6);
pub const OP_FOLD_6: OperationId = OperationId(7);
pub const OP_FOLD_7: OperationId = OperationId(8);
pub const OP_FOLD_8: OperationId = OperationId(9);

impl OperationId {
    /// Construct from a raw id. `None` if `raw >= CATALOG_LEN`.
    #[must_use]
    pub const fn new(raw: u8) -> Option<Self> {
        if (raw as usize) < CATALOG_LEN {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Raw id.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Array index form of the id.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All ids in catalog order.
    pub fn all() -> impl Iterator<Item = Self> {
        #[allow(clippy::cast_possible_truncation)]
        (0..CATALOG_LEN as u8).map(Self)
    }
}

impl fmt::Debug for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OperationId({} / {})", self.0, operation_name(*self))
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(operation_name(*self))
    }
}

/// Family of a catalog operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Global four-for-four swap between the two balance groups.
    Invert,
    /// Local two-for-two rule.
    Fold,
}

impl OperationKind {
    /// Canonical string for JSON serialization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Invert => "invert",
            Self::Fold => "fold",
        }
    }
}

/// One immutable catalog entry.
///
/// `takes` and `makes` are multisets: a polarization may appear more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationV1 {
    /// Long presentation name (e.g. `"Fold-3"`).
    pub name: &'static str,
    /// Single-character presentation glyph (e.g. `"c"`).
    pub glyph: &'static str,
    pub kind: OperationKind,
    /// Consumed polarizations.
    pub takes: &'static [Polarization],
    /// Produced polarizations.
    pub makes: &'static [Polarization],
}

/// The catalog, in id order.
pub static CATALOG: [OperationV1; CATALOG_LEN] = [
    OperationV1 {
        name: "Invert-left",
        glyph: "<",
        kind: OperationKind::Invert,
        takes: &[Zeta, Theta, Gamma, Omega],
        makes: &[Lambda, Xi, Epsilon, Phi],
    },
    OperationV1 {
        name: "Invert-right",
        glyph: ">",
        kind: OperationKind::Invert,
        takes: &[Lambda, Xi, Epsilon, Phi],
        makes: &[Zeta, Theta, Gamma, Omega],
    },
    OperationV1 {
        name: "Fold-1",
        glyph: "a",
        kind: OperationKind::Fold,
        takes: &[Lambda, Omega],
        makes: &[Xi, Theta],
    },
    OperationV1 {
        name: "Fold-2",
        glyph: "b",
        kind: OperationKind::Fold,
        takes: &[Xi, Gamma],
        makes: &[Zeta, Lambda],
    },
    OperationV1 {
        name: "Fold-3",
        glyph: "c",
        kind: OperationKind::Fold,
        takes: &[Xi, Zeta],
        makes: &[Theta, Phi],
    },
    OperationV1 {
        name: "Fold-4",
        glyph: "d",
        kind: OperationKind::Fold,
        takes: &[Lambda, Theta],
        makes: &[Epsilon, Zeta],
    },
    OperationV1 {
        name: "Fold-5",
        glyph: "e",
        kind: OperationKind::Fold,
        takes: &[Theta, Epsilon],
        makes: &[Phi, Omega],
    },
    OperationV1 {
        name: "Fold-6",
        glyph: "f",
        kind: OperationKind::Fold,
        takes: &[Zeta, Phi],
        makes: &[Gamma, Epsilon],
    },
    OperationV1 {
        name: "Fold-7",
        glyph: "g",
        kind: OperationKind::Fold,
        takes: &[Phi, Gamma],
        makes: &[Omega, Xi],
    },
    OperationV1 {
        name: "Fold-8",
        glyph: "h",
        kind: OperationKind::Fold,
        takes: &[Epsilon, Omega],
        makes: &[Lambda, Gamma],
    },
];

/// Catalog entry for `id`.
#[must_use]
pub fn operation(id: OperationId) -> &'static OperationV1 {
    &CATALOG[id.index()]
}

/// Long-form name, e.g. `"Fold-3"`.
#[must_use]
pub fn operation_name(id: OperationId) -> &'static str {
    operation(id).name
}

/// Single-character glyph, e.g. `"c"`.
#[must_use]
pub fn operation_glyph(id: OperationId) -> &'static str {
    operation(id).glyph
}

/// The catalog-defined inverse of `id`, if it has one.
///
/// Only the invert pair are inverses of each other; folds have none.
#[must_use]
pub const fn inverse_of(id: OperationId) -> Option<OperationId> {
    match id.0 {
        0 => Some(OP_INVERT_RIGHT),
        1 => Some(OP_INVERT_LEFT),
        _ => None,
    }
}

/// Join long-form names with `" -> "`. Empty path renders as `""`.
#[must_use]
pub fn path_to_string(path: &[OperationId]) -> String {
    path.iter()
        .map(|&id| operation_name(id))
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}

/// Concatenate glyphs, e.g. `"<ac"`.
#[must_use]
pub fn path_to_glyphs(path: &[OperationId]) -> String {
    path.iter().map(|&id| operation_glyph(id)).collect()
}

/// Serialize the catalog as a JSON value (one object per operation, id order).
#[must_use]
pub fn catalog_to_json() -> serde_json::Value {
    let ops: Vec<serde_json::Value> = OperationId::all()
        .map(|id| {
            let op = operation(id);
            serde_json::json!({
                "glyph": op.glyph,
                "id": id.as_u8(),
                "kind": op.kind.as_str(),
                "makes": op.makes.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
                "name": op.name,
                "takes": op.takes.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
            })
        })
        .collect();
    serde_json::json!({
        "operations": ops,
        "schema_version": "operation_catalog.v1",
    })
}

/// Content digest of the catalog snapshot.
///
/// # Errors
///
/// Returns [`CanonError`] if canonical serialization fails.
pub fn catalog_digest() -> Result<ContentHash, CanonError> {
    let bytes = canonical_json_bytes(&catalog_to_json())?;
    Ok(canonical_hash(HashDomain::OperationCatalog, &bytes))
}
