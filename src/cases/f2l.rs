//! F2L pair lookup. Unlike the last-layer tools there is no rotation search
//! here: the tool fixes the cube against its own front-right reference, so
//! cases are keyed directly by named slots and orientations and a lookup is
//! an exact match or a miss.

use crate::cube333::moves::CubeMove;
use crate::cube333::{CornerTwist, EdgeFlip};
use crate::error::CaseTableError;
use crate::moves::MoveSequence;
use log::debug;
use serde::Deserialize;

/// The corner slots the F2L tool tracks. The slot inside the working pair's
/// position is spelled `FR_SLOT` in the interchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[allow(missing_docs)]
pub enum CornerSlot {
    UFR,
    #[serde(rename = "FR_SLOT")]
    DFR,
    UFL,
    UBL,
    UBR,
}

/// The edge slots the F2L tool tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[allow(missing_docs)]
pub enum EdgeSlot {
    UR,
    UF,
    UL,
    UB,
    FR,
}

/// Where the tracked corner sits and how it is twisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornerPlacement {
    /// The slot holding the corner.
    pub slot: CornerSlot,
    /// The corner's twist in that slot.
    pub twist: CornerTwist,
}

/// Where the tracked edge sits and how it is flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgePlacement {
    /// The slot holding the edge.
    pub slot: EdgeSlot,
    /// The edge's flip in that slot.
    pub flip: EdgeFlip,
}

// The wire shape of one table record.
#[derive(Debug, Deserialize)]
struct F2lRecord {
    name: String,
    #[serde(rename = "cornerPos")]
    corner_pos: CornerSlot,
    #[serde(rename = "cornerOri")]
    corner_ori: u8,
    #[serde(rename = "edgePos")]
    edge_pos: EdgeSlot,
    #[serde(rename = "edgeOri")]
    edge_ori: u8,
    solution: String,
}

/// One pairing case: where the two pieces sit and the insertion algorithm.
#[derive(Debug, Clone)]
pub struct F2lCase {
    /// Display name, e.g. "F2L 6".
    pub name: String,
    /// The corner placement this case is keyed by.
    pub corner: CornerPlacement,
    /// The edge placement this case is keyed by.
    pub edge: EdgePlacement,
    /// The pairing and insertion algorithm.
    pub solution: MoveSequence<CubeMove>,
}

/// An immutable, validated F2L case table.
#[derive(Debug, Clone, Default)]
pub struct F2lTable {
    cases: Vec<F2lCase>,
}

impl F2lTable {
    /// Build a table from already-validated cases.
    pub fn new(cases: Vec<F2lCase>) -> Self {
        F2lTable { cases }
    }

    /// Load and validate a JSON case table.
    pub fn from_json(json: &str) -> Result<Self, CaseTableError> {
        let records: Vec<F2lRecord> = serde_json::from_str(json)?;
        let cases = records
            .into_iter()
            .map(|rec| {
                let twist =
                    CornerTwist::try_from(rec.corner_ori).map_err(|_| CaseTableError::Orientation {
                        id: rec.name.clone(),
                    })?;
                let flip =
                    EdgeFlip::try_from(rec.edge_ori).map_err(|_| CaseTableError::Orientation {
                        id: rec.name.clone(),
                    })?;
                let solution =
                    rec.solution
                        .parse()
                        .map_err(|source| CaseTableError::Notation {
                            id: rec.name.clone(),
                            source,
                        })?;
                Ok(F2lCase {
                    name: rec.name,
                    corner: CornerPlacement {
                        slot: rec.corner_pos,
                        twist,
                    },
                    edge: EdgePlacement {
                        slot: rec.edge_pos,
                        flip,
                    },
                    solution,
                })
            })
            .collect::<Result<Vec<_>, CaseTableError>>()?;
        Ok(F2lTable::new(cases))
    }

    /// Number of cases in the table.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the table holds no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterate over the stored cases in table order.
    pub fn iter(&self) -> impl Iterator<Item = &F2lCase> {
        self.cases.iter()
    }

    /// Look up the case keyed by exactly this corner and edge placement.
    /// A miss is a normal outcome, not an error.
    pub fn find_match(&self, corner: CornerPlacement, edge: EdgePlacement) -> Option<&F2lCase> {
        let found = self
            .cases
            .iter()
            .find(|c| c.corner == corner && c.edge == edge);
        match found {
            Some(case) => debug!("F2L match {}", case.name),
            None => debug!("no F2L case for {corner:?} {edge:?}"),
        }
        found
    }
}
