//! PLL case matching: which permutation case does a ring of side colors
//! show, up to the four orientations of the cube and up to which physical
//! color the user happened to assign to each side.
//!
//! Stored patterns use an abstract symbol alphabet rather than literal
//! colors, since only the sharing structure matters: two ring slots belong
//! to the same side of the permutation iff they carry the same symbol. A
//! match therefore has to build a consistent bijection between symbols and
//! the user's colors, not just compare strings.

use super::conjugated_solution;
use super::grid::rotate_ring;
use crate::cube333::moves::CubeMove;
use crate::error::{CaseTableError, PatternError, PlacementError};
use crate::moves::MoveSequence;
use log::debug;
use serde::Deserialize;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The four side colors a last-layer ring can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum SideColor {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
    /// Orange
    Orange,
}

// The wire shape of one table record.
#[derive(Debug, Deserialize)]
struct PllRecord {
    id: String,
    pattern: String,
    solution: String,
}

/// One permutation case: identifier, abstract ring pattern and algorithm.
#[derive(Debug, Clone)]
pub struct PllCase {
    /// Display identifier, e.g. "H" or "Ua".
    pub id: String,
    /// The 12-slot ring over the case's symbol alphabet.
    pub pattern: [char; 12],
    /// The permuting algorithm for the reference orientation.
    pub solution: MoveSequence<CubeMove>,
}

/// A consistent assignment between a case's symbols and the user's colors:
/// every symbol maps to exactly one color and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolMapping {
    pairs: Vec<(char, SideColor)>,
}

impl SymbolMapping {
    /// The color a symbol was bound to, if any.
    pub fn color_of(&self, symbol: char) -> Option<SideColor> {
        self.pairs
            .iter()
            .find(|&&(s, _)| s == symbol)
            .map(|&(_, c)| c)
    }

    /// The symbol a color was bound to, if any.
    pub fn symbol_of(&self, color: SideColor) -> Option<char> {
        self.pairs
            .iter()
            .find(|&&(_, c)| c == color)
            .map(|&(s, _)| s)
    }

    // Record one (symbol, color) observation. False means it contradicts an
    // earlier binding in either direction.
    fn bind(&mut self, symbol: char, color: SideColor) -> bool {
        match (self.color_of(symbol), self.symbol_of(color)) {
            (Some(c), Some(s)) => c == color && s == symbol,
            (None, None) => {
                self.pairs.push((symbol, color));
                true
            }
            // One side already bound to something else.
            _ => false,
        }
    }
}

fn ring_mapping(case_ring: &[char; 12], colors: &[SideColor; 12]) -> Option<SymbolMapping> {
    let mut mapping = SymbolMapping::default();
    for i in 0..12 {
        if !mapping.bind(case_ring[i], colors[i]) {
            return None;
        }
    }
    Some(mapping)
}

/// An immutable, validated PLL case table.
#[derive(Debug, Clone, Default)]
pub struct PllTable {
    cases: Vec<PllCase>,
}

impl PllTable {
    /// Build a table from already-validated cases.
    pub fn new(cases: Vec<PllCase>) -> Self {
        PllTable { cases }
    }

    /// Load and validate a JSON case table.
    pub fn from_json(json: &str) -> Result<Self, CaseTableError> {
        let records: Vec<PllRecord> = serde_json::from_str(json)?;
        let cases = records
            .into_iter()
            .map(|rec| {
                let symbols: Vec<char> = rec.pattern.chars().collect();
                let pattern: [char; 12] =
                    symbols
                        .try_into()
                        .map_err(|bad: Vec<char>| CaseTableError::Pattern {
                            id: rec.id.clone(),
                            source: PatternError::BadLength {
                                got: bad.len(),
                                expected: 12,
                            },
                        })?;
                let solution =
                    rec.solution
                        .parse()
                        .map_err(|source| CaseTableError::Notation {
                            id: rec.id.clone(),
                            source,
                        })?;
                Ok(PllCase {
                    id: rec.id,
                    pattern,
                    solution,
                })
            })
            .collect::<Result<Vec<_>, CaseTableError>>()?;
        Ok(PllTable::new(cases))
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
    pub fn iter(&self) -> impl Iterator<Item = &PllCase> {
        self.cases.iter()
    }

    /// Find the case whose rotated pattern admits a consistent
    /// symbol-to-color bijection against the user's ring. All twelve slots
    /// must be assigned; cases are tried in table order and the first hit
    /// wins, together with the rotation and the bijection that produced it.
    pub fn find_match(
        &self,
        ring: &[Option<SideColor>; 12],
    ) -> Result<Option<PllMatch<'_>>, PlacementError> {
        let mut colors = [SideColor::Red; 12];
        for (i, slot) in ring.iter().enumerate() {
            colors[i] = slot.ok_or_else(|| PlacementError::Incomplete {
                assigned: ring.iter().flatten().count(),
                required: 12,
            })?;
        }

        for case in &self.cases {
            for turns in 0..4 {
                let rotated = rotate_ring(case.pattern, turns);
                if let Some(mapping) = ring_mapping(&rotated, &colors) {
                    debug!("PLL match {} at rotation {turns}", case.id);
                    return Ok(Some(PllMatch {
                        case,
                        rotation: turns,
                        mapping,
                    }));
                }
            }
        }
        debug!("no PLL match");
        Ok(None)
    }
}

/// A successful PLL lookup: the case, how far the user's cube is turned from
/// the reference orientation, and the symbol-to-color bijection that made
/// the patterns agree.
#[derive(Debug, Clone)]
pub struct PllMatch<'a> {
    /// The matched case.
    pub case: &'a PllCase,
    /// Clockwise quarter turns from the reference orientation, 0 to 3.
    pub rotation: u8,
    /// How the case's symbols correspond to the user's colors.
    pub mapping: SymbolMapping,
}

impl PllMatch<'_> {
    /// The stored algorithm bracketed in whole-cube y rotations so it can be
    /// executed without reorienting the cube first.
    pub fn adjusted_solution(&self) -> MoveSequence<CubeMove> {
        conjugated_solution(&self.case.solution, self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(s: &str) -> [char; 12] {
        s.chars().collect::<Vec<_>>().try_into().unwrap()
    }

    fn reference_color(symbol: char) -> SideColor {
        match symbol {
            'A' => SideColor::Green,
            'B' => SideColor::Orange,
            'C' => SideColor::Red,
            _ => SideColor::Blue,
        }
    }

    fn colored(ring: [char; 12]) -> [Option<SideColor>; 12] {
        ring.map(|s| Some(reference_color(s)))
    }

    // An edge-swap case whose shape repeats every half turn up to
    // relabeling, and a synthetic case with no rotational self-symmetry.
    fn sample_table() -> PllTable {
        PllTable::new(vec![
            PllCase {
                id: "H".into(),
                pattern: pattern("ADABCBCBCDAD"),
                solution: "M2 U M2 U2 M2 U M2".parse().unwrap(),
            },
            PllCase {
                id: "lopsided".into(),
                pattern: pattern("AABBCCDDABCD"),
                solution: "R U R' U' R' F R2 U' R' U' R U R' F'".parse().unwrap(),
            },
        ])
    }

    #[test]
    fn consistent_coloring_matches_with_its_bijection() {
        let table = sample_table();
        let ring = colored(pattern("ADABCBCBCDAD"));
        let found = table.find_match(&ring).unwrap().unwrap();
        assert_eq!(found.case.id, "H");
        assert_eq!(found.rotation, 0);
        assert_eq!(found.mapping.color_of('A'), Some(SideColor::Green));
        assert_eq!(found.mapping.color_of('D'), Some(SideColor::Blue));
        assert_eq!(found.mapping.symbol_of(SideColor::Orange), Some('B'));
    }

    #[test]
    fn any_relabeling_of_a_case_still_matches() {
        let table = sample_table();
        // Same sharing structure, entirely different colors.
        let swapped = pattern("ADABCBCBCDAD").map(|s| {
            Some(match s {
                'A' => SideColor::Red,
                'B' => SideColor::Blue,
                'C' => SideColor::Orange,
                _ => SideColor::Green,
            })
        });
        let found = table.find_match(&swapped).unwrap().unwrap();
        assert_eq!(found.case.id, "H");
        assert_eq!(found.mapping.color_of('A'), Some(SideColor::Red));
    }

    #[test]
    fn rotated_rings_report_their_rotation() {
        let table = sample_table();
        for turns in 0..4 {
            let ring = colored(crate::cases::grid::rotate_ring(
                pattern("AABBCCDDABCD"),
                turns,
            ));
            let found = table.find_match(&ring).unwrap().unwrap();
            assert_eq!(found.case.id, "lopsided", "rotation {turns}");
            assert_eq!(found.rotation, turns, "rotation {turns}");
        }
    }

    #[test]
    fn inconsistent_symbol_coloring_is_rejected() {
        let table = sample_table();
        let mut ring = colored(pattern("AABBCCDDABCD"));
        // Slots 0 and 1 share a symbol; give them different colors.
        ring[1] = Some(SideColor::Red);
        assert!(table.find_match(&ring).unwrap().is_none());
    }

    #[test]
    fn reused_color_across_symbols_is_rejected() {
        let table = sample_table();
        // A and B slots all green: one color would need two preimages.
        let ring = pattern("AABBCCDDABCD").map(|s| {
            Some(match s {
                'A' | 'B' => SideColor::Green,
                'C' => SideColor::Red,
                _ => SideColor::Blue,
            })
        });
        assert!(table.find_match(&ring).unwrap().is_none());
    }

    #[test]
    fn incomplete_ring_is_refused() {
        let table = sample_table();
        let mut ring = colored(pattern("ADABCBCBCDAD"));
        ring[7] = None;
        assert_eq!(
            table.find_match(&ring).unwrap_err(),
            PlacementError::Incomplete {
                assigned: 11,
                required: 12
            }
        );
    }

    #[test]
    fn empty_table_never_matches() {
        let table = PllTable::default();
        let ring = colored(pattern("ADABCBCBCDAD"));
        assert!(table.find_match(&ring).unwrap().is_none());
    }

    #[test]
    fn adjusted_solution_brackets_in_y_rotations() {
        let table = sample_table();
        let ring = colored(crate::cases::grid::rotate_ring(
            pattern("AABBCCDDABCD"),
            2,
        ));
        let found = table.find_match(&ring).unwrap().unwrap();
        assert_eq!(
            found.adjusted_solution().to_string(),
            "y2 R U R' U' R' F R2 U' R' U' R U R' F' y2"
        );
    }

    #[test]
    fn json_table_loads_and_validates() {
        let table = PllTable::from_json(
            r#"[{"id": "H", "pattern": "ADABCBCBCDAD", "solution": "M2 U M2 U2 M2 U M2"}]"#,
        )
        .unwrap();
        assert_eq!(table.len(), 1);

        let short =
            PllTable::from_json(r#"[{"id": "bad", "pattern": "ABC", "solution": "R U R'"}]"#);
        assert!(matches!(short, Err(CaseTableError::Pattern { .. })));
    }

    use proptest::prelude::*;

    proptest! {
        // The distinctness filter on four 4-variant colors accepts only ~9%
        // of draws, so the default global-reject budget is too small to reach
        // the target case count; raise it so the existing property can run.
        #![proptest_config(ProptestConfig { max_global_rejects: 100_000, ..ProptestConfig::default() })]
        // Whatever four colors the user assigns, a faithful coloring of a
        // stored shape must keep matching that case.
        #[test]
        fn faithful_colorings_always_match(
            a in any::<SideColor>(),
            b in any::<SideColor>(),
            c in any::<SideColor>(),
            d in any::<SideColor>(),
        ) {
            prop_assume!(a != b && a != c && a != d && b != c && b != d && c != d);
            let table = sample_table();
            let ring = pattern("ADABCBCBCDAD").map(|s| {
                Some(match s {
                    'A' => a,
                    'B' => b,
                    'C' => c,
                    _ => d,
                })
            });
            let found = table.find_match(&ring).unwrap().unwrap();
            assert_eq!(found.case.id, "H");
            assert_eq!(found.mapping.color_of('A'), Some(a));
        }
    }
}
