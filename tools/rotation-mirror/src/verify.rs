//! Inverse check for mirrored rotations
//!
//! Interprets the `set_at`/`get_at` lines of each rotation as a facelet
//! permutation, runs it on a cube whose facelets are all distinct, and
//! checks that a forward rotation followed by its mirror restores the cube.

use tracing::{debug, warn};

use crate::config::MirrorConfig;
use crate::error::MirrorError;
use crate::model::{LineKind, classify};

pub const SIDES: usize = 6;
pub const FACES: usize = 9;
const CENTRE: usize = 4;
const STORED: usize = FACES - 1;

/// Cube with six sides of eight stored facelets. The centre of each side
/// never moves and is not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    sides: [[u8; STORED]; SIDES],
}

impl Cube {
    /// Solved cube: every facelet of side `n` has colour `n`.
    pub fn solved() -> Self {
        let mut sides = [[0u8; STORED]; SIDES];
        for (colour, side) in sides.iter_mut().enumerate() {
            *side = [colour as u8; STORED];
        }
        Self { sides }
    }

    /// Cube where every stored facelet holds a distinct value.
    pub fn new_debug() -> Self {
        let mut sides = [[0u8; STORED]; SIDES];
        for (i, side) in sides.iter_mut().enumerate() {
            for (j, colour) in side.iter_mut().enumerate() {
                *colour = (i * STORED + j) as u8;
            }
        }
        Self { sides }
    }

    fn index(side: usize, face: usize) -> Result<usize, MirrorError> {
        if side >= SIDES || face >= FACES {
            return Err(MirrorError::FaceletOutOfRange { side, face });
        }
        match face {
            CENTRE => Err(MirrorError::CentrePiece { side }),
            f if f < CENTRE => Ok(f),
            f => Ok(f - 1),
        }
    }

    pub fn get_at(&self, side: usize, face: usize) -> Result<u8, MirrorError> {
        Ok(self.sides[side][Self::index(side, face)?])
    }

    pub fn set_at(&mut self, side: usize, face: usize, colour: u8) -> Result<(), MirrorError> {
        let idx = Self::index(side, face)?;
        self.sides[side][idx] = colour;
        Ok(())
    }
}

/// A `(side, face)` coordinate
pub type Facelet = (usize, usize);

/// One `new_cube.set_at(dst, self.get_at(src))` statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub dst: Facelet,
    pub src: Facelet,
}

/// A rotation function read back from source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationFn {
    pub name: String,
    pub moves: Vec<Move>,
}

impl RotationFn {
    /// All reads come from `cube`; all writes go to the returned copy.
    pub fn apply(&self, cube: &Cube) -> Result<Cube, MirrorError> {
        let mut next = cube.clone();
        for mv in &self.moves {
            let colour = cube.get_at(mv.src.0, mv.src.1)?;
            next.set_at(mv.dst.0, mv.dst.1, colour)?;
        }
        Ok(next)
    }
}

fn function_name(line: &str) -> Option<String> {
    let rest = &line[line.find("fn ")? + 3..];
    let name = rest[..rest.find('(')?].trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn digit_at(chars: &[char], column: usize, line: usize) -> Result<usize, MirrorError> {
    let found = chars.get(column).copied().unwrap_or(' ');
    found
        .to_digit(10)
        .map(|d| d as usize)
        .ok_or(MirrorError::NotADigit { line, column, found })
}

/// Read rotation functions out of source text.
///
/// Coordinates are read from the same fixed columns the mirror pass swaps.
pub fn parse_rotations(text: &str, config: &MirrorConfig) -> Result<Vec<RotationFn>, MirrorError> {
    let swap = &config.swap;
    let mut rotations: Vec<RotationFn> = Vec::new();

    for (idx, line) in text.split('\n').enumerate() {
        let line_no = idx + 1;
        match classify(line, &config.markers) {
            LineKind::FunctionHeader => {
                let name =
                    function_name(line).ok_or(MirrorError::MissingFunctionName { line: line_no })?;
                rotations.push(RotationFn {
                    name,
                    moves: Vec::new(),
                });
            }
            LineKind::Assignment => {
                let chars: Vec<char> = line.chars().collect();
                let mv = Move {
                    dst: (
                        digit_at(&chars, swap.left, line_no)?,
                        digit_at(&chars, swap.left + swap.stride, line_no)?,
                    ),
                    src: (
                        digit_at(&chars, swap.right, line_no)?,
                        digit_at(&chars, swap.right + swap.stride, line_no)?,
                    ),
                };
                rotations
                    .last_mut()
                    .ok_or(MirrorError::OrphanAssignment { line: line_no })?
                    .moves
                    .push(mv);
            }
            LineKind::Passthrough => {}
        }
    }

    Ok(rotations)
}

/// Outcome for one forward/mirror pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairResult {
    pub forward: String,
    pub mirrored: String,
    /// Mirrored name is the forward name plus the configured suffix.
    pub named: bool,
    /// Forward then mirrored restores the cube.
    pub undoes_forward: bool,
    /// Mirrored then forward restores the cube.
    pub undone_by_forward: bool,
}

impl PairResult {
    pub fn passed(&self) -> bool {
        self.named && self.undoes_forward && self.undone_by_forward
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    pub pairs: Vec<PairResult>,
}

impl VerifyReport {
    pub fn passed(&self) -> bool {
        !self.pairs.is_empty() && self.pairs.iter().all(PairResult::passed)
    }
}

/// Check every mirrored rotation against its forward rotation.
///
/// Functions are paired by position. A count mismatch leaves the extra
/// functions unpaired, which is reported as a failed pair.
pub fn verify_inverses(
    source: &str,
    mirrored: &str,
    config: &MirrorConfig,
) -> Result<VerifyReport, MirrorError> {
    let forward = parse_rotations(source, config)?;
    let reverse = parse_rotations(mirrored, config)?;

    if forward.len() != reverse.len() {
        warn!(
            forward = forward.len(),
            mirrored = reverse.len(),
            "rotation counts differ"
        );
    }

    let start = Cube::new_debug();
    let mut report = VerifyReport::default();

    for i in 0..forward.len().max(reverse.len()) {
        let pair = match (forward.get(i), reverse.get(i)) {
            (Some(f), Some(r)) => PairResult {
                forward: f.name.clone(),
                mirrored: r.name.clone(),
                named: r.name == format!("{}{}", f.name, config.header.suffix),
                undoes_forward: r.apply(&f.apply(&start)?)? == start,
                undone_by_forward: f.apply(&r.apply(&start)?)? == start,
            },
            (f, r) => PairResult {
                forward: f.map(|f| f.name.clone()).unwrap_or_default(),
                mirrored: r.map(|r| r.name.clone()).unwrap_or_default(),
                named: false,
                undoes_forward: false,
                undone_by_forward: false,
            },
        };
        debug!(forward = %pair.forward, mirrored = %pair.mirrored, passed = pair.passed());
        report.pairs.push(pair);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATE: &str = "
    fn rotate_x(&self) -> Cube {
        let mut new_cube = self.clone();
        new_cube.set_at(0, 0, self.get_at(1, 0));
        new_cube.set_at(1, 0, self.get_at(2, 0));
        new_cube.set_at(2, 0, self.get_at(0, 0));
        new_cube
    }
";

    #[test]
    fn test_centre_is_not_addressable() {
        let mut cube = Cube::solved();
        assert!(matches!(cube.get_at(3, 4), Err(MirrorError::CentrePiece { side: 3 })));
        assert!(cube.set_at(0, 4, 1).is_err());
    }

    #[test]
    fn test_out_of_range() {
        let cube = Cube::solved();
        assert!(matches!(
            cube.get_at(6, 0),
            Err(MirrorError::FaceletOutOfRange { side: 6, face: 0 })
        ));
        assert!(cube.get_at(0, 9).is_err());
    }

    #[test]
    fn test_face_indexing_skips_centre() {
        let cube = Cube::new_debug();
        assert_eq!(cube.get_at(0, 3).unwrap(), 3);
        assert_eq!(cube.get_at(0, 5).unwrap(), 4);
        assert_eq!(cube.get_at(2, 8).unwrap(), 23);
    }

    #[test]
    fn test_parse_rotation() {
        let rotations = parse_rotations(ROTATE, &MirrorConfig::default()).unwrap();
        assert_eq!(rotations.len(), 1);
        assert_eq!(rotations[0].name, "rotate_x");
        assert_eq!(
            rotations[0].moves[0],
            Move {
                dst: (0, 0),
                src: (1, 0)
            }
        );
        assert_eq!(rotations[0].moves.len(), 3);
    }

    #[test]
    fn test_apply_reads_from_original() {
        let rotations = parse_rotations(ROTATE, &MirrorConfig::default()).unwrap();
        let start = Cube::new_debug();
        let next = rotations[0].apply(&start).unwrap();

        assert_eq!(next.get_at(0, 0).unwrap(), start.get_at(1, 0).unwrap());
        assert_eq!(next.get_at(1, 0).unwrap(), start.get_at(2, 0).unwrap());
        assert_eq!(next.get_at(2, 0).unwrap(), start.get_at(0, 0).unwrap());
        assert_eq!(next.get_at(3, 0).unwrap(), start.get_at(3, 0).unwrap());
    }

    #[test]
    fn test_three_cycle_has_order_three() {
        let rotation = &parse_rotations(ROTATE, &MirrorConfig::default()).unwrap()[0];
        let start = Cube::new_debug();
        let mut cube = start.clone();
        for _ in 0..3 {
            cube = rotation.apply(&cube).unwrap();
        }
        assert_eq!(cube, start);
    }

    #[test]
    fn test_orphan_assignment() {
        let err = parse_rotations(
            "        new_cube.set_at(0, 0, self.get_at(1, 0));",
            &MirrorConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, MirrorError::OrphanAssignment { line: 1 }));
    }

    #[test]
    fn test_non_digit_column() {
        let text = "    fn rotate_x(&self) -> Cube {\n        new_cube.set_at(a, 0, self.get_at(1, 0));";
        let err = parse_rotations(text, &MirrorConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            MirrorError::NotADigit {
                line: 2,
                column: 24,
                found: 'a'
            }
        ));
    }

    #[test]
    fn test_unmirrored_text_fails() {
        // Verifying the forward source against itself: names lack the suffix
        // and a 3-cycle is not its own inverse.
        let report = verify_inverses(ROTATE, ROTATE, &MirrorConfig::default()).unwrap();
        assert_eq!(report.pairs.len(), 1);
        assert!(!report.pairs[0].named);
        assert!(!report.pairs[0].undoes_forward);
        assert!(!report.passed());
    }

    #[test]
    fn test_count_mismatch_fails() {
        let report = verify_inverses(ROTATE, "", &MirrorConfig::default()).unwrap();
        assert_eq!(report.pairs.len(), 1);
        assert_eq!(report.pairs[0].mirrored, "");
        assert!(!report.passed());
    }

    #[test]
    fn test_empty_report_does_not_pass() {
        assert!(!VerifyReport::default().passed());
    }
}
