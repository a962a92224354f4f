//! Reverse rotation generator
//!
//! The cube implementation spells out its six forward rotations as flat
//! lists of `new_cube.set_at(side, face, self.get_at(side, face))`
//! statements. Each reverse rotation is the same list with destination
//! and source exchanged, so this crate derives them textually: function
//! headers get a `_r` suffix and the coordinate columns of every
//! assignment are swapped.

pub mod config;
pub mod error;
pub mod model;
pub mod source;
pub mod transform;
pub mod verify;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

pub use config::MirrorConfig;
pub use error::MirrorError;
pub use transform::Transformer;

/// Mirror the embedded forward rotations.
///
/// Returns one output line per input line.
pub fn mirror_embedded(config: &MirrorConfig) -> Result<Vec<String>> {
    Transformer::new(config.clone())
        .transform_text(source::ROTATIONS_SOURCE)
        .context("Failed to mirror embedded rotations")
}

/// Join lines the way they are printed: each one newline-terminated.
pub fn render(lines: &[String]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Mirror the embedded rotations and write them to `writer`.
///
/// Nothing is written unless the whole pass succeeds.
pub fn emit<W: Write>(config: &MirrorConfig, writer: &mut W) -> Result<usize> {
    let lines = mirror_embedded(config)?;
    writer
        .write_all(render(&lines).as_bytes())
        .context("Failed to write mirrored rotations")?;
    writer.flush()?;
    Ok(lines.len())
}

/// Mirror the embedded rotations into a file.
pub fn emit_to_file(config: &MirrorConfig, path: &Path) -> Result<usize> {
    let lines = mirror_embedded(config)?;
    std::fs::write(path, render(&lines))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Generated mirrored rotations: {}", path.display());
    Ok(lines.len())
}

/// Check whether `path` holds exactly what `emit` would produce now.
pub fn check_against(config: &MirrorConfig, path: &Path) -> Result<bool> {
    let fresh = render(&mirror_embedded(config)?);
    let existing = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let in_sync = fresh == existing;
    if in_sync {
        println!("✓ Mirrored rotations in sync: {}", path.display());
    } else {
        println!("✗ Mirrored rotations out of sync: {}", path.display());
    }
    Ok(in_sync)
}

/// Mirror the embedded rotations and check each one undoes its forward twin.
pub fn verify_embedded(config: &MirrorConfig) -> Result<verify::VerifyReport> {
    let mirrored = mirror_embedded(config)?.join("\n");
    verify::verify_inverses(source::ROTATIONS_SOURCE, &mirrored, config)
        .context("Failed to verify mirrored rotations")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_terminates_every_line() {
        let lines = vec!["a".to_string(), String::new(), "b".to_string()];
        assert_eq!(render(&lines), "a\n\nb\n");
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_emit_writes_all_lines() {
        let mut buf = Vec::new();
        let count = emit(&MirrorConfig::default(), &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(count, source::source_lines().len());
        assert_eq!(text.matches('\n').count(), count);
    }

    #[test]
    fn test_emit_writes_nothing_on_failure() {
        let mut config = MirrorConfig::default();
        // Push the right-hand pair past the end of every assignment line.
        config.swap.right = 60;

        let mut buf = Vec::new();
        assert!(emit(&config, &mut buf).is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_check_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rotations_r.rs");
        let config = MirrorConfig::default();

        emit_to_file(&config, &path).unwrap();
        assert!(check_against(&config, &path).unwrap());

        let mut edited = std::fs::read_to_string(&path).unwrap();
        edited.push_str("// edited\n");
        std::fs::write(&path, edited).unwrap();
        assert!(!check_against(&config, &path).unwrap());
    }

    #[test]
    fn test_check_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(check_against(&MirrorConfig::default(), &dir.path().join("nope.rs")).is_err());
    }
}
