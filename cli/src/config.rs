use anyhow::Context;
use clearfield_core::{CellCount, Coord, GameConfig};
use std::{fs, path::Path};

/// Loads a [`GameConfig`] from a TOML file. Missing keys keep their default values.
pub fn load(path: &Path) -> anyhow::Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read config file {}", path.display()))?;
    parse(&text).with_context(|| format!("Invalid config file {}", path.display()))
}

pub fn parse(text: &str) -> anyhow::Result<GameConfig> {
    Ok(toml::from_str(text)?)
}

/// Applies command-line overrides on top of `base` and validates the result.
pub fn resolve(
    base: GameConfig,
    width: Option<Coord>,
    height: Option<Coord>,
    hazards: Option<CellCount>,
) -> anyhow::Result<GameConfig> {
    let config = GameConfig::new(
        width.unwrap_or(base.width),
        height.unwrap_or(base.height),
        hazards.unwrap_or(base.hazards),
    )?;
    log::debug!("Using {:?}", config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clearfield_core::GameError;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = parse("hazards = 12\n").unwrap();

        assert_eq!(config, GameConfig::new_unchecked(10, 10, 12));
    }

    #[test]
    fn full_file_is_read() {
        let config = parse("width = 16\nheight = 8\nhazards = 20\n").unwrap();

        assert_eq!(config, GameConfig::new_unchecked(16, 8, 20));
    }

    #[test]
    fn flags_override_file_values() {
        let base = GameConfig::new_unchecked(16, 8, 20);

        let config = resolve(base, None, Some(4), Some(3)).unwrap();

        assert_eq!(config, GameConfig::new_unchecked(16, 4, 3));
    }

    #[test]
    fn resolve_rejects_degenerate_boards() {
        let err = resolve(GameConfig::default(), Some(2), Some(2), Some(4)).unwrap_err();

        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::TooManyHazards)
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(parse("width = \"wide\"").is_err());
    }
}
