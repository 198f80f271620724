use anyhow::{bail, Context, Result};

/// Startup options of the front end.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Side of one cell in pixels.
    pub cell_size: f32,
    /// Seed for random fields; fresh entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size: Self::DEFAULT_CELL_SIZE,
            seed: None,
        }
    }
}

impl Settings {
    pub const DEFAULT_CELL_SIZE: f32 = 5.;
    pub const MAX_CELL_SIZE: f32 = 200.;

    pub const CELL_SIZE_VAR: &'static str = "LIFE_CELL_SIZE";
    pub const SEED_VAR: &'static str = "LIFE_SEED";

    /// Reads the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        Self::parse(std::env::args().skip(1), |name| std::env::var(name).ok())
    }

    /// The first positional argument overrides `LIFE_CELL_SIZE`; `LIFE_SEED` sets the seed.
    pub fn parse(
        mut args: impl Iterator<Item = String>,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(raw) = args.next().or_else(|| var(Self::CELL_SIZE_VAR)) {
            settings.cell_size = raw
                .trim()
                .parse()
                .with_context(|| format!("invalid cell size {raw:?}"))?;
            if !(settings.cell_size >= 1. && settings.cell_size <= Self::MAX_CELL_SIZE) {
                bail!(
                    "cell size must be between 1 and {} pixels, got {}",
                    Self::MAX_CELL_SIZE,
                    settings.cell_size
                );
            }
        }
        if let Some(extra) = args.next() {
            bail!("unexpected argument {extra:?}; usage: life_canvas [CELL_SIZE]");
        }

        if let Some(raw) = var(Self::SEED_VAR) {
            let seed = raw
                .trim()
                .parse()
                .with_context(|| format!("invalid {} value {raw:?}", Self::SEED_VAR))?;
            settings.seed = Some(seed);
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], vars: &[(&str, &str)]) -> Result<Settings> {
        Settings::parse(args.iter().map(|s| s.to_string()), |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        })
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse(&[], &[]).unwrap(), Settings::default());
        assert_eq!(Settings::default().cell_size, 5.);
    }

    #[test]
    fn test_cell_size_sources() {
        assert_eq!(parse(&["8"], &[]).unwrap().cell_size, 8.);
        assert_eq!(parse(&[], &[("LIFE_CELL_SIZE", "12")]).unwrap().cell_size, 12.);
        assert_eq!(
            parse(&["3"], &[("LIFE_CELL_SIZE", "12")]).unwrap().cell_size,
            3.
        );
    }

    #[test]
    fn test_seed() {
        let settings = parse(&[], &[("LIFE_SEED", "42")]).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(parse(&[], &[("LIFE_SEED", "-1")]).is_err());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse(&["abc"], &[]).is_err());
        assert!(parse(&["0"], &[]).is_err());
        assert!(parse(&["NaN"], &[]).is_err());
        assert!(parse(&["1000"], &[]).is_err());
        assert!(parse(&["5", "6"], &[]).is_err());
    }
}
