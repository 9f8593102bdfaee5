//! Scene configuration.
//!
//! Defaults can be overridden per page through `data-*` attributes on the
//! canvas element:
//!
//! ```html
//! <canvas id="canvas" data-rings="24" data-seed="7"></canvas>
//! ```

use crate::error::{RenderError, Result};

pub const DEFAULT_CANVAS_ID: &str = "canvas";
pub const DEFAULT_RING_COUNT: usize = 18;

pub const RINGS_ATTRIBUTE: &str = "data-rings";
pub const SEED_ATTRIBUTE: &str = "data-seed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneConfig {
    /// Id of the `<canvas>` element to draw into.
    pub canvas_id: String,
    pub ring_count: usize,
    /// Fixed seed for reproducible scenes. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            ring_count: DEFAULT_RING_COUNT,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn with_canvas_id(mut self, id: impl Into<String>) -> Self {
        self.canvas_id = id.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overlay attribute values on top of this config.
    ///
    /// `lookup` returns the raw attribute value, or `None` when absent.
    pub fn with_attributes<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(RINGS_ATTRIBUTE) {
            self.ring_count = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(invalid(RINGS_ATTRIBUTE, raw)),
            };
        }
        if let Some(raw) = lookup(SEED_ATTRIBUTE) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| invalid(SEED_ATTRIBUTE, raw.clone()))?;
            self.seed = Some(seed);
        }
        Ok(self)
    }
}

fn invalid(name: &str, value: String) -> RenderError {
    RenderError::InvalidAttribute {
        name: name.to_string(),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attrs<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults() {
        let config = SceneConfig::default();
        assert_eq!(config.canvas_id, "canvas");
        assert_eq!(config.ring_count, 18);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn attributes_override_defaults() {
        let config = SceneConfig::default()
            .with_canvas_id("stage")
            .with_attributes(attrs(&[("data-rings", " 24 "), ("data-seed", "7")]))
            .unwrap();
        assert_eq!(
            config,
            SceneConfig {
                canvas_id: "stage".into(),
                ring_count: 24,
                seed: Some(7),
            }
        );
    }

    #[test]
    fn missing_attributes_keep_values() {
        let config = SceneConfig::default()
            .with_seed(3)
            .with_attributes(attrs(&[]))
            .unwrap();
        assert_eq!(config.ring_count, 18);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn zero_rings_rejected() {
        let err = SceneConfig::default()
            .with_attributes(attrs(&[("data-rings", "0")]))
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidAttribute {
                name: "data-rings".into(),
                value: "0".into(),
            }
        );
    }

    #[test]
    fn bad_seed_rejected() {
        let err = SceneConfig::default()
            .with_attributes(attrs(&[("data-seed", "-1")]))
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidAttribute { ref name, .. } if name == "data-seed"));
    }
}
