//! Owns the renderer and the generated scene; redraws on resize.

use crate::config::SceneConfig;
use crate::error::Result;
use crate::renderer::CoordinateRenderer;
use crate::scene::{RingShape, Scene};
use crate::surface::Surface;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct SceneComposer<S: Surface> {
    renderer: CoordinateRenderer<S>,
    scene: Scene,
}

impl<S: Surface> SceneComposer<S> {
    /// Generate the scene described by `config` and draw it once.
    pub fn new(surface: S, config: &SceneConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(surface, config.ring_count, &mut rng)
    }

    pub fn with_rng<R: Rng + ?Sized>(surface: S, count: usize, rng: &mut R) -> Result<Self> {
        let renderer = CoordinateRenderer::new(surface);
        let scene = Scene::generate(count, rng);
        let mut composer = Self { renderer, scene };
        composer.draw()?;
        Ok(composer)
    }

    pub fn draw(&mut self) -> Result<()> {
        self.scene.draw(&mut self.renderer)
    }

    /// Pick up the new surface size and redraw the same rings.
    pub fn handle_resize(&mut self) -> Result<()> {
        self.renderer.resize();
        self.draw()
    }

    pub fn rings(&self) -> &[RingShape] {
        self.scene.rings()
    }

    pub fn renderer(&self) -> &CoordinateRenderer<S> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut CoordinateRenderer<S> {
        &mut self.renderer
    }
}
