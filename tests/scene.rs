//! End-to-end: generate, draw and resize against a headless surface.

use kurbo::{Point, Size};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rings_wasm::{
    CompositeOp, DrawCommand, RecordingSurface, Rgba, SceneComposer, SceneConfig, Surface,
};

fn composer(size: Size, seed: u64) -> SceneComposer<RecordingSurface> {
    let config = SceneConfig::default().with_seed(seed);
    SceneComposer::new(RecordingSurface::new(size), &config).unwrap()
}

fn commands(c: &SceneComposer<RecordingSurface>) -> &[DrawCommand] {
    c.renderer().surface().commands()
}

#[test]
fn draws_eighteen_gradient_fills() {
    let c = composer(Size::new(800.0, 600.0), 42);
    assert_eq!(c.rings().len(), 18);
    assert_eq!(c.renderer().surface().gradient_fills(), 18);
}

#[test]
fn every_fill_is_lightened() {
    let c = composer(Size::new(800.0, 600.0), 7);
    let mut mode = CompositeOp::default();
    let mut fills = 0;
    for cmd in commands(&c) {
        match cmd {
            DrawCommand::Composite(op) => mode = *op,
            DrawCommand::Fill => {
                assert_eq!(mode, CompositeOp::Lighten);
                fills += 1;
            }
            _ => {}
        }
    }
    assert_eq!(fills, 18);
}

#[test]
fn gradients_match_rings() {
    let c = composer(Size::new(800.0, 600.0), 3);
    let gradients: Vec<_> = commands(&c)
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::FillGradient(g) => Some(g),
            _ => None,
        })
        .collect();
    assert_eq!(gradients.len(), c.rings().len());

    let vp = *c.renderer().viewport();
    for (ring, g) in c.rings().iter().zip(gradients) {
        let center = vp.to_pixel(ring.center);
        assert_eq!(g.start, center);
        assert_eq!(g.end, center);
        assert!((g.start_radius - (ring.radius - ring.line_width + 2.0) * 6.0).abs() < 1e-9);
        assert!((g.end_radius - (ring.radius + ring.line_width - 2.0) * 6.0).abs() < 1e-9);

        let stops: Vec<_> = g.stops.iter().map(|s| (s.offset, s.color)).collect();
        assert_eq!(
            stops,
            vec![
                (0.0, Rgba::TRANSPARENT),
                (0.5, ring.channel.color()),
                (1.0, Rgba::TRANSPARENT),
            ]
        );
    }
}

#[test]
fn each_ring_is_one_path_of_two_loops() {
    let c = composer(Size::new(500.0, 500.0), 11);
    let cmds = commands(&c);
    let begins: Vec<usize> = cmds
        .iter()
        .enumerate()
        .filter(|(_, cmd)| **cmd == DrawCommand::BeginPath)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(begins.len(), 18);

    let first_ring = &c.rings()[0];
    let anchor = c
        .renderer()
        .to_pixel(first_ring.center + kurbo::Vec2::new(first_ring.outer[0], 0.0));

    let path = &cmds[begins[0] + 1..];
    assert_eq!(path[0], DrawCommand::MoveTo(anchor));
    let curves = path
        .iter()
        .take_while(|cmd| **cmd != DrawCommand::Fill)
        .filter(|cmd| matches!(cmd, DrawCommand::CurveTo(..)))
        .count();
    assert_eq!(curves, 16);
}

#[test]
fn resize_redraws_same_rings() {
    let mut c = composer(Size::new(800.0, 600.0), 5);
    let before = c.rings().to_vec();

    let surface = c.renderer_mut().surface_mut();
    surface.clear();
    surface.set_size(Size::new(300.0, 900.0));
    c.handle_resize().unwrap();

    assert_eq!(c.rings(), before.as_slice());
    assert_eq!(c.renderer().viewport().scale, 3.0);
    assert_eq!(c.renderer().viewport().origin, Point::new(150.0, 450.0));
    assert_eq!(c.renderer().surface().gradient_fills(), 18);
}

#[test]
fn draw_is_repeatable() {
    let mut c = composer(Size::new(640.0, 480.0), 8);
    let first = commands(&c).to_vec();
    c.renderer_mut().surface_mut().clear();
    c.draw().unwrap();
    assert_eq!(commands(&c), first.as_slice());
}

#[test]
fn unseeded_scenes_keep_structure() {
    let a = SceneComposer::new(RecordingSurface::new(Size::new(100.0, 100.0)), &SceneConfig::default()).unwrap();
    assert_eq!(a.rings().len(), 18);
    for ring in a.rings() {
        assert!(ring.center.x.abs() <= 2.5 && ring.center.y.abs() <= 2.5);
        assert!((20.0..25.0).contains(&ring.radius));
    }
}

#[test]
fn custom_ring_count() {
    let mut rng = StdRng::seed_from_u64(1);
    let c = SceneComposer::with_rng(RecordingSurface::new(Size::new(200.0, 100.0)), 4, &mut rng).unwrap();
    assert_eq!(c.rings().len(), 4);
    assert_eq!(c.renderer().surface().gradient_fills(), 4);
}

#[test]
fn zero_sized_surface_still_draws() {
    let mut surface = RecordingSurface::new(Size::ZERO);
    assert_eq!(surface.fit_to_display(), Size::ZERO);
    let c = SceneComposer::new(surface, &SceneConfig::default().with_seed(0)).unwrap();
    assert!(c.renderer().viewport().is_empty());
    assert_eq!(c.renderer().surface().gradient_fills(), 18);
}
