use std::sync::Arc;

use dynasty_canvas::{
    AnimationHost, AnimatorPhase, Bounds, FrameLoop, LocalHost, ParticleAnimator, ParticleConfig,
    RecordingSurface, SvgSurface,
};
use dynasty_rules::{DynastyCatalog, ShapeKind, ThemeRegistry, ThemeSelection};

fn seeded(seed: u64) -> ParticleConfig {
    ParticleConfig::default().with_seed(seed)
}

fn registry() -> Arc<ThemeRegistry> {
    Arc::new(ThemeRegistry::builtin())
}

#[test]
fn no_draws_after_stop_even_if_stale_frames_fire() {
    let mut host = LocalHost::new(400, 300);
    let surface = RecordingSurface::new(400, 300);
    let mut animator = ParticleAnimator::new(registry(), seeded(1));
    animator.start(surface.clone(), host.clone(), "tang");

    let stale = host.take_pending_frames();
    animator.stop();
    surface.reset_calls();

    for token in stale {
        animator.on_frame(token);
    }
    // A host that ignores cancellation and fires anyway.
    let rogue = host.request_frame();
    animator.on_frame(rogue);
    animator.stop();

    assert!(surface.calls().is_empty());
    assert_eq!(animator.phase(), AnimatorPhase::Stopped);
}

#[test]
fn surface_lost_mid_frame_stops_cleanly() {
    let host = LocalHost::new(400, 300);
    let surface = RecordingSurface::new(400, 300);
    let mut animator = ParticleAnimator::new(registry(), seeded(2));
    animator.start(surface.clone(), host.clone(), "song");

    let frame_loop = FrameLoop::new(host.clone(), std::time::Duration::ZERO);
    frame_loop.run(&mut animator, 3);
    surface.detach_after_fills(10);

    let delivered = frame_loop.run(&mut animator, 100);

    assert_eq!(delivered, 1);
    assert_eq!(animator.phase(), AnimatorPhase::Stopped);
    assert_eq!(host.pending_frame_count(), 0);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn particles_stay_in_bounds_and_visible_over_many_frames() {
    let host = LocalHost::new(120, 90);
    let config = ParticleConfig {
        max_speed: 3.0,
        ..seeded(3)
    };
    let mut animator = ParticleAnimator::new(registry(), config.clone());
    animator.start(RecordingSurface::new(120, 90), host.clone(), "ming");

    let frame_loop = FrameLoop::new(host, std::time::Duration::ZERO);
    let bounds = Bounds::new(120, 90);
    for _ in 0..200 {
        frame_loop.run(&mut animator, 1);
        for p in animator.particles() {
            assert!(bounds.contains(p.x, p.y), "particle escaped: {:?}", p);
            assert!(p.opacity >= config.min_opacity && p.opacity <= config.max_opacity);
        }
    }
    assert_eq!(animator.stats().frames_rendered, 200);
}

#[test]
fn browsing_the_catalog_switches_themes_without_restarting() {
    let catalog = DynastyCatalog::builtin();
    let registry = registry();
    let host = LocalHost::new(800, 600);
    let frame_loop = FrameLoop::new(host.clone(), std::time::Duration::ZERO);
    let mut animator = ParticleAnimator::new(Arc::clone(&registry), seeded(4));
    let mut selection = ThemeSelection::new();
    animator.start(RecordingSurface::new(800, 600), host.clone(), selection.current_key());

    for id in catalog.ids() {
        selection.hover(Some(id.to_string()));
        animator.set_theme(selection.current_key());
        frame_loop.run(&mut animator, 2);

        let expected = registry.resolve(id).unwrap().shape();
        assert!(animator.particles().iter().all(|p| p.shape == expected));
        assert_eq!(animator.particles().len(), 50);
        assert_eq!(host.listener_count(), 1);
        assert_eq!(host.pending_frame_count(), 1);
    }
    assert_eq!(animator.stats().frames_rendered, 14);
}

#[test]
fn resized_bounds_apply_to_the_next_population() {
    let host = LocalHost::new(1000, 1000);
    let frame_loop = FrameLoop::new(host.clone(), std::time::Duration::ZERO);
    let mut animator = ParticleAnimator::new(registry(), seeded(5));
    animator.start(RecordingSurface::new(1000, 1000), host, "qin");

    frame_loop.resize_viewport(&mut animator, 50, 40);
    animator.set_theme("tang");

    let bounds = Bounds::new(50, 40);
    assert!(animator.particles().iter().all(|p| bounds.contains(p.x, p.y)));
    assert!(animator.particles().iter().all(|p| p.shape == ShapeKind::Petal));
}

#[test]
fn instances_are_independent() {
    let first_host = LocalHost::new(300, 200);
    let second_host = LocalHost::new(300, 200);
    let mut first = ParticleAnimator::new(registry(), seeded(6));
    let mut second = ParticleAnimator::new(registry(), seeded(6));
    first.start(RecordingSurface::new(300, 200), first_host.clone(), "han");
    second.start(RecordingSurface::new(300, 200), second_host.clone(), "han");

    assert_ne!(first.id(), second.id());
    assert_eq!(first.particles(), second.particles());

    first.stop();
    assert!(second.is_running());
    assert_eq!(second_host.listener_count(), 1);
    assert_eq!(first_host.listener_count(), 0);
}

#[test]
fn svg_surface_captures_the_latest_frame() {
    let host = LocalHost::new(320, 240);
    let frame_loop = FrameLoop::new(host.clone(), std::time::Duration::ZERO);
    let config = ParticleConfig {
        count: 12,
        ..seeded(7)
    };
    let mut animator = ParticleAnimator::new(registry(), config);
    animator.start(SvgSurface::new(1, 1), host, "song");
    frame_loop.run(&mut animator, 5);

    let surface = animator.into_surface().unwrap();
    assert_eq!(surface.element_count(), 12);
    let svg = surface.to_svg();
    assert!(svg.contains("width=\"320\" height=\"240\""));
    assert_eq!(svg.matches("<circle").count(), 36);
}
