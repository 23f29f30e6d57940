use crate::clock::Clock;
use crate::renderer::Renderer;
use orbitcube_common::Viewport;
use orbitcube_input::{CameraControls, CursorTracker};
use orbitcube_scene::{DemoScene, PerspectiveCamera, SceneError};
use std::time::Duration;

/// Host hook for "run the loop again before the next repaint".
///
/// Implementations only record the request; the host is responsible for
/// calling [`FrameLoop::tick`] once when the refresh arrives.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Scheduler for hosts without a display: requests are queued and drained
/// by the caller.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: u64,
    requested: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one pending request. Returns `false` when none is queued.
    pub fn take(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }

    pub fn pending(&self) -> u64 {
        self.pending
    }

    /// Total requests ever made.
    pub fn requested(&self) -> u64 {
        self.requested
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.pending += 1;
        self.requested += 1;
    }
}

/// What one loop iteration did.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport<T> {
    /// 1-based index of this iteration.
    pub frame: u64,
    pub elapsed: Duration,
    pub camera_moved: bool,
    /// Whatever the renderer produced for the draw.
    pub output: T,
}

/// Everything the per-frame callback touches: scene, controls, cursor, clock.
pub struct FrameLoop<C> {
    demo: DemoScene,
    controls: C,
    cursor: CursorTracker,
    clock: Clock,
    frame: u64,
}

impl<C: CameraControls> FrameLoop<C> {
    /// Start the loop's clock. No frame is drawn until the first `tick`.
    pub fn new(demo: DemoScene, controls: C, viewport: Viewport) -> Self {
        Self {
            demo,
            controls,
            cursor: CursorTracker::new(viewport),
            clock: Clock::start(),
            frame: 0,
        }
    }

    /// Run one iteration: read the clock, step the controls, draw once, then
    /// ask `scheduler` for the next frame.
    ///
    /// A missing camera aborts the iteration before drawing and nothing is
    /// rescheduled.
    pub fn tick<R, S>(
        &mut self,
        renderer: &mut R,
        scheduler: &mut S,
    ) -> Result<FrameReport<R::Output>, SceneError>
    where
        R: Renderer,
        S: FrameScheduler,
    {
        let elapsed = self.clock.elapsed();

        let camera = self.demo.camera_mut()?;
        let camera_moved = self.controls.update(camera);
        let camera = *camera;

        let output = renderer.render(&self.demo.scene, &camera);

        scheduler.request_frame();

        self.frame += 1;
        tracing::debug!(
            "frame {} at {:.3}s (camera moved: {camera_moved})",
            self.frame,
            elapsed.as_secs_f32()
        );

        Ok(FrameReport {
            frame: self.frame,
            elapsed,
            camera_moved,
            output,
        })
    }

    /// Iterations completed so far.
    pub fn frames(&self) -> u64 {
        self.frame
    }

    pub fn demo(&self) -> &DemoScene {
        &self.demo
    }

    pub fn camera(&self) -> Result<&PerspectiveCamera, SceneError> {
        self.demo.camera()
    }

    pub fn controls(&self) -> &C {
        &self.controls
    }

    /// Controls and the camera they steer, borrowed together so pointer
    /// gestures can be queued against the current camera pose.
    pub fn controls_and_camera(&mut self) -> Result<(&mut C, &PerspectiveCamera), SceneError> {
        let camera = self.demo.camera()?;
        Ok((&mut self.controls, camera))
    }

    pub fn cursor_tracker_mut(&mut self) -> &mut CursorTracker {
        &mut self.cursor
    }

    pub fn cursor_tracker(&self) -> &CursorTracker {
        &self.cursor
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DebugTextRenderer;
    use glam::{Vec2, Vec3};
    use orbitcube_input::{Action, OrbitControls};
    use orbitcube_scene::Scene;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::layer::{self, Layer, SubscriberExt};

    type CallLog = Rc<RefCell<Vec<&'static str>>>;

    struct SpyControls(CallLog);

    impl CameraControls for SpyControls {
        fn update(&mut self, _camera: &mut PerspectiveCamera) -> bool {
            self.0.borrow_mut().push("update");
            false
        }
    }

    struct SpyRenderer(CallLog);

    impl Renderer for SpyRenderer {
        type Output = ();

        fn render(&mut self, _scene: &Scene, _camera: &PerspectiveCamera) -> Self::Output {
            self.0.borrow_mut().push("draw");
        }
    }

    struct SpyScheduler(CallLog);

    impl FrameScheduler for SpyScheduler {
        fn request_frame(&mut self) {
            self.0.borrow_mut().push("schedule");
        }
    }

    fn demo() -> DemoScene {
        DemoScene::assemble(Viewport::DEMO)
    }

    fn orbit_loop() -> FrameLoop<OrbitControls> {
        let controls = OrbitControls::new(Vec3::ZERO, Viewport::DEMO).with_damping(0.05);
        FrameLoop::new(demo(), controls, Viewport::DEMO)
    }

    #[test]
    fn each_tick_updates_then_draws_then_schedules_once() {
        let log = CallLog::default();
        let mut frame_loop = FrameLoop::new(demo(), SpyControls(log.clone()), Viewport::DEMO);
        let mut renderer = SpyRenderer(log.clone());
        let mut scheduler = SpyScheduler(log.clone());

        for _ in 0..3 {
            frame_loop.tick(&mut renderer, &mut scheduler).unwrap();
        }

        assert_eq!(
            *log.borrow(),
            [
                "update", "draw", "schedule", "update", "draw", "schedule", "update", "draw",
                "schedule",
            ]
        );
        assert_eq!(frame_loop.frames(), 3);
    }

    /// Collects the frame loop's events that pass a verbose (`debug`) filter.
    #[derive(Clone, Default)]
    struct FrameEvents(Arc<Mutex<Vec<tracing::Level>>>);

    impl<S: tracing::Subscriber> Layer<S> for FrameEvents {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: layer::Context<'_, S>) {
            if event.metadata().target() == "orbitcube_render::frame_loop" {
                if let Ok(mut levels) = self.0.lock() {
                    levels.push(*event.metadata().level());
                }
            }
        }
    }

    #[test]
    fn frame_reports_show_up_in_verbose_logs() {
        let events = FrameEvents::default();
        let subscriber =
            tracing_subscriber::registry().with(events.clone().with_filter(LevelFilter::DEBUG));

        tracing::subscriber::with_default(subscriber, || {
            let mut frame_loop = orbit_loop();
            let mut renderer = DebugTextRenderer::new();
            let mut scheduler = ManualScheduler::new();
            for _ in 0..2 {
                frame_loop.tick(&mut renderer, &mut scheduler).unwrap();
            }
        });

        let levels = events.0.lock().unwrap();
        assert_eq!(*levels, [tracing::Level::DEBUG, tracing::Level::DEBUG]);
    }

    #[test]
    fn scheduler_drives_the_loop_one_frame_at_a_time() {
        let mut frame_loop = orbit_loop();
        let mut renderer = DebugTextRenderer::new();
        let mut scheduler = ManualScheduler::new();

        frame_loop.tick(&mut renderer, &mut scheduler).unwrap();
        for _ in 0..9 {
            assert!(scheduler.take());
            assert_eq!(scheduler.pending(), 0);
            frame_loop.tick(&mut renderer, &mut scheduler).unwrap();
        }

        assert_eq!(renderer.draws(), 10);
        assert_eq!(scheduler.requested(), 10);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn reports_are_numbered_and_time_advances() {
        let mut frame_loop = orbit_loop();
        let mut renderer = DebugTextRenderer::new();
        let mut scheduler = ManualScheduler::new();

        let first = frame_loop.tick(&mut renderer, &mut scheduler).unwrap();
        let second = frame_loop.tick(&mut renderer, &mut scheduler).unwrap();
        assert_eq!(first.frame, 1);
        assert_eq!(second.frame, 2);
        assert!(second.elapsed >= first.elapsed);
        assert!(second.output.contains("draw=2"));
    }

    #[test]
    fn damped_drag_keeps_moving_after_release() {
        let mut frame_loop = orbit_loop();
        let mut renderer = DebugTextRenderer::new();
        let mut scheduler = ManualScheduler::new();

        let (controls, camera) = frame_loop.controls_and_camera().unwrap();
        controls.apply(Action::Rotate(Vec2::new(120.0, 30.0)), camera);

        let moving: Vec<bool> = (0..5)
            .map(|_| {
                frame_loop
                    .tick(&mut renderer, &mut scheduler)
                    .unwrap()
                    .camera_moved
            })
            .collect();
        assert!(moving.iter().all(|&m| m));
        assert!(frame_loop.controls().has_pending_motion());
    }

    #[test]
    fn mesh_stays_at_origin_while_camera_orbits() {
        let mut frame_loop = orbit_loop();
        let mut renderer = DebugTextRenderer::new();
        let mut scheduler = ManualScheduler::new();

        let (controls, camera) = frame_loop.controls_and_camera().unwrap();
        controls.apply(Action::Rotate(Vec2::new(300.0, -80.0)), camera);
        let (controls, camera) = frame_loop.controls_and_camera().unwrap();
        controls.apply(Action::Pan(Vec2::new(40.0, 10.0)), camera);

        for _ in 0..120 {
            frame_loop.tick(&mut renderer, &mut scheduler).unwrap();
        }

        let demo = frame_loop.demo();
        assert_eq!(demo.mesh().unwrap().transform.position, Vec3::ZERO);
        assert_ne!(
            frame_loop.camera().unwrap().position,
            Vec3::new(0.0, 0.0, 3.0)
        );
        assert_eq!(demo.scene.mesh_count(), 1);
        assert_eq!(demo.scene.camera_count(), 1);
    }

    #[test]
    fn cursor_is_tracked_but_does_not_move_the_camera() {
        let mut frame_loop = orbit_loop();
        let mut renderer = DebugTextRenderer::new();
        let mut scheduler = ManualScheduler::new();

        frame_loop.cursor_tracker_mut().on_pointer_move(800.0, 0.0);
        let report = frame_loop.tick(&mut renderer, &mut scheduler).unwrap();

        assert!(!report.camera_moved);
        assert_eq!(frame_loop.cursor_tracker().cursor().x, 0.5);
        let position = frame_loop.camera().unwrap().position;
        assert!((position - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn missing_camera_stops_the_loop() {
        let mut broken = demo();
        broken.camera = broken.mesh;
        let log = CallLog::default();
        let mut frame_loop = FrameLoop::new(broken, SpyControls(log.clone()), Viewport::DEMO);
        let mut renderer = SpyRenderer(log.clone());
        let mut scheduler = SpyScheduler(log.clone());

        assert!(frame_loop.tick(&mut renderer, &mut scheduler).is_err());
        assert!(log.borrow().is_empty());
        assert_eq!(frame_loop.frames(), 0);
    }
}
