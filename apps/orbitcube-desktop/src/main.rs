use anyhow::Result;
use clap::Parser;
use orbitcube_common::Viewport;
use orbitcube_input::{Action, OrbitControls, PointerButton, PointerGestures};
use orbitcube_render::{FrameLoop, FrameScheduler, Renderer};
use orbitcube_render_wgpu::{GpuContext, GpuError, WgpuRenderer};
use orbitcube_scene::{DemoScene, PerspectiveCamera, Scene};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "orbitcube-desktop", about = "Orbit a cube with the mouse")]
struct Cli {
    /// Enable verbose logging (includes cursor traces)
    #[arg(short, long)]
    verbose: bool,

    /// Stop camera motion as soon as a drag ends
    #[arg(long)]
    no_damping: bool,

    /// Fraction of pending camera motion applied per frame
    #[arg(long, default_value_t = 0.05)]
    damping_factor: f32,
}

/// Draws a frame into the window surface and presents it.
struct SurfacePresenter<'a> {
    gpu: &'a Gpu,
}

impl Renderer for SurfacePresenter<'_> {
    type Output = Result<(), GpuError>;

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Self::Output {
        let ctx = &self.gpu.ctx;
        let Some(output) = ctx.acquire()? else {
            return Ok(());
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.gpu
            .renderer
            .draw(&ctx.device, &ctx.queue, &view, scene, camera);
        output.present();
        Ok(())
    }
}

/// Maps the loop's "next frame please" onto a winit redraw request.
struct WindowScheduler<'a>(&'a Window);

impl FrameScheduler for WindowScheduler<'_> {
    fn request_frame(&mut self) {
        self.0.request_redraw();
    }
}

struct Gpu {
    ctx: GpuContext,
    renderer: WgpuRenderer,
}

struct App {
    frame_loop: FrameLoop<OrbitControls>,
    gestures: PointerGestures,
    viewport: Viewport,
    window: Option<Arc<Window>>,
    gpu: Option<Gpu>,
    /// Fatal error to hand back to `main` once the event loop exits.
    error: Option<anyhow::Error>,
}

impl App {
    fn new(frame_loop: FrameLoop<OrbitControls>, viewport: Viewport) -> Self {
        Self {
            frame_loop,
            gestures: PointerGestures::new(),
            viewport,
            window: None,
            gpu: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        tracing::error!("{error:#}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title("orbitcube")
            .with_inner_size(PhysicalSize::new(self.viewport.width, self.viewport.height))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs)?);

        let ctx = GpuContext::new(window.clone(), self.viewport.width, self.viewport.height)?;
        let renderer = WgpuRenderer::new(
            &ctx.device,
            ctx.format(),
            self.viewport.width,
            self.viewport.height,
            &self.frame_loop.demo().scene,
        );
        tracing::info!("uploaded {} mesh(es)", renderer.uploaded_meshes());

        // The first frame is requested by hand; every later one is
        // requested by the loop itself.
        window.request_redraw();

        self.window = Some(window);
        self.gpu = Some(Gpu { ctx, renderer });
        Ok(())
    }

    fn apply(&mut self, action: Action) {
        if action.is_noop() {
            return;
        }
        match self.frame_loop.controls_and_camera() {
            Ok((controls, camera)) => controls.apply(action, camera),
            Err(e) => tracing::error!("cannot steer camera: {e}"),
        }
    }
}

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!(
                    "closing after {} frames",
                    self.frame_loop.frames()
                );
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.ctx.resize(new_size.width, new_size.height);
                    gpu.renderer
                        .resize(&gpu.ctx.device, new_size.width, new_size.height);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as f32, position.y as f32);
                self.frame_loop.cursor_tracker_mut().on_pointer_move(x, y);
                let action = self.gestures.moved(x, y);
                self.apply(action);
            }
            WindowEvent::CursorLeft { .. } => {
                self.gestures.left();
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = pointer_button(button) {
                    match state {
                        ElementState::Pressed => self.gestures.press(button),
                        ElementState::Released => self.gestures.release(button),
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let action = match delta {
                    MouseScrollDelta::LineDelta(_, y) => self.gestures.wheel(y),
                    MouseScrollDelta::PixelDelta(p) => self.gestures.wheel_pixels(p.y as f32),
                };
                self.apply(action);
            }
            WindowEvent::RedrawRequested => {
                let (Some(window), Some(gpu)) = (&self.window, &self.gpu) else {
                    return;
                };
                let mut presenter = SurfacePresenter { gpu };
                let mut scheduler = WindowScheduler(window);
                match self.frame_loop.tick(&mut presenter, &mut scheduler) {
                    Ok(report) => {
                        if let Err(e) = report.output {
                            tracing::error!("frame {} failed to render: {e}", report.frame);
                        }
                    }
                    Err(e) => self.fail(event_loop, e.into()),
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("orbitcube-desktop starting");

    let viewport = Viewport::DEMO;
    let demo = DemoScene::assemble(viewport);
    let target = demo.mesh()?.transform.position;
    let mut controls = OrbitControls::new(target, viewport);
    if !cli.no_damping {
        controls = controls.with_damping(cli.damping_factor);
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(FrameLoop::new(demo, controls, viewport), viewport);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
