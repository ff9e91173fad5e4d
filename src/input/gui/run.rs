use std::error::Error;
use std::sync::{Arc, Mutex};

use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

use crate::controllers::interactive::{FrameData, FrameSink, RenderJob, RenderScheduler};
use crate::core::kernel::variant::KernelVariant;
use crate::core::viewport::event::InputEvent;
use crate::core::viewport::gesture::PixelPosition;
use crate::core::viewport::session::{default_region, DEFAULT_BASE_BUDGET, ViewportSession};
use crate::input::gui::events::GuiEvent;
use crate::render::palette::Palette;
use crate::render::rasterize::copy_rgb_to_rgba;

/// Holds the newest rendered frame and wakes the event loop when one
/// arrives. Older frames are simply overwritten.
struct WakeupSink {
    latest: Mutex<Option<FrameData>>,
    proxy: Mutex<EventLoopProxy<GuiEvent>>,
}

impl FrameSink for WakeupSink {
    fn present(&self, frame: FrameData) {
        *self.latest.lock().unwrap() = Some(frame);
        let _ = self.proxy.lock().unwrap().send_event(GuiEvent::Wake);
    }
}

/// Opens the viewer window and runs its event loop until the user quits.
///
/// Left drag pans, right drag zooms, `r` resets the view, `=`/`-` adjust
/// the iteration boost, `k` toggles the kernel variant, `p` cycles the
/// palette, escape quits.
pub fn run_gui(width: u32, height: u32) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
    let proxy = event_loop.create_proxy();

    // the surface texture borrows the window for the life of the loop
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractal Viewer")
            .with_inner_size(LogicalSize::new(width as f64, height as f64))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let surface_size = window.inner_size();
    let surface = SurfaceTexture::new(surface_size.width, surface_size.height, window);
    let mut pixels = Pixels::new(width, height, surface)?;

    let sink = Arc::new(WakeupSink {
        latest: Mutex::new(None),
        proxy: Mutex::new(proxy),
    });
    let scheduler = RenderScheduler::new(Arc::clone(&sink) as Arc<dyn FrameSink>);

    let mut session = ViewportSession::new(
        width,
        height,
        default_region(),
        DEFAULT_BASE_BUDGET,
        KernelVariant::Parallel,
    )?;
    let mut palette = Palette::default();
    let mut cursor = PixelPosition::new(0.0, 0.0);

    // first frame
    scheduler.submit(RenderJob {
        request: session.render_request(),
        palette,
    });

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Wait);

        match event {
            Event::UserEvent(GuiEvent::Wake) => window.request_redraw(),
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::CursorMoved { position, .. } => {
                    let logical = position.to_logical::<f64>(window.scale_factor());
                    cursor = PixelPosition::new(logical.x, logical.y);
                    if let Some(request) = session.handle_event(InputEvent::PointerMove(cursor)) {
                        scheduler.submit(RenderJob { request, palette });
                    }
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    let input = match (button, state) {
                        (MouseButton::Left, ElementState::Pressed) => {
                            Some(InputEvent::LeftPress(cursor))
                        }
                        (MouseButton::Left, ElementState::Released) => {
                            Some(InputEvent::LeftRelease)
                        }
                        (MouseButton::Right, ElementState::Pressed) => {
                            Some(InputEvent::RightPress(cursor))
                        }
                        (MouseButton::Right, ElementState::Released) => {
                            Some(InputEvent::RightRelease)
                        }
                        _ => None,
                    };

                    if let Some(input) = input {
                        if let Some(request) = session.handle_event(input) {
                            scheduler.submit(RenderJob { request, palette });
                        }
                    }
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    if event.state != ElementState::Pressed {
                        return;
                    }

                    let input = match event.logical_key.as_ref() {
                        Key::Named(NamedKey::Escape) => {
                            elwt.exit();
                            None
                        }
                        Key::Character("r") => Some(InputEvent::Reset),
                        Key::Character("=") => Some(InputEvent::BoostIncrease),
                        Key::Character("-") => Some(InputEvent::BoostDecrease),
                        Key::Character("k") => Some(InputEvent::ToggleKernel),
                        Key::Character("p") => {
                            palette = palette.cycled();
                            // repaint the current view in the new palette
                            scheduler.submit(RenderJob {
                                request: session.render_request(),
                                palette,
                            });
                            None
                        }
                        _ => None,
                    };

                    if let Some(input) = input {
                        if let Some(request) = session.handle_event(input) {
                            scheduler.submit(RenderJob { request, palette });
                        }
                    }
                }
                WindowEvent::RedrawRequested => {
                    if let Some(frame) = sink.latest.lock().unwrap().as_ref() {
                        copy_rgb_to_rgba(frame.buffer.bytes(), pixels.frame_mut());
                    }

                    if let Err(err) = pixels.render() {
                        eprintln!("render failed: {err}");
                        elwt.exit();
                    }
                }
                _ => {}
            },
            _ => {}
        }
    })?;

    Ok(())
}
