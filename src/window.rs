use std::ffi::CString;
use std::num::NonZeroU32;
use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{anyhow, Context as _};
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentContext, PossiblyCurrentContext, Version,
};
use glutin::display::{Display, GetGlDisplay};
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasRawWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event::{Event as WinitEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use winit::window::{Window as WinitWindow, WindowBuilder};

use crate::{gl, Event};

/// A window with a GL surface attached.
///
/// The window itself stays on the thread that created it (the platform event
/// pump must run there), while [`Window::take_screen`] hands the presentable
/// side to a render thread.
pub struct Window {
    event_loop: EventLoop<()>,
    window: WinitWindow,
    screen: Option<Screen>,
    events_tx: Sender<Event>,
    events_rx: Option<Receiver<Event>>,
}

impl Window {

    /// Opens a window and prepares a GL context and surface for it.
    pub fn open(title: &str, width: u32, height: u32) -> anyhow::Result<Window> {
        let event_loop = EventLoopBuilder::new().build()?;
        let window_builder = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(width, height));

        let (window, config) = DisplayBuilder::new()
            .with_window_builder(Some(window_builder))
            .build(&event_loop, ConfigTemplateBuilder::new(), |mut configs| {
                configs.next().expect("no GL configs offered by the display")
            })
            .map_err(|err| anyhow!("failed to create GL display: {err}"))?;
        let window = window.context("display builder returned no window")?;

        let raw_window_handle = window.raw_window_handle();
        let display = config.display();
        // Immediate-mode entry points need a legacy context, not a core one.
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(2, 1))))
            .build(Some(raw_window_handle));
        let context = unsafe { display.create_context(&config, &context_attributes)? };

        let size = window.inner_size();
        let surface_attributes = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(size.width).unwrap_or(NonZeroU32::MIN),
            NonZeroU32::new(size.height).unwrap_or(NonZeroU32::MIN),
        );
        let surface = unsafe { display.create_window_surface(&config, &surface_attributes)? };

        let (events_tx, events_rx) = mpsc::channel();
        Ok(Window {
            event_loop,
            window,
            screen: Some(Screen { display, surface, context }),
            events_tx,
            events_rx: Some(events_rx),
        })
    }

    /// The inbound window-event channel. Can be taken once.
    pub fn take_events(&mut self) -> Receiver<Event> {
        self.events_rx.take().expect("event receiver already taken")
    }

    /// The presentable side of the window, meant to move to the render
    /// thread. Can be taken once.
    pub fn take_screen(&mut self) -> Screen {
        self.screen.take().expect("screen already taken")
    }

    /// Runs the platform event pump on the calling thread, forwarding window
    /// events into the channel. Returns once the window is closed, after
    /// which the process is expected to exit.
    pub fn pump(self) -> anyhow::Result<()> {
        let events_tx = self.events_tx;
        let window = self.window;
        self.event_loop.run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Wait);
            let WinitEvent::WindowEvent { window_id, event } = event else {
                return;
            };
            if window_id != window.id() {
                return;
            }
            let forwarded = match event {
                WindowEvent::CloseRequested => Event::CloseRequested,
                WindowEvent::Resized(size) => Event::Resized(size.width, size.height),
                WindowEvent::Focused(focused) => Event::Focused(focused),
                WindowEvent::CursorMoved { position, .. } => Event::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                },
                _ => return,
            };
            let close = forwarded == Event::CloseRequested;
            // The receiver disappearing just means the render thread is gone.
            let _ = events_tx.send(forwarded);
            if close {
                elwt.exit();
            }
        })?;
        Ok(())
    }
}

/// The presentable side of a [`Window`]: GL display, surface, and a context
/// that is not yet current. `Send`, so it can move to the render thread.
pub struct Screen {
    display: Display,
    surface: Surface<WindowSurface>,
    context: NotCurrentContext,
}

impl Screen {
    /// Makes the GL context current on the calling thread and installs the
    /// function-pointer loader for the `gl` module. All GL calls must happen
    /// on this thread afterwards.
    pub fn make_current(self) -> anyhow::Result<CurrentScreen> {
        let context = self.context.make_current(&self.surface)?;
        let display = self.display;
        gl::load_with(|symbol| {
            let symbol = CString::new(symbol).expect("GL symbol names contain no NUL");
            display.get_proc_address(&symbol)
        });
        Ok(CurrentScreen {
            surface: self.surface,
            context,
        })
    }
}

/// A [`Screen`] whose context is current. Lives and dies on the render
/// thread.
pub struct CurrentScreen {
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
}

impl CurrentScreen {
    /// Swaps buffers, making the finished frame visible.
    pub fn present(&self) -> anyhow::Result<()> {
        self.surface.swap_buffers(&self.context)?;
        Ok(())
    }

    /// Resizes the GL surface after the window's inner size changed.
    pub fn resize(&self, width: u32, height: u32) {
        self.surface.resize(
            &self.context,
            NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
            NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
        );
    }
}
