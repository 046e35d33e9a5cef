use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;
use minigl::gl;
use minigl::{Bitmap, Canvas, Color, Event, Screen, Window};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const IMG_PATH: &str = "assets/crab.png";
const FRAME_INTERVAL: Duration = Duration::from_millis(20);

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut window = Window::open("Test", WIDTH, HEIGHT)?;
    let events = window.take_events();
    let screen = window.take_screen();
    thread::spawn(move || {
        if let Err(err) = render_main(screen, events) {
            log::error!("render thread failed: {err:#}");
            std::process::exit(1);
        }
    });
    // The calling thread stays dedicated to the platform event pump.
    window.pump()
}

fn render_main(screen: Screen, events: Receiver<Event>) -> anyhow::Result<()> {
    let screen = screen.make_current()?;
    let mut canvas = Canvas::new(WIDTH, HEIGHT);

    let mut img = Bitmap::load_png(IMG_PATH)?;
    img.width = 100;
    img.height = 100;

    let mut next_frame = Instant::now() + FRAME_INTERVAL;
    loop {
        let timeout = next_frame.saturating_duration_since(Instant::now());
        match events.recv_timeout(timeout) {
            Ok(Event::CloseRequested) | Err(RecvTimeoutError::Disconnected) => return Ok(()),
            Ok(Event::Resized(width, height)) => {
                screen.resize(width, height);
                canvas.resize(width, height);
            }
            Ok(event) => log::debug!("{event:?}"),
            Err(RecvTimeoutError::Timeout) => {
                let (width, height) = canvas.size();
                canvas.clear(Color::BLACK);
                canvas.fill_rect(10.0, 10.0, 20.0, 50.0, Color::RED);
                canvas.fill_rect(100.0, 100.0, 50.0, 50.0, Color::BLUE);
                canvas.fill_rect(200.0, 200.0, 100.0, 100.0, Color::GREEN);
                canvas.stroke_line(
                    Color::RED,
                    1.0,
                    Vec2::new((width - 1) as f32, 0.0),
                    Vec2::new(0.0, (height - 1) as f32),
                );
                canvas.draw_image(200.0, 200.0, &img);
                screen.present()?;
                if let Some(err) = gl::get_error() {
                    log::error!("GL error after frame: {err}");
                }
                next_frame += FRAME_INTERVAL;
            }
        }
    }
}
