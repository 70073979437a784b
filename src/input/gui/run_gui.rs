use crate::controllers::render::{RenderController, RenderState};
use crate::input::cli::args::CliOptions;
use crate::input::gui::events::GuiEvent;
use crate::presenters::clock::TickClock;
use crate::presenters::pixels::presenter::PixelsPresenter;
use log::{error, info};
use std::error::Error;
use std::fmt;
use std::time::Instant;
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

const TITLE: &str = "Mandelbrot";

#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Pixels(pixels::Error),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Pixels(err) => write!(f, "pixels error: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Pixels(err) => Some(err),
        }
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Pixels(err)
    }
}

enum Command {
    Start,
    Stop,
}

fn command_for(event: &KeyEvent) -> Option<Command> {
    if event.state != ElementState::Pressed || event.repeat {
        return None;
    }

    match &event.logical_key {
        Key::Named(NamedKey::Enter) => Some(Command::Start),
        Key::Named(NamedKey::Escape) => Some(Command::Stop),
        Key::Character(text) if text.eq_ignore_ascii_case("s") => Some(Command::Start),
        Key::Character(text) if text.eq_ignore_ascii_case("x") => Some(Command::Stop),
        _ => None,
    }
}

fn title_for(state: RenderState) -> String {
    match state {
        RenderState::Idle => format!("{} (S: start)", TITLE),
        RenderState::Rendering => format!("{} (rendering, X: stop)", TITLE),
    }
}

/// Runs the window until it is closed.
pub fn run_gui(options: CliOptions) -> Result<(), GuiError> {
    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;

    // pixels needs a 'static window
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(title_for(RenderState::Idle))
            .with_inner_size(PhysicalSize::new(options.size.0, options.size.1))
            .with_resizable(true)
            .build(&event_loop)?,
    ));

    let mut presenter = PixelsPresenter::new(window, event_loop.create_proxy())?;
    let clock = TickClock::new();
    let mut controller =
        RenderController::new(presenter.share_surface(), clock.clone(), options.config);
    let mut shown_state = RenderState::Idle;

    info!("press S or Enter to start rendering, X or Escape to stop");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => {
                controller.on_render_stop();
                elwt.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => match command_for(&event) {
                Some(Command::Start) => {
                    controller.on_render_start();
                }
                Some(Command::Stop) => {
                    controller.on_render_stop();
                }
                None => {}
            },
            WindowEvent::Resized(size) => {
                if let Err(err) = presenter.resize(size.width, size.height) {
                    error!("resize failed: {}", err);
                    elwt.exit();
                }
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = presenter.render() {
                    error!("render failed: {}", err);
                    elwt.exit();
                }
            }
            _ => {}
        },
        Event::UserEvent(GuiEvent::Wake) => match presenter.update() {
            Ok(true) => window.request_redraw(),
            Ok(false) => {}
            Err(err) => {
                error!("failed to draw frame: {}", err);
                elwt.exit();
            }
        },
        Event::AboutToWait => {
            clock.run_due(Instant::now());

            let state = controller.state();
            if state != shown_state {
                window.set_title(&title_for(state));
                shown_state = state;
            }

            match clock.next_deadline() {
                Some(deadline) => elwt.set_control_flow(ControlFlow::WaitUntil(deadline)),
                None => elwt.set_control_flow(ControlFlow::Wait),
            }
        }
        _ => {}
    })?;

    Ok(())
}
