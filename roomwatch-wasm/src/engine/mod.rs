use crate::logger::Logger;
use roomwatch_core::constants::ROOM_GLOBAL;
use roomwatch_core::{
    Command, ConnectionSlot, InjectedValue, Input, PageOrigin, ReloadMachine, RoomId,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

mod socket_impl;
mod timers_impl;

struct SocketHandlers {
    _on_open: Closure<dyn FnMut(JsValue)>,
    _on_message: Closure<dyn FnMut(web_sys::MessageEvent)>,
    _on_close: Closure<dyn FnMut(web_sys::CloseEvent)>,
}

struct Socket {
    ws: web_sys::WebSocket,
    _handlers: SocketHandlers,
}

struct Keepalive {
    handle: i32,
    _tick: Closure<dyn FnMut()>,
}

struct EngineInner {
    machine: ReloadMachine,
    socket: ConnectionSlot<Socket>,
    keepalive: ConnectionSlot<Keepalive>,
}

/// Browser driver of the reload machine: one WebSocket and the window timers.
pub struct LiveReloadEngine {
    inner: Rc<RefCell<EngineInner>>,
}

impl LiveReloadEngine {
    /// Starts watching `room` on the page's own host.
    ///
    /// An absent or sentinel room leaves the engine idle for the page lifetime.
    pub fn new(room: Option<String>) -> Result<Self, JsValue> {
        let window = window()?;
        let location = window.location();
        let origin = PageOrigin::from_location(&location.protocol()?, &location.host()?);
        let room = RoomId::from_injected(room.as_deref());

        let engine = LiveReloadEngine {
            inner: Rc::new(RefCell::new(EngineInner {
                machine: ReloadMachine::new(origin, room),
                socket: ConnectionSlot::new(),
                keepalive: ConnectionSlot::new(),
            })),
        };

        Self::dispatch(&engine.inner, Input::Start);
        if engine.inner.borrow().machine.room().is_none() {
            Logger::debug("no room configured, live reload disabled");
        }

        Ok(engine)
    }

    /// Same as [`LiveReloadEngine::new`] with the room read from `window.__ROOM__`.
    pub fn from_global() -> Result<Self, JsValue> {
        Self::new(injected_room(&window()?).into_room_text())
    }

    /// Feeds one input and executes the resulting commands. Commands that
    /// complete synchronously may queue follow-up inputs.
    fn dispatch(inner: &Rc<RefCell<EngineInner>>, input: Input) {
        let mut pending = VecDeque::from([input]);

        while let Some(input) = pending.pop_front() {
            let commands = inner.borrow_mut().machine.handle(input);
            for command in commands {
                if let Some(next) = Self::perform(inner, command) {
                    pending.push_back(next);
                }
            }
        }
    }

    fn perform(inner: &Rc<RefCell<EngineInner>>, command: Command) -> Option<Input> {
        match command {
            Command::Connect { id, url } => Self::open_socket(inner, id, &url),
            Command::StartKeepalive { id, every } => {
                Self::start_keepalive(inner, id, every);
                None
            }
            Command::StopKeepalive { id } => {
                Self::stop_keepalive(inner, id);
                None
            }
            Command::Send { id, text } => {
                if let Some(socket) = inner.borrow().socket.get(id) {
                    let _ = socket.ws.send_with_str(&text);
                }
                None
            }
            Command::Reload => {
                Logger::info("new message, reloading page");
                let reloaded = window().and_then(|w| w.location().reload());
                if let Err(e) = reloaded {
                    Logger::error("page reload failed", &e);
                }
                None
            }
            Command::ScheduleRetry { after } => {
                Self::schedule_retry(inner, after);
                None
            }
        }
    }
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// Reads the injected room global. Truthiness is decided by [`InjectedValue`].
fn injected_room(window: &web_sys::Window) -> InjectedValue {
    match js_sys::Reflect::get(window, &JsValue::from_str(ROOM_GLOBAL)) {
        Ok(value) => injected_value(value),
        Err(_) => InjectedValue::Nullish,
    }
}

fn injected_value(value: JsValue) -> InjectedValue {
    if value.is_undefined() || value.is_null() {
        InjectedValue::Nullish
    } else if let Some(b) = value.as_bool() {
        InjectedValue::Bool(b)
    } else if let Some(n) = value.as_f64() {
        InjectedValue::Number(n)
    } else if let Some(s) = value.as_string() {
        InjectedValue::Text(s)
    } else if value.is_falsy() {
        // 0n and document.all
        InjectedValue::Nullish
    } else {
        InjectedValue::Other(value.unchecked_into::<js_sys::Object>().to_string().into())
    }
}

fn weak(inner: &Rc<RefCell<EngineInner>>) -> Weak<RefCell<EngineInner>> {
    Rc::downgrade(inner)
}
