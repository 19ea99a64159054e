use crate::LiveReloadEngine;
use crate::engine::{EngineInner, Socket, SocketHandlers, weak};
use crate::logger::Logger;
use roomwatch_core::{ConnectionId, Input};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use web_sys::WebSocket;

impl LiveReloadEngine {
    /// Replaces the current socket with a new one. A constructor failure is
    /// reported back as an immediate close.
    pub(super) fn open_socket(
        inner: &Rc<RefCell<EngineInner>>,
        id: ConnectionId,
        url: &str,
    ) -> Option<Input> {
        if let Some((_, old)) = inner.borrow_mut().socket.take() {
            old.ws.set_onopen(None);
            old.ws.set_onmessage(None);
            old.ws.set_onclose(None);
            let _ = old.ws.close();
        }

        let ws = match WebSocket::new(url) {
            Ok(ws) => ws,
            Err(e) => {
                Logger::error(&format!("cannot open {}", url), &e);
                return Some(Input::Closed(id));
            }
        };
        Logger::debug(&format!("connecting {} to {}", id, url));

        let on_open = {
            let inner = weak(inner);
            Closure::<dyn FnMut(JsValue)>::wrap(Box::new(move |_| {
                Logger::debug(&format!("connection {} open", id));
                if let Some(inner) = inner.upgrade() {
                    Self::dispatch(&inner, Input::Opened(id));
                }
            }))
        };
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));

        let on_message = {
            let inner = weak(inner);
            Closure::<dyn FnMut(web_sys::MessageEvent)>::wrap(Box::new(
                move |e: web_sys::MessageEvent| {
                    if let Ok(text) = e.data().dyn_into::<js_sys::JsString>() {
                        if let Some(inner) = inner.upgrade() {
                            Self::dispatch(&inner, Input::Frame(id, text.into()));
                        }
                    }
                },
            ))
        };
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let on_close = {
            let inner = weak(inner);
            Closure::<dyn FnMut(web_sys::CloseEvent)>::wrap(Box::new(
                move |e: web_sys::CloseEvent| {
                    Logger::debug(&format!("connection {} closed ({})", id, e.code()));
                    if let Some(inner) = inner.upgrade() {
                        Self::dispatch(&inner, Input::Closed(id));
                    }
                },
            ))
        };
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        inner.borrow_mut().socket.replace(
            id,
            Socket {
                ws,
                _handlers: SocketHandlers {
                    _on_open: on_open,
                    _on_message: on_message,
                    _on_close: on_close,
                },
            },
        );
        None
    }
}
