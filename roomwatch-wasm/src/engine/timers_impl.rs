use crate::LiveReloadEngine;
use crate::engine::{EngineInner, Keepalive, weak, window};
use crate::logger::Logger;
use roomwatch_core::{ConnectionId, Input};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

fn millis(d: Duration) -> i32 {
    i32::try_from(d.as_millis()).unwrap_or(i32::MAX)
}

fn clear(keepalive: Keepalive) {
    if let Ok(w) = window() {
        w.clear_interval_with_handle(keepalive.handle);
    }
}

impl LiveReloadEngine {
    pub(super) fn start_keepalive(
        inner: &Rc<RefCell<EngineInner>>,
        id: ConnectionId,
        every: Duration,
    ) {
        let tick = {
            let inner = weak(inner);
            Closure::<dyn FnMut()>::wrap(Box::new(move || {
                if let Some(inner) = inner.upgrade() {
                    Self::dispatch(&inner, Input::KeepaliveTick(id));
                }
            }))
        };

        let handle = window().and_then(|w| {
            w.set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                millis(every),
            )
        });

        match handle {
            Ok(handle) => {
                let previous = inner
                    .borrow_mut()
                    .keepalive
                    .replace(id, Keepalive { handle, _tick: tick });
                if let Some(previous) = previous {
                    clear(previous);
                }
            }
            Err(e) => Logger::error("cannot start keepalive", &e),
        }
    }

    pub(super) fn stop_keepalive(inner: &Rc<RefCell<EngineInner>>, id: ConnectionId) {
        let stopped = inner.borrow_mut().keepalive.take_for(id);
        if let Some(keepalive) = stopped {
            clear(keepalive);
        }
    }

    pub(super) fn schedule_retry(inner: &Rc<RefCell<EngineInner>>, after: Duration) {
        let retry = {
            let inner = weak(inner);
            Closure::once_into_js(move || {
                if let Some(inner) = inner.upgrade() {
                    Self::dispatch(&inner, Input::RetryElapsed);
                }
            })
        };

        let scheduled = window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                retry.unchecked_ref(),
                millis(after),
            )
        });
        if let Err(e) = scheduled {
            Logger::error("cannot schedule reconnect", &e);
        }
    }
}
