use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
    Info,
}

impl FlashKind {
    pub fn class(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
            FlashKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
}

impl Flash {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Info,
            text: text.into(),
        }
    }
}

/// What the message area shows: the last message, and whether it is still visible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlashState {
    pub current: Option<Flash>,
    pub visible: bool,
}

impl FlashState {
    pub fn class(&self) -> Classes {
        let mut classes = classes!("message");
        if let Some(flash) = &self.current {
            classes.push(flash.kind.class());
        }
        if !self.visible {
            classes.push("hidden");
        }
        classes
    }
}

/// Shows messages and hides each one after `timeout_ms`.
#[derive(Clone)]
pub struct FlashHandle {
    state: UseStateHandle<FlashState>,
    timer: Rc<RefCell<Option<Timeout>>>,
    timeout_ms: u32,
}

impl PartialEq for FlashHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && Rc::ptr_eq(&self.timer, &other.timer)
    }
}

impl FlashHandle {
    pub fn state(&self) -> &FlashState {
        &self.state
    }

    pub fn show(&self, flash: Flash) {
        self.state.set(FlashState {
            current: Some(flash.clone()),
            visible: true,
        });

        let state = self.state.clone();
        // Replacing the handle drops the previous Timeout, which cancels it.
        *self.timer.borrow_mut() = Some(Timeout::new(self.timeout_ms, move || {
            state.set(FlashState {
                current: Some(flash),
                visible: false,
            });
        }));
    }
}

#[hook]
pub fn use_flash(timeout_ms: u32) -> FlashHandle {
    let state = use_state(FlashState::default);
    let timer = use_mut_ref(|| None::<Timeout>);
    FlashHandle {
        state,
        timer,
        timeout_ms,
    }
}
