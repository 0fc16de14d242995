//! Cancel-and-restart debouncing.
//!
//! A [`Debouncer`] runs its action once a quiet period has passed since the
//! most recent [`Debouncer::call`]. Scheduling goes through [`Scheduler`] so
//! the timing can be driven by a virtual clock in tests; in the browser it is
//! backed by `gloo-timers`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Quiet period before a resize regenerates the field, milliseconds.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Runs a task after a delay. Dropping the returned handle cancels the task
/// if it has not run yet.
pub trait Scheduler {
	/// Pending task; dropping it cancels the task.
	type Handle;

	/// Run `task` once after `delay_ms`.
	fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
	type Handle = Timeout;

	fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
		Timeout::new(delay_ms, task)
	}
}

/// Delays an action until calls stop arriving for `delay_ms`.
pub struct Debouncer<S: Scheduler> {
	scheduler: S,
	delay_ms: u32,
	action: Rc<dyn Fn()>,
	/// Handle of the latest scheduled run; replacing it cancels the previous one.
	pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Debouncer<S> {
	/// Run `action` once `delay_ms` have passed without another [`Debouncer::call`].
	pub fn new(scheduler: S, delay_ms: u32, action: impl Fn() + 'static) -> Self {
		Self {
			scheduler,
			delay_ms,
			action: Rc::new(action),
			pending: RefCell::new(None),
		}
	}

	/// Restart the quiet period.
	pub fn call(&self) {
		let action = self.action.clone();
		let handle = self.scheduler.schedule(self.delay_ms, Box::new(move || action()));
		// Old handle dropped here, cancelling its timer.
		self.pending.replace(Some(handle));
	}
}
