/// Host hook for "call me on the next frame". On the web this wraps
/// `requestAnimationFrame` / `cancelAnimationFrame`.
pub trait FrameScheduler {
    type Handle: Copy;

    /// Request one future frame callback. `None` means the host refused.
    fn request(&mut self) -> Option<Self::Handle>;

    /// Revoke a previously requested callback. Must be synchronous: once this
    /// returns, the callback for `handle` never fires.
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    Stopped,
}

/// Timing handed to one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    /// Seconds since the driver started.
    pub elapsed: f32,
    /// Seconds since the previous frame (0 on the first).
    pub dt: f32,
    pub index: u64,
}

/// Single continuously-rescheduled unit of work: `Idle -> Running -> Stopped`.
///
/// At most one callback is pending at a time. `stop` revokes it before
/// returning, and a callback that still fires after `stop` gets no tick and
/// schedules nothing.
pub struct FrameDriver<S: FrameScheduler> {
    scheduler: S,
    state: DriverState,
    pending: Option<S::Handle>,
    started_at: f64,
    last_elapsed: f32,
    frames: u64,
}

impl<S: FrameScheduler> FrameDriver<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: DriverState::Idle,
            pending: None,
            started_at: 0.0,
            last_elapsed: 0.0,
            frames: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Enter `Running` and request the first frame. Only valid from `Idle`;
    /// returns whether the transition happened.
    pub fn start(&mut self, now: f64) -> bool {
        if self.state != DriverState::Idle {
            return false;
        }
        self.state = DriverState::Running;
        self.started_at = now;
        self.schedule();
        true
    }

    /// Called from the scheduled callback. Clears the pending handle and
    /// returns the tick to draw, or `None` when the driver is not running.
    pub fn begin_frame(&mut self, now: f64) -> Option<FrameTick> {
        self.pending = None;
        if self.state != DriverState::Running {
            return None;
        }
        let elapsed = ((now - self.started_at).max(0.0)) as f32;
        let dt = if self.frames == 0 {
            0.0
        } else {
            (elapsed - self.last_elapsed).max(0.0)
        };
        let tick = FrameTick {
            elapsed,
            dt,
            index: self.frames,
        };
        self.last_elapsed = elapsed;
        self.frames += 1;
        Some(tick)
    }

    /// Request the next frame if still running.
    pub fn end_frame(&mut self) {
        if self.state == DriverState::Running {
            self.schedule();
        }
    }

    /// Transition to `Stopped`, revoking any pending callback first.
    /// Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.state = DriverState::Stopped;
    }

    fn schedule(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.pending = self.scheduler.request();
        if self.pending.is_none() {
            // Host refused to schedule; nothing further will run.
            self.state = DriverState::Stopped;
        }
    }
}
