//! Monotonic tick timer abstraction

/// Free-running tick counter with a scoped restart
///
/// `start` resets the elapsed count to zero; `elapsed` returns ticks since
/// the last `start`. Implementations must not block.
pub trait TickTimer {
    /// Reset the elapsed count to zero and begin counting
    fn start(&mut self);

    /// Tick frequency in ticks per second
    fn frequency(&self) -> u32;

    /// Ticks elapsed since the last call to [`start`](Self::start)
    fn elapsed(&mut self) -> u32;

    /// Spin until at least `deadline` ticks have elapsed since `start`
    #[inline]
    fn wait_until(&mut self, deadline: u32) {
        while self.elapsed() < deadline {
            core::hint::spin_loop();
        }
    }
}

impl<T: TickTimer + ?Sized> TickTimer for &mut T {
    fn start(&mut self) {
        T::start(self)
    }

    fn frequency(&self) -> u32 {
        T::frequency(self)
    }

    fn elapsed(&mut self) -> u32 {
        T::elapsed(self)
    }
}
