//! Receive line abstraction

/// Single-bit receive line
///
/// Implementations read the current logic level of the RX line without
/// blocking. Reads take `&mut self` so simulated lines can advance time.
pub trait LineSampler {
    /// Check if the line reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the line reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

impl<T: LineSampler + ?Sized> LineSampler for &mut T {
    fn is_high(&mut self) -> bool {
        T::is_high(self)
    }
}
