//! GPIO receive line

use core::convert::Infallible;

use bitrx_core::LineSampler;
use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::Peri;
use embedded_hal::digital::InputPin;

/// Receive line on a GPIO input
///
/// Generic over any infallible `embedded-hal` input so it can wrap an
/// embassy `Input` or a test double.
pub struct GpioLine<P> {
    pin: P,
    /// If true, logic 1 is a LOW pin level (inverted transceivers)
    inverted: bool,
}

impl<P: InputPin<Error = Infallible>> GpioLine<P> {
    /// Wrap an input pin
    ///
    /// # Arguments
    /// - `pin`: The GPIO input to sample
    /// - `inverted`: If true, a LOW pin reads as logic 1
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }

    /// Release the pin
    pub fn free(self) -> P {
        self.pin
    }
}

impl<'d> GpioLine<Input<'d>> {
    /// Configure `pin` as an input with pull-up, so a disconnected line idles high
    pub fn pull_up(pin: Peri<'d, impl Pin>) -> Self {
        Self::new(Input::new(pin, Pull::Up), false)
    }
}

impl<P: InputPin<Error = Infallible>> LineSampler for GpioLine<P> {
    #[inline]
    fn is_high(&mut self) -> bool {
        let high = match self.pin.is_high() {
            Ok(high) => high,
            Err(never) => match never {},
        };
        high != self.inverted
    }
}
