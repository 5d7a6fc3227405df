//! GPIO pin abstractions
//!
//! Provides traits for digital pins backed by a port output register.

/// Digital output pin
///
/// Implementations drive the pin's bit in the port's output register.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Invert the pin's output level
    fn toggle(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Pin that can be used for both input and output
///
/// The simulated port reads back its own output register, so every pin
/// handle is an `IoPin`.
pub trait IoPin: OutputPin + InputPin {}

// Blanket implementation for types that implement both traits
impl<T: OutputPin + InputPin> IoPin for T {}

/// Pin whose direction can be switched at runtime
///
/// Changing direction never changes the pin's output level.
pub trait ConfigurablePin {
    /// Configure the pin as an output
    fn set_as_output(&mut self);

    /// Configure the pin as an input
    fn set_as_input(&mut self);

    /// Check if the pin is configured as an output
    fn is_output(&self) -> bool;

    /// Check if the pin is configured as an input
    fn is_input(&self) -> bool {
        !self.is_output()
    }
}
