//! Simulated GPIO port
//!
//! Models the single output register of an nRF52840 GPIO port plus the
//! direction bit of each pin's configuration word. Every operation
//! validates its pin index before touching any state.

pub mod error;
pub mod pin;
pub mod port;

pub use error::GpioError;
pub use pin::{Direction, Level, PinEvent, PinIndex, PIN_COUNT};
pub use port::{PortPin, RegisterModel};
