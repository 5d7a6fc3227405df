//! Port 0 register model
//!
//! Holds the OUT register, the PIN_CNF words and the toggle counter.
//! Public operations take raw pin numbers and validate them up front; the
//! private helpers below operate on an already validated [`PinIndex`] and
//! cannot fail.

use gpiosim_hal::{ConfigurablePin, InputPin, OutputPin};

use super::error::GpioError;
use super::pin::{Direction, Level, PinEvent, PinIndex, PIN_COUNT};
use crate::observer::{NullObserver, PortEvent, PortObserver};

/// Simulated GPIO port
///
/// One instance is created per run and mutated in place. Every successful
/// state change is reported to the observer `O` after it has been applied.
#[derive(Debug, Clone)]
pub struct RegisterModel<O = NullObserver> {
    /// OUT register: bit `n` is the output level of pin `n`
    out: u32,
    /// PIN_CNF words; only the DIR bit is interpreted
    pin_cnf: [u32; PIN_COUNT],
    /// Successful toggles since creation
    toggle_count: u64,
    observer: O,
}

impl Default for RegisterModel<NullObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterModel<NullObserver> {
    /// Create a model with all outputs low and all pins configured as inputs
    pub fn new() -> Self {
        Self::with_observer(NullObserver)
    }
}

impl<O: PortObserver> RegisterModel<O> {
    /// Create a model that reports state changes to `observer`
    pub fn with_observer(observer: O) -> Self {
        Self {
            out: 0,
            pin_cnf: [0; PIN_COUNT],
            toggle_count: 0,
            observer,
        }
    }

    /// Set or clear the DIR bit of a pin's configuration word
    ///
    /// Other configuration bits and the OUT register are left untouched.
    pub fn configure_pin(&mut self, pin: i32, direction: Direction) -> Result<(), GpioError> {
        let pin = PinIndex::new(pin)?;
        self.write_direction(pin, direction);
        Ok(())
    }

    /// Like [`configure_pin`](Self::configure_pin) with a raw direction
    /// value (0 = input, 1 = output)
    ///
    /// Both arguments are validated before anything is written.
    pub fn configure_pin_raw(&mut self, pin: i32, direction: i32) -> Result<(), GpioError> {
        let pin = PinIndex::new(pin)?;
        let direction = Direction::try_from(direction)?;
        self.write_direction(pin, direction);
        Ok(())
    }

    /// Drive a pin high (`true`) or low (`false`)
    pub fn set_pin(&mut self, pin: i32, value: bool) -> Result<(), GpioError> {
        let pin = PinIndex::new(pin)?;
        self.drive(pin, value);
        Ok(())
    }

    /// Invert a pin and count the toggle
    ///
    /// Returns the level after inverting.
    pub fn toggle_pin(&mut self, pin: i32) -> Result<Level, GpioError> {
        let pin = PinIndex::new(pin)?;
        Ok(self.invert(pin))
    }

    /// Read a pin's output bit (0 or 1)
    pub fn get_pin_state(&self, pin: i32) -> Result<u8, GpioError> {
        self.level(pin).map(Level::bit)
    }

    /// Read a pin's output level
    pub fn level(&self, pin: i32) -> Result<Level, GpioError> {
        let pin = PinIndex::new(pin)?;
        Ok(self.read(pin))
    }

    /// Read a pin's configured direction
    pub fn direction(&self, pin: i32) -> Result<Direction, GpioError> {
        let pin = PinIndex::new(pin)?;
        Ok(Direction::from_cnf(self.pin_cnf[pin.as_usize()]))
    }

    /// Read a pin's whole configuration word
    pub fn pin_cnf(&self, pin: i32) -> Result<u32, GpioError> {
        let pin = PinIndex::new(pin)?;
        Ok(self.pin_cnf[pin.as_usize()])
    }

    /// Overwrite a pin's whole configuration word
    ///
    /// This is a raw register write; no event is reported.
    pub fn write_pin_cnf(&mut self, pin: i32, cnf: u32) -> Result<(), GpioError> {
        let pin = PinIndex::new(pin)?;
        self.pin_cnf[pin.as_usize()] = cnf;
        Ok(())
    }

    /// Current value of the OUT register
    pub fn out_register(&self) -> u32 {
        self.out
    }

    /// Number of successful toggles since creation
    pub fn toggle_count(&self) -> u64 {
        self.toggle_count
    }

    /// Borrow a handle to one pin
    ///
    /// The handle implements the `gpiosim-hal` traits. Its operations go
    /// through this model, so toggles made through it are counted and
    /// reported like any other.
    pub fn pin(&mut self, pin: i32) -> Result<PortPin<'_, O>, GpioError> {
        let pin = PinIndex::new(pin)?;
        Ok(PortPin { model: self, pin })
    }

    /// Borrow the observer
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutably borrow the observer, e.g. to report test progress
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the model, returning its observer
    pub fn into_observer(self) -> O {
        self.observer
    }

    fn write_direction(&mut self, pin: PinIndex, direction: Direction) {
        let cnf = &mut self.pin_cnf[pin.as_usize()];
        *cnf = direction.apply(*cnf);
        self.observer.on_event(&PortEvent::Configured { pin, direction });
    }

    fn drive(&mut self, pin: PinIndex, high: bool) {
        let level = self.read(pin).transition(PinEvent::Set(high));
        self.store(pin, level);
        self.observer.on_event(&PortEvent::Set { pin, level });
    }

    fn invert(&mut self, pin: PinIndex) -> Level {
        self.out ^= pin.mask();
        self.toggle_count += 1;
        let level = self.read(pin);
        self.observer.on_event(&PortEvent::Toggled {
            pin,
            level,
            count: self.toggle_count,
        });
        level
    }

    fn read(&self, pin: PinIndex) -> Level {
        Level::from_bit(self.out & pin.mask() != 0)
    }

    fn store(&mut self, pin: PinIndex, level: Level) {
        if level.is_high() {
            self.out |= pin.mask();
        } else {
            self.out &= !pin.mask();
        }
    }
}

/// Handle to a single validated pin of a [`RegisterModel`]
#[derive(Debug)]
pub struct PortPin<'a, O> {
    model: &'a mut RegisterModel<O>,
    pin: PinIndex,
}

impl<O: PortObserver> PortPin<'_, O> {
    /// Index of the pin this handle controls
    pub fn index(&self) -> PinIndex {
        self.pin
    }

    /// Current output level
    pub fn level(&self) -> Level {
        self.model.read(self.pin)
    }
}

impl<O: PortObserver> OutputPin for PortPin<'_, O> {
    fn set_high(&mut self) {
        self.model.drive(self.pin, true);
    }

    fn set_low(&mut self) {
        self.model.drive(self.pin, false);
    }

    fn toggle(&mut self) {
        self.model.invert(self.pin);
    }

    fn is_set_high(&self) -> bool {
        self.level().is_high()
    }
}

impl<O: PortObserver> InputPin for PortPin<'_, O> {
    fn is_high(&self) -> bool {
        self.level().is_high()
    }
}

impl<O: PortObserver> ConfigurablePin for PortPin<'_, O> {
    fn set_as_output(&mut self) {
        self.model.write_direction(self.pin, Direction::Output);
    }

    fn set_as_input(&mut self) {
        self.model.write_direction(self.pin, Direction::Input);
    }

    fn is_output(&self) -> bool {
        Direction::from_cnf(self.model.pin_cnf[self.pin.as_usize()]) == Direction::Output
    }
}
