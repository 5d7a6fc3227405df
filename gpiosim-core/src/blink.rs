//! Blink test sequence
//!
//! Drives a [`RegisterModel`] through the three phases of the LED blink
//! check and produces a [`Verification`] verdict:
//!
//! 1. Configuration: set the LED pin's direction
//! 2. Toggle sequence: toggle the LED pin `toggles` times, with a simulated
//!    delay after each toggle
//! 3. Verification: compare the model's toggle counter to the expected count
//!
//! A count mismatch is an ordinary test failure, reported through
//! [`Outcome::Mismatch`]. Only invalid pin or direction values abort the
//! sequence with an error.

use crate::config::BlinkConfig;
use crate::gpio::{GpioError, RegisterModel};
use crate::observer::{EventLog, NullObserver, PortObserver};

/// Test phases, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// LED pin direction is written
    Configuration,
    /// LED pin is toggled `toggles` times
    ToggleSequence { toggles: u32 },
    /// Toggle counter is compared to the expected count
    Verification,
}

impl Phase {
    /// 1-based phase number
    pub fn number(&self) -> u8 {
        match self {
            Phase::Configuration => 1,
            Phase::ToggleSequence { .. } => 2,
            Phase::Verification => 3,
        }
    }

    /// Banner title of the phase
    pub fn title(&self) -> &'static str {
        match self {
            Phase::Configuration => "GPIO Configuration",
            Phase::ToggleSequence { .. } => "LED Toggle Sequence",
            Phase::Verification => "Verification",
        }
    }
}

/// Pass/fail result of the verification phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Observed count equals the expected count
    Pass,
    /// Observed count differs from the expected count
    Mismatch,
}

/// Observed versus expected toggle count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Verification {
    pub observed: u64,
    pub expected: u64,
}

impl Verification {
    /// `Pass` if the counts match, `Mismatch` otherwise
    pub fn outcome(&self) -> Outcome {
        if self.observed == self.expected {
            Outcome::Pass
        } else {
            Outcome::Mismatch
        }
    }

    /// True if the counts match
    pub fn passed(&self) -> bool {
        self.outcome() == Outcome::Pass
    }

    /// Process exit code for this verdict: 0 on pass, 1 on mismatch
    pub fn exit_code(&self) -> u8 {
        match self.outcome() {
            Outcome::Pass => 0,
            Outcome::Mismatch => 1,
        }
    }

    /// Full on/off cycles the expected toggle count represents
    pub fn complete_blinks(&self) -> u64 {
        self.expected / 2
    }
}

/// Observer that is also told about the test's progress
///
/// All methods default to doing nothing.
pub trait BlinkReporter: PortObserver {
    /// A phase is starting
    fn phase(&mut self, _phase: Phase) {}

    /// A delay of `ms` milliseconds would happen here on hardware
    fn simulated_delay(&mut self, _ms: u32) {}

    /// The verification phase has finished
    fn verdict(&mut self, _verification: &Verification) {}
}

impl BlinkReporter for NullObserver {}

impl<const N: usize> BlinkReporter for EventLog<N> {}

impl<R: BlinkReporter + ?Sized> BlinkReporter for &mut R {
    fn phase(&mut self, phase: Phase) {
        (**self).phase(phase);
    }

    fn simulated_delay(&mut self, ms: u32) {
        (**self).simulated_delay(ms);
    }

    fn verdict(&mut self, verification: &Verification) {
        (**self).verdict(verification);
    }
}

/// The blink test driver
#[derive(Debug, Clone, Copy, Default)]
pub struct BlinkTest {
    config: BlinkConfig,
}

impl BlinkTest {
    /// Create a driver for `config`
    pub fn new(config: BlinkConfig) -> Self {
        Self { config }
    }

    /// Configuration this driver runs
    pub fn config(&self) -> &BlinkConfig {
        &self.config
    }

    /// Run all three phases against `model`
    ///
    /// The model is used as-is: toggles made on it before the run count
    /// towards the verified total.
    pub fn run<R: BlinkReporter>(
        &self,
        model: &mut RegisterModel<R>,
    ) -> Result<Verification, GpioError> {
        let led = self.config.led;
        let sequence = self.config.sequence;

        model.observer_mut().phase(Phase::Configuration);
        model.configure_pin(led.pin, led.direction)?;

        model.observer_mut().phase(Phase::ToggleSequence {
            toggles: sequence.toggles,
        });
        for _ in 0..sequence.toggles {
            model.toggle_pin(led.pin)?;
            model.observer_mut().simulated_delay(sequence.delay_ms);
        }

        model.observer_mut().phase(Phase::Verification);
        let verification = Verification {
            observed: model.toggle_count(),
            expected: sequence.expected_toggles,
        };
        model.observer_mut().verdict(&verification);

        Ok(verification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::{Direction, Level};
    use crate::observer::PortEvent;

    /// Reporter that records the order of calls
    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
        delays: Vec<u32>,
        phases: Vec<Phase>,
        verdict: Option<Verification>,
        toggles: u64,
    }

    impl PortObserver for Recorder {
        fn on_event(&mut self, event: &PortEvent) {
            match event {
                PortEvent::Configured { .. } => self.calls.push("configured"),
                PortEvent::Set { .. } => self.calls.push("set"),
                PortEvent::Toggled { count, .. } => {
                    self.calls.push("toggled");
                    self.toggles = *count;
                }
            }
        }
    }

    impl BlinkReporter for Recorder {
        fn phase(&mut self, phase: Phase) {
            self.calls.push("phase");
            self.phases.push(phase);
        }

        fn simulated_delay(&mut self, ms: u32) {
            self.calls.push("delay");
            self.delays.push(ms);
        }

        fn verdict(&mut self, verification: &Verification) {
            self.calls.push("verdict");
            self.verdict = Some(*verification);
        }
    }

    #[test]
    fn test_reference_sequence_passes() {
        let mut model = RegisterModel::new();
        let verification = BlinkTest::default().run(&mut model).unwrap();

        assert_eq!(verification.observed, 10);
        assert_eq!(verification.expected, 10);
        assert_eq!(verification.outcome(), Outcome::Pass);
        assert_eq!(verification.exit_code(), 0);
        assert_eq!(verification.complete_blinks(), 5);

        assert_eq!(model.toggle_count(), 10);
        assert_eq!(model.direction(13), Ok(Direction::Output));
        // Even number of toggles ends where it started
        assert_eq!(model.level(13), Ok(Level::Low));
    }

    #[test]
    fn test_nine_toggles_mismatch() {
        let mut model = RegisterModel::new();
        let test = BlinkTest::new(BlinkConfig::default().with_toggles(9));
        let verification = test.run(&mut model).unwrap();

        assert_eq!(verification.observed, 9);
        assert_eq!(verification.outcome(), Outcome::Mismatch);
        assert!(!verification.passed());
        assert_eq!(verification.exit_code(), 1);
        assert_eq!(model.level(13), Ok(Level::High));
    }

    #[test]
    fn test_reporter_call_order() {
        let mut model = RegisterModel::with_observer(Recorder::default());
        let test = BlinkTest::new(BlinkConfig::default().with_toggles(2));
        test.run(&mut model).unwrap();

        let recorder = model.into_observer();
        assert_eq!(
            recorder.calls,
            vec![
                "phase",
                "configured",
                "phase",
                "toggled",
                "delay",
                "toggled",
                "delay",
                "phase",
                "verdict",
            ]
        );
        assert_eq!(
            recorder.phases,
            vec![
                Phase::Configuration,
                Phase::ToggleSequence { toggles: 2 },
                Phase::Verification,
            ]
        );
        assert_eq!(recorder.delays, vec![1000, 1000]);
        assert_eq!(recorder.toggles, 2);
        assert_eq!(
            recorder.verdict,
            Some(Verification {
                observed: 2,
                expected: 10
            })
        );
    }

    #[test]
    fn test_invalid_led_pin_aborts_before_toggling() {
        let mut config = BlinkConfig::default();
        config.led.pin = 32;

        let mut model = RegisterModel::with_observer(Recorder::default());
        let result = BlinkTest::new(config).run(&mut model);

        assert_eq!(result, Err(GpioError::InvalidPinIndex(32)));
        assert_eq!(model.toggle_count(), 0);
        assert_eq!(model.observer().calls, vec!["phase"]);
    }

    #[test]
    fn test_prior_toggles_count() {
        let mut model = RegisterModel::new();
        model.toggle_pin(0).unwrap();

        let verification = BlinkTest::default().run(&mut model).unwrap();
        assert_eq!(verification.observed, 11);
        assert_eq!(verification.exit_code(), 1);
    }

    #[test]
    fn test_phase_metadata() {
        assert_eq!(Phase::Configuration.number(), 1);
        assert_eq!(Phase::ToggleSequence { toggles: 10 }.number(), 2);
        assert_eq!(Phase::Verification.number(), 3);
        assert_eq!(Phase::Configuration.title(), "GPIO Configuration");
    }
}
