/// Output line wired to the receiver's enable input
pub trait PowerLine {
    fn set_high(&mut self);
    fn set_low(&mut self);
}

impl<P: PowerLine + ?Sized> PowerLine for &mut P {
    fn set_high(&mut self) {
        (**self).set_high()
    }

    fn set_low(&mut self) {
        (**self).set_low()
    }
}

/// Receivers without a switchable supply
impl PowerLine for () {
    fn set_high(&mut self) {}
    fn set_low(&mut self) {}
}

/// Active-low power switch: the receiver runs while the line is driven low.
///
/// Has no effect on acquisition state.
#[derive(Debug)]
pub struct PowerControl<P: PowerLine> {
    line: P,
}

impl<P: PowerLine> PowerControl<P> {
    pub fn new(line: P) -> Self {
        Self { line }
    }

    pub fn turn_on(&mut self) {
        log::debug!("Powering receiver on");
        self.line.set_low();
    }

    pub fn turn_off(&mut self) {
        log::debug!("Powering receiver off");
        self.line.set_high();
    }

    pub fn release(self) -> P {
        self.line
    }
}
