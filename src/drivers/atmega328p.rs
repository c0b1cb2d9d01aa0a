use core::marker::PhantomData;

use avr_device::atmega328p::{TC1, TC2};

use crate::adapters::pulse::{PulseCounter, PulseOverflow};
use crate::adapters::window::WindowTimer;
use crate::clock::Clock;

/// Input edge the pulse counter counts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
}

/// TC1 as the pulse counter, clocked externally by the signal on the T1 pin.
pub struct Tc1PulseDrv {
    tc1: TC1,
    edge: Edge,
}

impl Tc1PulseDrv {
    /// Take ownership of TC1 and put it in normal counting mode, stopped
    /// and zeroed.
    pub fn new(tc1: TC1, edge: Edge) -> Self {
        tc1.tccr1a.write(|w| w.wgm1().bits(0));
        tc1.tccr1b.write(|w| w.cs1().no_clock());
        tc1.tcnt1.write(|w| w.bits(0));
        Self { tc1, edge }
    }
}

impl PulseCounter for Tc1PulseDrv {
    fn value(&self) -> u32 {
        // The 16 bit TCNT1 read is only atomic while the clock is stopped.
        self.tc1.tcnt1.read().bits() as u32
    }

    fn reset(&mut self) {
        self.tc1.tcnt1.write(|w| w.bits(0));
    }

    fn start(&mut self) {
        match self.edge {
            Edge::Rising => self.tc1.tccr1b.write(|w| w.cs1().ext_rising()),
            Edge::Falling => self.tc1.tccr1b.write(|w| w.cs1().ext_falling()),
        }
    }

    fn stop(&mut self) {
        self.tc1.tccr1b.write(|w| w.cs1().no_clock());
    }
}

impl PulseOverflow for Tc1PulseDrv {
    const MAX: u32 = 0xFFFF; // TC1 is a 16 bit counter.

    fn overflow_int_enable(&mut self) {
        self.tc1.timsk1.write(|w| w.toie1().set_bit());
    }

    fn is_pending_overflow(&self) -> bool {
        self.tc1.tifr1.read().tov1().bit()
    }

    fn clear_pending_overflow(&mut self) {
        // TOV1 clears by writing a one to it.
        self.tc1.tifr1.write(|w| w.tov1().set_bit());
    }
}

/// TC2 on the /1024 prescaler as the window timer: one tick per 256 counts,
/// i.e. 61.03515625 ticks per second on the stock 16 MHz crystal.
pub struct Tc2WindowDrv<C: Clock> {
    tc2: TC2,
    clock: PhantomData<C>,
}

impl<C: Clock> Tc2WindowDrv<C> {
    /// Take ownership of TC2 and put it in normal counting mode, stopped
    /// and zeroed.
    pub fn new(tc2: TC2) -> Self {
        tc2.tccr2a.write(|w| w.wgm2().bits(0));
        tc2.tccr2b.write(|w| w.cs2().no_clock());
        tc2.tcnt2.write(|w| w.bits(0));
        Self {
            tc2,
            clock: PhantomData,
        }
    }
}

impl<C: Clock> WindowTimer for Tc2WindowDrv<C> {
    const TICK_RATE: f64 = C::FREQ as f64 / (1024.0 * 256.0);

    fn tick_int_enable(&mut self) {
        self.tc2.timsk2.write(|w| w.toie2().set_bit());
    }

    fn reset(&mut self) {
        self.tc2.tcnt2.write(|w| w.bits(0));
    }

    fn start(&mut self) {
        self.tc2.tccr2b.write(|w| w.cs2().prescale_1024());
    }

    fn stop(&mut self) {
        self.tc2.tccr2b.write(|w| w.cs2().no_clock());
    }
}
