//! Frequency meter on an Arduino Uno.
//!
//! The measured signal goes to digital pin 5 (the T1 input); readings come
//! out on the serial console at 57600 baud, one line per completed window.

#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

use core::cell::RefCell;

use avr_device::interrupt::Mutex;
use freqmeter::{
    drivers::{Edge, Tc1PulseDrv, Tc2WindowDrv},
    Clock16MHz, DisplaySink, MeterConfig, MeterDrv,
};
use panic_halt as _;

type Console = arduino_hal::hal::usart::Usart0<arduino_hal::DefaultClock>;
type Meter = MeterDrv<Tc1PulseDrv, Tc2WindowDrv<Clock16MHz>, SerialDisplay>;

static METER: Mutex<RefCell<Option<Meter>>> = Mutex::new(RefCell::new(None));

/// One reading per line; there is nothing to clear on a scrolling console.
struct SerialDisplay {
    serial: Console,
}

impl DisplaySink for SerialDisplay {
    fn clear(&mut self) {}

    fn print(&mut self, text: &str) {
        let _ = ufmt::uwriteln!(&mut self.serial, "{}", text);
    }
}

#[avr_device::interrupt(atmega328p)]
fn TIMER1_OVF() {
    avr_device::interrupt::free(|cs| {
        if let Some(meter) = METER.borrow(cs).borrow_mut().as_mut() {
            meter.on_pulse_overflow();
        }
    });
}

#[avr_device::interrupt(atmega328p)]
fn TIMER2_OVF() {
    avr_device::interrupt::free(|cs| {
        if let Some(meter) = METER.borrow(cs).borrow_mut().as_mut() {
            meter.on_window_tick();
        }
    });
}

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);
    let serial = arduino_hal::default_serial!(dp, pins, 57600);

    let _signal = pins.d5.into_floating_input();

    let pulse = Tc1PulseDrv::new(dp.TC1, Edge::Falling);
    let window = Tc2WindowDrv::<Clock16MHz>::new(dp.TC2);
    let display = SerialDisplay { serial };

    let mut meter = MeterDrv::new(pulse, window, display, MeterConfig::default()).unwrap();
    meter.start();
    avr_device::interrupt::free(|cs| {
        METER.borrow(cs).replace(Some(meter));
    });

    // Idle sleep between interrupts.
    dp.CPU.smcr.write(|w| w.sm().idle().se().set_bit());
    unsafe { avr_device::interrupt::enable() };

    loop {
        avr_device::asm::sleep();
    }
}
