#![no_main]
#![no_std]

use pulse_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0])]
mod app {
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use pulse_control::{Monitor, TICK_MS};
    use pulse_firmware::system::{Sensor, Serial, StatusLed, System};

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        monitor: Monitor,
        sensor: Sensor,
        serial: Serial,
        status_led: StatusLed,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;
        let sensor = system.sensor;
        let serial = system.serial;
        let status_led = system.status_led;

        let monitor = Monitor::default();

        tick::spawn().unwrap();

        (
            Shared {},
            Local {
                monitor,
                sensor,
                serial,
                status_led,
            },
            init::Monotonics(mono),
        )
    }

    #[task(local = [monitor, sensor, serial, status_led])]
    fn tick(cx: tick::Context) {
        // Scheduling first keeps the cadence independent of the time spent
        // on sampling and transmission.
        tick::spawn_after(u64::from(TICK_MS).millis()).unwrap();

        let monitor = cx.local.monitor;
        monitor.step(cx.local.sensor, cx.local.status_led, cx.local.serial);
    }
}
