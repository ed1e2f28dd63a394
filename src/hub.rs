//! The sensor hub: availability probing at startup plus the cooperative
//! round-robin refresh schedule.
//!
//! The hub is driven by a host control loop that calls [`SensorHub::service`]
//! once per iteration. A call does at most one unit of work (one sensor
//! transaction), so worst-case latency per loop iteration stays bounded no
//! matter how many families are fitted. Telemetry encoding runs on a
//! separate, lower-frequency trigger via [`SensorHub::encode_all`].

use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};

use crate::availability::{Availability, Capability};
use crate::config::HubConfig;
use crate::drivers::{BarometerDriver, ClockDriver, LightDriver, ProbeDriver, RelayControl, SensorError};
use crate::readings::{Readings, dew_point};
use crate::telemetry::{self, TelemetryBuffer};

/// Scheduler tick period. `service` is a no-op when called again inside the
/// same period.
pub const TICK_PERIOD_MS: u64 = 1000;

/// Cold-start settle time for the combined probe, applied once at
/// initialization before its first read.
const PROBE_SETTLE_MS: u32 = 400;

const PHASE_PERIOD: u8 = 8;

/// One unit of round-robin work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Time,
    ClockTemperature,
    ProbeTemperature,
    Light,
    ProbeHumidity,
    DewPoint,
    Barometer,
    Idle,
}

/// The fixed phase table. One entry per phase; a family whose availability
/// flag is absent turns its phase into an idle tick. Phase 7 is idle by
/// design, leaving slack in every cycle.
const SCHEDULE: [Task; PHASE_PERIOD as usize] = [
    Task::Time,
    Task::ClockTemperature,
    Task::ProbeTemperature,
    Task::Light,
    Task::ProbeHumidity,
    Task::DewPoint,
    Task::Barometer,
    Task::Idle,
];

/// Owner of the sensor drivers, the availability latches and the last-known
/// readings.
///
/// Drivers are injected at construction; disabled families can use
/// [`crate::drivers::NoDriver`] for their slot. All reading mutation happens
/// inside [`service`](Self::service) calls, on the single control thread.
pub struct SensorHub<C, P, L, B, D> {
    config: HubConfig,
    device_id: u8,
    availability: Availability,
    readings: Readings,
    phase: u8,
    next_due: u64,
    clock: C,
    probe: P,
    light: L,
    barometer: B,
    delay: D,
}

impl<C, P, L, B, D> SensorHub<C, P, L, B, D>
where
    C: ClockDriver,
    P: ProbeDriver,
    L: LightDriver,
    B: BarometerDriver,
    D: DelayNs,
{
    pub fn new(config: HubConfig, clock: C, probe: P, light: L, barometer: B, delay: D) -> Self {
        Self {
            config,
            device_id: 0,
            availability: Availability::new(),
            readings: Readings::new(),
            phase: 0,
            next_due: 0,
            clock,
            probe,
            light,
            barometer,
            delay,
        }
    }

    /// Probe every enabled sensor family once and derive the availability
    /// set. An unresponsive device leaves its capabilities ungranted and the
    /// hub proceeds degraded; nothing here fails or panics. A hub with zero
    /// working sensors is still a valid, configured hub.
    pub fn initialize(&mut self, device_id: u8) {
        self.device_id = device_id;

        if self.config.enable_clock {
            match self.clock.sync() {
                Ok(()) => {
                    self.availability.grant(Capability::ClockSynced);
                    self.availability.grant(Capability::TemperatureFromClock);
                    if let Ok(now) = self.clock.now() {
                        self.readings.timestamp = now;
                    }
                }
                // Reported once; no automatic retry, time-dependent
                // capabilities stay absent for the rest of the run.
                Err(err) => warn!("clock sync failed, time disabled for this run: {}", err),
            }
        }

        if self.config.enable_light && self.light.begin().is_ok() {
            match self.light.read_luminosity() {
                Ok(_) => self.availability.grant(Capability::LightSensorReady),
                Err(err) => debug!("light sensor probe read failed: {}", err),
            }
        }

        if self.config.enable_probe && self.probe.begin().is_ok() {
            self.delay.delay_ms(PROBE_SETTLE_MS);
            if let Some(celsius) = valid(self.probe.read_temperature()) {
                self.availability.grant(Capability::TemperatureFromProbe);
                self.readings.probe_temperature = celsius;
            }
            if let Some(percent) = valid(self.probe.read_humidity()) {
                self.readings.probe_humidity = percent;
                // Humidity is only trusted alongside a working temperature
                // channel; a half-alive probe stays humidity-unavailable.
                if self.availability.has(Capability::TemperatureFromProbe) {
                    self.availability.grant(Capability::HumidityFromProbe);
                }
            }
        }

        if self.config.enable_barometer && self.barometer.begin().is_ok() {
            if let Some(celsius) = valid(self.barometer.read_temperature()) {
                self.availability.grant(Capability::BarometerReady);
                self.availability.grant(Capability::TemperatureFromBarometer);
                self.readings.barometer_temperature = celsius;
            }
        }

        self.availability.grant(Capability::Configured);
        info!(
            "sensor hub {} initialized (clock={} probe={}/{} light={} barometer={})",
            self.device_id,
            self.availability.has(Capability::ClockSynced),
            self.availability.has(Capability::TemperatureFromProbe),
            self.availability.has(Capability::HumidityFromProbe),
            self.availability.has(Capability::LightSensorReady),
            self.availability.has(Capability::BarometerReady),
        );
    }

    /// True once [`initialize`](Self::initialize) has run, regardless of how
    /// many individual sensors came up.
    pub fn is_initialized(&self) -> bool {
        self.availability.has(Capability::Configured)
    }

    pub fn device_id(&self) -> u8 {
        self.device_id
    }

    /// One scheduler tick. Non-blocking: returns immediately when called
    /// before the next due time, otherwise dispatches at most one family
    /// refresh and advances the phase counter.
    ///
    /// The due time advances by the fixed [`TICK_PERIOD_MS`] whether or not
    /// any work was dispatched, so scheduling never drifts backward.
    pub fn service(&mut self, now_millis: u64) {
        if !self.is_initialized() {
            return;
        }
        if now_millis < self.next_due {
            return;
        }

        let task = SCHEDULE[(self.phase % PHASE_PERIOD) as usize];
        self.dispatch(task);

        self.next_due += TICK_PERIOD_MS;
        self.phase = self.phase.wrapping_add(1);
    }

    /// [`service`](Self::service), then push the current readings to the
    /// actuator collaborator if it reports itself ready. One-way, no
    /// acknowledgment, no retry; each reading is gated on its own
    /// availability flag.
    pub fn service_with_relays<R: RelayControl>(&mut self, now_millis: u64, relays: &mut R) {
        self.service(now_millis);

        if !relays.is_ready() {
            return;
        }
        if self.availability.has(Capability::TemperatureFromProbe) {
            relays.set_temperature(self.readings.probe_temperature);
        }
        if self.availability.has(Capability::HumidityFromProbe) {
            relays.set_humidity(self.readings.probe_humidity);
        }
        if self.availability.has(Capability::LightSensorReady) {
            relays.set_light(self.readings.lux);
        }
    }

    /// Serialize all currently valid readings into `buffer`. See
    /// [`telemetry::encode_all`]. Returns 0 when radio encoding is disabled
    /// or the hub is not yet initialized.
    pub fn encode_all(&self, buffer: &mut impl TelemetryBuffer) -> u8 {
        if !self.config.enable_radio || !self.is_initialized() {
            return 0;
        }
        telemetry::encode_all(&self.availability, &self.readings, buffer)
    }

    fn dispatch(&mut self, task: Task) {
        match task {
            Task::Time => {
                if self.availability.has(Capability::ClockSynced) {
                    match self.clock.now() {
                        Ok(now) => self.readings.timestamp = now,
                        Err(err) => debug!("time refresh failed: {}", err),
                    }
                }
            }
            Task::ClockTemperature => {
                if self.availability.has(Capability::TemperatureFromClock) {
                    self.readings.clock_temperature =
                        valid(self.clock.read_temperature()).unwrap_or(f32::NAN);
                }
            }
            Task::ProbeTemperature => {
                if self.availability.has(Capability::TemperatureFromProbe) {
                    // Sentinel writes through: a failed read degrades the
                    // value until the next turn, never the availability.
                    self.readings.probe_temperature =
                        valid(self.probe.read_temperature()).unwrap_or(f32::NAN);
                }
            }
            Task::Light => {
                if self.availability.has(Capability::LightSensorReady) {
                    // Failed reads keep the previous channels.
                    if let Ok(luminosity) = self.light.read_luminosity() {
                        self.readings.lux = luminosity.lux;
                        self.readings.infrared = luminosity.infrared;
                        self.readings.full_spectrum = luminosity.full;
                        self.readings.visible =
                            luminosity.full.saturating_sub(luminosity.infrared);
                    }
                }
            }
            Task::ProbeHumidity => {
                if self.availability.has(Capability::HumidityFromProbe) {
                    // The stale value outlives a failed humidity read.
                    if let Some(percent) = valid(self.probe.read_humidity()) {
                        self.readings.probe_humidity = percent;
                    }
                }
            }
            Task::DewPoint => {
                if self.config.enable_dew_point
                    && self.availability.has(Capability::TemperatureFromProbe)
                    && self.availability.has(Capability::HumidityFromProbe)
                    && !self.readings.probe_temperature.is_nan()
                    && !self.readings.probe_humidity.is_nan()
                {
                    self.readings.dew_point =
                        dew_point(self.readings.probe_temperature, self.readings.probe_humidity);
                }
            }
            Task::Barometer => {
                if self.availability.has(Capability::BarometerReady) {
                    self.readings.pressure = match valid(self.barometer.read_pressure()) {
                        Some(pascal) => pascal as i64,
                        None => 0,
                    };
                    if self.availability.has(Capability::TemperatureFromBarometer) {
                        self.readings.barometer_temperature =
                            valid(self.barometer.read_temperature()).unwrap_or(f32::NAN);
                    }
                }
            }
            Task::Idle => {}
        }
    }

    pub fn readings(&self) -> &Readings {
        &self.readings
    }

    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    /// Wall-clock time in unix seconds, 0 until the first sync.
    pub fn time(&self) -> u32 {
        self.readings.timestamp
    }

    /// Probe temperature in °C, NaN until the first valid read.
    pub fn temperature(&self) -> f32 {
        self.readings.probe_temperature
    }

    /// Probe humidity in %, NaN until the first valid read.
    pub fn humidity(&self) -> f32 {
        self.readings.probe_humidity
    }

    /// Pressure in pascals, 0 until the first valid read.
    pub fn pressure(&self) -> i64 {
        self.readings.pressure
    }

    pub fn lux(&self) -> u16 {
        self.readings.lux
    }

    pub fn infrared(&self) -> u16 {
        self.readings.infrared
    }

    pub fn visible(&self) -> u16 {
        self.readings.visible
    }

    pub fn full_spectrum(&self) -> u16 {
        self.readings.full_spectrum
    }
}

/// A reading is usable when the driver succeeded and did not hand back the
/// NaN sentinel some adapters forward from their hardware.
fn valid(reading: Result<f32, SensorError>) -> Option<f32> {
    match reading {
        Ok(value) if !value.is_nan() => Some(value),
        _ => None,
    }
}
