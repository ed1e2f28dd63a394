//! Hardware-independent core library for an environmental sensor hub
//!
//! This crate contains the platform-agnostic logic for a small battery of
//! environmental sensors (real-time clock, temperature/humidity probe, light
//! sensor, barometer) polled on a cooperative round-robin schedule, plus the
//! compact binary telemetry format used to ship readings over a low-bandwidth
//! serial radio link.
//!
//! It is `#![no_std]` so it compiles on both embedded targets and desktop
//! hosts (for unit tests). Sensor drivers are injected through the traits in
//! [`drivers`]; the hub never talks to hardware directly.

#![no_std]

pub mod availability;
pub mod config;
pub mod drivers;
pub mod hub;
pub mod readings;
pub mod telemetry;

pub use availability::{Availability, Capability};
pub use config::HubConfig;
pub use drivers::{
    BarometerDriver, ClockDriver, LightDriver, Luminosity, NoDriver, ProbeDriver, RelayControl,
    SensorError,
};
pub use hub::SensorHub;
pub use readings::Readings;
