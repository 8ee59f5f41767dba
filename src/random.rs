//! Random value generation for test fixtures
//!
//! Values are integer-like strings. Consecutive draws from one generator
//! are guaranteed to differ: the last value is cached and a colliding draw
//! is retried after a one-second pause.

use rand::Rng;
use std::fs::File;
use std::io::Read;
use std::process;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Entropy sources, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropySource {
    /// Ecosystem RNG, mixed with the process id
    Native,
    /// 4 bytes from /dev/urandom; falls through to Clock on read errors
    Device,
    /// Time-of-day microseconds times the process id. Last resort
    Clock,
}

impl EntropySource {
    /// Best source available on this build.
    pub fn detect() -> Self {
        EntropySource::Native
    }
}

/// Generator with an explicit last-value cache.
#[derive(Debug)]
pub struct UniqueRandom {
    source: EntropySource,
    last: Option<String>,
}

impl UniqueRandom {
    pub fn new() -> Self {
        Self::with_source(EntropySource::detect())
    }

    pub fn with_source(source: EntropySource) -> Self {
        UniqueRandom { source, last: None }
    }

    pub fn source(&self) -> EntropySource {
        self.source
    }

    /// Draw the next value, guaranteed to differ from the previous one.
    ///
    /// Pauses one second between retries when a draw collides with the
    /// cached value.
    pub fn next_value(&mut self) -> String {
        loop {
            let value = self.draw();
            if self.last.as_deref() == Some(value.as_str()) {
                thread::sleep(Duration::from_secs(1));
                continue;
            }
            self.last = Some(value.clone());
            return value;
        }
    }

    fn draw(&self) -> String {
        match self.source {
            EntropySource::Native => {
                let word: u32 = rand::thread_rng().gen();
                format!("{}{}", word, process::id())
            }
            EntropySource::Device => device_value().unwrap_or_else(clock_value),
            EntropySource::Clock => clock_value(),
        }
    }
}

impl Default for UniqueRandom {
    fn default() -> Self {
        Self::new()
    }
}

fn device_value() -> Option<String> {
    let mut buf = [0u8; 4];
    let mut dev = File::open("/dev/urandom").ok()?;
    dev.read_exact(&mut buf).ok()?;
    Some(u32::from_ne_bytes(buf).to_string())
}

fn clock_value() -> String {
    let micros = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(1);
    micros.wrapping_mul(u64::from(process::id())).to_string()
}
