use crate::{
    constants::{
        DEFAULT_IDLE_POLL_DELAY_MS, DEFAULT_INITIAL_WAIT_RETRIES, DEFAULT_READ_LOOP_LIMIT,
        DEFAULT_START_SEARCH_LIMIT, DEFAULT_UPDATE_RATE, WAIT_MS_BASE, WAIT_MS_PER_RATE_STEP,
    },
    error::ConfigError,
};

/// Wait and retry ceilings for one acquisition.
///
/// These ceilings are the only timeout mechanism: an acquisition always
/// returns once the longest of them has run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AcquirerConfig {
    /// Seconds between two sentences emitted by the receiver
    pub update_rate: u8,
    /// Number of waits for the first byte to show up
    pub initial_wait_retries: u32,
    /// Reads spent looking for `$` before giving up on framing
    pub start_search_limit: u32,
    /// Iterations of the main read loop
    pub read_loop_limit: u32,
    /// Sleep between polls while a sentence is partially received
    pub idle_poll_delay_ms: u32,
}

impl Default for AcquirerConfig {
    fn default() -> Self {
        Self {
            update_rate: DEFAULT_UPDATE_RATE,
            initial_wait_retries: DEFAULT_INITIAL_WAIT_RETRIES,
            start_search_limit: DEFAULT_START_SEARCH_LIMIT,
            read_loop_limit: DEFAULT_READ_LOOP_LIMIT,
            idle_poll_delay_ms: DEFAULT_IDLE_POLL_DELAY_MS,
        }
    }
}

impl AcquirerConfig {
    pub fn with_update_rate(mut self, update_rate: u8) -> Self {
        self.update_rate = update_rate;
        self
    }

    pub fn with_initial_wait_retries(mut self, retries: u32) -> Self {
        self.initial_wait_retries = retries;
        self
    }

    pub fn with_start_search_limit(mut self, limit: u32) -> Self {
        self.start_search_limit = limit;
        self
    }

    pub fn with_read_loop_limit(mut self, limit: u32) -> Self {
        self.read_loop_limit = limit;
        self
    }

    pub fn with_idle_poll_delay_ms(mut self, delay_ms: u32) -> Self {
        self.idle_poll_delay_ms = delay_ms;
        self
    }

    /// Delay between two polls of the initial wait, in milliseconds
    pub fn wait_interval_ms(&self) -> u32 {
        u32::from(self.update_rate) * WAIT_MS_PER_RATE_STEP + WAIT_MS_BASE
    }

    /// Wait counter value the framing-failure drain sleeps up to
    pub(crate) fn drain_target(&self) -> u32 {
        self.initial_wait_retries.saturating_sub(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_search_limit == 0 {
            return Err(ConfigError::ZeroLimit("start_search_limit"));
        }
        if self.read_loop_limit == 0 {
            return Err(ConfigError::ZeroLimit("read_loop_limit"));
        }
        Ok(())
    }
}
