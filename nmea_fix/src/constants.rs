pub const NMEA_SYNC_CHAR: u8 = 0x24; // '$'
pub const NMEA_END_CHAR_1: u8 = 0x0d; // '\r' (<CR>)
pub const NMEA_END_CHAR_2: u8 = 0x0a; // '\n' (<LF>)
pub const NMEA_CHECKSUM_DELIMITER: u8 = 0x2a; // '*'
pub const NMEA_FIELD_SEPARATOR: u8 = 0x2c; // ','

/// `*HH<CR><LF>`, counted back from the end of a terminated sentence
pub(crate) const NMEA_CHECKSUM_TRAILER_LEN: usize = 5;
pub(crate) const NMEA_CHECKSUM_HI_OFFSET: usize = 4;
pub(crate) const NMEA_CHECKSUM_LO_OFFSET: usize = 3;

/// Number of separators preceding the GGA fix-quality field
pub(crate) const GGA_FIX_FIELD_INDEX: usize = 6;

pub const DEFAULT_SENTENCE_CAPACITY: usize = 100;
/// sync (1) + talker (2) + msg type (3) + end chars (2)
pub const MIN_SENTENCE_CAPACITY: usize = 8;

pub const DEFAULT_UPDATE_RATE: u8 = 1;
pub const DEFAULT_INITIAL_WAIT_RETRIES: u32 = 10;
pub const DEFAULT_START_SEARCH_LIMIT: u32 = 200;
pub const DEFAULT_READ_LOOP_LIMIT: u32 = 500;
pub const DEFAULT_IDLE_POLL_DELAY_MS: u32 = 2;

// wait interval = update_rate * WAIT_MS_PER_RATE_STEP + WAIT_MS_BASE
pub(crate) const WAIT_MS_PER_RATE_STEP: u32 = 100;
pub(crate) const WAIT_MS_BASE: u32 = 10;
