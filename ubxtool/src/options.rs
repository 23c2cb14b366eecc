//! Explicit decoder/encoder settings, passed to whoever needs them.

/// Lowest protocol version the command builders target (u-blox 5)
pub const MIN_PROTVER: u8 = 10;
/// Highest protocol version with its own command policy (u-blox 9)
pub const MAX_PROTVER: u8 = 27;

/// How chatty the decoder is on the `log` facade
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    /// Every decoded text line and RTCM3 frame is logged
    Decode,
    Info,
    /// Per-byte state machine trace
    Raw,
    Prog,
}

impl From<u8> for Verbosity {
    fn from(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Decode,
            3 => Verbosity::Info,
            4 => Verbosity::Raw,
            _ => Verbosity::Prog,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    protver: u8,
    verbosity: Verbosity,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            protver: MIN_PROTVER,
            verbosity: Verbosity::default(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the receiver protocol version, clamped to the supported range
    pub fn with_protver(mut self, protver: u8) -> Self {
        self.protver = protver.clamp(MIN_PROTVER, MAX_PROTVER);
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn protver(&self) -> u8 {
        self.protver
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Raise the protocol version after a message proved the receiver is
    /// at least that new. Never lowers it.
    pub fn observe_protver(&mut self, protver: u8) {
        let protver = protver.min(MAX_PROTVER);
        if protver > self.protver {
            self.protver = protver;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn protver_is_clamped() {
        assert_eq!(Options::new().with_protver(4).protver(), MIN_PROTVER);
        assert_eq!(Options::new().with_protver(32).protver(), MAX_PROTVER);
        assert_eq!(Options::new().with_protver(18).protver(), 18);
    }

    #[test]
    fn observe_only_raises() {
        let mut opts = Options::new().with_protver(23);
        opts.observe_protver(15);
        assert_eq!(opts.protver(), 23);
        opts.observe_protver(27);
        assert_eq!(opts.protver(), 27);
    }

    #[test]
    fn verbosity_ordering() {
        assert!(Verbosity::Raw > Verbosity::Decode);
        assert_eq!(Verbosity::from(2), Verbosity::Decode);
        assert_eq!(Verbosity::from(9), Verbosity::Prog);
    }
}
