use crate::constants::ENCODER_RESOLUTION;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderConfig {
    /// Pulses per detent, one keypress is reported every `resolution` pulses
    pub resolution: u8,
}

impl EncoderConfig {
    /// Number of detents covered by `pulses` encoder pulses
    pub const fn detents(&self, pulses: i32) -> i32 {
        pulses / self.resolution as i32
    }
}

pub const ENCODER_CONFIG: EncoderConfig = EncoderConfig {
    resolution: ENCODER_RESOLUTION,
};

const _: () = assert!(ENCODER_CONFIG.resolution > 0, "encoder resolution must be positive");
