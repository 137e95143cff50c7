//! Property tests for timing derivation and parity rules

use bitrx_core::config::MAX_STOP_BITS;
use bitrx_core::{ConfigError, FrameConfig, Parity, TimingProfile};
use proptest::prelude::*;

fn parity() -> impl Strategy<Value = Parity> {
    prop_oneof![Just(Parity::None), Just(Parity::Even), Just(Parity::Odd)]
}

fn frame_config() -> impl Strategy<Value = FrameConfig> {
    (1u8..=32, parity(), 1u8..=MAX_STOP_BITS as u8)
        .prop_map(|(data_bits, parity, stop_bits)| FrameConfig::new(data_bits, parity, stop_bits))
}

proptest! {
    #[test]
    fn derivation_is_deterministic(
        frequency in 1u32..=u32::MAX,
        baud_rate in 1u32..=4_000_000,
        frame in frame_config(),
    ) {
        let first = TimingProfile::derive(frequency, baud_rate, &frame);
        let second = TimingProfile::derive(frequency, baud_rate, &frame);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn derivation_truncates(
        frequency in 1u32..=u32::MAX,
        baud_rate in 1u32..=4_000_000,
        frame in frame_config(),
    ) {
        match TimingProfile::derive(frequency, baud_rate, &frame) {
            Ok(profile) => {
                prop_assert_eq!(profile.ticks_per_bit, frequency / baud_rate);
                prop_assert_eq!(profile.ticks_per_half_bit, profile.ticks_per_bit / 2);
                prop_assert!(profile.ticks_per_half_bit >= 1);
                prop_assert_eq!(profile.total_bits, frame.total_bits());
            }
            Err(err) => {
                prop_assert!(frequency / baud_rate < 2);
                prop_assert_eq!(err, ConfigError::BaudRateTooHigh { frequency, baud_rate });
            }
        }
    }

    #[test]
    fn deadlines_are_evenly_spaced(
        frequency in 20_000u32..=200_000_000,
        baud_rate in 300u32..=10_000,
        index in 0u32..38,
    ) {
        let profile = TimingProfile::derive(frequency, baud_rate, &FrameConfig::default()).unwrap();
        prop_assert_eq!(
            profile.deadline(index + 1) - profile.deadline(index),
            profile.ticks_per_bit
        );
    }

    #[test]
    fn parity_bit_completes_count(data in any::<u32>(), data_bits in 1u8..=32) {
        let frame = FrameConfig::new(data_bits, Parity::None, 1);
        let ones = (data & frame.data_mask()).count_ones();

        let even = Parity::Even.expected_bit(ones).unwrap();
        let odd = Parity::Odd.expected_bit(ones).unwrap();

        prop_assert_eq!((ones + even as u32) % 2, 0);
        prop_assert_eq!((ones + odd as u32) % 2, 1);
    }
}
