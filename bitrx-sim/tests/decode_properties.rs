//! Property tests: decoding arbitrary frames off the simulated line

use bitrx_core::config::MAX_STOP_BITS;
use bitrx_core::{
    DecodedFrame, EdgePolicy, FrameConfig, FrameDecoder, Parity, TimingMode, TimingProfile,
};
use bitrx_sim::{encode_frame, FrameBits, SimClock, SimTimer, WaveformBuilder, WaveformLine};
use proptest::prelude::*;

/// Line rate plus timer frequency with at least 100 ticks per bit
#[derive(Debug, Clone, Copy)]
struct LineRate {
    frequency: u32,
    baud_rate: u32,
}

fn line_rate() -> impl Strategy<Value = LineRate> {
    (300u32..=115_200, 100u32..=1_000)
        .prop_flat_map(|(baud_rate, ticks)| (Just(baud_rate), Just(ticks), 0..baud_rate))
        .prop_map(|(baud_rate, ticks, remainder)| LineRate {
            frequency: baud_rate * ticks + remainder,
            baud_rate,
        })
}

fn frame_config() -> impl Strategy<Value = FrameConfig> {
    (
        1u8..=32,
        prop_oneof![Just(Parity::None), Just(Parity::Even), Just(Parity::Odd)],
        1u8..=MAX_STOP_BITS as u8,
        prop_oneof![Just(EdgePolicy::SampleUntilLow), Just(EdgePolicy::IdleThenLow)],
        prop_oneof![
            Just(TimingMode::RestartPerBit),
            Just(TimingMode::AbsoluteDeadline)
        ],
    )
        .prop_map(|(data_bits, parity, stop_bits, edge, timing)| {
            FrameConfig::new(data_bits, parity, stop_bits)
                .with_edge_policy(edge)
                .with_timing_mode(timing)
        })
}

/// Decode `frames` laid back to back (after two idle bits) at the exact line rate
fn decode_all(rate: LineRate, config: FrameConfig, frames: &[FrameBits]) -> Vec<DecodedFrame> {
    let mut builder = WaveformBuilder::<256>::for_baud(rate.frequency, rate.baud_rate);
    builder.idle(2);
    for bits in frames {
        builder.bits(bits);
    }
    builder.idle(2);
    let waveform = builder.build().unwrap();

    let clock = SimClock::new();
    let timing = TimingProfile::derive(rate.frequency, rate.baud_rate, &config).unwrap();
    let mut decoder = FrameDecoder::new(
        SimTimer::new(&clock, rate.frequency),
        WaveformLine::new(&clock, &waveform),
        config,
        timing,
    )
    .unwrap();

    frames.iter().map(|_| decoder.decode()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn clean_frames_decode_exactly(
        rate in line_rate(),
        config in frame_config(),
        data in prop::collection::vec(any::<u32>(), 1..4),
    ) {
        let frames: Vec<FrameBits> = data.iter().map(|&d| encode_frame(&config, d)).collect();
        let decoded = decode_all(rate, config, &frames);

        for (frame, &sent) in decoded.iter().zip(&data) {
            prop_assert_eq!(frame.data, sent & config.data_mask());
            prop_assert!(!frame.has_errors());
            prop_assert_eq!(frame.stop_bit_errors.len(), config.stop_bits as usize);
        }
    }

    #[test]
    fn flipped_parity_bit_is_detected(
        rate in line_rate(),
        config in frame_config(),
        data in any::<u32>(),
    ) {
        prop_assume!(config.parity != Parity::None);

        let mut bits = encode_frame(&config, data);
        let parity_idx = 1 + config.data_bits as usize;
        bits[parity_idx] = !bits[parity_idx];

        let decoded = decode_all(rate, config, &[bits]);
        prop_assert_eq!(decoded[0].data, data & config.data_mask());
        prop_assert!(decoded[0].parity_error);
        prop_assert!(!decoded[0].start_bit_error);
    }

    #[test]
    fn low_stop_bit_is_flagged_at_its_index(
        rate in line_rate(),
        config in frame_config(),
        data in any::<u32>(),
        which in 0usize..MAX_STOP_BITS,
    ) {
        let which = which % config.stop_bits as usize;
        let mut bits = encode_frame(&config, data);
        let first_stop = bits.len() - config.stop_bits as usize;
        bits[first_stop + which] = false;

        let decoded = decode_all(rate, config, &[bits]);
        let frame = &decoded[0];
        prop_assert_eq!(frame.data, data & config.data_mask());
        for (idx, &err) in frame.stop_bit_errors.iter().enumerate() {
            prop_assert_eq!(err, idx == which);
        }
    }
}
