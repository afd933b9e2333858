mod tests {
    use led_monger::{AnalogControl, AnalogInput, Error, HysteresisSampler, Sample, SamplerConfig};

    fn sampler() -> HysteresisSampler {
        HysteresisSampler::new(SamplerConfig::default()).unwrap()
    }

    #[test]
    fn test_potentiometer_sequence() {
        let mut sampler = sampler();
        assert_eq!(sampler.current_bin(), None);
        assert_eq!(sampler.sample(500), Sample::Changed(500 >> 5));
        assert_eq!(sampler.sample(503), Sample::Unchanged);
        assert_eq!(sampler.sample(497), Sample::Unchanged);
        assert_eq!(sampler.sample(560), Sample::Changed(560 >> 5));
        assert_eq!(sampler.current_bin(), Some(17));
    }

    #[test]
    fn test_readings_inside_band_never_change() {
        let mut sampler = sampler();
        // Bin 15 covers 480..=511, margin 8 widens it to 472..=519.
        assert_eq!(sampler.sample(495), Sample::Changed(15));
        for reading in (472..=519).chain((472..=519).rev()) {
            assert_eq!(sampler.sample(reading), Sample::Unchanged, "reading {reading}");
        }
        assert_eq!(sampler.current_bin(), Some(15));
    }

    #[test]
    fn test_crossing_margin_changes_once_and_sticks() {
        let mut sampler = sampler();
        sampler.sample(495);
        assert_eq!(sampler.sample(520), Sample::Changed(16));
        assert_eq!(sampler.sample(520), Sample::Unchanged);

        // Bin 16 covers 512..=543; dropping back to 504 stays inside its band.
        assert_eq!(sampler.sample(504), Sample::Unchanged);
        assert_eq!(sampler.current_bin(), Some(16));
        assert_eq!(sampler.sample(503), Sample::Changed(15));
    }

    #[test]
    fn test_downward_crossing() {
        let mut sampler = sampler();
        sampler.sample(495);
        assert_eq!(sampler.sample(472), Sample::Unchanged);
        assert_eq!(sampler.sample(471), Sample::Changed(14));
    }

    #[test]
    fn test_out_of_range_reading_is_clamped() {
        let mut sampler = sampler();
        assert_eq!(sampler.sample(u16::MAX), Sample::Changed(31));
        assert_eq!(sampler.level(), Some(31 << 5));
    }

    #[test]
    fn test_sample_changed() {
        assert_eq!(Sample::Changed(3).changed(), Some(3));
        assert_eq!(Sample::Unchanged.changed(), None);
    }

    #[test]
    fn test_invalid_config() {
        for (adc_bits, log_bin_size) in [(10, 11), (17, 5), (10, 0)] {
            assert_eq!(
                HysteresisSampler::new(SamplerConfig::new(adc_bits, log_bin_size, 8)).err(),
                Some(Error::InvalidSamplerConfig {
                    adc_bits,
                    log_bin_size
                })
            );
        }
    }

    #[test]
    fn test_config_geometry() {
        let config = SamplerConfig::default();
        assert_eq!(config.shift(), 5);
        assert_eq!(config.bin_width(), 32);
        assert_eq!(config.bin_count(), 32);
        assert_eq!(config.max_reading(), 1023);
    }

    struct Replay {
        readings: Vec<u16>,
    }

    impl AnalogInput for Replay {
        fn read(&mut self) -> u16 {
            self.readings.remove(0)
        }
    }

    #[test]
    fn test_filtered_control_spans_full_range() {
        let input = Replay {
            readings: vec![0, 1023, 1020, 500],
        };
        let mut control = AnalogControl::filtered(input, SamplerConfig::default()).unwrap();
        assert!(control.is_filtered());
        assert_eq!(control.sample(), 0);
        assert_eq!(control.sample(), 1023);
        assert_eq!(control.sample(), 1023);
        assert_eq!(control.sample(), 15 * 1023 / 31);
        assert_eq!(control.level(), 15 * 1023 / 31);
    }

    #[test]
    fn test_raw_control_passes_readings_through() {
        let input = Replay {
            readings: vec![7, 503, 2000],
        };
        let mut control = AnalogControl::raw(input, SamplerConfig::default()).unwrap();
        assert!(!control.is_filtered());
        assert_eq!(control.sample(), 7);
        assert_eq!(control.sample(), 503);
        assert_eq!(control.sample(), 1023);
        assert_eq!(control.max_level(), 1023);
    }
}
