mod tests {
    use led_monger::renderer::brightness8;
    use led_monger::{
        ChannelInfo, ChannelOutput, ChannelRenderer, Error, Levels, PatternId, PatternSlot, Rgb,
    };

    #[derive(Default)]
    struct RecordingOutput {
        writes: Vec<(usize, Vec<Rgb>, u8)>,
    }

    impl ChannelOutput for RecordingOutput {
        fn write_channel(&mut self, channel: usize, colors: &[Rgb], brightness: u8) {
            self.writes.push((channel, colors.to_vec(), brightness));
        }
    }

    const LAYOUT: [usize; 3] = [3, 8, 5];

    #[test]
    fn test_layout_validation() {
        assert_eq!(
            ChannelRenderer::<8, 3>::new([3, 9, 5]).err(),
            Some(Error::ChannelTooLong {
                channel: 1,
                pixels: 9,
                capacity: 8
            })
        );
        assert!(matches!(
            ChannelRenderer::<8, 0>::new([]),
            Err(Error::NoChannels)
        ));
        assert!(ChannelRenderer::<8, 3>::new(LAYOUT).is_ok());
    }

    #[test]
    fn test_brightness8() {
        assert_eq!(brightness8(0), 0);
        assert_eq!(brightness8(512), 128);
        assert_eq!(brightness8(1023), 255);
        assert_eq!(brightness8(u16::MAX), 255);
    }

    #[test]
    fn test_channels_rendered_in_ascending_order() {
        let mut renderer = ChannelRenderer::<8, 3>::new(LAYOUT).unwrap();
        let mut output = RecordingOutput::default();
        let mut pattern = PatternId::Rainbow.to_slot();
        let levels = Levels {
            brightness: 1023,
            speed: 0,
        };

        renderer.render(&mut pattern, levels, &mut output);

        let order: Vec<(usize, usize, u8)> = output
            .writes
            .iter()
            .map(|(channel, colors, brightness)| (*channel, colors.len(), *brightness))
            .collect();
        assert_eq!(order, vec![(0, 3, 255), (1, 8, 255), (2, 5, 255)]);
        assert_eq!(renderer.channels(), &LAYOUT);
        assert_eq!(renderer.frame().len(), 8);
    }

    /// Render every channel with its own pattern instance and buffer, as if
    /// each channel were the first and only one.
    fn render_independently(id: PatternId, ticks: &[Levels]) -> Vec<Vec<Rgb>> {
        let mut slots: Vec<PatternSlot> = LAYOUT.iter().map(|_| id.to_slot()).collect();
        let mut transmitted = Vec::new();
        for levels in ticks {
            for (slot, &pixels) in slots.iter_mut().zip(LAYOUT.iter()) {
                let mut frame = vec![Rgb::default(); pixels];
                slot.update_channel(&mut frame, ChannelInfo { index: 0, pixels }, *levels);
                transmitted.push(frame);
            }
        }
        transmitted
    }

    fn render_shared(id: PatternId, ticks: &[Levels]) -> Vec<Vec<Rgb>> {
        let mut renderer = ChannelRenderer::<8, 3>::new(LAYOUT).unwrap();
        let mut output = RecordingOutput::default();
        let mut slot = id.to_slot();
        for levels in ticks {
            renderer.render(&mut slot, *levels, &mut output);
        }
        output.writes.into_iter().map(|(_, colors, _)| colors).collect()
    }

    #[test]
    fn test_shared_buffer_matches_independent_rendering() {
        let ticks = [
            Levels {
                brightness: 100,
                speed: 0,
            },
            Levels {
                brightness: 600,
                speed: 340,
            },
            Levels {
                brightness: 1023,
                speed: 1023,
            },
            Levels {
                brightness: 0,
                speed: 700,
            },
        ];

        for id in PatternId::ALL {
            assert_eq!(
                render_shared(id, &ticks),
                render_independently(id, &ticks),
                "pattern {}",
                id.as_str()
            );
        }
    }
}
