mod tests {
    use led_monger::encoder::{PinState, QuadratureState, Step, TransitionFlags};

    fn feed(state: &mut QuadratureState, sequence: &[u8]) -> Vec<Step> {
        sequence
            .iter()
            .filter_map(|bits| state.advance(PinState::from_bits(*bits)))
            .collect()
    }

    #[test]
    fn test_clean_clockwise_step() {
        let mut state = QuadratureState::new(PinState::IDLE);
        assert_eq!(
            feed(&mut state, &[0b01, 0b11, 0b10, 0b00]),
            vec![Step::Clockwise]
        );
        assert_eq!(state.flags(), TransitionFlags::default());
    }

    #[test]
    fn test_clean_counter_clockwise_step() {
        let mut state = QuadratureState::new(PinState::IDLE);
        assert_eq!(
            feed(&mut state, &[0b10, 0b11, 0b01, 0b00]),
            vec![Step::CounterClockwise]
        );
    }

    #[test]
    fn test_repeated_states_are_ignored() {
        let mut state = QuadratureState::new(PinState::IDLE);
        assert_eq!(
            feed(&mut state, &[0b01, 0b01, 0b11, 0b11, 0b10, 0b00, 0b00]),
            vec![Step::Clockwise]
        );
    }

    #[test]
    fn test_bounce_back_to_idle_is_rejected() {
        let mut state = QuadratureState::new(PinState::IDLE);
        assert!(feed(&mut state, &[0b01, 0b00]).is_empty());
        assert!(feed(&mut state, &[0b10, 0b00]).is_empty());
        assert!(feed(&mut state, &[0b01, 0b00, 0b01, 0b00, 0b10, 0b00]).is_empty());
    }

    #[test]
    fn test_missing_closing_edge_accepted_through_mid_step() {
        let mut state = QuadratureState::new(PinState::IDLE);
        assert_eq!(feed(&mut state, &[0b01, 0b11, 0b00]), vec![Step::Clockwise]);
        assert_eq!(
            feed(&mut state, &[0b10, 0b11, 0b00]),
            vec![Step::CounterClockwise]
        );
    }

    #[test]
    fn test_missing_first_edge_is_rejected() {
        let mut state = QuadratureState::new(PinState::IDLE);
        assert!(feed(&mut state, &[0b11, 0b10, 0b00]).is_empty());
    }

    #[test]
    fn test_flags_cleared_after_rejected_step() {
        let mut state = QuadratureState::new(PinState::IDLE);
        assert!(feed(&mut state, &[0b01, 0b00]).is_empty());
        assert_eq!(
            feed(&mut state, &[0b10, 0b11, 0b01, 0b00]),
            vec![Step::CounterClockwise]
        );
    }

    #[test]
    fn test_flags_track_edges() {
        let mut state = QuadratureState::new(PinState::IDLE);
        feed(&mut state, &[0b01, 0b11]);
        assert!(state.flags().contains(TransitionFlags::FIRST_CW));
        assert!(state.flags().contains(TransitionFlags::MID_STEP));
        assert!(!state.flags().contains(TransitionFlags::FIRST_CCW));
        assert_eq!(state.previous(), PinState::BOTH);
    }

    #[test]
    fn test_started_mid_step() {
        // Powered up between detents: the first return to idle has no
        // opening edge and must not count.
        let mut state = QuadratureState::new(PinState::BOTH);
        assert!(feed(&mut state, &[0b10, 0b00]).is_empty());
        assert_eq!(
            feed(&mut state, &[0b01, 0b11, 0b10, 0b00]),
            vec![Step::Clockwise]
        );
    }

    #[test]
    fn test_pin_state_from_levels() {
        assert_eq!(PinState::from_levels(false, false), PinState::IDLE);
        assert_eq!(PinState::from_levels(true, false), PinState::A);
        assert_eq!(PinState::from_levels(false, true), PinState::B);
        assert_eq!(PinState::from_levels(true, true), PinState::BOTH);
        assert_eq!(PinState::from_bits(0b111).bits(), 0b11);
    }
}
