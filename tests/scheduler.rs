mod tests {
    use embassy_futures::{block_on, join::join};
    use embassy_time::Timer;
    use wirelight_composer::{
        CancelChannel, Color, CommandChannel, Duration, EngineConfig, Parameters, Registry,
        Scheduler, SchedulerError, SharedFrame,
    };

    fn config_4x3() -> EngineConfig {
        EngineConfig {
            width: 4,
            height: 3,
            ..EngineConfig::default()
        }
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn all_cells(frame: &SharedFrame<12>, color: Color) -> bool {
        frame.snapshot().iter().all(|(_, _, cell)| cell == color)
    }

    #[test]
    fn test_solid_red_fills_canvas() {
        init_logger();
        let frame = SharedFrame::<12>::new(4, 3).unwrap();
        let mut canvas = frame.back_buffer();
        let mut scheduler = Scheduler::new(Registry::builtin(), &config_4x3(), &frame).unwrap();

        let delay = scheduler.apply(Parameters::new("solid", Color::RED).unwrap(), &mut canvas);

        assert_eq!(delay, Duration::from_secs(1));
        assert_eq!(scheduler.active(), "solid");
        assert!(canvas.iter().all(|(_, _, cell)| cell == Color::RED));
        assert!(all_cells(&frame, Color::RED));
    }

    #[test]
    fn test_unknown_effect_falls_back_to_off() {
        init_logger();
        let frame = SharedFrame::<12>::new(4, 3).unwrap();
        let mut canvas = frame.back_buffer();
        let mut scheduler = Scheduler::new(Registry::builtin(), &config_4x3(), &frame).unwrap();

        scheduler.apply(Parameters::new("solid", Color::RED).unwrap(), &mut canvas);
        assert!(all_cells(&frame, Color::RED));

        let delay = scheduler.apply(Parameters::new("glorp", Color::RED).unwrap(), &mut canvas);
        assert_eq!(scheduler.active(), "off");
        assert_eq!(delay, Duration::from_secs(3600));
        assert!(all_cells(&frame, Color::BLACK));
        assert_eq!(scheduler.paint_failures(), 0);
    }

    #[test]
    fn test_unknown_default_is_rejected() {
        let frame = SharedFrame::<12>::new(4, 3).unwrap();
        let config = EngineConfig {
            default_effect: "sparkle",
            ..config_4x3()
        };
        assert!(matches!(
            Scheduler::new(Registry::builtin(), &config, &frame),
            Err(SchedulerError::UnknownDefault)
        ));
    }

    #[test]
    fn test_second_scheduler_on_frame_is_rejected() {
        let frame = SharedFrame::<12>::new(4, 3).unwrap();
        let mut canvas = frame.back_buffer();
        let mut first = Scheduler::new(Registry::builtin(), &config_4x3(), &frame).unwrap();
        assert!(matches!(
            Scheduler::new(Registry::builtin(), &config_4x3(), &frame),
            Err(SchedulerError::FrameBusy)
        ));

        first.apply(Parameters::new("solid", Color::RED).unwrap(), &mut canvas);
        drop(first);

        let mut second = Scheduler::new(Registry::builtin(), &config_4x3(), &frame).unwrap();
        second.apply(Parameters::new("solid", Color::BLUE).unwrap(), &mut canvas);
        assert!(all_cells(&frame, Color::BLUE));
    }

    #[test]
    fn test_rejected_default_leaves_frame_free() {
        let frame = SharedFrame::<12>::new(4, 3).unwrap();
        let config = EngineConfig {
            default_effect: "sparkle",
            ..config_4x3()
        };
        assert!(Scheduler::new(Registry::builtin(), &config, &frame).is_err());
        assert!(!frame.has_writer());
        assert!(Scheduler::new(Registry::builtin(), &config_4x3(), &frame).is_ok());
    }

    #[test]
    fn test_switching_repaints_immediately() {
        let frame = SharedFrame::<12>::new(4, 3).unwrap();
        let mut canvas = frame.back_buffer();
        let mut scheduler = Scheduler::new(Registry::builtin(), &config_4x3(), &frame).unwrap();

        scheduler.tick(&mut canvas);
        assert_eq!(scheduler.paints(), 1);

        // off waits an hour, the switch must not
        let delay = scheduler.apply(Parameters::new("rainbow", Color::RED).unwrap(), &mut canvas);
        assert_eq!(scheduler.paints(), 2);
        assert_eq!(delay, Duration::from_millis(4));
        assert!(!all_cells(&frame, Color::BLACK));
    }

    #[test]
    fn test_angle_carries_forward() {
        let frame = SharedFrame::<12>::new(4, 3).unwrap();
        let mut canvas = frame.back_buffer();
        let mut scheduler = Scheduler::new(Registry::builtin(), &config_4x3(), &frame).unwrap();

        let params = Parameters::new("rainbow", Color::RED).unwrap().with_angle(90.0);
        scheduler.apply(params, &mut canvas);
        assert_eq!(scheduler.parameters().angle(), Some(90.0));

        scheduler.apply(Parameters::new("rainbow", Color::BLUE).unwrap(), &mut canvas);
        assert_eq!(scheduler.parameters().angle(), Some(90.0));
        assert_eq!(scheduler.parameters().color, Color::BLUE);

        scheduler.apply(Parameters::new("wave", Color::BLUE).unwrap(), &mut canvas);
        assert_eq!(scheduler.parameters().angle(), Some(0.0));
    }

    #[test]
    fn test_tick_animates_with_last_parameters() {
        let frame = SharedFrame::<12>::new(4, 3).unwrap();
        let mut canvas = frame.back_buffer();
        let mut scheduler = Scheduler::new(Registry::builtin(), &config_4x3(), &frame).unwrap();

        let params = Parameters::new("wave", Color::rgb(0.3, 0.3, 0.8))
            .unwrap()
            .with_adjust(1.0);
        scheduler.apply(params, &mut canvas);
        let before = frame.snapshot();
        scheduler.tick(&mut canvas);
        assert_ne!(frame.snapshot(), before);
        assert_eq!(scheduler.active(), "wave");
    }

    #[test]
    fn test_failed_paint_keeps_previous_frame() {
        init_logger();
        let frame = SharedFrame::<12>::new(4, 3).unwrap();
        let mut canvas = frame.back_buffer();
        let mut scheduler = Scheduler::new(Registry::builtin(), &config_4x3(), &frame).unwrap();

        scheduler.apply(Parameters::new("solid", Color::GREEN).unwrap(), &mut canvas);
        let broken = Parameters::new("solid", Color::rgb(f32::NAN, 0.0, 0.0)).unwrap();
        let delay = scheduler.apply(broken, &mut canvas);

        assert_eq!(delay, Duration::from_secs(1));
        assert_eq!(scheduler.paint_failures(), 1);
        assert!(all_cells(&frame, Color::GREEN));
        assert!(canvas.iter().all(|(_, _, cell)| cell == Color::GREEN));

        // the loop keeps going with the next command
        scheduler.apply(Parameters::new("solid", Color::BLUE).unwrap(), &mut canvas);
        assert!(all_cells(&frame, Color::BLUE));
    }

    #[test]
    fn test_run_handles_commands_until_cancelled() {
        init_logger();
        let frame = SharedFrame::<12>::new(4, 3).unwrap();
        let mut canvas = frame.back_buffer();
        let mut scheduler = Scheduler::new(Registry::builtin(), &config_4x3(), &frame).unwrap();
        let commands = CommandChannel::<4>::new();
        let cancel = CancelChannel::new();

        let control = async {
            commands
                .send(Parameters::new("solid", Color::RED).unwrap())
                .await;
            Timer::after(Duration::from_millis(50)).await;
            cancel.send(()).await;
        };
        let (exit, ()) = block_on(join(
            scheduler.run(&mut canvas, commands.receiver(), cancel.receiver()),
            control,
        ));

        assert_eq!(exit.paints, 2);
        assert_eq!(exit.paint_failures, 0);
        assert!(all_cells(&frame, Color::RED));
    }

    #[test]
    fn test_run_repaints_on_timer() {
        let frame = SharedFrame::<12>::new(4, 3).unwrap();
        let mut canvas = frame.back_buffer();
        let config = EngineConfig {
            default_effect: "rainbow",
            ..config_4x3()
        };
        let mut scheduler = Scheduler::new(Registry::builtin(), &config, &frame).unwrap();
        let commands = CommandChannel::<4>::new();
        let cancel = CancelChannel::new();

        let control = async {
            Timer::after(Duration::from_millis(60)).await;
            cancel.send(()).await;
        };
        let (exit, ()) = block_on(join(
            scheduler.run(&mut canvas, commands.receiver(), cancel.receiver()),
            control,
        ));

        assert!(exit.paints > 2, "only {} paints", exit.paints);
    }
}
