mod tests {
    use myrtio_light_panel::{
        BrightnessError, LevelRange, LightPanel, LightPanelConfig, PanelError, PanelIntent,
        PermissionStatus, Rgb, ScreenBrightness, Selection, TemperatureTone,
    };

    struct MockDisplay {
        level: f32,
        permission: PermissionStatus,
        fail_writes: bool,
        writes: Vec<f32>,
    }

    impl MockDisplay {
        fn new(level: f32) -> Self {
            Self {
                level,
                permission: PermissionStatus::Granted,
                fail_writes: false,
                writes: Vec::new(),
            }
        }
    }

    impl ScreenBrightness for MockDisplay {
        fn request_permission(&mut self) -> PermissionStatus {
            self.permission
        }

        fn brightness(&mut self) -> Result<f32, BrightnessError> {
            Ok(self.level)
        }

        fn set_brightness(&mut self, level: f32) -> Result<(), BrightnessError> {
            if self.fail_writes {
                return Err(BrightnessError::Unavailable);
            }
            self.writes.push(level);
            self.level = level;
            Ok(())
        }
    }

    fn panel() -> LightPanel<MockDisplay> {
        LightPanel::new(MockDisplay::new(0.4), &LightPanelConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let panel = panel();
        assert_eq!(panel.selection(), Selection::Preset(0));
        assert_eq!(panel.selected_preset(), Some(0));
        assert_eq!(panel.color(), Rgb::new(255, 255, 255));
        assert_eq!(panel.temperature(), 5500);
        assert_eq!(panel.intensity(), 0.8);
        assert_eq!(panel.brightness(), 0.4);
        assert_eq!(panel.tone(), TemperatureTone::Neutral);
        assert!(!panel.is_fullscreen());
        assert_eq!(panel.preview_hex(), "#fff6ef");
        assert_eq!(panel.glow(), Rgb::new(204, 196, 191));
    }

    #[test]
    fn test_permission_denied_keeps_default_brightness() {
        let mut display = MockDisplay::new(0.4);
        display.permission = PermissionStatus::Denied;
        let panel = LightPanel::new(display, &LightPanelConfig::default());
        assert_eq!(panel.brightness(), 0.8);
    }

    #[test]
    fn test_configured_levels_are_clamped() {
        for (configured, expected) in [(5.0, 1.0), (-1.0, 0.1), (f32::NAN, 0.1), (0.05, 0.1)] {
            let mut display = MockDisplay::new(0.4);
            display.permission = PermissionStatus::Denied;
            let config = LightPanelConfig {
                brightness: configured,
                intensity: configured,
                ..LightPanelConfig::DEFAULT
            };
            let panel = LightPanel::new(display, &config);
            assert_eq!(panel.brightness(), expected, "brightness {configured}");
            assert_eq!(panel.intensity(), expected, "intensity {configured}");
            assert!(LevelRange::SLIDER.contains(panel.brightness()));
        }
    }

    #[test]
    fn test_unreadable_device_brightness_uses_clamped_config() {
        let config = LightPanelConfig {
            brightness: 2.5,
            ..LightPanelConfig::DEFAULT
        };
        let panel = LightPanel::new(MockDisplay::new(f32::NAN), &config);
        assert_eq!(panel.brightness(), 1.0);
    }

    #[test]
    fn test_device_brightness_below_slider_is_adopted() {
        let panel = LightPanel::new(MockDisplay::new(0.02), &LightPanelConfig::default());
        assert_eq!(panel.brightness(), 0.02);
    }

    #[test]
    fn test_invalid_device_brightness_is_ignored() {
        let panel = LightPanel::new(MockDisplay::new(3.0), &LightPanelConfig::default());
        assert_eq!(panel.brightness(), 0.8);
    }

    #[test]
    fn test_select_preset() {
        let mut panel = panel();
        panel.select_preset(4).unwrap();
        assert_eq!(panel.selection(), Selection::Preset(4));
        assert_eq!(panel.color(), Rgb::new(255, 182, 193));
        assert_eq!(panel.intensity(), 0.5);
        assert_eq!(panel.temperature(), 2000);
        assert_eq!(panel.tone(), TemperatureTone::Warm);
        assert_eq!(panel.preview_hex(), "#ffa068");
    }

    #[test]
    fn test_select_unknown_preset() {
        let mut panel = panel();
        assert_eq!(panel.select_preset(99), Err(PanelError::UnknownPreset(99)));
        assert_eq!(panel.selection(), Selection::Preset(0));
    }

    #[test]
    fn test_custom_color() {
        let mut panel = panel();
        panel.set_custom_color(Rgb::new(10, 20, 30));
        assert_eq!(panel.selection(), Selection::Custom);
        assert_eq!(panel.selected_preset(), None);
        assert_eq!(panel.color(), Rgb::new(10, 20, 30));

        panel.set_custom_hex("#DDA0DD");
        assert_eq!(panel.color(), Rgb::new(221, 160, 221));

        panel.set_custom_hex("not a color");
        assert_eq!(panel.color(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_temperature_and_intensity_are_clamped() {
        let mut panel = panel();
        panel.set_temperature(1200);
        assert_eq!(panel.temperature(), 2000);
        panel.set_temperature(12_000);
        assert_eq!(panel.temperature(), 7500);
        assert_eq!(panel.tone(), TemperatureTone::Cool);

        panel.set_intensity(0.456);
        assert_eq!(panel.intensity(), 0.46);
        panel.set_intensity(1.7);
        assert_eq!(panel.intensity(), 1.0);
        panel.set_intensity(-0.2);
        assert_eq!(panel.intensity(), 0.1);
    }

    #[test]
    fn test_intensity_floor_keeps_glow_lit() {
        let mut panel = panel();
        panel.set_intensity(0.0);
        assert_eq!(panel.intensity(), 0.1);
        panel.apply(PanelIntent::SetIntensity(f32::NAN)).unwrap();
        assert_eq!(panel.intensity(), 0.1);

        let glow = panel.glow();
        assert_ne!(glow, Rgb::new(0, 0, 0));
        assert!(glow.r > 0 && glow.g > 0 && glow.b > 0, "{glow:?} is dark");
    }

    #[test]
    fn test_set_brightness() {
        let mut panel = panel();
        panel.set_brightness(0.333).unwrap();
        assert_eq!(panel.brightness(), 0.33);
        panel.set_brightness(4.0).unwrap();
        assert_eq!(panel.brightness(), 1.0);

        panel.set_brightness(0.0).unwrap();
        assert_eq!(panel.brightness(), 0.1);

        let display = panel.into_display();
        assert_eq!(display.writes, vec![0.33, 1.0, 0.1]);
    }

    #[test]
    fn test_set_brightness_failure_keeps_level() {
        let mut display = MockDisplay::new(0.4);
        display.fail_writes = true;
        let mut panel = LightPanel::new(display, &LightPanelConfig::default());

        assert_eq!(
            panel.set_brightness(0.9),
            Err(PanelError::Brightness(BrightnessError::Unavailable))
        );
        assert_eq!(panel.brightness(), 0.4);
    }

    #[test]
    fn test_apply_intents() {
        let mut panel = panel();
        let intents = [
            PanelIntent::SelectPreset(9),
            PanelIntent::SetTemperature(6600),
            PanelIntent::SetIntensity(1.0),
            PanelIntent::SetBrightness(1.0),
            PanelIntent::ToggleFullscreen,
        ];
        for intent in intents {
            panel.apply(intent).unwrap();
        }

        assert_eq!(panel.selection(), Selection::Preset(9));
        assert_eq!(panel.temperature(), 6600);
        assert_eq!(panel.brightness(), 1.0);
        assert!(panel.is_fullscreen());
        // Neon (#FF69B4) mixed with 6600K white
        assert_eq!(panel.preview_hex(), "#ffb4d9");
        assert_eq!(panel.glow(), panel.preview_color());

        panel.apply(PanelIntent::SetCustomColor(Rgb::new(0, 0, 0))).unwrap();
        assert_eq!(panel.selection(), Selection::Custom);
        assert_eq!(
            panel.apply(PanelIntent::SelectPreset(16)),
            Err(PanelError::UnknownPreset(16))
        );

        panel.apply(PanelIntent::ToggleFullscreen).unwrap();
        assert!(!panel.is_fullscreen());
    }

    #[test]
    fn test_unknown_config_preset_falls_back_to_white() {
        let config = LightPanelConfig {
            preset: 42,
            ..LightPanelConfig::DEFAULT
        };
        let panel = LightPanel::new(MockDisplay::new(0.5), &config);
        assert_eq!(panel.selection(), Selection::Custom);
        assert_eq!(panel.color(), Rgb::new(255, 255, 255));
    }
}
