mod tests {
    use wirelight_composer::color::{
        Color, ColorSpace, Hcl, Hsl, Hsv, Lab, LinearRgb, Luv, Rgb, pack_argb,
        rgb_from_u32, unpack_argb,
    };

    const TOLERANCE: f32 = 1e-3;

    const SAMPLES: [Color; 8] = [
        Color::BLACK,
        Color::WHITE,
        Color::RED,
        Color::GREEN,
        Color::BLUE,
        Color::rgb(0.2, 0.4, 0.6),
        Color::rgb(0.9, 0.1, 0.5),
        Color::rgb(0.5, 0.5, 0.5),
    ];

    const SPACES: [ColorSpace; 7] = [
        ColorSpace::Rgb,
        ColorSpace::LinearRgb,
        ColorSpace::Hsv,
        ColorSpace::Hsl,
        ColorSpace::Lab,
        ColorSpace::Hcl,
        ColorSpace::Luv,
    ];

    fn assert_close(actual: Color, expected: Color) {
        let delta = (actual.r() - expected.r())
            .abs()
            .max((actual.g() - expected.g()).abs())
            .max((actual.b() - expected.b()).abs());
        assert!(
            delta < TOLERANCE,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_round_trip_every_space() {
        for color in SAMPLES {
            assert_close(Color::from(color.linear_rgb()), color);
            assert_close(Color::from(color.xyz()), color);
            assert_close(Color::from(color.hsv()), color);
            assert_close(Color::from(color.hsl()), color);
            assert_close(Color::from(color.lab()), color);
            assert_close(Color::from(color.hcl()), color);
            assert_close(Color::from(color.luv()), color);
        }
    }

    #[test]
    fn test_known_coordinates() {
        let red = Color::RED.hsv();
        assert_eq!((red.h, red.s, red.v), (0.0, 1.0, 1.0));

        let green = Color::GREEN.hsl();
        assert!((green.h - 120.0).abs() < TOLERANCE);
        assert!((green.s - 1.0).abs() < TOLERANCE);
        assert!((green.l - 0.5).abs() < TOLERANCE);

        let white = Color::WHITE.lab();
        assert!((white.l - 1.0).abs() < TOLERANCE);
        assert!(white.a.abs() < TOLERANCE);
        assert!(white.b.abs() < TOLERANCE);

        let black = Color::BLACK.luv();
        assert_eq!(black, Luv::default());
    }

    #[test]
    fn test_conversions_from_spaces() {
        assert_close(
            Hsv {
                h: 240.0,
                s: 1.0,
                v: 1.0,
            }
            .into(),
            Color::BLUE,
        );
        assert_close(
            Hsl {
                h: 360.0,
                s: 1.0,
                l: 0.5,
            }
            .into(),
            Color::RED,
        );
        assert_close(LinearRgb { r: 1.0, g: 1.0, b: 1.0 }.into(), Color::WHITE);
        assert_close(
            Lab {
                l: 0.0,
                a: 0.0,
                b: 0.0,
            }
            .into(),
            Color::BLACK,
        );
        let hcl = Color::rgb(0.9, 0.1, 0.5).hcl();
        let turned = Hcl {
            h: hcl.h + 360.0,
            ..hcl
        };
        assert_close(turned.into(), Color::rgb(0.9, 0.1, 0.5));
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Color::rgb(0.2, 0.4, 0.6);
        let b = Color::rgb(0.9, 0.1, 0.5);
        for space in SPACES {
            assert_close(a.blend(b, 0.0, space), a);
            assert_close(a.blend(b, 1.0, space), b);
        }
    }

    #[test]
    fn test_blend_midpoint_rgb() {
        let mid = Color::BLACK.blend(Color::WHITE, 0.5, ColorSpace::Rgb);
        assert_close(mid, Color::rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_hue_blend_takes_short_arc() {
        let magenta_red = Hsv {
            h: 350.0,
            s: 1.0,
            v: 1.0,
        };
        let orange_red = Hsv {
            h: 10.0,
            s: 1.0,
            v: 1.0,
        };
        let mid = Color::from(magenta_red).blend(orange_red.into(), 0.5, ColorSpace::Hsv);
        let hue = mid.hsv().h;
        assert!(hue < 1.0 || hue > 359.0, "hue {hue} went the long way");
    }

    #[test]
    fn test_gray_blend_keeps_target_hue() {
        let mid = Color::WHITE.blend(Color::BLUE, 0.5, ColorSpace::Hsv);
        assert!((mid.hsv().h - 240.0).abs() < 0.5);
    }

    #[test]
    fn test_clamped() {
        let wild = Color::rgb(1.5, -0.2, 0.5);
        assert!(!wild.is_in_gamut());
        assert_eq!(wild.clamped(), Color::rgb(1.0, 0.0, 0.5));
        assert!(wild.clamped().is_in_gamut());
        assert_eq!(Color::rgb(f32::NAN, 0.3, 0.3).clamped(), Color::rgb(0.0, 0.3, 0.3));
    }

    #[test]
    fn test_device_encodings() {
        assert_eq!(Color::RED.to_argb(), 0xFFFF_0000);
        assert_eq!(Color::BLACK.to_argb(), 0xFF00_0000);
        assert_eq!(
            Color::from_hex(0x33_66_99).to_rgb8(),
            Rgb {
                r: 0x33,
                g: 0x66,
                b: 0x99
            }
        );
        assert_eq!(Color::rgb(2.0, -1.0, 0.5).to_rgb8(), Rgb { r: 255, g: 0, b: 128 });
    }

    #[test]
    fn test_argb_packing() {
        let rgb = rgb_from_u32(0x12_34_56);
        assert_eq!(pack_argb(rgb), 0xFF12_3456);
        assert_eq!(unpack_argb(0x0012_3456), rgb);
        assert_eq!(unpack_argb(pack_argb(rgb)), rgb);
    }
}
