#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use block_mover::simulation::params::{Params, ParamsError};
use block_mover::simulation::position::Position;

#[test]
fn test_default_params() {
    let params = Params::default();

    assert_eq!(params.window_width, 800.0);
    assert_eq!(params.window_height, 600.0);
    assert_eq!(params.block_size, 50.0);
    assert_eq!(params.speed, 5.0);
    assert_eq!(params.target_fps, 60);
    assert_eq!(params.background_color, [255, 255, 255]);
    assert_eq!(params.block_color, [255, 0, 0]);
    assert!(params.validate().is_ok());
    assert_eq!(params.start_position(), Position::new(400.0, 300.0));
}

#[test]
fn test_invalid_block_size() {
    for size in [0.0, -5.0, f32::NAN, f32::INFINITY] {
        let params = Params {
            block_size: size,
            ..Params::default()
        };
        assert!(
            matches!(params.validate(), Err(ParamsError::InvalidBlockSize(_))),
            "size {size} should be rejected"
        );
    }
}

#[test]
fn test_block_larger_than_window() {
    let params = Params {
        window_height: 40.0,
        ..Params::default()
    };

    match params.validate() {
        Err(ParamsError::BlockTooLarge {
            size,
            width,
            height,
        }) => {
            assert_eq!(size, 50.0);
            assert_eq!(width, 800.0);
            assert_eq!(height, 40.0);
        }
        other => panic!("expected BlockTooLarge, got {other:?}"),
    }
}

#[test]
fn test_block_filling_window_is_valid() {
    let params = Params {
        window_width: 50.0,
        window_height: 50.0,
        ..Params::default()
    };

    assert!(params.validate().is_ok());
    let bounds = params.bounds();
    assert_eq!(bounds.max_x, 0.0);
    assert_eq!(bounds.max_y, 0.0);
}

#[test]
fn test_invalid_speed() {
    for speed in [-1.0, f32::NAN, f32::NEG_INFINITY] {
        let params = Params {
            speed,
            ..Params::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamsError::InvalidSpeed(_))
        ));
    }

    let still = Params {
        speed: 0.0,
        ..Params::default()
    };
    assert!(still.validate().is_ok());
}

#[test]
fn test_zero_frame_rate() {
    let params = Params {
        target_fps: 0,
        ..Params::default()
    };

    assert!(matches!(params.validate(), Err(ParamsError::ZeroFrameRate)));
}

#[test]
fn test_from_json_fills_defaults() {
    let params = Params::from_json(r#"{ "speed": 8.0, "block_color": [0, 0, 255] }"#)
        .expect("valid document");

    assert_eq!(params.speed, 8.0);
    assert_eq!(params.block_color, [0, 0, 255]);
    assert_eq!(params.window_width, 800.0);
    assert_eq!(params.target_fps, 60);
}

#[test]
fn test_from_json_rejects_bad_documents() {
    assert!(matches!(
        Params::from_json("{ not json"),
        Err(ParamsError::Parse(_))
    ));
    assert!(matches!(
        Params::from_json(r#"{ "target_fps": 0 }"#),
        Err(ParamsError::ZeroFrameRate)
    ));
}

#[test]
fn test_error_messages() {
    let err = Params {
        target_fps: 0,
        ..Params::default()
    }
    .validate()
    .unwrap_err();
    assert_eq!(err.to_string(), "target frame rate must be at least 1");

    let err = Params {
        block_size: 900.0,
        ..Params::default()
    }
    .validate()
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "block of size 900 does not fit in a 800x600 window"
    );
}

#[test]
fn test_invalid_window_size() {
    let cases = [
        (f32::INFINITY, 600.0),
        (800.0, f32::NAN),
        (f32::MAX, 600.0),
        (800.6, 600.0),
        (800.0, 0.0),
        (-800.0, 600.0),
        (4e9, 600.0),
    ];

    for (width, height) in cases {
        let params = Params {
            window_width: width,
            window_height: height,
            ..Params::default()
        };
        assert!(
            matches!(
                params.validate(),
                Err(ParamsError::InvalidWindowSize { .. })
            ),
            "{width}x{height} window should be rejected"
        );
    }
}

#[test]
fn test_window_size_from_json() {
    // 1e39 overflows f32 to infinity while parsing
    assert!(matches!(
        Params::from_json(r#"{ "window_width": 1e39 }"#),
        Err(ParamsError::InvalidWindowSize { .. })
    ));
    assert!(matches!(
        Params::from_json(r#"{ "window_width": 800.6 }"#),
        Err(ParamsError::InvalidWindowSize { .. })
    ));

    let params = Params::from_json(r#"{ "window_width": 1024, "window_height": 768 }"#)
        .expect("whole pixel sizes are valid");
    assert_eq!(params.bounds().max_x, 974.0);
    assert_eq!(params.bounds().max_y, 718.0);
}
