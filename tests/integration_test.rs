use birthday_curve::driver::{self, DriverArgs};
use birthday_curve::render;

fn init() {
    let _ = pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

#[test]
fn test_default_curve() {
    init();
    let output = driver::calc(&DriverArgs::default()).unwrap();
    assert_eq!(output.days, 365);
    assert_eq!(output.range, (1, 100));
    assert_eq!(output.threshold, 0.5);
    assert_eq!(output.tipping_point, 23);
    assert_eq!(output.points.len(), 100);
    for (i, point) in output.points.iter().enumerate() {
        assert_eq!(point.n, 1 + i as u64);
    }
    for pair in output.points.windows(2) {
        assert!(pair[0].probability <= pair[1].probability);
    }
    assert_eq!(output.points[0].probability, 0.0);
    assert!((output.points[22].probability - 0.5073).abs() < 1e-4);
    assert!((output.points[49].probability - 0.9704).abs() < 1e-4);
    assert!((output.points[69].probability - 0.99916).abs() < 1e-4);
    assert_eq!(output.first_above_threshold, Some(output.tipping_point));
}

#[test]
fn test_idempotence() {
    init();
    let a = driver::calc(&DriverArgs::default()).unwrap();
    let b = driver::calc(&DriverArgs::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_workbook() {
    init();
    let output = driver::calc(&DriverArgs::default()).unwrap();
    let mut workbook = render::build_workbook(&output).unwrap();
    let buf = workbook.save_to_buffer().unwrap();
    assert!(!buf.is_empty());
}
