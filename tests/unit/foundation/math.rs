use super::*;

#[test]
fn unit_waves_stay_in_unit_interval() {
    for i in 0..500 {
        let x = f64::from(i) * 0.37 - 40.0;
        let s = unit_sin(x);
        let c = unit_cos(x);
        assert!((0.0..=1.0).contains(&s));
        assert!((0.0..=1.0).contains(&c));
    }
    assert_eq!(unit_sin(0.0), 0.5);
    assert_eq!(unit_cos(0.0), 1.0);
}

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u8(255, 0), 0);
    assert_eq!(mul_div255_u8(200, 128), 100);
}

#[test]
fn unit_to_u8_clamps() {
    assert_eq!(unit_to_u8(-0.5), 0);
    assert_eq!(unit_to_u8(2.0), 255);
    assert_eq!(unit_to_u8(0.5), 128);
}
