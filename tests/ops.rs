//! Arithmetic and metric operations.

use quickcheck_macros::quickcheck;
use tetrad::{vec1, vec2, vec3, vec4, Error, Vector};

fn approx_eq<const N: usize>(a: Vector<f64, N>, b: Vector<f64, N>) -> bool {
    a.iter().zip(&b).all(|(a, b)| (a - b).abs() < 1e-9)
}

#[test]
fn length_of_pythagorean_triple() {
    assert_eq!(vec3(3.0f32, 4.0, 0.0).length(), 5.0);
    assert_eq!(vec2(3.0f64, 4.0).length_squared(), 25.0);
}

#[test]
fn single_component_length_is_absolute() {
    assert_eq!(vec1(-2.0f64).length(), 2.0);
    assert_eq!(vec1(2.0f64).length(), 2.0);
}

#[test]
fn normalized_scales_to_unit_length() {
    let n = vec2(3.0f64, 4.0).normalized().unwrap();
    assert!(approx_eq(n, vec2(0.6, 0.8)));
}

#[test]
fn normalizing_zero_vector_fails() {
    assert_eq!(Vector::<f32, 3>::zeros().normalized(), Err(Error::ZeroLength));
    assert_eq!(vec1(0.0f64).normalized(), Err(Error::ZeroLength));
}

#[quickcheck]
fn normalized_has_unit_length(x: i16, y: i16, z: i16) -> bool {
    let v = vec3(x as f64, y as f64, z as f64);
    match v.normalized() {
        Ok(n) => (n.length() - 1.0).abs() < 1e-9,
        Err(e) => e == Error::ZeroLength && (x, y, z) == (0, 0, 0),
    }
}

#[test]
fn add_sub_same_arity() {
    assert_eq!(vec3(1i32, 2, 3) + vec3(10, 20, 30), vec3(11, 22, 33));
    assert_eq!(vec3(1i32, 2, 3) - vec3(10, 20, 30), vec3(-9, -18, -27));
    assert_eq!(&vec2(1.5f32, 2.0) + &vec2(0.5, 1.0), vec2(2.0, 3.0));
}

#[test]
fn add_sub_smaller_arity_passes_through() {
    assert_eq!(vec4(1i32, 2, 3, 4) + vec2(10, 20), vec4(11, 22, 3, 4));
    assert_eq!(vec3(1i32, 2, 3) - vec1(1), vec3(0, 2, 3));

    let mut v = vec4(1.0f32, 1.0, 1.0, 1.0);
    v += vec3(1.0, 2.0, 3.0);
    v -= &vec1(0.5);
    assert_eq!(v, vec4(1.5, 3.0, 4.0, 1.0));
}

#[test]
fn scalar_broadcast() {
    assert_eq!(vec3(1i32, 2, 3) + 1, vec3(2, 3, 4));
    assert_eq!(vec2(1.0f64, 2.0) - 0.5, vec2(0.5, 1.5));
    assert_eq!(vec4(1u8, 2, 3, 4) * 2, vec4(2, 4, 6, 8));
    assert_eq!(vec2(3.0f32, 6.0) / 3.0, vec2(1.0, 2.0));

    let mut v = vec3(1i64, 2, 3);
    v += 10;
    v *= &2;
    assert_eq!(v, vec3(22, 24, 26));
}

#[test]
fn mixed_component_types() {
    let v = vec2(1.5f32, 2.5) + vec2(1i32, 2).cast::<f32>();
    assert_eq!(v, vec2(2.5, 4.5));
}

#[test]
fn negation() {
    assert_eq!(-vec3(1, -2, 0), vec3(-1, 2, 0));
}

#[quickcheck]
fn add_then_sub_is_identity(a: (i32, i32, i32), b: (i32, i32, i32)) -> bool {
    let a = vec3(a.0 as i64, a.1 as i64, a.2 as i64);
    let b = vec3(b.0 as i64, b.1 as i64, b.2 as i64);
    a + b - b == a
}

#[test]
fn dot_product() {
    assert_eq!(vec3(1, 2, 3).dot(&vec3(4, 5, 6)), 32);
    assert_eq!(vec1(3.0f32).dot(&vec1(-2.0)), -6.0);
}

#[test]
fn cross_product_follows_right_hand_rule() {
    let x = vec3(1, 0, 0);
    let y = vec3(0, 1, 0);
    assert_eq!(x.cross(&y), vec3(0, 0, 1));
    assert_eq!(y.cross(&x), vec3(0, 0, -1));
}

#[quickcheck]
fn cross_product_is_orthogonal(a: (i16, i16, i16), b: (i16, i16, i16)) -> bool {
    let a = vec3(a.0 as i64, a.1 as i64, a.2 as i64);
    let b = vec3(b.0 as i64, b.1 as i64, b.2 as i64);
    let c = a.cross(&b);
    c.dot(&a) == 0 && c.dot(&b) == 0
}

#[test]
fn distance_between_points() {
    assert_eq!(vec2(1.0f64, 1.0).distance(&vec2(4.0, 5.0)), 5.0);
}
