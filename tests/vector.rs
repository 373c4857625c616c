//! Construction, access, and arity conversion.

use quickcheck_macros::quickcheck;
use tetrad::{flatten, truncate, vec1, vec2, vec3, vec4, widen, Error, Vec2, Vec3, Vec4, Vector};

#[quickcheck]
fn components_read_back(x: i64, y: i64, z: i64, w: i64) -> bool {
    let v1 = vec1(x);
    let v2 = vec2(x, y);
    let v3 = vec3(x, y, z);
    let v4 = vec4(x, y, z, w);
    v1[0] == x
        && (v2[0], v2[1]) == (x, y)
        && (v3[0], v3[1], v3[2]) == (x, y, z)
        && (v4[0], v4[1], v4[2], v4[3]) == (x, y, z, w)
        && v4.as_slice() == [x, y, z, w]
}

#[quickcheck]
fn named_accessors_match_indices(x: i32, y: i32, z: i32, w: i32) -> bool {
    let v = vec4(x, y, z, w);
    v.x() == v[0] && v.y() == v[1] && v.z() == v[2] && v.w() == v[3]
}

#[quickcheck]
fn access_past_end_fails(x: f32, y: f32, z: f32, offset: u8) -> bool {
    let v = vec3(x, y, z);
    let index = 3 + offset as usize;
    v.get(index) == Err(Error::IndexOutOfBounds { index, len: 3 })
}

#[test]
fn get_mut_writes_through() {
    let mut v = vec2(1, 2);
    *v.get_mut(1).unwrap() = 7;
    *v.x_mut() += 1;
    assert_eq!(v, vec2(2, 7));
    assert_eq!(
        v.get_mut(2).unwrap_err(),
        Error::IndexOutOfBounds { index: 2, len: 2 }
    );
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_past_end_panics() {
    let v = vec1(1.0f32);
    let _ = v[1];
}

#[test]
fn widen_appends_components() {
    assert_eq!(Vec3::from((vec2(1, 2), 3)), vec3(1, 2, 3));
    assert_eq!(Vec4::from((vec1(1), 2, 3, 4)), vec4(1, 2, 3, 4));
    assert_eq!(Vec4::from((vec3(1, 2, 3), 4)), vec4(1, 2, 3, 4));
    assert_eq!(Vec2::from((vec1(1), 2)), vec2(1, 2));
    assert_eq!(Vec3::from((vec1(1), 2, 3)), vec3(1, 2, 3));
    assert_eq!(Vec4::from((vec2(1, 2), 3, 4)), vec4(1, 2, 3, 4));

    let v: Vec4<i32> = widen(vec2(1, 2), [3, 4]);
    assert_eq!(v, vec4(1, 2, 3, 4));
    let v: Vec3<i32> = vec1(1).widen([2, 3]);
    assert_eq!(v, vec3(1, 2, 3));
}

#[test]
fn truncate_drops_trailing_components() {
    assert_eq!(vec4(1, 2, 3, 4).truncate::<2>(), vec2(1, 2));
    let v: Vec2<i32> = truncate(vec3(1, 2, 3));
    assert_eq!(v, vec2(1, 2));
    assert_eq!(vec3(1, 2, 3).truncate::<3>(), vec3(1, 2, 3));
}

#[quickcheck]
fn widen_then_truncate_is_identity(x: i16, y: i16, z: i16) -> bool {
    let v = vec2(x, y);
    Vec3::from((v, z)).truncate::<2>() == v
}

#[test]
fn cast_between_component_types() {
    let v: Vector<f32, 3> = vec3(1u8, 2, 255).cast();
    assert_eq!(v, vec3(1.0, 2.0, 255.0));
    assert_eq!(vec2(1.9f64, -2.9).cast::<i32>(), vec2(1, -2));
}

#[test]
fn flatten_packs_in_order() {
    let positions = [vec3(0.0f32, 1.0, 0.0), vec3(1.0, 0.0, 0.0)];
    assert_eq!(flatten(positions), [0.0, 1.0, 0.0, 1.0, 0.0, 0.0]);
}

#[test]
fn constructors() {
    assert_eq!(Vector::<u8, 4>::splat(3), vec4(3, 3, 3, 3));
    assert_eq!(Vector::<f64, 2>::zeros(), vec2(0.0, 0.0));
    assert_eq!(Vector::<i32, 3>::default(), vec3(0, 0, 0));
    assert_eq!(Vector::<usize, 3>::from_fn(|i| i * 2), vec3(0, 2, 4));
    assert_eq!(Vector::<i32, 4>::LEN, 4);
}

#[test]
fn display() {
    assert_eq!(vec3(1, -2, 3).to_string(), "(1, -2, 3)");
    assert_eq!(vec1(0.5).to_string(), "(0.5)");
}

#[test]
fn nalgebra_round_trip() {
    let v = vec3(1.0f32, 2.0, 3.0);
    let n: nalgebra::Vector3<f32> = v.into();
    assert_eq!(n, nalgebra::vector![1.0, 2.0, 3.0]);
    assert_eq!(Vector::from(n), v);

    let p: nalgebra::Point2<i32> = vec2(4, 5).into();
    assert_eq!(p, nalgebra::point![4, 5]);
    assert_eq!(Vector::from(p), vec2(4, 5));
}

#[test]
fn colors() {
    use tetrad::color::{rgb, rgba};
    assert_eq!(rgb(0.1f32, 0.2, 0.3).with_alpha(1.0), rgba(0.1, 0.2, 0.3, 1.0));
}
