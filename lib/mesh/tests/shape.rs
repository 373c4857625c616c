use tetrad_mesh::{
    backend::Call,
    shape::{self, QUAD_INDICES, TRIANGLE_INDICES},
    BufferType, Error, RecordingBackend,
};

fn uploaded(gl: &RecordingBackend, target: BufferType) -> Vec<u8> {
    gl.calls()
        .into_iter()
        .find_map(|call| match call {
            Call::BufferData { target: t, data } if t == target => Some(data),
            _ => None,
        })
        .unwrap()
}

fn index_bytes(data: &[u32]) -> Vec<u8> {
    data.iter().flat_map(|i| i.to_ne_bytes()).collect()
}

#[test]
fn rectangle_corners() {
    #[rustfmt::skip]
    let expected = [
        -1.0,  0.5, 0.0, // top left
        -1.0, -0.5, 0.0, // bottom left
         0.0,  0.5, 0.0, // top right
         0.0, -0.5, 0.0, // bottom right
    ];
    assert_eq!(
        shape::rectangle_vertices([-1.0, 0.5], [1.0, 1.0]),
        expected
    );
}

#[test]
fn rectangle_from_bounds() {
    let gl = RecordingBackend::new();
    let mesh = shape::rectangle_from_bounds(&gl, [0.25, 0.25], [0.5, 0.5]).unwrap();
    assert_eq!(mesh.stride(), 3);
    assert_eq!(mesh.index_count(), 6);
    assert_eq!(gl.enabled_slots(), vec![0]);
    assert_eq!(
        uploaded(&gl, BufferType::ElementArray),
        index_bytes(&QUAD_INDICES)
    );

    let expected = shape::rectangle_vertices([0.25, 0.25], [0.5, 0.5])
        .iter()
        .flat_map(|f| f.to_ne_bytes())
        .collect::<Vec<_>>();
    assert_eq!(uploaded(&gl, BufferType::Array), expected);
}

#[test]
fn textured_rectangle() {
    #[rustfmt::skip]
    let vertices = [
        0.0, 1.0, 0.0,   0.0, 1.0, 0.0, 1.0,   0.0, 1.0,
        0.0, 0.0, 0.0,   1.0, 0.0, 0.0, 1.0,   0.0, 0.0,
        1.0, 1.0, 0.0,   0.0, 1.0, 0.0, 1.0,   1.0, 1.0,
        1.0, 0.0, 0.0,   0.0, 0.0, 1.0, 1.0,   1.0, 0.0,
    ];
    let gl = RecordingBackend::new();
    let mesh = shape::rectangle(&gl, &vertices, 9).unwrap();
    assert_eq!(mesh.stride(), 9);
    assert_eq!(gl.enabled_slots(), vec![0, 1, 2]);
}

#[test]
fn rectangle_needs_four_vertices() {
    let gl = RecordingBackend::new();
    let res = shape::rectangle(&gl, &[0.0; 9], 3);
    assert_eq!(
        res.unwrap_err(),
        Error::VertexCount {
            expected: 4,
            found: 3
        }
    );
    assert!(gl.calls().is_empty());
}

#[test]
fn custom_rectangle_indices() {
    let gl = RecordingBackend::new();
    let indices = [0, 1, 2, 1, 3, 2];
    let _mesh = shape::rectangle_with_indices(&gl, &[0.0; 12], 3, indices).unwrap();
    assert_eq!(uploaded(&gl, BufferType::ElementArray), index_bytes(&indices));
}

#[test]
fn triangle() {
    let gl = RecordingBackend::new();
    #[rustfmt::skip]
    let mesh = shape::triangle(&gl, [
        0.0, -0.5, 0.0,
        1.0, -0.5, 0.0,
        0.5,  0.5, 0.0,
    ])
    .unwrap();
    assert_eq!(mesh.index_count(), 3);
    assert_eq!(
        uploaded(&gl, BufferType::ElementArray),
        index_bytes(&TRIANGLE_INDICES)
    );

    gl.clear_calls();
    mesh.draw();
    assert!(gl
        .calls()
        .iter()
        .any(|c| matches!(c, Call::DrawElements(3))));
}

#[test]
fn triangle_with_indices() {
    let gl = RecordingBackend::new();
    let _mesh = shape::triangle_with_indices(&gl, [0.0; 9], [2, 1, 0]).unwrap();
    assert_eq!(
        uploaded(&gl, BufferType::ElementArray),
        index_bytes(&[2, 1, 0])
    );
}
