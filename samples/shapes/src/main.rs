use std::process::ExitCode;

use clap::Parser;
use tetrad::{color::rgba, flatten, vec2, vec3, Vector};
use tetrad_mesh::{
    backend::Call,
    shape::{self, TRIANGLE_INDICES},
    IndexedMesh, RecordingBackend,
};

mod cli;

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Mesh(#[from] tetrad_mesh::Error),
}

/// Position, color, and texture coordinate of each corner of a unit square, ordered top-left,
/// bottom-left, top-right, bottom-right.
fn textured_vertices() -> Vec<f32> {
    let corners = [
        (vec3(0.0, 1.0, 0.0), rgba(0.0, 1.0, 0.0, 1.0), vec2(0.0, 1.0)),
        (vec3(0.0, 0.0, 0.0), rgba(1.0, 0.0, 0.0, 1.0), vec2(0.0, 0.0)),
        (vec3(1.0, 1.0, 0.0), rgba(0.0, 1.0, 0.0, 1.0), vec2(1.0, 1.0)),
        (vec3(1.0, 0.0, 0.0), rgba(0.0, 0.0, 1.0, 1.0), vec2(1.0, 0.0)),
    ];
    flatten(corners.into_iter().map(|(pos, color, tex)| {
        pos.widen::<4, 7>(color.into_array())
            .widen::<2, 9>(tex.into_array())
    }))
}

/// Position and color of each corner of a triangle.
fn gradient_vertices() -> Vec<f32> {
    let corners = [
        (vec3(-0.5, -1.0, 0.0), rgba(1.0, 0.0, 0.0, 1.0)),
        (vec3(0.0, 0.0, 0.0), rgba(0.0, 1.0, 0.0, 1.0)),
        (vec3(0.5, -1.0, 0.0), rgba(0.0, 0.0, 1.0, 1.0)),
    ];
    flatten(
        corners
            .into_iter()
            .map(|(pos, color)| Vector::<f32, 7>::from_fn(|i| if i < 3 { pos[i] } else { color[i - 3] })),
    )
}

fn build<'gl>(
    gl: &'gl RecordingBackend,
    args: &cli::Cli,
) -> Result<IndexedMesh<&'gl RecordingBackend>, Error> {
    let mesh = match args.shape {
        cli::ShapeKind::Rectangle => {
            shape::rectangle_from_bounds(gl, args.position.into_array(), args.size.into_array())?
        }
        #[rustfmt::skip]
        cli::ShapeKind::Triangle => shape::triangle(gl, [
            0.0, -0.5, 0.0, // bottom left
            1.0, -0.5, 0.0, // bottom right
            0.5,  0.5, 0.0, // top middle
        ])?,
        cli::ShapeKind::Textured => shape::rectangle(gl, &textured_vertices(), 9)?,
        cli::ShapeKind::Gradient => {
            IndexedMesh::new(gl, &gradient_vertices(), 7, &TRIANGLE_INDICES)?
        }
    };
    Ok(mesh)
}

fn describe(call: &Call) -> String {
    match call {
        Call::BufferData { target, data } => {
            format!("BufferData {{ target: {target:?}, bytes: {} }}", data.len())
        }
        Call::VertexAttribPointer(b) => format!(
            "VertexAttribPointer {{ slot: {}, usage: {:?}, size: {}, stride: {}, offset: {} }}",
            b.slot,
            b.usage,
            b.ty.size_elements(),
            b.stride,
            b.offset
        ),
        other => format!("{other:?}"),
    }
}

fn run(args: &cli::Cli) -> Result<(), Error> {
    let gl = RecordingBackend::new();

    let mesh = build(&gl, args)?;
    tracing::info!(
        shape = %args.shape,
        stride = mesh.stride(),
        indices = mesh.index_count(),
        "built shape"
    );

    for frame in 0..args.frames {
        tracing::trace!(frame, "drawing");
        mesh.draw();
    }
    mesh.close();

    for (i, call) in gl.calls().iter().enumerate() {
        println!("{i:>3}: {}", describe(call));
    }

    if !gl.live_handles().is_empty() {
        tracing::warn!(handles = ?gl.live_handles(), "handles leaked");
    }
    Ok(())
}

pub fn main() -> ExitCode {
    let args = cli::Cli::parse();
    cli::initialize_tracing(&args.log_filter, args.log_format);
    tracing::debug!(?args, "parsed arguments");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "failed to build shape");
            ExitCode::FAILURE
        }
    }
}
