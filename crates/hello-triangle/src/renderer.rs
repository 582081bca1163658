use std::{mem, ptr};

use gl::types::{GLfloat, GLsizei, GLsizeiptr, GLuint};

use crate::shader;

#[rustfmt::skip]
pub static VERTICES: [GLfloat; 9] = [
    -0.5, -0.5, 0.0,
     0.5, -0.5, 0.0,
     0.0,  0.5, 0.0,
];

const COMPONENTS: usize = 3;
const STRIDE: usize = COMPONENTS * mem::size_of::<GLfloat>();

pub const CLEAR_COLOR: [GLfloat; 4] = [0.2, 0.3, 0.3, 1.0];

/// Vertex data and program for one triangle. Needs its context current
/// whenever it is used or dropped.
pub struct Triangle {
    program: GLuint,
    vao: GLuint,
    vbo: GLuint,
}

impl Triangle {
    pub fn new(glsl_version: u32) -> anyhow::Result<Triangle> {
        let program = shader::build_program(glsl_version)?;
        let mut vao = 0;
        let mut vbo = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            // the VAO records the buffer binding and attribute layout below
            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                mem::size_of_val(&VERTICES) as GLsizeiptr,
                VERTICES.as_ptr().cast(),
                gl::STATIC_DRAW,
            );
            gl::VertexAttribPointer(
                0,
                COMPONENTS as i32,
                gl::FLOAT,
                gl::FALSE,
                STRIDE as GLsizei,
                ptr::null(),
            );
            gl::EnableVertexAttribArray(0);
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }
        log::debug!("triangle ready: program {}, vao {}, vbo {}", program, vao, vbo);
        Ok(Triangle { program, vao, vbo })
    }

    pub fn render(&self) {
        let [red, green, blue, alpha] = CLEAR_COLOR;
        unsafe {
            gl::ClearColor(red, green, blue, alpha);
            gl::Clear(gl::COLOR_BUFFER_BIT);
            gl::UseProgram(self.program);
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::TRIANGLES, 0, vertex_count());
        }
    }
}

impl Drop for Triangle {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteProgram(self.program);
        }
    }
}

fn vertex_count() -> GLsizei {
    (VERTICES.len() / COMPONENTS) as GLsizei
}

pub fn set_viewport(width: i32, height: i32) {
    unsafe { gl::Viewport(0, 0, width, height) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout() {
        assert_eq!(3, vertex_count());
        assert_eq!(12, STRIDE);
        assert_eq!(36, mem::size_of_val(&VERTICES));
    }

    #[test]
    fn triangle_is_inside_clip_space() {
        for vertex in VERTICES.chunks(COMPONENTS) {
            assert!(vertex.iter().all(|c| (-1.0..=1.0).contains(c)));
            assert_eq!(0.0, vertex[2]);
        }
    }
}
