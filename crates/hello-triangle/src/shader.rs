use anyhow::bail;
use gl::types::{GLchar, GLenum, GLint, GLsizei, GLuint};

pub const VERTEX_SHADER: &str = include_str!("shader/triangle.vert");
pub const FRAGMENT_SHADER: &str = include_str!("shader/triangle.frag");

/// Prefix `source` with a core-profile `#version` line.
pub fn with_version(glsl_version: u32, source: &str) -> String {
    format!("#version {} core\n{}", glsl_version, source)
}

fn stage_name(kind: GLenum) -> &'static str {
    match kind {
        gl::VERTEX_SHADER => "vertex",
        gl::FRAGMENT_SHADER => "fragment",
        gl::GEOMETRY_SHADER => "geometry",
        _ => "unknown",
    }
}

/// GL reports info logs as a buffer plus the count it wrote, without the NUL.
fn info_log_to_string(mut buf: Vec<u8>, written: GLsizei) -> String {
    buf.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buf).trim_end().to_owned()
}

pub fn compile_shader(kind: GLenum, source: &str) -> anyhow::Result<GLuint> {
    unsafe {
        let shader = gl::CreateShader(kind);
        let source_ptr = source.as_ptr() as *const GLchar;
        let source_len = source.len() as GLint;
        gl::ShaderSource(shader, 1, &source_ptr, &source_len);
        gl::CompileShader(shader);

        let mut status = GLint::from(gl::FALSE);
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
        if status == GLint::from(gl::FALSE) {
            let mut len = 0;
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
            let mut buf = vec![0u8; len.max(1) as usize];
            let mut written = 0;
            gl::GetShaderInfoLog(shader, len, &mut written, buf.as_mut_ptr() as *mut GLchar);
            gl::DeleteShader(shader);
            bail!(
                "{} shader compile error: {}",
                stage_name(kind),
                info_log_to_string(buf, written)
            );
        }
        Ok(shader)
    }
}

/// Link `shaders` into a program. The shader objects are deleted either way.
pub fn link_program(shaders: &[GLuint]) -> anyhow::Result<GLuint> {
    unsafe {
        let program = gl::CreateProgram();
        for &shader in shaders {
            gl::AttachShader(program, shader);
        }
        gl::LinkProgram(program);
        for &shader in shaders {
            gl::DetachShader(program, shader);
            gl::DeleteShader(shader);
        }

        let mut status = GLint::from(gl::FALSE);
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);
        if status == GLint::from(gl::FALSE) {
            let mut len = 0;
            gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
            let mut buf = vec![0u8; len.max(1) as usize];
            let mut written = 0;
            gl::GetProgramInfoLog(program, len, &mut written, buf.as_mut_ptr() as *mut GLchar);
            gl::DeleteProgram(program);
            bail!("shader program linking error: {}", info_log_to_string(buf, written));
        }
        Ok(program)
    }
}

/// Compile both stages and link them.
pub fn build_program(glsl_version: u32) -> anyhow::Result<GLuint> {
    let vertex = compile_shader(gl::VERTEX_SHADER, &with_version(glsl_version, VERTEX_SHADER))?;
    let fragment =
        match compile_shader(gl::FRAGMENT_SHADER, &with_version(glsl_version, FRAGMENT_SHADER)) {
            Ok(fragment) => fragment,
            Err(err) => {
                unsafe { gl::DeleteShader(vertex) };
                return Err(err);
            }
        };
    link_program(&[vertex, fragment])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_line_comes_first() {
        let source = with_version(410, VERTEX_SHADER);
        assert!(source.starts_with("#version 410 core\n"));
        assert!(source.contains("layout (location = 0) in vec3 aPos;"));
        assert!(!VERTEX_SHADER.contains("#version"));
        assert!(!FRAGMENT_SHADER.contains("#version"));
    }

    #[test]
    fn info_log_is_cut_at_written_length() {
        let mut buf = b"0:1(1): error: syntax error\n".to_vec();
        buf.extend_from_slice(&[0, 0, 0]);
        assert_eq!("0:1(1): error: syntax error", info_log_to_string(buf, 28));
        assert_eq!("", info_log_to_string(vec![0; 4], 0));
        assert_eq!("", info_log_to_string(Vec::new(), -1));
    }

    #[test]
    fn stage_names() {
        assert_eq!("vertex", stage_name(gl::VERTEX_SHADER));
        assert_eq!("fragment", stage_name(gl::FRAGMENT_SHADER));
        assert_eq!("unknown", stage_name(0));
    }
}
